use crate::core::report::{render_lines, LineTrim};
use crate::domain::model::Parcel;
use crate::domain::ports::{ParcelRecord, PostOfficeManagement};
use crate::utils::error::{RegistryError, Result};
use std::cmp::Ordering;

/// Fixed, id-ordered collection of parcels.
///
/// The backing vector is sorted by id once at construction and never touched
/// again, so every query is a read over the same sequence.
#[derive(Debug, Clone)]
pub struct ParcelRegistry<P = Parcel> {
    parcels: Vec<P>,
}

impl<P: ParcelRecord> ParcelRegistry<P> {
    /// Builds a registry from values that cannot be absent.
    pub fn new<I>(parcels: I) -> Self
    where
        I: IntoIterator<Item = P>,
    {
        let mut parcels: Vec<P> = parcels.into_iter().collect();
        parcels.sort_by_key(|parcel| parcel.id());

        tracing::debug!("Parcel registry built with {} parcels", parcels.len());
        Self { parcels }
    }

    /// Builds a registry from a nullable collection of nullable parcels.
    ///
    /// Either every parcel is taken or none is: the first absent value aborts
    /// construction with [`RegistryError::NullInput`].
    pub fn try_new<I>(parcels: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = Option<P>>,
    {
        let parcels = parcels.ok_or_else(|| RegistryError::null_input("parcel collection"))?;

        let parcels = parcels
            .into_iter()
            .enumerate()
            .map(|(index, parcel)| {
                parcel.ok_or_else(|| {
                    RegistryError::null_input(format!("parcel at position {}", index))
                })
            })
            .collect::<Result<Vec<P>>>()?;

        Ok(Self::new(parcels))
    }

    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }

    /// Parcels in ascending id order.
    pub fn parcels(&self) -> &[P] {
        &self.parcels
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.parcels.iter()
    }

    fn search_by_id(&self, id: i32) -> Option<usize> {
        let mut left = 0usize;
        let mut right = self.parcels.len().checked_sub(1)?;

        while left <= right {
            let mid = left + (right - left) / 2;
            match self.parcels[mid].id().cmp(&id) {
                Ordering::Equal => return Some(mid),
                Ordering::Less => left = mid + 1,
                // mid == 0 means nothing is left below it
                Ordering::Greater => right = mid.checked_sub(1)?,
            }
        }

        None
    }
}

impl<P: ParcelRecord> PostOfficeManagement for ParcelRegistry<P> {
    type Parcel = P;

    fn box_by_id(&self, id: i32) -> Option<&P> {
        let found = self.search_by_id(id).map(|index| &self.parcels[index]);
        tracing::trace!(id, found = found.is_some(), "Parcel lookup");
        found
    }

    fn desc_sorted_boxes_by_weight(&self) -> String {
        let mut sorted: Vec<&P> = self.parcels.iter().collect();
        // stable: equal weights stay in id order
        sorted.sort_by(|a, b| b.weight().total_cmp(&a.weight()));
        render_lines(sorted, LineTrim::Trim)
    }

    fn asc_sorted_boxes_by_cost(&self) -> String {
        let mut sorted: Vec<&P> = self.parcels.iter().collect();
        sorted.sort_by(|a, b| a.cost().total_cmp(&b.cost()));
        render_lines(sorted, LineTrim::Keep)
    }

    fn boxes_by_recipient(&self, recipient: Option<&str>) -> Result<Vec<&P>> {
        let recipient = recipient.ok_or_else(|| RegistryError::null_input("recipient"))?;

        let matches: Vec<&P> = self
            .parcels
            .iter()
            .filter(|parcel| parcel.recipient() == recipient)
            .collect();

        tracing::trace!(recipient, count = matches.len(), "Recipient filter");
        Ok(matches)
    }
}

impl<P: ParcelRecord> FromIterator<P> for ParcelRegistry<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, P> IntoIterator for &'a ParcelRegistry<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.parcels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParcelRegistry {
        ParcelRegistry::new(vec![
            Parcel::new(3, 5.0, 10.0, "A"),
            Parcel::new(1, 2.0, 30.0, "B"),
            Parcel::new(2, 9.0, 20.0, "A"),
        ])
    }

    fn ids<'a>(parcels: impl IntoIterator<Item = &'a Parcel>) -> Vec<i32> {
        parcels.into_iter().map(|p| p.id()).collect()
    }

    #[test]
    fn test_construction_sorts_by_id() {
        let registry = sample();
        assert_eq!(ids(registry.parcels()), vec![1, 2, 3]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_try_new_rejects_missing_collection() {
        let result = ParcelRegistry::<Parcel>::try_new(None::<Vec<Option<Parcel>>>);
        assert!(matches!(result, Err(RegistryError::NullInput { .. })));
    }

    #[test]
    fn test_try_new_rejects_null_element() {
        let input = vec![
            Some(Parcel::new(1, 1.0, 1.0, "A")),
            None,
            Some(Parcel::new(2, 1.0, 1.0, "B")),
        ];
        let err = ParcelRegistry::try_new(Some(input)).unwrap_err();
        assert_eq!(err.to_string(), "Null input: parcel at position 1");
    }

    #[test]
    fn test_try_new_accepts_complete_input() {
        let input = vec![Some(Parcel::new(2, 1.0, 1.0, "A")), Some(Parcel::new(1, 1.0, 1.0, "B"))];
        let registry = ParcelRegistry::try_new(Some(input)).unwrap();
        assert_eq!(ids(&registry), vec![1, 2]);
    }

    #[test]
    fn test_box_by_id_finds_every_parcel() {
        let registry = sample();
        for id in 1..=3 {
            assert_eq!(registry.box_by_id(id).map(|p| p.id()), Some(id));
        }
    }

    #[test]
    fn test_box_by_id_missing() {
        let registry = sample();
        assert!(registry.box_by_id(0).is_none());
        assert!(registry.box_by_id(4).is_none());
        assert!(registry.box_by_id(i32::MIN).is_none());
        assert!(registry.box_by_id(i32::MAX).is_none());
    }

    #[test]
    fn test_box_by_id_on_empty_registry() {
        let registry: ParcelRegistry = ParcelRegistry::new(Vec::new());
        assert!(registry.is_empty());
        assert!(registry.box_by_id(1).is_none());
    }

    #[test]
    fn test_box_by_id_single_parcel() {
        let registry = ParcelRegistry::new(vec![Parcel::new(10, 1.0, 1.0, "A")]);
        assert!(registry.box_by_id(10).is_some());
        assert!(registry.box_by_id(9).is_none());
        assert!(registry.box_by_id(11).is_none());
    }

    #[test]
    fn test_box_by_id_with_negative_ids() {
        let registry: ParcelRegistry = (-5..5)
            .map(|id| Parcel::new(id * 3, 1.0, 1.0, "R"))
            .collect();
        for id in -5..5 {
            assert_eq!(registry.box_by_id(id * 3).map(|p| p.id()), Some(id * 3));
            assert!(registry.box_by_id(id * 3 + 1).is_none());
        }
    }

    #[test]
    fn test_weight_report_order() {
        let report = sample().desc_sorted_boxes_by_weight();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "2      9.00     20.00  A",
                "3      5.00     10.00  A",
                "1      2.00     30.00  B",
            ]
        );
    }

    #[test]
    fn test_cost_report_keeps_padding() {
        let report = sample().asc_sorted_boxes_by_cost();
        assert_eq!(
            report,
            "     3      5.00     10.00  A\n     2      9.00     20.00  A\n     1      2.00     30.00  B"
        );
    }

    #[test]
    fn test_equal_weights_keep_id_order() {
        let registry = ParcelRegistry::new(vec![
            Parcel::new(4, 1.0, 1.0, "A"),
            Parcel::new(2, 1.0, 2.0, "B"),
            Parcel::new(3, 7.0, 3.0, "C"),
            Parcel::new(1, 1.0, 4.0, "D"),
        ]);
        let order: Vec<String> = registry
            .desc_sorted_boxes_by_weight()
            .lines()
            .map(|line| line.split_whitespace().next().unwrap_or_default().to_string())
            .collect();
        assert_eq!(order, vec!["3", "1", "2", "4"]);
    }

    #[test]
    fn test_reports_on_empty_registry() {
        let registry: ParcelRegistry = ParcelRegistry::new(Vec::new());
        assert_eq!(registry.desc_sorted_boxes_by_weight(), "");
        assert_eq!(registry.asc_sorted_boxes_by_cost(), "");
    }

    #[test]
    fn test_boxes_by_recipient() {
        let registry = sample();
        assert_eq!(ids(registry.boxes_by_recipient(Some("A")).unwrap()), vec![2, 3]);
        assert_eq!(ids(registry.boxes_by_recipient(Some("B")).unwrap()), vec![1]);
        assert!(registry.boxes_by_recipient(Some("Z")).unwrap().is_empty());
        // exact match only
        assert!(registry.boxes_by_recipient(Some("a")).unwrap().is_empty());
    }

    #[test]
    fn test_boxes_by_recipient_rejects_none() {
        let err = sample().boxes_by_recipient(None).unwrap_err();
        assert!(matches!(err, RegistryError::NullInput { .. }));
    }

    #[test]
    fn test_recipient_results_share_registry_parcels() {
        let registry = sample();
        let found = registry.boxes_by_recipient(Some("B")).unwrap();
        let stored = registry.box_by_id(1).unwrap();
        assert!(std::ptr::eq(found[0], stored));
    }

    #[test]
    fn test_registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParcelRegistry>();
    }
}
