use crate::core::report::{render_lines, LineTrim};
use crate::domain::ports::PostOfficeManagement;
use crate::utils::error::Result;

/// One of the four registry queries, as selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::Subcommand))]
pub enum Query {
    /// Look a parcel up by id
    ById {
        #[cfg_attr(feature = "cli", arg(allow_negative_numbers = true))]
        id: i32,
    },
    /// List parcels, heaviest first
    ByWeight,
    /// List parcels, cheapest first
    ByCost,
    /// List parcels addressed to a recipient
    ByRecipient { recipient: String },
}

/// Runs `query` and returns the text to print.
pub fn run_query<M: PostOfficeManagement>(registry: &M, query: &Query) -> Result<String> {
    tracing::debug!("Running query {:?}", query);

    let output = match query {
        Query::ById { id } => match registry.box_by_id(*id) {
            Some(parcel) => parcel.to_string(),
            None => {
                tracing::info!("No parcel with id {}", id);
                String::new()
            }
        },
        Query::ByWeight => registry.desc_sorted_boxes_by_weight(),
        Query::ByCost => registry.asc_sorted_boxes_by_cost(),
        Query::ByRecipient { recipient } => {
            let parcels = registry.boxes_by_recipient(Some(recipient.as_str()))?;
            tracing::info!("{} parcels for recipient '{}'", parcels.len(), recipient);
            render_lines(parcels, LineTrim::Keep)
        }
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::ParcelRegistry;
    use crate::domain::model::Parcel;

    fn registry() -> ParcelRegistry {
        ParcelRegistry::new(vec![
            Parcel::new(3, 5.0, 10.0, "A"),
            Parcel::new(1, 2.0, 30.0, "B"),
            Parcel::new(2, 9.0, 20.0, "A"),
        ])
    }

    #[test]
    fn test_by_id() {
        let output = run_query(&registry(), &Query::ById { id: 2 }).unwrap();
        assert_eq!(output, "     2      9.00     20.00  A");

        let missing = run_query(&registry(), &Query::ById { id: 42 }).unwrap();
        assert!(missing.is_empty());
    }

    #[test]
    fn test_by_recipient() {
        let output = run_query(
            &registry(),
            &Query::ByRecipient {
                recipient: "A".to_string(),
            },
        )
        .unwrap();
        assert_eq!(output.lines().count(), 2);
        assert!(output.starts_with("     2"));
    }

    #[test]
    fn test_reports_match_registry() {
        let registry = registry();
        assert_eq!(
            run_query(&registry, &Query::ByWeight).unwrap(),
            registry.desc_sorted_boxes_by_weight()
        );
        assert_eq!(
            run_query(&registry, &Query::ByCost).unwrap(),
            registry.asc_sorted_boxes_by_cost()
        );
    }
}
