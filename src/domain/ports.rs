use crate::utils::error::Result;
use std::fmt::Display;

/// Read capability the registry needs from a parcel.
///
/// The `Display` rendering is what ends up in the sorted reports.
pub trait ParcelRecord: Display {
    fn id(&self) -> i32;
    fn weight(&self) -> f64;
    fn cost(&self) -> f64;
    fn recipient(&self) -> &str;
}

/// Query surface of a post office's parcel storage.
pub trait PostOfficeManagement {
    type Parcel: ParcelRecord;

    /// Looks a parcel up by id. Absence is `None`, not an error.
    fn box_by_id(&self, id: i32) -> Option<&Self::Parcel>;

    /// One rendered parcel per line, heaviest first, each line trimmed.
    fn desc_sorted_boxes_by_weight(&self) -> String;

    /// One rendered parcel per line, cheapest first, lines left as rendered.
    fn asc_sorted_boxes_by_cost(&self) -> String;

    /// All parcels addressed to `recipient`, in id order.
    ///
    /// Fails with `NullInput` when `recipient` is `None`.
    fn boxes_by_recipient(&self, recipient: Option<&str>) -> Result<Vec<&Self::Parcel>>;
}

pub trait ConfigProvider {
    fn parcels_path(&self) -> &str;
    fn format(&self) -> Option<&str>;
}
