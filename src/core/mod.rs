pub mod registry;
pub mod report;

pub use crate::domain::model::Parcel;
pub use crate::domain::ports::{ConfigProvider, ParcelRecord, PostOfficeManagement};
pub use crate::utils::error::Result;
