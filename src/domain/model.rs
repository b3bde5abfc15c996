use crate::domain::ports::ParcelRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single shipped item.
///
/// Parcels are immutable once built; the registry only ever hands out shared
/// references to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    id: i32,
    weight: f64,
    cost: f64,
    recipient: String,
}

impl Parcel {
    pub fn new(id: i32, weight: f64, cost: f64, recipient: impl Into<String>) -> Self {
        Self {
            id,
            weight,
            cost,
            recipient: recipient.into(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

/// Fixed-width report line: `id`, `weight`, `cost` right-aligned, then the recipient.
impl fmt::Display for Parcel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>6}{:>10.2}{:>10.2}  {}",
            self.id, self.weight, self.cost, self.recipient
        )
    }
}

impl ParcelRecord for Parcel {
    fn id(&self) -> i32 {
        self.id
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn cost(&self) -> f64 {
        self.cost
    }

    fn recipient(&self) -> &str {
        &self.recipient
    }
}
