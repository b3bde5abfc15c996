use crate::core::registry::ParcelRegistry;
use crate::domain::model::Parcel;
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::{validate_path, Validate};
use serde::Deserialize;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// On-disk layout of a parcel source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParcelFormat {
    Json,
    Csv,
}

impl ParcelFormat {
    pub const NAMES: [&'static str; 2] = ["json", "csv"];

    /// Guesses the format from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for ParcelFormat {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(RegistryError::InvalidConfigValueError {
                field: "format".to_string(),
                value: s.to_string(),
                reason: format!("Supported formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

impl fmt::Display for ParcelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// CSV row; every cell optional so a blank row reads as an absent parcel.
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: Option<i32>,
    weight: Option<f64>,
    cost: Option<f64>,
    recipient: Option<String>,
}

impl CsvRow {
    fn into_parcel(self, line: u64) -> Result<Option<Parcel>> {
        match (self.id, self.weight, self.cost, self.recipient) {
            (None, None, None, None) => Ok(None),
            (Some(id), Some(weight), Some(cost), Some(recipient)) => {
                Ok(Some(Parcel::new(id, weight, cost, recipient)))
            }
            _ => Err(RegistryError::ValidationError {
                message: format!("incomplete parcel record on line {}", line),
            }),
        }
    }
}

fn validated(parcels: &[Option<Parcel>]) -> Result<()> {
    parcels.iter().flatten().try_for_each(Validate::validate)
}

/// Reads a JSON array of parcel objects; `null` entries are kept as absent values.
pub fn read_json<R: Read>(reader: R) -> Result<ParcelRegistry> {
    let parcels: Option<Vec<Option<Parcel>>> = serde_json::from_reader(reader)?;
    if let Some(parcels) = &parcels {
        validated(parcels)?;
    }
    ParcelRegistry::try_new(parcels)
}

/// Reads `id,weight,cost,recipient` rows; a row of empty cells is an absent parcel.
pub fn read_csv<R: Read>(reader: R) -> Result<ParcelRegistry> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Fields)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut record = csv::StringRecord::new();
    let mut parcels = Vec::new();

    while csv_reader.read_record(&mut record)? {
        let row: CsvRow = record.deserialize(Some(&headers))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        parcels.push(row.into_parcel(line)?);
    }

    validated(&parcels)?;
    ParcelRegistry::try_new(Some(parcels))
}

pub fn read_parcels<R: Read>(reader: R, format: ParcelFormat) -> Result<ParcelRegistry> {
    match format {
        ParcelFormat::Json => read_json(reader),
        ParcelFormat::Csv => read_csv(reader),
    }
}

/// Loads a registry from a file, inferring the format from the extension when
/// none is given.
pub fn load_registry<P: AsRef<Path>>(path: P, format: Option<ParcelFormat>) -> Result<ParcelRegistry> {
    let path = path.as_ref();
    validate_path("parcels", &path.to_string_lossy())?;

    let format = match format.or_else(|| ParcelFormat::from_path(path)) {
        Some(format) => format,
        None => {
            return Err(RegistryError::ConfigValidationError {
                field: "format".to_string(),
                message: format!("cannot infer parcel format from '{}'", path.display()),
            })
        }
    };

    tracing::debug!("Loading parcels from {} as {}", path.display(), format);
    let file = std::fs::File::open(path)?;
    let registry = read_parcels(std::io::BufReader::new(file), format)?;
    tracing::info!("Loaded {} parcels from {}", registry.len(), path.display());

    Ok(registry)
}
