use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors raised while building a dataset
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: outcome class {value} is not 0 or 1")]
    InvalidOutcome { row: usize, value: i64 },

    #[error("dataset contains no launch records")]
    Empty,
}

// ---------------------------------------------------------------------------
// Outcome – binary launch classification
// ---------------------------------------------------------------------------

/// Outcome of a launch, encoded in the source data as the binary
/// `class` column (1 = success, 0 = failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Numeric class value as stored in the source table.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn from_class(value: i64, row: usize) -> Result<Self, DatasetError> {
        match value {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(DatasetError::InvalidOutcome { row, value: other }),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub site: String,
    pub payload_mass_kg: f64,
    pub booster_category: String,
    pub outcome: Outcome,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with values derived once at construction.
///
/// `sites` and `booster_categories` keep first-seen (row encounter) order;
/// every ordering derived from them downstream inherits that determinism.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchDataset {
    /// All launches (rows), in file order.
    pub records: Vec<LaunchRecord>,
    /// Distinct launch sites in first-seen order.
    pub sites: Vec<String>,
    /// Distinct booster version categories in first-seen order.
    pub booster_categories: Vec<String>,
    /// Smallest payload mass in the table (kg).
    pub min_payload: f64,
    /// Largest payload mass in the table (kg).
    pub max_payload: f64,
}

impl LaunchDataset {
    /// Build the derived indices and payload extremes from the loaded rows.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories: Vec<String> = Vec::new();
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;

        for rec in &records {
            if !sites.contains(&rec.site) {
                sites.push(rec.site.clone());
            }
            if !booster_categories.contains(&rec.booster_category) {
                booster_categories.push(rec.booster_category.clone());
            }
            min_payload = min_payload.min(rec.payload_mass_kg);
            max_payload = max_payload.max(rec.payload_mass_kg);
        }

        Ok(LaunchDataset {
            records,
            sites,
            booster_categories,
            min_payload,
            max_payload,
        })
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
