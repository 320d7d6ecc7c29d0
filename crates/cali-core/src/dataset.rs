//! The immutable country dataset
//!
//! A [`Dataset`] is produced once by the offline fetch step, loaded at
//! startup and never mutated. Records are held behind [`Arc`] so the
//! [`NameIndex`](crate::NameIndex) can share them instead of copying.
//!
//! Raw documents may contain records with missing metrics. Those are
//! dropped while loading and never reach the dataset.

use std::cmp::Ordering;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{DatasetError, DatasetResult};
use crate::metric::{CountryRecord, Metric, MetricKind};

/// Dataset baked into the binary by the fetch step
pub const EMBEDDED_DATASET: &str = include_str!("../data/countries.json");

/// A country record as it appears in the dataset document
///
/// Every metric is optional so that incomplete records can be tolerated
/// and filtered instead of failing the whole document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCountryRecord {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub population: Option<Metric>,
    #[serde(default)]
    pub gdp: Option<Metric>,
    #[serde(default)]
    pub gdp_per_capita: Option<Metric>,
    #[serde(default)]
    pub area: Option<Metric>,
}

impl RawCountryRecord {
    /// Convert into a complete record
    ///
    /// Returns the first missing metric kind on failure.
    pub fn into_complete(self) -> Result<CountryRecord, MetricKind> {
        let population = self.population.ok_or(MetricKind::Population)?;
        let gdp = self.gdp.ok_or(MetricKind::Gdp)?;
        let gdp_per_capita = self.gdp_per_capita.ok_or(MetricKind::GdpPerCapita)?;
        let area = self.area.ok_or(MetricKind::Area)?;

        Ok(CountryRecord {
            name: self.name,
            code: self.code,
            population,
            gdp,
            gdp_per_capita,
            area,
        })
    }
}

/// The dataset document written by the fetch step
#[derive(Debug, Clone, Deserialize)]
pub struct RawDataset {
    /// When the fetch step ran
    pub generated: DateTime<Utc>,
    /// The reference region record
    #[serde(rename = "california", alias = "reference")]
    pub reference: RawCountryRecord,
    /// Country records, in any order
    pub countries: Vec<RawCountryRecord>,
}

/// Immutable, validated dataset
#[derive(Debug, Clone)]
pub struct Dataset {
    generated: DateTime<Utc>,
    reference: Arc<CountryRecord>,
    countries: Vec<Arc<CountryRecord>>,
}

impl Dataset {
    /// Build a dataset from complete records
    ///
    /// Countries are sorted by canonical name. The reference region must have
    /// finite, non-zero metrics since every ratio divides by them.
    pub fn new(
        generated: DateTime<Utc>,
        reference: CountryRecord,
        countries: Vec<CountryRecord>,
    ) -> DatasetResult<Self> {
        validate_reference(&reference)?;

        if countries.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut countries: Vec<Arc<CountryRecord>> = countries.into_iter().map(Arc::new).collect();
        countries.sort_by(|a, b| compare_names(&a.name, &b.name));

        Ok(Self {
            generated,
            reference: Arc::new(reference),
            countries,
        })
    }

    /// Build a dataset from a raw document, dropping incomplete records
    pub fn from_raw(raw: RawDataset) -> DatasetResult<Self> {
        let reference_name = raw.reference.name.clone();
        let reference = raw.reference.into_complete().map_err(|kind| {
            DatasetError::IncompleteReference {
                name: reference_name,
                metric: kind.key(),
            }
        })?;

        let total = raw.countries.len();
        let countries: Vec<CountryRecord> = raw
            .countries
            .into_iter()
            .filter_map(|record| {
                let name = record.name.clone();
                match record.into_complete() {
                    Ok(complete) => Some(complete),
                    Err(missing) => {
                        warn!(country = %name, missing = missing.key(), "Dropping incomplete record");
                        None
                    }
                }
            })
            .collect();

        if countries.len() < total {
            debug!(
                kept = countries.len(),
                dropped = total - countries.len(),
                "Filtered incomplete records"
            );
        }

        Self::new(raw.generated, reference, countries)
    }

    /// Parse a dataset document
    pub fn from_json(json: &str) -> DatasetResult<Self> {
        let raw: RawDataset = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Load a dataset document from disk
    pub fn load(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let dataset = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            countries = dataset.len(),
            generated = %dataset.generated,
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Load the dataset compiled into the binary
    pub fn embedded() -> DatasetResult<Self> {
        Self::from_json(EMBEDDED_DATASET)
    }

    /// When the underlying data was fetched
    pub fn generated(&self) -> DateTime<Utc> {
        self.generated
    }

    /// The reference region every country is compared against
    pub fn reference(&self) -> &Arc<CountryRecord> {
        &self.reference
    }

    /// All countries, sorted by canonical name
    pub fn countries(&self) -> &[Arc<CountryRecord>] {
        &self.countries
    }

    /// Number of countries (excluding the reference region)
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Check if the dataset has no countries
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

fn validate_reference(reference: &CountryRecord) -> DatasetResult<()> {
    for kind in MetricKind::ALL {
        let value = reference.metric(kind).value;
        if !value.is_finite() || value == 0.0 {
            return Err(DatasetError::ZeroReference {
                name: reference.name.clone(),
                metric: kind.key(),
                value,
            });
        }
    }
    Ok(())
}

/// Case-insensitive ordering, ties broken by exact bytes so sorting is total
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
