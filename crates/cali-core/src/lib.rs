//! # Cali Core
//!
//! Data layer for Bigger Than Cali: the country dataset, the name index
//! used to resolve user queries, and the comparison against the reference
//! region.
//!
//! ## Core Components
//!
//! - [`Dataset`]: immutable table of [`CountryRecord`]s plus the reference region
//! - [`NameIndex`]: case-insensitive lookup over canonical names and aliases
//! - [`compare_verdict`] / [`format_ratio`]: population verdict and per-metric ratios
//! - [`display_name`]: official name → common name
//!
//! ## Example
//!
//! ```rust,ignore
//! use cali_core::{Dataset, NameIndex, compare_verdict, display_name};
//!
//! let dataset = Dataset::embedded()?;
//! let index = NameIndex::from_dataset(&dataset);
//!
//! if let Some(country) = index.lookup("South Korea") {
//!     let verdict = compare_verdict(country, dataset.reference());
//!     println!("{} has {}", display_name(&country.name), verdict.summary);
//! }
//! ```

pub mod compare;
pub mod dataset;
pub mod error;
pub mod flags;
pub mod index;
pub mod metric;
pub mod names;

pub use compare::{Verdict, compare_verdict, format_ratio};
pub use dataset::{Dataset, EMBEDDED_DATASET, RawCountryRecord, RawDataset};
pub use error::{DatasetError, DatasetResult};
pub use flags::{REFERENCE_FLAG_URL, flag_url};
pub use index::{NameIndex, normalize_key};
pub use metric::{CountryRecord, Metric, MetricKind};
pub use names::{ALIASES, display_name};
