//! Metric and country record types

use serde::{Deserialize, Serialize};

/// A single statistic with its provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Measured value, in the unit implied by the metric kind
    pub value: f64,
    /// Year of observation; absent for fixed constants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Human-readable source label, e.g. "World Bank"
    pub source: String,
    /// Canonical page of the source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Metric {
    /// Create a metric with a value and source label
    pub fn new(value: f64, source: impl Into<String>) -> Self {
        Self {
            value,
            year: None,
            source: source.into(),
            url: None,
        }
    }

    /// Set the observation year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Set the source URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Tooltip text describing where the value came from
    ///
    /// `"Source: {source} ({year})"` when the year is known, otherwise
    /// `"Source: {source}"`.
    pub fn attribution(&self) -> String {
        match self.year {
            Some(year) => format!("Source: {} ({})", self.source, year),
            None => format!("Source: {}", self.source),
        }
    }
}

/// The four metrics compared on every page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Population, in millions
    Population,
    /// Gross domestic product, in billions of USD
    Gdp,
    /// GDP per capita, in USD per person
    GdpPerCapita,
    /// Land area, in square kilometers
    Area,
}

impl MetricKind {
    /// All kinds, in display order
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Population,
        MetricKind::Gdp,
        MetricKind::GdpPerCapita,
        MetricKind::Area,
    ];

    /// Field name used in the dataset document
    pub fn key(&self) -> &'static str {
        match self {
            MetricKind::Population => "population",
            MetricKind::Gdp => "gdp",
            MetricKind::GdpPerCapita => "gdpPerCapita",
            MetricKind::Area => "area",
        }
    }
}

/// A country (or the reference region) with all four metrics present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    /// Canonical name as published by the statistical source
    pub name: String,
    /// Two-letter region code, or a custom code for the reference region
    pub code: String,
    pub population: Metric,
    pub gdp: Metric,
    pub gdp_per_capita: Metric,
    pub area: Metric,
}

impl CountryRecord {
    /// Get a metric by kind
    pub fn metric(&self, kind: MetricKind) -> &Metric {
        match kind {
            MetricKind::Population => &self.population,
            MetricKind::Gdp => &self.gdp,
            MetricKind::GdpPerCapita => &self.gdp_per_capita,
            MetricKind::Area => &self.area,
        }
    }
}
