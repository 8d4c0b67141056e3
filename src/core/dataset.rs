use std::borrow::Borrow;
use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Stable identifier of one value series (`"y0"`, `"y1"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(String);

impl SeriesId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SeriesId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SeriesId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SeriesId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One value column aligned sample-for-sample with the dataset x-series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: SeriesId,
    pub label: String,
    pub color: Color,
    pub values: Vec<f64>,
}

impl Series {
    #[must_use]
    pub fn new(
        id: impl Into<SeriesId>,
        label: impl Into<String>,
        color: Color,
        values: Vec<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color,
            values,
        }
    }
}

/// Immutable, validated chart data: a strictly increasing x-series plus one or
/// more equally long value series.
///
/// A `Dataset` can only be obtained through a validating constructor, so the
/// engine never has to re-check lengths or ordering afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    x_values: Vec<f64>,
    series: Vec<Series>,
    positions: IndexMap<SeriesId, usize>,
}

impl Dataset {
    pub fn new(x_values: Vec<f64>, series: Vec<Series>) -> ChartResult<Self> {
        validate_x_values(&x_values)?;

        if series.is_empty() {
            return Err(ChartError::InvalidDataset(
                "dataset needs at least one value series".to_owned(),
            ));
        }

        let mut positions = IndexMap::with_capacity(series.len());
        for (position, entry) in series.iter().enumerate() {
            validate_series(entry, x_values.len())?;
            if positions.insert(entry.id.clone(), position).is_some() {
                return Err(ChartError::InvalidDataset(format!(
                    "duplicate series id `{}`",
                    entry.id
                )));
            }
        }

        debug!(
            samples = x_values.len(),
            series = series.len(),
            "dataset validated"
        );
        Ok(Self {
            x_values,
            series,
            positions,
        })
    }

    /// Builds a dataset whose x-series holds unix-millisecond timestamps.
    pub fn from_timestamps(times: &[DateTime<Utc>], series: Vec<Series>) -> ChartResult<Self> {
        let x_values = times
            .iter()
            .map(|time| time.timestamp_millis() as f64)
            .collect();
        Self::new(x_values, series)
    }

    #[must_use]
    pub fn x_values(&self) -> &[f64] {
        &self.x_values
    }

    /// Number of samples per series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    /// `true` only for a dataset with no samples, which `new` rejects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }

    /// Index of the last sample.
    #[must_use]
    pub fn total(&self) -> usize {
        self.x_values.len() - 1
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn series_by_id(&self, id: &str) -> Option<&Series> {
        self.positions
            .get(id)
            .and_then(|position| self.series.get(*position))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &SeriesId> {
        self.series.iter().map(|series| &series.id)
    }

    #[must_use]
    pub fn label(&self, id: &str) -> Option<&str> {
        self.series_by_id(id).map(|series| series.label.as_str())
    }

    #[must_use]
    pub fn color(&self, id: &str) -> Option<Color> {
        self.series_by_id(id).map(|series| series.color)
    }

    /// Id → label map in dataset order.
    #[must_use]
    pub fn names(&self) -> IndexMap<SeriesId, String> {
        self.series
            .iter()
            .map(|series| (series.id.clone(), series.label.clone()))
            .collect()
    }

    /// Id → color map in dataset order.
    #[must_use]
    pub fn colors(&self) -> IndexMap<SeriesId, Color> {
        self.series
            .iter()
            .map(|series| (series.id.clone(), series.color))
            .collect()
    }
}

fn validate_x_values(x_values: &[f64]) -> ChartResult<()> {
    if x_values.len() < 2 {
        return Err(ChartError::InvalidDataset(format!(
            "x-series needs at least two samples, got {}",
            x_values.len()
        )));
    }
    if let Some(position) = x_values.iter().position(|value| !value.is_finite()) {
        return Err(ChartError::InvalidDataset(format!(
            "x-series value at index {position} is not finite"
        )));
    }
    if let Some(position) = x_values.windows(2).position(|pair| pair[1] <= pair[0]) {
        return Err(ChartError::InvalidDataset(format!(
            "x-series must be strictly increasing, violated at index {}",
            position + 1
        )));
    }
    Ok(())
}

fn validate_series(series: &Series, expected_len: usize) -> ChartResult<()> {
    if series.id.as_str().is_empty() {
        return Err(ChartError::InvalidDataset(
            "series id must not be empty".to_owned(),
        ));
    }
    if series.values.len() != expected_len {
        return Err(ChartError::InvalidDataset(format!(
            "series `{}` has {} samples, x-series has {expected_len}",
            series.id,
            series.values.len()
        )));
    }
    if let Some(position) = series.values.iter().position(|value| !value.is_finite()) {
        return Err(ChartError::InvalidDataset(format!(
            "series `{}` value at index {position} is not finite",
            series.id
        )));
    }
    series.color.validate().map_err(|err| {
        ChartError::InvalidDataset(format!("series `{}` color: {err}", series.id))
    })
}
