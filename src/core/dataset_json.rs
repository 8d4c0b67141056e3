//! Import of the column-oriented chart data format.
//!
//! ```json
//! {
//!   "columns": [["x", 1542412800000, 1542499200000], ["y0", 37, 20]],
//!   "types": {"x": "x", "y0": "line"},
//!   "names": {"y0": "#0"},
//!   "colors": {"y0": "#3DC23F"}
//! }
//! ```
//!
//! Every column starts with its id followed by the samples. The column whose
//! type is `"x"` becomes the shared x-series.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::core::{Dataset, Series};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

const X_COLUMN_TYPE: &str = "x";
const LINE_COLUMN_TYPE: &str = "line";

#[derive(Debug, Deserialize)]
struct RawChartData {
    columns: Vec<Vec<Value>>,
    types: IndexMap<String, String>,
    #[serde(default)]
    names: IndexMap<String, String>,
    #[serde(default)]
    colors: IndexMap<String, String>,
}

impl Dataset {
    /// Parses one chart object.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let raw: RawChartData = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidDataset(format!("failed to parse chart data json: {e}"))
        })?;
        raw.into_dataset()
    }

    /// Parses a JSON array of chart objects, failing on the first invalid one.
    pub fn list_from_json_str(input: &str) -> ChartResult<Vec<Self>> {
        let raw: Vec<RawChartData> = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidDataset(format!("failed to parse chart data list json: {e}"))
        })?;
        raw.into_iter()
            .enumerate()
            .map(|(position, chart)| {
                chart.into_dataset().map_err(|err| {
                    ChartError::InvalidDataset(format!("chart #{position}: {err}"))
                })
            })
            .collect()
    }
}

impl RawChartData {
    fn into_dataset(self) -> ChartResult<Dataset> {
        let mut x_values: Option<Vec<f64>> = None;
        let mut series = Vec::with_capacity(self.columns.len().saturating_sub(1));

        for column in self.columns {
            let (id, samples) = split_column(column)?;
            let column_type = self.types.get(&id).ok_or_else(|| {
                ChartError::InvalidDataset(format!("column `{id}` has no type"))
            })?;

            match column_type.as_str() {
                X_COLUMN_TYPE => {
                    if x_values.replace(samples).is_some() {
                        return Err(ChartError::InvalidDataset(
                            "more than one x column".to_owned(),
                        ));
                    }
                }
                LINE_COLUMN_TYPE => {
                    let label = self.names.get(&id).ok_or_else(|| {
                        ChartError::InvalidDataset(format!("column `{id}` has no name"))
                    })?;
                    let hex = self.colors.get(&id).ok_or_else(|| {
                        ChartError::InvalidDataset(format!("column `{id}` has no color"))
                    })?;
                    let color = Color::from_hex(hex).map_err(|err| {
                        ChartError::InvalidDataset(format!("column `{id}`: {err}"))
                    })?;
                    series.push(Series::new(id.as_str(), label.as_str(), color, samples));
                }
                other => {
                    return Err(ChartError::InvalidDataset(format!(
                        "column `{id}` has unsupported type `{other}`"
                    )));
                }
            }
        }

        let x_values = x_values
            .ok_or_else(|| ChartError::InvalidDataset("no column of type `x`".to_owned()))?;
        debug!(
            samples = x_values.len(),
            series = series.len(),
            "parsed chart data json"
        );
        Dataset::new(x_values, series)
    }
}

fn split_column(column: Vec<Value>) -> ChartResult<(String, Vec<f64>)> {
    let mut values = column.into_iter();
    let id = match values.next() {
        Some(Value::String(id)) => id,
        Some(_) => {
            return Err(ChartError::InvalidDataset(
                "column must start with its string id".to_owned(),
            ));
        }
        None => return Err(ChartError::InvalidDataset("empty column".to_owned())),
    };

    let samples = values
        .enumerate()
        .map(|(position, value)| {
            value.as_f64().ok_or_else(|| {
                ChartError::InvalidDataset(format!(
                    "column `{id}` sample {position} is not a number"
                ))
            })
        })
        .collect::<ChartResult<Vec<f64>>>()?;
    Ok((id, samples))
}
