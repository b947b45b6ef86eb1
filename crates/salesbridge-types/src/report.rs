//! Sales report request and response types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::limits::Limits;

/// Reporting period, both bounds as `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    #[serde(default, deserialize_with = "null_as_default")]
    pub from: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub to: String,
}

/// Optional id filters (ids come from the resolve tools).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesFilters {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub customer_ids: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub warehouse_ids: Vec<String>,
}

/// One sort key. The direction is forwarded as-is; the backend owns its
/// interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub dir: String,
}

/// A measure that can be aggregated in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    Amount,
    Qty,
}

impl Measure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Qty => "qty",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Measure {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "amount" => Ok(Self::Amount),
            "qty" => Ok(Self::Qty),
            other => Err(ValidationError::UnsupportedMeasure {
                value: other.to_string(),
            }),
        }
    }
}

/// A dimension a report can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Customer,
    Warehouse,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Warehouse => "warehouse",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "warehouse" => Ok(Self::Warehouse),
            other => Err(ValidationError::UnsupportedGroupBy {
                value: other.to_string(),
            }),
        }
    }
}

/// Inbound sales report arguments (REST body or tool arguments).
///
/// Measures and dimensions stay as raw strings here so that validation
/// can name the offending value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesReportArgs {
    #[serde(default, deserialize_with = "null_as_default")]
    pub period: Period,
    #[serde(default, deserialize_with = "null_as_default")]
    pub filters: SalesFilters,
    #[serde(default, deserialize_with = "null_as_default")]
    pub group_by: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub measures: Vec<String>,
    #[serde(default)]
    pub top: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sort: Vec<SortSpec>,
}

impl SalesReportArgs {
    /// Validates the arguments and applies the `top` clamp.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for a missing period bound or an
    /// unsupported measure / grouping dimension.
    pub fn into_request(self, limits: &Limits) -> Result<SalesReportRequest, ValidationError> {
        if self.period.from.is_empty() || self.period.to.is_empty() {
            return Err(ValidationError::MissingPeriod);
        }
        let measures = self
            .measures
            .iter()
            .map(|m| m.parse::<Measure>())
            .collect::<Result<Vec<_>, _>>()?;
        let group_by = self
            .group_by
            .iter()
            .map(|g| g.parse::<Dimension>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SalesReportRequest {
            period: self.period,
            filters: self.filters,
            group_by,
            measures,
            top: limits.top(self.top.unwrap_or(0)),
            sort: self.sort,
        })
    }
}

/// Outbound sales report request sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesReportRequest {
    pub period: Period,
    #[serde(default)]
    pub filters: SalesFilters,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<Dimension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub measures: Vec<Measure>,
    pub top: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<SortSpec>,
}

/// Column descriptor in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
}

/// Tabular sales report as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesReportResponse {
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totals: Option<Map<String, Value>>,
}

impl SalesReportResponse {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
