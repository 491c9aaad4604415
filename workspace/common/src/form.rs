//! Field model of the prediction form.
//!
//! Range constraints are declared here for the native input controls to
//! enforce; coercion only converts widget text into the typed request.

use chrono::NaiveDate;
use thiserror::Error;

use crate::PredictionRequest;

/// Widget date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{field} expects a whole number, got {value:?}")]
    InvalidInteger { field: &'static str, value: String },
    #[error("{field} expects a number, got {value:?}")]
    InvalidFloat { field: &'static str, value: String },
    #[error("{field} expects a YYYY-MM-DD date, got {value:?}")]
    InvalidDate { field: &'static str, value: String },
}

/// Widget text that could not be applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedInput {
    pub error: FormError,
    /// Text the widget should show instead.
    pub restore: String,
}

/// One input of the prediction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredictionField {
    StoreId,
    DeptId,
    Date,
    Temperature,
    FuelPrice,
    Cpi,
    Unemployment,
}

impl PredictionField {
    /// All fields in form order.
    pub const ALL: [PredictionField; 7] = [
        PredictionField::StoreId,
        PredictionField::DeptId,
        PredictionField::Date,
        PredictionField::Temperature,
        PredictionField::FuelPrice,
        PredictionField::Cpi,
        PredictionField::Unemployment,
    ];

    /// Wire name, also used as the input's `id` and `name`.
    pub fn name(self) -> &'static str {
        match self {
            PredictionField::StoreId => "store_id",
            PredictionField::DeptId => "dept_id",
            PredictionField::Date => "date",
            PredictionField::Temperature => "temperature",
            PredictionField::FuelPrice => "fuel_price",
            PredictionField::Cpi => "cpi",
            PredictionField::Unemployment => "unemployment",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PredictionField::StoreId => "Store ID",
            PredictionField::DeptId => "Department ID",
            PredictionField::Date => "Date",
            PredictionField::Temperature => "Temperature (°F)",
            PredictionField::FuelPrice => "Fuel Price ($)",
            PredictionField::Cpi => "Consumer Price Index",
            PredictionField::Unemployment => "Unemployment Rate (%)",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            PredictionField::Date => "date",
            _ => "number",
        }
    }

    pub fn min(self) -> Option<&'static str> {
        match self {
            PredictionField::StoreId | PredictionField::DeptId => Some("1"),
            PredictionField::Date => None,
            PredictionField::Temperature => Some("-20"),
            PredictionField::FuelPrice => Some("0"),
            PredictionField::Cpi => Some("100"),
            PredictionField::Unemployment => Some("0"),
        }
    }

    pub fn max(self) -> Option<&'static str> {
        match self {
            PredictionField::StoreId => Some("45"),
            PredictionField::DeptId => Some("99"),
            PredictionField::Date => None,
            PredictionField::Temperature => Some("120"),
            PredictionField::FuelPrice => Some("10"),
            PredictionField::Cpi => Some("300"),
            PredictionField::Unemployment => Some("20"),
        }
    }

    pub fn step(self) -> Option<&'static str> {
        match self {
            PredictionField::StoreId | PredictionField::DeptId | PredictionField::Date => None,
            PredictionField::FuelPrice => Some("0.01"),
            PredictionField::Temperature | PredictionField::Cpi | PredictionField::Unemployment => {
                Some("0.1")
            }
        }
    }

    pub fn required(self) -> bool {
        matches!(
            self,
            PredictionField::StoreId | PredictionField::DeptId | PredictionField::Date
        )
    }
}

fn parse_integer(field: PredictionField, raw: &str) -> Result<i32, FormError> {
    raw.trim().parse().map_err(|_| FormError::InvalidInteger {
        field: field.name(),
        value: raw.to_string(),
    })
}

fn parse_float(field: PredictionField, raw: &str) -> Result<f64, FormError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FormError::InvalidFloat {
            field: field.name(),
            value: raw.to_string(),
        })
}

impl PredictionRequest {
    /// Coerce widget text into the given field. On error the field keeps
    /// its previous value.
    pub fn set_field(&mut self, field: PredictionField, raw: &str) -> Result<(), FormError> {
        match field {
            PredictionField::StoreId => self.store_id = parse_integer(field, raw)?,
            PredictionField::DeptId => self.dept_id = parse_integer(field, raw)?,
            PredictionField::Date => {
                self.date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
                    FormError::InvalidDate {
                        field: field.name(),
                        value: raw.to_string(),
                    }
                })?
            }
            PredictionField::Temperature => self.temperature = parse_float(field, raw)?,
            PredictionField::FuelPrice => self.fuel_price = parse_float(field, raw)?,
            PredictionField::Cpi => self.cpi = parse_float(field, raw)?,
            PredictionField::Unemployment => self.unemployment = parse_float(field, raw)?,
        }
        Ok(())
    }

    /// Apply widget text. On rejection the error carries the retained value
    /// as text so the widget can be put back in sync with the request.
    pub fn apply_input(&mut self, field: PredictionField, raw: &str) -> Result<(), RejectedInput> {
        self.set_field(field, raw).map_err(|error| RejectedInput {
            error,
            restore: self.field_value(field),
        })
    }

    /// Current value of a field as widget text.
    pub fn field_value(&self, field: PredictionField) -> String {
        match field {
            PredictionField::StoreId => self.store_id.to_string(),
            PredictionField::DeptId => self.dept_id.to_string(),
            PredictionField::Date => self.date.format(DATE_FORMAT).to_string(),
            PredictionField::Temperature => self.temperature.to_string(),
            PredictionField::FuelPrice => self.fuel_price.to_string(),
            PredictionField::Cpi => self.cpi.to_string(),
            PredictionField::Unemployment => self.unemployment.to_string(),
        }
    }
}
