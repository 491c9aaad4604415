//! View model of the prediction results panel.

use chrono::TimeZone;
use std::fmt::Display;

use crate::PredictionResult;
use crate::format::{
    format_currency, format_currency_range, format_long_date, format_timestamp, model_label,
};

/// What the results panel shows, in priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    /// Only the error panel.
    Error(String),
    /// Nothing at all.
    Empty,
    Prediction(PredictionView),
}

/// A prediction result with every value formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub store_department: String,
    pub date: String,
    pub predicted_sales: String,
    pub confidence_low: String,
    pub confidence_high: String,
    pub confidence_interval: String,
    pub model: String,
    pub timestamp: String,
}

impl PredictionView {
    /// Format `result`, showing its timestamp in `tz`.
    pub fn new<Tz>(result: &PredictionResult, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let low = result.confidence_interval.low();
        let high = result.confidence_interval.high();
        Self {
            store_department: format!("Store #{}, Department #{}", result.store_id, result.dept_id),
            date: format_long_date(result.date),
            predicted_sales: format_currency(result.predicted_sales),
            confidence_low: format_currency(low),
            confidence_high: format_currency(high),
            confidence_interval: format_currency_range(low, high),
            model: model_label(&result.model_used),
            timestamp: format_timestamp(&result.prediction_timestamp.with_timezone(tz)),
        }
    }

    /// The six labeled fields, in display order.
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("Store & Department", self.store_department.as_str()),
            ("Prediction Date", self.date.as_str()),
            ("Predicted Sales", self.predicted_sales.as_str()),
            ("Confidence Interval", self.confidence_interval.as_str()),
            ("Model Used", self.model.as_str()),
            ("Prediction Time", self.timestamp.as_str()),
        ]
    }

    /// Plain-text summary sentence.
    pub fn summary(&self) -> String {
        format!(
            "The model predicts weekly sales of {} for {} on {}. \
             The confidence interval suggests sales could range from {} to {}.",
            self.predicted_sales,
            self.store_department,
            self.date,
            self.confidence_low,
            self.confidence_high,
        )
    }
}

/// Decide what the results panel renders. An error always wins.
pub fn results_view<Tz>(error: Option<&str>, result: Option<&PredictionResult>, tz: &Tz) -> ResultsView
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match (error, result) {
        (Some(error), _) => ResultsView::Error(error.to_string()),
        (None, None) => ResultsView::Empty,
        (None, Some(result)) => ResultsView::Prediction(PredictionView::new(result, tz)),
    }
}
