use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Request body for `POST /predict` (and each element of `POST /batch_predict`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRequest {
    pub store_id: i32,
    pub dept_id: i32,
    pub date: NaiveDate,
    /// Degrees Fahrenheit.
    pub temperature: f64,
    /// USD per gallon.
    pub fuel_price: f64,
    pub cpi: f64,
    /// Percent.
    pub unemployment: f64,
}

impl PredictionRequest {
    /// Form defaults for the given calendar date.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            store_id: 1,
            dept_id: 1,
            date,
            temperature: 70.0,
            fuel_price: 3.5,
            cpi: 220.0,
            unemployment: 7.0,
        }
    }
}

impl Default for PredictionRequest {
    /// Form defaults for today's local date.
    fn default() -> Self {
        Self::for_date(Local::now().date_naive())
    }
}

/// Low/high bounds around the predicted sales, serialized as `[low, high]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ConfidenceInterval(pub f64, pub f64);

impl ConfidenceInterval {
    pub fn low(&self) -> f64 {
        self.0
    }

    pub fn high(&self) -> f64 {
        self.1
    }
}

/// Response body of `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    pub store_id: i32,
    pub dept_id: i32,
    pub date: NaiveDate,
    pub predicted_sales: f64,
    pub confidence_interval: ConfidenceInterval,
    pub model_used: String,
    #[serde(with = "crate::timestamp")]
    pub prediction_timestamp: DateTime<Utc>,
}

/// Response body of `POST /batch_predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchPrediction {
    pub predictions: Vec<PredictionResult>,
    pub batch_size: usize,
    #[serde(with = "crate::timestamp")]
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_defaults() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let request = PredictionRequest::for_date(date);
        assert_eq!(request.store_id, 1);
        assert_eq!(request.dept_id, 1);
        assert_eq!(request.date, date);
        assert_eq!(request.temperature, 70.0);
        assert_eq!(request.fuel_price, 3.5);
        assert_eq!(request.cpi, 220.0);
        assert_eq!(request.unemployment, 7.0);
    }

    #[test]
    fn test_request_wire_types() {
        let request = PredictionRequest::for_date(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        let value = serde_json::to_value(&request).unwrap();

        assert!(value["store_id"].is_i64());
        assert!(value["dept_id"].is_i64());
        assert_eq!(value["date"], json!("2024-03-15"));
        for key in ["temperature", "fuel_price", "cpi", "unemployment"] {
            assert!(value[key].is_f64(), "{key} should serialize as a float");
        }
    }

    #[test]
    fn test_result_parses_service_payload() {
        let body = json!({
            "store_id": 5,
            "dept_id": 10,
            "date": "2024-03-15",
            "predicted_sales": 24567.89,
            "confidence_interval": [20000.00, 29000.00],
            "model_used": "weighted_ensemble",
            "prediction_timestamp": "2024-03-15T10:30:00.512344"
        });
        let result: PredictionResult = serde_json::from_value(body).unwrap();
        assert_eq!(result.store_id, 5);
        assert_eq!(result.confidence_interval.low(), 20000.0);
        assert_eq!(result.confidence_interval.high(), 29000.0);
        assert_eq!(result.prediction_timestamp.date_naive(), result.date);
    }

    #[test]
    fn test_batch_parses_service_payload() {
        let body = json!({
            "predictions": [{
                "store_id": 1,
                "dept_id": 1,
                "date": "2024-01-05",
                "predicted_sales": 1200.5,
                "confidence_interval": [1080.45, 1320.55],
                "model_used": "fallback_algorithm",
                "prediction_timestamp": "2024-01-05T08:00:00"
            }],
            "batch_size": 1,
            "timestamp": "2024-01-05T08:00:01"
        });
        let batch: BatchPrediction = serde_json::from_value(body).unwrap();
        assert_eq!(batch.batch_size, 1);
        assert_eq!(batch.predictions[0].model_used, "fallback_algorithm");
    }
}
