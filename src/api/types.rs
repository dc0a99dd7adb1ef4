use serde::{Deserialize, Serialize};

/// Number of feature values a prediction request must carry
/// (sepal length, sepal width, petal length, petal width).
pub const FEATURE_COUNT: usize = 4;

// ============================================================================
// Prediction Types
// ============================================================================

/// Request body for POST /predict.
///
/// `features` stays optional so that an absent or null field is reported
/// with the fixed validation message instead of a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub features: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub species: String,
    /// Max class probability as a percentage in [0, 100], 2 decimal places.
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

// ============================================================================
// Health Check Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub uptime_seconds: i64,
}

// ============================================================================
// Model Info Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ModelInfoResponse {
    pub classes: Vec<String>,
    pub input_dim: usize,
    pub metadata: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::PredictRequest;
    use serde_json::json;

    #[test]
    fn absent_and_null_features_deserialize_to_none() {
        let absent: PredictRequest = serde_json::from_value(json!({})).unwrap();
        assert!(absent.features.is_none());

        let null: PredictRequest = serde_json::from_value(json!({ "features": null })).unwrap();
        assert!(null.features.is_none());
    }

    #[test]
    fn integer_features_deserialize_as_floats() {
        let req: PredictRequest =
            serde_json::from_value(json!({ "features": [1, 2, 3, 4] })).unwrap();
        assert_eq!(req.features, Some(vec![1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn non_numeric_features_are_rejected() {
        let parsed =
            serde_json::from_value::<PredictRequest>(json!({ "features": ["a", "b", "c", "d"] }));
        assert!(parsed.is_err());
    }
}
