use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, error};

use crate::api::state::AppState;
use crate::api::types::{ErrorResponse, PredictRequest, PredictResponse, FEATURE_COUNT};
use crate::error::Result;
use crate::ml::Classifier;

/// Run one prediction and shape the response: predicted label plus the
/// max class probability as a percentage, rounded to 2 decimal places.
pub fn run_prediction(classifier: &Classifier, features: &[f64]) -> Result<PredictResponse> {
    let species = classifier.predict(features)?.to_string();
    let probabilities = classifier.predict_probabilities(features)?;
    let top = probabilities.iter().copied().fold(0.0_f64, f64::max);
    let confidence = (top * 100.0 * 100.0).round() / 100.0;

    Ok(PredictResponse {
        species,
        confidence,
    })
}

/// POST /predict
pub async fn predict_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PredictRequest>, JsonRejection>,
) -> std::result::Result<Json<PredictResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Non-JSON bodies and non-numeric feature values are rejected here,
    // before any inference runs.
    let Ok(Json(request)) = payload else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("invalid request body")),
        ));
    };

    let features = match request.features {
        Some(f) if f.len() == FEATURE_COUNT => f,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Please provide 4 feature values")),
            ));
        }
    };

    let response = run_prediction(&state.classifier, &features).map_err(|e| {
        error!("prediction failed: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("internal server error")),
        )
    })?;

    debug!(
        species = %response.species,
        confidence = response.confidence,
        "prediction served"
    );
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::{Activation, DenseLayer};

    fn classifier() -> Classifier {
        Classifier {
            input_dim: 4,
            class_labels: vec!["a".to_string(), "b".to_string()],
            input_mean: None,
            input_std: None,
            layers: vec![DenseLayer {
                weights: vec![vec![1.0, 0.0, 0.0, 0.0], vec![-1.0, 0.0, 0.0, 0.0]],
                bias: vec![0.0, 0.0],
                activation: Activation::Linear,
            }],
            metadata: serde_json::json!({}),
        }
    }

    #[test]
    fn confidence_is_rounded_to_two_decimals() {
        let net = classifier();
        let response = run_prediction(&net, &[1.0, 0.0, 0.0, 0.0]).unwrap();

        let probs = net.predict_probabilities(&[1.0, 0.0, 0.0, 0.0]).unwrap();
        let top = probs.iter().copied().fold(0.0_f64, f64::max);
        let expected = (top * 100.0 * 100.0).round() / 100.0;

        assert_eq!(response.species, "a");
        assert_eq!(response.confidence, expected);
        assert!((0.0..=100.0).contains(&response.confidence));
        // No more than 2 decimal places survive the rounding.
        let scaled = response.confidence * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
    }

    #[test]
    fn prediction_is_deterministic() {
        let net = classifier();
        let first = run_prediction(&net, &[0.3, 0.1, 0.2, 0.4]).unwrap();
        let second = run_prediction(&net, &[0.3, 0.1, 0.2, 0.4]).unwrap();
        assert_eq!(first, second);
    }
}
