use serde::{Deserialize, Serialize};
use shared::protocol::PredictResponse;

use crate::error::ClassifyError;

/// A prediction accepted from the classification service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub language: String,
    pub confidence: f64,
}

impl Classification {
    /// Validates the service payload. The label is kept verbatim; a
    /// confidence outside `[0, 1]` (or NaN) breaks the contract.
    pub fn from_response(response: PredictResponse) -> Result<Self, ClassifyError> {
        if !(0.0..=1.0).contains(&response.confidence) {
            return Err(ClassifyError::Contract(format!(
                "confidence {} is outside [0, 1]",
                response.confidence
            )));
        }
        Ok(Self {
            language: response.language,
            confidence: response.confidence,
        })
    }
}

/// Renders a confidence fraction as a percentage with two decimals.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(confidence: f64) -> PredictResponse {
        PredictResponse {
            language: "French".to_string(),
            confidence,
            status: None,
        }
    }

    #[test]
    fn accepts_confidence_bounds() {
        assert!(Classification::from_response(response(0.0)).is_ok());
        assert!(Classification::from_response(response(1.0)).is_ok());
        let accepted = Classification::from_response(response(0.97)).expect("valid");
        assert_eq!(accepted.language, "French");
        assert_eq!(accepted.confidence, 0.97);
    }

    #[test]
    fn rejects_out_of_range_confidence() {
        for bad in [-0.01, 1.5, f64::NAN, f64::INFINITY] {
            let err = Classification::from_response(response(bad)).expect_err("must reject");
            assert!(matches!(err, ClassifyError::Contract(_)), "{bad}");
        }
    }

    #[test]
    fn formats_confidence_as_percentage() {
        assert_eq!(format_confidence(0.97), "97.00%");
        assert_eq!(format_confidence(0.123456), "12.35%");
        assert_eq!(format_confidence(1.0), "100.00%");
    }
}
