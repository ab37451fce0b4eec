//! Interpretation and rendering of prediction responses.

use std::fmt;

use serde_json::Value;

use crate::domain::PayloadSchema;

/// Fallback shown when an error response carries no `detail`.
pub const UNKNOWN_ERROR: &str = "inconnue";

/// Below this score the result is shown as low.
pub const LOW_SCORE_CEILING: f64 = 2.5;
/// From this score on the result is shown as high.
pub const HIGH_SCORE_FLOOR: f64 = 4.0;

/// Visual severity of a predicted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    /// score < 2.5, red
    Low,
    /// 2.5 <= score < 4, yellow
    Medium,
    /// score >= 4, green
    High,
}

impl ScoreTier {
    pub fn of(score: f64) -> Self {
        if score < LOW_SCORE_CEILING {
            ScoreTier::Low
        } else if score < HIGH_SCORE_FLOOR {
            ScoreTier::Medium
        } else {
            ScoreTier::High
        }
    }
}

/// Terminal result of one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// `raw` is the score as the server sent it.
    Success { score: f64, raw: String },
    /// Non-2xx response.
    ApiError { status: u16, message: String },
    /// 2xx response without a usable score field.
    UnexpectedResponse { body: String },
    /// The request never completed.
    NetworkError { message: String },
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success { .. })
    }

    pub fn render(&self, schema: PayloadSchema) -> RenderedResult {
        match self {
            SubmitOutcome::Success { score, raw } => match schema {
                PayloadSchema::TeacherProfile => RenderedResult {
                    text: format!("⭐ Note prédite : {raw}"),
                    tone: Tone::Highlight,
                },
                PayloadSchema::Professor => RenderedResult {
                    text: format!("⭐ Note moyenne prédite : {score:.2} / 5"),
                    tone: Tone::Score(ScoreTier::of(*score)),
                },
            },
            SubmitOutcome::ApiError { message, .. } => RenderedResult {
                text: format!("❌ Erreur de prédiction : {message}"),
                tone: Tone::Error,
            },
            SubmitOutcome::UnexpectedResponse { .. } => RenderedResult {
                text: "❌ Réponse inattendue du serveur.".to_string(),
                tone: Tone::Error,
            },
            SubmitOutcome::NetworkError { message } => RenderedResult {
                text: format!("❌ Erreur réseau : {message}"),
                tone: Tone::Error,
            },
        }
    }
}

/// How a rendered result should be colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Highlight,
    Score(ScoreTier),
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResult {
    pub text: String,
    pub tone: Tone,
}

impl fmt::Display for RenderedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Classify an HTTP response that was received.
pub fn interpret_response(schema: PayloadSchema, status: u16, body: &str) -> SubmitOutcome {
    let parsed: Option<Value> = serde_json::from_str(body).ok();

    if !(200..300).contains(&status) {
        let message = parsed
            .as_ref()
            .and_then(|data| data.get("detail"))
            .and_then(detail_text)
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
        return SubmitOutcome::ApiError { status, message };
    }

    let field = parsed
        .as_ref()
        .and_then(|data| data.get(schema.score_field()));
    match field.and_then(score_value) {
        Some((score, raw)) => SubmitOutcome::Success { score, raw },
        None => SubmitOutcome::UnexpectedResponse {
            body: body.to_string(),
        },
    }
}

/// Strings are shown verbatim, other values as compact JSON.
/// Empty or falsy details fall back to the generic message.
fn detail_text(detail: &Value) -> Option<String> {
    match detail {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Accept a JSON number or a numeric string.
fn score_value(value: &Value) -> Option<(f64, String)> {
    match value {
        Value::Number(number) => number.as_f64().map(|score| (score, number.to_string())),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|score| score.is_finite())
            .map(|score| (score, text.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(ScoreTier::of(2.49), ScoreTier::Low);
        assert_eq!(ScoreTier::of(2.5), ScoreTier::Medium);
        assert_eq!(ScoreTier::of(3.99), ScoreTier::Medium);
        assert_eq!(ScoreTier::of(4.0), ScoreTier::High);
    }

    #[test]
    fn given_error_without_json_body_when_interpreting_then_generic_message() {
        let outcome = interpret_response(PayloadSchema::Professor, 502, "Bad Gateway");

        assert_eq!(
            outcome,
            SubmitOutcome::ApiError {
                status: 502,
                message: UNKNOWN_ERROR.to_string()
            }
        );
    }

    #[test]
    fn given_empty_or_false_detail_when_interpreting_then_generic_message() {
        for body in [r#"{"detail": ""}"#, r#"{"detail": false}"#, r#"{"detail": null}"#] {
            let outcome = interpret_response(PayloadSchema::Professor, 422, body);

            assert_eq!(
                outcome,
                SubmitOutcome::ApiError {
                    status: 422,
                    message: UNKNOWN_ERROR.to_string()
                },
                "body: {body}"
            );
        }
    }

    #[test]
    fn given_structured_detail_when_interpreting_then_rendered_as_json() {
        let body = r#"{"detail":[{"loc":["body","city"],"msg":"field required"}]}"#;

        let outcome = interpret_response(PayloadSchema::Professor, 422, body);

        match outcome {
            SubmitOutcome::ApiError { message, .. } => {
                assert!(message.contains("field required"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn given_score_under_other_schema_field_when_interpreting_then_unexpected() {
        let outcome = interpret_response(
            PayloadSchema::Professor,
            200,
            r#"{"predicted_score": 4.2}"#,
        );

        assert!(matches!(outcome, SubmitOutcome::UnexpectedResponse { .. }));
    }
}
