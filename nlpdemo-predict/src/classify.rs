use crate::error::{PredictionError, Result, ANSWER_NOT_FOUND};
use crate::predicate::{self, field};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Shape of a prediction payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredictionKind {
    Span,
    TransformerSpan,
    NumericSpan,
    NumericArithmetic,
    NumericCount,
    Program,
    Unknown,
}

impl PredictionKind {
    /// Checked in this order; the first match decides.
    pub const PRIORITY: [PredictionKind; 6] = [
        PredictionKind::Span,
        PredictionKind::TransformerSpan,
        PredictionKind::NumericSpan,
        PredictionKind::NumericArithmetic,
        PredictionKind::NumericCount,
        PredictionKind::Program,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionKind::Span => "span",
            PredictionKind::TransformerSpan => "transformer_span",
            PredictionKind::NumericSpan => "numeric_span",
            PredictionKind::NumericArithmetic => "numeric_arithmetic",
            PredictionKind::NumericCount => "numeric_count",
            PredictionKind::Program => "program",
            PredictionKind::Unknown => "unknown",
        }
    }

    /// Whether `pred` has this shape, ignoring priority.
    pub fn matches(&self, pred: &Value) -> bool {
        match self {
            PredictionKind::Span => predicate::is_span_prediction(pred),
            PredictionKind::TransformerSpan => predicate::is_transformer_span_prediction(pred),
            PredictionKind::NumericSpan => predicate::is_numeric_span_answer(pred),
            PredictionKind::NumericArithmetic => predicate::is_numeric_arithmetic_answer(pred),
            PredictionKind::NumericCount => predicate::is_numeric_count_answer(pred),
            PredictionKind::Program => predicate::is_program_prediction(pred),
            PredictionKind::Unknown => false,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            PredictionKind::NumericSpan
                | PredictionKind::NumericArithmetic
                | PredictionKind::NumericCount
        )
    }
}

impl fmt::Display for PredictionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an untyped prediction. Span and transformer-span field sets
/// overlap; a payload carrying both is a span prediction.
pub fn classify(pred: &Value) -> PredictionKind {
    let kind = PredictionKind::PRIORITY
        .iter()
        .copied()
        .find(|kind| kind.matches(pred))
        .unwrap_or(PredictionKind::Unknown);
    tracing::trace!("classified prediction as {}", kind);
    kind
}

/// The single answer value shown in the compact summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BasicAnswer {
    Text(String),
    Number(Number),
}

impl BasicAnswer {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(BasicAnswer::Text(s.clone())),
            Value::Number(n) => Ok(BasicAnswer::Number(n.clone())),
            other => Err(PredictionError::InvalidModelResponse(format!(
                "Answer is neither a string nor a number: {}",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            BasicAnswer::Text(s) => Some(s),
            BasicAnswer::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            BasicAnswer::Text(_) => None,
            BasicAnswer::Number(n) => Some(n),
        }
    }
}

impl fmt::Display for BasicAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasicAnswer::Text(s) => f.write_str(s),
            BasicAnswer::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for BasicAnswer {
    fn from(s: &str) -> Self {
        BasicAnswer::Text(s.to_string())
    }
}

impl From<u64> for BasicAnswer {
    fn from(n: u64) -> Self {
        BasicAnswer::Number(n.into())
    }
}

/// Extract the primary answer: the best span for span predictions, the
/// answer value for numeric span/arithmetic answers, the count for numeric
/// count answers, and the answer string for programs.
pub fn get_basic_answer(pred: &Value) -> Result<BasicAnswer> {
    let answer = match classify(pred) {
        PredictionKind::Span | PredictionKind::TransformerSpan => &pred[field::BEST_SPAN_STR],
        PredictionKind::NumericSpan | PredictionKind::NumericArithmetic => {
            &pred[field::ANSWER][field::VALUE]
        }
        PredictionKind::NumericCount => &pred[field::ANSWER][field::COUNT],
        PredictionKind::Program => &pred[field::ANSWER],
        PredictionKind::Unknown => {
            return Err(PredictionError::InvalidModelResponse(
                ANSWER_NOT_FOUND.to_string(),
            ))
        }
    };
    BasicAnswer::from_value(answer)
}
