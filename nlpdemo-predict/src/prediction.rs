// Narrowing untyped payloads into typed predictions

use crate::classify::{classify, BasicAnswer, PredictionKind};
use crate::error::{PredictionError, Result, ANSWER_NOT_FOUND};
use crate::types::*;
use serde::Deserialize;
use serde_json::Value;

/// A classified reading-comprehension prediction.
#[derive(Debug, Clone, PartialEq)]
pub enum Prediction {
    Bidaf(BidafPrediction),
    TransformerQa(TransformerQaPrediction),
    Naqanet(NaqanetPrediction),
    Nmn(NmnPrediction),
}

fn narrow<'a, T: Deserialize<'a>>(value: &'a Value, kind: PredictionKind) -> Result<T> {
    T::deserialize(value).map_err(|e| {
        tracing::debug!("payload shaped like {} failed to deserialize: {}", kind, e);
        PredictionError::InvalidModelResponse(format!("Malformed {} prediction: {}", kind, e))
    })
}

impl Prediction {
    /// Classify `value` and deserialize it as the matching shape. The
    /// payload is borrowed and left untouched.
    pub fn from_value(value: &Value) -> Result<Self> {
        let kind = classify(value);
        let prediction = match kind {
            PredictionKind::Span => Prediction::Bidaf(narrow(value, kind)?),
            PredictionKind::TransformerSpan => Prediction::TransformerQa(narrow(value, kind)?),
            PredictionKind::NumericSpan
            | PredictionKind::NumericArithmetic
            | PredictionKind::NumericCount => Prediction::Naqanet(narrow(value, kind)?),
            PredictionKind::Program => Prediction::Nmn(narrow(value, kind)?),
            PredictionKind::Unknown => {
                return Err(PredictionError::InvalidModelResponse(
                    ANSWER_NOT_FOUND.to_string(),
                ))
            }
        };
        tracing::debug!("narrowed prediction to {}", prediction.kind());
        Ok(prediction)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    pub fn kind(&self) -> PredictionKind {
        match self {
            Prediction::Bidaf(_) => PredictionKind::Span,
            Prediction::TransformerQa(_) => PredictionKind::TransformerSpan,
            Prediction::Naqanet(p) => match p.answer.answer_type() {
                NaqanetAnswerType::PassageSpan | NaqanetAnswerType::QuestionSpan => {
                    PredictionKind::NumericSpan
                }
                NaqanetAnswerType::Count => PredictionKind::NumericCount,
                NaqanetAnswerType::Arithmetic => PredictionKind::NumericArithmetic,
            },
            Prediction::Nmn(_) => PredictionKind::Program,
        }
    }

    pub fn basic_answer(&self) -> BasicAnswer {
        match self {
            Prediction::Bidaf(p) => BasicAnswer::Text(p.best_span_str.clone()),
            Prediction::TransformerQa(p) => BasicAnswer::Text(p.best_span_str.clone()),
            Prediction::Naqanet(p) => match &p.answer {
                NaqanetAnswer::PassageSpan { value, .. }
                | NaqanetAnswer::QuestionSpan { value, .. }
                | NaqanetAnswer::Arithmetic { value, .. } => BasicAnswer::Text(value.clone()),
                NaqanetAnswer::Count { count } => BasicAnswer::from(*count),
            },
            Prediction::Nmn(p) => BasicAnswer::Text(p.answer.clone()),
        }
    }
}
