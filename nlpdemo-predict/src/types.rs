// Typed shapes of reading-comprehension model outputs

use crate::program::NestedProgram;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// API version the reading-comprehension demo talks to
pub const VERSION: &str = "rc-v1";

/// Python's `None` as some back-ends serialize it into string fields
pub const NULL_SENTINEL: &str = "None";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub passage: String,
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidafPrediction {
    pub passage_tokens: Vec<String>,
    pub question_tokens: Vec<String>,
    /// Index into the passage token list
    pub best_span: Vec<i64>,
    pub best_span_str: String,
    pub passage_question_attention: Vec<Vec<f64>>,
    pub span_end_logits: Vec<f64>,
    pub span_end_probs: Vec<f64>,
    pub span_start_logits: Vec<f64>,
    pub span_start_probs: Vec<f64>,
    pub token_offsets: Vec<Vec<i64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformerQaPrediction {
    pub best_span: Vec<i64>,
    pub best_span_scores: f64,
    pub best_span_str: String,
    pub context_tokens: Vec<String>,
    pub id: String,
    pub span_end_logits: Vec<f64>,
    pub span_start_logits: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NaqanetAnswerType {
    PassageSpan,
    QuestionSpan,
    Count,
    Arithmetic,
}

impl NaqanetAnswerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NaqanetAnswerType::PassageSpan => "passage_span",
            NaqanetAnswerType::QuestionSpan => "question_span",
            NaqanetAnswerType::Count => "count",
            NaqanetAnswerType::Arithmetic => "arithmetic",
        }
    }

    /// Exact match on the wire name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "passage_span" => Some(NaqanetAnswerType::PassageSpan),
            "question_span" => Some(NaqanetAnswerType::QuestionSpan),
            "count" => Some(NaqanetAnswerType::Count),
            "arithmetic" => Some(NaqanetAnswerType::Arithmetic),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberWithSign {
    pub value: f64,
    pub span: (i64, i64),
    pub sign: i64,
}

/// NAQANet answer, discriminated by `answer_type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "answer_type", rename_all = "snake_case")]
pub enum NaqanetAnswer {
    PassageSpan { spans: Vec<(i64, i64)>, value: String },
    QuestionSpan { spans: Vec<(i64, i64)>, value: String },
    Count { count: u64 },
    Arithmetic { value: String, numbers: Vec<NumberWithSign> },
}

impl NaqanetAnswer {
    pub fn answer_type(&self) -> NaqanetAnswerType {
        match self {
            NaqanetAnswer::PassageSpan { .. } => NaqanetAnswerType::PassageSpan,
            NaqanetAnswer::QuestionSpan { .. } => NaqanetAnswerType::QuestionSpan,
            NaqanetAnswer::Count { .. } => NaqanetAnswerType::Count,
            NaqanetAnswer::Arithmetic { .. } => NaqanetAnswerType::Arithmetic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaqanetPrediction {
    pub passage_tokens: Vec<String>,
    pub question_tokens: Vec<String>,
    pub answer: NaqanetAnswer,
    pub loss: f64,
    pub passage_question_attention: Vec<Vec<f64>>,
    /// Must be present; `null` and the `"None"` sentinel both mean no id.
    #[serde(deserialize_with = "null_sentinel")]
    pub question_id: Option<String>,
}

fn null_sentinel<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| s != NULL_SENTINEL))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NmnInput {
    pub name: String,
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramStep {
    pub input_name: String,
    pub values: Vec<f64>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NmnPrediction {
    pub answer: String,
    pub inputs: Vec<NmnInput>,
    #[serde(default)]
    pub passage: String,
    #[serde(default)]
    pub predicted_ans: String,
    /// One map per executed module, keyed by program identifier
    pub program_execution: Vec<HashMap<String, Vec<ProgramStep>>>,
    #[serde(default)]
    pub program_lisp: String,
    pub program_nested_expression: NestedProgram,
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpreterGradients {
    pub grad_input_1: Vec<f64>,
    pub grad_input_2: Vec<f64>,
}

/// Saliency interpretation of a single instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpreterData {
    pub instance_1: InterpreterGradients,
}
