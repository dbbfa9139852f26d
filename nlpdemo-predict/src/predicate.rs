//! Structural predicates over untyped reading-comprehension predictions.
//!
//! A field counts as defined when the key is present, whatever its value.
//! `null`, `0` and `""` are all defined. Nothing here mutates the payload.

use serde_json::Value;

use crate::types::NaqanetAnswerType;

/// Field names shared by the predicate set
pub mod field {
    pub const PASSAGE_TOKENS: &str = "passage_tokens";
    pub const QUESTION_TOKENS: &str = "question_tokens";
    pub const BEST_SPAN: &str = "best_span";
    pub const BEST_SPAN_STR: &str = "best_span_str";
    pub const BEST_SPAN_SCORES: &str = "best_span_scores";
    pub const PASSAGE_QUESTION_ATTENTION: &str = "passage_question_attention";
    pub const SPAN_START_LOGITS: &str = "span_start_logits";
    pub const SPAN_START_PROBS: &str = "span_start_probs";
    pub const SPAN_END_LOGITS: &str = "span_end_logits";
    pub const SPAN_END_PROBS: &str = "span_end_probs";
    pub const TOKEN_OFFSETS: &str = "token_offsets";
    pub const CONTEXT_TOKENS: &str = "context_tokens";
    pub const ID: &str = "id";
    pub const ANSWER: &str = "answer";
    pub const ANSWER_TYPE: &str = "answer_type";
    pub const LOSS: &str = "loss";
    pub const QUESTION_ID: &str = "question_id";
    pub const SPANS: &str = "spans";
    pub const VALUE: &str = "value";
    pub const COUNT: &str = "count";
    pub const NUMBERS: &str = "numbers";
    pub const INPUTS: &str = "inputs";
    pub const PROGRAM_EXECUTION: &str = "program_execution";
    pub const PROGRAM_NESTED_EXPRESSION: &str = "program_nested_expression";
}

const SPAN_FIELDS: [&str; 8] = [
    field::BEST_SPAN,
    field::BEST_SPAN_STR,
    field::PASSAGE_QUESTION_ATTENTION,
    field::SPAN_END_LOGITS,
    field::SPAN_END_PROBS,
    field::SPAN_START_LOGITS,
    field::SPAN_START_PROBS,
    field::TOKEN_OFFSETS,
];

const TRANSFORMER_SPAN_FIELDS: [&str; 7] = [
    field::BEST_SPAN,
    field::BEST_SPAN_SCORES,
    field::BEST_SPAN_STR,
    field::CONTEXT_TOKENS,
    field::ID,
    field::SPAN_END_LOGITS,
    field::SPAN_START_LOGITS,
];

const NUMERIC_FIELDS: [&str; 3] = [
    field::LOSS,
    field::PASSAGE_QUESTION_ATTENTION,
    field::QUESTION_ID,
];

const PROGRAM_FIELDS: [&str; 4] = [
    field::INPUTS,
    field::PROGRAM_EXECUTION,
    field::ANSWER,
    field::PROGRAM_NESTED_EXPRESSION,
];

/// Whether `key` is present on `value`. Non-objects define nothing.
pub fn is_defined(value: &Value, key: &str) -> bool {
    value.as_object().map_or(false, |obj| obj.contains_key(key))
}

fn all_defined(value: &Value, keys: &[&str]) -> bool {
    keys.iter().all(|key| is_defined(value, key))
}

fn answer(pred: &Value) -> Option<&Value> {
    pred.get(field::ANSWER)
}

fn answer_type(pred: &Value) -> Option<NaqanetAnswerType> {
    answer(pred)
        .and_then(|a| a.get(field::ANSWER_TYPE))
        .and_then(Value::as_str)
        .and_then(NaqanetAnswerType::from_str)
}

/// Both token sequences are present and are arrays.
pub fn has_tokenized_input(pred: &Value) -> bool {
    pred.get(field::PASSAGE_TOKENS).map_or(false, Value::is_array)
        && pred.get(field::QUESTION_TOKENS).map_or(false, Value::is_array)
}

/// BiDAF-style extractive span prediction.
pub fn is_span_prediction(pred: &Value) -> bool {
    has_tokenized_input(pred) && all_defined(pred, &SPAN_FIELDS)
}

/// TransformerQA-style span prediction. Does not require the tokenized
/// input fields to be absent, so a payload may satisfy this and
/// [`is_span_prediction`] at once.
pub fn is_transformer_span_prediction(pred: &Value) -> bool {
    all_defined(pred, &TRANSFORMER_SPAN_FIELDS)
}

/// NAQANet family membership, before looking at the answer type.
pub fn is_numeric_answer_prediction(pred: &Value) -> bool {
    has_tokenized_input(pred)
        && answer(pred).map_or(false, |a| is_defined(a, field::ANSWER_TYPE))
        && all_defined(pred, &NUMERIC_FIELDS)
}

pub fn is_numeric_span_answer(pred: &Value) -> bool {
    is_numeric_answer_prediction(pred)
        && matches!(
            answer_type(pred),
            Some(NaqanetAnswerType::PassageSpan) | Some(NaqanetAnswerType::QuestionSpan)
        )
        && answer(pred).map_or(false, |a| all_defined(a, &[field::SPANS, field::VALUE]))
}

pub fn is_numeric_count_answer(pred: &Value) -> bool {
    is_numeric_answer_prediction(pred)
        && answer_type(pred) == Some(NaqanetAnswerType::Count)
        && answer(pred).map_or(false, |a| is_defined(a, field::COUNT))
}

pub fn is_numeric_arithmetic_answer(pred: &Value) -> bool {
    is_numeric_answer_prediction(pred)
        && answer_type(pred) == Some(NaqanetAnswerType::Arithmetic)
        && answer(pred).map_or(false, |a| all_defined(a, &[field::VALUE, field::NUMBERS]))
}

/// NMN program prediction. The nested expression is only checked for
/// presence.
pub fn is_program_prediction(pred: &Value) -> bool {
    all_defined(pred, &PROGRAM_FIELDS)
}

/// At least one prediction family matches. Payloads failing this are
/// malformed.
pub fn is_prediction(pred: &Value) -> bool {
    is_numeric_answer_prediction(pred)
        || is_span_prediction(pred)
        || is_transformer_span_prediction(pred)
        || is_program_prediction(pred)
}
