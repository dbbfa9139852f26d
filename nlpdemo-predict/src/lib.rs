//! Runtime discrimination of reading-comprehension prediction payloads.
//!
//! Model back-ends return structurally different JSON with no type tag.
//! [`classify`] picks the shape by checking the [`predicate`] functions in
//! a fixed priority order, [`get_basic_answer`] pulls out the value shown
//! as "the" answer, and [`Prediction::from_value`] narrows a payload into
//! typed structs for rendering.

pub mod error;
pub mod predicate;
pub mod classify;
pub mod types;
pub mod program;
pub mod prediction;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod classify_tests;

pub use error::{PredictionError, Result};
pub use classify::{classify, get_basic_answer, BasicAnswer, PredictionKind};
pub use predicate::{
    has_tokenized_input, is_numeric_answer_prediction, is_numeric_arithmetic_answer,
    is_numeric_count_answer, is_numeric_span_answer, is_prediction, is_program_prediction,
    is_span_prediction, is_transformer_span_prediction,
};
pub use prediction::Prediction;
pub use program::{NestedProgram, ProgramNode};
pub use types::*;
