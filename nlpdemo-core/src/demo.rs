// Demo descriptors consumed by the demo listing

use crate::model::model_id;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a demo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoStatus {
    Active,
    Hidden,
    Deprecated,
}

impl DemoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemoStatus::Active => "active",
            DemoStatus::Hidden => "hidden",
            DemoStatus::Deprecated => "deprecated",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(DemoStatus::Active),
            "hidden" => Some(DemoStatus::Hidden),
            "deprecated" => Some(DemoStatus::Deprecated),
            _ => None,
        }
    }
}

/// Static description of a single demo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoConfig {
    pub group: String,
    pub title: String,
    pub order: i32,
    pub model_ids: Vec<String>,
    pub status: DemoStatus,
    pub task_id: String,
}

/// Named entity recognition, shown under the "Negation" title.
pub fn named_entity_recognition() -> DemoConfig {
    DemoConfig {
        group: "Annotate a sentence".to_string(),
        title: "Negation".to_string(),
        order: 1,
        model_ids: vec![
            model_id::ELMO_NER.to_string(),
            model_id::FINE_GRAINED_NER.to_string(),
        ],
        status: DemoStatus::Active,
        task_id: "ner".to_string(),
    }
}

pub fn reading_comprehension() -> DemoConfig {
    DemoConfig {
        group: "Answer a question".to_string(),
        title: "Reading Comprehension".to_string(),
        order: 1,
        model_ids: vec![
            model_id::BIDAF_ELMO.to_string(),
            model_id::BIDAF.to_string(),
            model_id::NMN.to_string(),
            model_id::TRANSFORMER_QA.to_string(),
            model_id::NAQANET.to_string(),
        ],
        status: DemoStatus::Active,
        task_id: "rc".to_string(),
    }
}

pub fn builtin() -> Vec<DemoConfig> {
    vec![named_entity_recognition(), reading_comprehension()]
}
