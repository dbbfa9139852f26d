// Model metadata as served by each model's `/info` route

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Well-known model identifiers used by the built-in demos
pub mod model_id {
    pub const ELMO_NER: &str = "named-entity-recognition";
    pub const FINE_GRAINED_NER: &str = "fine-grained-ner";
    pub const BIDAF: &str = "bidaf";
    pub const BIDAF_ELMO: &str = "bidaf-elmo";
    pub const NMN: &str = "nmn";
    pub const TRANSFORMER_QA: &str = "transformer-qa";
    pub const NAQANET: &str = "naqanet";
}

/// Metadata describing one deployed model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_card_data: Option<ModelCardData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_usage: Option<ModelUsage>,
}

impl ModelInfo {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: None,
            model_card_data: None,
            model_usage: None,
        }
    }

    pub fn with_card(mut self, card: ModelCardData) -> Self {
        self.model_card_data = Some(card);
        self
    }

    /// Name shown in the model selector; falls back to the id when the
    /// model has no card.
    pub fn display_name(&self) -> &str {
        self.model_card_data
            .as_ref()
            .map(|c| c.display_name.as_str())
            .unwrap_or(&self.id)
    }
}

/// Display metadata from the model card. Card fields this crate does not
/// interpret are kept in `extra` so they round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelCardData {
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ModelCardData {
    pub fn new(display_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            description: description.into(),
            extra: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelUsage {
    #[serde(default)]
    pub archive_file: Option<String>,
    #[serde(default)]
    pub training_config: Option<String>,
    #[serde(default)]
    pub install_instructions: Option<String>,
    #[serde(default)]
    pub overrides: Option<serde_json::Value>,
}

/// The model the user currently has selected
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedModel {
    pub id: String,
}

impl SelectedModel {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl From<&ModelInfo> for SelectedModel {
    fn from(info: &ModelInfo) -> Self {
        Self::new(info.id.clone())
    }
}

/// Find the info record for the selected model. The first entry with a
/// matching id wins.
pub fn find_model_info<'a>(
    model_info_list: &'a [ModelInfo],
    selected_model: &SelectedModel,
) -> Result<&'a ModelInfo> {
    model_info_list
        .iter()
        .find(|info| info.id == selected_model.id)
        .ok_or_else(|| {
            tracing::debug!(
                "model {} not among {} known models",
                selected_model.id,
                model_info_list.len()
            );
            Error::ModelInfoNotFound(selected_model.id.clone())
        })
}

/// Read a JSON array of model info records, as collected from the models'
/// `/info` routes.
pub fn load_model_info_list(path: impl AsRef<Path>) -> Result<Vec<ModelInfo>> {
    let content = fs::read_to_string(path.as_ref())?;
    let list: Vec<ModelInfo> = serde_json::from_str(&content)?;
    tracing::debug!("loaded {} model info records from {}", list.len(), path.as_ref().display());
    Ok(list)
}
