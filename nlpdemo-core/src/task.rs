// Task cards returned by the tasks endpoint, keyed by task id

use crate::demo::DemoConfig;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskCard {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub expected_inputs: Option<String>,
    #[serde(default)]
    pub expected_outputs: Option<String>,
    #[serde(default)]
    pub scope_and_limitations: Option<String>,
    #[serde(default)]
    pub examples: Vec<BTreeMap<String, String>>,
}

/// Card for the task a demo belongs to, if the tasks listing has one.
pub fn find_task_card<'a>(
    tasks: &'a HashMap<String, TaskCard>,
    demo: &DemoConfig,
) -> Option<&'a TaskCard> {
    tasks.get(&demo.task_id)
}

fn sentence(text: &str) -> BTreeMap<String, String> {
    let mut example = BTreeMap::new();
    example.insert("sentence".to_string(), text.to_string());
    example
}

/// The card served for the `ner` task.
pub fn negation_task_card() -> TaskCard {
    TaskCard {
        id: "ner".to_string(),
        name: "Negation".to_string(),
        description: Some(
            "Negation is the tasks of detecting a negation keyword and its corresponding scope."
                .to_string(),
        ),
        expected_inputs: Some("The task expects an input sentence.".to_string()),
        expected_outputs: Some(
            "The output is all the identified named entities (which can be one or more words) in the text."
                .to_string(),
        ),
        scope_and_limitations: None,
        examples: [
            "This shirt was bought at Grandpa Joe's in downtown Deep Learning.",
            "AllenNLP is a PyTorch-based natural language processing library developed at the Allen Institute for Artificial Intelligence in Seattle.",
            "Did Uriah honestly think he could beat The Legend of Zelda in under three hours?",
            "Michael Jordan is a professor at Berkeley.",
            "My preferred candidate is Cary Moon, but she won't be the next mayor of Seattle.",
            "If you like Paul McCartney you should listen to the first Wings album.",
            "When I told John that I wanted to move to Alaska, he warned me that I'd have trouble finding a Starbucks there.",
            "This is a negation sentence for the demo, wait, no it isn't. Hi Michael Jordan.",
        ]
        .iter()
        .map(|s| sentence(s))
        .collect(),
    }
}

pub fn builtin() -> HashMap<String, TaskCard> {
    let mut tasks = HashMap::new();
    let card = negation_task_card();
    tasks.insert(card.id.clone(), card);
    tasks
}
