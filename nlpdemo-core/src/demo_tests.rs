#[cfg(test)]
mod demo_tests {
    use crate::demo::{self, DemoConfig, DemoStatus};
    use crate::task;
    use serde_json::json;

    #[test]
    fn test_demo_status_from_str() {
        assert_eq!(DemoStatus::from_str("active"), Some(DemoStatus::Active));
        assert_eq!(DemoStatus::from_str("Hidden"), Some(DemoStatus::Hidden));
        assert_eq!(DemoStatus::from_str("deprecated"), Some(DemoStatus::Deprecated));
        assert_eq!(DemoStatus::from_str("beta"), None);
        assert_eq!(DemoStatus::Deprecated.as_str(), "deprecated");
    }

    #[test]
    fn test_demo_config_wire_format() {
        let config: DemoConfig = serde_json::from_value(json!({
            "group": "Annotate a sentence",
            "title": "Negation",
            "order": 1,
            "modelIds": ["named-entity-recognition", "fine-grained-ner"],
            "status": "active",
            "taskId": "ner"
        }))
        .unwrap();
        assert_eq!(config, demo::named_entity_recognition());
    }

    #[test]
    fn test_demo_config_rejects_unknown_status() {
        let result = serde_json::from_value::<DemoConfig>(json!({
            "group": "g",
            "title": "t",
            "order": 2,
            "modelIds": [],
            "status": "experimental",
            "taskId": "x"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_builtin_demos() {
        let demos = demo::builtin();
        assert_eq!(demos.len(), 2);
        assert!(demos.iter().all(|d| d.status == DemoStatus::Active));
        let rc = demo::reading_comprehension();
        assert_eq!(rc.model_ids.len(), 5);
        assert_eq!(rc.task_id, "rc");
    }

    #[test]
    fn test_find_task_card() {
        let tasks = task::builtin();
        let ner = demo::named_entity_recognition();
        let card = task::find_task_card(&tasks, &ner).unwrap();
        assert_eq!(card.name, "Negation");
        assert!(card.scope_and_limitations.is_none());
        assert_eq!(card.examples.len(), 8);
        assert!(card.examples.iter().all(|e| e.contains_key("sentence")));

        assert!(task::find_task_card(&tasks, &demo::reading_comprehension()).is_none());
    }

    #[test]
    fn test_task_card_null_scope() {
        let card: task::TaskCard = serde_json::from_value(json!({
            "id": "ner",
            "name": "Negation",
            "scope_and_limitations": null,
            "examples": [{"sentence": "Michael Jordan is a professor at Berkeley."}]
        }))
        .unwrap();
        assert!(card.scope_and_limitations.is_none());
        assert!(card.description.is_none());
        assert_eq!(card.examples.len(), 1);
    }
}
