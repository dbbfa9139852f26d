#[cfg(test)]
mod classify_tests {
    use crate::classify::*;
    use crate::error::PredictionError;
    use crate::fixtures;
    use serde_json::json;

    #[test]
    fn test_classify_each_shape() {
        assert_eq!(classify(&fixtures::bidaf()), PredictionKind::Span);
        assert_eq!(classify(&fixtures::transformer_qa()), PredictionKind::TransformerSpan);
        assert_eq!(classify(&fixtures::naqanet_span()), PredictionKind::NumericSpan);
        assert_eq!(classify(&fixtures::naqanet_count(2)), PredictionKind::NumericCount);
        assert_eq!(classify(&fixtures::naqanet_arithmetic()), PredictionKind::NumericArithmetic);
        assert_eq!(classify(&fixtures::nmn()), PredictionKind::Program);
        assert_eq!(classify(&json!({"answer": 42})), PredictionKind::Unknown);
    }

    #[test]
    fn test_span_wins_over_transformer_span() {
        let mut pred = fixtures::bidaf();
        pred["best_span_scores"] = json!(3.5);
        pred["context_tokens"] = json!(["AllenNLP"]);
        pred["id"] = json!("q1");
        assert!(PredictionKind::TransformerSpan.matches(&pred));
        assert_eq!(classify(&pred), PredictionKind::Span);
    }

    #[test]
    fn test_numeric_wins_over_program() {
        let mut pred = fixtures::naqanet_count(4);
        let nmn = fixtures::nmn();
        for key in ["inputs", "program_execution", "program_nested_expression"] {
            pred[key] = nmn[key].clone();
        }
        assert!(PredictionKind::Program.matches(&pred));
        assert_eq!(classify(&pred), PredictionKind::NumericCount);
        assert_eq!(get_basic_answer(&pred).unwrap(), BasicAnswer::from(4));
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(PredictionKind::PRIORITY[0], PredictionKind::Span);
        assert_eq!(PredictionKind::PRIORITY[1], PredictionKind::TransformerSpan);
        assert_eq!(PredictionKind::PRIORITY[5], PredictionKind::Program);
        assert!(!PredictionKind::PRIORITY.contains(&PredictionKind::Unknown));
        assert!(!PredictionKind::Unknown.matches(&fixtures::bidaf()));
    }

    #[test]
    fn test_basic_answer_span() {
        assert_eq!(get_basic_answer(&fixtures::bidaf()).unwrap(), BasicAnswer::from("Seattle"));
        assert_eq!(
            get_basic_answer(&fixtures::transformer_qa()).unwrap(),
            BasicAnswer::from("1885")
        );
    }

    #[test]
    fn test_basic_answer_empty_span_string() {
        let mut pred = fixtures::bidaf();
        pred["best_span_str"] = json!("");
        assert_eq!(classify(&pred), PredictionKind::Span);
        assert_eq!(get_basic_answer(&pred).unwrap(), BasicAnswer::Text(String::new()));
    }

    #[test]
    fn test_basic_answer_numeric() {
        assert_eq!(
            get_basic_answer(&fixtures::naqanet_span()).unwrap(),
            BasicAnswer::from("Two touchdowns")
        );
        assert_eq!(get_basic_answer(&fixtures::naqanet_arithmetic()).unwrap(), BasicAnswer::from("7"));
    }

    #[test]
    fn test_basic_answer_count_zero() {
        let pred = json!({
            "passage_tokens": ["a"],
            "question_tokens": ["b"],
            "answer": {"answer_type": "count", "count": 0},
            "loss": 0.1,
            "passage_question_attention": [[0.1]],
            "question_id": null
        });
        assert_eq!(classify(&pred), PredictionKind::NumericCount);
        let answer = get_basic_answer(&pred).unwrap();
        assert_eq!(answer.as_number().and_then(|n| n.as_u64()), Some(0));
        assert_eq!(answer.to_string(), "0");
    }

    #[test]
    fn test_basic_answer_program() {
        assert_eq!(get_basic_answer(&fixtures::nmn()).unwrap(), BasicAnswer::from("Marty Booker"));
    }

    #[test]
    fn test_basic_answer_missing_nested_expression() {
        let mut pred = fixtures::nmn();
        pred.as_object_mut().unwrap().remove("program_nested_expression");
        assert_eq!(classify(&pred), PredictionKind::Unknown);
        match get_basic_answer(&pred) {
            Err(PredictionError::InvalidModelResponse(msg)) => assert_eq!(msg, "Answer not found."),
            other => panic!("Expected InvalidModelResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_basic_answer_family_without_refinement() {
        let mut pred = fixtures::naqanet_span();
        pred["answer"]["answer_type"] = json!("date");
        assert!(crate::is_prediction(&pred));
        assert_eq!(classify(&pred), PredictionKind::Unknown);
        assert!(matches!(
            get_basic_answer(&pred),
            Err(PredictionError::InvalidModelResponse(_))
        ));
    }

    #[test]
    fn test_basic_answer_wrong_json_type() {
        let mut pred = fixtures::transformer_qa();
        pred["best_span_str"] = json!(null);
        assert_eq!(classify(&pred), PredictionKind::TransformerSpan);
        assert!(matches!(
            get_basic_answer(&pred),
            Err(PredictionError::InvalidModelResponse(_))
        ));
    }

    #[test]
    fn test_basic_answer_serializes_untagged() {
        assert_eq!(serde_json::to_value(BasicAnswer::from("x")).unwrap(), json!("x"));
        assert_eq!(serde_json::to_value(BasicAnswer::from(3)).unwrap(), json!(3));
        assert_eq!(BasicAnswer::from("x").as_str(), Some("x"));
        assert!(BasicAnswer::from(3).as_str().is_none());
    }

    #[test]
    fn test_kind_helpers() {
        assert!(PredictionKind::NumericCount.is_numeric());
        assert!(!PredictionKind::Program.is_numeric());
        assert_eq!(PredictionKind::TransformerSpan.to_string(), "transformer_span");
    }

    mod priority_props {
        use crate::classify::*;
        use crate::fixtures;
        use proptest::prelude::*;
        use serde_json::Value;

        // Union of the fields of every known shape, each kept or dropped
        fn union_payload() -> Value {
            let mut merged = serde_json::Map::new();
            for pred in [
                fixtures::bidaf(),
                fixtures::transformer_qa(),
                fixtures::naqanet_count(1),
                fixtures::nmn(),
            ] {
                if let Value::Object(obj) = pred {
                    for (k, v) in obj {
                        merged.entry(k).or_insert(v);
                    }
                }
            }
            Value::Object(merged)
        }

        fn payload_strategy() -> impl Strategy<Value = Value> {
            let keys: Vec<String> = union_payload()
                .as_object()
                .map(|obj| obj.keys().cloned().collect())
                .unwrap_or_default();
            prop::collection::vec(any::<bool>(), keys.len()).prop_map(move |keep| {
                let mut payload = union_payload();
                if let Some(obj) = payload.as_object_mut() {
                    for (key, keep) in keys.iter().zip(keep) {
                        if !keep {
                            obj.remove(key);
                        }
                    }
                }
                payload
            })
        }

        proptest! {
            #[test]
            fn test_classify_takes_highest_priority_match(payload in payload_strategy()) {
                let kind = classify(&payload);
                let matching: Vec<PredictionKind> = PredictionKind::PRIORITY
                    .iter()
                    .copied()
                    .filter(|k| k.matches(&payload))
                    .collect();
                prop_assert_eq!(kind, matching.first().copied().unwrap_or(PredictionKind::Unknown));
                if kind == PredictionKind::Unknown {
                    prop_assert!(get_basic_answer(&payload).is_err());
                }
            }
        }
    }
}
