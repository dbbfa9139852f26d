// Sample payloads shaped like real back-end output

use serde_json::{json, Value};

pub fn bidaf() -> Value {
    json!({
        "best_span": [3, 4],
        "best_span_str": "Seattle",
        "passage_question_attention": [[0.1, 0.9], [0.5, 0.5]],
        "passage_tokens": ["AllenNLP", "is", "in", "Seattle", "."],
        "question_tokens": ["Where", "is", "AllenNLP", "?"],
        "span_end_logits": [0.1, 0.2, 0.3, 0.4, 0.0],
        "span_end_probs": [0.1, 0.2, 0.3, 0.4, 0.0],
        "span_start_logits": [0.1, 0.2, 0.3, 0.4, 0.0],
        "span_start_probs": [0.1, 0.2, 0.3, 0.4, 0.0],
        "token_offsets": [[0, 8], [9, 11], [12, 14], [15, 22], [22, 23]]
    })
}

pub fn transformer_qa() -> Value {
    json!({
        "best_span": [10, 11],
        "best_span_scores": 7.25,
        "best_span_str": "1885",
        "context_tokens": ["The", "bridge", "opened", "in", "1885"],
        "id": "1",
        "span_end_logits": [-1.0, 2.0],
        "span_start_logits": [-0.5, 1.5]
    })
}

fn naqanet(answer: Value) -> Value {
    json!({
        "answer": answer,
        "loss": 0.1,
        "passage_question_attention": [[0.1]],
        "passage_tokens": ["Two", "touchdowns", "."],
        "question_id": "None",
        "question_tokens": ["How", "many", "?"]
    })
}

pub fn naqanet_span() -> Value {
    naqanet(json!({
        "answer_type": "passage_span",
        "spans": [[0, 1]],
        "value": "Two touchdowns"
    }))
}

pub fn naqanet_count(count: u64) -> Value {
    naqanet(json!({"answer_type": "count", "count": count}))
}

pub fn naqanet_arithmetic() -> Value {
    naqanet(json!({
        "answer_type": "arithmetic",
        "value": "7",
        "numbers": [
            {"value": 10.0, "span": [3, 4], "sign": 1},
            {"value": 3.0, "span": [8, 9], "sign": -1}
        ]
    }))
}

pub fn nmn() -> Value {
    json!({
        "answer": "Marty Booker",
        "inputs": [
            {"name": "question", "tokens": ["Who", "scored", "first", "?"]},
            {"name": "passage", "tokens": ["Marty", "Booker", "scored", "."]}
        ],
        "passage": "Marty Booker scored.",
        "predicted_ans": "Marty Booker",
        "program_execution": [
            {"find": [{"input_name": "passage", "values": [0.7, 0.2, 0.1], "label": "find"}]},
            {"extractArgument": [{"input_name": "passage", "values": [0.9, 0.05, 0.05], "label": "arg"}]}
        ],
        "program_lisp": "(extractArgument (find))",
        "program_nested_expression": [
            {"name": "extractArgument", "identifier": 1},
            [{"name": "find", "identifier": 2}]
        ],
        "question": "Who scored first?"
    })
}
