//! Operation scripts through the library runner.

use linkseq::script::{parse_script, run_script, Op, Outcome};
use linkseq::{ListError, SequenceConfig};
use serde_json::json;

const SCENARIO: &str = r#"{
    "allowNull": false,
    "ops": [
        {"op": "append", "value": 1},
        {"op": "append", "value": 2},
        {"op": "append", "value": 3},
        {"op": "remove", "value": 2},
        {"op": "insertAt", "value": 9, "index": 1},
        {"op": "set", "index": 2, "value": 7},
        {"op": "render"},
        {"op": "clear"},
        {"op": "get", "index": 0}
    ]
}"#;

#[test]
fn test_scenario_script() {
    let script = parse_script(SCENARIO).unwrap();
    let report = run_script(&script, script.config);

    assert_eq!(report.steps[3].outcome, Outcome::Flag(true));
    assert_eq!(report.steps[5].outcome, Outcome::Element(Some(json!(3))));
    assert_eq!(
        report.steps[6].outcome,
        Outcome::Text("LinkedSequence{1, 9, 7}".into())
    );
    assert_eq!(report.steps[7].outcome, Outcome::Done);
    assert_eq!(
        report.steps[8].outcome,
        Outcome::Error(ListError::IndexOutOfBounds { index: 0, count: 0 }.to_string())
    );
    assert_eq!(report.failed_steps(), 1);
    assert_eq!(report.rendered, "LinkedSequence{}");
    assert!(report.is_well_formed());
}

#[test]
fn test_override_changes_null_policy() {
    let script = parse_script(r#"{"ops": [{"op": "append", "value": null}]}"#).unwrap();

    let nullable = run_script(&script, script.config);
    assert_eq!(nullable.steps[0].outcome, Outcome::Flag(true));
    assert_eq!(nullable.rendered, "LinkedSequence{null}");

    let strict = run_script(&script, script.config.with_override(Some(false)));
    assert_eq!(
        strict.steps[0].outcome,
        Outcome::Error(ListError::NullNotAllowed.to_string())
    );
    assert_eq!(strict.config, SequenceConfig::non_nullable());
}

#[test]
fn test_mixed_json_elements() {
    let script = parse_script(
        r#"{"ops": [
            {"op": "addAll", "values": ["a", {"k": 1}, [1, 2], null]},
            {"op": "contains", "value": {"k": 1}},
            {"op": "containsAll", "values": ["a", "b"]},
            {"op": "size"}
        ]}"#,
    )
    .unwrap();
    let report = run_script(&script, script.config);

    assert_eq!(report.steps[1].outcome, Outcome::Flag(true));
    assert_eq!(report.steps[2].outcome, Outcome::Flag(false));
    assert_eq!(report.steps[3].outcome, Outcome::Count(4));
    assert_eq!(
        report.rendered,
        r#"LinkedSequence{"a", {"k":1}, [1,2], null}"#
    );
}

#[test]
fn test_unknown_operation_is_a_parse_error() {
    assert!(parse_script(r#"{"ops": [{"op": "shuffle"}]}"#).is_err());
    assert!(parse_script(r#"{"ops": [{"op": "get"}]}"#).is_err());
}

#[test]
fn test_report_serializes_camel_case() {
    let script = parse_script(r#"{"ops": [{"op": "isEmpty"}]}"#).unwrap();
    let report = run_script(&script, script.config);
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["config"]["allowNull"], json!(true));
    assert_eq!(value["steps"][0]["op"], json!({"op": "isEmpty"}));
    assert_eq!(
        value["steps"][0]["outcome"],
        json!({"kind": "flag", "result": true})
    );
    assert_eq!(value["verification"]["length"], json!(0));
    assert_eq!(script.ops, vec![Op::IsEmpty]);
}
