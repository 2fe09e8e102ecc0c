// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Operation scripts: a JSON description of calls replayed against a sequence.
//!
//! This is what the `linkseq` binary executes. A script is a config plus a
//! list of operations; each operation produces an [`Outcome`], and a failing
//! operation is recorded rather than aborting the run, the same way the
//! sequence itself leaves its state untouched on error.
//!
//! ```json
//! {
//!   "allowNull": false,
//!   "ops": [
//!     { "op": "append", "value": 1 },
//!     { "op": "insertAt", "value": 9, "index": 1 },
//!     { "op": "get", "index": 1 },
//!     { "op": "containsAll", "values": [1, 9] }
//!   ]
//! }
//! ```
//!
//! Elements are arbitrary JSON values; JSON `null` is the absent element.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::SequenceConfig;
use crate::error::ListError;
use crate::sequence::LinkedSequence;
use crate::verify::VerificationReport;

/// A parsed script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    #[serde(flatten)]
    pub config: SequenceConfig,
    #[serde(default)]
    pub ops: Vec<Op>,
}

/// One sequence call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Op {
    Append {
        #[serde(default)]
        value: Value,
    },
    Prepend {
        #[serde(default)]
        value: Value,
    },
    InsertAt {
        #[serde(default)]
        value: Value,
        index: usize,
    },
    Remove {
        #[serde(default)]
        value: Value,
    },
    Get {
        index: usize,
    },
    Set {
        index: usize,
        #[serde(default)]
        value: Value,
    },
    Contains {
        #[serde(default)]
        value: Value,
    },
    ContainsAll {
        #[serde(default)]
        values: Option<Vec<Value>>,
    },
    AddAll {
        #[serde(default)]
        values: Option<Vec<Value>>,
    },
    Clear,
    Size,
    IsEmpty,
    Render,
}

/// Result of a single operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "result", rename_all = "camelCase")]
pub enum Outcome {
    /// Completed with nothing to report (`clear`).
    Done,
    Flag(bool),
    /// An element; `None` for a stored null.
    Element(Option<Value>),
    Count(usize),
    Text(String),
    Error(String),
}

/// An operation together with its outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub op: Op,
    pub outcome: Outcome,
}

/// Everything a script run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptReport {
    pub config: SequenceConfig,
    pub steps: Vec<Step>,
    /// `Display` rendering of the final sequence.
    pub rendered: String,
    pub verification: Option<VerificationReport>,
    /// Set instead of `verification` when the final state is ill-formed.
    pub violation: Option<String>,
}

impl ScriptReport {
    pub fn failed_steps(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step.outcome, Outcome::Error(_)))
            .count()
    }

    pub fn is_well_formed(&self) -> bool {
        self.violation.is_none()
    }
}

/// Parse a script from JSON text.
pub fn parse_script(text: &str) -> Result<Script, serde_json::Error> {
    serde_json::from_str(text)
}

/// JSON `null` is the absent element.
fn element(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        value => Some(value),
    }
}

fn elements(values: Option<Vec<Value>>) -> Option<Vec<Option<Value>>> {
    values.map(|values| values.into_iter().map(element).collect())
}

fn flag(result: Result<bool, ListError>) -> Outcome {
    result.map_or_else(|err| Outcome::Error(err.to_string()), Outcome::Flag)
}

/// Apply one operation to `seq`.
pub fn apply(seq: &mut LinkedSequence<Value>, op: &Op) -> Outcome {
    match op.clone() {
        Op::Append { value } => flag(seq.append(element(value))),
        Op::Prepend { value } => flag(seq.prepend(element(value))),
        Op::InsertAt { value, index } => flag(seq.insert_at(element(value), index)),
        Op::Remove { value } => flag(seq.remove(element(value))),
        Op::Get { index } => match seq.get(index) {
            Ok(value) => Outcome::Element(value.cloned()),
            Err(err) => Outcome::Error(err.to_string()),
        },
        Op::Set { index, value } => match seq.set(index, element(value)) {
            Ok(previous) => Outcome::Element(previous),
            Err(err) => Outcome::Error(err.to_string()),
        },
        Op::Contains { value } => Outcome::Flag(seq.contains(element(value))),
        Op::ContainsAll { values } => flag(seq.contains_all(elements(values))),
        Op::AddAll { values } => flag(seq.add_all(elements(values))),
        Op::Clear => {
            seq.clear();
            Outcome::Done
        }
        Op::Size => Outcome::Count(seq.len()),
        Op::IsEmpty => Outcome::Flag(seq.is_empty()),
        Op::Render => Outcome::Text(seq.to_string()),
    }
}

/// Replay `script` against a fresh sequence built from `config`.
pub fn run_script(script: &Script, config: SequenceConfig) -> ScriptReport {
    let mut seq = LinkedSequence::with_config(config);
    let mut steps = Vec::with_capacity(script.ops.len());

    for (position, op) in script.ops.iter().enumerate() {
        let outcome = apply(&mut seq, op);
        match &outcome {
            Outcome::Error(message) => debug!(position, ?op, %message, "operation rejected"),
            _ => debug!(position, ?op, ?outcome, "operation applied"),
        }
        steps.push(Step {
            op: op.clone(),
            outcome,
        });
    }

    let (verification, violation) = match seq.verify() {
        Ok(report) => (Some(report), None),
        Err(err) => {
            warn!(%err, "sequence ill-formed after script");
            (None, Some(err.to_string()))
        }
    };

    ScriptReport {
        config,
        steps,
        rendered: seq.to_string(),
        verification,
        violation,
    }
}
