//! Interpretation of the webhook's JSON verdict.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome the webhook is expected to report for a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Expectation {
    Pass,
    Fail,
}

impl Expectation {
    pub fn from_expect_pass(expect_pass: bool) -> Self {
        if expect_pass {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    /// Value of the `status` field that satisfies this expectation.
    pub fn wire_status(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_status())
    }
}

/// Result of comparing a response body with an expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// `status` matched. `error_count` is only reported for expected failures.
    Matched { error_count: Option<usize> },
    /// `status` was missing, not a string, or the wrong value.
    Mismatched { status: Option<String> },
}

/// Compare `body.status` with the expectation.
pub fn evaluate(expectation: Expectation, body: &Value) -> Verdict {
    let status = body.get("status").and_then(Value::as_str);
    if status == Some(expectation.wire_status()) {
        let error_count = match expectation {
            Expectation::Pass => None,
            Expectation::Fail => Some(error_count(body)),
        };
        Verdict::Matched { error_count }
    } else {
        Verdict::Mismatched {
            status: status.map(String::from),
        }
    }
}

/// Number of entries in the `errors` field.
///
/// The grader returns either a list of error descriptors or a single message
/// string. A non-empty string counts as one error.
pub fn error_count(body: &Value) -> usize {
    match body.get("errors") {
        None | Some(Value::Null) => 0,
        Some(Value::Array(items)) => items.len(),
        Some(Value::String(s)) => usize::from(!s.is_empty()),
        Some(Value::Object(map)) => map.len(),
        Some(_) => 1,
    }
}
