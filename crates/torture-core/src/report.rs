//! Console and JSON rendering of case results.
//!
//! Rendering is pure: functions return lines and the caller decides where they go.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::runner::{CaseOutcome, CaseReport, RunSummary};

/// Hint printed after a connection error.
pub const CONNECTION_HINT: &str =
    "   (Make sure the webhook service is running and the URL is correct)";

/// Line printed before a case is sent.
#[must_use]
pub fn format_started(name: &str) -> String {
    format!("Running Test: {}...", name)
}

/// Lines describing how a case ended.
#[must_use]
pub fn format_outcome(report: &CaseReport) -> Vec<String> {
    let name = &report.name;
    match &report.outcome {
        CaseOutcome::Passed { error_count: None } => {
            vec!["✅ SUCCESS: Passed valid data.".to_string()]
        }
        CaseOutcome::Passed {
            error_count: Some(count),
        } => vec![
            format!("✅ SUCCESS: Correctly caught error in {}.", name),
            format!("   Errors found: {}", count),
        ],
        CaseOutcome::HttpError { status, body } => {
            let mut lines = vec![format!("❌ ERROR: Webhook returned status {}", status)];
            if !body.trim().is_empty() {
                lines.push(format!("   System Response: {}", body.trim()));
            }
            lines
        }
        CaseOutcome::Mismatch { response } => vec![
            format!(
                "❌ FAILURE: QA System output unexpected result for {}",
                name
            ),
            format!("   System Response: {}", response),
        ],
        CaseOutcome::ConnectionError { message } => vec![
            format!("❌ CONNECTION ERROR: {}", message),
            CONNECTION_HINT.to_string(),
        ],
        CaseOutcome::MutationError { message } => {
            vec![format!("❌ MUTATION ERROR: {}", message)]
        }
    }
}

/// Footer with totals.
#[must_use]
pub fn format_summary(summary: &RunSummary) -> String {
    format!(
        "Summary: {} passed, {} failed, {} errored",
        summary.passed(),
        summary.failed(),
        summary.errored()
    )
}

/// Machine-readable run report.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: String,
    pub webhook_url: &'a str,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
    pub cases: &'a [CaseReport],
}

impl<'a> JsonReport<'a> {
    pub fn new(
        summary: &'a RunSummary,
        webhook_url: &'a str,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            webhook_url,
            passed: summary.passed(),
            failed: summary.failed(),
            errored: summary.errored(),
            cases: &summary.cases,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::Expectation;
    use chrono::TimeZone;
    use serde_json::json;

    fn report(name: &str, outcome: CaseOutcome) -> CaseReport {
        CaseReport {
            name: name.to_string(),
            expected: Expectation::Fail,
            outcome,
            duration_ms: 12,
        }
    }

    #[test]
    fn test_started_line() {
        assert_eq!(format_started("Bad GPA"), "Running Test: Bad GPA...");
    }

    #[test]
    fn test_pass_lines() {
        let r = report("Perfect Data", CaseOutcome::Passed { error_count: None });
        assert_eq!(format_outcome(&r), vec!["✅ SUCCESS: Passed valid data."]);
    }

    #[test]
    fn test_caught_error_lines() {
        let r = report(
            "Bad Grade",
            CaseOutcome::Passed {
                error_count: Some(2),
            },
        );
        assert_eq!(
            format_outcome(&r),
            vec![
                "✅ SUCCESS: Correctly caught error in Bad Grade.",
                "   Errors found: 2"
            ]
        );
    }

    #[test]
    fn test_http_error_lines() {
        let r = report(
            "Bad GPA",
            CaseOutcome::HttpError {
                status: 500,
                body: String::new(),
            },
        );
        assert_eq!(
            format_outcome(&r),
            vec!["❌ ERROR: Webhook returned status 500"]
        );

        let r = report(
            "Bad GPA",
            CaseOutcome::HttpError {
                status: 404,
                body: "not registered\n".to_string(),
            },
        );
        assert_eq!(format_outcome(&r)[1], "   System Response: not registered");
    }

    #[test]
    fn test_mismatch_lines_include_response() {
        let r = report(
            "Missing Course",
            CaseOutcome::Mismatch {
                response: json!({"status": "PASS"}),
            },
        );
        assert_eq!(
            format_outcome(&r),
            vec![
                "❌ FAILURE: QA System output unexpected result for Missing Course",
                r#"   System Response: {"status":"PASS"}"#
            ]
        );
    }

    #[test]
    fn test_connection_error_lines() {
        let r = report(
            "Perfect Data",
            CaseOutcome::ConnectionError {
                message: "network error: connection refused".to_string(),
            },
        );
        let lines = format_outcome(&r);
        assert_eq!(
            lines[0],
            "❌ CONNECTION ERROR: network error: connection refused"
        );
        assert_eq!(lines[1], CONNECTION_HINT);
    }

    #[test]
    fn test_mutation_error_line() {
        let r = report(
            "Bad Grade",
            CaseOutcome::MutationError {
                message: "course index 2 out of range (baseline has 1 courses)".to_string(),
            },
        );
        assert_eq!(
            format_outcome(&r),
            vec!["❌ MUTATION ERROR: course index 2 out of range (baseline has 1 courses)"]
        );
    }

    #[test]
    fn test_summary_and_json_report() {
        let summary = RunSummary {
            cases: vec![
                report("Perfect Data", CaseOutcome::Passed { error_count: None }),
                report(
                    "Bad GPA",
                    CaseOutcome::ConnectionError {
                        message: "refused".to_string(),
                    },
                ),
            ],
        };
        assert_eq!(
            format_summary(&summary),
            "Summary: 1 passed, 0 failed, 1 errored"
        );

        let at = Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap();
        let value =
            serde_json::to_value(JsonReport::new(&summary, "http://localhost/hook", at)).unwrap();
        assert_eq!(value["generated_at"], "2026-10-17T09:30:00Z");
        assert_eq!(value["passed"], 1);
        assert_eq!(value["errored"], 1);
        assert_eq!(value["cases"][1]["name"], "Bad GPA");
        assert_eq!(value["cases"][1]["expected"], "FAIL");
        assert_eq!(value["cases"][1]["outcome"]["kind"], "connection_error");
    }
}
