//! Sequential case runner.

use std::time::Instant;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info_span, warn, Instrument};

use crate::client::WebhookClient;
use crate::error::WebhookError;
use crate::model::TranscriptRecord;
use crate::scenario::Scenario;
use crate::verdict::{evaluate, Expectation, Verdict};

/// How a single case ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CaseOutcome {
    /// Webhook status matched the expectation.
    Passed {
        #[serde(skip_serializing_if = "Option::is_none")]
        error_count: Option<usize>,
    },
    /// Webhook answered with a non-200 status.
    HttpError { status: u16, body: String },
    /// Webhook answered, but with the wrong verdict.
    Mismatch { response: Value },
    /// Transport failure or unparseable body.
    ConnectionError { message: String },
    /// The scenario could not be derived from the baseline; nothing was sent.
    MutationError { message: String },
}

impl CaseOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    /// The webhook answered but the case did not pass.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::HttpError { .. } | Self::Mismatch { .. })
    }

    /// The case never got a usable answer.
    pub fn is_errored(&self) -> bool {
        matches!(
            self,
            Self::ConnectionError { .. } | Self::MutationError { .. }
        )
    }
}

/// Result of one case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseReport {
    pub name: String,
    pub expected: Expectation,
    pub outcome: CaseOutcome,
    pub duration_ms: u64,
}

/// Results of a whole run, in run order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub cases: Vec<CaseReport>,
}

impl RunSummary {
    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.outcome.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.cases.iter().filter(|c| c.outcome.is_failed()).count()
    }

    pub fn errored(&self) -> usize {
        self.cases.iter().filter(|c| c.outcome.is_errored()).count()
    }

    pub fn all_passed(&self) -> bool {
        self.cases.iter().all(|c| c.outcome.is_passed())
    }
}

/// Progress notifications emitted while a suite runs.
#[derive(Debug, Clone, Copy)]
pub enum CaseEvent<'a> {
    Started { name: &'a str },
    Finished(&'a CaseReport),
}

/// Runs cases one at a time against a webhook.
#[derive(Debug, Clone)]
pub struct Runner {
    client: WebhookClient,
}

impl Runner {
    pub fn new(client: WebhookClient) -> Self {
        Self { client }
    }

    /// Post `record` and judge the reply. Never fails: every error becomes an outcome.
    pub async fn run_case(
        &self,
        name: &str,
        record: &TranscriptRecord,
        expect_pass: bool,
    ) -> CaseReport {
        let expected = Expectation::from_expect_pass(expect_pass);
        let span = info_span!("case", name = %name, expected = %expected);

        let started = Instant::now();
        let response = self.client.post_record(record).instrument(span).await;
        let outcome = match response {
            Ok(body) => match evaluate(expected, &body) {
                Verdict::Matched { error_count } => CaseOutcome::Passed { error_count },
                Verdict::Mismatched { status } => {
                    debug!(status = ?status, "unexpected verdict");
                    CaseOutcome::Mismatch { response: body }
                }
            },
            Err(WebhookError::HttpStatus { status, body }) => {
                CaseOutcome::HttpError { status, body }
            }
            Err(e) => CaseOutcome::ConnectionError {
                message: e.to_string(),
            },
        };

        CaseReport {
            name: name.to_string(),
            expected,
            outcome,
            duration_ms: elapsed_ms(started),
        }
    }

    /// Run every scenario in order against copies of `base`.
    ///
    /// Each case is awaited to completion before the next starts. A failing case
    /// never stops the run.
    pub async fn run_suite<F>(
        &self,
        base: &TranscriptRecord,
        scenarios: &[Scenario],
        mut on_event: F,
    ) -> RunSummary
    where
        F: FnMut(CaseEvent<'_>),
    {
        let mut summary = RunSummary::default();

        for scenario in scenarios {
            on_event(CaseEvent::Started {
                name: &scenario.name,
            });

            let report = match scenario.build(base) {
                Ok(record) => {
                    self.run_case(&scenario.name, &record, scenario.mutation.is_none())
                        .await
                }
                Err(e) => {
                    warn!(case = %scenario.name, error = %e, "cannot derive case from baseline");
                    CaseReport {
                        name: scenario.name.clone(),
                        expected: scenario.expectation(),
                        outcome: CaseOutcome::MutationError {
                            message: e.to_string(),
                        },
                        duration_ms: 0,
                    }
                }
            };

            on_event(CaseEvent::Finished(&report));
            summary.cases.push(report);
        }

        summary
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
