//! Mutation smoke-test runner for transcript QA webhooks.
//!
//! A baseline transcript extraction is posted to the QA webhook together with
//! a handful of single-field corruptions of it. The webhook is expected to
//! answer `PASS` for the baseline and `FAIL` for every corruption.
//!
//! - Baseline record and JSON loading ([`TranscriptRecord`])
//! - Copy-then-mutate scenarios ([`Mutation`], [`Scenario`])
//! - HTTP client for the webhook ([`WebhookClient`])
//! - Verdict interpretation ([`evaluate`], [`error_count`])
//! - Sequential runner and console/JSON reporting ([`Runner`], [`report`])
//!
//! # Quick Start
//!
//! ```no_run
//! use torture_core::{default_scenarios, report, Runner, RunnerConfig, TranscriptRecord, WebhookClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = WebhookClient::new(&RunnerConfig::from_env())?;
//! let runner = Runner::new(client);
//! let base = TranscriptRecord::baseline();
//!
//! let summary = runner
//!     .run_suite(&base, &default_scenarios(), |_| {})
//!     .await;
//! println!("{}", report::format_summary(&summary));
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `TORTURE_WEBHOOK_URL` | Webhook URL (default: [`DEFAULT_WEBHOOK_URL`]) |
//! | `TORTURE_TIMEOUT_SECS` | Request timeout in seconds (default: transport default) |

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod mutation;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod verdict;

pub use client::{WebhookClient, USER_AGENT_VALUE};
pub use config::{RunnerConfig, DEFAULT_WEBHOOK_URL};
pub use error::{ConfigError, ConfigResult, MutationError, WebhookError, WebhookResult};
pub use model::{CourseRow, TranscriptRecord};
pub use mutation::Mutation;
pub use runner::{CaseEvent, CaseOutcome, CaseReport, RunSummary, Runner};
pub use scenario::{default_scenarios, select, Scenario, PERFECT_DATA};
pub use verdict::{error_count, evaluate, Expectation, Verdict};
