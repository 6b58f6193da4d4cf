use anyhow::Context;
use torture_core::report::{format_outcome, format_started, format_summary, JsonReport};
use torture_core::{
    default_scenarios, select, CaseEvent, Runner, RunnerConfig, TranscriptRecord, WebhookClient,
};

use super::args::{Cli, OutputFormat};
use crate::exit_codes;

pub(crate) fn resolve_config(cli: &Cli) -> RunnerConfig {
    let mut config = RunnerConfig::from_env();
    if let Some(url) = &cli.url {
        config = config.with_url(url.clone());
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout_secs(secs);
    }
    config
}

pub async fn run(cli: Cli) -> anyhow::Result<i32> {
    let scenarios = select(default_scenarios(), &cli.only)?;

    if cli.list {
        for scenario in &scenarios {
            println!("{}\t{}", scenario.name, scenario.expectation());
        }
        return Ok(exit_codes::SUCCESS);
    }

    let base = match &cli.baseline {
        Some(path) => TranscriptRecord::from_json_file(path)?,
        None => TranscriptRecord::baseline(),
    };

    let config = resolve_config(&cli);
    let client = WebhookClient::new(&config).context("failed to set up webhook client")?;
    tracing::info!(url = %client.url(), cases = scenarios.len(), "starting run");

    let text = cli.format == OutputFormat::Text;
    let summary = Runner::new(client)
        .run_suite(&base, &scenarios, |event| {
            if !text {
                return;
            }
            match event {
                CaseEvent::Started { name } => println!("{}", format_started(name)),
                CaseEvent::Finished(report) => {
                    for line in format_outcome(report) {
                        println!("{}", line);
                    }
                }
            }
        })
        .await;

    match cli.format {
        OutputFormat::Text => println!("{}", format_summary(&summary)),
        OutputFormat::Json => {
            let report = JsonReport::new(&summary, &config.url, chrono::Utc::now());
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if cli.strict && !summary.all_passed() {
        Ok(exit_codes::CASE_FAILED)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}
