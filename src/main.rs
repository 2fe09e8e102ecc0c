// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use linkseq::script::{parse_script, run_script, ScriptReport};

mod cli;
use cli::{Cli, Commands, PolicyArgs};

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { file, json, policy } => run(&file, json, &policy),
        Commands::Check { file, policy } => check(&file, &policy),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so `--json` output stays clean. `RUST_LOG` overrides the
/// default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn load_and_run(file: &str, policy: &PolicyArgs) -> Result<ScriptReport> {
    let text = fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))?;
    let script = parse_script(&text).with_context(|| format!("Invalid script {}", file))?;
    let config = script.config.with_override(policy.allow_null_override());
    info!(file, ops = script.ops.len(), allow_null = config.allow_null, "running script");
    Ok(run_script(&script, config))
}

fn run(file: &str, json: bool, policy: &PolicyArgs) -> Result<ExitCode> {
    let report = load_and_run(file, policy)?;
    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", out);
    } else {
        cli::display::print_report(&report, file);
    }
    Ok(exit_code(&report))
}

fn check(file: &str, policy: &PolicyArgs) -> Result<ExitCode> {
    let report = load_and_run(file, policy)?;
    match (&report.verification, &report.violation) {
        (Some(verification), _) => println!("✓ {}", verification),
        (None, Some(violation)) => println!("✗ ill-formed: {}", violation),
        (None, None) => println!("? not verified"),
    }
    Ok(exit_code(&report))
}

fn exit_code(report: &ScriptReport) -> ExitCode {
    if report.is_well_formed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
