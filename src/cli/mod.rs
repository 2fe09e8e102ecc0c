// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the linkseq command-line interface.
//!
//! Two subcommands, both replaying a JSON operation script: `run` prints what
//! every operation returned, `check` only cares whether the final sequence is
//! well-formed and exits non-zero otherwise.

pub mod display;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "linkseq",
    about = "Replay operation scripts against a verified linked sequence",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a script and print every outcome
    Run {
        /// Path to the JSON script
        file: String,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// Run a script and verify the final sequence
    Check {
        /// Path to the JSON script
        file: String,

        #[command(flatten)]
        policy: PolicyArgs,
    },
}

/// Null-policy override, taking precedence over the script's `allowNull`.
#[derive(Args)]
pub struct PolicyArgs {
    /// Admit null elements regardless of the script
    #[arg(long, conflicts_with = "deny_null")]
    pub allow_null: bool,

    /// Reject null elements regardless of the script
    #[arg(long)]
    pub deny_null: bool,
}

impl PolicyArgs {
    pub fn allow_null_override(&self) -> Option<bool> {
        match (self.allow_null, self.deny_null) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
