//! AgentIdentity CLI — `agentid` command.
//!
//! Provides a command-line interface for constructing agent identities
//! and checking candidate identifiers against the validity contract.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use agent_identity::AgentIdentity;

// ── CLI structure ─────────────────────────────────────────────────────────────

/// AgentIdentity CLI — construct and validate agent identifiers.
#[derive(Parser, Debug)]
#[command(
    name = "agentid",
    about = "AgentIdentity CLI",
    version,
    long_about = "agentid — AgentIdentity CLI\n\nConstruct agent identities and check candidate identifiers."
)]
struct Cli {
    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Construct an agent identity and print its identifier
    Create {
        /// Candidate agent identifier
        candidate: String,
    },

    /// Check one or more candidate identifiers
    Check {
        /// Candidate agent identifiers
        #[arg(required = true)]
        candidates: Vec<String>,
    },
}

/// Outcome of checking a single candidate.
#[derive(Serialize, Debug)]
struct CheckReport {
    candidate: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

// ── Main entry point ──────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Create { candidate } => cmd_create(&candidate, cli.json, verbose),
        Commands::Check { candidates } => cmd_check(&candidates, cli.json, verbose),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

// ── Command implementations ───────────────────────────────────────────────────

/// `agentid create CANDIDATE`
fn cmd_create(candidate: &str, json: bool, verbose: bool) -> Result<()> {
    let identity = AgentIdentity::new(candidate).context("failed to create agent identity")?;
    log::info!("created agent identity {identity}");

    if json {
        let out = serde_json::json!({ "id": identity });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("failed to serialize identity")?
        );
        return Ok(());
    }

    println!("Created agent identity");
    println!("  ID: {identity}");
    if verbose {
        println!("  Length: {} byte(s)", identity.id().len());
    }

    Ok(())
}

/// `agentid check CANDIDATE...`
fn cmd_check(candidates: &[String], json: bool, verbose: bool) -> Result<()> {
    let reports: Vec<CheckReport> = candidates
        .iter()
        .map(|candidate| match AgentIdentity::new(candidate.as_str()) {
            Ok(_) => CheckReport {
                candidate: candidate.clone(),
                valid: true,
                error: None,
            },
            Err(e) => CheckReport {
                candidate: candidate.clone(),
                valid: false,
                error: Some(e.to_string()),
            },
        })
        .collect();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).context("failed to serialize report")?
        );
    } else {
        for report in &reports {
            match &report.error {
                None => println!("ok       {:?}", report.candidate),
                Some(e) => println!("invalid  {:?} — {e}", report.candidate),
            }
        }
    }

    let invalid = reports.iter().filter(|r| !r.valid).count();
    if verbose && !json {
        println!(
            "Checked {} candidate(s): {} valid, {invalid} invalid",
            reports.len(),
            reports.len() - invalid
        );
    }
    if invalid > 0 {
        return Err(anyhow!(
            "{invalid} of {} candidate(s) invalid",
            reports.len()
        ));
    }

    Ok(())
}
