//! `fieldvet` — vet free-text form submissions from the command line.
//!
//! Exit codes: 0 the text was accepted, 1 it was rejected, 2 the command
//! itself failed (bad policy file, unreadable input).

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fieldvet_core::{Evaluation, Evaluator, FieldPolicy, FleschReadability};
use fieldvet_store::{CachedStore, InMemoryStore};

#[derive(Parser)]
#[command(name = "fieldvet", version, about = "Vet free-text form submissions")]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate text against a field policy
    Check {
        /// The text to evaluate; read from stdin when omitted
        text: Option<String>,

        /// Policy file (YAML or JSON); overrides --preset
        #[arg(long)]
        policy: Option<PathBuf>,

        /// Built-in policy to use
        #[arg(long, value_enum, default_value = "title")]
        preset: Preset,

        /// Seed the uniqueness store from a newline-separated file of
        /// existing names
        #[arg(long)]
        names: Option<PathBuf>,

        /// Put a TTL cache in front of the uniqueness store (e.g. "30s")
        #[arg(long, value_name = "DURATION")]
        cache_ttl: Option<String>,

        /// Emit the full evaluation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Work with policy files
    Policy {
        #[command(subcommand)]
        command: PolicyCommand,
    },
}

#[derive(Subcommand)]
enum PolicyCommand {
    /// Check a policy file against the schema and structural rules
    Validate {
        /// Policy file (YAML or JSON)
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    Title,
    Description,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Check {
            text,
            policy,
            preset,
            names,
            cache_ttl,
            json,
        } => check(text, policy, preset, names, cache_ttl, json),
        Command::Policy {
            command: PolicyCommand::Validate { file },
        } => validate_policy(&file),
    }
}

fn check(
    text: Option<String>,
    policy_file: Option<PathBuf>,
    preset: Preset,
    names: Option<PathBuf>,
    cache_ttl: Option<String>,
    json: bool,
) -> Result<ExitCode> {
    let policy = match policy_file {
        Some(path) => load_policy(&path)?,
        None => match preset {
            Preset::Title => FieldPolicy::title(),
            Preset::Description => FieldPolicy::description(),
        },
    };
    debug!(policy = %policy.name, "policy loaded");

    let text = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read text from stdin")?;
            buffer
        }
    };

    let mut plain: Option<InMemoryStore> = None;
    let mut cached: Option<CachedStore<InMemoryStore>> = None;
    match (names, cache_ttl) {
        (Some(path), Some(ttl)) => {
            let ttl: Duration = humantime::parse_duration(&ttl)
                .with_context(|| format!("invalid --cache-ttl {:?}", ttl))?;
            cached = Some(CachedStore::new(load_store(&path)?, 10_000, ttl));
        }
        (Some(path), None) => plain = Some(load_store(&path)?),
        (None, Some(_)) => anyhow::bail!("--cache-ttl requires --names"),
        (None, None) => {}
    }

    let readability = FleschReadability::new();
    let mut evaluator = Evaluator::new(&policy).with_readability(&readability);
    if let Some(cached) = &cached {
        evaluator = evaluator.with_store(cached);
    } else if let Some(plain) = &plain {
        evaluator = evaluator.with_store(plain);
    }

    let evaluation = evaluator.evaluate(&text);
    report(&evaluation, json)?;

    Ok(if evaluation.is_accepted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn report(evaluation: &Evaluation, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(evaluation)?);
        return Ok(());
    }

    match &evaluation.verdict {
        fieldvet_core::Verdict::Accepted { normalized } => {
            println!("accepted: {}", normalized);
        }
        fieldvet_core::Verdict::Rejected { reason, evidence } => {
            println!("rejected: {}", reason);
            for item in evidence {
                println!("  {} ({})", item.claim, item.pointer);
            }
        }
    }
    Ok(())
}

fn load_policy(path: &Path) -> Result<FieldPolicy> {
    let policy = if path.extension().is_some_and(|e| e == "json") {
        FieldPolicy::from_json_file(path)
    } else {
        FieldPolicy::from_yaml_file(path)
    };
    policy.with_context(|| format!("failed to load policy from {}", path.display()))
}

fn load_store(path: &Path) -> Result<InMemoryStore> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read names from {}", path.display()))?;

    let store: InMemoryStore = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    debug!(entries = store.len(), "uniqueness store seeded");
    Ok(store)
}

fn validate_policy(path: &Path) -> Result<ExitCode> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    // YAML is the superset here; JSON policy files parse through it too.
    let value: serde_json::Value =
        serde_yaml::from_str(&contents).context("policy file is not valid YAML/JSON")?;

    if let Err(errors) = fieldvet_core::policy::validate_policy_schema(&value) {
        for error in &errors {
            eprintln!("schema: {}", error);
        }
        anyhow::bail!("{} schema violation(s)", errors.len());
    }

    let policy = load_policy(path)?;
    println!("ok: {} is a valid policy", policy.name);
    Ok(ExitCode::SUCCESS)
}
