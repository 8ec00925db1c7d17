use anyhow::{Context, Result};
use clap::Parser;
use std::process::Command;

use tz_env::modules::time_zone::adapters::outbound::system_locale::SystemLocaleFacility;
use tz_env::modules::time_zone::use_cases::lookup_env::handler::lookup_env;
use tz_env::shared::infrastructure::static_env::StaticEnv;
use tz_env::shell::bootstrap::init_static_env;
use tz_env::shell::config::Config;
use tz_env::shell::logging::init_tracing;

/// Propagate the host time zone into a static environment.
///
/// Without a command, prints the static environment. With a command, runs it with the
/// static environment applied.
#[derive(Parser, Debug)]
#[command(name = "tz_env", version)]
struct Cli {
    /// Print the static environment as JSON
    #[arg(long)]
    json: bool,

    /// Do not query the host for its time zone
    #[arg(long)]
    skip_detection: bool,

    /// Print a single variable, static entries first, then the process environment
    #[arg(long, value_name = "KEY", conflicts_with = "json")]
    get: Option<String>,

    /// Command to run with the static environment applied
    #[arg(last = true, value_name = "COMMAND")]
    command: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    init_tracing();

    let detect = !cli.skip_detection && Config::from_env_or_default().detect;
    let static_env = init_static_env(SystemLocaleFacility::new(), detect);

    if let Some((program, args)) = cli.command.split_first() {
        let mut command = Command::new(program);
        command.args(args);
        static_env.apply_to(&mut command);
        tracing::debug!(program = %program, "running command with static env");
        let status = command
            .status()
            .with_context(|| format!("failed to run {program}"))?;
        std::process::exit(status.code().unwrap_or(1));
    }

    if let Some(key) = cli.get {
        match lookup_env(&static_env, &key, |k| std::env::var(k).ok()) {
            Some(value) => println!("{value}"),
            None => std::process::exit(1),
        }
        return Ok(());
    }

    print_static_env(&static_env, cli.json)
}

fn print_static_env(static_env: &StaticEnv, json: bool) -> Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(static_env).context("serializing static env")?;
        println!("{rendered}");
    } else {
        for (key, value) in static_env.iter() {
            println!("{key}={value}");
        }
    }
    Ok(())
}
