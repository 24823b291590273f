//! CLI entrypoint for moltbot
//!
//! This is the main binary that wires together all layers using
//! dependency injection. One invocation is one decision cycle.

use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use clap::Parser;
use moltbot_application::{
    FetchOwnPostsUseCase, RunCycleError, RunCycleInput, RunCycleUseCase, RunProgress,
};
use moltbot_domain::Model;
use moltbot_infrastructure::{Adapters, ConfigError, ConfigLoader, FileConfig, Severity};
use moltbot_presentation::{Cli, ConsoleFormatter, ConsoleReporter};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins if set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // === Configuration ===
    let config_path = cli.config.as_deref();
    let mut config = ConfigLoader::load(config_path)?;
    if let Some(model) = &cli.model {
        config.llm.model = model.clone();
    }

    if cli.show_config {
        ConfigLoader::print_config_sources(config_path);
        println!();
        println!("{}", toml::to_string_pretty(&config.redacted())?);
        return Ok(());
    }

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => error!("{}", issue.message),
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration, see errors above");
    }

    let mut params = config.to_run_params().with_dry_run(cli.dry_run);
    if let Some(model) = &cli.model {
        params = params.with_model(model.parse::<Model>()?);
    }

    if cli.my_posts {
        let adapters = connect(&config, Adapters::from_config(&config))?;
        let posts = FetchOwnPostsUseCase::new(adapters.api, params.own_posts_limit)
            .execute()
            .await;
        println!("{}", ConsoleFormatter::own_posts(&posts));
        return Ok(());
    }

    // === Dependency Injection ===
    let reporter = ConsoleReporter::new().quiet(cli.quiet);
    let now = Utc::now();
    let adapters = connect(
        &config,
        wake_and_connect(&config, &params.agent_name, now, &reporter, |name| {
            std::env::var(name).ok()
        }),
    )?;

    info!("Starting run as {}", params.agent_name);
    let input = RunCycleInput::new(params, now);

    match RunCycleUseCase::new(adapters.api, adapters.gateway)
        .execute(input, &reporter)
        .await
    {
        Ok(report) => {
            info!(
                "Run complete: {} posts, wrote={}",
                report.posts_fetched,
                report.action.as_ref().is_some_and(|a| a.wrote())
            );
            Ok(())
        }
        // Already reported; the run simply ends early
        Err(RunCycleError::FeedUnavailable(_)) => Ok(()),
    }
}

/// Announce the run, then resolve keys and build the adapters.
///
/// Nothing is sent over the network here; a missing key stops the run
/// right after the wake line.
fn wake_and_connect<F>(
    config: &FileConfig,
    agent_name: &str,
    now: DateTime<Utc>,
    progress: &dyn RunProgress,
    lookup: F,
) -> Result<Adapters, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    progress.on_wake(agent_name, now);
    Adapters::from_config_with(config, lookup)
}

fn connect(config: &FileConfig, adapters: Result<Adapters, ConfigError>) -> Result<Adapters> {
    adapters.map_err(|e| {
        error!("{}", e);
        info!(
            "Keys are read from {} and {}",
            config.moltbook.api_key_env, config.llm.api_key_env
        );
        e.into()
    })
}
