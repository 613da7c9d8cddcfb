//! CLI entrypoint for airwatch
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use airwatch_application::{
    AgentProgressNotifier, Clock, EventStore, InteractionLogger, NoAgentProgress,
    NoInteractionLogger, Notifier, NotifyError, RunAgentInput, RunAgentUseCase, RunAskUseCase,
    RunCheckUseCase, RunPipelineUseCase, StationToolExecutor, SystemClock,
};
use airwatch_domain::event::BASELINE_SENSORS;
use airwatch_domain::{DEFAULT_SCHEDULED_REQUEST, DayOfWeek, SensorBaseline, TimeSlot, ToolSpec};
use airwatch_infrastructure::{
    ConfigLoader, FileConfig, FileLoggingConfig, HttpTelemetrySource, InMemoryEventStore,
    JsonSchemaToolConverter, JsonlEventStore, JsonlInteractionLogger, OpenAiCompatibleGateway,
    ReasoningEndpoint, StdoutNotifier, TelegramNotifier, read_recent,
};
use airwatch_presentation::{Cli, Command, ConsoleFormatter, ProgressReporter, SimpleProgress};
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow::anyhow!("Could not load configuration: {}", e))?;

    if cli.show_config {
        print!(
            "{}",
            ConsoleFormatter::format_config_sources(&ConfigLoader::config_sources(
                cli.config.as_ref()
            ))
        );
        println!();
        println!("{}", toml::to_string_pretty(&config.redacted())?);
        return Ok(());
    }

    let issues = config.validate();
    if !issues.is_empty() {
        let list = issues
            .iter()
            .map(|i| format!("  - {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("Invalid configuration:\n{}", list);
    }

    // Keep the guard alive so the file writer flushes on exit
    let _log_guard = init_tracing(cli.verbose, &config.logging);

    info!("Starting airwatch");

    let command = cli.command.clone().unwrap_or(Command::Check {
        request: None,
        no_notify: false,
    });

    match command {
        Command::Check { request, no_notify } => run_check(&cli, &config, request, no_notify).await,
        Command::Ask {
            question,
            read_only,
        } => run_ask(&cli, &config, question, read_only).await,
        Command::Report { json } => run_report(&config, json).await,
        Command::Events { hour, day, sensor } => {
            run_events(&cli, &config, hour, day, sensor).await
        }
        Command::Logs { last } => {
            let records = read_recent(&config.storage.interactions_path, last).with_context(|| {
                format!(
                    "Could not read {}",
                    config.storage.interactions_path.display()
                )
            })?;
            print!("{}", ConsoleFormatter::format_logs(&records));
            Ok(())
        }
    }
}

/// Initialize logging: stderr at the `-v` level, plus a daily rolling file
/// when a log directory is configured.
fn init_tracing(verbose: u8, logging: &FileLoggingConfig) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = if verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let (file_layer, guard) = match &logging.dir {
        Some(dir) if std::fs::create_dir_all(dir).is_ok() => {
            let appender = tracing_appender::rolling::daily(dir, &logging.file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        _ => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    guard
}

fn event_store(cli: &Cli, config: &FileConfig) -> Arc<dyn EventStore> {
    if cli.no_persist {
        info!("Events are kept in memory only");
        Arc::new(InMemoryEventStore::new())
    } else {
        Arc::new(JsonlEventStore::new(&config.storage.events_path))
    }
}

fn pipeline(config: &FileConfig) -> Result<RunPipelineUseCase> {
    let source = HttpTelemetrySource::new(
        config.station.base_url.clone(),
        config.station.limit,
        config.station.timeout(),
    )?;
    Ok(RunPipelineUseCase::new(
        Arc::new(source),
        config.pipeline_params(),
    ))
}

fn agent(
    config: &FileConfig,
    events: Arc<dyn EventStore>,
    clock: Arc<dyn Clock>,
    spec: ToolSpec,
) -> Result<RunAgentUseCase> {
    let gateway = OpenAiCompatibleGateway::new(ReasoningEndpoint::from(&config.reasoning))
        .context("Set GROQ_API_KEY or reasoning.api_key")?;
    let tools = StationToolExecutor::new(pipeline(config)?, events, clock).with_spec(spec);

    Ok(RunAgentUseCase::new(
        Arc::new(gateway),
        Arc::new(tools),
        Arc::new(JsonSchemaToolConverter),
    ))
}

fn progress(cli: &Cli) -> Box<dyn AgentProgressNotifier> {
    if cli.quiet {
        Box::new(NoAgentProgress)
    } else if !std::io::stderr().is_terminal() {
        Box::new(SimpleProgress)
    } else if cli.verbose > 0 {
        Box::new(ProgressReporter::verbose())
    } else {
        Box::new(ProgressReporter::new())
    }
}

fn notifier(config: &FileConfig, no_notify: bool) -> Result<Arc<dyn Notifier>> {
    if no_notify {
        return Ok(Arc::new(StdoutNotifier));
    }
    match TelegramNotifier::from_config(&config.telegram) {
        Ok(telegram) => Ok(Arc::new(telegram)),
        Err(NotifyError::NotConfigured(reason)) => {
            warn!("Telegram disabled ({}); printing the report instead", reason);
            Ok(Arc::new(StdoutNotifier))
        }
        Err(e) => Err(e.into()),
    }
}

fn interaction_logger(config: &FileConfig) -> Arc<dyn InteractionLogger> {
    match JsonlInteractionLogger::new(&config.storage.interactions_path) {
        Some(logger) => Arc::new(logger),
        None => Arc::new(NoInteractionLogger),
    }
}

async fn run_check(
    cli: &Cli,
    config: &FileConfig,
    request: Option<String>,
    no_notify: bool,
) -> Result<()> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let agent = agent(config, event_store(cli, config), clock.clone(), ToolSpec::full())?;
    let notifier = notifier(config, no_notify)?;
    let channel = notifier.channel().to_string();

    let logger = interaction_logger(config);

    let request = request.unwrap_or_else(|| DEFAULT_SCHEDULED_REQUEST.to_string());
    let input = RunAgentInput::new(request, config.reasoning.execution_params());

    let use_case = RunCheckUseCase::new(agent, notifier, logger, clock);
    let progress = progress(cli);
    let outcome = use_case.execute(input, progress.as_ref()).await;

    if !cli.quiet {
        eprint!("{}", ConsoleFormatter::format_check(&outcome, &channel));
    }

    if let Some(error) = outcome.run.error_message() {
        bail!("Check failed: {}", error);
    }
    Ok(())
}

async fn run_ask(cli: &Cli, config: &FileConfig, question: String, read_only: bool) -> Result<()> {
    let spec = if read_only {
        ToolSpec::read_only()
    } else {
        ToolSpec::full()
    };
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let agent = agent(config, event_store(cli, config), clock.clone(), spec.clone())?;
    let use_case = RunAskUseCase::new(agent, interaction_logger(config), clock);

    let input = RunAgentInput::new(question, config.reasoning.execution_params()).with_tool_spec(spec);
    let progress = progress(cli);
    let output = use_case.execute(input, progress.as_ref()).await;

    print!("{}", ConsoleFormatter::format_run(&output));

    if let Some(error) = output.error_message() {
        bail!("Agent run failed: {}", error);
    }
    Ok(())
}

async fn run_report(config: &FileConfig, json: bool) -> Result<()> {
    let outcome = pipeline(config)?.execute(SystemClock.now()).await;

    if json {
        println!("{}", ConsoleFormatter::format_json(&outcome));
    } else {
        print!("{}", ConsoleFormatter::format_outcome(&outcome));
    }
    Ok(())
}

async fn run_events(
    cli: &Cli,
    config: &FileConfig,
    hour: u32,
    day: DayOfWeek,
    sensor: Option<String>,
) -> Result<()> {
    let slot = TimeSlot::new(day, hour).context("Hour must be between 0 and 23")?;
    let store = event_store(cli, config);

    let events = store.similar_events(hour, day).await?;
    let baselines: Vec<SensorBaseline> = match sensor {
        Some(sensor_id) => store
            .baseline(day, hour, &sensor_id)
            .await?
            .into_iter()
            .collect(),
        None => BASELINE_SENSORS
            .iter()
            .filter_map(|id| SensorBaseline::from_events(&events, slot, id))
            .collect(),
    };

    print!(
        "{}",
        ConsoleFormatter::format_events(slot, &events, &baselines)
    );
    Ok(())
}
