//! CLI entrypoint for answer-router
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use rand::SeedableRng;
use rand::rngs::StdRng;
use router_application::{
    AnswerStore, EvaluateUseCase, ExchangeLogger, GenerateAnswersUseCase, NoExchangeLogger, NoProgress,
    ProgressNotifier, SolveQuestionUseCase,
};
use router_infrastructure::{
    ConfigLoader, FileConfig, JsonFileStore, JsonlExchangeLogger, OpenAiChatGateway, Severity,
    load_questions,
};
use router_presentation::{
    Cli, Command, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress, inspect, sample,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(level));

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "answer-router.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(EnvFilter::new(level));
            tracing_subscriber::registry()
                .with(stderr_layer)
                .with(file_layer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry().with(stderr_layer).init();
            None
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("config {}: {}", issue.field, issue.message),
            Severity::Error => error!("config {}: {}", issue.field, issue.message),
        }
    }
    if FileConfig::has_errors(&issues) {
        bail!("Configuration has {} error(s); see log above", issues.len());
    }
    Ok(config)
}

fn build_solver(cli: &Cli, config: &FileConfig) -> Result<SolveQuestionUseCase<OpenAiChatGateway>> {
    let endpoint = config.endpoint.resolve();
    info!("Endpoint {} model {}", endpoint.base_url, endpoint.model);
    let gateway = Arc::new(OpenAiChatGateway::new(endpoint.clone())?);

    let policy = config.solver.to_policy(config.endpoint.timeout());
    policy.validate()?;

    let logger: Arc<dyn ExchangeLogger> = match &cli.exchange_log {
        Some(path) => match JsonlExchangeLogger::open(path, endpoint.model.clone()) {
            Some(logger) => {
                info!("Logging exchanges to {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoExchangeLogger),
        },
        None => Arc::new(NoExchangeLogger),
    };

    Ok(SolveQuestionUseCase::new(gateway)
        .with_policy(policy)
        .with_logger(logger))
}

fn progress_for(quiet: bool, progress: Box<dyn ProgressNotifier>) -> Box<dyn ProgressNotifier> {
    if quiet { Box::new(NoProgress) } else { progress }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref());

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    info!("Starting answer-router");

    match command {
        Command::Inspect {
            questions,
            answers,
            index,
        } => {
            let questions = load_questions(questions)?;
            let answers = JsonFileStore::new(answers).load()?;
            match inspect(&questions, &answers, *index) {
                Some(view) => println!("{}", ConsoleFormatter::format_view(&view)),
                None => bail!(
                    "Index {} is out of range ({} questions)",
                    index,
                    questions.len()
                ),
            }
        }

        Command::Sample {
            questions,
            answers,
            count,
            seed,
        } => {
            let questions = load_questions(questions)?;
            let answers = JsonFileStore::new(answers).load()?;
            println!(
                "Loaded {} questions and {} answers. Sampling only from completed answers.\n",
                questions.len(),
                answers.len()
            );

            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };
            for view in sample(&questions, &answers, *count, &mut rng) {
                println!("{}", ConsoleFormatter::format_view(&view));
            }
        }

        Command::Solve {
            question,
            explain,
            output,
        } => {
            let config = load_config(&cli)?;
            let solver = build_solver(&cli, &config)?;
            let outcome = solver.execute_with_outcome(question).await;

            let text = match (output, explain) {
                (OutputFormat::Json, _) => ConsoleFormatter::format_outcome_json(&outcome),
                (OutputFormat::Text, true) => ConsoleFormatter::format_explained(question, &outcome),
                (OutputFormat::Text, false) => ConsoleFormatter::format_answer(&outcome),
            };
            println!("{}", text);
        }

        Command::Generate { input, output } => {
            let config = load_config(&cli)?;
            let solver = build_solver(&cli, &config)?;
            let questions = load_questions(input)
                .with_context(|| format!("loading questions from {}", input.display()))?;
            let store = JsonFileStore::new(output);

            let use_case = GenerateAnswersUseCase::new(solver).with_params(config.batch.to_params());
            let progress = progress_for(cli.quiet, Box::new(ProgressReporter::new("Answering")));
            let result = use_case
                .execute_with_progress(&questions, &store, progress.as_ref())
                .await?;

            println!(
                "Wrote {} answers to {} ({} resumed, {} new, {} crashed)",
                result.answers.len(),
                store.path().display(),
                result.resumed,
                result.newly_answered,
                result.failures
            );
        }

        Command::Evaluate {
            input,
            limit,
            all,
            format,
        } => {
            let config = load_config(&cli)?;
            let solver = build_solver(&cli, &config)?;
            let questions = load_questions(input)
                .with_context(|| format!("loading dev set from {}", input.display()))?;

            let params = config
                .batch
                .to_params()
                .with_evaluation_limit(if *all { None } else { Some(*limit) });
            let use_case = EvaluateUseCase::new(solver).with_params(params);
            let progress = progress_for(cli.quiet, Box::new(SimpleProgress::default()));
            let report = use_case
                .execute_with_progress(&questions, progress.as_ref())
                .await?;

            let text = match format {
                OutputFormat::Text => ConsoleFormatter::format_report(&report),
                OutputFormat::Json => ConsoleFormatter::format_report_json(&report),
            };
            println!("{}", text);
        }
    }

    Ok(())
}
