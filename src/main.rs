// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use ticket_tally::config::{load_config, validate_config, Config, ExportFormat};
use ticket_tally::engine::TallyPipeline;
use ticket_tally::ocr::{BatchOptions, OcrBatchRunner, OcrImage, OcrProgress, TesseractEngine};
use ticket_tally::report::{exporter_for, ReportTable};

const USAGE: &str = "\
Usage: ticket-tally [--config <rules.yaml>] [--format text|json] <command>

Commands:
  text <half> [<full>]   Tally typed half and full ticket lists
  file <chat.txt>        Tally an exported chat log
  images <image>...      OCR each image and tally the combined text";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Text { half: String, full: String },
    File(PathBuf),
    Images(Vec<PathBuf>),
}

#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    config: Option<PathBuf>,
    format: Option<ExportFormat>,
    command: Command,
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut config = None;
    let mut format = None;
    let mut rest = args.iter();
    let mut positional: Vec<String> = Vec::new();

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--config" => {
                let path = rest.next().ok_or_else(|| anyhow!("--config needs a path"))?;
                config = Some(PathBuf::from(path));
            }
            "--format" => {
                let value = rest.next().ok_or_else(|| anyhow!("--format needs a value"))?;
                format = Some(value.parse::<ExportFormat>().map_err(|e| anyhow!(e))?);
            }
            _ => positional.push(arg.clone()),
        }
    }

    let (name, operands) = positional
        .split_first()
        .ok_or_else(|| anyhow!("missing command"))?;

    let command = match (name.as_str(), operands) {
        ("text", [half]) => Command::Text {
            half: half.clone(),
            full: String::new(),
        },
        ("text", [half, full]) => Command::Text {
            half: half.clone(),
            full: full.clone(),
        },
        ("file", [path]) => Command::File(PathBuf::from(path)),
        ("images", paths) if !paths.is_empty() => {
            Command::Images(paths.iter().map(PathBuf::from).collect())
        }
        (other, _) => bail!("invalid arguments for command '{}'", other),
    };

    Ok(CliArgs {
        config,
        format,
        command,
    })
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: CliArgs) -> Result<()> {
    let (config, source) = match &cli.config {
        Some(path) => (
            load_config(path).with_context(|| format!("loading {}", path.display()))?,
            path.display().to_string(),
        ),
        None => (Config::default(), "defaults".to_string()),
    };
    let rules = validate_config(&config, &source)?;
    let format = cli.format.unwrap_or(config.export.format);
    let pipeline = TallyPipeline::new(rules)?;

    let table = match cli.command {
        Command::Text { half, full } => {
            ReportTable::from_text_report(&pipeline.text_report(&half, &full))
        }
        Command::File(path) => {
            let report = pipeline
                .chat_log_file(&path)
                .await
                .with_context(|| format!("reading {}", path.display()))?;
            ReportTable::from_chat_log_report(&report)
        }
        Command::Images(paths) => {
            let images: Vec<OcrImage> = paths.into_iter().map(OcrImage::new).collect();
            run_images(&pipeline, &config, &images).await?
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    exporter_for(format).export(&[table], &mut out)?;
    out.flush()?;
    Ok(())
}

async fn run_images(
    pipeline: &TallyPipeline,
    config: &Config,
    images: &[OcrImage],
) -> Result<ReportTable> {
    let engine = TesseractEngine::from_config(&config.ocr);
    let runner = OcrBatchRunner::new(pipeline, BatchOptions::from(&config.ocr));

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling image batch");
            on_interrupt.cancel();
        }
    });

    let (progress_tx, mut progress_rx) = mpsc::unbounded_channel::<OcrProgress>();
    let progress_task = tokio::spawn(async move {
        while let Some(progress) = progress_rx.recv().await {
            debug!(
                image = progress.image_index + 1,
                of = progress.image_count,
                fraction = progress.fraction,
                "OCR progress"
            );
        }
    });

    let outcome = runner
        .run(&engine, images, &cancel, Some(progress_tx))
        .await
        .context("starting OCR engine")?;
    if let Err(e) = progress_task.await {
        warn!(error = %e, "Progress listener ended abnormally");
    }

    info!(
        recognized = outcome.recognized,
        failed = outcome.failures.len(),
        cancelled = outcome.cancelled,
        "Image batch finished"
    );

    Ok(ReportTable::from_image_report(&outcome.report()))
}
