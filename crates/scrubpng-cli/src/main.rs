use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use scrubpng_cli::{
    Cli, Commands, Config, ConfigCommands, InputResolver, OutputFormatter, ProgressReporter,
};
use scrubpng_common::SupportedFormatSet;
use scrubpng_core::{Converter, PngOptions};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        "scrubpng=debug"
    } else {
        "scrubpng=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .without_time()
        .init();

    // Load config
    let mut config = Config::load()?;

    // Override config with CLI flags
    if cli.no_color {
        config.colored_output = false;
    }
    if cli.no_progress {
        config.show_progress = false;
    }

    let formatter = OutputFormatter::new(config.colored_output);
    let progress = ProgressReporter::new(config.show_progress);

    match cli.command {
        Commands::Convert {
            inputs,
            output,
            level,
        } => handle_convert(inputs, output, level, &config, &formatter, &progress).await,

        Commands::Formats => {
            let exts: Vec<_> = SupportedFormatSet::new()
                .extensions()
                .map(|ext| format!(".{}", ext))
                .collect();
            println!("{}", exts.join(" "));
            Ok(ExitCode::SUCCESS)
        }

        Commands::Config { action } => {
            handle_config(action, &formatter)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn handle_convert(
    args: Vec<String>,
    output: Option<PathBuf>,
    level: Option<u8>,
    config: &Config,
    formatter: &OutputFormatter,
    progress: &ProgressReporter,
) -> Result<ExitCode> {
    let resolver = InputResolver::new()?;
    let files = resolver.resolve_all(&args)?;

    if files.is_empty() {
        anyhow::bail!("No input files found in: {}", args.join(" "));
    }

    let output_dir = match output {
        Some(dir) => resolver.resolve(&dir.to_string_lossy())?,
        None => config.default_output_dir.clone(),
    };

    formatter.info(&format!(
        "Converting {} file{} into {}",
        files.len(),
        if files.len() == 1 { "" } else { "s" },
        formatter.format_path(&output_dir)
    ));

    let converter = Converter::with_png_options(PngOptions::with_level(
        level.unwrap_or(config.optimization_level),
    ));
    let pb = progress.create_bar(files.len() as u64, "Starting...");

    // Conversion is blocking work; keep it off the runtime threads so the bar keeps ticking
    let report = {
        let pb = pb.clone();
        let output_dir = output_dir.clone();
        tokio::task::spawn_blocking(move || {
            converter.convert_batch_with_progress(&files, &output_dir, |event| {
                ProgressReporter::update(&pb, event)
            })
        })
        .await
        .context("Conversion task panicked")?
    };

    let report = match report {
        Ok(report) => report,
        Err(e) => {
            ProgressReporter::finish_bar_error(&pb, "Aborted");
            return Err(e).context("Batch conversion could not start");
        }
    };

    if report.all_succeeded() {
        ProgressReporter::finish_bar(&pb, "Batch complete");
    } else {
        ProgressReporter::finish_bar_error(&pb, "Batch complete with errors");
    }
    formatter.print_batch_report(&report, &output_dir);

    Ok(if report.all_succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn handle_config(action: ConfigCommands, formatter: &OutputFormatter) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let config = Config::load()?;
            let toml = toml::to_string_pretty(&config)?;
            println!("{}", toml);
        }

        ConfigCommands::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            formatter.success(&format!("Set {} = {}", key, value));
        }

        ConfigCommands::Reset => {
            Config::reset()?;
            formatter.success("Configuration reset to defaults");
        }

        ConfigCommands::Path => {
            let path = Config::config_path()?;
            println!("{}", path.display());
        }
    }

    Ok(())
}
