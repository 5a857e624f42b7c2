use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use cb_app::InboundConverter;
use cb_core::codec::{analyze_format_bytes, FormatReport};
use cb_core::{ByteDecoder, FormatProbe, SnippetExtractor, SnippetModel, XmlValidatingParser};
use clap::{Parser, Subcommand};
use cuttingboard::bootstrap::{init_tracing_subscriber, load_config, wire_dependencies, AppConfig};
use serde::Serialize;
use tracing::debug;

#[derive(Parser)]
#[command(name = "clipboard-probe")]
#[command(about = "Inspect clipboard formats and fmxmlsnippet payloads")]
struct Cli {
    /// TOML configuration file; defaults apply when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Trace every probed format.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump the formats currently on the clipboard
    Formats {
        #[arg(long)]
        json: bool,
    },
    /// Acquire a snippet from the clipboard and validate it
    Read {
        #[arg(long)]
        json: bool,
    },
    /// Validate a snippet file and place it on the clipboard
    Push {
        #[arg(short, long)]
        r#in: PathBuf,
    },
    /// Decode, extract and validate a raw byte dump without touching the clipboard
    Inspect {
        #[arg(short, long)]
        r#in: PathBuf,

        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    config.acquisition.verbose |= cli.verbose;
    init_tracing_subscriber(config.acquisition.verbose)?;

    match cli.command {
        Commands::Formats { json } => run_formats(&config, json),
        Commands::Read { json } => run_read(&config, json),
        Commands::Push { r#in } => run_push(&config, &r#in),
        Commands::Inspect { r#in, json } => run_inspect(&r#in, json),
    }
}

fn run_formats(config: &AppConfig, json: bool) -> Result<()> {
    let deps = wire_dependencies(config)?;
    let reports = deps
        .platform
        .dump_formats()
        .ok_or_else(|| anyhow!("clipboard is locked by another process"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!("clipboard-probe: formats mode");
    println!("- at: {}", now());
    println!("- capability: {:?}", deps.capability());
    println!("- formats: {}", reports.len());
    for report in &reports {
        println!("\n{report}");
    }

    Ok(())
}

fn run_read(config: &AppConfig, json: bool) -> Result<()> {
    let deps = wire_dependencies(config)?;
    let model = deps
        .usecases
        .read_snippet
        .execute()
        .context("Failed to read snippet from clipboard")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&model)?);
        return Ok(());
    }

    println!("clipboard-probe: read mode");
    println!("- at: {}", now());
    print_model(&model);
    println!("\n{}", model.raw_xml());

    Ok(())
}

fn run_push(config: &AppConfig, input: &Path) -> Result<()> {
    println!("clipboard-probe: push mode");
    println!("- input: {}", input.display());

    let xml = fs::read_to_string(input)
        .with_context(|| format!("Failed to read snippet file: {}", input.display()))?;

    let deps = wire_dependencies(config)?;
    let model = deps
        .usecases
        .push_snippet
        .execute(&xml)
        .context("Failed to push snippet to clipboard")?;

    print_model(&model);
    println!("\nsnippet written to clipboard");

    Ok(())
}

#[derive(Debug, Serialize)]
struct InspectOutcome {
    report: FormatReport,
    /// How the snippet span was located, e.g. `Utf16Le`, or `decoded`.
    located_by: String,
    model: SnippetModel,
}

fn run_inspect(input: &Path, json: bool) -> Result<()> {
    let bytes =
        fs::read(input).with_context(|| format!("Failed to read dump: {}", input.display()))?;
    let name = input.file_name().map(|n| n.to_string_lossy().into_owned());
    let outcome = inspect_bytes(name, &bytes)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("clipboard-probe: inspect mode");
    println!("- input: {}", input.display());
    println!("\n{}", outcome.report);
    println!("\n- located by: {}", outcome.located_by);
    print_model(&outcome.model);
    println!("\n{}", outcome.model.raw_xml());

    Ok(())
}

/// Raw span search first, then a full decode handed to the inbound converter.
fn inspect_bytes(name: Option<String>, bytes: &[u8]) -> Result<InspectOutcome> {
    let report = analyze_format_bytes(
        FormatProbe::new(0)
            .with_name(name)
            .with_size(Some(bytes.len() as u64)),
        bytes,
    );

    if let Some((xml, encoding)) = SnippetExtractor::from_bytes_with_encoding(bytes) {
        debug!(encoding = ?encoding, xml_len = xml.len(), "Marker span found in raw bytes");
        let model = XmlValidatingParser::new().parse(&xml)?;
        return Ok(InspectOutcome {
            report,
            located_by: format!("{encoding:?}"),
            model,
        });
    }

    let decoded = ByteDecoder::generic().decode(bytes);
    let model = InboundConverter::new().convert(decoded.text())?;
    Ok(InspectOutcome {
        report,
        located_by: format!("decoded ({})", decoded.path()),
        model,
    })
}

fn print_model(model: &SnippetModel) {
    println!("- summary: {}", model.summary());
    println!("- type: {}", model.type_hint().unwrap_or("-"));
    println!("- version: {}", model.version().unwrap_or("-"));
    print_names("fields", model.field_names());
    print_names("layouts", model.layout_names());
    print_names("scripts", model.script_names());
}

fn print_names(label: &str, names: &[String]) {
    if names.is_empty() {
        return;
    }
    println!("- {label}: {}", names.len());
    for (idx, name) in names.iter().enumerate() {
        println!("  {label}[{idx}]: {name}");
    }
}

fn now() -> String {
    chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S%.3f")
        .to_string()
}
