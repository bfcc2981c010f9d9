use anyhow::{Context, Result};
use clap::Parser;
use snippet_strip::{
    DEFAULT_TARGET, PatchOptions, PatchReport, Pattern, generate_run_id, logging, patch_file,
};
use std::fs;
use std::path::PathBuf;

/// Remove the export-base-file button block from the settings panel
///
/// With no arguments, strips the built-in block from src/ui/app.rs.
#[derive(Parser, Debug)]
#[command(name = "snippet-strip")]
#[command(version)]
#[command(about = "Remove a fixed block of text from a source file", long_about = None)]
struct Args {
    /// File to patch in place
    #[arg(short, long, env = "SNIPPET_STRIP_FILE", default_value = DEFAULT_TARGET)]
    file: PathBuf,

    /// Read the text to remove from this file instead of the built-in block
    #[arg(short, long)]
    pattern_file: Option<PathBuf>,

    /// Treat the pattern as a regular expression
    #[arg(long, requires = "pattern_file")]
    regex: bool,

    /// Report matches without writing the file
    #[arg(long)]
    dry_run: bool,

    /// Output structured JSON instead of the confirmation line
    #[arg(short, long)]
    json: bool,
}

/// Build the pattern from `--pattern-file`, or fall back to the built-in block
fn load_pattern(path: Option<&PathBuf>, regex: bool) -> Result<Pattern> {
    let Some(path) = path else {
        return Ok(Pattern::export_button());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read pattern file '{}'", path.display()))?;

    let pattern = if regex {
        Pattern::regex(&text)
    } else {
        Pattern::literal(text)
    };
    pattern.with_context(|| format!("Unusable pattern in '{}'", path.display()))
}

fn run(args: &Args, run_id: &str) -> Result<PatchReport> {
    let pattern = load_pattern(args.pattern_file.as_ref(), args.regex)?;

    tracing::debug!(
        %run_id,
        file = %args.file.display(),
        kind = pattern.kind(),
        dry_run = args.dry_run,
        "starting patch"
    );

    let outcome = patch_file(
        &args.file,
        &pattern,
        PatchOptions {
            dry_run: args.dry_run,
        },
    )?;

    Ok(PatchReport::from_outcome(run_id.to_string(), &outcome))
}

fn main() {
    logging::init();
    let args = Args::parse();
    let run_id = generate_run_id();

    let report = match run(&args, &run_id) {
        Ok(report) => report,
        Err(e) => {
            let report = PatchReport::failure(
                run_id,
                args.file.display().to_string(),
                format!("{:#}", e),
            );
            if args.json {
                output_json(&report);
            } else {
                eprintln!("{}", report.to_human());
            }
            std::process::exit(1);
        }
    };

    if args.json {
        output_json(&report);
    } else {
        println!("{}", report.to_human());
    }
}

fn output_json(report: &PatchReport) {
    let output = report.to_json().unwrap_or_else(|_| {
        r#"{"success": false, "error": "Failed to serialize report"}"#.to_string()
    });
    println!("{}", output);
}
