use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

use ats_engine::{analyze, ExperienceLevel};

#[derive(Parser)]
#[command(name = "ats_engine", about = "Rule-based ATS resume analyzer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single plain-text resume and print the JSON report
    Analyze {
        /// Path to the resume text file
        file: PathBuf,
        /// Experience level: fresher or experienced
        #[arg(short, long, default_value = "experienced")]
        level: ExperienceLevel,
        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Analyze every .txt file in a directory, one JSON report per line
    Batch {
        /// Directory containing .txt resumes
        dir: PathBuf,
        /// Experience level applied to every file
        #[arg(short, long, default_value = "experienced")]
        level: ExperienceLevel,
        /// Write JSONL here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze { file, level, pretty } => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            if text.chars().count() < 50 {
                tracing::warn!(file = %file.display(), "input under 50 characters; results will be sparse");
            }
            let report = analyze(&text, level);
            let json = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{json}");
            Ok(())
        }
        Commands::Batch { dir, level, out } => batch(dir, level, out),
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("Done in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn batch(dir: PathBuf, level: ExperienceLevel, out: Option<PathBuf>) -> anyhow::Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let mut files: Vec<PathBuf> = fs::read_dir(&dir)
        .with_context(|| format!("reading directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();
    if files.is_empty() {
        println!("No .txt files in {}", dir.display());
        return Ok(());
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
            .unwrap()
            .progress_chars("#>-"),
    );

    let lines: Vec<anyhow::Result<String>> = files
        .par_iter()
        .map(|path| {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let report = analyze(&text, level);
            let line = serde_json::json!({
                "file": path.file_name().and_then(|n| n.to_str()),
                "report": report,
            });
            pb.inc(1);
            Ok(serde_json::to_string(&line)?)
        })
        .collect();
    pb.finish_and_clear();

    let mut ok = 0usize;
    let mut errors = 0usize;
    let mut output = String::new();
    for line in lines {
        match line {
            Ok(json) => {
                ok += 1;
                output.push_str(&json);
                output.push('\n');
            }
            Err(err) => {
                errors += 1;
                tracing::error!(%err, "batch item failed");
            }
        }
    }

    match out {
        Some(path) => {
            fs::write(&path, &output)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {} reports to {} ({} errors)", ok, path.display(), errors);
        }
        None => {
            print!("{output}");
            eprintln!("{ok} reports ({errors} errors)");
        }
    }
    Ok(())
}
