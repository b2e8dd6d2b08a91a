//! CLI Adapter.

mod url;

use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::app::api::{self, CheckOptions, PublishTask, TaskOutcome};
use crate::domain::maven::{self, DEFAULT_MODEL_VERSION, Pom};
use crate::domain::url_path::parse_url;
use crate::domain::{AppError, Artifact, camel_case, colon_case, kebab_case, markdown, slash_case};

#[derive(Parser)]
#[command(name = "gx")]
#[command(version)]
#[command(about = "Helpers for publishing a library: artifacts, URLs, and README checks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Join segments into an identifier
    Case {
        style: CaseStyle,
        /// First segment (must not be blank)
        segment: String,
        /// Further segments; blank ones are skipped
        other: Vec<String>,
    },
    /// Build badge, GitHub, or Maven repository URLs
    Url {
        #[command(subcommand)]
        command: url::UrlCommands,
    },
    /// Render a Markdown link or image
    #[clap(visible_alias = "md")]
    Markdown {
        text: String,
        url: String,
        /// Render as an image
        #[arg(short, long)]
        image: bool,
    },
    /// Print a Maven POM
    Pom {
        group: String,
        id: String,
        version: String,
        #[arg(long, default_value = "jar")]
        packaging: String,
        #[arg(long, default_value = DEFAULT_MODEL_VERSION)]
        model_version: String,
    },
    /// Print Maven metadata XML stamped with the current time
    Metadata { group: String, id: String, version: String },
    /// Write text to a file, replacing an existing file
    #[clap(visible_alias = "a")]
    Assemble { path: PathBuf, text: String },
    /// Verify a text file and write a report
    #[clap(visible_alias = "c")]
    Check {
        file: PathBuf,
        /// Substring that must appear in some line (repeatable)
        #[arg(short, long = "expect")]
        expect: Vec<String>,
        /// Regex that must match some line (repeatable)
        #[arg(short, long = "regex")]
        regex: Vec<String>,
        /// Report location
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// List publishing tasks
    Tasks {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run publishing tasks by name
    #[clap(visible_alias = "r")]
    Run {
        #[arg(required = true)]
        tasks: Vec<String>,
        /// Project config (default: gx.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CaseStyle {
    Camel,
    Kebab,
    Colon,
    Slash,
}

#[derive(Serialize)]
struct TaskEntry<'a> {
    name: &'a str,
    #[serde(flatten)]
    task: &'a PublishTask,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Case { style, segment, other } => run_case(style, &segment, &other),
        Commands::Url { command } => url::run_url(command),
        Commands::Markdown { text, url, image } => run_markdown(&text, &url, image),
        Commands::Pom { group, id, version, packaging, model_version } => {
            run_pom(&group, &id, &version, &packaging, &model_version)
        }
        Commands::Metadata { group, id, version } => run_metadata(&group, &id, &version),
        Commands::Assemble { path, text } => run_assemble(path, &text),
        Commands::Check { file, expect, regex, report } => {
            run_check(CheckOptions { file, expected: expect, regexes: regex, report })
        }
        Commands::Tasks { json } => run_tasks_list(json),
        Commands::Run { tasks, config } => run_tasks(&tasks, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_case(style: CaseStyle, segment: &str, other: &[String]) -> Result<(), AppError> {
    let other: Vec<&str> = other.iter().map(String::as_str).collect();
    let value = match style {
        CaseStyle::Camel => camel_case(segment, &other)?,
        CaseStyle::Kebab => kebab_case(segment, &other)?,
        CaseStyle::Colon => colon_case(segment, &other)?,
        CaseStyle::Slash => slash_case(segment, &other)?,
    };
    println!("{}", value);
    Ok(())
}

fn run_markdown(text: &str, url: &str, image: bool) -> Result<(), AppError> {
    let url = parse_url(url)?;
    let value = if image { markdown::image(text, &url)? } else { markdown::link(text, &url)? };
    println!("{}", value);
    Ok(())
}

fn run_pom(group: &str, id: &str, version: &str, packaging: &str, model_version: &str) -> Result<(), AppError> {
    let artifact = Artifact::new(group, id)?;
    let pom = Pom { model_version, ..Pom::new(&artifact, version, packaging) };
    println!("{}", pom.render()?);
    Ok(())
}

fn run_metadata(group: &str, id: &str, version: &str) -> Result<(), AppError> {
    println!("{}", maven::metadata(group, id, version, Utc::now().naive_utc())?);
    Ok(())
}

fn run_assemble(path: PathBuf, text: &str) -> Result<(), AppError> {
    let path = api::assemble_at(std::env::current_dir()?, &path, text)?;
    println!("✅ Assembled {}", path.display());
    Ok(())
}

fn run_check(options: CheckOptions) -> Result<(), AppError> {
    let report = api::check(options)?;
    println!("✅ {}", report.text);
    println!("  Report: {}", report.path.display());
    Ok(())
}

fn run_tasks_list(json: bool) -> Result<(), AppError> {
    let tasks = api::task_list()?;
    if json {
        let entries: Vec<TaskEntry<'_>> =
            tasks.iter().map(|(name, task)| TaskEntry { name, task }).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    for (name, _) in &tasks {
        println!("{}", name);
    }
    Ok(())
}

fn run_tasks(names: &[String], config: Option<PathBuf>) -> Result<(), AppError> {
    let outcomes = api::run_tasks(names, config.as_deref())?;
    for (name, outcome) in names.iter().zip(&outcomes) {
        match outcome {
            TaskOutcome::Assembled { path, .. } => println!("✅ {}: {}", name, path.display()),
            TaskOutcome::Checked { report } => println!("✅ {}: {}", name, report.text),
        }
    }
    Ok(())
}
