//! unadf CLI - ADF to plain text conversion tool

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use colored::Colorize;

use unadf::model::issue::{Issue, SearchResults};

#[derive(Parser)]
#[command(name = "unadf")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert Atlassian Document Format (ADF) to plain text", long_about = None)]
struct Cli {
    /// Input JSON file (reads stdin if not specified)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// How to interpret the input payload
    #[arg(long, value_enum, default_value = "document")]
    payload: PayloadKind,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PayloadKind {
    /// A bare ADF document (e.g. the `description` field value)
    Document,
    /// A full Jira issue payload; renders `fields.description`
    Issue,
    /// Jira search results; renders every issue's description
    Search,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = run(&cli);

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = read_input(cli.input.as_deref())?;

    let text = match cli.payload {
        PayloadKind::Document => unadf::render_str(&json)?,
        PayloadKind::Issue => {
            let issue: Issue = serde_json::from_str(&json)?;
            render_issue(&issue)
        }
        PayloadKind::Search => {
            let results: SearchResults = serde_json::from_str(&json)?;
            log::info!(
                "rendering {} of {} matching issues",
                results.issues.len(),
                results.total
            );
            results
                .issues
                .iter()
                .map(render_issue)
                .collect::<Vec<_>>()
                .join("\n\n")
        }
    };

    write_output(cli.output.as_deref(), &text)
}

fn render_issue(issue: &Issue) -> String {
    let header = format!("=== {} ===", issue.key);
    match issue.fields.description_text() {
        Some(description) => format!("{header}\n{description}"),
        None => header,
    }
}

fn read_input(input: Option<&Path>) -> Result<String, std::io::Error> {
    match input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn write_output(output: Option<&Path>, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            fs::write(path, text)?;
            eprintln!("{} {}", "Saved:".green().bold(), path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}
