mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use zkbench_core::{
    page_count, OutputFormat, SubmissionRecord, SubmissionsTable, ZkBenchConfig, PAGE_SIZE,
};

#[derive(Parser)]
#[command(name = "zkbench")]
#[command(about = "zkBench - ZK prover submission tables", long_about = None)]
struct Cli {
    /// Config file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of submissions
    Table {
        /// JSON file holding an array of submissions
        file: PathBuf,

        /// Page to show (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Output format (table, json, csv)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Show record and page counts
    Summary {
        /// JSON file holding an array of submissions
        file: PathBuf,
    },

    /// Page through submissions interactively
    Browse {
        /// JSON file holding an array of submissions
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ZkBenchConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ZkBenchConfig::default(),
    };

    match cli.command {
        Commands::Table { file, page, format } => {
            let format = format.unwrap_or(config.display.format);
            cmd_table(&file, page, format)?
        }
        Commands::Summary { file } => cmd_summary(&file)?,
        Commands::Browse { file } => cmd_browse(&file)?,
    }

    Ok(())
}

fn load_records(path: &Path) -> Result<Vec<SubmissionRecord>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let records = SubmissionRecord::list_from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse submissions from {}", path.display()))?;
    tracing::info!(count = records.len(), path = %path.display(), "loaded submissions");
    Ok(records)
}

fn cmd_table(path: &Path, page: usize, format: OutputFormat) -> Result<()> {
    let records = load_records(path)?;
    let mut table = SubmissionsTable::new();
    table.on_page_change(page);
    tracing::debug!(page, format = format.label(), "rendering table");

    match format {
        OutputFormat::Json => {
            println!("{}", render::render_json(&records, &table)?);
        }
        OutputFormat::Csv => {
            print!("{}", render::render_csv(&table.view(Some(&records[..]))));
        }
        OutputFormat::Table => {
            println!();
            print!("{}", render::render_table(&table.view(Some(&records[..]))));
            println!();
        }
    }

    Ok(())
}

fn cmd_summary(path: &Path) -> Result<()> {
    let records = load_records(path)?;

    println!();
    println!("Submissions:");
    println!("{:-<40}", "");
    println!("  Records:    {}", records.len());
    println!("  Page size:  {}", PAGE_SIZE);
    println!("  Pages:      {}", page_count(records.len()));
    println!();

    Ok(())
}

fn display_help() {
    println!();
    println!("Commands:");
    println!("  n, next        Next page");
    println!("  p, prev        Previous page");
    println!("  <number>       Jump to page");
    println!("  h, help        Show this help message");
    println!("  q, quit        Exit");
    println!();
}

fn cmd_browse(path: &Path) -> Result<()> {
    let records = load_records(path)?;
    let pages = page_count(records.len());
    let mut table = SubmissionsTable::new();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{}", render::render_table(&table.view(Some(&records[..]))));
    if pages == 0 {
        return Ok(());
    }
    display_help();

    loop {
        print!("[{}/{}]> ", table.page(), pages);
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let cmd = line.trim().to_lowercase();
        let target = match cmd.as_str() {
            "" => continue,
            "q" | "quit" | "exit" => break,
            "h" | "help" | "?" => {
                display_help();
                continue;
            }
            "n" | "next" => table.page() + 1,
            "p" | "prev" => table.page().saturating_sub(1),
            other => match other.parse::<usize>() {
                Ok(n) => n,
                Err(_) => {
                    println!("Unknown command: {}. Type 'help' for available commands.", other);
                    continue;
                }
            },
        };

        if target == 0 || target > pages {
            println!("No page {}. Use 1-{}", target, pages);
            continue;
        }

        table.on_page_change(target);
        println!();
        print!("{}", render::render_table(&table.view(Some(&records[..]))));
    }

    Ok(())
}
