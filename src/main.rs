//! Principal Toolkit - browse, search and copy prompt tools
//!
//! This is the binary entry point. All logic lives in the library.

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use principal_toolkit::clipboard::native_clipboard;
use principal_toolkit::commands::{self, Context};
use principal_toolkit::core::CategoryFilter;
use principal_toolkit::headless::HeadlessEvent;

/// Principal Toolkit - browse, search and copy prompt tools
#[derive(Parser, Debug)]
#[command(name = "ptk")]
#[command(about = "Browse, search and copy prompt tools from the catalog", long_about = None)]
struct Args {
    /// Project directory containing .ptk/config.toml
    #[arg(long, value_name = "DIR")]
    project: Option<PathBuf>,

    /// Catalog file, overriding the configured path
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Emit NDJSON events instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List tools, optionally filtered
    List {
        /// Case-insensitive text to search for
        #[arg(long, short, default_value = "")]
        query: String,

        /// Only tools in this category
        #[arg(long, short, default_value = "all")]
        category: String,
    },

    /// List categories
    Categories,

    /// Show one tool
    Show {
        id: String,

        /// Print the markup fragments instead of text
        #[arg(long)]
        html: bool,
    },

    /// List a tool's related tools
    Related { id: String },

    /// Copy a tool's prompt (or an adjustment line) to the clipboard
    Copy {
        id: String,

        /// Index of the adjustment line to copy
        #[arg(long, short, value_name = "N")]
        adjustment: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = principal_toolkit::core::logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    // Get project directory from args or use current directory
    let project = args
        .project
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let ctx = match Context::load(&project, args.catalog.as_deref(), args.json) {
        Ok(ctx) => ctx,
        Err(e) => {
            if args.json {
                HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
                std::process::exit(1);
            }
            return Err(e.into());
        }
    };

    let mut stdout = io::stdout();
    let ok = match args.command {
        Command::List { query, category } => commands::list(
            &ctx,
            &mut stdout,
            &query,
            &CategoryFilter::parse(&category),
        )?,
        Command::Categories => commands::categories(&ctx, &mut stdout)?,
        Command::Show { id, html } => commands::show(&ctx, &mut stdout, &id, html)?,
        Command::Related { id } => commands::related(&ctx, &mut stdout, &id)?,
        Command::Copy { id, adjustment } => {
            let clipboard = native_clipboard(ctx.json);
            commands::copy(&ctx, &mut stdout, &clipboard, &id, adjustment).await?
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
