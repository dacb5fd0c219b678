pub mod highlight;

use clap::{Parser, Subcommand};
use glint_core::config::LogConfig;
use glint_core::logging::init_logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "glint",
    version,
    about = "Read/write occurrence highlighting for Ruby",
    long_about = "Glint highlights every read and write of the variable or constant under the cursor \
                  in a Ruby document. It runs as a language server or as a one-shot command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the Language Server Protocol (LSP) server on stdio
    Lsp,
    /// Print the document highlights for one cursor position as JSON
    #[command(
        long_about = "Parses FILE and prints the highlights for the given cursor as a JSON array of \
                            LSP DocumentHighlight objects. The cursor is either a zero-based \
                            --line/--character pair (UTF-16 columns) or a byte --offset."
    )]
    Highlight {
        /// Ruby source file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Zero-based line of the cursor
        #[arg(long, requires = "character", conflicts_with = "offset")]
        line: Option<u32>,

        /// Zero-based UTF-16 column of the cursor
        #[arg(long, requires = "line")]
        character: Option<u32>,

        /// Byte offset of the cursor
        #[arg(long, required_unless_present = "line")]
        offset: Option<usize>,

        /// Also try the byte before the cursor when nothing is found at it
        #[arg(long)]
        word_end_fallback: bool,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.command {
        Commands::Lsp => LogConfig::for_component("lsp"),
        Commands::Highlight { .. } => LogConfig::for_component("cli").with_stderr(true),
    };
    let _guard = init_logging(&config);

    match cli.command {
        Commands::Lsp => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(glint_lsp::run_server())?;
            Ok(())
        }
        Commands::Highlight {
            file,
            line,
            character,
            offset,
            word_end_fallback,
        } => {
            let cursor = match (line, character, offset) {
                (Some(line), Some(character), _) => highlight::Cursor::Position { line, character },
                (_, _, Some(offset)) => highlight::Cursor::Offset(offset),
                _ => {
                    return Err("either --line/--character or --offset is required".into());
                }
            };
            highlight::run(&file, cursor, word_end_fallback)?;
            Ok(())
        }
    }
}
