//! Command-line interface (CLI) for onepass-calc
//!
//! `run` interprets a program; `emit` translates it to 68000 assembly. The
//! program is read from a file or, when no file is given, from standard
//! input. The first error is printed to standard error and the process exits
//! with a non-zero status.

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser as ClapParser, Subcommand};
use onepass::ScanOptions;
use onepass_calc::{CalcParser, Emitter, Evaluator, Options};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interprets a program
    Run {
        #[command(flatten)]
        source: SourceArgs,
        /// File with values for `?` statements (standard input when absent).
        /// When the program itself comes from standard input and no values
        /// file is given, values are read inline from the program text.
        #[arg(short, long)]
        values: Option<PathBuf>,
    },
    /// Translates a program to 68000 assembly
    Emit {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(ClapArgs, Debug)]
struct SourceArgs {
    /// Input file with the program (standard input when absent)
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// `?` statements take their value from the program text, as in `?X 7`
    #[arg(long)]
    inline_input: bool,
    /// Names are a single letter
    #[arg(long)]
    single_char: bool,
    /// Do not skip spaces and tabs between tokens
    #[arg(long)]
    strict_white: bool,
}

impl SourceArgs {
    fn options(&self, inline_input: bool) -> Options {
        Options {
            scan: ScanOptions {
                maximal_munch: !self.single_char,
                skip_white: !self.strict_white,
            },
            inline_input,
        }
    }
}

type Source = Box<dyn Iterator<Item = u8>>;

fn open_input(path: Option<&Path>) -> Result<Source> {
    match path {
        Some(path) => {
            let bytes = std::fs::read(path).with_context(|| format!("can't open {:?}", path))?;
            Ok(Box::new(bytes.into_iter()))
        }
        None => Ok(Box::new(io::stdin().bytes().map_while(|b| {
            b.map_err(|e| log::warn!("stopped reading program: {e}")).ok()
        }))),
    }
}

fn open_values(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("can't open {:?}", path))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Run { source, values } => {
            let program_on_stdin = source.input.is_none();
            let inline_input = source.inline_input || (program_on_stdin && values.is_none());
            let reader: Box<dyn BufRead> = if inline_input {
                Box::new(io::empty())
            } else {
                open_values(values.as_deref())?
            };
            let eval = Evaluator::new(reader, io::stdout());
            let mut parser = CalcParser::new(
                open_input(source.input.as_deref())?,
                eval,
                source.options(inline_input),
            );
            let count = parser.run()?;
            log::info!("Statements: {count}, Stats: {:?}", parser.stats());
            log::info!("Symbols: {:?}", parser.backend().symtab());
        }
        Commands::Emit { source } => {
            let mut parser = CalcParser::new(
                open_input(source.input.as_deref())?,
                Emitter::new(io::stdout().lock()),
                source.options(source.inline_input),
            );
            let count = parser.run()?;
            log::info!("Statements: {count}, Stats: {:?}", parser.stats());
        }
    }

    Ok(())
}
