use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::builder::TypedValueParser;
use clap::Parser;
use parquet_reader::{read_parquet, ReadOptions, Table, DEFAULT_BATCH_SIZE};

/// Exit status for usage and read failures, `-1` as seen by the shell
const EXIT_FAILURE: u8 = 255;

#[derive(Parser, Debug)]
#[command(version, about = "Read a Parquet file fully into an in-memory arrow table")]
struct Cli {
    /// The input Parquet file path
    input: PathBuf,

    /// Print the table
    #[arg(short, long)]
    print: bool,

    /// Print row group, row and column counts from the file footer
    #[arg(short, long)]
    summary: bool,

    /// Maximum number of rows per record batch
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE, value_parser = clap::value_parser!(u32).range(1..).map(|v| v as usize))]
    batch_size: usize,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // a failed write here means stderr is closed and there is no one left to tell
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_FAILURE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let options = ReadOptions::new().with_batch_size(cli.batch_size);
    let table = match read_parquet(&cli.input, &options) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error reading parquet file: {e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    // nothing reaches stdout unless the whole table rendered
    let rendered = if cli.print {
        match table.pretty_format() {
            Ok(rendered) => Some(rendered),
            Err(e) => {
                eprintln!("Error rendering table: {e}");
                return ExitCode::from(EXIT_FAILURE);
            }
        }
    } else {
        None
    };

    if let Err(e) = report(&cli, &table, rendered.as_deref()) {
        eprintln!("Error writing output: {e}");
        return ExitCode::from(EXIT_FAILURE);
    }
    ExitCode::SUCCESS
}

fn report(cli: &Cli, table: &Table, rendered: Option<&str>) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    if let Some(rendered) = rendered {
        writeln!(out, "Table: ")?;
        writeln!(out, "{rendered}")?;
    }
    if cli.summary {
        writeln!(out, "{}", table.summary())?;
    }
    out.flush()
}
