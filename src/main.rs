use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use flatdb::{
    repl,
    sql::{
        engine::{Session, TableEngine},
        parser::ast::Dialect,
        schema::Schema,
    },
    storage::file::FileEngine,
};

/// Interactive table store over flat CSV files
#[derive(Parser, Debug)]
#[command(name = "flatdb", version)]
struct Cli {
    /// Schema document naming the tables and their columns
    #[arg(long, short, default_value = "scheme.json")]
    schema: PathBuf,

    /// Directory holding the `<table>.csv` files
    #[arg(long, short, default_value = ".")]
    data_dir: PathBuf,

    /// Accept the historical grammar (unchecked WHERE/FROM, 3+ INSERT values)
    #[arg(long)]
    legacy_syntax: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let schema = match Schema::load(&cli.schema) {
        Ok(schema) => schema,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    let store = match FileEngine::new(&cli.data_dir) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    let dialect = if cli.legacy_syntax {
        Dialect::Legacy
    } else {
        Dialect::Strict
    };

    let mut session = Session::new(TableEngine::new(schema, store), dialect);
    match repl::run(&mut session, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr, stdout carries the REPL
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
