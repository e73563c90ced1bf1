//! exprsql: compile filter predicates from the command line.
//!
//! # Usage
//!
//! ```bash
//! # One predicate
//! exprsql compile age '>=' 18
//!
//! # A JSON filter tree against MySQL
//! exprsql --dialect mysql filter '{"op":"&","children":[{"field":"age","op":">=","value":18}]}'
//!
//! # Operator support matrix
//! exprsql operators
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use exprsql::literal;
use exprsql::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "exprsql")]
#[command(version)]
#[command(about = "Compile typed filter expressions into SQL predicates", long_about = None)]
#[command(after_help = "EXAMPLES:
    exprsql compile name contains bob
    exprsql compile flags containsBit 7 --dialect clickhouse
    exprsql filter '{\"field\":\"age\",\"op\":\"==\",\"value\":30}' --format json")]
struct Cli {
    /// Target dialect (clickhouse, mysql); defaults to the config file
    #[arg(short, long, global = true, env = "EXPRSQL_DIALECT")]
    dialect: Option<DialectKind>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a single predicate
    Compile {
        /// Field key
        field: String,
        /// Operator symbol (==, contains, containsBit, ...)
        op: String,
        /// Raw value; quote it to force a string ('30')
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Declared kind, overriding the literal classifier
        #[arg(short, long)]
        kind: Option<ValueKind>,
    },
    /// Compile a JSON filter tree into a WHERE clause
    Filter {
        /// Filter tree as JSON
        json: String,
        /// Fail on conditions that do not resolve instead of dropping them
        #[arg(short, long)]
        strict: bool,
    },
    /// Show the operator support matrix
    Operators,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_logging(cli.verbose, &config.log_level);

    let dialect = cli.dialect.unwrap_or(config.dialect).build();
    tracing::debug!("using dialect {}", dialect.name());

    match &cli.command {
        Commands::Compile {
            field,
            op,
            value,
            kind,
        } => compile_one(&dialect, field, op, value, *kind, &cli.format),
        Commands::Filter { json, strict } => {
            compile_filter(&dialect, json, *strict || config.strict, &cli.format)
        }
        Commands::Operators => {
            show_operators(&dialect);
            Ok(())
        }
    }
}

fn init_logging(verbose: bool, default_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn compile_one(
    dialect: &Dialect,
    field: &str,
    op: &str,
    raw: &str,
    declared: Option<ValueKind>,
    format: &OutputFormat,
) -> Result<()> {
    let value = literal::classify(raw)?;
    let kind = declared.unwrap_or_else(|| value.kind());
    tracing::debug!("classified {} as {}", raw, kind);

    let predicate = dialect.compile_as(op, field, kind, &value);
    print_predicate(predicate.as_ref(), format)
}

fn compile_filter(dialect: &Dialect, json: &str, strict: bool, format: &OutputFormat) -> Result<()> {
    let filter = Filter::from_json(json)?;
    let predicate = if strict {
        filter.compile_strict(dialect)?
    } else {
        filter.compile(dialect)
    };
    print_predicate(predicate.as_ref(), format)
}

fn print_predicate(predicate: Option<&Predicate>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&predicate)?);
        }
        OutputFormat::Table => match predicate {
            None => {
                println!("{}", "(no predicate: nothing to add to WHERE)".dimmed());
            }
            Some(p) => {
                println!("{}", "Generated SQL:".green().bold());
                println!("  {}", p.sql.white());

                if !p.params.is_empty() {
                    println!();
                    println!("{}", "Bindings:".cyan());
                    for (i, param) in p.params.iter().enumerate() {
                        println!("  ?{} = {}", i + 1, param.to_string().yellow());
                    }
                }
            }
        },
    }
    Ok(())
}

fn show_operators(dialect: &Dialect) {
    println!(
        "{} {}",
        "Operators for".cyan().bold(),
        dialect.name().cyan().bold()
    );
    println!();

    println!(
        "{:16} {:8} {:8} {:8}",
        "Operator".white().bold(),
        "NUMBER".white().bold(),
        "BOOLEAN".white().bold(),
        "STRING".white().bold()
    );
    println!("{}", "─".repeat(44).dimmed());

    for op in dialect.operators() {
        let cells: Vec<String> = ValueKind::ALL
            .iter()
            .map(|kind| {
                let mark = if dialect.supports(op, *kind) { "✓" } else { "·" };
                format!("{:8}", mark)
            })
            .collect();
        let label = if dialect.kinds(op).is_empty() {
            format!("{:16}", op).dimmed()
        } else {
            format!("{:16}", op).yellow()
        };
        println!("{} {}", label, cells.join(" "));
    }
}
