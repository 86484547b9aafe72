//! Command-line interface for the SQL operator catalog
//!
//! Inspect operators, render them against columns and values, and evaluate
//! predicates and scalar functions in memory.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use log::{LevelFilter, debug};
use serde_json::{Value as JsonValue, json};
use sqlexpr_operators::{
    Expr, GenericPlatform, InMemoryEvaluator, Operator, OperatorCatalog, OperatorConfig, Selector,
    SqlValue, registry::create_platform_catalog, render_api, render_sql,
};
use std::fs;
use std::process;

#[derive(Parser)]
#[command(name = "sqlexpr")]
#[command(about = "Inspect, render and evaluate SQL expression operators")]
#[command(version)]
#[command(author = "OctoFHIR Team <funyloony@gmail.com>")]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the operators in the catalog
    List {
        /// List the internal default layer instead
        #[arg(long)]
        internal: bool,
    },
    /// Show one operator as JSON
    Show {
        /// Selector number or platform operator name
        operator: String,
    },
    /// Render an operator applied to arguments
    Render {
        /// Selector number or platform operator name
        operator: String,
        /// Arguments: JSON values, or column names when not valid JSON
        args: Vec<String>,
        /// Bind values as parameters instead of inlining them
        #[arg(short, long)]
        bind: bool,
        /// Print the expression-builder rendering
        #[arg(long)]
        api: bool,
    },
    /// Evaluate a predicate in memory
    Conform {
        /// Selector number or platform operator name
        operator: String,
        /// Left operand as JSON
        left: String,
        /// Right operand as JSON
        right: String,
    },
    /// Apply a scalar function in memory
    Apply {
        /// Selector number or platform operator name
        operator: String,
        /// Source value as JSON
        source: String,
        /// Further arguments as JSON
        args: Vec<String>,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn load_config(path: Option<&str>) -> Result<OperatorConfig> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("reading config '{path}'"))?;
            OperatorConfig::from_json(&text).with_context(|| format!("parsing config '{path}'"))
        }
        None => Ok(OperatorConfig::default()),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    debug!("Using configuration {config:?}");
    let platform = GenericPlatform::new(config);
    let catalog = create_platform_catalog(&platform);

    let output = match &cli.command {
        Commands::List { internal } => list(&catalog, *internal),
        Commands::Show { operator } => {
            let operator = resolve(&catalog, operator)?;
            serde_json::to_value(operator)?
        }
        Commands::Render {
            operator,
            args,
            bind,
            api,
        } => {
            let selector = resolve(&catalog, operator)?.selector();
            let args = args.iter().map(|arg| argument(arg, *bind)).collect();
            let expr = Expr::apply(selector, args);
            if *api {
                json!({ "api": render_api(&expr, &catalog)? })
            } else {
                serde_json::to_value(render_sql(&expr, &catalog, &platform)?)?
            }
        }
        Commands::Conform {
            operator,
            left,
            right,
        } => {
            let selector = resolve(&catalog, operator)?.selector();
            let evaluator = InMemoryEvaluator::new(&catalog, &platform);
            let result = evaluator.evaluate(selector, &value(left)?, &value(right)?)?;
            json!({ "conforms": result })
        }
        Commands::Apply {
            operator,
            source,
            args,
        } => {
            let selector = resolve(&catalog, operator)?.selector();
            let args = args.iter().map(|arg| value(arg)).collect::<Result<Vec<_>>>()?;
            let evaluator = InMemoryEvaluator::new(&catalog, &platform);
            let result = evaluator.apply_scalar_function(selector, &value(source)?, &args)?;
            json!({ "result": result.to_json(), "kind": result.kind() })
        }
    };

    let text = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{text}");
    Ok(())
}

fn list(catalog: &OperatorCatalog, internal: bool) -> JsonValue {
    let operators: Box<dyn Iterator<Item = &Operator>> = if internal {
        Box::new(catalog.internal_iter())
    } else {
        Box::new(catalog.iter())
    };
    JsonValue::Array(
        operators
            .map(|op| {
                json!({
                    "selector": op.selector(),
                    "name": catalog.names().get(op.selector()).or(op.name()),
                    "type": op.operator_type(),
                    "operator": op.to_string(),
                })
            })
            .collect(),
    )
}

fn resolve<'a>(catalog: &'a OperatorCatalog, operator: &str) -> Result<&'a Operator> {
    match operator.parse::<i32>() {
        Ok(selector) => Ok(catalog.require(Selector(selector))?),
        Err(_) => catalog
            .lookup_by_name(operator)
            .map_err(|e| anyhow!("{e}; use a selector number for unnamed operators")),
    }
}

fn value(text: &str) -> Result<SqlValue> {
    let json: JsonValue =
        serde_json::from_str(text).with_context(|| format!("'{text}' is not a JSON value"))?;
    Ok(SqlValue::from(json))
}

fn argument(text: &str, bind: bool) -> Expr {
    match serde_json::from_str::<JsonValue>(text) {
        Ok(json) if bind => Expr::Parameter(SqlValue::from(json)),
        Ok(json) => Expr::Literal(SqlValue::from(json)),
        Err(_) => Expr::column(text),
    }
}
