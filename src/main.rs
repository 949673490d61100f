//! circnot - circuit notation to schematic layout
//!
//! # Usage
//!
//! ```bash
//! circnot 'UntKdntR1nt(R2//R3)' --pretty > layout.json
//! echo 'R//R1nt(R2//R3)' | circnot --tree
//! ```

use std::io::Read;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::{debug, error, info, LevelFilter};

use circuit_notation::{
    dsl,
    error::{NotationError, Result},
    layout::{DEFAULT_BRANCH_GAP, DEFAULT_RAIL_PADDING, DEFAULT_SERIES_GAP},
    LayoutConfig, LayoutResult,
};

/// Circuit notation layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Notation to lay out, e.g. 'R1nt(R2//R3)'. Read from stdin when absent.
    #[arg(value_name = "NOTATION", conflicts_with = "file")]
    notation: Option<String>,

    /// Read the notation from a file
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Print the tokens instead of the layout
    #[arg(long, conflicts_with = "tree")]
    tokens: bool,

    /// Print the canonical notation of the parsed tree instead of the layout
    #[arg(long)]
    tree: bool,

    /// Indent the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Exit with an error instead of printing an empty layout on failure
    #[arg(long)]
    strict: bool,

    /// Horizontal gap between series elements
    #[arg(long, default_value_t = DEFAULT_SERIES_GAP)]
    series_gap: f32,

    /// Vertical gap between parallel branches
    #[arg(long, default_value_t = DEFAULT_BRANCH_GAP)]
    branch_gap: f32,

    /// Padding between parallel rails and branches
    #[arg(long, default_value_t = DEFAULT_RAIL_PADDING)]
    rail_padding: f32,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", args.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!(args:?; "Parsed arguments");

    if let Err(err) = run(&args) {
        error!("{err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let notation = read_notation(args)?;
    info!(notation = notation.trim(); "Processing notation");

    if args.tokens {
        for token in dsl::tokenize(&notation) {
            println!("{}\t{}", token.kind, token.text);
        }
        return Ok(());
    }

    let config = LayoutConfig::new()
        .with_series_gap(args.series_gap)
        .with_branch_gap(args.branch_gap)
        .with_rail_padding(args.rail_padding);

    if args.tree {
        let tree = dsl::parse_tree_with_depth(&notation, config.max_depth)?;
        if let Some(tree) = tree {
            println!("{tree}");
        }
        return Ok(());
    }

    let layout: LayoutResult = if args.strict {
        circuit_notation::try_parse(&notation, &config)?
    } else {
        circuit_notation::parse_with_config(&notation, &config)
    };

    let json = if args.pretty {
        layout.to_json_pretty()?
    } else {
        layout.to_json()?
    };
    println!("{json}");

    let (width, height) = layout
        .bounds()
        .map(|b| (b.width(), b.height()))
        .unwrap_or_default();
    info!(
        components = layout.components.len(),
        wires = layout.wires.len(),
        width = width,
        height = height;
        "Layout written"
    );
    Ok(())
}

fn read_notation(args: &Args) -> Result<String> {
    if let Some(notation) = &args.notation {
        return Ok(notation.clone());
    }

    if let Some(path) = &args.file {
        return std::fs::read_to_string(path).map_err(|e| NotationError::FileReadError {
            path: path.display().to_string(),
            source: e,
        });
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| NotationError::FileReadError {
            path: "<stdin>".to_string(),
            source: e,
        })?;
    Ok(buffer)
}
