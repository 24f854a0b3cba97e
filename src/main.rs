//! SVG Charts CLI
//!
//! Usage:
//!   svg-charts [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --output <FILE>     Write the SVG to a file instead of stdout
//!   --standalone            Prepend an XML declaration
//!   --pretty                Put each element on its own line
//!   --sample <KIND>         Print a sample chart document (bar, line, pie)
//!   -h, --help              Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use svg_charts::{ChartDocument, ChartKind, SvgConfig};

#[derive(Parser)]
#[command(name = "svg-charts")]
#[command(about = "Render bar, line and pie charts from TOML documents to SVG")]
struct Cli {
    /// Chart document (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Prepend an XML declaration so the output is a standalone .svg file
    #[arg(long)]
    standalone: bool,

    /// Put each top-level element on its own line
    #[arg(long)]
    pretty: bool,

    /// Print a sample document for the given chart kind and exit
    #[arg(long, value_name = "KIND")]
    sample: Option<ChartKind>,
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "svg_charts=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    if let Some(kind) = cli.sample {
        print!("{}", kind.sample());
        return;
    }

    // No input file and an interactive stdin: nothing to read
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let document = match &cli.input {
        Some(path) => ChartDocument::from_file(path).unwrap_or_else(|e| {
            fail(&format!("Error loading chart '{}': {}", path.display(), e))
        }),
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                fail(&format!("Error reading from stdin: {}", e));
            }
            ChartDocument::from_str(&buffer)
                .unwrap_or_else(|e| fail(&format!("Error loading chart: {}", e)))
        }
    };
    debug!(kind = %document.kind(), "rendering chart document");

    let svg_config = SvgConfig::new()
        .with_standalone(cli.standalone)
        .with_pretty_print(cli.pretty);
    let svg = document
        .render(&svg_config)
        .unwrap_or_else(|e| fail(&format!("Error: {}", e)));

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, format!("{}\n", svg)) {
                fail(&format!("Error writing '{}': {}", path.display(), e));
            }
        }
        None => println!("{}", svg),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}

fn print_intro() {
    println!(
        r#"SVG Charts - render bar, line and pie charts to SVG

USAGE:
    svg-charts [OPTIONS] [FILE]
    cat chart.toml | svg-charts

OPTIONS:
    -o, --output <FILE>   Write the SVG to a file
    --standalone          Prepend an XML declaration
    --pretty              One element per line
    --sample <KIND>       Print a sample document (bar, line, pie)
    -h, --help            Print help

QUICK START:
    svg-charts --sample bar > bar.toml
    svg-charts bar.toml -o bar.svg --standalone"#
    );
}
