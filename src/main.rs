//! Splice HTML CLI
//!
//! Usage:
//!   splice-html [OPTIONS] [FILE]
//!
//! Options:
//!   --strict         Reject values that are not known content kinds
//!   -v, --verbose    Log rendering steps to stderr
//!   -h, --help       Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use splice_html::{render_document_with_config, RenderConfig};

#[derive(Parser)]
#[command(name = "splice-html")]
#[command(about = "Render a TOML template document to escaped HTML")]
struct Cli {
    /// Template document (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Override the document config and render in strict mode
    #[arg(long)]
    strict: bool,

    /// Log rendering steps to stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let config = cli.strict.then(|| RenderConfig::new().with_strict(true));
    match render_document_with_config(&source, config) {
        Ok(html) => {
            println!("{}", html);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"Splice HTML - render template documents to escaped HTML

USAGE:
    splice-html [OPTIONS] [FILE]
    cat page.toml | splice-html

OPTIONS:
    --strict         Reject values that are not known content kinds
    -v, --verbose    Log rendering steps to stderr
    -h, --help       Print help

DOCUMENT FORMAT:
    segments = ["<p>Hello, ", "! You have ", " items.</p>"]
    values = ["<Bob>", {{ unsafe = "<b>5</b>" }}]

    [render]
    strict = false

There must be exactly one more segment than values. Strings are escaped,
{{ unsafe = "..." }} is emitted verbatim, arrays are flattened, and
{{ template = {{ segments = [...], values = [...] }} }} nests a template."#
    );
}
