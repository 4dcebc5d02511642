//! docdump — developer-facing docs from XML doc comments and module metadata.
//!
//! For every qualifying type of a compiled module, writes a JSON-shaped
//! usage sample (each field shows its type instead of a value) and a table
//! pairing each member with its doc-comment summary:
//!
//! - `docdump Geo.json` reads `Geo.xml` next to it and prints the dump
//! - `docdump Geo.json -o Geo.txt` writes it as UTF-16 with a BOM

mod assemble;
mod error;
mod metadata;
mod model;
mod output;
mod parser;
mod render;
mod vocabulary;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::assemble::{Assembler, TypeFilter};
use crate::error::Error;
use crate::metadata::Manifest;
use crate::output::Encoding;

#[derive(Parser)]
#[command(
    name = "docdump",
    about = "Generate typed JSON samples and member tables from XML doc comments"
)]
struct Cli {
    /// Metadata manifest exported from the compiled module
    metadata: PathBuf,

    /// XML doc-comment file. Defaults to the manifest path with an .xml extension.
    #[arg(long)]
    xml: Option<PathBuf>,

    /// Output file. If omitted, the dump is printed to stdout as UTF-8.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: text (default), json
    #[arg(short = 'f', long, default_value = "text")]
    format: String,

    /// Encoding of the output file
    #[arg(long, value_enum, default_value_t = Encoding::Utf16)]
    encoding: Encoding,

    /// Only document types in this namespace. Can be specified multiple times.
    #[arg(long)]
    namespace: Vec<String>,

    /// Print every parsed doc-comment record instead of the dump (JSON with -f json)
    #[arg(long)]
    list_members: bool,

    /// Log progress and skipped members to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "docdump=debug" } else { "docdump=warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let xml_path = doc_file_path(&cli.metadata, cli.xml.as_deref());
    validate_paths(&cli.metadata, &xml_path, cli.output.as_deref())?;
    let renderer = render::create_renderer(&cli.format)?;

    // Both inputs are read in full before anything is rendered or written.
    let records = parser::xmldoc::read_file(&xml_path)?;

    if cli.list_members {
        if cli.format == "json" {
            println!("{}", serde_json::to_string_pretty(&records)?);
        } else {
            for record in &records {
                println!("{}", record);
            }
        }
        return Ok(());
    }

    let manifest = Manifest::load(&cli.metadata)
        .with_context(|| format!("failed to load metadata from {}", cli.metadata.display()))?;

    let filter = TypeFilter {
        namespaces: cli.namespace.clone(),
    };
    let assembler = Assembler::new(&manifest, &records, &filter);
    let docs = assembler.assemble();
    let rendered = renderer.render(&docs)?;

    match &cli.output {
        Some(path) => {
            output::write(path, &rendered, cli.encoding)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(
                "documented {} of {} qualifying types into {}",
                docs.len(),
                assembler.qualifying().len(),
                path.display()
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// The doc file sits next to the module metadata: `out/Geo.json` → `out/Geo.xml`.
fn doc_file_path(metadata: &Path, xml: Option<&Path>) -> PathBuf {
    match xml {
        Some(path) => path.to_path_buf(),
        None => metadata.with_extension("xml"),
    }
}

fn validate_paths(metadata: &Path, xml: &Path, output: Option<&Path>) -> Result<(), Error> {
    if metadata.as_os_str().is_empty() {
        return Err(Error::invalid_argument("metadata", "path is empty"));
    }
    if metadata == xml {
        return Err(Error::invalid_argument(
            "xml",
            "doc-comment file and metadata manifest are the same file",
        ));
    }
    if let Some(output) = output {
        if output.as_os_str().is_empty() {
            return Err(Error::invalid_argument("output", "path is empty"));
        }
        if output == metadata || output == xml {
            return Err(Error::invalid_argument(
                "output",
                format!("{} would overwrite an input", output.display()),
            ));
        }
    }
    Ok(())
}
