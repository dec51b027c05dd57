use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use html_to_latex::{ConvertOptions, ExtractionScope, HeadingStyle, Strategy, TableKind};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input file. Treated as HTML when the name ends in `.html`, plain text otherwise.
    input: PathBuf,

    /// Output .tex path (overwritten).
    output: PathBuf,

    /// Substitution table.
    #[arg(long, value_enum, default_value_t = TableKind::Full)]
    table: TableKind,

    /// How the table is applied.
    #[arg(long, value_enum, default_value_t = Strategy::Sequential)]
    strategy: Strategy,

    /// Command names for h2..h6.
    #[arg(long, value_enum, default_value_t = HeadingStyle::Literal)]
    headings: HeadingStyle,

    /// Which elements are extracted as paragraphs.
    #[arg(long, value_enum, default_value_t = ExtractionScope::Blocks)]
    scope: ExtractionScope,

    /// Text inserted between paragraphs.
    #[arg(long, default_value = "")]
    separator: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let options = ConvertOptions {
        table: args.table,
        strategy: args.strategy,
        headings: args.headings,
        scope: args.scope,
        separator: args.separator,
    };

    html_to_latex::convert_file(&args.input, &args.output, &options)
        .with_context(|| format!("convert {}", args.input.display()))?;

    println!("Converted LaTeX written to {}", args.output.display());
    Ok(())
}
