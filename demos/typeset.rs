//! Typesets a text file on the grid layouter and prints the resulting lines.
//!
//! Run with:
//!   cargo run --example typeset -- input.txt --width 12
//!   RUST_LOG=debug cargo run --example typeset -- input.txt --config typeset.json

use clap::Parser;
use paiban::{GridConfig, GridLayouter, TextAlign, TypesetConfig, Typesetter};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Refine line breaks and punctuation spacing of Chinese text")]
struct Args {
    /// Text file to typeset
    input: PathBuf,

    /// Box width in wide characters
    #[arg(short, long, default_value_t = 12.0)]
    width: f32,

    /// Font size in points
    #[arg(long, default_value_t = 16.0)]
    font_size: f32,

    /// JSON file with `grid` and `typeset` sections
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the rewritten markup instead of the lines
    #[arg(long)]
    markup: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DemoConfig {
    grid: Option<GridConfig>,
    typeset: TypesetConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config: DemoConfig = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => DemoConfig::default(),
    };
    let grid = config.grid.unwrap_or(GridConfig {
        box_width: args.width * args.font_size,
        font_size: args.font_size,
        alignment: TextAlign::Justified,
    });

    let text = fs::read_to_string(&args.input)?;
    let typesetter = Typesetter::new(GridLayouter::new(grid)?, config.typeset);
    let output = typesetter.typeset(text.trim_end())?;

    if args.markup {
        println!("{}", output.markup);
    } else {
        for line in &output.snapshot.lines {
            let text: String = output
                .snapshot
                .line_chars(line)
                .iter()
                .filter(|c| c.is_visible)
                .map(|c| c.character)
                .collect();
            let alignment = format!("{:?}", line.alignment);
            println!("{alignment:<10} |{text}|");
        }
    }

    let stats = output.stats;
    eprintln!(
        "{} lines, {} relayouts, {} kerns, {} flushed, {} absorbed, {} orphans avoided",
        stats.lines,
        stats.relayouts,
        stats.kerns_inserted,
        stats.flushed_lines,
        stats.absorbed_lines,
        stats.orphans_avoided
    );
    Ok(())
}
