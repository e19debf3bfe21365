//! Braidplane CLI
//!
//! Command-line interface for:
//! - Rendering the braid-word point cloud to a PNG scatter image (`render`)
//! - Tallying words per component class (`stats`)
//! - Evaluating a single word (`eval`)
//!
//! All algorithmic logic lives in `braidplane-words`; this crate owns argument
//! parsing, console reporting, and the raster output.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use braidplane_words::{component_count, embed, enumerate_up_to, parse_word, Word};

mod render;

use render::{render_scatter, RenderOptions, ScatterPoint};

#[derive(Parser)]
#[command(name = "braidplane")]
#[command(
    author,
    version,
    about = "Free-group braid words: enumerate, classify, plot"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate braid words, embed them in the plane, and render a scatter
    /// image colored by component count.
    Render {
        /// Generate words of length 0 up to (but not including) this order
        #[arg(long, default_value_t = 9)]
        max_order: usize,
        /// Exclude symbols that immediately cancel the previous symbol
        #[arg(long)]
        prune: bool,
        /// Keep only knot-like words (component count 1)
        #[arg(long)]
        knots_only: bool,
        /// Output PNG path
        #[arg(short, long, default_value = "braidplane.png")]
        out: PathBuf,
        /// Square canvas edge length in pixels
        #[arg(long, default_value_t = 1500)]
        size: u32,
        /// Square marker edge length in pixels
        #[arg(long, default_value_t = 2)]
        marker: u32,
    },

    /// Tally enumerated words per component class.
    Stats {
        /// Generate words of length 0 up to (but not including) this order
        #[arg(long, default_value_t = 9)]
        max_order: usize,
        /// Exclude symbols that immediately cancel the previous symbol
        #[arg(long)]
        prune: bool,
        /// Emit the tally as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Evaluate one word given as whitespace-separated tokens
    /// (a | a_inv | b | b_inv), e.g. `braidplane eval "a b a_inv"`.
    Eval {
        /// The word; an empty string is the empty word
        word: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Render {
            max_order,
            prune,
            knots_only,
            out,
            size,
            marker,
        } => cmd_render(max_order, prune, knots_only, &out, size, marker),
        Commands::Stats {
            max_order,
            prune,
            json,
        } => cmd_stats(max_order, prune, json),
        Commands::Eval { word } => cmd_eval(&word),
    }
}

fn cmd_render(
    max_order: usize,
    prune: bool,
    knots_only: bool,
    out: &PathBuf,
    size: u32,
    marker: u32,
) -> Result<()> {
    eprintln!("{}", "generating braids...".cyan());
    let mut words = enumerate_up_to(max_order, prune)?;
    eprintln!("{} {} braids", "generated".green().bold(), words.len());

    if knots_only {
        eprintln!("{}", "filtering braids...".cyan());
        let mut kept: Vec<Word> = Vec::new();
        for word in words {
            if component_count(&word)? == 1 {
                kept.push(word);
            }
        }
        words = kept;
        eprintln!("{} {} braids", "filtered to".green().bold(), words.len());
    }

    eprintln!("{}", "computing positions and components...".cyan());
    let mut points: Vec<ScatterPoint> = Vec::with_capacity(words.len());
    for word in &words {
        let (x, y) = embed(word);
        points.push(ScatterPoint {
            x,
            y,
            components: component_count(word)?,
        });
    }

    eprintln!("{}", "plotting...".cyan());
    let options = RenderOptions {
        size_px: size,
        marker_px: marker,
    };
    let img = render_scatter(&points, &options)?;
    img.save(out)
        .with_context(|| format!("write scatter image to {}", out.display()))?;
    eprintln!(
        "{} {}",
        "wrote".green().bold(),
        out.display().to_string().bold()
    );
    Ok(())
}

#[derive(Debug, Serialize)]
struct StatsReport {
    max_order: usize,
    prune: bool,
    total: usize,
    /// Word count per component class, indexed by class − 1.
    per_class: [usize; 3],
}

fn cmd_stats(max_order: usize, prune: bool, json: bool) -> Result<()> {
    let words = enumerate_up_to(max_order, prune)?;

    let mut per_class = [0usize; 3];
    for word in &words {
        let components = component_count(word)?;
        per_class[components as usize - 1] += 1;
    }

    let report = StatsReport {
        max_order,
        prune,
        total: words.len(),
        per_class,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} (max order {}, prune: {})",
        "braid component tally".bold(),
        report.max_order,
        report.prune
    );
    for class in 1..=3usize {
        println!("  {class} component(s): {}", report.per_class[class - 1]);
    }
    println!("  total: {}", report.total);
    Ok(())
}

fn cmd_eval(word: &str) -> Result<()> {
    let parsed = parse_word(word)?;
    let components = component_count(&parsed)?;
    let (x, y) = embed(&parsed);

    let shown = if parsed.is_empty() {
        "(empty)".to_string()
    } else {
        parsed
            .iter()
            .map(|g| g.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };

    println!("word:       {shown}");
    println!("components: {components}");
    println!("position:   ({x}, {y})");
    Ok(())
}
