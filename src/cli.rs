//! Command-line surface of the geospot binary.

use clap::builder::PossibleValue;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::language::Language;
use crate::output::staticmap::{MapSize, MapType};

/// Geospot - Wikipedia coordinate resolver
#[derive(Parser, Debug)]
#[command(name = "geospot")]
#[command(about = "Resolve Wikipedia places to coordinates and export them", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved spots as JSON
    Json(OutputArgs),

    /// Generate a KML document of the resolved spots
    Markup(OutputArgs),

    /// Build a static map of the resolved spots
    Map(MapArgs),
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Wikipedia article URLs or search terms
    #[arg(required = true, num_args = 1..)]
    pub wikiobj: Vec<String>,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    pub filename: Option<PathBuf>,

    /// Wikipedia language edition
    #[arg(short, long, default_value = "de")]
    pub language: Language,
}

#[derive(Args, Debug)]
pub struct MapArgs {
    #[command(flatten)]
    pub output: OutputArgs,

    /// Connect the markers with a path
    #[arg(short, long)]
    pub path: bool,

    /// Fill the region enclosed by the spots
    #[arg(short, long)]
    pub region: bool,

    /// Map size in pixels, WIDTHxHEIGHT
    #[arg(short, long, default_value = "640x400")]
    pub size: MapSize,

    /// Map rendering style
    #[arg(short = 't', long = "type", default_value = "roadmap")]
    pub map_type: MapType,
}

impl clap::ValueEnum for Language {
    fn value_variants<'a>() -> &'a [Self] {
        &[Language::De, Language::En, Language::Fr]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.code()))
    }
}

impl clap::ValueEnum for MapType {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            MapType::Roadmap,
            MapType::Satellite,
            MapType::Terrain,
            MapType::Hybrid,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.as_str()))
    }
}
