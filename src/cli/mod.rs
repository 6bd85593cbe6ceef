// Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pantry")]
#[command(about = "Pantry - ingredient-based recipe recommendations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the recommendation server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },

    /// Query a running server for recipe suggestions
    Search {
        /// Ingredient list, comma separated or free form
        ingredients: String,

        /// Number of suggestions to return
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Load the dataset and print corpus statistics
    Validate {
        /// Dataset path (defaults to the configured DATASET_PATH)
        #[arg(short, long)]
        dataset: Option<String>,
    },
}
