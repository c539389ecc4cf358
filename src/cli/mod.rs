pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "plateful")]
#[command(about = "Plateful - recipe discovery backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the API server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },

    /// Search for recipes against a running server
    Search {
        /// Free-text search query
        query: String,

        /// Filter by cuisine
        #[arg(long)]
        cuisine: Option<String>,

        /// Filter by diet
        #[arg(long)]
        diet: Option<String>,

        /// Maximum cooking time in minutes
        #[arg(long)]
        max_time: Option<u32>,
    },

    /// List the available mood shortcuts
    Moods,
}
