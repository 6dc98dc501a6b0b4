//! Server configuration
//!
//! Every option can be given as a flag or an environment variable; a `.env` file in the working
//! directory is loaded first.

use chess_search::{RootPerspective, SearchSettings};
use clap::Parser;
use std::net::SocketAddr;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "best-move-server",
    version,
    about = "Answers a FEN with the position after the engine's move"
)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "BEST_MOVE_ADDR", default_value = "127.0.0.1:5000")]
    pub addr: SocketAddr,

    /// Search depth in plies
    #[arg(
        long,
        env = "SEARCH_DEPTH",
        default_value_t = chess_search::constants::DEFAULT_DEPTH,
        value_parser = clap::value_parser!(u32).range(1..=16)
    )]
    pub depth: u32,

    /// Whose score the root optimizes: "side-to-move" or "first-mover"
    #[arg(long, env = "ROOT_PERSPECTIVE", default_value_t = RootPerspective::SideToMove)]
    pub perspective: RootPerspective,
}

impl Config {
    /// Load `.env` (if present), then parse flags and environment
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Config::parse()
    }

    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            depth: self.depth,
            perspective: self.perspective,
        }
    }
}
