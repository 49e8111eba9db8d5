//! Pronounce a Turkish word with an external audio player (mpv by default).
//!
//! Usage: `prontr kaymak`

use anyhow::{Context, Result};
use clap::Parser;
use tdk::audio::Player;
use tdk::cli::output;
use tdk::{Config, WordQuery};

#[derive(Parser, Debug)]
#[command(name = "prontr")]
#[command(version, about = "Play the TDK pronunciations of a word", long_about = None)]
struct Cli {
    /// The word to pronounce
    #[arg(value_name = "WORD")]
    word: String,

    /// Audio player program, called as `<player> [args...] <file>`
    #[arg(long, env = "TDK_PLAYER")]
    player: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Dictionary service base URL
    #[arg(long, env = "TDK_BASE_URL", hide = true)]
    base_url: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let use_color = !cli.no_color;
    if !use_color {
        colored::control::set_override(false);
    }

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(player) = cli.player {
        config.player = player;
        config.player_args.clear();
    }
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let player = Player::from_config(&config);
    let mut query = WordQuery::with_config(cli.word, &config)?;

    if let Err(err) = query.play_pronunciations(&player) {
        output::print_error(&format!("{:#}", anyhow::Error::from(err)), use_color);
        std::process::exit(1);
    }

    Ok(())
}
