//! Plays a complete scripted match between two computer players and prints
//! the result: a seeded random player as dark against a minimax player as
//! light.

use anyhow::Result;
use clap::Parser;
use oxello_engine::{Board, Game, GameManager, MatchTimer, Piece, STANDARD_SIZE};
use oxello_player::{BestEvaluation, DiscCount, Minimax, RandomSelection, SearchStrategy};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Play a scripted Othello match between two computer players")]
struct Args {
    /// Edge length of the board; must be even and at least 4.
    #[arg(long, default_value_t = STANDARD_SIZE)]
    size: usize,

    /// Search depth for light's minimax player.
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Seed for dark's random player.
    #[arg(long, default_value_t = 5)]
    seed: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let board = Board::with_size(args.size)?;
    let mut manager =
        GameManager::with_extensions(Game::new(board), vec![Box::new(MatchTimer::new())]);
    let mut dark = RandomSelection::with_seed(args.seed);
    let mut light = BestEvaluation;
    let light_eval = Minimax::new(args.depth);

    manager.start();
    while !manager.game().is_game_over() {
        let piece = manager.game().current();
        let position = match piece {
            Piece::Dark => dark.search(manager.game().board(), piece, &DiscCount),
            Piece::Light => light.search(manager.game().board(), piece, &light_eval),
        };
        manager.put(position)?;
        info!(%piece, %position, "move played");
    }

    println!("{}\n", manager.game().board());
    let dark_count = manager.game().board().count(Piece::Dark);
    let light_count = manager.game().board().count(Piece::Light);
    println!("dark {} - {} light", dark_count, light_count);
    match manager.game().winner() {
        Some(winner) => println!("{} wins", winner),
        None => println!("draw"),
    }
    for &piece in &[Piece::Dark, Piece::Light] {
        for seconds in manager.results(piece) {
            println!("{} used {}s", piece, seconds);
        }
    }
    Ok(())
}
