//! Plays many games through the real store and compares the two
//! strategies. Switching should win about two thirds of the time,
//! staying about one third, which is the classic result.
//!
//! Usage: `simulate [rounds]` (default 10000). Set `RUST_LOG=debug` to
//! watch individual moves.

use monty::prelude::*;
use rand::Rng;

/// The player's final move once the host has revealed a door.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Stay,
    Switch,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let rounds: u32 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()?
        .unwrap_or(10_000);

    eprintln!("playing {rounds} games per strategy");

    let store = GameStore::new();
    let mut rng = rand::rng();

    for strategy in [Strategy::Stay, Strategy::Switch] {
        let mut wins = 0u32;
        for _ in 0..rounds {
            if play(&store, strategy, &mut rng)? {
                wins += 1;
            }
        }
        let name = match strategy {
            Strategy::Stay => "stay",
            Strategy::Switch => "switch",
        };
        println!(
            "{name:>6}: {wins}/{rounds} wins ({:.1}%)",
            100.0 * f64::from(wins) / f64::from(rounds)
        );
    }

    Ok(())
}

/// Plays one full game and returns whether the player won.
fn play(
    store: &GameStore,
    strategy: Strategy,
    rng: &mut impl Rng,
) -> Result<bool, MontyError> {
    let game = store.create();

    let first = DoorId(rng.random_range(1..=3));
    game.select(first)?;

    let target = match strategy {
        Strategy::Stay => first,
        Strategy::Switch => game
            .snapshot()
            .doors
            .iter()
            .find(|d| d.status == DoorStatus::Closed)
            .map(|d| d.id)
            .expect("one door is still closed after the reveal"),
    };
    game.open(target)?;

    let won = game.won().expect("the game is resolved");
    store.remove(game.id())?;
    Ok(won)
}
