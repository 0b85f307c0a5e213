//! Self-play demo: four random-policy players run a full game to completion.

use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use hkmahjong::prelude::*;

#[derive(Parser)]
#[command(about = "Run a self-play Hong Kong mahjong game with random decisions")]
struct Args {
    /// Wall shuffle seed; omit for a fresh random deal.
    #[arg(long)]
    seed: Option<u64>,
}

/// Picks uniformly among the offered options, with win always preferred (a
/// random player otherwise has no reason to ever pass on a winning hand).
struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl PlayerPort for RandomPlayer {
    fn query_meld(&mut self, _state: &hkmahjong::engine::GameState, options: &MeldOptions) -> Choice {
        if let Some(melds) = &options.win {
            return Choice::Win(melds.clone());
        }
        let mut candidates: Vec<Choice> = Vec::new();
        candidates.extend(options.kong.iter().cloned().map(Choice::Kong));
        candidates.extend(options.pung.iter().cloned().map(Choice::Pung));
        candidates.extend(options.chow.iter().cloned().map(Choice::Chow));
        candidates.push(Choice::Pass);
        candidates.choose(&mut self.rng).cloned().unwrap_or(Choice::Pass)
    }

    fn query_discard(&mut self, state: &hkmahjong::engine::GameState, sorted_view: bool) -> usize {
        let hand_len = state.current_player().hand.len();
        let _ = sorted_view;
        self.rng.gen_range(0..hand_len.max(1))
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = EngineConfig { seed: args.seed, ..Default::default() };
    let base_seed = args.seed.unwrap_or(0);
    let ports: Vec<Box<dyn PlayerPort>> = vec![
        Box::new(RandomPlayer::new(base_seed)),
        Box::new(RandomPlayer::new(base_seed.wrapping_add(1))),
        Box::new(RandomPlayer::new(base_seed.wrapping_add(2))),
        Box::new(RandomPlayer::new(base_seed.wrapping_add(3))),
    ];
    let mut engine = GameEngine::new(ports, config).expect("exactly 4 players were provided");

    loop {
        match engine.step() {
            Ok(StepOutcome::Continue) => continue,
            Ok(StepOutcome::GameOver(GameResult::Win { winner, faan, .. })) => {
                println!("seat {winner} wins for {faan} faan");
                break;
            }
            Ok(StepOutcome::GameOver(GameResult::Draw)) => {
                println!("the wall ran out: draw");
                break;
            }
            Err(violation) => {
                eprintln!("engine halted on a state violation: {violation}");
                break;
            }
        }
    }
}
