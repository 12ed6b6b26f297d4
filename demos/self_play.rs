extern crate minimax_lib;

use clap::Parser;
use clap::error::ErrorKind;
use minimax_lib::agent::{Agent, select_move};
use minimax_lib::board::{GameOutcome, Mark};
use minimax_lib::game::Game;
use minimax_lib::random::{RandomPlayer, StandardRandomGenerator};
use minimax_lib::search::Strategy;

#[derive(Parser, Debug)]
#[command(name = "self_play", about = "Perfect Tic-Tac-Toe by exhaustive search")]
struct Args {
    /// Strategy for the searching agent: minimax or alpha-beta
    #[arg(long, default_value_t = Strategy::AlphaBeta)]
    strategy: Strategy,

    /// Number of games against a random opponent
    #[arg(long, default_value_t = 20)]
    games: u32,

    /// Seed for the random opponent
    #[arg(long, default_value_t = 3819201)]
    seed: u64,
}

fn main() {
    // `cargo test` runs this example and forwards harness flags such as --nocapture.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.kind() == ErrorKind::UnknownArgument => {
            eprintln!("ignoring arguments: {}", err.kind());
            Args::parse_from(["self_play"])
        }
        Err(err) => err.exit(),
    };

    let outcome = play_perfect_game(args.strategy);
    println!("Self-play result: {:?}", outcome);
    assert_eq!(outcome, GameOutcome::Draw);

    compare_strategies();

    let (wins, draws, losses) = play_against_random(args.strategy, args.games, args.seed);
    println!(
        "Against random play ({} games): {} wins, {} draws, {} losses",
        args.games, wins, draws, losses
    );
    assert_eq!(losses, 0);
}

/// Both sides search; the game must end in a draw.
fn play_perfect_game(strategy: Strategy) -> GameOutcome {
    let mut x = Agent::builder(Mark::X).with_strategy(strategy).build();
    let mut o = Agent::builder(Mark::O).with_strategy(strategy).build();
    let mut game = Game::new();

    while !game.status().is_terminal() {
        let agent = match game.to_move() {
            Mark::X => &mut x,
            Mark::O => &mut o,
        };
        let (best_move, nodes) = agent.get_move(game.board());
        let Some(index) = best_move else {
            break;
        };
        println!("{} plays {} after {} nodes", game.to_move(), index, nodes);
        if let Err(err) = game.play(index) {
            eprintln!("rejected move {}: {}", index, err);
            break;
        }
        println!("{}\n", game.board());
    }

    game.status()
}

/// Prints the node counts of both strategies for the opening move.
fn compare_strategies() {
    let game = Game::new();
    let mut agent = Agent::new(Mark::X);
    for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
        let (best_move, nodes) = select_move(game.board(), &mut agent, strategy);
        println!("{:>10}: move {:?}, {} nodes", strategy, best_move, nodes);
    }
}

fn play_against_random(strategy: Strategy, games: u32, seed: u64) -> (u32, u32, u32) {
    let mut player = RandomPlayer::new(StandardRandomGenerator::from_seed(seed));
    let (mut wins, mut draws, mut losses) = (0, 0, 0);

    for round in 0..games {
        let agent_mark = if round % 2 == 0 { Mark::X } else { Mark::O };
        let mut agent = Agent::builder(agent_mark).with_strategy(strategy).build();
        let mut game = Game::new();

        while !game.status().is_terminal() {
            let next = if game.to_move() == agent_mark {
                agent.get_move(game.board()).0
            } else {
                player.choose_move(game.board())
            };
            let Some(index) = next else {
                break;
            };
            if game.play(index).is_err() {
                break;
            }
        }

        match game.status() {
            GameOutcome::Won(mark) if mark == agent_mark => wins += 1,
            GameOutcome::Won(_) => losses += 1,
            _ => draws += 1,
        }
    }

    (wins, draws, losses)
}
