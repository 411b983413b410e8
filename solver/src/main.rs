use clap::Parser;
use itertools::Itertools;
use kaleido::session::scramble;
use kaleido::{Board, Move, Solver};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(name = "solver", version, about = "Scramble the standard board and find a shortest way back")]
struct Cli {
    /// Moves to start from, e.g. "0cw 4ccw"; overrides --scramble
    #[arg(long)]
    moves: Option<String>,
    /// Number of random moves to scramble with
    #[arg(long, default_value_t = 3)]
    scramble: usize,
    #[arg(long)]
    seed: Option<u64>,
    /// Most states the search may visit
    #[arg(long, default_value_t = kaleido::solver::DEFAULT_STATE_LIMIT)]
    limit: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let board = Board::standard();

    let moves = match cli.moves {
        Some(text) => text.split_whitespace().map(str::parse::<Move>).collect::<Result<Vec<_>, _>>()?,
        None => {
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            scramble(board, cli.scramble, &mut rng)
        }
    };
    info!("starting from {} moves", moves.len());

    let pieces = board.apply_moves(&board.solved_pieces(), &moves);
    println!("scramble: {}", moves.iter().join(" "));
    print!("{}", board.arrangement(&pieces));

    match Solver::from(board).with_limit(cli.limit).solve(&pieces) {
        Ok(solution) if solution.is_empty() => println!("already solved"),
        Ok(solution) => println!("solution ({} moves): {}", solution.len(), solution.iter().join(" ")),
        Err(failure) => println!("no solution: {failure}"),
    }

    Ok(())
}
