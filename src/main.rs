use clap::Parser;
use crossterm::style::Stylize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use slide_puzzle::{Puzzle, PuzzleError, SearchLimits};

#[derive(Parser, Debug)]
#[command(name = "slide-puzzle")]
#[command(author, version, about = "Scramble a sliding puzzle and solve it optimally")]
struct Args {
    /// Board side length (1-4)
    #[arg(short, long, default_value = "4")]
    side: usize,

    /// Scramble distance in moves from the solved board
    #[arg(short, long, default_value = "14")]
    distance: usize,

    /// Random seed for a reproducible scramble
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after expanding this many search nodes
    #[arg(short, long)]
    max_expansions: Option<usize>,

    /// Scramble with a random solvable permutation instead of a fixed-distance walk
    #[arg(long)]
    permutation: bool,

    /// Only print the move list
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), PuzzleError> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let limits = SearchLimits {
        max_expansions: args.max_expansions,
    };

    let mut puzzle = Puzzle::new(args.side)?;
    if !args.quiet {
        println!("{}\n{}", "Initial Puzzle:".bold(), puzzle);
    }

    if args.permutation {
        puzzle.shuffle_permutation(&mut rng);
    } else {
        puzzle.shuffle(args.distance, &mut rng)?;
    }
    let mut original = puzzle.clone();

    if !args.quiet {
        println!("{}\n{}", "Shuffled Puzzle:".bold(), puzzle);
    }

    let output = puzzle.solve_within(limits)?;
    println!(
        "Found optimal solution with {} moves",
        output.len().to_string().green().bold()
    );

    for item in output {
        original.apply_move(item);
        if args.quiet {
            print!("{} ", item);
        } else {
            println!("{}\n{}", item.to_string().cyan(), original);
        }
    }
    if args.quiet {
        println!();
    }

    Ok(())
}
