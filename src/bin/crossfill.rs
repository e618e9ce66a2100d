use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crossfill::solver::stats::render_stats_table;
use crossfill::{render, Crossword, Solver};

/// Fill a crossword grid from a word list.
#[derive(Debug, Parser)]
#[command(name = "crossfill", version)]
struct Args {
    /// Grid structure file: `_` marks an open cell, anything else is blocked.
    structure: PathBuf,

    /// Word list, one word per line.
    words: PathBuf,

    /// Also write the rendered grid to this file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the solution as JSON instead of a rendered grid.
    #[arg(long)]
    json: bool,

    /// Print search statistics after solving.
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            println!("No solution.");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> crossfill::Result<bool> {
    let puzzle = Crossword::from_files(&args.structure, &args.words)?;
    let mut solver = Solver::new(&puzzle);

    let solved = match solver.solve() {
        Some(assignment) => {
            if args.json {
                println!("{}", render::to_json(&assignment)?);
            } else {
                print!("{}", render::render_grid(&puzzle, &assignment));
            }
            if let Some(path) = &args.output {
                render::write_grid(&puzzle, &assignment, path)?;
            }
            true
        }
        None => false,
    };

    if args.stats {
        println!("{}", render_stats_table(solver.stats()));
    }
    Ok(solved)
}
