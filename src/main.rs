use std::process;

use clap::{App, Arg};

use tilt_solver::config::SolverConfig;
use tilt_solver::path::Path;
use tilt_solver::solver::Outcome;
use tilt_solver::{walkthrough, LoadBoard, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("tilt-solver")
        .version("0.1")
        .arg(
            Arg::with_name("max-levels")
                .short("-l")
                .long("--max-levels")
                .takes_value(true)
                .help("Number of breadth-first levels to memorize"),
        ).arg(
            Arg::with_name("extra-depth")
                .short("-e")
                .long("--extra-depth")
                .takes_value(true)
                .help("Additional depth-first levels once the tree is full"),
        ).arg(
            Arg::with_name("walkthrough")
                .short("-w")
                .long("--walkthrough")
                .takes_value(true)
                .help("Replay a path of arrow symbols instead of solving"),
        ).arg(
            Arg::with_name("stats")
                .short("-s")
                .long("--stats")
                .help("Print search statistics"),
        ).arg(Arg::with_name("file").required(true))
        .get_matches();

    let mut config = SolverConfig::default();
    if let Some(levels) = matches.value_of("max-levels") {
        config.max_levels = levels.parse().unwrap_or_else(|_| {
            println!("--max-levels must be a number");
            process::exit(1);
        });
    }
    if let Some(depth) = matches.value_of("extra-depth") {
        config.extra_depth = depth.parse().unwrap_or_else(|_| {
            println!("--extra-depth must be a number");
            process::exit(1);
        });
    }

    let file = matches.value_of("file").unwrap();
    let board = file.load_board().unwrap_or_else(|err| {
        println!("Can't load board {}: {}", file, err);
        process::exit(1);
    });

    if let Some(arrows) = matches.value_of("walkthrough") {
        let path: Path = arrows.parse().unwrap_or_else(|err| {
            println!("ERROR: {}", err);
            process::exit(1);
        });
        let states = walkthrough::replay(&board, &path);
        print!("{}", board.format(&states[0]));
        for (dir, state) in path.iter().zip(&states[1..]) {
            println!("{}", dir);
            print!("{}", board.format(state));
        }
        return;
    }

    println!("Solving {}...", file);
    let result = board.solve(&config);
    if matches.is_present("stats") {
        println!("{}", result.stats);
    }
    match result.outcome {
        Outcome::Solved(solution) => {
            println!("Found path in {} steps:", solution.len());
            println!("{}", solution);
        }
        Outcome::DeadEnd(depth) => {
            println!("No moves possible anymore after {} steps.", depth);
        }
        Outcome::NotFound => {
            println!(
                "No path found within {} steps.",
                config.max_levels + config.extra_depth
            );
        }
    }
}
