use docopt::Docopt;
use itertools::Itertools;
use labyrinth::{
    automata,
    cave::Cave,
    cells::Point,
    generators,
    grids::Grid,
    pathing,
    serialization,
    settings::{self, CaveSettings, MazeSettings},
};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_derive::Deserialize;
use std::{
    fs::File,
    io::prelude::*,
};

const USAGE: &str = "Labyrinth

Usage:
    labyrinth_driver -h | --help
    labyrinth_driver maze [--rows=<r>] [--cols=<c>] [--seed=<s>] [--out=<path>]
    labyrinth_driver cave [--rows=<r>] [--cols=<c>] [--live-chance=<p>] [--born-limit=<b>] [--death-limit=<d>] [--generations=<n>] [--seed=<s>] [--out=<path>]
    labyrinth_driver step <file> [--born-limit=<b>] [--death-limit=<d>] [--out=<path>]
    labyrinth_driver solve <file> --from-x=<x> --from-y=<y> [--to-x=<x2> --to-y=<y2>] [--out=<path>]

Options:
    -h --help              Show this screen.
    --rows=<r>             Grid row count, 1 to 50 [default: 20].
    --cols=<c>             Grid column count, 1 to 50 [default: 20].
    --seed=<s>             Seed for the random generator. A random seed is picked and logged if not given.
    --live-chance=<p>      Percent chance a cave cell starts blocked [default: 45].
    --born-limit=<b>       An open cave cell becomes blocked with more than b blocked neighbours [default: 3].
    --death-limit=<d>      A blocked cave cell opens with fewer than d blocked neighbours [default: 3].
    --generations=<n>      Number of automaton generations run on a new cave [default: 40].
    --from-x=<x>           Row of the path start.
    --from-y=<y>           Column of the path start.
    --to-x=<x2>            Row of the path end. The end is the point furthest from the start if not given.
    --to-y=<y2>            Column of the path end.
    --out=<path>           Output file path. Standard output if not given.
";

#[derive(Debug, Deserialize)]
struct LabyrinthArgs {
    cmd_maze: bool,
    cmd_cave: bool,
    cmd_step: bool,
    cmd_solve: bool,
    arg_file: String,
    flag_rows: usize,
    flag_cols: usize,
    flag_seed: Option<u64>,
    flag_live_chance: u8,
    flag_born_limit: u8,
    flag_death_limit: u8,
    flag_generations: usize,
    flag_from_x: Option<usize>,
    flag_from_y: Option<usize>,
    flag_to_x: Option<usize>,
    flag_to_y: Option<usize>,
    flag_out: String,
}

mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Labyrinth(::labyrinth::errors::Error, ::labyrinth::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;
use error_chain::bail;

fn main() -> Result<()> {
    env_logger::init();

    let args: LabyrinthArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let text = if args.cmd_maze {
        let settings = MazeSettings::new(args.flag_rows, args.flag_cols);
        generators::generate_maze(&settings, &mut seeded_rng(&args))?.to_string()
    } else if args.cmd_cave {
        let settings = CaveSettings::new(args.flag_rows, args.flag_cols, args.flag_live_chance)
            .with_limits(args.flag_born_limit, args.flag_death_limit)
            .with_generations(args.flag_generations);
        automata::generate_cave(&settings, &mut seeded_rng(&args))?.to_string()
    } else if args.cmd_step {
        step_cave_file(&args)?
    } else if args.cmd_solve {
        solve_grid_file(&args)?
    } else {
        bail!("No command given, see --help");
    };

    if args.flag_out.is_empty() {
        print!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_out)
            .chain_err(|| format!("Failed to write output file {}", args.flag_out))?;
    }

    Ok(())
}

fn seeded_rng(args: &LabyrinthArgs) -> ChaCha8Rng {
    let seed = args.flag_seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("Generating with seed {}", seed);
    ChaCha8Rng::seed_from_u64(seed)
}

fn step_cave_file(args: &LabyrinthArgs) -> Result<String> {
    let mut cave: Cave = serialization::load(&args.arg_file)?;
    let rule = settings::EvolutionRule::new(args.flag_born_limit, args.flag_death_limit);
    let step = automata::step_generation(&mut cave, &rule);
    info!("Blocked cells {} -> {}", step.before.blocked_count(), step.after.blocked_count());
    Ok(step.after.to_string())
}

fn solve_grid_file(args: &LabyrinthArgs) -> Result<String> {
    let grid: Grid = serialization::load(&args.arg_file)?;
    let from = match (args.flag_from_x, args.flag_from_y) {
        (Some(x), Some(y)) => Point::new(x, y),
        _ => return Err("A path start needs both --from-x and --from-y".into()),
    };

    let to = match (args.flag_to_x, args.flag_to_y) {
        (Some(x), Some(y)) => Point::new(x, y),
        _ => {
            let distances = pathing::Distances::for_grid(&grid, from)?;
            let furthest = distances.furthest_points_on_grid();
            info!("No path end given, using the first of {} points at distance {}",
                  furthest.len(),
                  distances.max());
            furthest.first().cloned().unwrap_or(from)
        }
    };

    info!("Solving {} from {} to {}", grid.kind(), from, to);
    let path = pathing::solve(&grid, from, to)?;
    Ok(format!("{}\n", path.iter().join("\n")))
}

fn write_text_to_file(data: &str, file_name: &str) -> Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
