//! Cave generation with a cellular automaton: seed a grid with random blocked cells, then
//! evolve it with a birth/death rule over the Moore neighbourhood.

use log::debug;
use rand::Rng;

use crate::cave::Cave;
use crate::errors::*;
use crate::grid_dimensions::GridDimensions;
use crate::grid_traits::WalledGrid;
use crate::settings::{CaveSettings, EvolutionRule, MAX_LIVE_CHANCE};

/// A cave before and after a single generation.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct GenerationStep {
    pub before: Cave,
    pub after: Cave,
}

/// Seed a cave and run `settings.generations` generations of the automaton over it.
///
/// Fails with `InvalidDimensions` if the settings are out of range.
pub fn generate_cave<R: Rng + ?Sized>(settings: &CaveSettings, rng: &mut R) -> Result<Cave> {
    let dimensions = settings.dimensions()?;
    let rule = settings.rule();
    let mut cave = seed_cave(dimensions, settings.live_chance(), rng);

    for generation in 0..settings.generations {
        let next = next_generation(&cave, &rule);
        if next == cave {
            debug!("Cave {}x{} stable after {} generations",
                   dimensions.rows().0,
                   dimensions.columns().0,
                   generation);
            break;
        }
        cave = next;
    }

    Ok(cave)
}

/// The first generation: each cell is independently blocked with a `live_chance` percent
/// probability.
///
/// The draw is uniform over 1..=100 so a chance of 0 never blocks and 100 always does.
pub fn seed_cave<R: Rng + ?Sized>(dimensions: GridDimensions, live_chance: u8, rng: &mut R) -> Cave {
    let live_chance = live_chance.min(MAX_LIVE_CHANCE);
    let mut cave = Cave::open(dimensions);
    for point in dimensions.iter() {
        let draw: u8 = rng.gen_range(1..=MAX_LIVE_CHANCE);
        cave.set_blocked(point, draw <= live_chance);
    }
    cave
}

/// Apply the rule to every cell at once, reading only from `cave` and writing to a fresh grid.
pub fn next_generation(cave: &Cave, rule: &EvolutionRule) -> Cave {
    let mut next = cave.clone();
    for point in cave.dimensions().iter() {
        let alive = cave.is_blocked(point);
        next.set_blocked(point, rule.next_state(alive, cave.blocked_neighbours(point)));
    }
    next
}

/// Advance the caller's cave by one generation in place, handing back both the grid as it was
/// and as it now is.
pub fn step_generation(cave: &mut Cave, rule: &EvolutionRule) -> GenerationStep {
    let after = next_generation(cave, rule);
    let before = std::mem::replace(cave, after.clone());
    GenerationStep { before, after }
}

#[cfg(test)]
mod tests {
    use quickcheck::{quickcheck, TestResult};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::cells::Point;
    use crate::units::{ColumnsCount, RowsCount};

    fn dims(rows: usize, cols: usize) -> GridDimensions {
        GridDimensions::new(RowsCount(rows), ColumnsCount(cols)).expect("valid dimensions")
    }

    fn seeded(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    fn blocked_points(cave: &Cave) -> Vec<Point> {
        cave.dimensions().iter().filter(|p| cave.is_blocked(*p)).collect()
    }

    #[test]
    fn zero_live_chance_without_evolution_is_open() {
        let seeded_only = seed_cave(dims(5, 5), 0, &mut seeded(5));
        assert_eq!(seeded_only.cells(), &[false; 25][..]);

        let settings = CaveSettings::new(5, 5, 0).with_generations(0);
        let generated = generate_cave(&settings, &mut seeded(5)).unwrap();
        assert_eq!(generated, Cave::open(dims(5, 5)));
    }

    #[test]
    fn full_live_chance_is_blocked_and_stays_blocked() {
        let settings = CaveSettings::new(6, 9, 100);
        let cave = generate_cave(&settings, &mut seeded(2)).unwrap();
        assert_eq!(cave.blocked_count(), 54);
    }

    #[test]
    fn invalid_settings_fail() {
        let err = generate_cave(&CaveSettings::new(0, 5, 50), &mut seeded(1)).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidDimensions(..)));
    }

    #[test]
    fn quickcheck_cave_size_matches_dimensions() {
        fn p(rows: u8, cols: u8, chance: u8, seed: u64) -> TestResult {
            let rows = rows as usize % 50 + 1;
            let cols = cols as usize % 50 + 1;
            let settings = CaveSettings::new(rows, cols, chance % 101).with_generations(3);
            match generate_cave(&settings, &mut seeded(seed)) {
                Ok(cave) => TestResult::from_bool(cave.cells().len() == rows * cols &&
                                                  cave.validate().is_ok()),
                Err(_) => TestResult::failed(),
            }
        }
        quickcheck(p as fn(u8, u8, u8, u64) -> TestResult)
    }

    #[test]
    fn evolution_is_synchronous() {
        // Corners see 5 blocked out-of-grid neighbours and are born. Edge cells see 3, which
        // would become 4 if a freshly born corner were counted in the same generation.
        let open = Cave::open(dims(3, 3));
        let next = next_generation(&open, &EvolutionRule::default());
        assert_eq!(blocked_points(&next),
                   vec![Point::new(0, 0), Point::new(0, 2), Point::new(2, 0), Point::new(2, 2)]);
    }

    #[test]
    fn isolated_cells_die() {
        let mut cave = Cave::open(dims(5, 5));
        cave.set_blocked(Point::new(2, 2), true);
        let next = next_generation(&cave, &EvolutionRule::new(7, 3));
        assert_eq!(next.blocked_count(), 0);
    }

    #[test]
    fn crowded_cells_survive() {
        let mut cave = Cave::open(dims(3, 3));
        for p in &[(0, 0), (0, 1), (1, 0), (1, 1)] {
            cave.set_blocked(Point::from(*p), true);
        }
        // (1, 1) is interior: exactly 3 alive neighbours
        let next = next_generation(&cave, &EvolutionRule::new(7, 3));
        assert!(next.is_blocked(Point::new(1, 1)));
        let next = next_generation(&cave, &EvolutionRule::new(7, 4));
        assert!(!next.is_blocked(Point::new(1, 1)));
    }

    #[test]
    fn step_generation_mutates_and_reports_both_states() {
        let rule = EvolutionRule::default();
        let original = seed_cave(dims(8, 11), 45, &mut seeded(8));
        let mut cave = original.clone();

        let step = step_generation(&mut cave, &rule);
        assert_eq!(step.before, original);
        assert_eq!(step.after, next_generation(&original, &rule));
        assert_eq!(cave, step.after);
    }

    #[test]
    fn generation_matches_stepping_by_hand() {
        let settings = CaveSettings::new(12, 17, 40).with_limits(4, 3).with_generations(40);
        let generated = generate_cave(&settings, &mut seeded(21)).unwrap();

        let mut cave = seed_cave(dims(12, 17), 40, &mut seeded(21));
        for _ in 0..40 {
            let _ = step_generation(&mut cave, &settings.rule());
        }
        assert_eq!(generated, cave);
    }

    #[test]
    fn same_seed_same_cave() {
        let settings = CaveSettings::new(30, 30, 45);
        let a = generate_cave(&settings, &mut seeded(4)).unwrap();
        let b = generate_cave(&settings, &mut seeded(4)).unwrap();
        assert_eq!(a, b);
    }
}
