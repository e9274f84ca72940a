use crate::application::EngineError;
use crate::domain::{LifeRng, Universe};
use crate::rendering;

/// Probability that seeding leaves a cell alive
const SEED_ALIVE_PROBABILITY: f64 = 0.25;

/// Universes at least this large step on the rayon path
const PARALLEL_THRESHOLD: usize = 128;

/// Run parameters, fixed for the engine's lifetime.
/// Values arrive unvalidated from the command line; [`Engine::new`]
/// rejects anything non-positive.
#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    /// Side length of the square universe
    pub size: i64,
    /// Generation cap, counted from 1 at seeding
    pub max_generations: i64,
}

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Generation cap reached, the run completed normally
    GenerationCap,
    /// Every cell is dead
    Extinction,
    /// The universe is cell-for-cell identical to the previous generation
    Stable,
}

/// Engine owns the universe and advances it by discrete generations.
///
/// State machine: unseeded (generation 0) -> seeded (generation 1) ->
/// stepping -> terminal. Stepping an unseeded engine is an error; once a
/// terminal condition holds the engine places no hard lock, stopping is
/// the driver's job.
pub struct Engine {
    size: usize,
    max_generations: u64,
    universe: Universe,
    previous: Option<Universe>,
    generation: u64,
    rng: LifeRng,
}

impl Engine {
    /// Allocate an all-dead universe for the given configuration.
    /// Fails with `InvalidConfig` if the size or the generation cap is
    /// not positive.
    pub fn new(config: EngineConfig, rng: LifeRng) -> Result<Self, EngineError> {
        if config.size <= 0 {
            return Err(EngineError::InvalidConfig(format!(
                "universe size must be positive, got {}",
                config.size
            )));
        }
        if config.max_generations <= 0 {
            return Err(EngineError::InvalidConfig(format!(
                "generation cap must be positive, got {}",
                config.max_generations
            )));
        }

        let size = config.size as usize;
        Ok(Self {
            size,
            max_generations: config.max_generations as u64,
            universe: Universe::new(size),
            previous: None,
            generation: 0,
            rng,
        })
    }

    /// Populate the universe with a fresh random pattern: every cell is
    /// alive independently with probability 0.25. This is generation 1.
    /// Calling it again restarts the run with a new pattern.
    pub fn seed_random(&mut self) {
        self.universe = Universe::new(self.size).randomize(&mut self.rng, SEED_ALIVE_PROBABILITY);
        self.previous = None;
        self.generation = 1;
    }

    /// Advance one generation: snapshot the universe, recount neighbors,
    /// apply the rule to every cell simultaneously, bump the counter.
    /// Fails with `InvalidState` on an unseeded engine.
    pub fn step(&mut self) -> Result<(), EngineError> {
        if self.generation == 0 {
            return Err(EngineError::InvalidState("step called before seeding"));
        }

        self.previous = Some(self.universe.clone());
        self.universe = if self.size >= PARALLEL_THRESHOLD {
            self.universe.advance_parallel()
        } else {
            self.universe.advance()
        };
        self.generation += 1;
        Ok(())
    }

    /// True when any terminal condition holds
    pub fn is_terminal(&self) -> bool {
        self.termination().is_some()
    }

    /// Which terminal condition holds, if any: the generation cap, total
    /// extinction, or a universe identical to the previous generation.
    /// The repeat check only detects single-step fixed points (a period-2
    /// oscillator keeps running) and is skipped before the first step,
    /// when no previous generation exists.
    pub fn termination(&self) -> Option<Termination> {
        if self.generation >= self.max_generations {
            return Some(Termination::GenerationCap);
        }
        if self.universe.is_extinct() {
            return Some(Termination::Extinction);
        }
        if self.previous.as_ref() == Some(&self.universe) {
            return Some(Termination::Stable);
        }
        None
    }

    /// Lazy textual view of the current universe, one string per row.
    /// Finite and restartable; the engine's sole output contract.
    pub fn render_rows(&self) -> impl Iterator<Item = String> + '_ {
        rendering::rows(&self.universe)
    }

    /// Current generation number; 0 means the engine is not seeded yet
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only view of the current universe
    pub const fn universe(&self) -> &Universe {
        &self.universe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    fn engine(size: i64, max_generations: i64) -> Engine {
        Engine::new(
            EngineConfig {
                size,
                max_generations,
            },
            LifeRng::seeded(42),
        )
        .unwrap()
    }

    /// Replace the engine's universe with a hand-built pattern,
    /// keeping it in the seeded state.
    fn force_pattern(engine: &mut Engine, cells: &[(usize, usize)]) {
        let mut universe = Universe::new(engine.size);
        for &(x, y) in cells {
            universe.set(x, y, Cell::Alive);
        }
        engine.universe = universe;
        engine.previous = None;
        engine.generation = 1;
    }

    #[test]
    fn test_rejects_non_positive_size() {
        for size in [0, -1, -10] {
            let result = Engine::new(
                EngineConfig {
                    size,
                    max_generations: 100,
                },
                LifeRng::seeded(0),
            );
            assert!(matches!(result, Err(EngineError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_rejects_non_positive_generation_cap() {
        for max_generations in [0, -5] {
            let result = Engine::new(
                EngineConfig {
                    size: 10,
                    max_generations,
                },
                LifeRng::seeded(0),
            );
            assert!(matches!(result, Err(EngineError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_step_before_seed_is_invalid_state() {
        let mut engine = engine(10, 100);

        assert_eq!(
            engine.step(),
            Err(EngineError::InvalidState("step called before seeding"))
        );
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_generation_counter_is_one_after_seed_and_k_plus_one_after_k_steps() {
        let mut engine = engine(10, 100);

        engine.seed_random();
        assert_eq!(engine.generation(), 1);

        for step in 1..=5 {
            engine.step().unwrap();
            assert_eq!(engine.generation(), step + 1);
        }
    }

    #[test]
    fn test_same_seed_reproduces_first_generation() {
        let mut a = engine(10, 100);
        let mut b = engine(10, 100);

        a.seed_random();
        b.seed_random();
        assert_eq!(a.universe(), b.universe());
    }

    #[test]
    fn test_reseeding_restarts_the_run() {
        let mut engine = engine(10, 100);

        engine.seed_random();
        engine.step().unwrap();
        engine.step().unwrap();
        assert_eq!(engine.generation(), 3);

        engine.seed_random();
        assert_eq!(engine.generation(), 1);
        assert!(engine.previous.is_none());
    }

    #[test]
    fn test_generation_cap_of_one_is_terminal_without_stepping() {
        let mut engine = engine(10, 1);

        engine.seed_random();
        assert!(engine.is_terminal());
        assert_eq!(engine.termination(), Some(Termination::GenerationCap));
    }

    #[test]
    fn test_lone_cell_goes_extinct_after_one_step() {
        let mut engine = engine(3, 100);
        force_pattern(&mut engine, &[(1, 1)]);
        assert!(!engine.is_terminal());

        engine.step().unwrap();
        assert!(engine.universe().is_extinct());
        assert_eq!(engine.termination(), Some(Termination::Extinction));
    }

    #[test]
    fn test_extinction_is_idempotent() {
        let mut engine = engine(3, 100);
        force_pattern(&mut engine, &[(1, 1)]);

        for _ in 0..4 {
            engine.step().unwrap();
        }
        assert!(engine.universe().is_extinct());
        assert_eq!(engine.termination(), Some(Termination::Extinction));
    }

    #[test]
    fn test_block_still_life_is_stable_after_one_step() {
        let mut engine = engine(4, 100);
        force_pattern(&mut engine, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        // No previous generation yet, so the repeat check is skipped
        assert!(!engine.is_terminal());

        engine.step().unwrap();
        assert_eq!(engine.universe().population(), 4);
        assert_eq!(engine.termination(), Some(Termination::Stable));
    }

    #[test]
    fn test_blinker_is_not_reported_stable() {
        // Period-2 oscillators never match the immediately previous
        // generation, so the single-step repeat check lets them run
        let mut engine = engine(5, 100);
        force_pattern(&mut engine, &[(2, 1), (2, 2), (2, 3)]);

        engine.step().unwrap();
        assert_eq!(engine.termination(), None);
        engine.step().unwrap();
        assert_eq!(engine.termination(), None);
    }

    #[test]
    fn test_no_lock_after_terminal() {
        let mut engine = engine(4, 100);
        force_pattern(&mut engine, &[(1, 1), (2, 1), (1, 2), (2, 2)]);

        engine.step().unwrap();
        assert!(engine.is_terminal());
        // Terminal does not forbid further steps; stopping is the
        // driver's responsibility
        assert_eq!(engine.step(), Ok(()));
        assert_eq!(engine.generation(), 3);
    }

    #[test]
    fn test_render_rows_is_restartable() {
        let mut engine = engine(4, 100);
        engine.seed_random();

        let first: Vec<String> = engine.render_rows().collect();
        let second: Vec<String> = engine.render_rows().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }
}
