//! Invariants checked over seeded random caves.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wumpus_core::{
    Action, AgentStatus, Cave, CaveObject, CellBelief, GameConfig, Position,
};
use wumpus_solver::{Solution, Solver};

const SEEDS: u64 = 200;

/// Random cave with a harmless bottom-left entry and its neighbours kept
/// free of hazards half of the time.
fn random_cave(seed: u64) -> (Cave, Position) {
    let mut rng = StdRng::seed_from_u64(seed);
    let size = rng.gen_range(4..=8);
    let entry = Position::bottom_left(size);
    let mut builder = Cave::builder(size);

    let gentle_start = rng.gen_bool(0.5);
    let protected = |position: Position| {
        position == entry || (gentle_start && position.manhattan(entry) == 1)
    };

    for position in Position::all(size) {
        if !protected(position) && rng.gen_bool(0.12) {
            builder = builder.pit(position);
        }
    }
    for _ in 0..rng.gen_range(1..=2) {
        let position = Position::new(
            rng.gen_range(0..size as i32),
            rng.gen_range(0..size as i32),
        );
        if !protected(position) {
            builder = builder.wumpus(position);
        }
    }
    for _ in 0..rng.gen_range(1..=2) {
        let position = Position::new(
            rng.gen_range(0..size as i32),
            rng.gen_range(0..size as i32),
        );
        builder = builder.gold(position);
    }
    (builder.build(), entry)
}

fn solve(seed: u64, config: GameConfig) -> (Cave, Solution) {
    let (cave, entry) = random_cave(seed);
    let solution = Solver::new(config)
        .solve(cave.clone(), entry)
        .unwrap_or_else(|error| panic!("seed {seed}: {error}"));
    (cave, solution)
}

#[test]
fn safe_and_dangerous_beliefs_are_sound() {
    for seed in 0..SEEDS {
        let (_, solution) = solve(seed, GameConfig::new());
        let cave = &solution.cave;
        for (position, belief) in solution.beliefs.iter() {
            let deadly = cave.exists(CaveObject::Pit, position) || cave.is_wumpus_alive(position);
            match belief {
                CellBelief::Safe | CellBelief::Visited => {
                    assert!(!deadly, "seed {seed}: {position} believed safe")
                }
                CellBelief::ConfirmedDangerous => {
                    assert!(deadly, "seed {seed}: {position} believed deadly")
                }
                _ => {}
            }
        }
    }
}

#[test]
fn transcripts_are_consistent() {
    for seed in 0..SEEDS {
        let (original, solution) = solve(seed, GameConfig::new());
        let transcript = &solution.transcript;

        assert!(transcript.count(Action::Shoot) <= 1, "seed {seed}");
        assert_eq!(transcript.replay_score(), solution.score, "seed {seed}");
        assert!(solution.outcome.is_terminal(), "seed {seed}");
        assert_eq!(solution.agent.status, solution.outcome);

        let last = transcript.last().expect("transcript is never empty").action;
        assert!(last.is_terminal(), "seed {seed}");
        match solution.outcome {
            AgentStatus::Won => {
                assert_eq!(last, Action::KillAllWumpusAndGrabAllFood, "seed {seed}");
                assert_eq!(solution.cave.remaining_gold(), 0, "seed {seed}");
                assert_eq!(
                    solution.agent.gold_collected,
                    original.total_gold(),
                    "seed {seed}"
                );
            }
            AgentStatus::Stuck => {
                assert_eq!(last, Action::ClimbOutOfTheCave, "seed {seed}")
            }
            AgentStatus::Dead(_) => {
                assert!(
                    matches!(last, Action::FallIntoPit | Action::BeEatenByWumpus),
                    "seed {seed}"
                );
                assert_eq!(
                    solution.beliefs.count(CellBelief::Safe),
                    0,
                    "seed {seed}: died with safe cells left"
                );
            }
            AgentStatus::Running => unreachable!(),
        }

        for step in transcript.steps() {
            assert!(
                step.cell.in_bounds(original.size()),
                "seed {seed}: {} outside the cave",
                step.cell
            );
        }
    }
}

#[test]
fn identical_caves_give_identical_transcripts() {
    for seed in 0..SEEDS / 4 {
        let (_, first) = solve(seed, GameConfig::new());
        let (_, second) = solve(seed, GameConfig::new());
        assert_eq!(
            hex::encode(first.transcript.digest()),
            hex::encode(second.transcript.digest()),
            "seed {seed}"
        );
        assert_eq!(first, second);
    }
}

#[test]
fn cautious_agents_never_die() {
    for seed in 0..SEEDS {
        let (_, solution) = solve(seed, GameConfig::cautious());
        assert!(
            !matches!(solution.outcome, AgentStatus::Dead(_)),
            "seed {seed}: cautious agent died"
        );
        assert_eq!(solution.agent.position, solution.entry, "seed {seed}");
    }
}
