use wumpus_core::{
    Action, AgentStatus, Cave, CellBelief, DeathCause, GameConfig, Position, Transcript,
};
use wumpus_solver::{Solution, Solver};

/// Builds a cave from rows of `-`, `P`, `W`, `G`, `A` characters.
fn cave(rows: &[&str]) -> (Cave, Position) {
    let size = rows.len();
    let mut builder = Cave::builder(size);
    let mut entry = Position::bottom_left(size);
    for (row, line) in rows.iter().enumerate() {
        for (col, glyph) in line.chars().enumerate() {
            let position = Position::new(row as i32, col as i32);
            builder = match glyph {
                'P' => builder.pit(position),
                'W' => builder.wumpus(position),
                'G' => builder.gold(position),
                'A' => {
                    entry = position;
                    builder
                }
                _ => builder,
            };
        }
    }
    (builder.build(), entry)
}

fn solve(rows: &[&str], config: GameConfig) -> Solution {
    let (cave, entry) = cave(rows);
    Solver::new(config)
        .solve(cave, entry)
        .expect("solver should finish")
}

fn physical(transcript: &Transcript) -> Vec<Action> {
    transcript
        .actions()
        .filter(|action| !action.is_informational())
        .collect()
}

/// Open cave: walk up to the gold, turn around, walk home and climb out.
#[test]
fn open_cave_round_trip() {
    let solution = solve(&["G---", "----", "----", "A---"], GameConfig::new());

    assert_eq!(
        physical(&solution.transcript),
        vec![
            Action::MoveForward,
            Action::MoveForward,
            Action::MoveForward,
            Action::GrabGold,
            Action::TurnDown,
            Action::MoveForward,
            Action::MoveForward,
            Action::MoveForward,
            Action::ClimbOutOfTheCave,
            Action::KillAllWumpusAndGrabAllFood,
        ]
    );
    assert_eq!(solution.outcome, AgentStatus::Won);
    assert_eq!(solution.score, 994);
    assert_eq!(solution.transcript.replay_score(), solution.score);
    assert_eq!(solution.cave.remaining_gold(), 0);
    assert_eq!(
        solution.beliefs.get(Position::new(0, 0)),
        Some(CellBelief::Visited)
    );
}

/// Stench and breeze at the entry: shoot up, then walk through the dead
/// wumpus's cell.
#[test]
fn shooting_clears_the_way() {
    let solution = solve(&["G---", "----", "W---", "AP--"], GameConfig::new());

    assert_eq!(
        physical(&solution.transcript),
        vec![
            Action::Shoot,
            Action::KillWumpus,
            Action::MoveForward,
            Action::MoveForward,
            Action::MoveForward,
            Action::GrabGold,
            Action::TurnDown,
            Action::MoveForward,
            Action::MoveForward,
            Action::MoveForward,
            Action::ClimbOutOfTheCave,
            Action::KillAllWumpusAndGrabAllFood,
        ]
    );
    assert_eq!(solution.score, 1484);
    assert!(!solution.cave.is_wumpus_alive(Position::new(2, 0)));

    let steps = solution.transcript.steps();
    assert_eq!(steps[0].action, Action::PerceiveBreeze);
    assert_eq!(steps[1].action, Action::PerceiveStench);
    let kill = steps
        .iter()
        .find(|step| step.action == Action::KillWumpus)
        .expect("wumpus should be killed");
    assert_eq!(kill.cell, Position::new(2, 0));

    // Standing in the dead wumpus's cell leaves a single pit candidate.
    assert!(
        steps
            .iter()
            .any(|step| step.action == Action::InferPit && step.cell == Position::new(3, 1))
    );
    assert_eq!(
        solution.beliefs.get(Position::new(3, 1)),
        Some(CellBelief::ConfirmedDangerous)
    );
}

/// Stench at the entry with the wumpus to the right: the upward shot misses,
/// which leaves the right-hand cell as the only place the wumpus can be.
#[test]
fn missed_shot_pins_the_wumpus_by_elimination() {
    let solution = solve(&["---G", "----", "----", "AW--"], GameConfig::new());

    let actions = physical(&solution.transcript);
    assert_eq!(actions[..2], [Action::Shoot, Action::KillNoWumpus]);
    assert_eq!(actions.iter().filter(|&&action| action == Action::Shoot).count(), 1);
    assert!(!actions.contains(&Action::KillWumpus));

    let steps = solution.transcript.steps();
    let miss = steps
        .iter()
        .position(|step| step.action == Action::KillNoWumpus)
        .expect("arrow should miss");
    assert_eq!(steps[miss].cell, Position::new(3, 0));
    let detected = steps
        .iter()
        .position(|step| step.action == Action::DetectWumpus && step.cell == Position::new(3, 1))
        .expect("wumpus should be located");
    assert!(detected > miss);

    assert_eq!(solution.outcome, AgentStatus::Won);
    assert_eq!(solution.score, 978);
    assert_eq!(solution.transcript.replay_score(), solution.score);
    assert!(solution.cave.is_wumpus_alive(Position::new(3, 1)));
    assert_eq!(
        solution.beliefs.get(Position::new(3, 1)),
        Some(CellBelief::ConfirmedDangerous)
    );
}

/// Two pits around the entry and nothing provably safe: the agent gambles on
/// the cheaper cell and falls.
#[test]
fn forced_gamble_can_end_in_a_pit() {
    let solution = solve(&["---G", "----", "P---", "AP--"], GameConfig::new());

    assert_eq!(
        physical(&solution.transcript),
        vec![Action::MoveForward, Action::FallIntoPit]
    );
    assert_eq!(solution.outcome, AgentStatus::Dead(DeathCause::Pit));
    assert_eq!(solution.score, -1001);
    assert_eq!(
        solution.transcript.last().map(|step| step.cell),
        Some(Position::new(2, 0))
    );
    assert_eq!(solution.beliefs.count(CellBelief::Safe), 0);
}

/// The same cave with risk disabled: climb out alive and empty-handed.
#[test]
fn cautious_agent_climbs_out_stuck() {
    let solution = solve(&["---G", "----", "P---", "AP--"], GameConfig::cautious());

    assert_eq!(
        physical(&solution.transcript),
        vec![Action::ClimbOutOfTheCave]
    );
    assert_eq!(solution.outcome, AgentStatus::Stuck);
    assert_eq!(solution.score, 0);
}

/// No gold at all: nothing to fetch, so the agent leaves immediately.
#[test]
fn empty_cave_is_won_at_once() {
    let solution = solve(&["---", "---", "A--"], GameConfig::new());

    assert_eq!(
        physical(&solution.transcript),
        vec![
            Action::ClimbOutOfTheCave,
            Action::KillAllWumpusAndGrabAllFood
        ]
    );
    assert!(solution.is_won());
}

/// Gold lying on the entry cell is grabbed before anything else.
#[test]
fn gold_at_the_entry() {
    let entry = Position::new(2, 0);
    let cave = Cave::builder(3).gold(entry).build();

    let solution = Solver::default()
        .solve(cave, entry)
        .expect("solver should finish");

    assert_eq!(
        physical(&solution.transcript),
        vec![
            Action::GrabGold,
            Action::ClimbOutOfTheCave,
            Action::KillAllWumpusAndGrabAllFood
        ]
    );
    assert_eq!(solution.score, 1000);
}

/// A custom entry from the board is honoured.
#[test]
fn entry_can_be_anywhere_harmless() {
    let solution = solve(&["-A-", "---", "G--"], GameConfig::new());

    assert_eq!(solution.entry, Position::new(0, 1));
    assert!(solution.is_won());
    assert_eq!(solution.agent.position, Position::new(0, 1));
    assert_eq!(solution.transcript.count(Action::GrabGold), 1);
}

#[test]
fn hazard_on_the_entry_is_rejected() {
    let (cave, _) = cave(&["---", "---", "P--"]);
    let error = Solver::default()
        .solve(cave, Position::new(2, 0))
        .expect_err("a pit at the entry is invalid");
    assert!(error.to_string().contains("entry"));
}
