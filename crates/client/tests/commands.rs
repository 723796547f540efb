//! End-to-end runs of the subcommands against files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use wumpus_client::ClientConfig;
use wumpus_client::commands::{Check, Replay, Solve, TranscriptFormat};
use wumpus_core::{AgentStatus, Position};

const BOARD: &str = "\
4
G.-.-.-
-.-.-.-
W.-.-.-
A.P.-.-
";

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn solve(board: PathBuf) -> Solve {
    Solve {
        board,
        config: None,
        output: None,
        format: TranscriptFormat::Text,
        beliefs: false,
    }
}

/// Text transcript written by `solve` replays to the same score and digest.
#[test]
fn solve_then_replay_text() {
    let dir = tempfile::tempdir().expect("temp dir");
    let board = write(dir.path(), "cave.txt", BOARD);
    let output = dir.path().join("run.txt");

    let cmd = Solve {
        output: Some(output.clone()),
        ..solve(board)
    };
    let solution = cmd.run(&ClientConfig::default()).expect("solve");
    cmd.write_output(&output, &solution).expect("write transcript");

    assert_eq!(solution.outcome, AgentStatus::Won);
    assert_eq!(solution.entry, Position::new(3, 0));

    let summary = Replay { transcript: output }.run().expect("replay");
    assert_eq!(summary.score, solution.score);
    assert_eq!(summary.outcome, AgentStatus::Won);
    assert_eq!(summary.steps, solution.transcript.len());
    assert_eq!(summary.digest, hex::encode(solution.transcript.digest()));
    assert_eq!(summary.consistent, None);
}

#[test]
fn json_documents_are_checked_on_replay() {
    let dir = tempfile::tempdir().expect("temp dir");
    let board = write(dir.path(), "cave.txt", BOARD);
    let output = dir.path().join("run.json");

    let cmd = Solve {
        format: TranscriptFormat::Json,
        ..solve(board)
    };
    let solution = cmd.run(&ClientConfig::default()).expect("solve");
    cmd.write_output(&output, &solution).expect("write document");

    let summary = Replay {
        transcript: output.clone(),
    }
    .run()
    .expect("replay");
    assert_eq!(summary.consistent, Some(true));

    // Tamper with the recorded score.
    let text = fs::read_to_string(&output).expect("read document");
    let tampered = text.replace(
        &format!("\"score\": {}", solution.score),
        "\"score\": 1",
    );
    assert_ne!(tampered, text);
    fs::write(&output, tampered).expect("rewrite document");

    let summary = Replay { transcript: output }.run().expect("replay");
    assert_eq!(summary.consistent, Some(false));
    assert_eq!(summary.score, solution.score);
}

/// `--config` beats `WUMPUS_CONFIG`, which beats the defaults.
#[test]
fn config_flag_overrides_environment() {
    let dir = tempfile::tempdir().expect("temp dir");
    // Stench and breeze at the entry, nothing provably safe.
    let board = write(dir.path(), "cave.txt", "3\n-.-.G\nW.-.-\nA.P.-\n");
    let cautious = write(dir.path(), "cautious.toml", "allow_risk = false\nallow_shooting = false\n");
    let bold = write(dir.path(), "bold.toml", "allow_risk = true\n");

    let env = ClientConfig {
        agent_config: Some(cautious),
        ..ClientConfig::default()
    };

    let from_env = solve(board.clone()).run(&env).expect("solve");
    assert_eq!(from_env.outcome, AgentStatus::Stuck);
    assert_eq!(from_env.score, 0);

    let from_flag = Solve {
        config: Some(bold),
        ..solve(board)
    }
    .run(&env)
    .expect("solve");
    assert_ne!(from_flag.outcome, AgentStatus::Stuck);
}

#[test]
fn invalid_inputs_report_the_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let board = write(dir.path(), "two-agents.txt", "2\nA.-\nA.-\n");

    let error = Check { board }.run().expect_err("two agents");
    let message = format!("{error:#}");
    assert!(message.contains("two-agents.txt"));
    assert!(message.contains("agent start given twice"));

    let transcript = write(dir.path(), "bad.txt", "MOVE_FORWARD 1 1\nDANCE 1 1\n");
    let error = Replay { transcript }.run().expect_err("unknown action");
    assert!(format!("{error:#}").contains("line 2"));
}

#[test]
fn check_accepts_a_valid_board() {
    let dir = tempfile::tempdir().expect("temp dir");
    let board = write(dir.path(), "cave.txt", BOARD);

    let loaded = Check { board }.run().expect("valid board");
    assert_eq!(loaded.size(), 4);
    assert_eq!(
        loaded.to_string(),
        "4\nG.-.-.-\n-S.-.-.-\nW.-BS.-.-\nABS.P.-B.-\n"
    );
}
