//! Transcript text form and JSON document.
//!
//! The text form is one step per line, `ACTION row col`, exactly as
//! [`Step`]'s `Display` writes it.

use std::io;

use wumpus_core::{Action, Position, Step, Transcript};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TranscriptError {
    #[error("line {line}: expected 'ACTION row col', found '{text}'")]
    MalformedLine { line: usize, text: String },

    #[error("line {line}: unknown action '{action}'")]
    UnknownAction { line: usize, action: String },

    #[error("line {line}: invalid coordinate '{value}'")]
    BadCoordinate { line: usize, value: String },
}

/// Writes every step of `transcript` on its own line.
pub fn write_transcript<W: io::Write>(transcript: &Transcript, mut out: W) -> io::Result<()> {
    for step in transcript {
        writeln!(out, "{step}")?;
    }
    out.flush()
}

/// Parses the text form. Blank lines are skipped; line numbers in errors
/// are 1-based.
pub fn parse_transcript(text: &str) -> Result<Transcript, TranscriptError> {
    let mut steps = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let [action, row, col] = fields.as_slice() else {
            return Err(TranscriptError::MalformedLine {
                line,
                text: trimmed.to_owned(),
            });
        };

        let action: Action = action
            .parse()
            .map_err(|_| TranscriptError::UnknownAction {
                line,
                action: (*action).to_owned(),
            })?;
        let cell = Position::new(coordinate(row, line)?, coordinate(col, line)?);
        steps.push(Step::new(action, cell));
    }
    Ok(Transcript::from_steps(steps))
}

fn coordinate(value: &str, line: usize) -> Result<i32, TranscriptError> {
    value
        .parse::<u32>()
        .ok()
        .and_then(|value| i32::try_from(value).ok())
        .ok_or_else(|| TranscriptError::BadCoordinate {
            line,
            value: value.to_owned(),
        })
}

#[cfg(feature = "serde")]
pub use document::TranscriptDocument;

#[cfg(feature = "serde")]
mod document {
    use wumpus_core::{AgentStatus, Position, Transcript};

    /// Self-describing record of one run, for tools that replay or score it.
    #[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
    pub struct TranscriptDocument {
        pub size: usize,
        pub entry: Position,
        pub outcome: AgentStatus,
        pub score: i64,
        /// Lowercase hex SHA-256 of the text form.
        pub digest: String,
        pub steps: Transcript,
    }

    impl TranscriptDocument {
        pub fn new(
            size: usize,
            entry: Position,
            outcome: AgentStatus,
            score: i64,
            transcript: &Transcript,
        ) -> Self {
            Self {
                size,
                entry,
                outcome,
                score,
                digest: hex::encode(transcript.digest()),
                steps: transcript.clone(),
            }
        }

        /// True when the stored digest and score match the stored steps.
        pub fn is_consistent(&self) -> bool {
            self.digest == hex::encode(self.steps.digest())
                && self.score == self.steps.replay_score()
                && self.outcome == self.steps.outcome()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transcript {
        Transcript::from_steps(vec![
            Step::new(Action::PerceiveBreeze, Position::new(3, 0)),
            Step::new(Action::MoveForward, Position::new(2, 0)),
            Step::new(Action::InferPit, Position::new(3, 1)),
        ])
    }

    #[test]
    fn text_form_reads_back() {
        let mut buffer = Vec::new();
        write_transcript(&sample(), &mut buffer).expect("write to memory");
        let text = String::from_utf8(buffer).expect("utf-8");

        assert_eq!(
            text,
            "PERCEIVE_BREEZE 3 0\nMOVE_FORWARD 2 0\nINFER_PIT 3 1\n"
        );
        assert_eq!(parse_transcript(&text), Ok(sample()));
    }

    #[test]
    fn malformed_lines_report_their_number() {
        assert_eq!(
            parse_transcript("\nMOVE_FORWARD 2\n"),
            Err(TranscriptError::MalformedLine {
                line: 2,
                text: "MOVE_FORWARD 2".to_owned()
            })
        );
        assert_eq!(
            parse_transcript("FLY 1 1"),
            Err(TranscriptError::UnknownAction {
                line: 1,
                action: "FLY".to_owned()
            })
        );
        assert_eq!(
            parse_transcript("SHOOT 1 -1"),
            Err(TranscriptError::BadCoordinate {
                line: 1,
                value: "-1".to_owned()
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn document_checks_its_own_digest() {
        use wumpus_core::AgentStatus;

        let transcript = sample();
        let mut document = TranscriptDocument::new(
            4,
            Position::new(3, 0),
            AgentStatus::Running,
            -1,
            &transcript,
        );
        assert_eq!(document.digest.len(), 64);
        assert!(document.is_consistent());

        document.score = 0;
        assert!(!document.is_consistent());
    }
}
