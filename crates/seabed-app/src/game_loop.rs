//! The blocking turn loop: read a snapshot, decide, emit, repeat.
//!
//! Runs until the referee closes the input between turns. Any protocol
//! error mid-turn stops the loop and is returned to the caller.

use std::io::{BufRead, Write};

use seabed_ai::EngineConfig;
use seabed_core::error::Result;
use seabed_sim::TurnEngine;

use crate::emitter::emit_actions;
use crate::protocol::{read_setup, read_turn, TokenReader};

/// Play a whole game. Returns the number of turns played.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W, config: EngineConfig) -> Result<u64> {
    let mut reader = TokenReader::new(input);
    let setup = read_setup(&mut reader)?;
    let mut engine = TurnEngine::new(&setup, config);

    loop {
        if reader.at_eof()? {
            tracing::info!(turns = engine.turn(), "input closed");
            break;
        }
        let snapshot = read_turn(&mut reader)?;
        let actions = engine.play_turn(&snapshot);
        emit_actions(&mut output, &actions)?;
    }

    Ok(engine.turn())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seabed_core::error::SeabedError;
    use std::io::Cursor;

    const ROSTER: &str = "3\n4 0 0\n5 1 1\n16 -1 -1\n";

    fn play(transcript: &str) -> (Result<u64>, String) {
        let mut out = Vec::new();
        let result = run(
            Cursor::new(transcript.as_bytes().to_vec()),
            &mut out,
            EngineConfig::default(),
        );
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_two_turn_game() {
        let transcript = format!(
            "{ROSTER}\
0\n0\n0\n0\n\
2\n0 4000 4000 0 30\n2 8000 1000 0 30\n\
0\n0\n\
0\n\
3\n0 4 BR\n2 4 TL\n2 5 TL\n\
0\n0\n0\n0\n\
1\n0 4500 3000 0 29\n\
0\n\
1\n0 4\n\
0\n\
0\n"
        );
        let (result, out) = play(&transcript);
        assert_eq!(result.unwrap(), 2);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                // Drone 0 claims creature 4, so drone 2 follows creature 5.
                "MOVE 4600 4600 1 16",
                "MOVE 8000 400 0 16",
                // Nothing left to chase.
                "MOVE 5000 0 0 16",
            ]
        );
    }

    #[test]
    fn test_empty_game_after_roster() {
        let (result, out) = play(ROSTER);
        assert_eq!(result.unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_truncated_turn_fails() {
        let transcript = format!("{ROSTER}0 0 0 0 1 0 4000");
        let (result, _) = play(&transcript);
        assert!(matches!(result, Err(SeabedError::UnexpectedEof("drone y"))));
    }
}
