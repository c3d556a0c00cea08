//! Referee line protocol: whitespace-separated tokens on stdin.
//!
//! The reader is strict. A short or malformed stream is an error and the
//! bot stops; there is no resynchronisation.

use std::collections::VecDeque;
use std::io::BufRead;

use seabed_core::enums::{decode_species, RadarDirection};
use seabed_core::error::{Result, SeabedError};
use seabed_core::types::{Position, Velocity};
use seabed_core::world::Drone;
use seabed_sim::snapshot::{DroneScan, GameSetup, RadarBlip, RosterEntry, Sighting, TurnSnapshot};

/// Token-at-a-time reader over a buffered source.
pub struct TokenReader<R> {
    source: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
        }
    }

    /// True when the stream has no tokens left. Blank lines are skipped.
    pub fn at_eof(&mut self) -> Result<bool> {
        Ok(!self.fill()?)
    }

    pub fn next_token(&mut self, field: &'static str) -> Result<String> {
        if !self.fill()? {
            return Err(SeabedError::UnexpectedEof(field));
        }
        self.pending
            .pop_front()
            .ok_or(SeabedError::UnexpectedEof(field))
    }

    pub fn next_i32(&mut self, field: &'static str) -> Result<i32> {
        let token = self.next_token(field)?;
        token
            .parse()
            .map_err(|_| SeabedError::BadInt { field, token })
    }

    pub fn next_f64(&mut self, field: &'static str) -> Result<f64> {
        let token = self.next_token(field)?;
        token
            .parse()
            .map_err(|_| SeabedError::BadFloat { field, token })
    }

    /// A count field. Negative counts are malformed input.
    pub fn next_count(&mut self, field: &'static str) -> Result<usize> {
        let token = self.next_token(field)?;
        token
            .parse()
            .map_err(|_| SeabedError::BadInt { field, token })
    }

    /// Read lines until a token is buffered. Returns false at end of input.
    fn fill(&mut self) -> Result<bool> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.source.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(true)
    }
}

/// Read the start-of-game creature roster.
pub fn read_setup<R: BufRead>(reader: &mut TokenReader<R>) -> Result<GameSetup> {
    let count = reader.next_count("creature count")?;
    let mut roster = Vec::with_capacity(count);
    for _ in 0..count {
        let id = reader.next_i32("creature id")?;
        let color_code = reader.next_i32("creature color")?;
        let kind_code = reader.next_i32("creature type")?;
        let (kind, color) = decode_species(color_code, kind_code)?;
        roster.push(RosterEntry { id, color, kind });
    }
    Ok(GameSetup { roster })
}

/// Read one turn of referee input.
pub fn read_turn<R: BufRead>(reader: &mut TokenReader<R>) -> Result<TurnSnapshot> {
    let own_score = reader.next_i32("own score")?;
    let opponent_score = reader.next_i32("opponent score")?;
    let own_saved = read_ids(reader, "own scan count", "own scan id")?;
    let opponent_saved = read_ids(reader, "opponent scan count", "opponent scan id")?;
    let my_drones = read_drones(reader, "own drone count")?;
    let opponent_drones = read_drones(reader, "opponent drone count")?;

    let count = reader.next_count("drone scan count")?;
    let mut scans = Vec::with_capacity(count);
    for _ in 0..count {
        scans.push(DroneScan {
            drone: reader.next_i32("scan drone id")?,
            creature: reader.next_i32("scan creature id")?,
        });
    }

    let count = reader.next_count("visible creature count")?;
    let mut visible = Vec::with_capacity(count);
    for _ in 0..count {
        let creature = reader.next_i32("visible creature id")?;
        let x = reader.next_f64("creature x")?;
        let y = reader.next_f64("creature y")?;
        let vx = reader.next_f64("creature vx")?;
        let vy = reader.next_f64("creature vy")?;
        visible.push(Sighting {
            creature,
            position: Position::new(x, y),
            velocity: Velocity::new(vx, vy),
        });
    }

    let count = reader.next_count("radar blip count")?;
    let mut radar = Vec::with_capacity(count);
    for _ in 0..count {
        let drone = reader.next_i32("blip drone id")?;
        let creature = reader.next_i32("blip creature id")?;
        let direction = RadarDirection::from_code(&reader.next_token("blip direction")?)?;
        radar.push(RadarBlip {
            drone,
            creature,
            direction,
        });
    }

    Ok(TurnSnapshot {
        own_score,
        opponent_score,
        own_saved,
        opponent_saved,
        my_drones,
        opponent_drones,
        scans,
        visible,
        radar,
    })
}

fn read_ids<R: BufRead>(
    reader: &mut TokenReader<R>,
    count_field: &'static str,
    id_field: &'static str,
) -> Result<Vec<i32>> {
    let count = reader.next_count(count_field)?;
    (0..count).map(|_| reader.next_i32(id_field)).collect()
}

fn read_drones<R: BufRead>(
    reader: &mut TokenReader<R>,
    count_field: &'static str,
) -> Result<Vec<Drone>> {
    let count = reader.next_count(count_field)?;
    let mut drones = Vec::with_capacity(count);
    for _ in 0..count {
        let id = reader.next_i32("drone id")?;
        let x = reader.next_f64("drone x")?;
        let y = reader.next_f64("drone y")?;
        let emergency = reader.next_i32("drone emergency")? != 0;
        let battery = reader.next_i32("drone battery")?;
        drones.push(Drone {
            id,
            position: Position::new(x, y),
            emergency,
            battery,
        });
    }
    Ok(drones)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seabed_core::enums::{CreatureColor, CreatureKind};
    use std::io::Cursor;

    fn reader(text: &str) -> TokenReader<Cursor<Vec<u8>>> {
        TokenReader::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn test_roster_with_hostile() {
        let mut r = reader("3\n4 0 0\n5 3 2\n16 -1 -1\n");
        let setup = read_setup(&mut r).unwrap();
        assert_eq!(setup.roster.len(), 3);
        assert_eq!(setup.roster[1].color, CreatureColor::Blue);
        assert_eq!(setup.roster[1].kind, CreatureKind::Crab);
        assert_eq!(setup.roster[2].kind, CreatureKind::Monster);
        assert_eq!(setup.roster[2].color, CreatureColor::Red);
        assert!(r.at_eof().unwrap());
    }

    #[test]
    fn test_full_turn() {
        let text = "\
12
3
2
4
5
1
9
1
0 2000 3000 0 30
1
1 6000 500 1 25
2
0 6
1 7
2
6 4500 3000 10 -5
16 4100 3500 -200 0
1
0 8 BR
";
        let turn = read_turn(&mut reader(text)).unwrap();
        assert_eq!(turn.own_score, 12);
        assert_eq!(turn.opponent_score, 3);
        assert_eq!(turn.own_saved, vec![4, 5]);
        assert_eq!(turn.opponent_saved, vec![9]);
        assert_eq!(turn.my_drones[0].position, Position::new(2000.0, 3000.0));
        assert!(!turn.my_drones[0].emergency);
        assert!(turn.opponent_drones[0].emergency);
        assert_eq!(turn.opponent_drones[0].id, 1);
        assert_eq!(turn.scans[1], DroneScan { drone: 1, creature: 7 });
        assert_eq!(turn.visible[1].velocity, Velocity::new(-200.0, 0.0));
        assert_eq!(turn.radar[0].direction, RadarDirection::BottomRight);
    }

    #[test]
    fn test_short_input_is_an_error() {
        let mut r = reader("12 3 1");
        let err = read_turn(&mut r).unwrap_err();
        assert!(matches!(err, SeabedError::UnexpectedEof("own scan id")));
    }

    #[test]
    fn test_bad_tokens() {
        let err = read_turn(&mut reader("x")).unwrap_err();
        assert!(matches!(err, SeabedError::BadInt { field: "own score", .. }));

        let err = read_setup(&mut reader("-2")).unwrap_err();
        assert!(matches!(err, SeabedError::BadInt { .. }));

        let text = "0 0 0 0 0 0 0 0 1 0 8 NW";
        let err = read_turn(&mut reader(text)).unwrap_err();
        assert!(matches!(err, SeabedError::UnknownDirection(code) if code == "NW"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let mut r = reader("\n\n  7 \n\n");
        assert!(!r.at_eof().unwrap());
        assert_eq!(r.next_i32("n").unwrap(), 7);
        assert!(r.at_eof().unwrap());
    }
}
