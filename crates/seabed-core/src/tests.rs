#[cfg(test)]
mod tests {
    use crate::commands::{DroneAction, HostileNote};
    use crate::enums::*;
    use crate::error::SeabedError;
    use crate::types::{Position, Velocity};
    use crate::world::{Creature, Drone, WorldState};

    #[test]
    fn test_distance_is_euclidean() {
        let a = Position::new(4000.0, 4000.0);
        let b = Position::new(4300.0, 4400.0);
        assert!((a.distance_to(&b) - 500.0).abs() < 1e-9);
        assert!((b.distance_to(&a) - 500.0).abs() < 1e-9);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(Position::new(0.0, 0.0).in_bounds());
        assert!(Position::new(9999.0, 9999.0).in_bounds());
        assert!(!Position::new(-1.0, 500.0).in_bounds());
        assert!(!Position::new(500.0, 10_000.0).in_bounds());
    }

    #[test]
    fn test_offset() {
        let p = Position::new(100.0, 200.0).offset(600.0, -600.0);
        assert_eq!(p, Position::new(700.0, -400.0));
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(CreatureKind::from_code(0).unwrap(), CreatureKind::Jelly);
        assert_eq!(CreatureKind::from_code(2).unwrap(), CreatureKind::Crab);
        assert_eq!(CreatureKind::from_code(-1).unwrap(), CreatureKind::Monster);
        assert!(matches!(
            CreatureKind::from_code(7),
            Err(SeabedError::UnknownKind(7))
        ));
    }

    #[test]
    fn test_hostile_roster_entry_is_red_monster() {
        assert_eq!(
            decode_species(-1, -1).unwrap(),
            (CreatureKind::Monster, CreatureColor::Red)
        );
        assert_eq!(
            decode_species(3, 1).unwrap(),
            (CreatureKind::Fish, CreatureColor::Blue)
        );
        assert!(matches!(
            decode_species(9, 0),
            Err(SeabedError::UnknownColor(9))
        ));

        let c = Creature::new(16, CreatureKind::Monster, CreatureColor::Pink);
        assert_eq!(c.color, CreatureColor::Red);
        assert!(c.is_hostile());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(CreatureKind::Jelly.to_string(), "JELLY");
        assert_eq!(CreatureKind::Monster.to_string(), "MONSTER");
        assert_eq!(CreatureColor::Yellow.to_string(), "YELLOW");
        assert_eq!(RadarDirection::BottomLeft.to_string(), "BL");
    }

    #[test]
    fn test_radar_direction_steps() {
        let cases = [
            ("TL", (-1.0, -1.0)),
            ("TR", (1.0, -1.0)),
            ("BL", (-1.0, 1.0)),
            ("BR", (1.0, 1.0)),
        ];
        for (code, step) in cases {
            let dir = RadarDirection::from_code(code).unwrap();
            assert_eq!(dir.unit_step(), step, "{code}");
            assert_eq!(dir.to_string(), code);
        }
        assert!(matches!(
            RadarDirection::from_code("NW"),
            Err(SeabedError::UnknownDirection(_))
        ));
    }

    #[test]
    fn test_own_scan_clears_opponent_mark() {
        let mut c = Creature::new(5, CreatureKind::Fish, CreatureColor::Pink);
        c.mark_scanned_by_opponent();
        assert!(c.scan.by_opponent);

        c.mark_scanned_by_self(2);
        assert!(c.scan.by_self);
        assert!(!c.scan.by_opponent);
        assert_eq!(c.scan.by_drone, Some(2));
        assert!(c.is_carried_by(2));
        assert!(!c.is_carried_by(0));

        c.saved_by_self = true;
        assert!(!c.is_carried_by(2));
    }

    #[test]
    fn test_clear_sighting_keeps_flags() {
        let mut c = Creature::new(5, CreatureKind::Crab, CreatureColor::Green);
        c.position = Position::new(300.0, 7000.0);
        c.velocity = Velocity::new(-40.0, 0.0);
        c.mark_scanned_by_self(1);
        assert!(c.is_visible());

        c.clear_sighting();
        assert!(!c.is_visible());
        assert_eq!(c.velocity, Velocity::default());
        assert!(c.scan.by_self);
    }

    #[test]
    fn test_world_lookup_by_id() {
        let world = WorldState::from_roster(vec![
            Creature::new(9, CreatureKind::Jelly, CreatureColor::Pink),
            Creature::new(4, CreatureKind::Fish, CreatureColor::Blue),
            Creature::new(6, CreatureKind::Crab, CreatureColor::Green),
        ]);
        let ids: Vec<_> = world.creatures.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![4, 6, 9]);
        assert_eq!(world.creature(6).map(|c| c.kind), Some(CreatureKind::Crab));
        assert!(world.creature(5).is_none());
    }

    #[test]
    fn test_is_my_drone() {
        let mut world = WorldState::default();
        world.my_drones.push(Drone {
            id: 0,
            ..Drone::default()
        });
        world.opponent_drones.push(Drone {
            id: 1,
            ..Drone::default()
        });
        assert!(world.is_my_drone(0));
        assert!(!world.is_my_drone(1));
    }

    #[test]
    fn test_move_line() {
        let action = DroneAction::Move {
            target: Position::new(4500.7, 3000.2),
            light: Light::On,
            hostile_note: Some(HostileNote::Id { creature: 17 }),
        };
        assert_eq!(action.to_string(), "MOVE 4500 3000 1 17");

        let action = DroneAction::Move {
            target: Position::new(5000.0, 0.0),
            light: Light::Off,
            hostile_note: None,
        };
        assert_eq!(action.to_string(), "MOVE 5000 0 0");
    }

    #[test]
    fn test_danger_note_prints_distance() {
        let action = DroneAction::Move {
            target: Position::new(1200.0, 500.0),
            light: Light::Off,
            hostile_note: Some(HostileNote::Distance { units: 640 }),
        };
        assert_eq!(action.to_string(), "MOVE 1200 500 0 640");
    }

    #[test]
    fn test_wait_line() {
        let action = DroneAction::Wait { light: Light::On };
        assert_eq!(action.to_string(), "WAIT 1");
        assert_eq!(action.target(), None);
    }

    #[test]
    fn test_action_serde() {
        let action = DroneAction::Move {
            target: Position::new(1.0, 2.0),
            light: Light::On,
            hostile_note: Some(HostileNote::Distance { units: 3 }),
        };
        let json = serde_json::to_string(&action).unwrap();
        let back: DroneAction = serde_json::from_str(&json).unwrap();
        assert_eq!(action, back);
    }

    #[test]
    fn test_creature_serde() {
        let mut c = Creature::new(12, CreatureKind::Jelly, CreatureColor::Yellow);
        c.radar.insert(0, RadarDirection::TopRight);
        c.mark_scanned_by_self(0);
        let json = serde_json::to_string(&c).unwrap();
        let back: Creature = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
