//! Integration tests for uav-sim.

use std::io::Cursor;

use uav_command::{Command, CommandBacklog, load_commands_reader};
use uav_core::{SimConfig, Tick, UavId, Vec2, load_config_reader};
use uav_nav::NavState;

use crate::{NoopObserver, Sim, SimBuilder, SimError, SimObserver, TrajectoryRecord};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(uav_count: usize, time_limit: f64) -> SimConfig {
    SimConfig {
        start:       Vec2::ZERO,
        altitude:    0.0,
        speed:       1.0,
        turn_radius: 1.0,
        heading_rad: 0.0,
        time_limit,
        dt:          0.1,
        uav_count,
    }
}

fn build(config: SimConfig, commands: Vec<Command>) -> Sim {
    SimBuilder::new(config)
        .commands(CommandBacklog::from_commands(commands))
        .build()
        .unwrap()
}

/// Observer that keeps everything it is told.
#[derive(Default)]
struct Recorder {
    ticks:      Vec<(Tick, f64)>,
    commands:   Vec<(Tick, Command)>,
    duplicates: Vec<(Tick, Command)>,
    records:    Vec<TrajectoryRecord>,
    ended:      Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick, time: f64) {
        self.ticks.push((tick, time));
    }
    fn on_command(&mut self, tick: Tick, command: &Command) {
        self.commands.push((tick, *command));
    }
    fn on_duplicate_command(&mut self, tick: Tick, command: &Command) {
        self.duplicates.push((tick, *command));
    }
    fn on_record(&mut self, record: &TrajectoryRecord) {
        self.records.push(*record);
    }
    fn on_sim_end(&mut self, final_tick: Tick) {
        self.ended = Some(final_tick);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_one_vehicle_per_count() {
        let sim = build(test_config(3, 1.0), vec![]);
        let ids: Vec<UavId> = sim.uavs().iter().map(|u| u.id()).collect();
        assert_eq!(ids, vec![UavId(0), UavId(1), UavId(2)]);
        for uav in sim.uavs() {
            assert_eq!(uav.position(), Vec2::ZERO);
            assert_eq!(uav.state(), NavState::Cruise);
        }
    }

    #[test]
    fn command_for_missing_vehicle_errors() {
        let result = SimBuilder::new(test_config(2, 1.0))
            .commands(CommandBacklog::from_commands(vec![Command::new(1.0, 1.0, 0.0, UavId(2))]))
            .build();
        match result {
            Err(SimError::UnknownVehicle { uav, count, .. }) => {
                assert_eq!(uav, UavId(2));
                assert_eq!(count, 2);
            }
            Ok(_) => panic!("expected UnknownVehicle"),
            Err(e) => panic!("expected UnknownVehicle, got {e}"),
        }
    }

    #[test]
    fn invalid_config_errors() {
        let mut config = test_config(1, 1.0);
        config.dt = 0.0;
        assert!(matches!(SimBuilder::new(config).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn missing_files_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Sim::from_files(&dir.path().join("nope.ini"), &dir.path().join("nope.txt"));
        assert!(matches!(result, Err(SimError::Config(uav_core::CoreError::Io(_)))));
    }

    #[test]
    fn from_files_loads_both_sources() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("SimParams.ini");
        let cmds = dir.path().join("SimCmds.txt");
        std::fs::write(&cfg, "Dt=0.5\nN_uav=2\nR=2\nX0=0\nY0=0\nZ0=0\nV0=1\nAz=0\nTimeLim=3\n")
            .unwrap();
        std::fs::write(&cmds, "1.0 1 4 4\n").unwrap();
        let sim = Sim::from_files(&cfg, &cmds).unwrap();
        assert_eq!(sim.uavs().len(), 2);
        assert_eq!(sim.backlog().len(), 1);
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    const SCENARIO_CONFIG: &str = "\
V0=1.0
R=1.0
Dt=0.1
Az=0
X0=0
Y0=0
Z0=0
TimeLim=1.0
N_uav=1
";

    #[test]
    fn end_to_end_single_command() {
        let config = load_config_reader(Cursor::new(SCENARIO_CONFIG)).unwrap();
        let backlog = load_commands_reader(Cursor::new("0.5 0 5 0\n")).unwrap();
        let mut sim = SimBuilder::new(config).commands(backlog).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(rec.records.len(), 10);
        for (i, r) in rec.records.iter().enumerate() {
            assert_eq!(r.tick, Tick(i as u64));
            assert_eq!(r.time, i as f64 * 0.1);
        }

        // Straight line until the command at t = 0.5.
        for r in &rec.records[..5] {
            assert_eq!(r.position.y, 0.0);
            assert_eq!(r.heading_deg, 0.0);
        }
        assert!((rec.records[4].position.x - 0.5).abs() < 1e-12);

        assert_eq!(rec.commands.len(), 1);
        assert_eq!(rec.commands[0].0, Tick(5));

        // Tick 5 enters TURN; the heading starts moving on tick 6.
        assert_eq!(rec.records[5].heading_deg, 0.0);
        assert!((rec.records[6].heading_deg - 0.1f64.to_degrees()).abs() < 1e-9);
        assert!(rec.records[9].position.y > 0.0);
        assert_eq!(sim.uavs()[0].state(), NavState::Turn);
        assert_eq!(rec.ended, Some(Tick(10)));
    }

    #[test]
    fn no_commands_is_straight_line_for_every_vehicle() {
        let mut config = test_config(3, 2.0);
        config.heading_rad = 0.3;
        config.speed = 2.0;
        let mut sim = build(config, vec![]);
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(rec.records.len(), 3 * 20);
        for chunk in rec.records.chunks(3) {
            let ids: Vec<u32> = chunk.iter().map(|r| r.uav.0).collect();
            assert_eq!(ids, vec![0, 1, 2]);
            assert_eq!(chunk[0].position, chunk[2].position);
        }
        let last = rec.records.last().unwrap();
        let n = 20.0;
        assert!((last.position.x - n * 0.1 * 2.0 * 0.3f64.cos()).abs() < 1e-9);
        assert!((last.position.y - n * 0.1 * 2.0 * 0.3f64.sin()).abs() < 1e-9);
    }

    #[test]
    fn adjacent_duplicate_dispatched_once() {
        let a = Command::new(5.0, 5.0, 0.2, UavId(0));
        let mut sim = build(test_config(1, 1.0), vec![a, a]);
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert_eq!(rec.commands.len(), 1);
        assert_eq!(rec.duplicates.len(), 1);
        assert_eq!(rec.duplicates[0].1, a);
    }

    #[test]
    fn separated_duplicates_both_dispatched() {
        let a = Command::new(5.0, 5.0, 0.2, UavId(0));
        let b = Command::new(-5.0, 5.0, 0.2, UavId(1));
        let mut sim = build(test_config(2, 1.0), vec![a, b, a]);
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        let dispatched: Vec<Command> = rec.commands.iter().map(|(_, c)| *c).collect();
        assert_eq!(dispatched, vec![a, b, a]);
        assert!(rec.duplicates.is_empty());
    }

    #[test]
    fn commands_dispatch_in_time_order_within_a_tick() {
        let late = Command::new(1.0, 9.0, 0.25, UavId(0));
        let early = Command::new(9.0, 1.0, 0.21, UavId(0));
        let mut sim = build(test_config(1, 1.0), vec![late, early]);
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        // Both are due at t = 0.3; the later one wins the destination.
        assert_eq!(rec.commands, vec![(Tick(3), early), (Tick(3), late)]);
        assert_eq!(sim.uavs()[0].destination(), Vec2::new(1.0, 9.0));
    }

    #[test]
    fn backlog_drains_monotonically() {
        let cmds = vec![
            Command::new(3.0, 0.0, 0.2, UavId(0)),
            Command::new(0.0, 3.0, 0.5, UavId(1)),
            Command::new(3.0, 3.0, 0.5, UavId(0)),
            Command::new(-3.0, 0.0, 0.8, UavId(1)),
        ];
        let mut sim = build(test_config(2, 1.0), cmds);
        let mut previous = sim.backlog().len();
        assert_eq!(previous, 4);
        while !sim.is_finished() {
            let tick = sim.clock.current_tick;
            sim.run_ticks(1, &mut NoopObserver).unwrap();
            let len = sim.backlog().len();
            assert!(len <= previous);
            if tick >= Tick(8) {
                assert_eq!(len, 0, "backlog not empty after tick {tick}");
            }
            previous = len;
        }
        assert!(sim.backlog().is_empty());
    }

    #[test]
    fn late_commands_never_dispatch() {
        let mut sim = build(test_config(1, 1.0), vec![Command::new(1.0, 1.0, 5.0, UavId(0))]);
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert!(rec.commands.is_empty());
        assert_eq!(sim.backlog().len(), 1);
    }

    #[test]
    fn zero_vehicles_run_without_records() {
        let mut sim = build(test_config(0, 1.0), vec![]);
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert_eq!(rec.ticks.len(), 10);
        assert!(rec.records.is_empty());
    }

    #[test]
    fn run_executes_once() {
        let mut sim = build(test_config(1, 1.0), vec![]);
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        sim.run(&mut rec).unwrap();
        assert_eq!(rec.records.len(), 10);
        assert_eq!(sim.clock.current_tick, Tick(10));
    }

    #[test]
    fn run_ticks_stops_at_time_limit() {
        let mut sim = build(test_config(1, 0.5), vec![]);
        sim.run_ticks(3, &mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(3));
        sim.run_ticks(100, &mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(5));
        assert!(sim.is_finished());
    }

    #[test]
    fn heading_stays_in_range_under_commands() {
        let cmds = (0..30)
            .map(|i| {
                let f = i as f64;
                Command::new((f * 1.7).sin() * 6.0, (f * 0.9).cos() * 6.0, f * 0.7, UavId(i % 2))
            })
            .collect();
        let mut sim = build(test_config(2, 25.0), cmds);
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        for r in &rec.records {
            assert!((0.0..=360.0).contains(&r.heading_deg), "heading {}", r.heading_deg);
        }
    }
}
