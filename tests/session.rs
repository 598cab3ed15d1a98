mod common;

use std::{cell::Cell, time::Duration};

use common::{
    capture_logs, console_lines, take_logs, ManualClock, MemoryStorage, MockChassis, MockEncoders,
    SINK_TARGET,
};
use embassy_futures::block_on;
use log::Level;
use odom_bot::{
    auton_routines::AutonVariant,
    diagnostics::EncoderProbe,
    motion::Clock,
    session::{Session, SessionDevices, SessionMode, SessionReport},
    utils::FieldSide,
};

fn never() -> bool {
    false
}

fn run_session(
    storage: MemoryStorage,
    mode: &SessionMode,
    encoders: &MockEncoders,
    clock: &ManualClock,
    stop: &dyn Fn() -> bool,
) -> SessionReport {
    let mut chassis = MockChassis::default();
    let mut session = Session::new(storage);
    block_on(session.run(
        mode,
        SessionDevices {
            chassis: &mut chassis,
            encoders,
            clock,
            stop,
        },
    ))
}

fn odometry_check() -> SessionMode {
    SessionMode::Routine(AutonVariant::OdometryCheck.routine(FieldSide::Red))
}

#[test]
fn missing_card_skips_file_logging() {
    capture_logs();
    let storage = MemoryStorage::missing();
    let report = run_session(
        storage.clone(),
        &odometry_check(),
        &MockEncoders::counting(1),
        &ManualClock::default(),
        &never,
    );

    assert!(!report.file_logging);
    assert_eq!(report.run.map(|run| run.commands_issued), Some(6));
    assert_eq!(storage.card.borrow().creates, 0);
    assert!(storage.lines().is_empty());

    let logs = take_logs();
    let skipped: Vec<_> = logs
        .iter()
        .filter(|line| line.message == "No SD card present, skipping file logging")
        .collect();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].target, SINK_TARGET);
}

#[test]
fn inserted_card_gets_metadata_and_routine() {
    capture_logs();
    let storage = MemoryStorage::inserted();
    let report = run_session(
        storage.clone(),
        &odometry_check(),
        &MockEncoders::counting(1),
        &ManualClock::starting_at(12),
        &never,
    );

    assert!(report.file_logging);
    let lines = storage.lines();
    assert_eq!(lines[0], "12 Log session opened");
    assert_eq!(
        lines[1],
        "12 Program Run: 1 Program Version: 0.1 Alpha Version Date: 11-12-2020"
    );
    assert_eq!(lines[2], "12 Running Odometry Check (Red)");
    assert_eq!(
        lines.last().unwrap(),
        "12 Odometry Check finished after 6 commands"
    );
    assert!(!lines.iter().any(|line| line.contains("Encoder LEFT")));
}

#[test]
fn file_is_closed_once_on_both_branches() {
    let modes = [
        odometry_check(),
        SessionMode::EncoderProbe(EncoderProbe::with_limit(2)),
    ];
    for mode in modes {
        capture_logs();
        let storage = MemoryStorage::inserted();
        let encoders = MockEncoders::counting(3);
        let clock = ManualClock::default();
        let mut chassis = MockChassis::default();
        let mut session = Session::new(storage.clone());

        block_on(session.run(
            &mode,
            SessionDevices {
                chassis: &mut chassis,
                encoders: &encoders,
                clock: &clock,
                stop: &never,
            },
        ));
        assert_eq!(storage.card.borrow().closes, 1);
        assert_eq!(storage.card.borrow().flushes, 1);

        drop(session);
        assert_eq!(storage.card.borrow().closes, 1);
        assert_eq!(storage.card.borrow().creates, 1);

        let closing = take_logs()
            .into_iter()
            .filter(|line| line.message == "Closing log file")
            .count();
        assert_eq!(closing, 1);
    }
}

#[test]
fn console_output_does_not_depend_on_the_card() {
    let mut runs = Vec::new();
    for storage in [MemoryStorage::missing(), MemoryStorage::inserted()] {
        capture_logs();
        run_session(
            storage,
            &SessionMode::Routine(AutonVariant::Standard.routine(FieldSide::Blue)),
            &MockEncoders::counting(2),
            &ManualClock::default(),
            &never,
        );
        runs.push(console_lines(&take_logs()));
    }

    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[0].first().unwrap(), "Setting up odometry");
    assert_eq!(runs[0].last().unwrap(), "Finished");
}

#[test]
fn failed_create_keeps_the_routine_running() {
    capture_logs();
    let storage = MemoryStorage {
        fail_create: true,
        ..MemoryStorage::inserted()
    };
    let report = run_session(
        storage.clone(),
        &odometry_check(),
        &MockEncoders::counting(1),
        &ManualClock::default(),
        &never,
    );

    assert!(!report.file_logging);
    assert!(report.run.is_some());
    assert!(take_logs().iter().any(|line| line.level == Level::Warn
        && line.message == "could not create odom_log.txt, skipping file logging"));
}

#[test]
fn report_reflects_a_card_that_fails_after_opening() {
    capture_logs();
    let storage = MemoryStorage::inserted();
    storage.card.borrow_mut().appends_before_failure = Some(1);
    let report = run_session(
        storage.clone(),
        &odometry_check(),
        &MockEncoders::counting(1),
        &ManualClock::default(),
        &never,
    );

    assert!(!report.file_logging);
    assert_eq!(report.run.map(|run| run.commands_issued), Some(6));
    assert_eq!(storage.lines(), vec!["0 Log session opened"]);
    assert_eq!(storage.card.borrow().closes, 1);
    assert!(take_logs().iter().any(|line| line.level == Level::Warn
        && line.message == "could not write to the log file, file logging stopped"));
}

#[test]
fn probe_stops_at_the_sample_limit() {
    capture_logs();
    let clock = ManualClock::default();
    let report = run_session(
        MemoryStorage::missing(),
        &SessionMode::EncoderProbe(EncoderProbe::with_limit(3)),
        &MockEncoders::counting(10),
        &clock,
        &never,
    );

    assert_eq!(report.probe_samples, Some(3));
    assert!(report.run.is_none());
    assert_eq!(clock.millis(), 3 * EncoderProbe::PERIOD.as_millis() as u64);

    let samples: Vec<_> = console_lines(&take_logs())
        .into_iter()
        .filter(|line| line.starts_with("Encoder LEFT value:"))
        .collect();
    assert_eq!(
        samples,
        vec![
            "Encoder LEFT value: 10 -- Encoder RIGHT value: -10",
            "Encoder LEFT value: 20 -- Encoder RIGHT value: -20",
            "Encoder LEFT value: 30 -- Encoder RIGHT value: -30",
        ]
    );
}

#[test]
fn probe_stops_when_asked() {
    capture_logs();
    let polls = Cell::new(0);
    let stop = || {
        polls.set(polls.get() + 1);
        polls.get() > 4
    };
    let probe = EncoderProbe {
        period: Duration::from_millis(50),
        max_samples: None,
    };
    let clock = ManualClock::default();
    let report = run_session(
        MemoryStorage::missing(),
        &SessionMode::EncoderProbe(probe),
        &MockEncoders::unplugged(),
        &clock,
        &stop,
    );

    assert_eq!(report.probe_samples, Some(4));
    assert_eq!(clock.millis(), 200);
    assert!(console_lines(&take_logs())
        .contains(&"Encoder LEFT value: n/a -- Encoder RIGHT value: n/a".to_string()));
}
