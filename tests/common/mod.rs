#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    sync::Once,
    time::Duration,
};

use async_trait::async_trait;
use log::{Level, LevelFilter, Log, Metadata, Record};
use odom_bot::{
    motion::{ChassisMotion, Clock, EncoderReadout},
    pose::{Point, Pose},
    sink::{LogFile, SinkError, Storage},
    units::{Angle, Length},
};

/// Target used by the log sink for its own status lines.
pub const SINK_TARGET: &str = "odom_bot::sink";

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    SetState(Pose),
    State,
    DriveToPoint(Point),
    TurnToAngle(Angle),
    TurnToPoint(Point),
    SetMaxVelocity(f64),
}

/// A chassis that settles instantly on every target.
#[derive(Default)]
pub struct MockChassis {
    pub calls: Vec<Call>,
    pub pose: Pose,
    /// Reports a different made-up pose on every read.
    pub erratic: bool,
    /// Advanced by `motion_time` for every motion.
    pub clock: Option<ManualClock>,
    pub motion_time: Duration,
    reads: u32,
}

impl MockChassis {
    pub fn erratic() -> Self {
        Self {
            erratic: true,
            ..Self::default()
        }
    }

    pub fn timed(clock: ManualClock, motion_time: Duration) -> Self {
        Self {
            clock: Some(clock),
            motion_time,
            ..Self::default()
        }
    }

    /// Calls that move the robot or change its state, without pose reads.
    pub fn requests(&self) -> Vec<Call> {
        self.calls
            .iter()
            .filter(|call| **call != Call::State)
            .cloned()
            .collect()
    }

    fn settle(&mut self) {
        if let Some(clock) = &self.clock {
            clock.advance(self.motion_time);
        }
    }
}

#[async_trait(?Send)]
impl ChassisMotion for MockChassis {
    async fn set_state(&mut self, pose: Pose) {
        self.calls.push(Call::SetState(pose));
        self.pose = pose;
    }

    async fn state(&mut self) -> Pose {
        self.calls.push(Call::State);
        if self.erratic {
            self.reads += 1;
            let wobble = f64::from(self.reads) * 0.37;
            return Pose::new(
                Length::meters(-wobble),
                Length::meters(wobble * 2.0),
                Angle::radians(wobble),
            );
        }
        self.pose
    }

    async fn drive_to_point(&mut self, target: Point) {
        self.calls.push(Call::DriveToPoint(target));
        let dx = (target.x - self.pose.x()).as_meters();
        let dy = (target.y - self.pose.y()).as_meters();
        let heading = if dx == 0.0 && dy == 0.0 {
            self.pose.heading
        } else {
            Angle::radians(dy.atan2(dx))
        };
        self.pose = Pose::new(target.x, target.y, heading);
        self.settle();
    }

    async fn turn_to_angle(&mut self, heading: Angle) {
        self.calls.push(Call::TurnToAngle(heading));
        self.pose.heading = heading;
        self.settle();
    }

    async fn turn_to_point(&mut self, target: Point) {
        self.calls.push(Call::TurnToPoint(target));
        let dx = (target.x - self.pose.x()).as_meters();
        let dy = (target.y - self.pose.y()).as_meters();
        self.pose.heading = Angle::radians(dy.atan2(dx));
        self.settle();
    }

    fn set_max_velocity(&mut self, rpm: f64) {
        self.calls.push(Call::SetMaxVelocity(rpm));
    }
}

/// Encoders that count up by a fixed step on every read.
pub struct MockEncoders {
    left: Cell<i64>,
    right: Cell<i64>,
    step: i64,
    pub unavailable: bool,
}

impl MockEncoders {
    pub fn counting(step: i64) -> Self {
        Self {
            left: Cell::new(0),
            right: Cell::new(0),
            step,
            unavailable: false,
        }
    }

    pub fn unplugged() -> Self {
        Self {
            unavailable: true,
            ..Self::counting(0)
        }
    }
}

impl EncoderReadout for MockEncoders {
    fn left(&self) -> Option<i64> {
        if self.unavailable {
            return None;
        }
        self.left.set(self.left.get() + self.step);
        Some(self.left.get())
    }

    fn right(&self) -> Option<i64> {
        if self.unavailable {
            return None;
        }
        self.right.set(self.right.get() - self.step);
        Some(self.right.get())
    }
}

/// A clock that only moves when slept on or advanced by hand.
#[derive(Clone, Default)]
pub struct ManualClock(Rc<Cell<u64>>);

impl ManualClock {
    pub fn starting_at(millis: u64) -> Self {
        Self(Rc::new(Cell::new(millis)))
    }

    pub fn advance(&self, duration: Duration) {
        self.0.set(self.0.get() + duration.as_millis() as u64);
    }
}

#[async_trait(?Send)]
impl Clock for ManualClock {
    fn millis(&self) -> u64 {
        self.0.get()
    }

    async fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }
}

#[derive(Debug, Default)]
pub struct Card {
    pub text: String,
    pub creates: usize,
    pub closes: usize,
    pub flushes: usize,
    /// Appends that succeed before every later one fails.
    pub appends_before_failure: Option<usize>,
}

/// An SD card held in memory.
#[derive(Clone)]
pub struct MemoryStorage {
    pub present: bool,
    pub fail_create: bool,
    pub card: Rc<RefCell<Card>>,
}

impl MemoryStorage {
    pub fn inserted() -> Self {
        Self {
            present: true,
            fail_create: false,
            card: Rc::default(),
        }
    }

    pub fn missing() -> Self {
        Self {
            present: false,
            ..Self::inserted()
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.card.borrow().text.lines().map(String::from).collect()
    }
}

pub struct MemoryFile(Rc<RefCell<Card>>);

impl Storage for MemoryStorage {
    type File = MemoryFile;

    fn is_present(&self) -> bool {
        self.present
    }

    fn create(&mut self, path: &'static str) -> Result<MemoryFile, SinkError> {
        if self.fail_create {
            return Err(SinkError::Create { path });
        }
        let mut card = self.card.borrow_mut();
        card.creates += 1;
        card.text.clear();
        Ok(MemoryFile(self.card.clone()))
    }
}

impl LogFile for MemoryFile {
    fn append(&mut self, text: &str) -> Result<(), SinkError> {
        let mut card = self.0.borrow_mut();
        if let Some(remaining) = card.appends_before_failure.as_mut() {
            if *remaining == 0 {
                return Err(SinkError::Write);
            }
            *remaining -= 1;
        }
        card.text.push_str(text);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.0.borrow_mut().flushes += 1;
        Ok(())
    }
}

impl Drop for MemoryFile {
    fn drop(&mut self) {
        self.0.borrow_mut().closes += 1;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Captured {
    pub level: Level,
    pub target: String,
    pub message: String,
}

thread_local! {
    static CAPTURED: RefCell<Vec<Captured>> = const { RefCell::new(Vec::new()) };
}

/// Records log lines per test thread.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        CAPTURED.with(|captured| {
            captured.borrow_mut().push(Captured {
                level: record.level(),
                target: record.target().to_string(),
                message: record.args().to_string(),
            })
        });
    }

    fn flush(&self) {}
}

static CAPTURE_LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Installs the capturing logger and clears this thread's lines.
pub fn capture_logs() {
    INIT.call_once(|| {
        log::set_logger(&CAPTURE_LOGGER).expect("no other logger in tests");
        log::set_max_level(LevelFilter::Trace);
    });
    CAPTURED.with(|captured| captured.borrow_mut().clear());
}

/// Takes this thread's captured lines.
pub fn take_logs() -> Vec<Captured> {
    CAPTURED.with(|captured| captured.take())
}

/// Info-and-above console lines, minus the sink's own status lines.
pub fn console_lines(logs: &[Captured]) -> Vec<String> {
    logs.iter()
        .filter(|line| line.level <= Level::Info && line.target != SINK_TARGET)
        .map(|line| line.message.clone())
        .collect()
}
