// pacing.rs
//
// The controller never sleeps on its own; it asks a Pacer to hold for a
// number of seconds. RealTimePacer actually waits on the tokio timer,
// InstantPacer returns immediately and advances a virtual clock instead.

use chrono::{Duration as ChronoDuration, Local, NaiveTime, Timelike};
use tokio::time::{sleep, Duration};

#[allow(async_fn_in_trait)]
pub trait Pacer {
    /// Current time as HH:MM:SS.
    fn timestamp(&self) -> String;

    /// Holds the current signal state for `seconds`. A zero hold is a no-op.
    async fn hold(&mut self, seconds: u32);

    /// Total seconds held so far.
    fn elapsed_seconds(&self) -> u64;
}

/// Blocks for the real duration of every hold.
#[derive(Debug, Default)]
pub struct RealTimePacer {
    elapsed: u64,
}

impl RealTimePacer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pacer for RealTimePacer {
    fn timestamp(&self) -> String {
        Local::now().format("%H:%M:%S").to_string()
    }

    async fn hold(&mut self, seconds: u32) {
        if seconds == 0 {
            return;
        }
        log::debug!("Holding for {}s", seconds);
        sleep(Duration::from_secs(u64::from(seconds))).await;
        self.elapsed += u64::from(seconds);
    }

    fn elapsed_seconds(&self) -> u64 {
        self.elapsed
    }
}

/// Simulated time: holds return at once and move a virtual clock forward.
#[derive(Debug, Clone)]
pub struct InstantPacer {
    clock: NaiveTime,
    elapsed: u64,
    announce: bool,
}

impl InstantPacer {
    /// Starts the virtual clock at the current local time and prints a
    /// "(simulated Ns)" marker for every hold.
    pub fn new() -> Self {
        let now = Local::now().time();
        Self::starting_at(now.with_nanosecond(0).unwrap_or(now)).announced(true)
    }

    /// Silent pacer with a fixed start time.
    pub fn starting_at(clock: NaiveTime) -> Self {
        Self {
            clock,
            elapsed: 0,
            announce: false,
        }
    }

    pub fn announced(mut self, announce: bool) -> Self {
        self.announce = announce;
        self
    }
}

impl Default for InstantPacer {
    fn default() -> Self {
        Self::new()
    }
}

impl Pacer for InstantPacer {
    fn timestamp(&self) -> String {
        self.clock.format("%H:%M:%S").to_string()
    }

    async fn hold(&mut self, seconds: u32) {
        if seconds == 0 {
            return;
        }
        if self.announce {
            println!("   (simulated {}s)", seconds);
        }
        self.clock = self.clock + ChronoDuration::seconds(i64::from(seconds));
        self.elapsed += u64::from(seconds);
    }

    fn elapsed_seconds(&self) -> u64 {
        self.elapsed
    }
}
