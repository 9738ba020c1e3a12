// events.rs
//
// Observable output of the phase driver. Every state change is emitted as a
// TransitionEvent to a TransitionSink: the console, an append-only CSV log,
// or an in-memory Vec for tests.

use crate::control_system::light::LightState;
use crate::error::SimulationError;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::Path;

/// How long a light plans to stay in its new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hold {
    Seconds(u32),
    /// Red holds until the paired direction has had its green.
    UntilOtherGreen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Light {
        direction: String,
        state: LightState,
        hold: Hold,
    },
    /// Both lights red at once.
    AllRed { seconds: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionEvent {
    /// Wall-clock or simulated time, HH:MM:SS.
    pub timestamp: String,
    pub cycle: u32,
    pub transition: Transition,
}

impl TransitionEvent {
    /// Human-readable console line for this event.
    pub fn describe(&self) -> String {
        match &self.transition {
            Transition::Light {
                direction,
                state,
                hold: Hold::Seconds(seconds),
            } => format!(
                "[{}] {} -> {} (will last {}s)",
                self.timestamp, direction, state, seconds
            ),
            Transition::Light {
                direction,
                state,
                hold: Hold::UntilOtherGreen,
            } => format!(
                "[{}] {} -> {} (will last until other gets green)",
                self.timestamp, direction, state
            ),
            Transition::AllRed { seconds } => {
                format!("[{}] ALL -> RED (all-red gap {}s)", self.timestamp, seconds)
            }
        }
    }
}

/// Allocation chosen for one cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleReport {
    pub cycle: u32,
    pub density_a: u32,
    pub density_b: u32,
    pub green_a: u32,
    pub green_b: u32,
    /// Name of the direction served first.
    pub first_served: String,
    /// Densities were sampled for this cycle rather than fixed for the run.
    pub fresh_densities: bool,
}

impl CycleReport {
    /// Console header printed before the cycle's transitions.
    pub fn header_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(3);
        if self.fresh_densities {
            lines.push(format!("--- Random densities for cycle {} ---", self.cycle));
        }
        lines.push(format!("=== Cycle {} ===", self.cycle));
        lines.push(format!(
            "Densities: {}/{}  Green: {}s/{}s  ({} first)",
            self.density_a, self.density_b, self.green_a, self.green_b, self.first_served
        ));
        lines
    }
}

/// Flat CSV row for a transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub timestamp: String,
    pub cycle: u32,
    pub direction: String,
    pub state: String,
    pub hold_seconds: Option<u32>,
    pub note: String,
}

impl From<&TransitionEvent> for TransitionRecord {
    fn from(event: &TransitionEvent) -> Self {
        let (direction, state, hold_seconds, note) = match &event.transition {
            Transition::Light {
                direction,
                state,
                hold,
            } => match hold {
                Hold::Seconds(s) => (direction.clone(), state.to_string(), Some(*s), String::new()),
                Hold::UntilOtherGreen => (
                    direction.clone(),
                    state.to_string(),
                    None,
                    "until other gets green".to_string(),
                ),
            },
            Transition::AllRed { seconds } => (
                "ALL".to_string(),
                LightState::Red.to_string(),
                Some(*seconds),
                "all-red gap".to_string(),
            ),
        };
        TransitionRecord {
            timestamp: event.timestamp.clone(),
            cycle: event.cycle,
            direction,
            state,
            hold_seconds,
            note,
        }
    }
}

/// Receives every transition the controller emits.
pub trait TransitionSink {
    fn record(&mut self, event: &TransitionEvent) -> Result<(), SimulationError>;

    /// Called once per cycle, after allocation and before the first transition.
    fn cycle_started(&mut self, _report: &CycleReport) -> Result<(), SimulationError> {
        Ok(())
    }
}

impl TransitionSink for Vec<TransitionEvent> {
    fn record(&mut self, event: &TransitionEvent) -> Result<(), SimulationError> {
        self.push(event.clone());
        Ok(())
    }
}

/// Prints one line per transition to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl TransitionSink for ConsoleSink {
    fn record(&mut self, event: &TransitionEvent) -> Result<(), SimulationError> {
        println!("{}", event.describe());
        Ok(())
    }

    fn cycle_started(&mut self, report: &CycleReport) -> Result<(), SimulationError> {
        println!();
        for line in report.header_lines() {
            println!("{}", line);
        }
        Ok(())
    }
}

/// Keeps every transition and cycle report in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<TransitionEvent>,
    pub cycles: Vec<CycleReport>,
}

impl TransitionSink for RecordingSink {
    fn record(&mut self, event: &TransitionEvent) -> Result<(), SimulationError> {
        self.events.push(event.clone());
        Ok(())
    }

    fn cycle_started(&mut self, report: &CycleReport) -> Result<(), SimulationError> {
        self.cycles.push(report.clone());
        Ok(())
    }
}

/// Appends transitions to a CSV file. Headers are written only when the file
/// is new.
pub struct TransitionLogSink {
    writer: csv::Writer<std::fs::File>,
}

impl TransitionLogSink {
    pub fn open(path: &Path) -> Result<Self, SimulationError> {
        let file_exists = path.exists();
        let file = OpenOptions::new().append(true).create(true).open(path)?;
        let writer = csv::WriterBuilder::new()
            .has_headers(!file_exists)
            .from_writer(file);
        log::info!("Writing transition log to {}", path.display());
        Ok(Self { writer })
    }
}

impl TransitionSink for TransitionLogSink {
    fn record(&mut self, event: &TransitionEvent) -> Result<(), SimulationError> {
        self.writer.serialize(TransitionRecord::from(event))?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Forwards each event to every inner sink, in order.
#[derive(Default)]
pub struct FanoutSink {
    sinks: Vec<Box<dyn TransitionSink>>,
}

impl FanoutSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: impl TransitionSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }
}

impl TransitionSink for FanoutSink {
    fn record(&mut self, event: &TransitionEvent) -> Result<(), SimulationError> {
        for sink in self.sinks.iter_mut() {
            sink.record(event)?;
        }
        Ok(())
    }

    fn cycle_started(&mut self, report: &CycleReport) -> Result<(), SimulationError> {
        for sink in self.sinks.iter_mut() {
            sink.cycle_started(report)?;
        }
        Ok(())
    }
}

/// Reads back every record of a transition log.
pub fn read_transition_log(path: &Path) -> Result<Vec<TransitionRecord>, SimulationError> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: TransitionRecord = result?;
        records.push(record);
    }
    Ok(records)
}
