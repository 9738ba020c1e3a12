// control_system/mod.rs
pub mod allocation;
pub mod events;
pub mod light;
pub mod pacing;
pub mod traffic_light_controller;

pub use allocation::GreenAllocator;
pub use events::{
    ConsoleSink, CycleReport, FanoutSink, Hold, RecordingSink, Transition, TransitionEvent,
    TransitionLogSink, TransitionSink,
};
pub use light::{Light, LightState};
pub use pacing::{InstantPacer, Pacer, RealTimePacer};
pub use traffic_light_controller::{IntersectionController, SimulationSummary};
