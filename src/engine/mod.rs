// engine/mod.rs
pub mod intake;
pub mod simulation;
