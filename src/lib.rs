pub mod config;
pub mod control_system;
pub mod density;
pub mod engine;
pub mod error;
pub mod global_variables;
