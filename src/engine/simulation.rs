// simulation.rs
use crate::config::{DensityMode, Pacing, SimulationConfig};
use crate::control_system::events::{ConsoleSink, FanoutSink, TransitionLogSink};
use crate::control_system::pacing::{InstantPacer, RealTimePacer};
use crate::control_system::traffic_light_controller::{IntersectionController, SimulationSummary};
use crate::density::{DensitySource, FixedDensity, RandomDensity};
use crate::error::SimulationError;

/// Builds the density source for the configured mode.
pub fn density_source(mode: DensityMode) -> Box<dyn DensitySource> {
    match mode {
        DensityMode::Manual { a, b } => Box::new(FixedDensity::new(a, b)),
        DensityMode::Random => Box::new(RandomDensity::from_clock()),
    }
}

/// Console output plus the optional CSV transition log.
pub fn transition_sinks(config: &SimulationConfig) -> Result<FanoutSink, SimulationError> {
    let mut sinks = FanoutSink::new().with(ConsoleSink);
    if let Some(path) = &config.transition_log {
        sinks = sinks.with(TransitionLogSink::open(path)?);
    }
    Ok(sinks)
}

/// Runs a complete simulation as described by `config`, printing every
/// transition to stdout.
pub async fn run_simulation(
    config: SimulationConfig,
) -> Result<SimulationSummary, SimulationError> {
    let mut controller = IntersectionController::new(config.controller.clone())?;
    let mut source = density_source(config.density_mode);
    let mut sinks = transition_sinks(&config)?;

    match config.density_mode {
        DensityMode::Manual { a, b } => println!(
            "\nSimulating {} cycles with densities: {}={}  {}={}",
            config.cycles, config.controller.direction_a, a, config.controller.direction_b, b
        ),
        DensityMode::Random => println!(
            "\nSimulating {} cycles with random densities",
            config.cycles
        ),
    }
    log::info!(
        "Starting simulation: {} cycles, {:?} pacing, {:?} service order",
        config.cycles,
        config.pacing,
        config.controller.service_order
    );

    let summary = match config.pacing {
        Pacing::RealTime => {
            let mut pacer = RealTimePacer::new();
            controller
                .simulate(source.as_mut(), config.cycles, &mut pacer, &mut sinks)
                .await?
        }
        Pacing::Instant => {
            let mut pacer = InstantPacer::new();
            controller
                .simulate(source.as_mut(), config.cycles, &mut pacer, &mut sinks)
                .await?
        }
    };

    log::info!(
        "Simulation finished: {} events over {}s",
        summary.events_emitted,
        summary.simulated_seconds
    );
    Ok(summary)
}

/// Prints the end-of-run summary.
pub fn print_summary(summary: &SimulationSummary, config: &SimulationConfig) {
    println!("\nSimulation finished.");
    println!("Cycles run: {}", summary.cycles_run);
    println!("Transitions: {}", summary.events_emitted);
    println!("Total signal time: {}s", summary.simulated_seconds);
    if let Some((avg_a, avg_b)) = summary.average_greens() {
        println!(
            "Average green: {} {:.1}s, {} {:.1}s",
            config.controller.direction_a, avg_a, config.controller.direction_b, avg_b
        );
    }
}
