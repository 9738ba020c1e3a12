use crate::config::ControllerConfig;
use crate::control_system::allocation::GreenAllocator;
use crate::control_system::events::{
    CycleReport, Hold, Transition, TransitionEvent, TransitionSink,
};
use crate::control_system::light::{Light, LightState};
use crate::control_system::pacing::Pacer;
use crate::density::DensitySource;
use crate::error::{ConfigError, SimulationError};

/// Running totals of a simulation; memory use does not grow with the cycle
/// count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationSummary {
    pub cycles_run: u32,
    pub green_total_a: u64,
    pub green_total_b: u64,
    /// Allocation of the most recent cycle.
    pub last_cycle: Option<CycleReport>,
    pub events_emitted: usize,
    pub simulated_seconds: u64,
}

impl SimulationSummary {
    fn add_cycle(&mut self, report: CycleReport) {
        self.cycles_run += 1;
        self.green_total_a += u64::from(report.green_a);
        self.green_total_b += u64::from(report.green_b);
        self.last_cycle = Some(report);
    }

    /// Mean green time per direction, or None for an empty run.
    pub fn average_greens(&self) -> Option<(f64, f64)> {
        if self.cycles_run == 0 {
            return None;
        }
        let n = f64::from(self.cycles_run);
        Some((self.green_total_a as f64 / n, self.green_total_b as f64 / n))
    }
}

/// Two-phase controller for a single intersection with two conflicting
/// streams (A and B).
#[derive(Debug, Clone)]
pub struct IntersectionController {
    config: ControllerConfig,
    allocator: GreenAllocator,
    light_a: Light,
    light_b: Light,
    events_emitted: usize,
}

impl IntersectionController {
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let allocator = GreenAllocator::from_config(&config);
        let light_a = Light::new(config.direction_a.clone(), config.min_green, config.yellow_time);
        let light_b = Light::new(config.direction_b.clone(), config.min_green, config.yellow_time);
        Ok(Self {
            config,
            allocator,
            light_a,
            light_b,
            events_emitted: 0,
        })
    }

    pub fn lights(&self) -> (&Light, &Light) {
        (&self.light_a, &self.light_b)
    }

    pub fn events_emitted(&self) -> usize {
        self.events_emitted
    }

    /// Allocates green time for this cycle's densities and writes it into
    /// both lights.
    pub fn apply_densities(&mut self, density_a: u32, density_b: u32) -> (u32, u32) {
        let (green_a, green_b) = self.allocator.allocate(density_a, density_b);
        self.light_a.green_duration = green_a;
        self.light_b.green_duration = green_b;
        self.light_a.yellow_duration = self.config.yellow_time;
        self.light_b.yellow_duration = self.config.yellow_time;
        (green_a, green_b)
    }

    /// Runs one full cycle with the durations currently set on the lights:
    /// first direction, all-red gap, second direction, all-red gap.
    pub async fn run_cycle<P, S>(
        &mut self,
        cycle: u32,
        pacer: &mut P,
        sink: &mut S,
    ) -> Result<(), SimulationError>
    where
        P: Pacer,
        S: TransitionSink + ?Sized,
    {
        let all_red = self.config.all_red_time;
        let (first, second) = if self.config.service_order.a_first(cycle) {
            (&mut self.light_a, &mut self.light_b)
        } else {
            (&mut self.light_b, &mut self.light_a)
        };

        let mut emitted = serve_direction(first, cycle, pacer, sink).await?;
        emitted += all_red_gap(all_red, cycle, pacer, sink).await?;
        emitted += serve_direction(second, cycle, pacer, sink).await?;
        emitted += all_red_gap(all_red, cycle, pacer, sink).await?;

        self.events_emitted += emitted;
        Ok(())
    }

    /// Runs `cycles` cycles, sampling fresh densities from `source` each time.
    pub async fn simulate<D, P, S>(
        &mut self,
        source: &mut D,
        cycles: u32,
        pacer: &mut P,
        sink: &mut S,
    ) -> Result<SimulationSummary, SimulationError>
    where
        D: DensitySource + ?Sized,
        P: Pacer,
        S: TransitionSink + ?Sized,
    {
        let events_before = self.events_emitted;
        let seconds_before = pacer.elapsed_seconds();
        let fresh_densities = source.varies_per_cycle();
        let mut summary = SimulationSummary::default();

        for cycle in 1..=cycles {
            let (density_a, density_b) = source.next_pair(cycle);
            let (green_a, green_b) = self.apply_densities(density_a, density_b);
            let first_served = if self.config.service_order.a_first(cycle) {
                self.light_a.name.clone()
            } else {
                self.light_b.name.clone()
            };
            log::info!(
                "Cycle {}: densities {}={} {}={} -> green {}s/{}s",
                cycle,
                self.light_a.name,
                density_a,
                self.light_b.name,
                density_b,
                green_a,
                green_b
            );

            let report = CycleReport {
                cycle,
                density_a,
                density_b,
                green_a,
                green_b,
                first_served,
                fresh_densities,
            };
            sink.cycle_started(&report)?;
            self.run_cycle(cycle, pacer, sink).await?;
            summary.add_cycle(report);
        }

        summary.events_emitted = self.events_emitted - events_before;
        summary.simulated_seconds = pacer.elapsed_seconds() - seconds_before;
        Ok(summary)
    }
}

// Red -> Green -> Yellow -> Red for a single light.
async fn serve_direction<P, S>(
    light: &mut Light,
    cycle: u32,
    pacer: &mut P,
    sink: &mut S,
) -> Result<usize, SimulationError>
where
    P: Pacer,
    S: TransitionSink + ?Sized,
{
    let mut emitted = 0;
    loop {
        let state = light.advance();
        let hold = match light.hold_seconds() {
            Some(seconds) => Hold::Seconds(seconds),
            None => Hold::UntilOtherGreen,
        };
        let event = TransitionEvent {
            timestamp: pacer.timestamp(),
            cycle,
            transition: Transition::Light {
                direction: light.name.clone(),
                state,
                hold,
            },
        };
        sink.record(&event)?;
        emitted += 1;

        if let Hold::Seconds(seconds) = hold {
            pacer.hold(seconds).await;
        }
        if state == LightState::Red {
            return Ok(emitted);
        }
    }
}

async fn all_red_gap<P, S>(
    seconds: u32,
    cycle: u32,
    pacer: &mut P,
    sink: &mut S,
) -> Result<usize, SimulationError>
where
    P: Pacer,
    S: TransitionSink + ?Sized,
{
    let event = TransitionEvent {
        timestamp: pacer.timestamp(),
        cycle,
        transition: Transition::AllRed { seconds },
    };
    sink.record(&event)?;
    pacer.hold(seconds).await;
    Ok(1)
}
