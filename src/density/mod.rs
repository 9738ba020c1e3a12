// density/mod.rs
pub mod random_density;

pub use random_density::RandomDensity;

/// Supplies the (direction A, direction B) density pair for each cycle.
pub trait DensitySource {
    fn next_pair(&mut self, cycle: u32) -> (u32, u32);

    /// Whether pairs change between cycles.
    fn varies_per_cycle(&self) -> bool {
        false
    }
}

/// The same pair every cycle, as entered by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDensity {
    pub a: u32,
    pub b: u32,
}

impl FixedDensity {
    pub fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }
}

impl DensitySource for FixedDensity {
    fn next_pair(&mut self, _cycle: u32) -> (u32, u32) {
        (self.a, self.b)
    }
}

/// Pre-recorded pairs, one per cycle; repeats the last pair when exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedDensity {
    pairs: Vec<(u32, u32)>,
}

impl ScriptedDensity {
    pub fn new(pairs: Vec<(u32, u32)>) -> Self {
        Self { pairs }
    }
}

impl DensitySource for ScriptedDensity {
    fn next_pair(&mut self, cycle: u32) -> (u32, u32) {
        let index = (cycle.saturating_sub(1) as usize).min(self.pairs.len().saturating_sub(1));
        self.pairs.get(index).copied().unwrap_or((0, 0))
    }

    fn varies_per_cycle(&self) -> bool {
        true
    }
}
