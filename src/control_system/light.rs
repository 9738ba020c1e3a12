use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightState {
    Green,
    Yellow,
    Red,
}

impl LightState {
    /// The next state in the Red -> Green -> Yellow -> Red cycle.
    pub fn next(self) -> Self {
        match self {
            LightState::Red => LightState::Green,
            LightState::Green => LightState::Yellow,
            LightState::Yellow => LightState::Red,
        }
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LightState::Green => "GREEN",
            LightState::Yellow => "YELLOW",
            LightState::Red => "RED",
        };
        f.write_str(label)
    }
}

/// A directional signal at the intersection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Light {
    /// Direction name, e.g. "North-South".
    pub name: String,
    pub state: LightState,
    /// Green time for the current cycle (seconds).
    pub green_duration: u32,
    pub yellow_duration: u32,
}

impl Light {
    /// Creates a light that starts on red.
    pub fn new(name: impl Into<String>, green_duration: u32, yellow_duration: u32) -> Self {
        Self {
            name: name.into(),
            state: LightState::Red,
            green_duration,
            yellow_duration,
        }
    }

    /// Advances to the next state and returns it.
    pub fn advance(&mut self) -> LightState {
        self.state = self.state.next();
        self.state
    }

    /// Planned hold for the current state; red has none of its own.
    pub fn hold_seconds(&self) -> Option<u32> {
        match self.state {
            LightState::Green => Some(self.green_duration),
            LightState::Yellow => Some(self.yellow_duration),
            LightState::Red => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_light_starts_red() {
        let light = Light::new("North-South", 10, 3);
        assert_eq!(light.state, LightState::Red);
        assert_eq!(light.hold_seconds(), None);
    }

    #[test]
    fn advance_walks_full_phase() {
        let mut light = Light::new("East-West", 12, 3);
        assert_eq!(light.advance(), LightState::Green);
        assert_eq!(light.hold_seconds(), Some(12));
        assert_eq!(light.advance(), LightState::Yellow);
        assert_eq!(light.hold_seconds(), Some(3));
        assert_eq!(light.advance(), LightState::Red);
    }

    #[test]
    fn display_uses_upper_case() {
        assert_eq!(LightState::Yellow.to_string(), "YELLOW");
    }
}
