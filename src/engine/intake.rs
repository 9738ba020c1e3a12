// intake.rs
//
// Interactive startup questions. Answers are gathered once into a
// SimulationConfig; the controller itself never touches stdin.

use crate::config::{ControllerConfig, DensityMode, Pacing, SimulationConfig};
use std::io::{self, BufRead, Write};

const CYCLES_PROMPT: &str = "Enter number of cycles to simulate (e.g., 3): ";
const MODE_PROMPT: &str =
    "Choose input mode: 1) Manual densities  2) Random densities\nEnter 1 or 2: ";
const REALTIME_PROMPT: &str =
    "Run in real-time (sleep between phases)? 1=Yes 0=No (choose 0 for fast output): ";

pub struct Intake<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Intake<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Returns `Ok(None)` when the cycle count is missing or not a
    /// non-negative integer; the caller exits quietly in that case.
    pub fn collect(
        &mut self,
        controller: ControllerConfig,
    ) -> io::Result<Option<SimulationConfig>> {
        let cycles = match self
            .ask(CYCLES_PROMPT)?
            .and_then(|answer| answer.parse::<u32>().ok())
        {
            Some(cycles) => cycles,
            None => return Ok(None),
        };

        let mode = self.ask(MODE_PROMPT)?;
        let manual = mode.as_deref() == Some("1");

        let realtime = self.ask(REALTIME_PROMPT)?;
        let pacing = if realtime.as_deref() == Some("1") {
            Pacing::RealTime
        } else {
            Pacing::Instant
        };

        let density_mode = if manual {
            let a_prompt = format!(
                "Enter {} traffic density (non-negative integer): ",
                controller.direction_a
            );
            let b_prompt = format!(
                "Enter {} traffic density (non-negative integer): ",
                controller.direction_b
            );
            let a = self.ask(&a_prompt)?;
            let b = self.ask(&b_prompt)?;
            DensityMode::Manual {
                a: parse_density(a.as_deref()),
                b: parse_density(b.as_deref()),
            }
        } else {
            DensityMode::Random
        };

        Ok(Some(
            SimulationConfig::new(cycles, density_mode, pacing).with_controller(controller),
        ))
    }
}

/// Negative or unreadable densities count as no traffic.
pub fn parse_density(answer: Option<&str>) -> u32 {
    match answer.map(str::parse::<i64>) {
        Some(Ok(value)) if value >= 0 => u32::try_from(value).unwrap_or(u32::MAX),
        Some(Ok(value)) => {
            log::warn!("Negative density {} treated as 0", value);
            0
        }
        _ => {
            log::warn!("Unreadable density {:?} treated as 0", answer);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(script: &str) -> Option<SimulationConfig> {
        let mut output = Vec::new();
        Intake::new(Cursor::new(script.as_bytes()), &mut output)
            .collect(ControllerConfig::default())
            .expect("in-memory io")
    }

    #[test]
    fn manual_answers_build_config() {
        let config = collect("3\n1\n0\n75\n25\n").expect("config");
        assert_eq!(config.cycles, 3);
        assert_eq!(config.density_mode, DensityMode::Manual { a: 75, b: 25 });
        assert_eq!(config.pacing, Pacing::Instant);
        assert_eq!(config.transition_log, None);
    }

    #[test]
    fn random_mode_with_realtime() {
        let config = collect("2\n2\n1\n").expect("config");
        assert_eq!(config.density_mode, DensityMode::Random);
        assert_eq!(config.pacing, Pacing::RealTime);
    }

    #[test]
    fn any_other_mode_means_random() {
        let config = collect("1\n7\n0\n").expect("config");
        assert_eq!(config.density_mode, DensityMode::Random);
    }

    #[test]
    fn bad_cycle_count_stops_intake() {
        assert!(collect("three\n1\n0\n").is_none());
        assert!(collect("-2\n").is_none());
        assert!(collect("").is_none());
    }

    #[test]
    fn negative_and_garbage_densities_become_zero() {
        let config = collect("1\n1\n0\n-5\nlots\n").expect("config");
        assert_eq!(config.density_mode, DensityMode::Manual { a: 0, b: 0 });
    }

    #[test]
    fn prompts_name_the_directions() {
        let mut output = Vec::new();
        Intake::new(Cursor::new(b"1\n1\n0\n1\n2\n".as_slice()), &mut output)
            .collect(ControllerConfig::default())
            .expect("in-memory io");
        let text = String::from_utf8(output).expect("utf8");
        assert!(text.contains("Enter North-South traffic density"));
        assert!(text.contains("Enter East-West traffic density"));
    }

    #[test]
    fn prompts_are_asked_in_order() {
        let mut output = Vec::new();
        Intake::new(Cursor::new(b"2\n2\n0\n".as_slice()), &mut output)
            .collect(ControllerConfig::default())
            .expect("in-memory io");
        let text = String::from_utf8(output).expect("utf8");
        assert_eq!(text, format!("{CYCLES_PROMPT}{MODE_PROMPT}{REALTIME_PROMPT}"));
    }
}
