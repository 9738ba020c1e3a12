use crate::config::ControllerConfig;

/// Splits the green budget between two directions in proportion to density.
///
/// Every direction gets at least `min_green`; the remaining
/// `max_green - min_green` seconds are shared by density weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreenAllocator {
    min_green: u32,
    max_green: u32,
}

impl GreenAllocator {
    /// Callers are expected to pass validated bounds; inverted bounds collapse
    /// to `min_green`.
    pub fn new(min_green: u32, max_green: u32) -> Self {
        Self {
            min_green,
            max_green: max_green.max(min_green),
        }
    }

    pub fn from_config(config: &ControllerConfig) -> Self {
        Self::new(config.min_green, config.max_green)
    }

    pub fn extra_budget(&self) -> u32 {
        self.max_green - self.min_green
    }

    /// Returns `(green_a, green_b)` in seconds.
    pub fn allocate(&self, density_a: u32, density_b: u32) -> (u32, u32) {
        let total = u128::from(density_a) + u128::from(density_b);
        if total == 0 {
            return (self.min_green, self.min_green);
        }
        (self.green_for(density_a, total), self.green_for(density_b, total))
    }

    fn green_for(&self, density: u32, total: u128) -> u32 {
        // round(density / total * extra), half away from zero, in integers;
        // u128 holds 2 * u32::MAX * u32::MAX without overflow
        let extra = u128::from(self.extra_budget());
        let share = (2 * u128::from(density) * extra + total) / (2 * total);
        let green = u128::from(self.min_green) + share;
        green.clamp(u128::from(self.min_green), u128::from(self.max_green)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> GreenAllocator {
        GreenAllocator::new(5, 40)
    }

    #[test]
    fn heavy_north_south_gets_more_green() {
        assert_eq!(reference().allocate(75, 25), (31, 14));
    }

    #[test]
    fn no_traffic_gives_minimum_each() {
        assert_eq!(reference().allocate(0, 0), (5, 5));
    }

    #[test]
    fn one_sided_traffic_takes_the_whole_budget() {
        assert_eq!(reference().allocate(100, 0), (40, 5));
        assert_eq!(reference().allocate(0, 1), (5, 40));
    }

    #[test]
    fn equal_densities_are_symmetric() {
        for d in [1, 7, 50, 99, 100, u32::MAX] {
            let (a, b) = reference().allocate(d, d);
            assert_eq!(a, b, "density {d}");
        }
    }

    #[test]
    fn half_seconds_round_away_from_zero() {
        // 35 / 2 = 17.5 for both directions
        assert_eq!(reference().allocate(1, 1), (23, 23));
    }

    #[test]
    fn allocation_stays_in_bounds_and_proportional() {
        let allocator = reference();
        let extra = allocator.extra_budget() as f64;
        for a in (0..=100).step_by(3) {
            for b in (0..=100).step_by(7) {
                if a + b == 0 {
                    continue;
                }
                let (ga, gb) = allocator.allocate(a, b);
                assert!((5..=40).contains(&ga));
                assert!((5..=40).contains(&gb));
                let exact_a = a as f64 / (a + b) as f64 * extra;
                let exact_b = b as f64 / (a + b) as f64 * extra;
                assert!(((ga - 5) as f64 - exact_a).abs() <= 1.0);
                assert!(((gb - 5) as f64 - exact_b).abs() <= 1.0);
            }
        }
    }

    #[test]
    fn allocate_is_pure() {
        let allocator = reference();
        assert_eq!(allocator.allocate(13, 87), allocator.allocate(13, 87));
    }

    #[test]
    fn zero_budget_pins_every_green() {
        let allocator = GreenAllocator::new(20, 20);
        assert_eq!(allocator.allocate(90, 10), (20, 20));
    }

    #[test]
    fn large_densities_do_not_overflow() {
        assert_eq!(reference().allocate(u32::MAX, 0), (40, 5));
    }

    #[test]
    fn full_width_budget_with_saturated_densities() {
        let config = ControllerConfig {
            min_green: 0,
            max_green: u32::MAX,
            ..ControllerConfig::default()
        };
        let allocator = GreenAllocator::from_config(&config);
        let half = u32::MAX / 2 + 1;
        assert_eq!(allocator.allocate(u32::MAX, u32::MAX), (half, half));
        assert_eq!(allocator.allocate(u32::MAX, 0), (u32::MAX, 0));
        assert_eq!(allocator.allocate(0, u32::MAX), (0, u32::MAX));
    }
}
