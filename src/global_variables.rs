// Controller defaults (seconds)
pub const DEFAULT_MIN_GREEN: u32 = 5;
pub const DEFAULT_MAX_GREEN: u32 = 40;
pub const DEFAULT_YELLOW_TIME: u32 = 3;
pub const DEFAULT_ALL_RED_TIME: u32 = 1;

// Direction names
pub const DEFAULT_DIRECTION_A: &str = "North-South";
pub const DEFAULT_DIRECTION_B: &str = "East-West";

// Random density bounds (inclusive)
pub const RANDOM_DENSITY_MIN: u32 = 0;
pub const RANDOM_DENSITY_MAX: u32 = 100;

// Environment variable naming an optional JSON controller config
pub const CONFIG_PATH_ENV: &str = "TRAFFIC_CONTROLLER_CONFIG";
