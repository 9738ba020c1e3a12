use adaptive_traffic_light::config::ControllerConfig;
use adaptive_traffic_light::engine::intake::Intake;
use adaptive_traffic_light::engine::simulation::{print_summary, run_simulation};
use adaptive_traffic_light::global_variables::CONFIG_PATH_ENV;
use std::env;
use std::io::{stdin, stdout};
use std::path::PathBuf;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    let controller = match env::var_os(CONFIG_PATH_ENV) {
        Some(path) => match ControllerConfig::from_json_file(&PathBuf::from(path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Controller config error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => ControllerConfig::default(),
    };

    println!("Adaptive Traffic Light Simulator");
    println!("--------------------------------");

    let mut intake = Intake::new(stdin().lock(), stdout());
    let mut config = match intake.collect(controller) {
        Ok(Some(config)) => config,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Input error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(path) = env::args_os().nth(1) {
        config = config.with_transition_log(path);
    }

    match run_simulation(config.clone()).await {
        Ok(summary) => {
            print_summary(&summary, &config);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Simulation error: {}", e);
            ExitCode::FAILURE
        }
    }
}
