// src/main.rs

use log::error;
use env_logger::Env;
use arraybench::benchmark_cli;
use arraybench::config::Settings;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let settings = match Settings::load(benchmark_cli::config_path(&args).as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize the logger
    let env = Env::default()
        .filter_or("ARRAYBENCH_LOG", settings.log_level.as_str())
        .write_style_or("ARRAYBENCH_LOG_STYLE", "auto");

    env_logger::Builder::from_env(env).init();

    if let Err(e) = benchmark_cli::run(&args, &settings) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
