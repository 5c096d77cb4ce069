use std::env;
use std::process::ExitCode;

use env_logger::Env;

use passform::cli::{self, prompts};
use passform::{Settings, exits, tui};

fn main() -> ExitCode {
    exits::install_handlers();
    exits::disable_core_dumps();
    env_logger::Builder::from_env(Env::default().default_filter_or(prompts::DEFAULT_LOG_FILTER))
        .init();

    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        prompts::warn(&format!("Failed to load settings: {}", e));
        Settings::default()
    });

    let args: Vec<String> = env::args().collect();
    let result = match args.len() {
        1 => tui::run(&settings),
        _ => cli::run(args, settings),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            prompts::error(&e.to_string());
            ExitCode::from(e.exit_code())
        }
    }
}
