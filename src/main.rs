use ChemFlask::cli::cli_main::run_interactive_menu;
use ChemFlask::config_manager::with_config;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

pub fn main() {
    let level = with_config(|manager| manager.get_config().log_level_filter());
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("failed to initialize logger: {}", e);
    }
    run_interactive_menu();
}
