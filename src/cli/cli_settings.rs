use super::cli_main::{ask, get_user_input, print_error, prompt_marker};
use crate::config_manager::with_config;
use crate::settings::Settings;

pub fn settings_menu() {
    let mut settings = Settings::new();
    loop {
        println!("\n=== Settings ===");
        if let Some(path) = with_config(|manager| manager.config_file().map(|p| p.display().to_string())) {
            println!("Stored in {}", path);
        }
        for (i, name) in settings.get_available_settings().iter().enumerate() {
            let value = settings.get_value(name).cloned().unwrap_or_default();
            println!("\x1b[33m{:>2}. {}\x1b[0m = {}", i + 1, name, value);
        }
        println!("\x1b[33m r. Reset to defaults\x1b[0m");
        println!("\x1b[33m 0. Back to main menu\x1b[0m");
        println!("Log level takes effect after restart.");
        prompt_marker("Enter the number of a setting to change: ");

        let Some(choice) = get_user_input() else {
            break;
        };
        let choice = choice.trim();
        match choice {
            "0" => break,
            "r" | "R" => match settings.reset_to_defaults() {
                Ok(()) => println!("Defaults restored."),
                Err(e) => print_error(e),
            },
            _ => {
                let names = settings.get_available_settings();
                let selected = choice
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| names.get(i).copied());
                match selected {
                    Some(name) => change_setting(&mut settings, name),
                    None => println!("Invalid choice. Please try again."),
                }
            }
        }
    }
}

fn change_setting(settings: &mut Settings, name: &str) {
    let Some(value) = ask(&format!("New value for {}: ", name)) else {
        return;
    };
    match settings.set_value(name, &value) {
        Ok(()) => println!("{} set to {}.", name, value),
        Err(e) => print_error(e),
    }
}
