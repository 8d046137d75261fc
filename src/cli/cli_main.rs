use super::cli_catalog::catalog_menu;
use super::cli_lab::lab_menu;
use super::cli_log::log_menu;
use super::cli_lookup::reactions_menu;
use super::cli_settings::settings_menu;
use super::lab_help::LAB_ENG_HELPER;
use crate::Lab::session::LabSession;
use crate::config_manager::with_config;
use log::error;
use std::io::{self, Write};

pub fn run_interactive_menu() {
    let mut session = LabSession::from_global_config();
    loop {
        show_main_menu();
        let Some(choice) = get_user_input() else {
            break;
        };

        match choice.trim() {
            "1" => lab_menu(&mut session),
            "2" => reactions_menu(),
            "3" => catalog_menu(),
            "4" => log_menu(&mut session),
            "5" => {
                settings_menu();
                if let Err(e) = with_config(|manager| session.apply_config(manager.get_config())) {
                    print_error(e);
                }
            }
            "6" => println!("{}", LAB_ENG_HELPER),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options

Cyan (\x1b[36m) - prompts

Red (\x1b[31m) - errors

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n Welcome to ChemFlask: a virtual chemistry lab bench.\n
    Pour substances into the flask, heat it and watch them react \n \x1b[0m"
    );
    println!("\x1b[33m1. Lab bench\x1b[0m");
    println!("\x1b[33m2. Known reactions\x1b[0m");
    println!("\x1b[33m3. Substance catalog\x1b[0m");
    println!("\x1b[33m4. Experiment log\x1b[0m");
    println!("\x1b[33m5. Settings\x1b[0m");
    println!("\x1b[33m6. Help\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    prompt_marker("Enter your choice: ");
}

/// prints a cyan prompt without a newline
pub fn prompt_marker(text: &str) {
    print!("\x1b[36m{}\x1b[0m", text);
    let _ = io::stdout().flush();
}

/// None at the end of input
pub fn get_user_input() -> Option<String> {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input),
        Err(e) => {
            error!("failed to read input: {}", e);
            None
        }
    }
}

/// prompt followed by a trimmed line of input
pub fn ask(text: &str) -> Option<String> {
    prompt_marker(text);
    get_user_input().map(|s| s.trim().to_string())
}

pub fn print_error<E: std::fmt::Display>(e: E) {
    println!("\x1b[31mError: {}\x1b[0m", e);
}
