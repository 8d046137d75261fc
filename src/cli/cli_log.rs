use super::cli_main::{ask, get_user_input, print_error, prompt_marker};
use crate::Lab::session::LabSession;
use std::path::PathBuf;

const DEFAULT_LOG_FILE: &str = "experiment_log.json";

pub fn log_menu(session: &mut LabSession) {
    loop {
        println!("\n=== Experiment log ({} entries) ===", session.log().len());
        println!("\x1b[33m1. Show log\x1b[0m");
        println!("\x1b[33m2. Export log to JSON\x1b[0m");
        println!("\x1b[33m3. Show exported log\x1b[0m");
        println!("\x1b[33m4. Clear log\x1b[0m");
        println!("\x1b[33m0. Back to main menu\x1b[0m");
        prompt_marker("Enter your choice: ");

        let Some(choice) = get_user_input() else {
            break;
        };
        match choice.trim() {
            "1" => {
                if session.log().is_empty() {
                    println!("The log is empty.");
                } else {
                    session.print_log();
                }
            }
            "2" => export_log(session),
            "3" => show_exported_log(),
            "4" => {
                session.clear_log();
                println!("Log cleared.");
            }
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn ask_path() -> Option<PathBuf> {
    let input = ask(&format!("File path (empty for {}): ", DEFAULT_LOG_FILE))?;
    if input.is_empty() {
        Some(PathBuf::from(DEFAULT_LOG_FILE))
    } else {
        Some(PathBuf::from(input))
    }
}

fn export_log(session: &LabSession) {
    let Some(path) = ask_path() else {
        return;
    };
    match session.export_log(&path) {
        Ok(()) => println!("Log written to {}", path.display()),
        Err(e) => print_error(e),
    }
}

fn show_exported_log() {
    let Some(path) = ask_path() else {
        return;
    };
    match LabSession::load_log(&path) {
        Ok(entries) => {
            for (i, entry) in entries.iter().enumerate() {
                println!("{}. {}", i + 1, entry);
            }
        }
        Err(e) => print_error(e),
    }
}
