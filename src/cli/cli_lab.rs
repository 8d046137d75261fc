use super::cli_main::{ask, get_user_input, print_error, prompt_marker};
use crate::Lab::session::LabSession;
use crate::Reactions::fixed_reactions::lookup;
use crate::Substances::catalog::resolve_substance;

pub fn lab_menu(session: &mut LabSession) {
    loop {
        println!("\n=== Lab bench ===");
        show_status(session);
        println!("\x1b[33m1. Add substance\x1b[0m");
        println!("\x1b[33m2. Set temperature\x1b[0m");
        println!("\x1b[33m3. React\x1b[0m");
        println!("\x1b[33m4. Show flask\x1b[0m");
        println!("\x1b[33m5. Clean flask\x1b[0m");
        println!("\x1b[33m0. Back to main menu\x1b[0m");
        prompt_marker("Enter your choice: ");

        let Some(choice) = get_user_input() else {
            break;
        };
        match choice.trim() {
            "1" => add_substance(session),
            "2" => set_temperature(session),
            "3" => react(session),
            "4" => show_flask(session),
            "5" => {
                session.reset();
                println!("Flask cleaned.");
            }
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn show_status(session: &LabSession) {
    let color = match session.mixed_color() {
        Ok(color) => format!("{} {}   \x1b[0m", color, color.ansi_background()),
        Err(e) => e.to_string(),
    };
    println!(
        "Temperature: {}°C | Portions: {} | Volume: {} mL | Color: {}",
        session.temperature(),
        session.vessel().len(),
        session.total_volume(),
        color
    );
}

fn add_substance(session: &mut LabSession) {
    let Some(input) = ask("Substance (number, name or beginning of the name): ") else {
        return;
    };
    let substance = match resolve_substance(&input) {
        Ok(substance) => substance,
        Err(e) => {
            print_error(e);
            return;
        }
    };
    let prompt = format!(
        "Volume of {} in mL (at most {}): ",
        substance.name,
        session.max_addition()
    );
    let Some(volume) = ask(&prompt) else {
        return;
    };
    let volume: f64 = match volume.parse() {
        Ok(v) => v,
        Err(_) => {
            print_error(format!("'{}' is not a number", volume));
            return;
        }
    };
    match session.add_substance(substance.name, volume) {
        Ok(entry) => println!("Added {} mL of {}.", entry.volume, entry.substance),
        Err(e) => print_error(e),
    }
}

fn set_temperature(session: &mut LabSession) {
    let (min, max) = session.temperature_range();
    let Some(input) = ask(&format!("Temperature in °C ({}..{}): ", min, max)) else {
        return;
    };
    match input.parse::<i32>() {
        Ok(t) => match session.set_temperature(t) {
            Ok(()) => println!("Hot plate set to {}°C.", t),
            Err(e) => print_error(e),
        },
        Err(_) => print_error(format!("'{}' is not a whole number", input)),
    }
}

fn react(session: &mut LabSession) {
    let outcome = match session.react() {
        Ok(outcome) => outcome.clone(),
        Err(e) => {
            print_error(e);
            return;
        }
    };
    println!("\n\x1b[34m{}\x1b[0m", outcome.kind.title());
    println!("{}", outcome.label);
    if let Some(explanation) = outcome.kind.explanation() {
        println!("{}", explanation);
    }
    if let Some(observation) = outcome.kind.observation() {
        println!("Observation: {}", observation);
    }
    let (first, second) = &outcome.substances;
    if let Some(record) = lookup(first, second) {
        println!("Known reaction for this pair:");
        record.pretty_print();
    }
}

fn show_flask(session: &LabSession) {
    if session.vessel().is_empty() {
        println!("The flask is empty.");
    } else {
        session.vessel().pretty_print();
        println!("Mass: {:.2} g", session.vessel().total_mass());
        if let Some(density) = session.vessel().mean_density() {
            println!("Mean density: {:.3} g/cm³", density);
        }
    }
    match session.flask_view() {
        Ok(view) => {
            for line in view.text_art(true) {
                println!("{}", line);
            }
            println!(
                "{} / {} mL, color {}",
                view.total_volume, view.capacity, view.color
            );
        }
        Err(e) => print_error(e),
    }
}
