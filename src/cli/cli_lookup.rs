use super::cli_main::{ask, get_user_input, print_error, prompt_marker};
use crate::Reactions::fixed_reactions::{lookup, partners_of, records_table};
use crate::Substances::catalog::{Substance, resolve_substance};

pub fn reactions_menu() {
    loop {
        println!("\n=== Known reactions ===");
        println!("\x1b[33m1. Look up a pair of reagents\x1b[0m");
        println!("\x1b[33m2. List all known reactions\x1b[0m");
        println!("\x1b[33m3. Known partners of a substance\x1b[0m");
        println!("\x1b[33m0. Back to main menu\x1b[0m");
        prompt_marker("Enter your choice: ");

        let Some(choice) = get_user_input() else {
            break;
        };
        match choice.trim() {
            "1" => lookup_pair(),
            "2" => records_table().printstd(),
            "3" => show_partners(),
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn ask_substance(text: &str) -> Option<&'static Substance> {
    let input = ask(text)?;
    match resolve_substance(&input) {
        Ok(substance) => Some(substance),
        Err(e) => {
            print_error(e);
            None
        }
    }
}

fn lookup_pair() {
    let Some(first) = ask_substance("First reagent: ") else {
        return;
    };
    let Some(second) = ask_substance("Second reagent: ") else {
        return;
    };
    match lookup(first.name, second.name) {
        Some(record) => record.pretty_print(),
        None => println!(
            "No known reaction between {} and {}.",
            first.name, second.name
        ),
    }
}

fn show_partners() {
    let Some(substance) = ask_substance("Substance: ") else {
        return;
    };
    let partners = partners_of(substance.name);
    if partners.is_empty() {
        println!("No known reactions for {}.", substance.name);
    } else {
        println!("{} is known to react with:", substance.name);
        for partner in partners {
            println!("  - {}", partner);
        }
    }
}
