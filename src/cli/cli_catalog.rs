use super::cli_main::{ask, get_user_input, print_error, prompt_marker};
use crate::Substances::catalog::{Tag, print_catalog, resolve_substance, substances_with_tag};
use crate::Substances::molmass::calculate_molar_mass;
use prettytable::{Table, row};

pub fn catalog_menu() {
    loop {
        println!("\n=== Substance catalog ===");
        println!("\x1b[33m1. Show catalog\x1b[0m");
        println!("\x1b[33m2. Substances with a tag\x1b[0m");
        println!("\x1b[33m3. Substance details\x1b[0m");
        println!("\x1b[33m4. Molar mass of a formula\x1b[0m");
        println!("\x1b[33m0. Back to main menu\x1b[0m");
        prompt_marker("Enter your choice: ");

        let Some(choice) = get_user_input() else {
            break;
        };
        match choice.trim() {
            "1" => print_catalog(),
            "2" => show_tag(),
            "3" => show_substance(),
            "4" => show_molar_mass(),
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn show_tag() {
    let labels: Vec<&str> = Tag::ALL.iter().map(|t| t.as_str()).collect();
    println!("Tags: {}", labels.join(", "));
    let Some(input) = ask("Tag: ") else {
        return;
    };
    let Some(tag) = Tag::from_label(&input) else {
        print_error(format!("unknown tag '{}'", input));
        return;
    };
    for substance in substances_with_tag(tag) {
        println!("  - {} ({})", substance.name, substance.category);
    }
}

fn show_substance() {
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
    let mut table = Table::new();
    table.add_row(row!["Name", substance.name]);
    table.add_row(row!["Category", substance.category]);
    table.add_row(row!["Tags", substance.tags_string()]);
    table.add_row(row![
        "Color",
        format!("{} {}   \x1b[0m", substance.color, substance.color.ansi_background())
    ]);
    table.add_row(row!["Density, g/cm³", substance.density]);
    table.add_row(row!["Reactivity", substance.reactivity]);
    if let Some(ph) = substance.ph {
        table.add_row(row!["pH", ph]);
    }
    if let Some(formula) = substance.formula {
        table.add_row(row!["Formula", formula]);
    }
    match substance.molar_mass() {
        Some(Ok(mass)) => {
            table.add_row(row!["M, g/mol", format!("{:.3}", mass)]);
        }
        Some(Err(e)) => print_error(e),
        None => {}
    }
    table.printstd();
}

fn show_molar_mass() {
    let Some(formula) = ask("Formula (e.g. Ca(OH)2): ") else {
        return;
    };
    match calculate_molar_mass(&formula) {
        Ok((mass, composition)) => {
            let mut elements: Vec<_> = composition.into_iter().collect();
            elements.sort();
            let mut table = Table::new();
            table.add_row(row!["Element", "Atoms"]);
            for (element, count) in elements {
                table.add_row(row![element, count]);
            }
            table.printstd();
            println!("M = {:.3} g/mol", mass);
        }
        Err(e) => print_error(e),
    }
}
