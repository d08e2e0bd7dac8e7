use clap::Parser;
use std::path::Path;

use dish_suitability_rs::cli::{Cli, Command};
use dish_suitability_rs::error::Result;
use dish_suitability_rs::interface::{
    display_breakdown, display_dish_list, display_report, prompt_attribute, prompt_dish_name,
    prompt_dish_selection, prompt_strategy, resolve_dish_name,
};
use dish_suitability_rs::models::{Attribute, AttributeValues, Dish, Strategy};
use dish_suitability_rs::scoring::Evaluation;
use dish_suitability_rs::state::{
    export_csv, load_dishes, load_dishes_or_empty, save_dishes, should_export_csv, DishBook,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Evaluate { name, strategy } => cmd_evaluate(&cli.file, name, strategy),
        Command::Check {
            taste,
            spiciness,
            sweetness,
            texture,
            strategy,
        } => cmd_check(taste, spiciness, sweetness, texture, strategy),
        Command::Add {
            name,
            taste,
            spiciness,
            sweetness,
            texture,
        } => {
            let fields = [taste, spiciness, sweetness, texture];
            cmd_add(&cli.file, &cli.csv, name, fields)
        }
        Command::List => cmd_list(&cli.file),
        Command::ExportCsv => cmd_export(&cli.file, &cli.csv),
    }
}

/// Score a dish from the dataset and show its membership breakdown.
fn cmd_evaluate(file_path: &str, name: Option<String>, strategy: Option<u8>) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Dish dataset not found: {}", file_path);
        eprintln!("Add a dish first with the 'add' command.");
        return Ok(());
    }

    let book = DishBook::new(load_dishes(path)?);

    if book.is_empty() {
        println!("No dishes in the dataset.");
        return Ok(());
    }

    let name = match name {
        Some(input) => resolve_dish_name(&book, &input)?,
        None => prompt_dish_selection(&book)?,
    };

    let strategy = match strategy {
        Some(id) => Strategy::try_from(id)?,
        None => prompt_strategy()?,
    };

    let evaluation = book.evaluate(&name, strategy)?;
    display_breakdown(&name, &evaluation);

    Ok(())
}

/// Score raw attribute values and print the report. Values outside the
/// attribute ranges are scored as-is.
fn cmd_check(
    taste: f64,
    spiciness: f64,
    sweetness: f64,
    texture: f64,
    strategy: u8,
) -> Result<()> {
    let values = AttributeValues::new(taste, spiciness, sweetness, texture);
    let strategy = Strategy::try_from(strategy)?;
    let evaluation = Evaluation::compute(values, strategy)?;
    display_report(&evaluation);

    Ok(())
}

/// Add a dish, prompting for anything not supplied on the command line.
fn cmd_add(
    file_path: &str,
    csv_path: &str,
    name: Option<String>,
    fields: [Option<f64>; 4],
) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => prompt_dish_name()?,
    };

    let mut values = [0.0; 4];
    for ((slot, field), attribute) in values.iter_mut().zip(fields).zip(Attribute::ALL) {
        *slot = match field {
            Some(v) => attribute.validate(v)?,
            None => prompt_attribute(attribute)?,
        };
    }
    let [taste, spiciness, sweetness, texture] = values;
    let dish = Dish::new(name, AttributeValues::new(taste, spiciness, sweetness, texture))?;

    let mut book = DishBook::new(load_dishes_or_empty(file_path)?);
    let label = dish.debug_string();
    if book.add(dish).is_some() {
        println!("Updated: {}", label);
    } else {
        println!("Added: {}", label);
    }

    let dishes = book.to_dishes();
    save_dishes(file_path, &dishes)?;
    println!("Dataset saved ({} dishes).", dishes.len());

    if should_export_csv(dishes.len()) {
        export_csv(csv_path, &dishes)?;
        println!("CSV updated: {}", csv_path);
    }

    Ok(())
}

/// List every dish in the dataset.
fn cmd_list(file_path: &str) -> Result<()> {
    let book = DishBook::new(load_dishes_or_empty(file_path)?);
    display_dish_list(&book.all_dishes(), "Dishes");
    Ok(())
}

/// Convert the dataset to CSV.
fn cmd_export(file_path: &str, csv_path: &str) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Dish dataset not found: {}", file_path);
        return Ok(());
    }

    let dishes = load_dishes(path)?;
    export_csv(csv_path, &dishes)?;
    println!("Exported {} dishes to {}", dishes.len(), csv_path);

    Ok(())
}
