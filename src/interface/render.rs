use crate::models::Dish;
use crate::scoring::Evaluation;

/// Display the full evaluation report.
pub fn display_report(evaluation: &Evaluation) {
    println!();
    println!("=== Suitability Report ===");
    println!();
    println!("{}", evaluation.report());
    println!();
}

/// Display per-attribute membership values and the resulting score.
pub fn display_breakdown(name: &str, evaluation: &Evaluation) {
    println!();
    println!("=== {} ({}) ===", name, evaluation.strategy());
    println!();

    for row in evaluation.breakdown() {
        println!("{} Membership Value: {:.2}", row.attribute, row.score);
    }

    println!();
    println!(
        "Suitability Score: {:.2} ({})",
        evaluation.suitability(),
        evaluation.label()
    );
    println!();
}

/// Display a simple list of dishes with their attributes.
pub fn display_dish_list(dishes: &[&Dish], title: &str) {
    if dishes.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, dishes.len());
    println!();

    let max_name_len = dishes.iter().map(|d| d.name.len()).max().unwrap_or(10);

    for dish in dishes {
        println!(
            "  {:<width$}  taste:{:>5.1} spice:{:>4.1} sweet:{:>4.1} texture:{:>4.1}",
            dish.name,
            dish.taste,
            dish.spiciness,
            dish.sweetness,
            dish.texture,
            width = max_name_len
        );
    }

    println!();
}
