use tempfile::TempDir;

use dish_suitability_rs::models::{AttributeValues, Dish, Label, Strategy};
use dish_suitability_rs::state::{export_csv, load_dishes, save_dishes, should_export_csv, DishBook};
use dish_suitability_rs::DishError;

fn sample_dishes() -> Vec<Dish> {
    vec![
        Dish::new("Iskender", AttributeValues::new(10.0, 3.0, 5.0, 3.0)).unwrap(),
        Dish::new("Cig Kofte", AttributeValues::new(20.0, 6.0, 7.0, 7.0)).unwrap(),
        Dish::new("Baklava", AttributeValues::new(18.0, 0.0, 10.0, 8.0)).unwrap(),
    ]
}

#[test]
fn test_saved_dataset_evaluates_like_raw_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dishes.json");

    save_dishes(&path, &sample_dishes()).unwrap();
    let book = DishBook::new(load_dishes(&path).unwrap());
    assert_eq!(book.len(), 3);

    let evaluation = book.evaluate("iskender", Strategy::Triangular).unwrap();
    assert_eq!(evaluation.suitability(), 1.0);
    assert_eq!(evaluation.label(), Label::Yummy);

    let evaluation = book.evaluate("Cig Kofte", Strategy::Triangular).unwrap();
    assert_eq!(evaluation.suitability(), 0.0);
    assert_eq!(evaluation.label(), Label::Low);
}

#[test]
fn test_unknown_dish_is_not_found() {
    let book = DishBook::new(sample_dishes());
    assert!(matches!(
        book.evaluate("Manti", Strategy::Gaussian),
        Err(DishError::DishNotFound(_))
    ));
}

#[test]
fn test_add_then_persist_then_export() {
    let dir = TempDir::new().unwrap();
    let json_path = dir.path().join("dishes.json");
    let csv_path = dir.path().join("dishes.csv");

    let mut book = DishBook::new(Vec::new());
    for i in 0..10 {
        let dish = Dish::new(
            format!("Meze {}", i),
            AttributeValues::new(i as f64 * 2.0, i as f64, 5.0, 5.0),
        )
        .unwrap();
        assert!(book.add(dish).is_none());
    }

    let dishes = book.to_dishes();
    save_dishes(&json_path, &dishes).unwrap();
    assert!(should_export_csv(dishes.len()));
    export_csv(&csv_path, &dishes).unwrap();

    let mut reader = csv::Reader::from_path(&csv_path).unwrap();
    let rows: Vec<Dish> = reader.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].name, "Meze 0");
    assert_eq!(rows[9].texture, 5.0);

    let reloaded = DishBook::new(load_dishes(&json_path).unwrap());
    assert_eq!(reloaded.lookup("meze 3").unwrap().taste, 6.0);
}

#[test]
fn test_out_of_range_dish_is_rejected() {
    let err = Dish::new("Acili Ezme", AttributeValues::new(12.0, 10.5, 2.0, 4.0)).unwrap_err();
    assert!(err.to_string().contains("Spiciness"));
}
