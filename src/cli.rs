use clap::{Parser, Subcommand};

/// Dish suitability: record dishes and score them with fuzzy membership functions.
#[derive(Parser, Debug)]
#[command(name = "dish_suitability")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the dish dataset JSON file.
    #[arg(short, long, default_value = "turkish_dishes.json")]
    pub file: String,

    /// Path of the CSV export.
    #[arg(long, default_value = "turkish_dishes.csv")]
    pub csv: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a dish from the dataset.
    Evaluate {
        /// Dish name (prompted from the dataset if omitted).
        #[arg(short, long)]
        name: Option<String>,

        /// Logic: 1 = Triangular, 2 = Trapezoidal, 3 = Gaussian.
        #[arg(short, long)]
        strategy: Option<u8>,
    },

    /// Score raw attribute values without saving them.
    Check {
        /// Taste (0-20).
        #[arg(allow_negative_numbers = true)]
        taste: f64,
        /// Spiciness (0-10).
        #[arg(allow_negative_numbers = true)]
        spiciness: f64,
        /// Sweetness (0-10).
        #[arg(allow_negative_numbers = true)]
        sweetness: f64,
        /// Texture (0-10).
        #[arg(allow_negative_numbers = true)]
        texture: f64,

        /// Logic: 1 = Triangular, 2 = Trapezoidal, 3 = Gaussian.
        #[arg(short, long, default_value_t = 1)]
        strategy: u8,
    },

    /// Add a dish to the dataset. Missing fields are prompted.
    Add {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        taste: Option<f64>,
        #[arg(long)]
        spiciness: Option<f64>,
        #[arg(long)]
        sweetness: Option<f64>,
        #[arg(long)]
        texture: Option<f64>,
    },

    /// List all dishes in the dataset.
    List,

    /// Write the dataset to the CSV export file.
    ExportCsv,
}

impl Default for Command {
    fn default() -> Self {
        Command::Evaluate {
            name: None,
            strategy: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttributeValues, Strategy};
    use crate::scoring::Evaluation;

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from([
            "dish_suitability",
            "check",
            "10",
            "3",
            "5",
            "3",
            "-s",
            "2",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Check {
                taste, strategy, ..
            }) => {
                assert_eq!(taste, 10.0);
                assert_eq!(strategy, 2);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.file, "turkish_dishes.json");
    }

    #[test]
    fn test_check_accepts_out_of_range_values() {
        let cli = Cli::try_parse_from([
            "dish_suitability",
            "check",
            "25",
            "-1",
            "12.5",
            "3",
            "--strategy",
            "3",
        ])
        .unwrap();

        let Some(Command::Check {
            taste,
            spiciness,
            sweetness,
            texture,
            strategy,
        }) = cli.command
        else {
            panic!("expected check command");
        };
        assert_eq!((taste, spiciness, sweetness, texture), (25.0, -1.0, 12.5, 3.0));

        let values = AttributeValues::new(taste, spiciness, sweetness, texture);
        assert!(values.validate().is_err());

        let strategy = Strategy::try_from(strategy).unwrap();
        let evaluation = Evaluation::compute(values, strategy).unwrap();
        for score in evaluation.scores() {
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_default_command_is_interactive_evaluate() {
        let cli = Cli::try_parse_from(["dish_suitability"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(
            Command::default(),
            Command::Evaluate {
                name: None,
                strategy: None
            }
        ));
    }

    #[test]
    fn test_parse_add_flags() {
        let cli = Cli::try_parse_from([
            "dish_suitability",
            "--file",
            "dishes.json",
            "add",
            "--name",
            "Manti",
            "--taste",
            "17",
        ])
        .unwrap();
        assert_eq!(cli.file, "dishes.json");
        match cli.command {
            Some(Command::Add {
                name, taste, texture, ..
            }) => {
                assert_eq!(name.as_deref(), Some("Manti"));
                assert_eq!(taste, Some(17.0));
                assert_eq!(texture, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
