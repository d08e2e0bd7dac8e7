mod book;
mod persistence;

pub use book::DishBook;
pub use persistence::{
    export_csv, load_dishes, load_dishes_or_empty, save_dishes, should_export_csv,
};
