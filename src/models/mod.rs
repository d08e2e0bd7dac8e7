mod attribute;
mod dish;
mod label;

pub use attribute::{Attribute, Strategy};
pub use dish::{AttributeValues, Dish};
pub use label::Label;
