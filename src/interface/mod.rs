pub mod prompts;
pub mod render;

pub use prompts::{
    parse_attribute_value, prompt_attribute, prompt_dish_name, prompt_dish_selection,
    prompt_strategy, resolve_dish_name,
};
pub use render::{display_breakdown, display_dish_list, display_report};
