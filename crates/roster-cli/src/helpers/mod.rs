//! Helper utilities for command handlers.

mod prompts;

pub use prompts::{
    confirm, prompt_date, prompt_department, prompt_name, prompt_salary, prompt_update_field,
};
