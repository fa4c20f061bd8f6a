//! Interactive prompting built on dialoguer.
//!
//! Prompts validate with the core validator and re-prompt until the input
//! passes, so values handed to the store never fail validation there.

use dialoguer::{Confirm, Input};

use roster_core::validate;

/// Prompt for a non-empty employee name.
pub fn prompt_name() -> anyhow::Result<String> {
    let value: String = Input::new()
        .with_prompt("Employee name")
        .validate_with(|input: &String| check(validate::parse_name(input)))
        .interact_text()?;
    Ok(value)
}

/// Prompt for a joining date until it parses as dd/mm/yyyy.
pub fn prompt_date() -> anyhow::Result<String> {
    let value: String = Input::new()
        .with_prompt("Joining date (dd/mm/yyyy)")
        .validate_with(|input: &String| check(validate::parse_date(input)))
        .interact_text()?;
    Ok(value)
}

/// Prompt for a salary until it parses as a non-negative number.
pub fn prompt_salary() -> anyhow::Result<String> {
    let value: String = Input::new()
        .with_prompt("Salary")
        .validate_with(|input: &String| check(validate::parse_salary(input)))
        .interact_text()?;
    Ok(value)
}

/// Prompt for a department; empty input means none.
pub fn prompt_department() -> anyhow::Result<Option<String>> {
    let value: String = Input::new()
        .with_prompt("Department (optional)")
        .allow_empty(true)
        .interact_text()?;
    Ok(validate::parse_department(&value))
}

/// Prompt for an update field with leave-blank-to-keep semantics.
///
/// Empty input returns `None` (keep the stored value); non-empty input
/// must pass `validate` and is returned raw for the store to apply.
pub fn prompt_update_field<F>(label: &str, validate: F) -> anyhow::Result<Option<String>>
where
    F: Fn(&str) -> Result<(), String>,
{
    let value: String = Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Ok(())
            } else {
                validate(input)
            }
        })
        .interact_text()?;
    if value.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

/// Yes/no confirmation, defaulting to no.
pub fn confirm(prompt: &str) -> anyhow::Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

fn check<T>(result: roster_core::Result<T>) -> Result<(), String> {
    result.map(|_| ()).map_err(|err| err.to_string())
}
