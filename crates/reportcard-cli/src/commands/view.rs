//! The `reportcard view` command.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use reportcard_store::ReportStore;

use crate::prompt::Prompter;

pub fn execute<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    store: &ReportStore,
    name: Option<String>,
) -> Result<()> {
    let key = match name {
        Some(name) => super::resolve_name(store, &name)?,
        None => {
            let prompt = "Which report card would you like to view. Please enter its number : ";
            match super::choose_saved(prompter, store, prompt)? {
                Some(key) => key,
                None => return Ok(()),
            }
        }
    };

    let record = store
        .get(&key)
        .with_context(|| format!("report card for '{key}' disappeared"))?;
    prompter.say(format!("\n{}", record.render(&key)))
}
