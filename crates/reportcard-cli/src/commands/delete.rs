//! The `reportcard delete` command.

use std::io::{BufRead, Write};

use anyhow::Result;

use reportcard_store::ReportStore;

use crate::prompt::Prompter;

pub fn execute<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    store: &mut ReportStore,
    name: Option<String>,
    assume_yes: bool,
) -> Result<()> {
    let key = match name {
        Some(name) => super::resolve_name(store, &name)?,
        None => {
            let prompt = "Which report card would you like to delete. Please enter its number : ";
            match super::choose_saved(prompter, store, prompt)? {
                Some(key) => key,
                None => return Ok(()),
            }
        }
    };

    if !assume_yes
        && !prompter.ask_yes_no(&format!(
            "Are you sure you want to delete {key}'s report card(y/n) : "
        ))?
    {
        prompter.say("\nNothing was deleted.")?;
        return Ok(());
    }

    if store.delete(&key).is_some() {
        store.save()?;
        prompter.say(format!("\n{key}'s report card has been deleted."))?;
    }
    Ok(())
}
