pub mod create;
pub mod delete;
pub mod init;
pub mod list;
pub mod menu;
pub mod view;

use std::io::{BufRead, Write};

use anyhow::Result;

use reportcard_store::ReportStore;

use crate::prompt::Prompter;

/// Resolve a student name given on the command line to its stored key.
fn resolve_name(store: &ReportStore, name: &str) -> Result<String> {
    store
        .resolve_key(name)
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("no saved report card for '{}'", name.trim()))
}

/// List saved report cards and ask for one by number.
///
/// Returns `None` when the store is empty.
fn choose_saved<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    store: &ReportStore,
    prompt: &str,
) -> Result<Option<String>> {
    if store.is_empty() {
        prompter.say("\nThere are no saved report cards!")?;
        return Ok(None);
    }

    prompter.say("\nFollowing are the saved report cards : \n")?;
    let names: Vec<&str> = store.names().collect();
    for (i, name) in names.iter().enumerate() {
        prompter.say(format!("\t{}.{name}'s Report card", i + 1))?;
    }
    prompter.say("")?;

    let choice = prompter.ask_number_in(prompt, 1..=names.len() as u32)?;
    Ok(Some(names[choice as usize - 1].to_string()))
}
