//! Interactive menu shown when no subcommand is given.

use std::io::{BufRead, Write};

use anyhow::Result;

use reportcard_store::{ReportCardConfig, ReportStore};

use crate::prompt::Prompter;

pub fn execute<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    store: &mut ReportStore,
    config: &ReportCardConfig,
) -> Result<()> {
    prompter.say("\tWELCOME TO THE REPORT CARD GENERATOR !!!\n")?;

    loop {
        prompter.say("\n1. Create new student report card")?;
        prompter.say("2. View saved report card")?;
        prompter.say("3. Delete saved report card")?;
        prompter.say("4. Exit")?;

        match prompter.ask_option("Choose an option (1/2/3/4): ", &[1, 2, 3, 4])? {
            1 => super::create::execute(prompter, store, config)?,
            2 => super::view::execute(prompter, store, None)?,
            3 => super::delete::execute(prompter, store, None, false)?,
            _ => {
                prompter.say("\nGOODBYE! THANKS FOR USING REPORT CARD GENERATOR...")?;
                return Ok(());
            }
        }
    }
}
