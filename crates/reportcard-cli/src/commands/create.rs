//! The `reportcard create` command.

use std::io::{BufRead, Write};

use anyhow::Result;

use reportcard_core::calc::compute;
use reportcard_core::error::{CalcError, MarksKind};
use reportcard_core::marks::{obtained_range, MarksMap, TOTAL_RANGE};
use reportcard_core::record::{ReportRecord, CLASS_RANGE};
use reportcard_core::subject::{
    parse_name_list, parse_number_list, title_case, AddOutcome, RemoveOutcome, Subject,
    SubjectRegistry,
};
use reportcard_store::{ReportCardConfig, ReportStore};

use crate::prompt::Prompter;

pub fn execute<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    store: &mut ReportStore,
    config: &ReportCardConfig,
) -> Result<()> {
    prompter.say("\n----------Creating report card----------\n")?;

    let student_name = title_case(&prompter.ask_text("Please enter your name: ", false)?);
    let class = prompter
        .ask_number_in("Please enter your class (1-12): ", CLASS_RANGE)?
        .to_string();

    let registry = edit_subjects(prompter, config.initial_registry())?;
    let totals = edit_totals(prompter, &registry, config.default_total)?;
    let obtained = collect_obtained(prompter, &registry, &totals)?;

    let summary = compute(&registry, &totals, &obtained)?;
    let record = ReportRecord::from_summary(class, &summary);
    prompter.say(format!("\n{}", record.render(&student_name)))?;

    if prompter.ask_yes_no("Would you like to save this report card(y/n) : ")? {
        store.put(student_name.clone(), record);
        store.save()?;
        prompter.say(format!(
            "\n{student_name}'s report card has been saved to {}.",
            store.path().display()
        ))?;
    } else {
        prompter.say("\nReport card discarded.")?;
    }

    Ok(())
}

fn print_subjects<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    registry: &SubjectRegistry,
) -> Result<()> {
    prompter.say(
        "\nFollowing are the subjects for which you would be asked to provide the marks :  \n",
    )?;
    for subject in registry {
        prompter.say(subject.to_string())?;
    }
    Ok(())
}

/// Let the user add and remove subjects until they are done. At least one
/// subject must remain.
fn edit_subjects<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    mut registry: SubjectRegistry,
) -> Result<SubjectRegistry> {
    print_subjects(prompter, &registry)?;

    loop {
        if !prompter.ask_yes_no("\nWould you like to add or remove any subject(y/n) : ")? {
            if registry.is_empty() {
                prompter.say("\nAt least one subject is required. Please add a subject.")?;
                continue;
            }
            return Ok(registry);
        }

        let action =
            prompter.ask_choice("Would you like to ADD(a) or REMOVE(r) subject(s) : ", &["a", "r"])?;
        if action == "a" {
            let input = prompter.ask_text(
                "Please provide the subject(s) you would like to add. Separate multiple subjects by commas: ",
                false,
            )?;
            for outcome in registry.add(parse_name_list(&input)) {
                match outcome {
                    AddOutcome::Added(subject) => prompter.say(format!(
                        "{} has been added to the subject list.",
                        subject.name
                    ))?,
                    AddOutcome::AlreadyPresent(name) => {
                        prompter.say(format!("{name} is already present in the subject list."))?
                    }
                    AddOutcome::Blank => {}
                }
            }
        } else {
            let input = prompter.ask_text(
                "Please provide the subject number(s) you would like to remove. Separate multiple numbers by commas: ",
                true,
            )?;
            let numbers = parse_number_list(&input);
            if numbers.is_empty() {
                prompter.say("\nNo subject numbers given.")?;
            }
            for outcome in registry.remove(&numbers) {
                match outcome {
                    RemoveOutcome::Removed(subject) => prompter.say(format!(
                        "\n{} has been removed from the subject list.",
                        subject.name
                    ))?,
                    RemoveOutcome::NotFound(number) => {
                        prompter.say(format!("\nSubject number {number} not found."))?
                    }
                }
            }
        }

        print_subjects(prompter, &registry)?;
    }
}

/// Show the totals and let the user change them until they are done.
fn edit_totals<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    registry: &SubjectRegistry,
    default_total: u32,
) -> Result<MarksMap> {
    let mut totals = MarksMap::uniform(registry, default_total);

    loop {
        prompter.say(
            "\nFollowing are the total marks of every subject for which all the calculations will be made :\n",
        )?;
        for subject in registry {
            let total = totals.get(subject).unwrap_or(default_total);
            prompter.say(format!("\t{subject}   |   {total}"))?;
        }

        if !prompter.ask_yes_no("\nWould you like to edit the subjects' total marks(y/n) : ")? {
            return Ok(totals);
        }

        prompter.say("\n--------EDITING TOTAL MARKS--------\n")?;
        let input = prompter.ask_text(
            "Please provide the subject number(s) whose total marks you would like to edit. Separate multiple numbers by comma. Enter (a) if you intend to edit all the subjects' total marks : ",
            true,
        )?;

        for subject in totals_to_edit(prompter, registry, &input)? {
            let value = prompter.ask_number_in(
                &format!("\tNew total marks for {} :  ", subject.name),
                TOTAL_RANGE,
            )?;
            totals.set(&subject, value);
        }
    }
}

/// Subjects named by an edit request: `a` for all, otherwise a
/// comma-separated list of numbers. Unknown numbers are reported and skipped.
fn totals_to_edit<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    registry: &SubjectRegistry,
    input: &str,
) -> Result<Vec<Subject>> {
    if input.trim().eq_ignore_ascii_case("a") {
        return Ok(registry.iter().cloned().collect());
    }

    let mut subjects = Vec::new();
    for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match token.parse::<u32>().ok().and_then(|n| registry.get(n)) {
            Some(subject) => subjects.push(subject.clone()),
            None => {
                tracing::debug!("total edit skipped unknown subject number {token:?}");
                prompter.say(format!("\nSubject number {token} not found!"))?;
            }
        }
    }
    Ok(subjects)
}

fn collect_obtained<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    registry: &SubjectRegistry,
    totals: &MarksMap,
) -> Result<MarksMap> {
    prompter.say("\nCould you please provide the obtained marks for each subject : \n")?;

    let mut obtained = MarksMap::new();
    for subject in registry {
        let total = totals.get(subject).ok_or_else(|| CalcError::MissingMarks {
            subject: subject.name.clone(),
            map: MarksKind::Total,
        })?;
        let marks = prompter.ask_number_in(
            &format!("\t{subject} (out of {total})   :   "),
            obtained_range(total),
        )?;
        obtained.set(subject, marks);
    }
    Ok(obtained)
}
