//! The `reportcard list` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use reportcard_store::ReportStore;

pub fn execute(store: &ReportStore) -> Result<()> {
    if store.is_empty() {
        println!("There are no saved report cards!");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Student",
        "Class",
        "Subjects",
        "Obtained",
        "Percentage",
        "Grade",
    ]);

    for (name, record) in store.iter() {
        let overall = &record.overall;
        table.add_row(vec![
            Cell::new(name),
            Cell::new(&record.class),
            Cell::new(record.subjects.len()),
            Cell::new(format!("{}/{}", overall.obtained, overall.total)),
            Cell::new(format!("{:.2}%", overall.percentage)),
            Cell::new(overall.grade),
        ]);
    }

    println!("{table}");
    println!("{} report card(s) in {}", store.len(), store.path().display());
    Ok(())
}
