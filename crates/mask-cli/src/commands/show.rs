use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use mask_core::PathId;

pub fn run(dir: &Path, key: &str, json: bool) -> Result<(), String> {
    let ctl = super::open(dir, key);
    let problem = super::save_problem(ctl.backend());

    if json {
        if let Some(problem) = &problem {
            eprintln!("warning: save could not be loaded ({problem}), showing defaults");
        }
        let text = ctl.persistent().to_json().map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    let record = ctl.persistent();
    let exists = ctl.backend().path().exists();
    let location = ctl.backend().path().display().to_string();

    println!("  {} [{}]", key.bold(), location.dimmed());
    if let Some(problem) = &problem {
        let notice = format!("save could not be loaded ({problem}), showing defaults");
        println!("  {}", notice.red());
    } else if !exists {
        println!("  {}", "no save yet, showing defaults".yellow());
    }
    println!();

    let last_ending = match record.last_ending_id {
        Some(ending) => format!("{ending} ({})", ending.title()),
        None => "-".to_string(),
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["played before", super::yes_no(record.has_played_before)]);
    table.add_row(vec!["play count", record.play_count.to_string().as_str()]);
    table.add_row(vec!["hunger unlocked", super::yes_no(record.hunger_unlocked)]);
    table.add_row(vec!["script deleted", super::yes_no(record.script_deleted_once)]);
    table.add_row(vec!["last ending", last_ending.as_str()]);
    println!("{table}");
    println!();

    let mut paths = Table::new();
    paths.set_content_arrangement(ContentArrangement::Dynamic);
    paths.set_header(vec!["Path", "Completed", "In legacy list"]);
    for path in PathId::all() {
        paths.add_row(vec![
            path.as_str(),
            super::yes_no(record.completed_paths.get(*path)),
            super::yes_no(record.masks_used.contains(path)),
        ]);
    }
    println!("{paths}");
    println!();
    println!(
        "  {} of {} paths completed",
        record.completed_paths.count(),
        PathId::all().len()
    );

    if !record.extra.is_empty() {
        let keys: Vec<&str> = record.extra.keys().map(String::as_str).collect();
        println!("  unrecognised fields kept: {}", keys.join(", "));
    }

    Ok(())
}
