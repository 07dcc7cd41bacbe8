use std::path::Path;

use colored::Colorize;
use mask_core::{EndingId, MaskError, SessionFlag};

pub fn run(
    dir: &Path,
    key: &str,
    ending: &str,
    completed: &[String],
    force: bool,
) -> Result<(), String> {
    let ending = EndingId::parse(ending)
        .ok_or_else(|| MaskError::UnknownEnding(ending.to_string()).to_string())?;
    let paths = completed
        .iter()
        .map(|name| super::parse_path(name))
        .collect::<Result<Vec<_>, _>>()?;

    let mut ctl = super::open(dir, key);
    if let Some(problem) = super::save_problem(ctl.backend()) {
        if !force {
            return Err(format!(
                "save at {} could not be loaded ({problem}); pass --force to overwrite it",
                ctl.backend().path().display()
            ));
        }
        eprintln!("warning: overwriting unreadable save ({problem})");
    }
    for path in &paths {
        ctl.select_path(*path);
        ctl.set_flag(SessionFlag::completed(*path), true);
    }

    let receipt = ctl.commit_ending(ending).map_err(|e| e.to_string())?;
    if !receipt.persisted {
        return Err(format!(
            "ending {} committed in memory but the save was not written",
            receipt.ending
        ));
    }

    println!(
        "  {} {} ({})",
        "Committed".green().bold(),
        receipt.ending,
        receipt.ending.title()
    );
    println!("  play count: {}", receipt.play_count);
    if !receipt.newly_completed.is_empty() {
        let names: Vec<&str> = receipt.newly_completed.iter().map(|p| p.as_str()).collect();
        println!("  newly completed: {}", names.join(", "));
    }
    if ctl.should_auto_loop(receipt.ending) {
        println!("  {}", "script-break ending will auto-loop".yellow());
    }

    Ok(())
}
