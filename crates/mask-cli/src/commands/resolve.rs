use colored::Colorize;
use mask_core::{FinalChoice, MaskError, resolve};

pub fn run(choice: &str, last: Option<&str>) -> Result<(), String> {
    let choice = FinalChoice::parse(choice)
        .ok_or_else(|| MaskError::UnknownChoice(choice.to_string()).to_string())?;
    let last = last.map(super::parse_path).transpose()?;

    let ending = resolve(Some(choice), last);
    let last_str = last.map_or("none", |p| p.as_str());

    println!(
        "  {choice} + {last_str} -> {} ({})",
        ending.as_str().bold(),
        ending.title()
    );
    Ok(())
}
