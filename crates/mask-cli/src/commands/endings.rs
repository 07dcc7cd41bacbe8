use comfy_table::{ContentArrangement, Table};
use mask_core::EndingId;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Title", "Script break"]);

    for ending in EndingId::all() {
        table.add_row(vec![
            ending.as_str(),
            ending.title(),
            super::yes_no(ending.is_script_break()),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} endings", EndingId::all().len());
    Ok(())
}
