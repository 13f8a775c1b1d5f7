use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

/// A box-drawn table with a header row that wraps to the terminal width
pub fn get_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}
