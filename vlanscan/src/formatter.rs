//! Console table for extracted records

use vlanscan_core::{OutputConfig, VlanRecord};

const TITLES: [&str; 3] = ["VLAN", "Name", "Slug"];

/// Render records as a pipe-delimited table with fixed-width, right-aligned columns
pub fn render_table(records: &[VlanRecord], output: &OutputConfig) -> String {
    let columns = if output.slug { 3 } else { 2 };
    let width = output.column_width;

    let mut table = String::new();
    push_row(&mut table, &TITLES[..columns], width);

    // Dashes span the cells and the inner separators
    let dashes = columns * width + (columns - 1);
    table.push_str(&format!("|{}|\n", "-".repeat(dashes)));

    for record in records {
        push_row(&mut table, &record.fields(output.slug), width);
    }
    table
}

/// Print the table to stdout
pub fn print_table(records: &[VlanRecord], output: &OutputConfig) {
    print!("{}", render_table(records, output));
}

fn push_row(table: &mut String, cells: &[&str], width: usize) {
    table.push('|');
    for cell in cells {
        table.push_str(&format!("{:>width$}|", cell, width = width));
    }
    table.push('\n');
}
