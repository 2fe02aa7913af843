//! Transfer summary table

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::transfer::{TransferConfig, TransferSource};

/// Build the summary table for a configured transfer
pub fn summary_table(config: &TransferConfig) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Setting").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    table.add_row(vec![
        Cell::new("🔀 Mode"),
        Cell::new(config.mode.label())
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ]);

    match &config.source {
        TransferSource::Pod { namespace, pod } => {
            table.add_row(vec![Cell::new("📤 Source namespace"), Cell::new(namespace)]);
            table.add_row(vec![
                Cell::new("📤 Source pod"),
                Cell::new(pod).fg(Color::Magenta),
            ]);
        }
        TransferSource::Remote { uri } => {
            table.add_row(vec![
                Cell::new("🌐 Remote URI"),
                Cell::new(uri).fg(Color::Magenta),
            ]);
        }
    }

    table.add_row(vec![
        Cell::new("📥 Destination namespace"),
        Cell::new(&config.destination.namespace),
    ]);
    table.add_row(vec![
        Cell::new("📥 Destination pod"),
        Cell::new(&config.destination.pod).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("🔌 Port"),
        Cell::new(&config.destination.port)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
    ]);

    table
}

/// Print the configured transfer as an indented table
pub fn display_summary(config: &TransferConfig) {
    println!();
    println!(
        "    {} {}",
        style("📋").cyan(),
        style("TRANSFER CONFIGURATION").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    // Indent the table
    for line in summary_table(config).to_string().lines() {
        println!("    {}", line);
    }
}
