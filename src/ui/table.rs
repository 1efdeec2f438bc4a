use crate::core::models::ReportRow;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Table of the `limit` rows with the most NA markers, highest first.
/// `rows` is expected in ascending count order.
pub fn top_rows(rows: &[ReportRow], limit: usize) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Station").add_attribute(Attribute::Bold),
        Cell::new("File Folder").add_attribute(Attribute::Bold),
        Cell::new("File").add_attribute(Attribute::Bold),
        Cell::new("NA").add_attribute(Attribute::Bold),
    ]);

    for row in rows.iter().rev().take(limit) {
        table.add_row(vec![
            Cell::new(&row.station).fg(Color::Cyan),
            Cell::new(&row.file_folder),
            Cell::new(&row.file_name),
            Cell::new(row.na_count)
                .fg(Color::Yellow)
                .set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(file_name: &str, na_count: usize) -> ReportRow {
        ReportRow {
            main_folder: "R".to_string(),
            station: "S1".to_string(),
            file_folder: "S1".to_string(),
            file_name: file_name.to_string(),
            na_count,
        }
    }

    #[test]
    fn test_top_rows_highest_first_and_limited() {
        let rows = vec![row("low.txt", 1), row("mid.txt", 4), row("high.txt", 9)];
        let rendered = top_rows(&rows, 2);

        assert!(rendered.contains("high.txt"));
        assert!(rendered.contains("mid.txt"));
        assert!(!rendered.contains("low.txt"));
        assert!(rendered.find("high.txt").unwrap() < rendered.find("mid.txt").unwrap());
    }
}
