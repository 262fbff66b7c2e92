//! Plain-text table rendering with width-fitted columns.

use crate::record::Tabular;

/// Format a snapshot as a plain table.
///
/// The header row is always present, so an empty snapshot renders as a
/// header with zero data rows.
pub fn format_table<T: Tabular>(records: &[T]) -> String {
    let columns = T::COLUMNS;
    let rows: Vec<Vec<String>> = records.iter().map(|r| r.row()).collect();

    let mut widths: Vec<usize> = columns.iter().map(|c| c.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut output = String::new();
    push_row(&mut output, columns.iter().map(|c| c.to_string()), &widths);

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut output, separator.into_iter(), &widths);

    for row in rows {
        push_row(&mut output, row.into_iter(), &widths);
    }

    output
}

fn push_row(output: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let cells: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    output.push_str(cells.join("  ").trim_end());
    output.push('\n');
}
