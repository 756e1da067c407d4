use acurex_core::Table;

const COLUMN_GAP: &str = "  ";

/// Renders up to `limit` rows as left-aligned text columns.
pub fn render_table(table: &Table, limit: usize) -> String {
    let shown: Vec<&[String]> = table.records().take(limit).collect();

    let mut widths: Vec<usize> = table
        .columns()
        .iter()
        .map(|column| column.chars().count())
        .collect();
    for record in &shown {
        for (width, value) in widths.iter_mut().zip(record.iter()) {
            *width = (*width).max(value.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, table.columns(), &widths);
    for record in &shown {
        push_line(&mut out, record, &widths);
    }
    let hidden = table.len().saturating_sub(shown.len());
    if hidden > 0 {
        out.push_str(&format!("... {} more row(s)\n", hidden));
    }
    out
}

fn push_line(out: &mut String, values: &[String], widths: &[usize]) {
    let cells: Vec<String> = values
        .iter()
        .zip(widths)
        .map(|(value, &width)| format!("{:<width$}", value, width = width))
        .collect();
    out.push_str(cells.join(COLUMN_GAP).trim_end());
    out.push('\n');
}
