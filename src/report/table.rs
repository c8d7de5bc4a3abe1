//! Plain-text table rendering.

use console::{measure_text_width, pad_str, style, Alignment};

/// Spaces between columns.
const COLUMN_GAP: &str = "  ";

/// Extra width given to every header.
const HEADER_PADDING: usize = 2;

/// A single table column with its cells.
#[derive(Debug, Clone)]
pub struct Column {
    header: &'static str,
    align: Alignment,
    cells: Vec<String>,
}

impl Column {
    /// A left-aligned text column.
    pub fn text(header: &'static str, cells: Vec<String>) -> Self {
        Self {
            header,
            align: Alignment::Left,
            cells,
        }
    }

    /// A right-aligned numeric column.
    pub fn numeric(header: &'static str, cells: Vec<String>) -> Self {
        Self {
            header,
            align: Alignment::Right,
            cells,
        }
    }

    fn width(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| measure_text_width(cell))
            .chain(std::iter::once(measure_text_width(self.header) + HEADER_PADDING))
            .max()
            .unwrap_or(0)
    }
}

/// Render columns as a header, a dashed rule and one line per row.
///
/// Headers are bold when stdout supports it. Trailing spaces are trimmed.
pub fn render(columns: &[Column]) -> String {
    let widths: Vec<usize> = columns.iter().map(Column::width).collect();
    let rows = columns.iter().map(|column| column.cells.len()).max().unwrap_or(0);
    let mut lines = Vec::with_capacity(rows + 2);

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(column, &width)| {
            let padded = pad_str(column.header, width, column.align, None);
            style(padded).bold().to_string()
        })
        .collect();
    lines.push(header.join(COLUMN_GAP));

    let rule: Vec<String> = widths.iter().map(|&width| "-".repeat(width)).collect();
    lines.push(rule.join(COLUMN_GAP));

    for row in 0..rows {
        let cells: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(column, &width)| {
                let cell = column.cells.get(row).map(String::as_str).unwrap_or("");
                pad_str(cell, width, column.align, None).into_owned()
            })
            .collect();
        lines.push(cells.join(COLUMN_GAP));
    }

    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_aligns_columns() {
        console::set_colors_enabled(false);
        let columns = [
            Column::numeric("N", vec!["1".to_string(), "10".to_string()]),
            Column::text("Name", vec!["a".to_string(), "longer".to_string()]),
        ];

        let rendered = render(&columns);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "  N  Name");
        assert_eq!(lines[1], "---  ------");
        assert_eq!(lines[2], "  1  a");
        assert_eq!(lines[3], " 10  longer");
    }

    #[test]
    fn test_short_column_renders_blank_cells() {
        console::set_colors_enabled(false);
        let columns = [
            Column::text("Name", vec!["a".to_string(), "b".to_string()]),
            Column::numeric("Craft", vec![String::new(), "3".to_string()]),
        ];

        let rendered = render(&columns);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[2], "a");
        assert_eq!(lines[3], "b             3");
    }
}
