//! Table rendering utilities for CLI outputs.

use super::colors::visible_width;
use super::formatting::pad_right;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: visible_width(header),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator_char: char,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator_char: '-',
        }
    }

    pub fn with_separator(mut self, c: char) -> Self {
        self.separator_char = c;
        self
    }

    /// Add a row; columns grow to fit the widest visible cell.
    /// Missing cells render empty, extra cells are ignored.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(visible_width(cell));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|c| pad_right(&c.header, c.width))
            .collect();
        out.push_str(header.join(" | ").trim_end());
        out.push('\n');

        // Separator
        let total = self.columns.iter().map(|c| c.width).sum::<usize>()
            + 3 * self.columns.len().saturating_sub(1);
        out.push_str(&self.separator_char.to_string().repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| pad_right(row.get(i).map(String::as_str).unwrap_or(""), col.width))
                .collect();
            out.push_str(cells.join(" | ").trim_end());
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_grow_to_widest_cell() {
        let mut table = Table::new(vec![Column::new("ID"), Column::new("Title")]);
        table.add_row(vec!["1".into(), "Event Foo".into()]);
        table.add_row(vec!["12".into(), "x".into()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "ID | Title");
        assert_eq!(lines[1], "-".repeat(2 + 3 + 9));
        assert_eq!(lines[2], "1  | Event Foo");
        assert_eq!(lines[3], "12 | x");
    }

    #[test]
    fn custom_separator() {
        let table = Table::new(vec![Column::new("A")]).with_separator('=');
        assert_eq!(table.render().lines().nth(1), Some("="));
    }
}
