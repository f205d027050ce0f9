//! Table rendering for formatted output.

/// A simple box-drawn table.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: &[&str]) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| h.chars().count()).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row. Cells beyond the header count are dropped.
    pub fn add_row<S: AsRef<str>>(&mut self, row: &[S]) {
        let row: Vec<String> = row
            .iter()
            .take(self.headers.len())
            .map(|s| s.as_ref().to_string())
            .collect();

        for (width, cell) in self.column_widths.iter_mut().zip(&row) {
            *width = (*width).max(cell.chars().count());
        }

        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut lines = vec![
            self.render_border('┌', '┬', '┐'),
            self.render_row(&self.headers),
            self.render_border('├', '┼', '┤'),
        ];
        lines.extend(self.rows.iter().map(|row| self.render_row(row)));
        lines.push(self.render_border('└', '┴', '┘'));
        lines.join("\n")
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self
            .column_widths
            .iter()
            .map(|width| "─".repeat(width + 2))
            .collect();
        format!("{}{}{}", left, segments.join(&mid.to_string()), right)
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::from("│");

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
            s.push_str(&format!(" {:width$} │", cell, width = width));
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_empty() {
        let table = Table::new(&["Role", "Label"]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);

        let output = table.render();
        assert!(output.contains("Role"));
        assert!(output.contains("Label"));
    }

    #[test]
    fn table_with_rows() {
        let mut table = Table::new(&["Role", "Label", "Path"]);
        table.add_row(&["python", "py", "C:\\Windows\\py.exe"]);
        table.add_row(&["wsl", "-", "not found"]);

        assert_eq!(table.row_count(), 2);
        let output = table.render();
        assert!(output.contains("C:\\Windows\\py.exe"));
        assert!(output.contains("not found"));
    }

    #[test]
    fn table_render_line_count() {
        let mut table = Table::new(&["A", "B"]);
        table.add_row(&["1", "2"]);
        table.add_row(&["3", "4"]);
        table.add_row(&["5", "6"]);

        // top border, header, separator, 3 rows, bottom border
        assert_eq!(table.render().lines().count(), 7);
    }

    #[test]
    fn table_rows_are_aligned() {
        let mut table = Table::new(&["A"]);
        table.add_row(&["longer_value"]);
        table.add_row(&["x"]);

        let output = table.render();
        let widths: Vec<usize> = output.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn table_handles_missing_and_extra_cells() {
        let mut table = Table::new(&["A", "B", "C"]);
        table.add_row(&["only", "two"]);
        table.add_row(&["1", "2", "3", "dropped"]);

        let output = table.render();
        assert!(output.contains("only"));
        assert!(!output.contains("dropped"));
        assert!(output.contains("┬"));
        assert!(output.contains("┼"));
        assert!(output.contains("┴"));
    }
}
