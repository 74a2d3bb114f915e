//! Plain-text table rendering for booking listings and day schedules.

pub struct Column {
    header: &'static str,
    width: usize,
}

impl Column {
    pub fn new(header: &'static str, width: usize) -> Self {
        Self { header, width }
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    /// Render with a rule between header and body, drawn by repeating the
    /// separator string from the config file.
    pub fn render(&self, separator: &str) -> String {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&format!("{:<width$} ", col.header, width = col.width));
        }
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        let rule = if separator.is_empty() { "-" } else { separator };
        out.push_str(&rule.repeat(total));
        out.push('\n');

        for row in &self.rows {
            for (cell, col) in row.iter().zip(&self.columns) {
                out.push_str(&format!("{:<width$} ", cell, width = col.width));
            }
            out.push('\n');
        }

        out
    }
}
