//! Recent readings table

use crate::NO_DATA_TEXT;
use polar_dash_core::{Displayer, EngineSnapshot};
use polar_dash_types::ReadingRow;

/// Aligned text grid of the tabular projection, oldest row first
pub struct TableDisplayer;

impl TableDisplayer {
    pub fn new() -> Self {
        Self
    }

    fn cells(row: &ReadingRow) -> [String; 3] {
        [
            format!("{:.1}", row.temperature),
            format!("{:.1}", row.humidity),
            row.timestamp.clone(),
        ]
    }
}

impl Default for TableDisplayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Displayer for TableDisplayer {
    fn id(&self) -> &str {
        "table"
    }

    fn name(&self) -> &str {
        "Recent Climate Data Table"
    }

    fn render(&self, snapshot: &EngineSnapshot) -> String {
        let table = snapshot.table();
        let headers: Vec<String> = table
            .columns()
            .iter()
            .map(|c| {
                if c.unit.is_empty() {
                    c.name.clone()
                } else {
                    format!("{} ({})", c.name, c.unit)
                }
            })
            .collect();
        let rows: Vec<[String; 3]> = table.rows().iter().map(Self::cells).collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let format_line = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:>width$}", cell, width = *width))
                .collect::<Vec<_>>()
                .join(" | ")
        };

        let mut lines = vec![self.name().to_string(), format_line(headers.as_slice())];
        if rows.is_empty() {
            lines.push(format!("  {}", NO_DATA_TEXT));
        }
        lines.extend(rows.iter().map(|row| format_line(&row[..])));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polar_dash_core::Reading;

    #[test]
    fn test_renders_rows_in_history_order() {
        let history = vec![
            Reading::parse(-27.0, 80.0, "2024-01-01 00:00:00").unwrap(),
            Reading::parse(-26.0, 82.5, "2024-01-01 00:00:10").unwrap(),
        ];
        let rendered = TableDisplayer::new().render(&EngineSnapshot::from_history(2, history));
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("Temperature (°C)"));
        assert!(lines[2].contains("-27.0") && lines[2].contains("00:00:00"));
        assert!(lines[3].contains("82.5") && lines[3].contains("00:00:10"));
    }

    #[test]
    fn test_empty_table() {
        let rendered = TableDisplayer::new().render(&EngineSnapshot::empty());
        assert!(rendered.contains(NO_DATA_TEXT));
        assert!(rendered.contains("Timestamp"));
    }
}
