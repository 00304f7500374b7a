use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::StudentRecord;

/// Fixed column widths shared by the table header and every record row.
/// Names longer than their column are truncated so the mark columns stay
/// aligned.
pub(crate) fn header_row() -> String {
    format!(
        "{:<8} {:<20} {:>4} {:>5} {:>6} {:>8} {:>6}",
        "Number", "Name", "CW", "Exam", "Total", "Percent", "Grade"
    )
}

/// Render one record as a fixed-width table row.
pub(crate) fn record_row(record: &StudentRecord) -> String {
    format!(
        "{:<8.8} {:<20.20} {:>4} {:>5} {:>6} {:>8} {:>6}",
        record.number,
        record.name,
        record.coursework_total(),
        record.exam,
        record.overall_total(),
        format!("{:.1}%", record.percentage()),
        record.grade().to_string(),
    )
}

/// Label and value lines for the extreme-score cards.
pub(crate) fn record_detail_lines(record: &StudentRecord) -> Vec<Line<'static>> {
    let label_style = Style::default().fg(Color::Gray);
    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Name: ", label_style),
            Span::raw(record.name.clone()),
        ]),
        Line::from(vec![
            Span::styled("Number: ", label_style),
            Span::raw(record.number.clone()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Coursework Total: ", label_style),
            Span::raw(record.coursework_total().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Exam Mark: ", label_style),
            Span::raw(record.exam.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Overall Total: ", label_style),
            Span::raw(record.overall_total().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Percentage: ", label_style),
            Span::raw(format!("{:.1}%", record.percentage())),
        ]),
        Line::from(vec![
            Span::styled("Grade: ", label_style),
            Span::raw(record.grade().to_string()),
        ]),
    ]
}

/// Rectangle covering the given percentage of `area`, centered within it.
/// Modal popups render into this.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_rows_line_up_with_the_header() {
        let record = StudentRecord::parse_line("42,Grace,10,20,15,50").unwrap();
        assert_eq!(header_row().len(), record_row(&record).len());
    }

    #[test]
    fn long_names_are_truncated_to_the_column() {
        let record =
            StudentRecord::parse_line("1,An Extremely Long Student Name,10,20,15,50").unwrap();
        assert_eq!(header_row().len(), record_row(&record).len());
        assert!(record_row(&record).contains("An Extremely Long St"));
    }
}
