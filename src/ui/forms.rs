use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::StudentRecord;
use crate::store::StudentDraft;

/// Internal representation of the student form fields. Values stay raw text
/// until submission; the store owns validation so add and edit share one
/// set of rules.
#[derive(Default, Clone)]
pub(crate) struct StudentForm {
    pub(crate) number: String,
    pub(crate) name: String,
    pub(crate) coursework: [String; 3],
    pub(crate) exam: String,
    pub(crate) active: StudentField,
    pub(crate) error: Option<String>,
}

/// Fields available within the student form, in tab order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum StudentField {
    Number,
    Name,
    Coursework1,
    Coursework2,
    Coursework3,
    Exam,
}

impl Default for StudentField {
    fn default() -> Self {
        StudentField::Number
    }
}

impl StudentField {
    pub(crate) const ALL: [StudentField; 6] = [
        StudentField::Number,
        StudentField::Name,
        StudentField::Coursework1,
        StudentField::Coursework2,
        StudentField::Coursework3,
        StudentField::Exam,
    ];

    pub(crate) fn label(&self) -> &'static str {
        match self {
            StudentField::Number => "Number",
            StudentField::Name => "Name",
            StudentField::Coursework1 => "Coursework 1",
            StudentField::Coursework2 => "Coursework 2",
            StudentField::Coursework3 => "Coursework 3",
            StudentField::Exam => "Exam",
        }
    }

    /// Row index of the field inside the form popup.
    pub(crate) fn index(&self) -> usize {
        StudentField::ALL
            .iter()
            .position(|field| field == self)
            .unwrap_or(0)
    }
}

impl StudentForm {
    /// Populate the form from an existing record when editing. The three
    /// coursework components come straight from the store, so editing never
    /// collapses the original split.
    pub(crate) fn from_record(record: &StudentRecord) -> Self {
        Self {
            number: record.number.clone(),
            name: record.name.clone(),
            coursework: [
                record.coursework[0].to_string(),
                record.coursework[1].to_string(),
                record.coursework[2].to_string(),
            ],
            exam: record.exam.to_string(),
            active: StudentField::Number,
            error: None,
        }
    }

    /// Move focus to the next field in tab order, wrapping at the end.
    pub(crate) fn next_field(&mut self) {
        let next = (self.active.index() + 1) % StudentField::ALL.len();
        self.active = StudentField::ALL[next];
    }

    /// Move focus to the previous field, wrapping at the start.
    pub(crate) fn previous_field(&mut self) {
        let len = StudentField::ALL.len();
        let previous = (self.active.index() + len - 1) % len;
        self.active = StudentField::ALL[previous];
    }

    /// Append a character to the active field, refusing input the record
    /// format cannot hold: number and mark fields take digits only, the
    /// name refuses digits and the comma that delimits the file.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        match self.active {
            StudentField::Name => {
                if !ch.is_control() && !ch.is_ascii_digit() && ch != ',' {
                    self.name.push(ch);
                    true
                } else {
                    false
                }
            }
            _ => {
                if ch.is_ascii_digit() {
                    self.value_mut().push(ch);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        self.value_mut().pop();
    }

    /// Bundle the raw field text for the store to validate.
    pub(crate) fn draft(&self) -> StudentDraft {
        StudentDraft {
            number: self.number.clone(),
            name: self.name.clone(),
            coursework: self.coursework.clone(),
            exam: self.exam.clone(),
        }
    }

    /// Render a single line for the form widget.
    pub(crate) fn build_line(&self, field: StudentField) -> Line<'static> {
        let value = self.value(field);
        let is_active = self.active == field;

        let display = if value.is_empty() {
            "<required>".to_string()
        } else {
            value.to_string()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{}: ", field.label())),
            Span::styled(display, style),
        ])
    }

    /// Character count of the requested field, used to place the cursor.
    pub(crate) fn value_len(&self, field: StudentField) -> usize {
        self.value(field).chars().count()
    }

    fn value(&self, field: StudentField) -> &str {
        match field {
            StudentField::Number => &self.number,
            StudentField::Name => &self.name,
            StudentField::Coursework1 => &self.coursework[0],
            StudentField::Coursework2 => &self.coursework[1],
            StudentField::Coursework3 => &self.coursework[2],
            StudentField::Exam => &self.exam,
        }
    }

    fn value_mut(&mut self) -> &mut String {
        match self.active {
            StudentField::Number => &mut self.number,
            StudentField::Name => &mut self.name,
            StudentField::Coursework1 => &mut self.coursework[0],
            StudentField::Coursework2 => &mut self.coursework[1],
            StudentField::Coursework3 => &mut self.coursework[2],
            StudentField::Exam => &mut self.exam,
        }
    }
}

#[derive(Clone)]
pub(crate) struct ConfirmStudentDelete {
    pub(crate) number: String,
    pub(crate) name: String,
}

impl ConfirmStudentDelete {
    /// Build the confirmation state from the record being considered.
    pub(crate) fn from(record: &StudentRecord) -> Self {
        Self {
            number: record.number.clone(),
            name: record.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_fields_accept_digits_only() {
        let mut form = StudentForm::default();
        form.active = StudentField::Exam;
        assert!(form.push_char('9'));
        assert!(!form.push_char('x'));
        assert!(!form.push_char('-'));
        assert_eq!(form.exam, "9");
    }

    #[test]
    fn name_field_refuses_digits_and_commas() {
        let mut form = StudentForm::default();
        form.active = StudentField::Name;
        assert!(form.push_char('A'));
        assert!(form.push_char(' '));
        assert!(!form.push_char('7'));
        assert!(!form.push_char(','));
        assert_eq!(form.name, "A ");
    }

    #[test]
    fn field_cycle_wraps_both_ways() {
        let mut form = StudentForm::default();
        for _ in 0..StudentField::ALL.len() {
            form.next_field();
        }
        assert_eq!(form.active, StudentField::Number);
        form.previous_field();
        assert_eq!(form.active, StudentField::Exam);
    }

    #[test]
    fn from_record_keeps_the_coursework_split() {
        let record = StudentRecord::parse_line("7,Dana,7,11,13,80").unwrap();
        let form = StudentForm::from_record(&record);
        assert_eq!(form.coursework, ["7", "11", "13"]);
        let draft = form.draft();
        assert_eq!(draft.number, "7");
        assert_eq!(draft.coursework, ["7", "11", "13"]);
    }
}
