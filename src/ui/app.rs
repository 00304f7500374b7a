use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::store::{RecordStore, SortKey};

use super::forms::{ConfirmStudentDelete, StudentField, StudentForm};
use super::helpers::{centered_rect, header_row, record_detail_lines, record_row};
use super::screens::{RecordsScreen, ScoresScreen};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;

/// High-level navigation states. The records table is the home screen; the
/// scores screen is a read-only detour built from a snapshot of the extremes.
enum Screen {
    Records,
    Scores(ScoresScreen),
}

/// Fine-grained modes layered over the current screen.
enum Mode {
    Normal,
    AddingStudent(StudentForm),
    EditingStudent { number: String, form: StudentForm },
    ConfirmStudentDelete(ConfirmStudentDelete),
    Searching(SearchState),
    SortMenu(SortMenuState),
    Lookup(LookupState),
}

/// State for an active inline search.
struct SearchState {
    query: String,
}

/// State for the individual-student lookup prompt.
struct LookupState {
    query: String,
}

/// Selection state for the sort popup.
struct SortMenuState {
    selected: usize,
}

impl SortMenuState {
    fn new(current: Option<SortKey>) -> Self {
        let selected = current
            .and_then(|key| SortKey::ALL.iter().position(|candidate| *candidate == key))
            .unwrap_or(0);
        Self { selected }
    }

    fn move_selection(&mut self, offset: isize) {
        let len = SortKey::ALL.len() as isize;
        let mut new = self.selected as isize + offset;
        if new < 0 {
            new = 0;
        }
        if new >= len {
            new = len - 1;
        }
        self.selected = new as usize;
    }
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
pub struct App {
    store: RecordStore,
    records: RecordsScreen,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(store: RecordStore, startup_warning: Option<String>) -> Self {
        let records = RecordsScreen::new(&store);
        let status = startup_warning.map(|text| StatusMessage {
            text,
            kind: StatusKind::Error,
        });
        Self {
            store,
            records,
            screen: Screen::Records,
            mode: Mode::Normal,
            status,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mut mode = mem::replace(&mut self.mode, Mode::Normal);

        mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::AddingStudent(form) => self.handle_add_student(code, form)?,
            Mode::EditingStudent { number, form } => self.handle_edit_student(code, number, form)?,
            Mode::ConfirmStudentDelete(confirm) => {
                self.handle_confirm_student_delete(code, confirm)?
            }
            Mode::Searching(state) => self.handle_search(code, state)?,
            Mode::SortMenu(state) => self.handle_sort_menu(code, state)?,
            Mode::Lookup(state) => self.handle_lookup(code, state)?,
        };

        self.mode = mode;
        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match self.screen {
            Screen::Records => {
                match code {
                    KeyCode::Char('q') => {
                        *exit = true;
                    }
                    KeyCode::Esc => {
                        if self.records.filter.is_some() || self.records.pinned.is_some() {
                            self.records.clear_view(&self.store);
                            self.clear_status();
                        } else {
                            *exit = true;
                        }
                    }
                    KeyCode::Up => self.records.move_selection(-1),
                    KeyCode::Down => self.records.move_selection(1),
                    KeyCode::PageUp => self.records.move_selection(-5),
                    KeyCode::PageDown => self.records.move_selection(5),
                    KeyCode::Home => self.records.select_first(),
                    KeyCode::End => self.records.select_last(),
                    KeyCode::Char('f') | KeyCode::Char('F') | KeyCode::Char('/') => {
                        return Ok(Mode::Searching(SearchState {
                            query: String::new(),
                        }));
                    }
                    KeyCode::Char('o') | KeyCode::Char('O') => {
                        return Ok(Mode::SortMenu(SortMenuState::new(self.records.sort)));
                    }
                    KeyCode::Char('i') | KeyCode::Char('I') => {
                        return Ok(Mode::Lookup(LookupState {
                            query: String::new(),
                        }));
                    }
                    KeyCode::Char('s') | KeyCode::Char('S') => match self.store.extremes() {
                        Ok(extremes) => {
                            self.clear_status();
                            self.screen = Screen::Scores(ScoresScreen::new(extremes));
                        }
                        Err(err) => self.set_status(err.to_string(), StatusKind::Error),
                    },
                    KeyCode::Char('+') => {
                        self.clear_status();
                        return Ok(Mode::AddingStudent(StudentForm::default()));
                    }
                    KeyCode::Char('e') | KeyCode::Char('E') => {
                        if let Some(record) = self.records.current_record().cloned() {
                            self.clear_status();
                            return Ok(Mode::EditingStudent {
                                number: record.number.clone(),
                                form: StudentForm::from_record(&record),
                            });
                        } else {
                            self.set_status("No student selected to edit.", StatusKind::Error);
                        }
                    }
                    KeyCode::Char('-') => {
                        if let Some(record) = self.records.current_record().cloned() {
                            self.clear_status();
                            return Ok(Mode::ConfirmStudentDelete(ConfirmStudentDelete::from(
                                &record,
                            )));
                        } else {
                            self.set_status("No student selected to remove.", StatusKind::Error);
                        }
                    }
                    _ => {}
                }
                Ok(Mode::Normal)
            }
            Screen::Scores(_) => {
                match code {
                    KeyCode::Char('q') => {
                        *exit = true;
                    }
                    KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('S') => {
                        self.clear_status();
                        self.screen = Screen::Records;
                    }
                    _ => {}
                }
                Ok(Mode::Normal)
            }
        }
    }

    fn handle_add_student(&mut self, code: KeyCode, mut form: StudentForm) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Add student cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.previous_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.store.add(&form.draft()) {
                Ok(record) => {
                    self.refresh_records(Some(&record.number));
                    self.set_status(format!("Added student {}.", record.number), StatusKind::Info);
                    keep_open = false;
                }
                Err(err) => {
                    let message = err.to_string();
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::AddingStudent(form))
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_edit_student(
        &mut self,
        code: KeyCode,
        number: String,
        mut form: StudentForm,
    ) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Edit cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.previous_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.store.update(&number, &form.draft()) {
                Ok(record) => {
                    self.refresh_records(Some(&record.number));
                    self.set_status(
                        format!("Updated student {}.", record.number),
                        StatusKind::Info,
                    );
                    keep_open = false;
                }
                Err(err) => {
                    let message = err.to_string();
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::EditingStudent { number, form })
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_confirm_student_delete(
        &mut self,
        code: KeyCode,
        confirm: ConfirmStudentDelete,
    ) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.store.delete(&confirm.number) {
                    Ok(removed) => {
                        self.refresh_records(None);
                        self.set_status(
                            format!("Deleted student {}.", removed.number),
                            StatusKind::Info,
                        );
                        Ok(Mode::Normal)
                    }
                    Err(err) => {
                        self.set_status(err.to_string(), StatusKind::Error);
                        Ok(Mode::ConfirmStudentDelete(confirm))
                    }
                }
            }
            _ => Ok(Mode::ConfirmStudentDelete(confirm)),
        }
    }

    fn handle_search(&mut self, code: KeyCode, mut state: SearchState) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.records.set_filter(None, &self.store);
                return Ok(Mode::Normal);
            }
            KeyCode::Enter => {
                return Ok(Mode::Normal);
            }
            KeyCode::Up => {
                self.records.move_selection(-1);
                return Ok(Mode::Searching(state));
            }
            KeyCode::Down => {
                self.records.move_selection(1);
                return Ok(Mode::Searching(state));
            }
            KeyCode::PageUp => {
                self.records.move_selection(-5);
                return Ok(Mode::Searching(state));
            }
            KeyCode::PageDown => {
                self.records.move_selection(5);
                return Ok(Mode::Searching(state));
            }
            KeyCode::Home => {
                self.records.select_first();
                return Ok(Mode::Searching(state));
            }
            KeyCode::End => {
                self.records.select_last();
                return Ok(Mode::Searching(state));
            }
            KeyCode::Backspace => {
                state.query.pop();
            }
            KeyCode::Char(ch) => {
                if !ch.is_control() {
                    state.query.push(ch);
                }
            }
            _ => {}
        }

        if state.query.trim().is_empty() {
            self.records.set_filter(None, &self.store);
        } else {
            self.records
                .set_filter(Some(state.query.clone()), &self.store);
        }

        Ok(Mode::Searching(state))
    }

    fn handle_sort_menu(&mut self, code: KeyCode, mut state: SortMenuState) -> Result<Mode> {
        match code {
            KeyCode::Esc => Ok(Mode::Normal),
            KeyCode::Up => {
                state.move_selection(-1);
                Ok(Mode::SortMenu(state))
            }
            KeyCode::Down => {
                state.move_selection(1);
                Ok(Mode::SortMenu(state))
            }
            KeyCode::Home => {
                state.selected = 0;
                Ok(Mode::SortMenu(state))
            }
            KeyCode::End => {
                state.selected = SortKey::ALL.len() - 1;
                Ok(Mode::SortMenu(state))
            }
            KeyCode::Enter => {
                let key = SortKey::ALL[state.selected];
                self.records.set_sort(Some(key), &self.store);
                self.set_status(format!("Sorted by {}.", key.label()), StatusKind::Info);
                Ok(Mode::Normal)
            }
            _ => Ok(Mode::SortMenu(state)),
        }
    }

    fn handle_lookup(&mut self, code: KeyCode, mut state: LookupState) -> Result<Mode> {
        match code {
            KeyCode::Esc => return Ok(Mode::Normal),
            KeyCode::Enter => {
                let query = state.query.trim().to_string();
                if query.is_empty() {
                    self.set_status("Enter a name or student number.", StatusKind::Error);
                    return Ok(Mode::Lookup(state));
                }
                let matches = self.store.exact_lookup(&query);
                if matches.is_empty() {
                    self.set_status("No matching student found.", StatusKind::Error);
                    return Ok(Mode::Lookup(state));
                }
                let message = if matches.len() == 1 {
                    format!("Showing student {}.", matches[0].number)
                } else {
                    format!("Showing {} matching students.", matches.len())
                };
                self.records.set_pinned(Some(query), &self.store);
                self.set_status(message, StatusKind::Info);
                return Ok(Mode::Normal);
            }
            KeyCode::Backspace => {
                state.query.pop();
            }
            KeyCode::Char(ch) => {
                if !ch.is_control() {
                    state.query.push(ch);
                }
            }
            _ => {}
        }

        Ok(Mode::Lookup(state))
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Records => self.draw_records(frame, content_area),
            Screen::Scores(scores) => self.draw_scores(frame, content_area, scores),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::AddingStudent(form) => self.draw_student_form(frame, area, "Add Student", form),
            Mode::EditingStudent { form, .. } => {
                self.draw_student_form(frame, area, "Edit Student", form)
            }
            Mode::ConfirmStudentDelete(confirm) => self.draw_confirm_student(frame, area, confirm),
            Mode::Searching(state) => {
                self.draw_input_bar(frame, area, "Search", "Search: ", &state.query)
            }
            Mode::Lookup(state) => {
                self.draw_input_bar(frame, area, "Individual Student", "Lookup: ", &state.query)
            }
            Mode::SortMenu(state) => self.draw_sort_menu(frame, area, state),
            Mode::Normal => {}
        }
    }

    fn draw_records(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.records_title());

        if self.store.is_empty() {
            let message = Paragraph::new("No student records yet. Press '+' to add one.")
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, chunks[0]);
        } else if self.records.rows.is_empty() {
            let message = Paragraph::new("No students match the current view.")
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, chunks[0]);
        } else {
            frame.render_widget(block.clone(), chunks[0]);
            let inner = block.inner(chunks[0]);
            if inner.height >= 2 {
                let inner_chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(1), Constraint::Min(1)])
                    .split(inner);

                let header = Paragraph::new(Span::styled(
                    header_row(),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                frame.render_widget(header, inner_chunks[0]);

                let items: Vec<ListItem> = self
                    .records
                    .rows
                    .iter()
                    .map(|record| ListItem::new(record_row(record)))
                    .collect();
                let list = List::new(items).highlight_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                );
                let mut list_state = ListState::default();
                list_state.select(Some(self.records.selected));
                frame.render_stateful_widget(list, inner_chunks[1], &mut list_state);
            }
        }

        let summary = self.store.summary();
        let summary_line = format!(
            "Total Students: {}   |   Average Percentage: {:.2}%",
            summary.count, summary.average_percentage
        );
        frame.render_widget(
            Paragraph::new(Span::styled(summary_line, Style::default().fg(Color::Gray))),
            chunks[1],
        );
    }

    fn records_title(&self) -> String {
        let mut title = String::from("Student Records");
        if let Some(identifier) = &self.records.pinned {
            title.push_str(&format!(" • lookup: {}", identifier));
        } else if let Some(filter) = &self.records.filter {
            title.push_str(&format!(" • search: {}", filter));
        }
        if let Some(key) = self.records.sort {
            title.push_str(&format!(" • sorted by {}", key.label()));
        }
        title
    }

    fn draw_scores(&self, frame: &mut Frame, area: Rect, scores: &ScoresScreen) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let highest = Paragraph::new(record_detail_lines(&scores.highest))
            .block(
                Block::default().borders(Borders::ALL).title(Span::styled(
                    "Highest Scoring Student",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(highest, chunks[0]);

        let lowest = Paragraph::new(record_detail_lines(&scores.lowest))
            .block(
                Block::default().borders(Borders::ALL).title(Span::styled(
                    "Lowest Scoring Student",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(lowest, chunks[1]);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_input_bar(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        prompt: &str,
        query: &str,
    ) {
        let height = 3u16.min(area.height);
        let popup_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height,
        };
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title.to_string());
        let paragraph = Paragraph::new(Span::raw(format!("{prompt}{query}")))
            .block(block.clone())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);

        let inner = block.inner(popup_area);
        let cursor_x = inner.x + prompt.len() as u16 + query.chars().count() as u16;
        let cursor_y = inner.y;
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match (&self.screen, &self.mode) {
            (_, Mode::SortMenu(_)) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Navigate   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Apply   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (_, Mode::Searching(_)) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Keep Filter   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Clear"),
            ]),
            (_, Mode::Lookup(_)) => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Look Up   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (Screen::Scores(_), _) => Line::from(vec![
                Span::styled("[s]", key_style),
                Span::raw(" Records   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Back   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            _ => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[f]", key_style),
                Span::raw(" Search   "),
                Span::styled("[o]", key_style),
                Span::raw(" Sort   "),
                Span::styled("[i]", key_style),
                Span::raw(" Lookup   "),
                Span::styled("[s]", key_style),
                Span::raw(" Scores   "),
                Span::styled("[+]", key_style),
                Span::raw(" Add   "),
                Span::styled("[-]", key_style),
                Span::raw(" Delete   "),
                Span::styled("[e]", key_style),
                Span::raw(" Edit   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn draw_student_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &StudentForm) {
        let popup_area = centered_rect(60, 60, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(title.to_string())
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines: Vec<Line> = StudentField::ALL
            .iter()
            .map(|field| form.build_line(*field))
            .collect();
        lines.push(Line::from(""));

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save • Tab to switch • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let prefix = form.active.label().len() as u16 + 2;
        let cursor_x = inner.x + prefix + form.value_len(form.active) as u16;
        let cursor_y = inner.y + form.active.index() as u16;
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn draw_confirm_student(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmStudentDelete) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Confirm Removal")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!(
                "Remove student {} ({})?",
                confirm.number, confirm.name
            )),
            Line::from("The record is rewritten out of the marks file."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_sort_menu(&self, frame: &mut Frame, area: Rect, state: &SortMenuState) {
        let popup_area = centered_rect(40, 50, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Sort Records").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let items: Vec<ListItem> = SortKey::ALL
            .iter()
            .map(|key| ListItem::new(key.label()))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::NONE))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        list_state.select(Some(state.selected));
        frame.render_stateful_widget(list, inner, &mut list_state);
    }

    fn refresh_records(&mut self, focus_number: Option<&str>) {
        self.records.refresh(&self.store);
        if let Some(number) = focus_number {
            self.records.focus_number(number);
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}
