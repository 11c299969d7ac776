//! `deskkit todo-tui`: full-screen to-do list over todo_gui.json.
//!
//! Forms reject bad priority/due-date input instead of dropping it.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use deskkit_core::{FieldPolicy, RecordStore, Task, TaskForm, paths::TODO_TUI_FILE};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{self, Stdout};

use crate::prompt::store_error_message;
use crate::todo_cmd::task_line;

const FIELD_LABELS: [&str; 4] = ["Description", "Priority", "Due date", "Tags"];
const COMPLETED_FIELD: usize = FIELD_LABELS.len();

#[derive(Debug, Clone, PartialEq, Eq)]
struct FormState {
    /// Position being edited; None when adding.
    editing: Option<usize>,
    form: TaskForm,
    focus: usize,
}

impl FormState {
    fn adding() -> Self {
        Self {
            editing: None,
            form: TaskForm::default(),
            focus: 0,
        }
    }

    fn editing(position: usize, task: &Task) -> Self {
        Self {
            editing: Some(position),
            form: TaskForm::from_task(task),
            focus: 0,
        }
    }

    /// The completed checkbox only appears when editing.
    fn field_count(&self) -> usize {
        if self.editing.is_some() {
            COMPLETED_FIELD + 1
        } else {
            COMPLETED_FIELD
        }
    }

    fn text_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            0 => Some(&mut self.form.description),
            1 => Some(&mut self.form.priority),
            2 => Some(&mut self.form.due_date),
            3 => Some(&mut self.form.tags),
            _ => None,
        }
    }

    fn text_field(&self, i: usize) -> &str {
        match i {
            0 => &self.form.description,
            1 => &self.form.priority,
            2 => &self.form.due_date,
            _ => &self.form.tags,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Browse,
    Form(FormState),
    ConfirmDelete(usize),
}

struct Status {
    text: String,
    error: bool,
}

pub struct App {
    store: RecordStore<Task>,
    list: ListState,
    mode: Mode,
    status: Status,
}

impl App {
    pub fn new(store: RecordStore<Task>) -> Self {
        let mut list = ListState::default();
        if !store.is_empty() {
            list.select(Some(0));
        }
        Self {
            store,
            list,
            mode: Mode::Browse,
            status: Status {
                text: String::new(),
                error: false,
            },
        }
    }

    fn info(&mut self, text: impl Into<String>) {
        self.status = Status {
            text: text.into(),
            error: false,
        };
    }

    fn error(&mut self, text: impl Into<String>) {
        self.status = Status {
            text: text.into(),
            error: true,
        };
    }

    fn selected(&self) -> Option<usize> {
        self.list.selected().filter(|&i| i < self.store.len())
    }

    fn select_clamped(&mut self, position: Option<usize>) {
        let len = self.store.len();
        self.list.select(match position {
            _ if len == 0 => None,
            Some(p) => Some(p.min(len - 1)),
            None => Some(0),
        });
    }

    /// Returns true when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match std::mem::replace(&mut self.mode, Mode::Browse) {
            Mode::Browse => return self.browse_key(code),
            Mode::Form(form) => self.form_key(form, code),
            Mode::ConfirmDelete(position) => self.confirm_key(position, code),
        }
        false
    }

    fn browse_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::Char('k') => {
                let p = self.selected().map(|p| p.saturating_sub(1));
                self.select_clamped(p);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let p = self.selected().map(|p| p + 1);
                self.select_clamped(p);
            }
            KeyCode::Char('a') => {
                self.mode = Mode::Form(FormState::adding());
                self.info("New task");
            }
            KeyCode::Char('e') | KeyCode::Enter => match self.selected() {
                Some(p) => {
                    self.mode = Mode::Form(FormState::editing(p, &self.store.records()[p]));
                    self.info("Editing task");
                }
                None => self.error("Please select a task to edit."),
            },
            KeyCode::Char(' ') | KeyCode::Char('c') => match self.selected() {
                Some(p) => match self.store.toggle_completed(p) {
                    Ok(true) => self.info("Marked complete"),
                    Ok(false) => self.info("Marked not complete"),
                    Err(e) => self.error(store_error_message(&e)),
                },
                None => self.error("Please select a task to mark as complete."),
            },
            KeyCode::Char('d') | KeyCode::Delete => match self.selected() {
                Some(p) => {
                    let description = self.store.records()[p].description.clone();
                    self.mode = Mode::ConfirmDelete(p);
                    self.info(format!(
                        "Are you sure you want to delete '{description}'? (y/n)"
                    ));
                }
                None => self.error("Please select a task to delete."),
            },
            KeyCode::Char('s') => match self.store.save() {
                Ok(()) => self.info("Tasks saved successfully!"),
                Err(e) => self.error(store_error_message(&e)),
            },
            _ => {}
        }
        false
    }

    fn form_key(&mut self, mut state: FormState, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.info("Cancelled");
                return;
            }
            KeyCode::Enter => {
                self.submit(state);
                return;
            }
            KeyCode::Tab | KeyCode::Down => {
                state.focus = (state.focus + 1) % state.field_count();
            }
            KeyCode::BackTab | KeyCode::Up => {
                state.focus = (state.focus + state.field_count() - 1) % state.field_count();
            }
            KeyCode::Char(' ') if state.focus == COMPLETED_FIELD => {
                state.form.completed = !state.form.completed;
            }
            KeyCode::Backspace => {
                if let Some(field) = state.text_field_mut() {
                    field.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = state.text_field_mut() {
                    field.push(c);
                }
            }
            _ => {}
        }
        self.mode = Mode::Form(state);
    }

    fn submit(&mut self, state: FormState) {
        let result = state.form.build(FieldPolicy::Reject).and_then(|task| match state.editing {
            Some(p) => self.store.update(p, task).map(|_| p),
            None => self.store.add(task),
        });
        match result {
            Ok(p) => {
                self.select_clamped(Some(p));
                self.info(if state.editing.is_some() {
                    "Task updated"
                } else {
                    "Task added"
                });
            }
            Err(e) => {
                self.error(store_error_message(&e));
                self.mode = Mode::Form(state);
            }
        }
    }

    fn confirm_key(&mut self, position: usize, code: KeyCode) {
        if !matches!(code, KeyCode::Char('y') | KeyCode::Char('Y')) {
            self.info("Deletion cancelled.");
            return;
        }
        match self.store.remove(position) {
            Ok(removed) => {
                self.select_clamped(Some(position));
                self.info(format!("Deleted '{}'", removed.description));
            }
            Err(e) => self.error(store_error_message(&e)),
        }
    }
}

pub fn run() -> Result<()> {
    let (store, err) = RecordStore::<Task>::open(TODO_TUI_FILE);
    let mut app = App::new(store);
    if let Some(e) = err {
        app.error(format!("{e}; starting with an empty list"));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key.code) {
                    break;
                }
            }
        }
    }
    Ok(())
}

fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let summary = app.store.summary();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "To-Do List",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  {} tasks, {} completed, {} pending  ({})",
                summary.total,
                summary.completed,
                summary.pending(),
                app.store.path().display()
            ),
            Style::default().fg(Color::Gray),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    let items: Vec<ListItem> = app
        .store
        .records()
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let style = if t.completed {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(task_line(i, t)).style(style)
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("tasks"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, body[0], &mut app.list);

    let details = Paragraph::new(details_text(app.selected().map(|p| &app.store.records()[p])))
        .block(Block::default().borders(Borders::ALL).title("details"))
        .wrap(Wrap { trim: false });
    f.render_widget(details, body[1]);

    let help = match app.mode {
        Mode::Browse => "a=add e=edit space=toggle d=delete s=save q=quit",
        Mode::Form(_) => "Tab=next field Enter=save Esc=cancel",
        Mode::ConfirmDelete(_) => "y=delete, any other key cancels",
    };
    let status_style = if app.status.error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(app.status.text.clone(), status_style),
        Span::raw("  "),
        Span::styled(help, Style::default().fg(Color::Gray)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[2]);

    if let Mode::Form(state) = &app.mode {
        draw_form(f, state);
    }
}

fn details_text(task: Option<&Task>) -> Text<'static> {
    let Some(t) = task else {
        return Text::from("No task selected.");
    };
    let or_na = |v: Option<String>| v.unwrap_or_else(|| "N/A".to_string());
    Text::from(vec![
        Line::from(format!("Description: {}", t.description)),
        Line::from(format!(
            "Completed: {}",
            if t.completed { "Yes" } else { "No" }
        )),
        Line::from(format!("Priority: {}", or_na(t.priority.map(|p| p.to_string())))),
        Line::from(format!("Due Date: {}", or_na(t.due_date.clone()))),
        Line::from(format!("Tags: {}", t.tags.join(", "))),
    ])
}

fn draw_form(f: &mut Frame, state: &FormState) {
    let area = centered(f.area(), 60, 11);
    f.render_widget(Clear, area);

    let mut lines = Vec::new();
    for (i, label) in FIELD_LABELS.iter().enumerate() {
        let focused = state.focus == i;
        let marker = if focused { "> " } else { "  " };
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{label:<12}"), style),
            Span::raw(state.text_field(i).to_string()),
        ]));
    }
    if state.editing.is_some() {
        let focused = state.focus == COMPLETED_FIELD;
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!(
                "{}[{}] Completed",
                if focused { "> " } else { "  " },
                if state.form.completed { "X" } else { " " }
            ),
            style,
        )));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Priority: High/Medium/Low  Due: YYYY-MM-DD  Tags: a, b",
        Style::default().fg(Color::Gray),
    )));

    let title = if state.editing.is_some() {
        "edit task"
    } else {
        "add task"
    };
    let form = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(form, area);
}

fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskkit_core::Priority;

    fn app_with(descriptions: &[&str]) -> App {
        let mut store = RecordStore::new("unused.json");
        for d in descriptions {
            store.add(Task::new(*d)).unwrap();
        }
        App::new(store)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn add_through_form() {
        let mut app = app_with(&[]);
        app.handle_key(KeyCode::Char('a'));
        type_text(&mut app, "Buy milk");
        app.handle_key(KeyCode::Tab);
        type_text(&mut app, "high");
        app.handle_key(KeyCode::Tab);
        type_text(&mut app, "2024-01-01");
        app.handle_key(KeyCode::Tab);
        type_text(&mut app, "errand");
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(
            app.store.records(),
            &[Task::new("Buy milk")
                .with_priority(Priority::High)
                .with_due_date("2024-01-01")
                .with_tags(["errand"])]
        );
        assert_eq!(app.selected(), Some(0));
    }

    #[test]
    fn invalid_priority_keeps_form_open() {
        let mut app = app_with(&[]);
        app.handle_key(KeyCode::Char('a'));
        type_text(&mut app, "x");
        app.handle_key(KeyCode::Tab);
        type_text(&mut app, "urgent");
        app.handle_key(KeyCode::Enter);

        assert!(matches!(app.mode, Mode::Form(_)));
        assert!(app.status.error);
        assert!(app.store.is_empty());
    }

    #[test]
    fn empty_description_rejected() {
        let mut app = app_with(&[]);
        app.handle_key(KeyCode::Char('a'));
        app.handle_key(KeyCode::Enter);
        assert!(app.store.is_empty());
        assert_eq!(app.status.text, "Task description cannot be empty.");
    }

    #[test]
    fn space_toggles_selected() {
        let mut app = app_with(&["a", "b"]);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Char(' '));
        assert!(app.store.records()[1].completed);
        app.handle_key(KeyCode::Char(' '));
        assert!(!app.store.records()[1].completed);
    }

    #[test]
    fn delete_needs_confirmation() {
        let mut app = app_with(&["a", "b"]);
        app.handle_key(KeyCode::Char('d'));
        app.handle_key(KeyCode::Char('n'));
        assert_eq!(app.store.len(), 2);

        app.handle_key(KeyCode::Char('d'));
        app.handle_key(KeyCode::Char('y'));
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.records()[0].description, "b");
        assert_eq!(app.selected(), Some(0));
    }

    #[test]
    fn deleting_last_task_clears_selection() {
        let mut app = app_with(&["only"]);
        app.handle_key(KeyCode::Char('d'));
        app.handle_key(KeyCode::Char('y'));
        assert!(app.store.is_empty());
        assert_eq!(app.selected(), None);
    }

    #[test]
    fn edit_can_toggle_completed_and_overwrites() {
        let mut app = app_with(&["a"]);
        app.handle_key(KeyCode::Char('e'));
        app.handle_key(KeyCode::Backspace);
        type_text(&mut app, "b");
        app.handle_key(KeyCode::BackTab);
        app.handle_key(KeyCode::Char(' '));
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.store.records(), &[Task::new("b").completed(true)]);
    }

    #[test]
    fn edit_without_selection_reports() {
        let mut app = app_with(&[]);
        app.handle_key(KeyCode::Char('e'));
        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.status.text, "Please select a task to edit.");
    }

    #[test]
    fn quit_keys() {
        let mut app = app_with(&[]);
        assert!(app.handle_key(KeyCode::Char('q')));
        // 'q' inside a form is text, not quit
        app.handle_key(KeyCode::Char('a'));
        assert!(!app.handle_key(KeyCode::Char('q')));
    }

    #[test]
    fn centered_popup_fits_very_wide_terminals() {
        let area = Rect::new(0, 0, 4000, 50);
        let r = centered(area, 60, 12);
        assert_eq!((r.width, r.height), (2400, 12));
        assert_eq!((r.x, r.y), (800, 19));

        let small = centered(Rect::new(2, 1, 10, 5), 60, 12);
        assert_eq!((small.x, small.y, small.width, small.height), (4, 1, 6, 5));
    }
}
