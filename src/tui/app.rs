//! Main application logic for the terminal user interface.
//!
//! `App` drives a `TaskForm`: it draws the frame derived from the form's view,
//! feeds terminal events into it and stops once the form is committed or
//! abandoned.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use ratatui::{
    backend::Backend,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};

use crate::tui::{
    colors::{BLURRED, CURSOR_MODE_HELP, FOCUSED},
    cursor::CursorMode,
    enums::FormState,
    focus::WrapPolicy,
    task_form::{FieldView, FormView, TaskForm},
};

const PROMPT: &str = "> ";
/// Heading, underline and a blank line sit above the first field.
const HEADER_ROWS: u16 = 3;

/// Interactive wrapper around a single `TaskForm`.
pub struct App {
    form: TaskForm,
    applied_mode: Option<CursorMode>,
}

impl App {
    pub fn new(policy: WrapPolicy) -> Self {
        Self {
            form: TaskForm::new(policy),
            applied_mode: None,
        }
    }

    /// Hand the form back once the loop is over.
    pub fn into_form(self) -> TaskForm {
        self.form
    }

    /// Feed one terminal event into the form.
    pub fn handle_event(&mut self, event: Event) -> FormState {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.form.handle_key(key),
            Event::Paste(text) => self.form.handle_paste(&text),
            _ => self.form.state(),
        }
    }

    /// Draw the current form state.
    pub fn render(&self, f: &mut Frame) {
        let view = self.form.view();
        let area = f.area();
        f.render_widget(Paragraph::new(form_lines(&view)), area);

        let caret = view
            .fields
            .iter()
            .enumerate()
            .find_map(|(row, field)| field.caret.map(|col| (row, col)));
        if let Some((row, col)) = caret {
            if let Some(pos) = caret_position(area, row, col) {
                f.set_cursor_position(pos);
            }
        }
    }

    /// Main event loop. Returns the terminal state of the form.
    pub fn run<B: Backend + Write>(&mut self, terminal: &mut Terminal<B>) -> io::Result<FormState> {
        loop {
            terminal.draw(|f| self.render(f))?;
            self.apply_cursor_style(terminal.backend_mut())?;

            if event::poll(Duration::from_millis(50))? {
                let state = self.handle_event(event::read()?);
                if state != FormState::Editing {
                    return Ok(state);
                }
            }
        }
    }

    // The caret shape only needs resending when the mode changes.
    fn apply_cursor_style<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let mode = self.form.cursor_mode();
        if self.applied_mode == Some(mode) {
            return Ok(());
        }
        if let Some(style) = mode.terminal_style() {
            execute!(out, style)?;
        }
        self.applied_mode = Some(mode);
        Ok(())
    }
}

fn form_lines(view: &FormView<'_>) -> Vec<Line<'static>> {
    let heading = Style::default().fg(FOCUSED);
    let blurred = Style::default().fg(BLURRED);

    let mut lines = vec![
        Line::styled("  Create A New Task ", heading),
        Line::styled(" ____________________", heading),
        Line::default(),
    ];
    lines.extend(view.fields.iter().map(field_line));
    lines.push(Line::default());

    let mut buttons = button("Submit", view.submit_focused);
    buttons.push(Span::raw("    "));
    buttons.extend(button("Cancel", view.cancel_focused));
    lines.push(Line::from(buttons));
    lines.push(Line::default());

    lines.push(Line::from(vec![
        Span::styled("cursor mode is ", blurred),
        Span::styled(view.cursor_mode.to_string(), Style::default().fg(CURSOR_MODE_HELP)),
        Span::styled(" (ctrl+r to change style)", blurred),
    ]));
    lines
}

fn field_line(field: &FieldView<'_>) -> Line<'static> {
    let emphasis = if field.focused {
        Style::default().fg(FOCUSED)
    } else {
        Style::default()
    };
    let text = if field.value.is_empty() {
        Span::styled(field.placeholder, Style::default().fg(BLURRED))
    } else {
        Span::styled(field.value.to_string(), emphasis)
    };
    Line::from(vec![Span::styled(PROMPT, emphasis), text])
}

fn button(label: &'static str, focused: bool) -> Vec<Span<'static>> {
    if focused {
        vec![Span::styled(format!("[ {label} ]"), Style::default().fg(FOCUSED))]
    } else {
        vec![
            Span::raw("[ "),
            Span::styled(label, Style::default().fg(BLURRED)),
            Span::raw(" ]"),
        ]
    }
}

// `col` is in terminal columns, past the prompt.
fn caret_position(area: Rect, row: usize, col: usize) -> Option<(u16, u16)> {
    let x = area.x.checked_add(u16::try_from(PROMPT.len() + col).ok()?)?;
    let y = area.y.checked_add(HEADER_ROWS.checked_add(u16::try_from(row).ok()?)?)?;
    (x < area.right() && y < area.bottom()).then_some((x, y))
}
