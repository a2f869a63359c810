//! Task form handling for the terminal user interface.
//!
//! `TaskForm` owns the input fields, the focus ring and the caret mode, and
//! turns key presses into state transitions. Rendering never reads shared
//! style state: `view()` derives everything the screen needs from the
//! current focus index, caret mode and field values.

use chrono::{DateTime, Utc};
use crossterm::event::KeyEvent;
use tracing::{debug, info};

use crate::task::{Task, TaskDraft};
use crate::tui::{
    cursor::CursorMode,
    enums::{EditOp, FormState, Intent},
    focus::{Action, FocusRing, WrapPolicy},
    input::InputField,
};

/// Field order constants.
pub const TITLE_ORDER: usize = 0;
pub const DESCRIPTION_ORDER: usize = 1;
pub const URGENCY_ORDER: usize = 2;
pub const STATUS_ORDER: usize = 3;
pub const ASSIGNED_BY_ORDER: usize = 4;
pub const COMMENTS_ORDER: usize = 5;

/// Placeholder and character limit for each field, in focus order.
pub const FIELD_SPECS: [(&str, usize); 6] = [
    ("Title", 32),
    ("Description", 64),
    ("Urgency", 64),
    ("Status", 64),
    ("Assigned By ( Email )", 64),
    ("Comments", 64),
];

/// Single-shot form that collects one task.
pub struct TaskForm {
    fields: Vec<InputField>,
    focus: FocusRing,
    cursor_mode: CursorMode,
    state: FormState,
}

/// Display state of one field for a single frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView<'a> {
    pub placeholder: &'static str,
    pub value: &'a str,
    pub focused: bool,
    /// Caret offset in terminal columns from the start of the value,
    /// present only on the focused field while the caret is visible.
    pub caret: Option<usize>,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView<'a> {
    pub fields: Vec<FieldView<'a>>,
    pub submit_focused: bool,
    pub cancel_focused: bool,
    pub cursor_mode: CursorMode,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new(WrapPolicy::default())
    }
}

impl TaskForm {
    /// Create an empty form focused on the title field.
    pub fn new(policy: WrapPolicy) -> Self {
        let fields: Vec<InputField> = FIELD_SPECS
            .iter()
            .map(|&(placeholder, limit)| InputField::new(placeholder, limit))
            .collect();
        let focus = FocusRing::new(fields.len(), policy);
        Self {
            fields,
            focus,
            cursor_mode: CursorMode::default(),
            state: FormState::Editing,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn focus_index(&self) -> usize {
        self.focus.index()
    }

    pub fn cursor_mode(&self) -> CursorMode {
        self.cursor_mode
    }

    pub fn field(&self, order: usize) -> Option<&InputField> {
        self.fields.get(order)
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormState {
        let intent = Intent::from_key(key, self.focus.target());
        self.apply(intent)
    }

    /// Handle a bracketed paste into the focused field.
    pub fn handle_paste(&mut self, text: &str) -> FormState {
        self.apply(Intent::Edit(EditOp::Paste(text.to_string())))
    }

    /// Apply one intent. Once the form has left `Editing` it ignores input.
    pub fn apply(&mut self, intent: Intent) -> FormState {
        if self.state != FormState::Editing {
            return self.state;
        }
        match intent {
            Intent::Next | Intent::Advance => {
                self.focus.next();
                debug!(focus = self.focus_index(), slots = self.focus.len(), "focus moved forward");
            }
            Intent::Previous => {
                self.focus.prev();
                debug!(focus = self.focus_index(), slots = self.focus.len(), "focus moved back");
            }
            Intent::Activate(Action::Submit) => {
                info!("form submitted");
                self.state = FormState::Committed;
            }
            Intent::Activate(Action::Cancel) | Intent::Quit => {
                info!("form abandoned");
                self.state = FormState::Abandoned;
            }
            Intent::CycleCursorMode => {
                self.cursor_mode = self.cursor_mode.next();
                debug!(mode = %self.cursor_mode, "cursor mode changed");
            }
            Intent::Edit(op) => {
                if let Some(i) = self.focus.focused_field() {
                    edit(&mut self.fields[i], op);
                }
            }
            Intent::Ignore => {}
        }
        self.state
    }

    /// Derive the frame to draw from the current state.
    pub fn view(&self) -> FormView<'_> {
        let focused = self.focus.focused_field();
        let fields = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, f)| {
                let is_focused = focused == Some(i);
                FieldView {
                    placeholder: f.placeholder,
                    value: f.value(),
                    focused: is_focused,
                    caret: (is_focused && self.cursor_mode != CursorMode::Hidden)
                        .then(|| f.cursor_width()),
                }
            })
            .collect();
        FormView {
            fields,
            submit_focused: self.focus.index() == self.focus.submit_index(),
            cancel_focused: self.focus.index() == self.focus.cancel_index(),
            cursor_mode: self.cursor_mode,
        }
    }

    /// Current field values as a draft.
    pub fn draft(&self) -> TaskDraft {
        let value = |order: usize| {
            self.field(order).map(|f| f.value().to_string()).unwrap_or_default()
        };
        TaskDraft {
            title: value(TITLE_ORDER),
            description: value(DESCRIPTION_ORDER),
            urgency: value(URGENCY_ORDER),
            status: value(STATUS_ORDER),
            assigned_by: value(ASSIGNED_BY_ORDER),
            comment: value(COMMENTS_ORDER),
        }
    }

    /// Consume the form, yielding the finished task only if it was committed.
    pub fn into_task(self, now: DateTime<Utc>) -> Option<Task> {
        match self.state {
            FormState::Committed => Some(self.draft().into_task(now)),
            FormState::Editing | FormState::Abandoned => None,
        }
    }
}

fn edit(field: &mut InputField, op: EditOp) {
    match op {
        EditOp::Insert(c) => field.handle_char(c),
        EditOp::Paste(text) => field.handle_paste(&text),
        EditOp::Backspace => field.handle_backspace(),
        EditOp::Delete => field.handle_delete(),
        EditOp::CursorLeft => field.move_cursor_left(),
        EditOp::CursorRight => field.move_cursor_right(),
        EditOp::CursorStart => field.move_cursor_start(),
        EditOp::CursorEnd => field.move_cursor_end(),
        EditOp::DeleteToStart => field.delete_to_start(),
        EditOp::DeleteToEnd => field.delete_to_end(),
        EditOp::DeleteWordBackward => field.delete_word_backward(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(form: &mut TaskForm, code: KeyCode) -> FormState {
        form.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(form: &mut TaskForm, s: &str) {
        for c in s.chars() {
            press(form, KeyCode::Char(c));
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let form = TaskForm::default();
        assert_eq!(form.state(), FormState::Editing);
        assert_eq!(form.focus_index(), 0);
        assert_eq!(FIELD_SPECS.len(), 6);
        assert_eq!(form.field(TITLE_ORDER).unwrap().char_limit, 32);
        for order in DESCRIPTION_ORDER..=COMMENTS_ORDER {
            assert_eq!(form.field(order).unwrap().char_limit, 64);
        }
        assert!(form.view().fields[0].focused);
    }

    #[test]
    fn test_exactly_one_target_focused_while_navigating() {
        let mut form = TaskForm::default();
        for step in 0..20 {
            let code = if step % 3 == 0 { KeyCode::Up } else { KeyCode::Tab };
            press(&mut form, code);
            let view = form.view();
            let focused = view.fields.iter().filter(|f| f.focused).count()
                + usize::from(view.submit_focused)
                + usize::from(view.cancel_focused);
            assert_eq!(focused, 1);
        }
    }

    #[test]
    fn test_edits_go_to_focused_field_only() {
        let mut form = TaskForm::default();
        type_str(&mut form, "Fix");
        press(&mut form, KeyCode::Down);
        type_str(&mut form, "desc");
        assert_eq!(form.field(TITLE_ORDER).unwrap().value(), "Fix");
        assert_eq!(form.field(DESCRIPTION_ORDER).unwrap().value(), "desc");
        assert!(form.field(URGENCY_ORDER).unwrap().value().is_empty());
    }

    #[test]
    fn test_title_limit_is_enforced() {
        let mut form = TaskForm::default();
        type_str(&mut form, &"x".repeat(40));
        assert_eq!(form.field(TITLE_ORDER).unwrap().len(), 32);
    }

    #[test]
    fn test_enter_on_field_advances() {
        let mut form = TaskForm::default();
        assert_eq!(press(&mut form, KeyCode::Enter), FormState::Editing);
        assert_eq!(form.focus_index(), 1);
    }

    #[test]
    fn test_enter_on_submit_commits() {
        let mut form = TaskForm::default();
        type_str(&mut form, "Fix printer");
        for _ in 0..FIELD_SPECS.len() {
            press(&mut form, KeyCode::Enter);
        }
        assert!(form.view().submit_focused);
        assert_eq!(press(&mut form, KeyCode::Enter), FormState::Committed);

        let task = form.into_task(now()).unwrap();
        assert_eq!(task.title, "Fix printer");
        assert_eq!(task.description, "");
        assert!(task.comments.is_empty());
        assert_eq!(task.created_at, Some(now()));
    }

    #[test]
    fn test_back_from_first_field_lands_on_submit() {
        let mut form = TaskForm::default();
        press(&mut form, KeyCode::BackTab);
        assert_eq!(form.focus_index(), FIELD_SPECS.len());
        assert!(form.view().submit_focused);
        assert_eq!(press(&mut form, KeyCode::Enter), FormState::Committed);
    }

    #[test]
    fn test_cancel_button_abandons() {
        let mut form = TaskForm::new(WrapPolicy::Symmetric);
        press(&mut form, KeyCode::Left);
        assert!(form.view().cancel_focused);
        assert_eq!(press(&mut form, KeyCode::Enter), FormState::Abandoned);
        assert!(form.into_task(now()).is_none());
    }

    #[test]
    fn test_esc_abandons_from_any_position() {
        for steps in 0..8 {
            let mut form = TaskForm::default();
            type_str(&mut form, "draft");
            for _ in 0..steps {
                press(&mut form, KeyCode::Tab);
            }
            assert_eq!(press(&mut form, KeyCode::Esc), FormState::Abandoned);
            assert!(form.into_task(now()).is_none());
        }
        let mut form = TaskForm::default();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(form.handle_key(ctrl_c), FormState::Abandoned);
    }

    #[test]
    fn test_terminal_state_ignores_further_input() {
        let mut form = TaskForm::default();
        press(&mut form, KeyCode::Esc);
        press(&mut form, KeyCode::Tab);
        type_str(&mut form, "late");
        assert_eq!(form.state(), FormState::Abandoned);
        assert_eq!(form.focus_index(), 0);
        assert!(form.field(TITLE_ORDER).unwrap().value().is_empty());
    }

    #[test]
    fn test_cursor_mode_cycle_and_caret_visibility() {
        let mut form = TaskForm::default();
        type_str(&mut form, "ab");
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);

        assert_eq!(form.view().fields[0].caret, Some(2));
        form.handle_key(ctrl_r);
        assert_eq!(form.cursor_mode(), CursorMode::Static);
        form.handle_key(ctrl_r);
        assert_eq!(form.cursor_mode(), CursorMode::Hidden);
        assert_eq!(form.view().fields[0].caret, None);
        assert_eq!(form.view().cursor_mode, CursorMode::Hidden);

        // Mode is form-wide: it carries over to the next focused field.
        press(&mut form, KeyCode::Tab);
        assert!(form.view().fields.iter().all(|f| f.caret.is_none()));
        form.handle_key(ctrl_r);
        assert_eq!(form.cursor_mode(), CursorMode::Blink);
        assert_eq!(form.view().fields[1].caret, Some(0));
    }

    #[test]
    fn test_edit_on_button_is_ignored() {
        let mut form = TaskForm::default();
        for _ in 0..FIELD_SPECS.len() {
            press(&mut form, KeyCode::Tab);
        }
        type_str(&mut form, "zzz");
        form.handle_paste("pasted");
        assert_eq!(form.draft(), TaskDraft::default());
    }

    #[test]
    fn test_paste_into_focused_field() {
        let mut form = TaskForm::default();
        press(&mut form, KeyCode::Tab);
        form.handle_paste("from clipboard");
        assert_eq!(form.field(DESCRIPTION_ORDER).unwrap().value(), "from clipboard");
    }

    #[test]
    fn test_draft_maps_fields_in_order() {
        let mut form = TaskForm::default();
        for value in ["t", "d", "u", "s", "a@b.c", "note"] {
            type_str(&mut form, value);
            press(&mut form, KeyCode::Tab);
        }
        let draft = form.draft();
        assert_eq!(
            draft,
            TaskDraft {
                title: "t".into(),
                description: "d".into(),
                urgency: "u".into(),
                status: "s".into(),
                assigned_by: "a@b.c".into(),
                comment: "note".into(),
            }
        );
    }
}
