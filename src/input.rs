//! Input handling abstractions.
//!
//! This module provides traits and types for handling keyboard input
//! in a modular way, allowing mode-specific handlers to be tested independently.
//! Handlers only translate keys into [`InputResult`]s; the `App` applies them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Tab;

/// An edit to the form on the active tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Move focus to the next field.
    NextField,
    /// Move focus to the previous field.
    PrevField,
    /// Type a character into the focused text field.
    Insert(char),
    /// Delete the last character of the focused text field.
    Backspace,
    /// Clear the focused text field.
    Clear,
    /// Switch the focused selection field to its next option.
    Cycle,
    /// Run the calculation for the active tab.
    Calculate,
    /// Fill the tab's main field with a preset value.
    Preset(usize),
}

/// Result of processing an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// The input was consumed and handled.
    Consumed,
    /// The input was ignored (not applicable to this handler).
    Ignored,
    /// The application should quit.
    Quit,
    /// Close the open modal.
    Dismiss,
    /// Show or hide the help modal.
    ToggleHelp,
    /// Switch to another tab.
    SwitchTab(Tab),
    /// Edit the active form.
    Form(FormAction),
}

/// Context passed to input handlers.
///
/// This provides handlers with the information they need to process
/// input without directly accessing the full App state.
#[derive(Debug, Clone, Copy)]
pub struct InputContext {
    /// Active tab.
    pub tab: Tab,
    /// Whether help is currently shown.
    pub show_help: bool,
    /// Whether there's an error message displayed.
    pub has_error: bool,
    /// Whether the focused field takes typed text.
    pub focused_text: bool,
}

/// Trait for handling keyboard input.
///
/// Implementations of this trait handle input for specific modes
/// or input contexts.
pub trait InputHandler {
    /// Handle a key event.
    ///
    /// # Arguments
    /// * `key` - The key event to handle
    /// * `ctx` - Context about the current application state
    ///
    /// # Returns
    /// The result of handling the input.
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult;

    /// Get the name of this handler (for debugging).
    fn name(&self) -> &'static str;
}

/// Handler for open modals (error, help). Swallows everything else.
#[derive(Debug, Default)]
pub struct ModalHandler;

impl InputHandler for ModalHandler {
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult {
        if !ctx.show_help && !ctx.has_error {
            return InputResult::Ignored;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return InputResult::Quit;
        }
        match key.code {
            KeyCode::Esc | KeyCode::Enter => InputResult::Dismiss,
            KeyCode::F(1) | KeyCode::Char('?') if !ctx.has_error => InputResult::Dismiss,
            _ => InputResult::Consumed,
        }
    }

    fn name(&self) -> &'static str {
        "ModalHandler"
    }
}

/// Handler for global shortcuts (help, quit, tab switching).
#[derive(Debug, Default)]
pub struct GlobalHandler;

impl InputHandler for GlobalHandler {
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return InputResult::Quit;
        }
        match key.code {
            KeyCode::Char('q') => InputResult::Quit,
            KeyCode::F(1) | KeyCode::Char('?') => InputResult::ToggleHelp,
            KeyCode::Tab => InputResult::SwitchTab(ctx.tab.next()),
            KeyCode::BackTab => InputResult::SwitchTab(ctx.tab.prev()),
            _ => InputResult::Ignored,
        }
    }

    fn name(&self) -> &'static str {
        "GlobalHandler"
    }
}

/// Handler for form navigation and editing.
#[derive(Debug, Default)]
pub struct FormHandler;

impl InputHandler for FormHandler {
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult {
        let action = match key.code {
            KeyCode::Down => FormAction::NextField,
            KeyCode::Up => FormAction::PrevField,
            KeyCode::Enter => FormAction::Calculate,
            KeyCode::F(n @ 2..=5) => FormAction::Preset(usize::from(n - 2)),
            KeyCode::Char(c) if ctx.focused_text && (c.is_ascii_digit() || c == '.') => FormAction::Insert(c),
            KeyCode::Backspace if ctx.focused_text => FormAction::Backspace,
            KeyCode::Delete if ctx.focused_text => FormAction::Clear,
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if !ctx.focused_text => FormAction::Cycle,
            _ => return InputResult::Ignored,
        };
        InputResult::Form(action)
    }

    fn name(&self) -> &'static str {
        "FormHandler"
    }
}

/// Run `key` through `handlers` in order; the first non-ignored result wins.
pub fn dispatch(handlers: &mut [Box<dyn InputHandler>], key: KeyEvent, ctx: &InputContext) -> InputResult {
    for handler in handlers.iter_mut() {
        let result = handler.handle(key, ctx);
        if result != InputResult::Ignored {
            tracing::debug!("{} handled {:?} -> {:?}", handler.name(), key.code, result);
            return result;
        }
    }
    InputResult::Ignored
}

/// Handlers in priority order.
pub fn default_handlers() -> Vec<Box<dyn InputHandler>> {
    vec![
        Box::new(ModalHandler),
        Box::new(GlobalHandler),
        Box::new(FormHandler),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn make_context(focused_text: bool) -> InputContext {
        InputContext {
            tab: Tab::Steps,
            show_help: false,
            has_error: false,
            focused_text,
        }
    }

    #[test]
    fn test_modal_handler_dismisses_on_esc() {
        let mut handler = ModalHandler;
        let ctx = InputContext { has_error: true, ..make_context(true) };
        assert_eq!(handler.handle(make_key(KeyCode::Esc), &ctx), InputResult::Dismiss);
        assert_eq!(handler.handle(make_key(KeyCode::Char('5')), &ctx), InputResult::Consumed);
    }

    #[test]
    fn test_modal_handler_idle_without_modal() {
        let mut handler = ModalHandler;
        assert_eq!(
            handler.handle(make_key(KeyCode::Esc), &make_context(true)),
            InputResult::Ignored
        );
    }

    #[test]
    fn test_global_handler_tabs() {
        let mut handler = GlobalHandler;
        let ctx = make_context(false);
        assert_eq!(
            handler.handle(make_key(KeyCode::Tab), &ctx),
            InputResult::SwitchTab(Tab::Distance)
        );
        assert_eq!(
            handler.handle(make_key(KeyCode::BackTab), &ctx),
            InputResult::SwitchTab(Tab::Stride)
        );
    }

    #[test]
    fn test_global_handler_ctrl_c_quits() {
        let mut handler = GlobalHandler;
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle(key, &make_context(true)), InputResult::Quit);
    }

    #[test]
    fn test_form_handler_digits_only_in_text_fields() {
        let mut handler = FormHandler;
        assert_eq!(
            handler.handle(make_key(KeyCode::Char('7')), &make_context(true)),
            InputResult::Form(FormAction::Insert('7'))
        );
        assert_eq!(
            handler.handle(make_key(KeyCode::Char('x')), &make_context(true)),
            InputResult::Ignored
        );
        assert_eq!(
            handler.handle(make_key(KeyCode::Char('7')), &make_context(false)),
            InputResult::Ignored
        );
    }

    #[test]
    fn test_form_handler_cycles_selection_fields() {
        let mut handler = FormHandler;
        assert_eq!(
            handler.handle(make_key(KeyCode::Char(' ')), &make_context(false)),
            InputResult::Form(FormAction::Cycle)
        );
        assert_eq!(
            handler.handle(make_key(KeyCode::Left), &make_context(false)),
            InputResult::Form(FormAction::Cycle)
        );
    }

    #[test]
    fn test_form_handler_presets() {
        let mut handler = FormHandler;
        assert_eq!(
            handler.handle(make_key(KeyCode::F(4)), &make_context(true)),
            InputResult::Form(FormAction::Preset(2))
        );
    }

    #[test]
    fn test_dispatch_prefers_modal() {
        let mut handlers = default_handlers();
        let ctx = InputContext { show_help: true, ..make_context(false) };
        assert_eq!(dispatch(&mut handlers, make_key(KeyCode::Tab), &ctx), InputResult::Consumed);
        assert_eq!(dispatch(&mut handlers, make_key(KeyCode::Char('?')), &ctx), InputResult::Dismiss);
    }
}
