//! TUI application - event handling and state management
//!
//! The App struct owns the AppState and handles all keyboard events.
//! It does not do any rendering - that's delegated to the views module.
//! Mutations are never applied here either: handlers queue a
//! [`TaskIntent`] that the runner applies to the controller.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, ConfirmDialog, EMPTY_TASK_MESSAGE, InteractionMode, LoadPhase, TaskIntent};

/// TUI application
#[derive(Debug, Default)]
pub struct App {
    /// Application state
    state: AppState,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }

    /// Get reference to state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get mutable reference to state
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Handle a key event
    ///
    /// Returns true if the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Clear any transient error message on key press
        self.state.clear_error();

        // While the initial load is in flight only quit works
        if self.state.load_phase == LoadPhase::Loading {
            return matches!(
                (key.code, key.modifiers),
                (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _)
            );
        }

        match &self.state.interaction_mode {
            InteractionMode::Normal => self.handle_normal_key(key),
            InteractionMode::TaskInput(_) => self.handle_task_input_key(key),
            InteractionMode::Confirm(_) => self.handle_confirm_key(key),
            InteractionMode::Help => self.handle_help_key(key),
        }
    }

    /// Handle key in normal mode
    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            // === Quit ===
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                return true; // Force quit
            }
            (KeyCode::Char('q'), _) => {
                self.state.should_quit = true;
            }

            // === Help ===
            (KeyCode::Char('?'), _) | (KeyCode::F(1), _) => {
                self.state.interaction_mode = InteractionMode::Help;
            }

            // === Navigation ===
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => {
                self.state.selection.select_prev();
            }
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => {
                let max = self.state.tasks.len();
                self.state.selection.select_next(max);
            }
            (KeyCode::Char('g'), _) => {
                self.state.selection.select_first();
            }
            (KeyCode::Char('G'), _) => {
                let max = self.state.tasks.len();
                self.state.selection.select_last(max);
            }

            // === Toggle selected task ===
            (KeyCode::Char(' '), _) | (KeyCode::Enter, _) => {
                if let Some(id) = self.state.selected_task_id() {
                    self.state.pending_intent = Some(TaskIntent::Toggle(id));
                }
            }

            // === New task ===
            (KeyCode::Char('n'), _) => {
                self.state.interaction_mode = InteractionMode::TaskInput(String::new());
            }

            // === Delete selected task (confirmed) ===
            (KeyCode::Char('d'), _) => {
                if let Some(id) = self.state.selected_task_id() {
                    self.state.interaction_mode = InteractionMode::Confirm(ConfirmDialog::delete_task(id));
                }
            }

            // === Clear completed tasks (confirmed) ===
            (KeyCode::Char('c'), _) => {
                if self.state.stats.completed > 0 {
                    self.state.interaction_mode = InteractionMode::Confirm(ConfirmDialog::clear_completed());
                }
            }

            _ => {}
        }

        false
    }

    /// Handle key in task input mode
    fn handle_task_input_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => {
                self.state.interaction_mode = InteractionMode::Normal;
            }
            KeyCode::Enter => {
                if let InteractionMode::TaskInput(text) = &self.state.interaction_mode {
                    if text.trim().is_empty() {
                        // Keep the mode and buffer; just surface the message
                        self.state.set_error(EMPTY_TASK_MESSAGE);
                    } else {
                        self.state.pending_intent = Some(TaskIntent::Add(text.clone()));
                        self.state.interaction_mode = InteractionMode::Normal;
                    }
                }
            }
            KeyCode::Backspace => {
                if let Some(buf) = self.state.interaction_mode.input_buffer_mut() {
                    buf.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buf) = self.state.interaction_mode.input_buffer_mut() {
                    buf.push(c);
                }
            }
            _ => {}
        }

        false
    }

    /// Handle key in confirm dialog
    fn handle_confirm_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            // Cancel performs no mutation
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.state.interaction_mode = InteractionMode::Normal;
            }
            KeyCode::Enter => {
                if let InteractionMode::Confirm(dialog) = &self.state.interaction_mode
                    && dialog.selected_button
                {
                    self.state.pending_intent = Some(TaskIntent::from(dialog.action.clone()));
                }
                self.state.interaction_mode = InteractionMode::Normal;
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                if let InteractionMode::Confirm(dialog) = &self.state.interaction_mode {
                    self.state.pending_intent = Some(TaskIntent::from(dialog.action.clone()));
                }
                self.state.interaction_mode = InteractionMode::Normal;
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') | KeyCode::Tab => {
                if let InteractionMode::Confirm(dialog) = &mut self.state.interaction_mode {
                    dialog.selected_button = !dialog.selected_button;
                }
            }
            _ => {}
        }

        false
    }

    /// Handle key in help mode
    fn handle_help_key(&mut self, _key: KeyEvent) -> bool {
        self.state.interaction_mode = InteractionMode::Normal;
        false
    }
}
