use super::{App, Screen};
use crate::action::Action;

impl App {
    /// Handle input while on the file picker screen.
    pub(super) fn handle_file_picker_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.confirm_quit = true;
            }
            Action::NavigateBack => {
                // Esc confirms the marked drawing if there is one; with no
                // mark the dialog is simply cancelled and nothing changes.
                if let Some(path) = self.file_picker.marked.take() {
                    self.set_selected_drawing(path);
                }
                self.screen = Screen::Review;
            }
            Action::MoveDown => {
                let max = self.file_picker.entries.len().saturating_sub(1);
                if self.file_picker.cursor < max {
                    self.file_picker.cursor += 1;
                }
            }
            Action::MoveUp => {
                self.file_picker.cursor = self.file_picker.cursor.saturating_sub(1);
            }
            Action::PageDown => {
                let page = self.visible_rows.max(1);
                let max = self.file_picker.entries.len().saturating_sub(1);
                self.file_picker.cursor = (self.file_picker.cursor + page).min(max);
            }
            Action::PageUp => {
                let page = self.visible_rows.max(1);
                self.file_picker.cursor = self.file_picker.cursor.saturating_sub(page);
            }
            Action::GoTop => {
                self.file_picker.cursor = 0;
            }
            Action::GoBottom => {
                self.file_picker.cursor = self.file_picker.entries.len().saturating_sub(1);
            }
            Action::Select => {
                self.file_picker.mark_current();
            }
            Action::DrillIn => {
                // Enter on a directory opens it; Enter on a drawing picks
                // it and closes the dialog.
                if !self.file_picker.enter_directory()
                    && let Some(entry) = self.file_picker.entries.get(self.file_picker.cursor)
                    && entry.is_drawing
                {
                    let path = entry.path.clone();
                    self.file_picker.marked = None;
                    self.set_selected_drawing(path);
                    self.screen = Screen::Review;
                }
            }
            Action::ToggleHelp => {
                self.show_help = true;
            }
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
            }
            Action::Resize(_w, h) => {
                self.visible_rows = (h as usize).saturating_sub(8);
            }
            _ => {}
        }
    }
}
