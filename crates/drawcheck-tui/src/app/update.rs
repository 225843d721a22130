use super::{App, BANNER_DURATION, Screen};
use crate::action::Action;

impl App {
    /// Process a user action and update state. Returns true if the app
    /// should quit.
    pub fn update(&mut self, action: Action) -> bool {
        // Quit confirmation modal — q confirms, Esc cancels
        if self.confirm_quit {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::NavigateBack => {
                    self.confirm_quit = false;
                }
                Action::Tick => {
                    self.tick = self.tick.wrapping_add(1);
                }
                Action::Resize(_w, h) => {
                    self.visible_rows = (h as usize).saturating_sub(8);
                }
                _ => {}
            }
            return false;
        }

        // Help overlay intercepts everything except quit
        if self.show_help {
            match action {
                Action::Quit => {
                    self.show_help = false;
                    self.confirm_quit = true;
                }
                Action::ToggleHelp | Action::NavigateBack => {
                    self.show_help = false;
                }
                Action::Tick => {
                    self.tick = self.tick.wrapping_add(1);
                }
                _ => {}
            }
            return false;
        }

        if self.screen == Screen::Banner {
            match action {
                Action::Tick => {
                    self.tick = self.tick.wrapping_add(1);
                    if self
                        .banner_start
                        .is_some_and(|start| start.elapsed() >= BANNER_DURATION)
                    {
                        self.dismiss_banner();
                    }
                }
                Action::Resize(_w, h) => {
                    self.visible_rows = (h as usize).saturating_sub(8);
                }
                Action::None => {}
                // Any keypress dismisses the banner
                _ => self.dismiss_banner(),
            }
            return false;
        }

        if self.screen == Screen::FilePicker {
            self.handle_file_picker_action(action);
            return self.should_quit;
        }

        // Review screen
        match action {
            Action::Quit => {
                self.confirm_quit = true;
            }
            // Enter and r both submit the form
            Action::Submit | Action::DrillIn => {
                self.submit();
            }
            Action::OpenFilePicker => {
                self.file_picker.refresh_entries();
                self.screen = Screen::FilePicker;
            }
            Action::MoveDown => {
                self.panel_scroll = self.panel_scroll.saturating_add(1);
            }
            Action::MoveUp => {
                self.panel_scroll = self.panel_scroll.saturating_sub(1);
            }
            Action::PageDown => {
                self.panel_scroll = self.panel_scroll.saturating_add(self.visible_rows as u16);
            }
            Action::PageUp => {
                self.panel_scroll = self.panel_scroll.saturating_sub(self.visible_rows as u16);
            }
            Action::GoTop => {
                self.panel_scroll = 0;
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

        self.should_quit
    }
}
