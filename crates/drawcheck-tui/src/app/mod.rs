mod update;
mod update_file_picker;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::theme::Theme;

/// How long the startup banner stays up before auto-dismissing.
pub(crate) const BANNER_DURATION: Duration = Duration::from_millis(1800);

/// Which screen is currently displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Banner,
    /// The review form: upload affordance plus the two result panels.
    Review,
    FilePicker,
}

/// A single entry in the file picker.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    /// Matches the advertised drawing extensions; only these are markable.
    pub is_drawing: bool,
}

/// State for the file picker screen.
#[derive(Debug, Clone)]
pub struct FilePickerState {
    /// Current directory being browsed.
    pub current_dir: PathBuf,
    /// Entries in the current directory (dirs first, then files).
    pub entries: Vec<FileEntry>,
    /// Cursor position in the entries list.
    pub cursor: usize,
    /// Marked drawing. Single-select: the form holds one file handle.
    pub marked: Option<PathBuf>,
}

impl FilePickerState {
    pub fn new() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let mut state = Self {
            current_dir,
            entries: Vec::new(),
            cursor: 0,
            marked: None,
        };
        state.refresh_entries();
        state
    }

    /// Refresh the entries list from the current directory.
    pub fn refresh_entries(&mut self) {
        let mut entries = Vec::new();

        // Parent directory entry
        if let Some(parent) = self.current_dir.parent() {
            entries.push(FileEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_dir: true,
                is_drawing: false,
            });
        }

        if let Ok(read_dir) = std::fs::read_dir(&self.current_dir) {
            let mut dirs = Vec::new();
            let mut files = Vec::new();

            for entry in read_dir.flatten() {
                let path = entry.path();
                let name = entry.file_name().to_string_lossy().to_string();

                // Skip hidden files/dirs
                if name.starts_with('.') {
                    continue;
                }

                if path.is_dir() {
                    dirs.push(FileEntry {
                        name,
                        path,
                        is_dir: true,
                        is_drawing: false,
                    });
                } else {
                    let is_drawing = drawcheck_core::is_supported_drawing(&path);
                    files.push(FileEntry {
                        name,
                        path,
                        is_dir: false,
                        is_drawing,
                    });
                }
            }

            dirs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            files.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

            entries.extend(dirs);
            entries.extend(files);
        }

        self.entries = entries;
        self.cursor = 0;
    }

    /// Mark the drawing under the cursor (replacing any previous mark), or
    /// unmark it if it is already marked. Non-drawing entries are ignored.
    pub fn mark_current(&mut self) {
        if let Some(entry) = self.entries.get(self.cursor)
            && entry.is_drawing
        {
            if self.marked.as_ref() == Some(&entry.path) {
                self.marked = None;
            } else {
                self.marked = Some(entry.path.clone());
            }
        }
    }

    /// Enter the directory at cursor, or return false if not a directory.
    pub fn enter_directory(&mut self) -> bool {
        if let Some(entry) = self.entries.get(self.cursor)
            && entry.is_dir
        {
            self.current_dir = entry.path.clone();
            self.refresh_entries();
            return true;
        }
        false
    }

    pub fn is_marked(&self, path: &PathBuf) -> bool {
        self.marked.as_ref() == Some(path)
    }
}

/// Main application state.
pub struct App {
    pub screen: Screen,
    pub theme: Theme,

    /// Selected drawing. Set from the picker or the command line; never
    /// cleared (there is no reset affordance).
    pub selected_drawing: Option<PathBuf>,
    /// Empty until a submit; then the extraction placeholder.
    pub extracted_text: String,
    /// Empty until a submit; then the review placeholder.
    pub review_result: String,
    /// True only inside the submit transition itself.
    pub busy: bool,

    pub tick: usize,
    pub should_quit: bool,
    pub confirm_quit: bool,
    pub show_help: bool,
    /// Height of the visible list area (set on resize, used for page up/down).
    pub visible_rows: usize,
    /// Scroll offset for the result panels.
    pub panel_scroll: u16,
    pub file_picker: FilePickerState,
    /// Wall-clock instant when the banner was first shown.
    pub banner_start: Option<Instant>,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            screen: Screen::Banner,
            theme,
            selected_drawing: None,
            extracted_text: String::new(),
            review_result: String::new(),
            busy: false,
            tick: 0,
            should_quit: false,
            confirm_quit: false,
            show_help: false,
            visible_rows: 20,
            panel_scroll: 0,
            file_picker: FilePickerState::new(),
            banner_start: Some(Instant::now()),
        }
    }

    /// Submit the selected drawing for review.
    ///
    /// No drawing selected: strict no-op, nothing changes. Otherwise both
    /// result strings are filled from the (stubbed) review boundary. The
    /// busy flag covers the call, but since the stub returns immediately
    /// the Busy state is never observable in a drawn frame.
    pub(crate) fn submit(&mut self) {
        let Some(drawing) = self.selected_drawing.clone() else {
            return;
        };
        self.busy = true;
        match drawcheck_core::submit_review(&drawing) {
            Ok(outcome) => {
                self.extracted_text = outcome.extracted_text;
                self.review_result = outcome.verdict;
                self.panel_scroll = 0;
            }
            // Unreachable with the stub; kept so the call site is ready
            // for the real backend's failure modes.
            Err(err) => {
                tracing::warn!(error = %err, "review submit failed");
            }
        }
        self.busy = false;
    }

    /// Record a newly selected drawing.
    pub(crate) fn set_selected_drawing(&mut self, path: PathBuf) {
        tracing::info!(drawing = %path.display(), "drawing selected");
        self.selected_drawing = Some(path);
    }

    /// Dismiss the banner and navigate to the appropriate first screen.
    pub(crate) fn dismiss_banner(&mut self) {
        self.banner_start = None;
        if self.selected_drawing.is_some() {
            self.screen = Screen::Review;
        } else {
            self.screen = Screen::FilePicker;
        }
    }

    /// Render the current screen.
    pub fn view(&self, f: &mut ratatui::Frame) {
        let area = f.area();

        if self.screen == Screen::Banner {
            crate::view::banner::render(f, &self.theme, self.tick);
            return;
        }

        match self.screen {
            Screen::Review => crate::view::review::render_in(f, self, area),
            Screen::FilePicker => crate::view::file_picker::render_in(f, self, area),
            Screen::Banner => unreachable!(),
        }

        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }

        if self.confirm_quit {
            crate::view::quit_confirm::render(f, &self.theme);
        }
    }
}

#[cfg(test)]
mod tests;
