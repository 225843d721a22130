use std::path::PathBuf;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use super::*;
use crate::action::Action;
use drawcheck_core::{EXTRACTED_TEXT_PLACEHOLDER, REVIEW_VERDICT_PLACEHOLDER};

/// Create a minimal App on the review screen (banner dismissed).
fn test_app() -> App {
    let mut app = App::new(Theme::hacker());
    app.screen = Screen::Review;
    app.banner_start = None;
    app
}

/// Draw the app into a test backend and return the buffer as one string.
fn render_to_string(app: &mut App) -> String {
    let backend = TestBackend::new(80, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.view(f)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn drawing_entry(name: &str) -> FileEntry {
    FileEntry {
        name: name.to_string(),
        path: PathBuf::from("/tmp").join(name),
        is_dir: false,
        is_drawing: true,
    }
}

// ── Submit without a selection is a strict no-op ────────────────

#[test]
fn submit_without_selection_changes_nothing() {
    let mut app = test_app();

    app.update(Action::Submit);

    assert!(app.extracted_text.is_empty());
    assert!(app.review_result.is_empty());
    assert!(!app.busy);
    assert_eq!(app.selected_drawing, None);
}

#[test]
fn enter_without_selection_changes_nothing() {
    let mut app = test_app();

    app.update(Action::DrillIn);

    assert!(app.extracted_text.is_empty());
    assert!(app.review_result.is_empty());
    assert!(!app.busy);
}

// ── Submit with a selection fills both placeholders ─────────────

#[test]
fn submit_with_selection_sets_placeholders() {
    let mut app = test_app();
    app.selected_drawing = Some(PathBuf::from("drawing.pdf"));

    app.update(Action::Submit);

    assert_eq!(app.extracted_text, EXTRACTED_TEXT_PLACEHOLDER);
    assert_eq!(app.review_result, REVIEW_VERDICT_PLACEHOLDER);
    assert!(!app.busy);
}

#[test]
fn submit_does_not_clear_selection() {
    let mut app = test_app();
    app.selected_drawing = Some(PathBuf::from("drawing.pdf"));

    app.update(Action::Submit);

    assert_eq!(app.selected_drawing, Some(PathBuf::from("drawing.pdf")));
}

#[test]
fn resubmit_keeps_placeholders_and_resets_scroll() {
    let mut app = test_app();
    app.selected_drawing = Some(PathBuf::from("drawing.pdf"));

    app.update(Action::Submit);
    app.update(Action::MoveDown);
    app.update(Action::MoveDown);
    assert_eq!(app.panel_scroll, 2);

    app.update(Action::Submit);

    assert_eq!(app.extracted_text, EXTRACTED_TEXT_PLACEHOLDER);
    assert_eq!(app.review_result, REVIEW_VERDICT_PLACEHOLDER);
    assert_eq!(app.panel_scroll, 0);
}

// ── No extension validation on submit ───────────────────────────

#[test]
fn disallowed_extension_gets_identical_placeholder_behavior() {
    // A path that bypassed the picker filter (e.g. given on the command
    // line) is reviewed exactly like an accepted one.
    let mut app = test_app();
    app.selected_drawing = Some(PathBuf::from("/tmp/schematic.txt"));

    app.update(Action::Submit);

    assert_eq!(app.extracted_text, EXTRACTED_TEXT_PLACEHOLDER);
    assert_eq!(app.review_result, REVIEW_VERDICT_PLACEHOLDER);
    assert!(!app.busy);
}

#[test]
fn nonexistent_path_gets_identical_placeholder_behavior() {
    let mut app = test_app();
    app.selected_drawing = Some(PathBuf::from("/no/such/dir/missing.dwg"));

    app.update(Action::Submit);

    assert_eq!(app.extracted_text, EXTRACTED_TEXT_PLACEHOLDER);
    assert_eq!(app.review_result, REVIEW_VERDICT_PLACEHOLDER);
}

// ── Panels render only when their string is non-empty ───────────

#[test]
fn panels_absent_before_submit() {
    let mut app = test_app();
    app.selected_drawing = Some(PathBuf::from("drawing.pdf"));

    let rendered = render_to_string(&mut app);

    assert!(rendered.contains("Upload"));
    assert!(!rendered.contains("Extracted Text"));
    assert!(!rendered.contains("Compliance Review"));
}

#[test]
fn panels_absent_after_submit_with_no_selection() {
    let mut app = test_app();

    app.update(Action::Submit);
    let rendered = render_to_string(&mut app);

    assert!(!rendered.contains("Extracted Text"));
    assert!(!rendered.contains("Compliance Review"));
}

#[test]
fn panels_show_stored_placeholders_after_submit() {
    let mut app = test_app();
    app.selected_drawing = Some(PathBuf::from("drawing.pdf"));

    app.update(Action::Submit);
    let rendered = render_to_string(&mut app);

    assert!(rendered.contains("Extracted Text"));
    assert!(rendered.contains("Compliance Review"));
    assert!(rendered.contains("[extraction pending]"));
    assert!(rendered.contains("[review pending]"));
    assert!(rendered.contains("drawing.pdf"));
}

#[test]
fn panel_presence_follows_each_string_independently() {
    let mut app = test_app();
    app.extracted_text = "some text".to_string();

    let rendered = render_to_string(&mut app);

    assert!(rendered.contains("Extracted Text"));
    assert!(!rendered.contains("Compliance Review"));
}

// ── Banner ──────────────────────────────────────────────────────

#[test]
fn banner_keypress_dismisses_to_picker_without_selection() {
    let mut app = App::new(Theme::hacker());
    assert_eq!(app.screen, Screen::Banner);

    app.update(Action::DrillIn);

    assert_eq!(app.screen, Screen::FilePicker);
}

#[test]
fn banner_keypress_dismisses_to_review_with_selection() {
    let mut app = App::new(Theme::hacker());
    app.set_selected_drawing(PathBuf::from("drawing.pdf"));

    app.update(Action::DrillIn);

    assert_eq!(app.screen, Screen::Review);
}

// ── File picker ─────────────────────────────────────────────────

#[test]
fn space_marks_drawing_single_select() {
    let mut app = test_app();
    app.screen = Screen::FilePicker;
    app.file_picker.entries = vec![drawing_entry("a.pdf"), drawing_entry("b.dwg")];
    app.file_picker.cursor = 0;

    app.update(Action::Select);
    assert_eq!(app.file_picker.marked, Some(PathBuf::from("/tmp/a.pdf")));

    // Marking another drawing replaces the first
    app.file_picker.cursor = 1;
    app.update(Action::Select);
    assert_eq!(app.file_picker.marked, Some(PathBuf::from("/tmp/b.dwg")));
}

#[test]
fn space_on_marked_drawing_unmarks_it() {
    let mut app = test_app();
    app.screen = Screen::FilePicker;
    app.file_picker.entries = vec![drawing_entry("a.pdf")];
    app.file_picker.cursor = 0;

    app.update(Action::Select);
    app.update(Action::Select);

    assert_eq!(app.file_picker.marked, None);
}

#[test]
fn space_ignores_non_drawing_entry() {
    let mut app = test_app();
    app.screen = Screen::FilePicker;
    app.file_picker.entries = vec![FileEntry {
        name: "notes.txt".to_string(),
        path: PathBuf::from("/tmp/notes.txt"),
        is_dir: false,
        is_drawing: false,
    }];
    app.file_picker.cursor = 0;

    app.update(Action::Select);

    assert_eq!(app.file_picker.marked, None);
}

#[test]
fn enter_on_drawing_picks_and_returns_to_review() {
    let mut app = test_app();
    app.screen = Screen::FilePicker;
    app.file_picker.entries = vec![drawing_entry("plan.dxf")];
    app.file_picker.cursor = 0;

    app.update(Action::DrillIn);

    assert_eq!(app.screen, Screen::Review);
    assert_eq!(app.selected_drawing, Some(PathBuf::from("/tmp/plan.dxf")));
    assert_eq!(app.file_picker.marked, None);
}

#[test]
fn enter_on_non_drawing_file_is_noop() {
    let mut app = test_app();
    app.screen = Screen::FilePicker;
    app.file_picker.entries = vec![FileEntry {
        name: "notes.txt".to_string(),
        path: PathBuf::from("/tmp/notes.txt"),
        is_dir: false,
        is_drawing: false,
    }];
    app.file_picker.cursor = 0;

    app.update(Action::DrillIn);

    assert_eq!(app.screen, Screen::FilePicker);
    assert_eq!(app.selected_drawing, None);
}

#[test]
fn esc_with_mark_confirms_selection() {
    let mut app = test_app();
    app.screen = Screen::FilePicker;
    app.file_picker.marked = Some(PathBuf::from("/tmp/site.dwg"));

    app.update(Action::NavigateBack);

    assert_eq!(app.screen, Screen::Review);
    assert_eq!(app.selected_drawing, Some(PathBuf::from("/tmp/site.dwg")));
    assert_eq!(app.file_picker.marked, None);
}

#[test]
fn esc_without_mark_cancels_keeping_previous_selection() {
    let mut app = test_app();
    app.set_selected_drawing(PathBuf::from("old.pdf"));
    app.screen = Screen::FilePicker;
    app.file_picker.marked = None;

    app.update(Action::NavigateBack);

    assert_eq!(app.screen, Screen::Review);
    assert_eq!(app.selected_drawing, Some(PathBuf::from("old.pdf")));
}

#[test]
fn picker_cursor_movement_clamps() {
    let mut app = test_app();
    app.screen = Screen::FilePicker;
    app.file_picker.entries = vec![drawing_entry("a.pdf"), drawing_entry("b.pdf")];
    app.file_picker.cursor = 0;

    app.update(Action::MoveUp);
    assert_eq!(app.file_picker.cursor, 0);

    app.update(Action::MoveDown);
    app.update(Action::MoveDown);
    assert_eq!(app.file_picker.cursor, 1);

    app.update(Action::GoTop);
    assert_eq!(app.file_picker.cursor, 0);
    app.update(Action::GoBottom);
    assert_eq!(app.file_picker.cursor, 1);
}

#[test]
fn refresh_entries_flags_drawings_and_skips_hidden() {
    let td = tempfile::tempdir().unwrap();
    std::fs::write(td.path().join("plan.pdf"), b"x").unwrap();
    std::fs::write(td.path().join("notes.txt"), b"x").unwrap();
    std::fs::write(td.path().join(".hidden.pdf"), b"x").unwrap();
    std::fs::create_dir(td.path().join("sub")).unwrap();

    let mut picker = FilePickerState::new();
    picker.current_dir = td.path().to_path_buf();
    picker.refresh_entries();

    let plan = picker.entries.iter().find(|e| e.name == "plan.pdf").unwrap();
    assert!(plan.is_drawing);
    let notes = picker.entries.iter().find(|e| e.name == "notes.txt").unwrap();
    assert!(!notes.is_drawing);
    let sub = picker.entries.iter().find(|e| e.name == "sub").unwrap();
    assert!(sub.is_dir);
    assert!(!picker.entries.iter().any(|e| e.name == ".hidden.pdf"));
}

#[test]
fn enter_directory_navigates_and_refreshes() {
    let td = tempfile::tempdir().unwrap();
    let sub = td.path().join("sub");
    std::fs::create_dir(&sub).unwrap();
    std::fs::write(sub.join("inner.dxf"), b"x").unwrap();

    let mut picker = FilePickerState::new();
    picker.current_dir = td.path().to_path_buf();
    picker.refresh_entries();

    let pos = picker.entries.iter().position(|e| e.name == "sub").unwrap();
    picker.cursor = pos;
    assert!(picker.enter_directory());

    assert_eq!(picker.current_dir, sub);
    assert!(picker.entries.iter().any(|e| e.name == "inner.dxf"));
}

// ── Quit confirmation ───────────────────────────────────────────

#[test]
fn quit_asks_for_confirmation_then_quits() {
    let mut app = test_app();

    app.update(Action::Quit);
    assert!(app.confirm_quit);
    assert!(!app.should_quit);

    app.update(Action::Quit);
    assert!(app.should_quit);
}

#[test]
fn quit_confirmation_esc_cancels() {
    let mut app = test_app();

    app.update(Action::Quit);
    app.update(Action::NavigateBack);

    assert!(!app.confirm_quit);
    assert!(!app.should_quit);
}

// ── Help overlay ────────────────────────────────────────────────

#[test]
fn help_opens_and_swallows_actions() {
    let mut app = test_app();
    app.selected_drawing = Some(PathBuf::from("drawing.pdf"));

    app.update(Action::ToggleHelp);
    assert!(app.show_help);

    // Submit is ignored while help is open
    app.update(Action::Submit);
    assert!(app.extracted_text.is_empty());

    app.update(Action::ToggleHelp);
    assert!(!app.show_help);
}
