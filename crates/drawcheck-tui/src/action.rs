/// A user intent produced by the input layer and consumed by `App::update`.
///
/// Keys map to the same action on every screen; `update` decides what the
/// action means for the screen currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NavigateBack,
    MoveDown,
    MoveUp,
    PageDown,
    PageUp,
    GoTop,
    GoBottom,
    /// Enter: open a directory / pick a file / submit the form.
    DrillIn,
    /// Space: mark the entry under the cursor in the file picker.
    Select,
    /// Submit the currently selected drawing for review.
    Submit,
    OpenFilePicker,
    ToggleHelp,
    Tick,
    Resize(u16, u16),
    None,
}
