use super::order::Variant;

/// All messages the front end can send to `AppState`.
/// Each user command maps to one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Setup
    AdjustPeople(i64),
    SetPeople(i64),
    StartOrder,

    // Order rows (row indices are 0-based)
    AddRow,
    RemoveRow(usize),
    StepQuantity(usize, i64),
    SetQuantity(usize, String),
    SelectItem(usize, String),
    SelectVariant(usize, Variant),
    NextPerson,

    // Summary
    Restart,
    BackHome,

    // Settings
    ToggleTheme,
    OpenSettings,
    CloseSettings,
    AddSpecialty(String),
    RemoveSpecialty(String),

    Quit,
}
