//! Terminal front end: reads commands, draws screens.

pub mod commands;
pub mod render;
pub mod theme;
