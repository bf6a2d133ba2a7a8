//! Quill CLI library - command implementations and dependency wiring

pub mod commands;
pub mod context;
pub mod render;
