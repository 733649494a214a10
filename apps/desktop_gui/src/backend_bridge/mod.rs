//! Bridge between the UI thread and the worker thread that owns the student client.

pub mod commands;
pub mod runtime;
