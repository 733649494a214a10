//! UI layer for desktop GUI: the single records window.

pub mod app;

pub use app::StudentsApp;
