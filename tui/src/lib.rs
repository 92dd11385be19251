//! Mailchat TUI - Terminal chat surface for the email assistant
//!
//! This crate renders a single-screen conversation with the email Q&A
//! service. It is a thin client: every decision about what may be sent and
//! what the history contains belongs to the Conductor in `mailchat-core`.
//!
//! # Architecture
//!
//! - **App**: Event loop, background backend tasks, layout
//! - **Display**: `TerminalSurface`, the Conductor's rendering target
//! - **Widgets**: Borderless scrollable text blocks
//! - **Theme**: Colors

#![warn(missing_docs)]

pub mod app;
pub mod display;
pub mod theme;
pub mod widgets;

pub use app::{App, BackgroundResult};
pub use display::TerminalSurface;
