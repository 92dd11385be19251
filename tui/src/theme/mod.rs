//! Theme and Colors
//!
//! Palette for the chat surface.

use ratatui::style::Color;

/// Assistant text accent
pub const ASSISTANT_MAGENTA: Color = Color::Magenta;

/// User input green
pub const USER_GREEN: Color = Color::Rgb(130, 220, 130);

/// Source citation header
pub const SOURCE_BLUE: Color = Color::Rgb(150, 180, 255);

/// System/dim text
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);

/// Error red
pub const ERROR_RED: Color = Color::Rgb(255, 80, 80);

/// Success green
pub const SUCCESS_GREEN: Color = Color::Rgb(120, 230, 120);
