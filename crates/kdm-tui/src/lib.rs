//! kdm-tui: Terminal UI for the roll calculator
//!
//! Renders the survivor tabs, stat inputs and result panels with ratatui and
//! drives the pure state transitions in `kdm-core` from crossterm events.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod theme;
pub mod widgets;

pub use app::{App, UiMode};
pub use config::Config;
pub use error::Error;
pub use theme::{Theme, ThemeChoice};
