//! Calculator widgets

mod help;
mod result;
mod stats;
mod tabs;

pub use help::HelpWidget;
pub use result::ResultWidget;
pub use stats::StatsWidget;
pub use tabs::{PageBar, SurvivorTabs};
