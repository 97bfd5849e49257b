//! TUI widgets for sortvis

pub mod bar_chart;

pub use bar_chart::SceneChart;
