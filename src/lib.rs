#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod layout;
pub mod model;
pub mod render;
pub mod scaffold;
pub mod text_metrics;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
