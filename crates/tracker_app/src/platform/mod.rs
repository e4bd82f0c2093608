mod app;
mod config;
mod curated;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
