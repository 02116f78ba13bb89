// Export our modules for use in binaries and tests
pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod event;
pub mod locale;
pub mod logger;
pub mod mailer;
pub mod terminal;
pub mod ui;

pub use domain::{Lang, SortDirection};
