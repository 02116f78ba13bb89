// App module for labdata-tui
// Handles application state and business logic

pub mod input;
pub mod request;
pub mod search;
pub mod state;
pub mod table;

pub use input::handle_input;
pub use state::{App, AppScreen, RequestField, RequestPhase};
