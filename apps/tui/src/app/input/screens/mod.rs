use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod catalog;
mod request;
mod variables;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    // A failed initialization leaves nothing wired except quitting.
    if app.load_error.is_some() {
        if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
            app.running = false;
        }
        return;
    }

    match app.screen {
        AppScreen::Catalog => catalog::handle_catalog_input(app, key),
        AppScreen::Variables => variables::handle_variables_input(app, key),
        AppScreen::Request => request::handle_request_input(app, key),
    }
}
