// UI module for labdata-tui
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    // A failed initialization renders the single generic notice and nothing
    // else.
    if app.load_error.is_some() {
        screens::failure::render_failure(app, f);
        return;
    }

    match app.screen {
        AppScreen::Catalog => screens::catalog::render_catalog(app, f),
        AppScreen::Variables => screens::variables::render_variables(app, f),
        AppScreen::Request => screens::request::render_request(app, f),
    }
}
