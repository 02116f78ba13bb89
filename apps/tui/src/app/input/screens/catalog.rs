use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_catalog_input(app: &mut App, key: KeyCode) {
    if app.search_active {
        match key {
            KeyCode::Esc | KeyCode::Enter => {
                app.search_active = false;
            }
            KeyCode::Backspace => {
                app.catalog_query.pop();
                app.refresh_catalog_filter();
            }
            KeyCode::Char(ch) => {
                app.catalog_query.push(ch);
                app.refresh_catalog_filter();
            }
            _ => {}
        }
        return;
    }

    let total_rows = app.visible_datasets.len();

    match key {
        KeyCode::Char('/') => {
            app.search_active = true;
        }
        KeyCode::Esc => {
            if !app.catalog_query.is_empty() {
                app.catalog_query.clear();
                app.refresh_catalog_filter();
            }
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('r') => {
            app.open_request();
        }
        KeyCode::Enter => {
            if total_rows > 0 {
                app.open_variables();
            }
        }
        KeyCode::Up => {
            if app.selected_dataset_index > 0 {
                app.selected_dataset_index -= 1;
            }
        }
        KeyCode::Down => {
            if total_rows > 0 && app.selected_dataset_index + 1 < total_rows {
                app.selected_dataset_index += 1;
            }
        }
        KeyCode::PageUp => {
            app.selected_dataset_index = app.selected_dataset_index.saturating_sub(5);
        }
        KeyCode::PageDown => {
            if total_rows > 0 {
                let new_index = app.selected_dataset_index + 5;
                app.selected_dataset_index = if new_index >= total_rows {
                    total_rows - 1
                } else {
                    new_index
                };
            }
        }
        KeyCode::Home => {
            app.selected_dataset_index = 0;
        }
        KeyCode::End => {
            if total_rows > 0 {
                app.selected_dataset_index = total_rows - 1;
            }
        }
        _ => {}
    }
}
