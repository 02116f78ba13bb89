use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen};
use crate::data::models::Variable;
use crossterm::event::KeyCode;

pub fn handle_variables_input(app: &mut App, key: KeyCode) {
    if app.variable_filter_active {
        match key {
            KeyCode::Esc | KeyCode::Enter => {
                app.variable_filter_active = false;
            }
            KeyCode::Backspace => {
                app.variable_query.pop();
                app.refresh_variable_filter();
            }
            KeyCode::Char(ch) => {
                app.variable_query.push(ch);
                app.refresh_variable_filter();
            }
            _ => {}
        }
        return;
    }

    // Without rows there is nothing to filter or sort; only navigation works.
    let inert = app.variable_table.is_empty();

    match key {
        KeyCode::Esc => {
            if app.variable_query.is_empty() {
                app.screen = AppScreen::Catalog;
            } else {
                app.variable_query.clear();
                app.refresh_variable_filter();
            }
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('/') => {
            if !inert {
                app.variable_filter_active = true;
            }
        }
        KeyCode::Left => {
            app.selected_column = wrap_decrement(app.selected_column, Variable::COLUMNS.len());
        }
        KeyCode::Right => {
            app.selected_column = wrap_increment(app.selected_column, Variable::COLUMNS.len());
        }
        KeyCode::Up => {
            app.variable_scroll = app.variable_scroll.saturating_sub(1);
        }
        KeyCode::Down => {
            let visible = app.variable_table.visible_count();
            if visible > 0 && app.variable_scroll + 1 < visible {
                app.variable_scroll += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char('s') => {
            if !inert {
                let direction = app.variable_table.sort_by_column(app.selected_column);
                app.status_message = format!(
                    "Sorted by {} ({})",
                    Variable::COLUMNS[app.selected_column],
                    direction.as_str()
                );
            }
        }
        _ => {}
    }
}
