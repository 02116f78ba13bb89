use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen, RequestField, RequestPhase};
use crate::mailer;
use crossterm::event::KeyCode;

pub fn handle_request_input(app: &mut App, key: KeyCode) {
    if app.request.phase == RequestPhase::Submitted {
        handle_submitted_input(app, key);
        return;
    }

    if app.request.editing {
        match key {
            KeyCode::Esc | KeyCode::Enter => {
                app.request.editing = false;
            }
            KeyCode::Backspace => {
                if let Some(text) = app.request.active_text_mut() {
                    text.pop();
                }
            }
            KeyCode::Char(ch) => {
                if let Some(text) = app.request.active_text_mut() {
                    text.push(ch);
                }
            }
            _ => {}
        }
        return;
    }

    let field_count = RequestField::ORDER.len();
    let dataset_count = app.datasets().len();

    match key {
        KeyCode::Esc => {
            app.status_message.clear();
            app.screen = AppScreen::Catalog;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Up => {
            app.request.field =
                RequestField::from_index(wrap_decrement(app.request.field.index(), field_count));
        }
        KeyCode::Down => {
            app.request.field =
                RequestField::from_index(wrap_increment(app.request.field.index(), field_count));
        }
        KeyCode::Left => {
            if app.request.field == RequestField::Datasets {
                app.request.dataset_cursor =
                    wrap_decrement(app.request.dataset_cursor, dataset_count);
            }
        }
        KeyCode::Right => {
            if app.request.field == RequestField::Datasets {
                app.request.dataset_cursor =
                    wrap_increment(app.request.dataset_cursor, dataset_count);
            }
        }
        KeyCode::Char(' ') => match app.request.field {
            RequestField::Datasets => app.request.toggle_current_dataset(),
            RequestField::Agree => app.request.agree = !app.request.agree,
            _ => {}
        },
        KeyCode::Char('s') => {
            app.submit_request();
        }
        KeyCode::Enter => match app.request.field {
            RequestField::Datasets => app.request.toggle_current_dataset(),
            RequestField::Agree => app.request.agree = !app.request.agree,
            RequestField::Submit => app.submit_request(),
            field if field.is_text() => app.request.editing = true,
            _ => {}
        },
        _ => {}
    }
}

fn handle_submitted_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('o') => {
            if let Some(uri) = app.composed.clone() {
                match mailer::hand_off(&uri) {
                    Ok(()) => {
                        app.status_message = "Handed off to the mail client".to_string();
                    }
                    Err(error) => {
                        app.status_message = format!("Error: could not open mail client: {error}");
                    }
                }
            }
        }
        KeyCode::Char('n') => {
            app.request.reset();
            app.composed = None;
            app.status_message.clear();
        }
        KeyCode::Esc => {
            app.screen = AppScreen::Catalog;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {}
    }
}
