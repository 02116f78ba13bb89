use crate::app::state::{RequestField, RequestPhase};
use crate::app::App;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_request(app: &App, f: &mut Frame<'_>) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Contact block
            Constraint::Min(10),   // Form
            Constraint::Length(2), // Status
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(area);

    render_contact(app, f, chunks[0]);
    render_form(app, f, chunks[1]);
    render_status(app, f, chunks[2]);

    let shortcuts = TextLine::from(vec![
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(": Field | ", Style::default().fg(Color::Gray)),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(": Edit/Toggle | ", Style::default().fg(Color::Gray)),
        Span::styled(
            "Space",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(": Check | ", Style::default().fg(Color::Gray)),
        Span::styled(
            "s",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(": Submit | ", Style::default().fg(Color::Gray)),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(": Back", Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(
        Paragraph::new(shortcuts).alignment(Alignment::Center),
        chunks[3],
    );

    if app.request.phase == RequestPhase::Submitted {
        render_submitted_popup(app, f, area);
    }
}

fn render_contact(app: &App, f: &mut Frame<'_>, area: Rect) {
    let person = app.site_text(|fields| &fields.contact_person);
    let title = app.site_text(|fields| &fields.contact_title);
    let affiliation = app.site_text(|fields| &fields.contact_affiliation);
    let email = app.site_text(|fields| &fields.contact_email);

    let label_style = Style::default().fg(Color::Gray);
    let mut lines = vec![TextLine::from(vec![
        Span::styled("Contact: ", label_style),
        Span::styled(person, Style::default().fg(Color::White)),
    ])];
    if !title.is_empty() {
        lines.push(TextLine::from(Span::styled(title, label_style)));
    }
    if !affiliation.is_empty() {
        lines.push(TextLine::from(Span::styled(affiliation, label_style)));
    }
    lines.push(TextLine::from(vec![
        Span::styled("Email: ", label_style),
        Span::styled(email, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(" Request data access ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

fn render_form(app: &App, f: &mut Frame<'_>, area: Rect) {
    let form = &app.request;

    let field_style = |field: RequestField| {
        let is_selected = form.field == field;
        let is_editing = is_selected && form.editing;

        if is_editing {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };

    let field_label = |name: &str, field: RequestField| {
        let style = field_style(field);
        let prefix = if form.field == field && form.editing {
            "► "
        } else if form.field == field {
            "> "
        } else {
            "  "
        };

        Span::styled(format!("{prefix}{name}: "), style)
    };

    let mut lines = vec![
        TextLine::from(vec![
            field_label("Name", RequestField::Name),
            Span::styled(&form.name, field_style(RequestField::Name)),
        ]),
        TextLine::from(vec![
            field_label("Affiliation / Department", RequestField::Org),
            Span::styled(&form.org, field_style(RequestField::Org)),
        ]),
        TextLine::from(vec![
            field_label("Email", RequestField::Email),
            Span::styled(&form.email, field_style(RequestField::Email)),
        ]),
        TextLine::from(vec![
            field_label("Purpose", RequestField::Purpose),
            Span::styled(&form.purpose, field_style(RequestField::Purpose)),
        ]),
        TextLine::from(""),
        TextLine::from(field_label("Datasets", RequestField::Datasets)),
    ];

    for (index, dataset) in app.datasets().iter().enumerate() {
        let checked = form.checked.get(index).copied().unwrap_or(false);
        let mark = if checked { "[x]" } else { "[ ]" };

        let is_cursor = form.field == RequestField::Datasets && index == form.dataset_cursor;
        let style = if is_cursor {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if checked {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(TextLine::from(Span::styled(
            format!("    {mark} {}", dataset.title),
            style,
        )));
    }

    let agree_mark = if form.agree { "[x]" } else { "[ ]" };
    lines.push(TextLine::from(""));
    lines.push(TextLine::from(vec![
        field_label("Agree", RequestField::Agree),
        Span::styled(
            format!("{agree_mark} I agree to the data use terms"),
            field_style(RequestField::Agree),
        ),
    ]));
    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        if form.field == RequestField::Submit {
            "> [ Submit request ]"
        } else {
            "  [ Submit request ]"
        },
        field_style(RequestField::Submit),
    )));

    let block = Block::default()
        .title(" Application ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    if app.status_message.is_empty() {
        return;
    }

    let style = if app.status_message.starts_with("Handed off") {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    };

    let status = Paragraph::new(Span::styled(app.status_message.clone(), style))
        .alignment(Alignment::Center);
    f.render_widget(status, area);
}

fn render_submitted_popup(app: &App, f: &mut Frame<'_>, area: Rect) {
    let Some(uri) = app.composed.as_deref() else {
        return;
    };

    let popup_area = centered_rect(70, 50, area);
    f.render_widget(ClearWidget, popup_area);

    let block = Block::default()
        .title(" Request composed ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let lines = vec![
        TextLine::from("Your request is ready to send:"),
        TextLine::from(""),
        TextLine::from(Span::styled(
            uri.to_string(),
            Style::default().fg(Color::Cyan),
        )),
        TextLine::from(""),
        TextLine::from(vec![
            Span::styled(
                "o",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(": Open mail client   "),
            Span::styled(
                "n",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(": New request   "),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(": Back"),
        ]),
    ];

    let popup = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(popup, popup_area);
}
