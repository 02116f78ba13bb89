use crate::app::App;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// The one notice a failed initialization leaves behind.
pub fn render_failure(app: &App, f: &mut Frame<'_>) {
    let area = f.area();
    let notice = app.load_error.as_deref().unwrap_or_default();

    let popup_area = centered_rect(60, 30, area);
    f.render_widget(ClearWidget, popup_area);

    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let lines = vec![
        TextLine::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::White),
        )),
        TextLine::from(""),
        TextLine::from(vec![
            Span::styled(
                "q",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(": Quit"),
        ]),
    ];

    let popup = Paragraph::new(Text::from(lines))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(popup, popup_area);
}
