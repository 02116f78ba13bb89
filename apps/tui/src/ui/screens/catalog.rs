use crate::app::search::{detail_path, summary_preview};
use crate::app::App;
use crate::ui::widgets::tables::scroll_offset;
use chrono::{Datelike, Local};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

// Title line, summary line, spacer.
const LINES_PER_CARD: usize = 3;

pub fn render_catalog(app: &App, f: &mut Frame<'_>) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Brand header
            Constraint::Length(3), // Search input
            Constraint::Min(5),    // Card list
            Constraint::Length(2), // Footer + status
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(area);

    let brand = app.site_text(|fields| &fields.title);
    let header = Paragraph::new(TextLine::from(Span::styled(
        brand,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Left);
    f.render_widget(header, chunks[0]);

    render_search_box(app, f, chunks[1]);
    render_cards(app, f, chunks[2]);
    render_footer(app, f, chunks[3]);

    let shortcuts = TextLine::from(vec![
        Span::styled(
            "/",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(": Search | ", Style::default().fg(Color::Gray)),
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(": Navigate | ", Style::default().fg(Color::Gray)),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(": Variables | ", Style::default().fg(Color::Gray)),
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(": Request access | ", Style::default().fg(Color::Gray)),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(": Quit", Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(
        Paragraph::new(shortcuts).alignment(Alignment::Center),
        chunks[4],
    );
}

fn render_search_box(app: &App, f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let border_style = if app.search_active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if app.search_active { "█" } else { "" };
    let search = Paragraph::new(format!("{}{cursor}", app.catalog_query)).block(
        Block::default()
            .title(" Search datasets ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(search, area);
}

fn render_cards(app: &App, f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let total = app.visible_datasets.len();
    let block = Block::default()
        .title(format!(" Datasets ({total}) "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if total == 0 {
        let empty = Paragraph::new("No datasets match.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(empty, inner);
        return;
    }

    let max_visible_cards = (inner.height as usize / LINES_PER_CARD).max(1);
    let offset = scroll_offset(total, max_visible_cards, app.selected_dataset_index);

    let mut lines: Vec<TextLine<'_>> = Vec::new();
    for (position, &catalog_index) in app
        .visible_datasets
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_cards)
    {
        let Some(dataset) = app.datasets().get(catalog_index) else {
            continue;
        };
        let is_selected = position == app.selected_dataset_index;

        let title_style = if is_selected {
            Style::default()
                .bg(Color::Rgb(0, 0, 238))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };
        let prefix = if is_selected { "> " } else { "  " };

        lines.push(TextLine::from(Span::styled(
            format!("{prefix}{}", dataset.title),
            title_style,
        )));
        lines.push(TextLine::from(vec![
            Span::raw("    "),
            Span::styled(
                summary_preview(&dataset.summary),
                Style::default().fg(Color::Gray),
            ),
            Span::raw("  "),
            Span::styled(
                detail_path(&dataset.slug),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(TextLine::from(""));
    }

    let cards = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
    f.render_widget(cards, inner);
}

fn render_footer(app: &App, f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let owner = app.site_text(|fields| &fields.owner);
    let affiliation = app.site_text(|fields| &fields.affiliation);

    let mut footer = format!("© {} {owner}", Local::now().year());
    if !affiliation.is_empty() {
        footer.push_str(" · ");
        footer.push_str(&affiliation);
    }

    let status_style = Style::default().fg(Color::Green);
    let text = Text::from(vec![
        TextLine::from(Span::styled(footer, Style::default().fg(Color::Gray))),
        TextLine::from(Span::styled(app.status_message.clone(), status_style)),
    ]);
    f.render_widget(Paragraph::new(text).alignment(Alignment::Left), area);
}
