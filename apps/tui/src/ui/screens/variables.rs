use crate::app::App;
use crate::data::models::Variable;
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render_variables(app: &App, f: &mut Frame<'_>) {
    let area = f.area();

    let dataset_title = app
        .variables_dataset
        .and_then(|index| app.datasets().get(index))
        .map_or_else(String::new, |dataset| dataset.title.clone());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter input
            Constraint::Min(5),    // Table
            Constraint::Length(3), // Help
        ])
        .split(area);

    render_filter_box(app, f, chunks[0]);

    if app.variable_table.is_empty() {
        let block = Block::default()
            .title(format!(" Variables: {dataset_title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let paragraph = Paragraph::new("No variables documented for this dataset.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, chunks[1]);
    } else {
        render_table(app, f, chunks[1], &dataset_title);
    }

    let help_text = vec![
        Span::styled(
            "ESC",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Back   "),
        Span::styled(
            "/",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Filter   "),
        Span::styled(
            "←/→",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Column   "),
        Span::styled(
            "Enter/s",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Sort   "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Quit"),
    ];
    let help_paragraph = Paragraph::new(TextLine::from(help_text))
        .block(Block::default().borders(Borders::TOP))
        .alignment(Alignment::Center);
    f.render_widget(help_paragraph, chunks[2]);
}

fn render_filter_box(app: &App, f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let border_style = if app.variable_filter_active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if app.variable_filter_active { "█" } else { "" };
    let filter = Paragraph::new(format!("{}{cursor}", app.variable_query)).block(
        Block::default()
            .title(" Filter variables ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(filter, area);
}

fn render_table(app: &App, f: &mut Frame<'_>, area: ratatui::layout::Rect, dataset_title: &str) {
    let header_cells = Variable::COLUMNS.iter().enumerate().map(|(index, title)| {
        let is_selected = index == app.selected_column;
        let indicator = app
            .variable_table
            .direction(index)
            .map_or("", |direction| direction.indicator());

        let style = if is_selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        };

        Cell::from(format!("{title}{indicator}")).style(style)
    });
    let header = Row::new(header_cells);

    // Filtered-out rows keep their place in the table but are not drawn.
    let visible: Vec<_> = app
        .variable_table
        .rows()
        .iter()
        .filter(|row| !row.is_hidden())
        .collect();

    let total_visible = visible.len();
    let max_visible_rows = (area.height.saturating_sub(4) as usize).max(1);
    let offset = scroll_offset(total_visible, max_visible_rows, app.variable_scroll);

    let rows = visible
        .iter()
        .skip(offset)
        .take(max_visible_rows)
        .map(|row| {
            Row::new(
                row.cells()
                    .iter()
                    .map(|cell| Cell::from(cell.clone()))
                    .collect::<Vec<_>>(),
            )
            .style(Style::default().fg(Color::White))
        });

    let widths = [
        Constraint::Length(16),
        Constraint::Length(28),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(
                    " Variables: {dataset_title} ({total_visible} of {}) ",
                    app.variable_table.rows().len()
                ))
                .borders(Borders::ALL),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}
