use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;

use crate::app::{handle_input, App};
use crate::app::search::{detail_path, matching_indices};
use crate::config::AppConfig;
use crate::data::models::CatalogSnapshot;
use crate::data::remote::CatalogClient;
use crate::locale;
use crate::ui;

/// Run the main application event loop: draw, poll, dispatch, one handler at
/// a time.
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events for now
                }
            }
        }
    }
    Ok(())
}

/// Run without a UI: load the catalog once and print its stats.
pub async fn run_headless(config: &AppConfig, query: Option<&str>, json: bool) -> Result<()> {
    let client = CatalogClient::new(config.base_url.clone());

    let snapshot = match client.load_snapshot(config.lang).await {
        Ok(snapshot) => snapshot,
        Err(error) => {
            tracing::error!(%error, "catalog initialization failed");
            eprintln!("{}", locale::strings(config.lang).msg_init_failed);
            return Err(error.into());
        }
    };

    let stats = build_headless_stats(&snapshot, config, query);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        render_headless_stats(&stats);
    }

    Ok(())
}

fn render_headless_stats(stats: &HeadlessStats) {
    println!("\n{}", stats.site_title);
    println!("{}", "=".repeat(stats.site_title.chars().count().max(8)));
    println!("Owner: {}", stats.owner);
    println!("Language: {}", stats.language);
    println!("Datasets: {} of {} shown", stats.datasets.len(), stats.total_datasets);

    for dataset in &stats.datasets {
        println!(
            "- {} | {} | {} variables | {}",
            dataset.slug, dataset.title, dataset.variables, dataset.detail
        );
    }
}

fn build_headless_stats(
    snapshot: &CatalogSnapshot,
    config: &AppConfig,
    query: Option<&str>,
) -> HeadlessStats {
    let fields = locale::site_fields(config.lang);
    let indices = matching_indices(&snapshot.datasets, query.unwrap_or(""));

    let datasets = indices
        .into_iter()
        .filter_map(|index| snapshot.datasets.get(index))
        .map(|dataset| HeadlessDataset {
            slug: dataset.slug.clone(),
            title: dataset.title.clone(),
            summary: dataset.summary.clone(),
            variables: dataset.variables.len(),
            detail: detail_path(&dataset.slug),
        })
        .collect();

    HeadlessStats {
        site_title: snapshot.site.resolve(&fields.title),
        owner: snapshot.site.resolve(&fields.owner),
        language: config.lang.as_str().to_string(),
        total_datasets: snapshot.datasets.len(),
        datasets,
    }
}

#[derive(serde::Serialize)]
struct HeadlessStats {
    site_title: String,
    owner: String,
    language: String,
    total_datasets: usize,
    datasets: Vec<HeadlessDataset>,
}

#[derive(serde::Serialize)]
struct HeadlessDataset {
    slug: String,
    title: String,
    summary: String,
    variables: usize,
    detail: String,
}
