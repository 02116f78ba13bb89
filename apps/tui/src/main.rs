use clap::Parser;
use color_eyre::Result;

use labdata_tui::app::App;
use labdata_tui::cli::CliArgs;
use labdata_tui::config::init_app_config;
use labdata_tui::data::remote::CatalogClient;
use labdata_tui::{event, logger, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    logger::init_logger(args.debug);

    let config = init_app_config()?;

    // Headless mode also covers a non-terminal stdout (pipes, CI)
    if args.headless || !is_terminal() {
        return event::run_headless(&config, args.query.as_deref(), args.json).await;
    }

    // Both startup fetches happen before the terminal is taken over, so a
    // failure notice never fights the alternate screen.
    let client = CatalogClient::new(config.base_url.clone());
    let mut app = App::new(config.lang);
    app.load_catalog(&client).await;

    let mut terminal = terminal::setup_terminal()?;

    // The site title doubles as the terminal window title
    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::SetTitle(app.site_text(|fields| &fields.title))
    );

    let result = event::run(&mut terminal, &mut app).await;

    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
