use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "labdata-tui", version, about = "Dataset catalog TUI")]
pub struct CliArgs {
    /// Print catalog stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Filter the headless dataset list by a search query
    #[arg(long, value_name = "TEXT")]
    pub query: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Base URL the data/ resources are served from
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Catalog language (en or zh)
    #[arg(long, value_name = "LANG")]
    pub lang: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.base_url {
            std::env::set_var("LABDATA_BASE_URL", url);
        }
        if let Some(lang) = &self.lang {
            std::env::set_var("LABDATA_LANG", lang);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}
