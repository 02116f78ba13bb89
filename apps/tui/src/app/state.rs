use crate::app::request::{compose, RequestForm};
use crate::app::search::matching_indices;
use crate::app::table::VariableTable;
use crate::data::models::{CatalogSnapshot, Dataset};
use crate::data::remote::CatalogClient;
use crate::domain::Lang;
use crate::locale::{self, FieldChain, SiteFields, Strings};
use crate::mailer;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    Catalog,
    Variables,
    Request,
}

/// Which part of the request form currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestField {
    Name,
    Org,
    Email,
    Purpose,
    Datasets,
    Agree,
    Submit,
}

impl RequestField {
    pub const ORDER: [Self; 7] = [
        Self::Name,
        Self::Org,
        Self::Email,
        Self::Purpose,
        Self::Datasets,
        Self::Agree,
        Self::Submit,
    ];

    pub fn index(self) -> usize {
        Self::ORDER.iter().position(|field| *field == self).unwrap_or(0)
    }

    pub const fn from_index(index: usize) -> Self {
        match index {
            1 => Self::Org,
            2 => Self::Email,
            3 => Self::Purpose,
            4 => Self::Datasets,
            5 => Self::Agree,
            6 => Self::Submit,
            _ => Self::Name,
        }
    }

    pub const fn is_text(self) -> bool {
        matches!(self, Self::Name | Self::Org | Self::Email | Self::Purpose)
    }
}

/// Linear request phases: collecting until a message is composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    Collecting,
    Submitted,
}

/// Editable state of the request form, one checkbox slot per dataset.
#[derive(Debug, Clone)]
pub struct RequestFormState {
    pub field: RequestField,
    pub editing: bool,
    pub name: String,
    pub org: String,
    pub email: String,
    pub purpose: String,
    pub agree: bool,
    pub checked: Vec<bool>,
    pub dataset_cursor: usize,
    pub phase: RequestPhase,
}

impl RequestFormState {
    pub fn new(dataset_count: usize) -> Self {
        Self {
            field: RequestField::Name,
            editing: false,
            name: String::new(),
            org: String::new(),
            email: String::new(),
            purpose: String::new(),
            agree: false,
            checked: vec![false; dataset_count],
            dataset_cursor: 0,
            phase: RequestPhase::Collecting,
        }
    }

    /// Flat field mapping, snapshotted for composition.
    pub fn form(&self) -> RequestForm {
        RequestForm {
            name: self.name.clone(),
            org: self.org.clone(),
            email: self.email.clone(),
            purpose: self.purpose.clone(),
            agree: self.agree,
        }
    }

    /// Checked slugs in catalog order; slugs join the checkboxes to the
    /// composed message.
    pub fn selected_slugs(&self, datasets: &[Dataset]) -> Vec<String> {
        datasets
            .iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(dataset, _)| dataset.slug.clone())
            .collect()
    }

    pub fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            RequestField::Name => Some(&mut self.name),
            RequestField::Org => Some(&mut self.org),
            RequestField::Email => Some(&mut self.email),
            RequestField::Purpose => Some(&mut self.purpose),
            _ => None,
        }
    }

    pub fn toggle_current_dataset(&mut self) {
        if let Some(slot) = self.checked.get_mut(self.dataset_cursor) {
            *slot = !*slot;
        }
    }

    /// Back to a blank collecting form with the same checkbox count.
    pub fn reset(&mut self) {
        *self = Self::new(self.checked.len());
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub lang: Lang,
    pub status_message: String,
    pub load_error: Option<String>,
    pub snapshot: Option<CatalogSnapshot>,

    // Catalog screen
    pub catalog_query: String,
    pub search_active: bool,
    pub visible_datasets: Vec<usize>,
    pub selected_dataset_index: usize,

    // Variables screen
    pub variable_table: VariableTable,
    pub variable_query: String,
    pub variable_filter_active: bool,
    pub selected_column: usize,
    pub variable_scroll: usize,
    pub variables_dataset: Option<usize>,

    // Request screen
    pub request: RequestFormState,
    pub composed: Option<String>,
}

impl App {
    pub fn new(lang: Lang) -> Self {
        Self {
            running: true,
            screen: AppScreen::Catalog,
            lang,
            status_message: String::new(),
            load_error: None,
            snapshot: None,
            catalog_query: String::new(),
            search_active: false,
            visible_datasets: Vec::new(),
            selected_dataset_index: 0,
            variable_table: VariableTable::default(),
            variable_query: String::new(),
            variable_filter_active: false,
            selected_column: 0,
            variable_scroll: 0,
            variables_dataset: None,
            request: RequestFormState::new(0),
            composed: None,
        }
    }

    pub const fn strings(&self) -> &'static Strings {
        locale::strings(self.lang)
    }

    /// Joins the two startup fetches. Either failure degrades the whole
    /// session to a single generic notice; nothing is wired afterwards.
    pub async fn load_catalog(&mut self, client: &CatalogClient) {
        match client.load_snapshot(self.lang).await {
            Ok(snapshot) => {
                self.visible_datasets = (0..snapshot.datasets.len()).collect();
                self.request = RequestFormState::new(snapshot.datasets.len());
                self.snapshot = Some(snapshot);
            }
            Err(error) => {
                tracing::error!(%error, "catalog initialization failed");
                self.load_error = Some(self.strings().msg_init_failed.to_string());
            }
        }
    }

    pub fn datasets(&self) -> &[Dataset] {
        self.snapshot
            .as_ref()
            .map_or(&[], |snapshot| snapshot.datasets.as_slice())
    }

    /// Resolves one site display field through its language's fallback chain.
    pub fn site_text(&self, select: fn(&SiteFields) -> &FieldChain) -> String {
        let chain = select(locale::site_fields(self.lang));
        self.snapshot.as_ref().map_or_else(
            || chain.fallback.to_string(),
            |snapshot| snapshot.site.resolve(chain),
        )
    }

    /// Recomputes the filtered view; the underlying sequence is untouched.
    pub fn refresh_catalog_filter(&mut self) {
        self.visible_datasets = matching_indices(self.datasets(), &self.catalog_query);
        self.selected_dataset_index = 0;
    }

    pub fn selected_dataset(&self) -> Option<&Dataset> {
        let catalog_index = *self.visible_datasets.get(self.selected_dataset_index)?;
        self.datasets().get(catalog_index)
    }

    /// Builds the variable table for the selected dataset and switches screens.
    pub fn open_variables(&mut self) {
        let Some(&catalog_index) = self.visible_datasets.get(self.selected_dataset_index) else {
            return;
        };
        let Some(variables) = self
            .datasets()
            .get(catalog_index)
            .map(|dataset| dataset.variables.clone())
        else {
            return;
        };

        self.variable_table = VariableTable::from_variables(&variables);
        self.variable_query.clear();
        self.variable_filter_active = false;
        self.selected_column = 0;
        self.variable_scroll = 0;
        self.variables_dataset = Some(catalog_index);
        self.screen = AppScreen::Variables;
    }

    pub fn refresh_variable_filter(&mut self) {
        let query = self.variable_query.clone();
        self.variable_table.apply_filter(&query);
        self.variable_scroll = 0;
    }

    pub fn open_request(&mut self) {
        self.screen = AppScreen::Request;
    }

    /// The submit handler: validate, compose, build the mailto URI. Validation
    /// failures leave the form collecting with a corrective notice.
    pub fn submit_request(&mut self) {
        let slugs = self.request.selected_slugs(self.datasets());
        match compose(&self.request.form(), &slugs, self.strings()) {
            Ok(message) => {
                let to = self.site_text(|fields| &fields.contact_email);
                self.composed = Some(mailer::mailto_uri(&to, &message.subject, &message.body));
                self.request.phase = RequestPhase::Submitted;
                self.status_message.clear();
            }
            Err(error) => {
                self.composed = None;
                self.status_message = error.notice(self.strings()).to_string();
            }
        }
    }
}
