mod form;
mod jar;
mod list;

use std::time::Duration;

use api_types::Id;
use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ledger::{FormMode, LedgerStats};

use crate::{
    client::Client,
    config::{AppConfig, JarSource},
    error::{AppError, Result},
    route::Route,
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

pub use form::{FormField, FormState};
pub use jar::JarState;
pub use list::LedgerState;

use form::{SubmitError, SubmitOutcome, submit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Ledger,
    Jar,
    Stats,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Home, Section::Ledger, Section::Jar, Section::Stats];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Ledger => "Ledger",
            Self::Jar => "Jar",
            Self::Stats => "Stats",
        }
    }

    pub fn shortcut(self) -> char {
        match self {
            Self::Home => 'h',
            Self::Ledger => 'l',
            Self::Jar => 'j',
            Self::Stats => 's',
        }
    }

    fn from_shortcut(ch: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.shortcut() == ch.to_ascii_lowercase())
    }

    fn route(self) -> Route {
        match self {
            Self::Home => Route::Home,
            Self::Ledger => Route::Ledger,
            Self::Jar => Route::Jar,
            Self::Stats => Route::Stats,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub section: Section,
    pub ledger: LedgerState,
    pub jar: JarState,
    pub stats: Option<LedgerStats>,
    pub form: FormState,
    pub base_url: String,
    pub last_refresh: Option<DateTime<Local>>,
}

pub struct App {
    config: AppConfig,
    client: Client,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Client::new(&config.base_url)?;
        let state = AppState {
            screen: Screen::Main,
            section: Section::Home,
            ledger: LedgerState::default(),
            jar: JarState::default(),
            stats: None,
            form: FormState::default(),
            base_url: client.base_url().to_string(),
            last_refresh: None,
        };

        Ok(Self {
            config,
            client,
            state,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let route = self.config.start_route()?;
        let mut terminal = ui::setup_terminal()?;
        self.navigate(route).await;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key).await;
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Shows the view for `route`, fetching what that view needs.
    pub async fn navigate(&mut self, route: Route) {
        tracing::info!(%route, "navigate");
        match route {
            Route::LedgerForm(id) => self.open_form(id).await,
            Route::Home => {
                self.show(Section::Home);
                self.load_jar().await;
                self.load_stats().await;
                self.load_ledger().await;
            }
            Route::Ledger => {
                self.show(Section::Ledger);
                self.load_ledger().await;
            }
            Route::Jar => {
                self.show(Section::Jar);
                self.load_jar().await;
            }
            Route::Stats => {
                self.show(Section::Stats);
                self.load_stats().await;
            }
        }
    }

    fn show(&mut self, section: Section) {
        self.state.screen = Screen::Main;
        self.state.section = section;
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        let editing = self.state.screen == Screen::Form;
        match map_key(key, editing) {
            AppAction::Quit => self.should_quit = true,
            action if editing => self.handle_form_action(action).await,
            action => self.handle_main_action(action).await,
        }
    }

    async fn handle_main_action(&mut self, action: AppAction) {
        let lists_ledger = matches!(self.state.section, Section::Home | Section::Ledger);
        match action {
            AppAction::Up if lists_ledger => self.state.ledger.select_prev(),
            AppAction::Down if lists_ledger => self.state.ledger.select_next(),
            AppAction::Backspace if self.state.section == Section::Jar => {
                self.state.jar.jar.pop_cost_char();
            }
            AppAction::Input(ch) => {
                if let Some(section) = Section::from_shortcut(ch) {
                    self.navigate(section.route()).await;
                    return;
                }
                match ch {
                    'r' | 'R' => self.navigate(self.state.section.route()).await,
                    'a' | 'A' if lists_ledger => self.navigate(Route::LedgerForm(None)).await,
                    'u' | 'U' if lists_ledger => self.update_selected().await,
                    'd' | 'D' if lists_ledger => self.delete_selected().await,
                    _ if self.state.section == Section::Jar => {
                        self.state.jar.jar.push_cost_char(ch);
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }

    async fn handle_form_action(&mut self, action: AppAction) {
        match action {
            AppAction::Cancel => return self.navigate(Route::Home).await,
            AppAction::Submit => return self.submit_form().await,
            _ => {}
        }

        let form = &mut self.state.form;
        match action {
            AppAction::NextField => form.next_field(),
            AppAction::PrevField => form.prev_field(),
            AppAction::Up => form.up(),
            AppAction::Down => form.down(),
            AppAction::Backspace => form.backspace(),
            AppAction::Input(ch) => form.input(ch),
            _ => {}
        }
    }

    async fn update_selected(&mut self) {
        match self.state.ledger.selected_id().cloned() {
            Some(id) => self.navigate(Route::LedgerForm(Some(id))).await,
            None => tracing::warn!("no transaction with an id selected"),
        }
    }

    async fn delete_selected(&mut self) {
        let Some(id) = self.state.ledger.selected_id().cloned() else {
            tracing::warn!("no transaction with an id selected");
            return;
        };
        match self.client.ledger_delete(&id).await {
            Ok(()) => {
                tracing::info!(%id, "transaction deleted");
                self.load_ledger().await;
            }
            Err(err) => tracing::error!(%id, error = %err, "failed to delete transaction"),
        }
    }

    async fn open_form(&mut self, id: Option<Id>) {
        let mode = id.map_or(FormMode::Create, FormMode::Update);
        let mut form = FormState::new(mode.clone());

        match self.client.category_list().await {
            Ok(categories) => form.set_categories(categories),
            Err(err) => tracing::error!(error = %err, "failed to fetch categories"),
        }
        if let FormMode::Update(id) = &mode {
            match self.client.ledger_get(id).await {
                Ok(tx) => form.form.prefill(&tx),
                Err(err) => {
                    tracing::error!(%id, error = %err, "failed to fetch transaction details");
                }
            }
        }

        self.state.form = form;
        self.state.screen = Screen::Form;
    }

    async fn submit_form(&mut self) {
        match submit(&self.client, &mut self.state.form).await {
            Ok(SubmitOutcome::Created(id)) => {
                tracing::info!(%id, "transaction created");
                self.navigate(Route::Home).await;
            }
            Ok(SubmitOutcome::Updated(id)) => {
                tracing::info!(%id, "transaction updated");
                self.navigate(Route::Home).await;
            }
            Err(SubmitError::Invalid(err)) => {
                self.state.form.message = Some(err.to_string());
            }
            Err(SubmitError::Client(err)) => {
                self.state.form.message = None;
                tracing::error!(error = %err, "failed to submit transaction");
            }
        }
    }

    async fn load_ledger(&mut self) {
        match self.client.ledger_list().await {
            Ok(items) => {
                self.state.ledger.set_items(items);
                self.touch();
            }
            Err(err) => tracing::error!(error = %err, "failed to fetch transactions"),
        }
    }

    async fn load_jar(&mut self) {
        let res = match self.config.jar_source {
            JarSource::Total => self.client.ledger_total().await,
            JarSource::Ledger => self.client.ledger_list().await,
        };
        match res {
            Ok(items) => {
                self.state.jar.set_transactions(items);
                self.touch();
            }
            Err(err) => tracing::error!(error = %err, "failed to fetch jar transactions"),
        }
    }

    async fn load_stats(&mut self) {
        match self.client.ledger_list().await {
            Ok(items) => {
                self.state.stats = Some(LedgerStats::from_transactions(&items));
                self.touch();
            }
            Err(err) => tracing::error!(error = %err, "failed to fetch transactions for stats"),
        }
    }

    fn touch(&mut self) {
        self.state.last_refresh = Some(Local::now());
    }
}
