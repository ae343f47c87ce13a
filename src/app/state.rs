use std::path::PathBuf;

use super::controllers::catalog::Catalog;
use super::controllers::draft::PersonDraft;
use super::controllers::session::{OrderSession, SubmitOutcome};
use super::domain::{AppSettings, Message, Summary, ThemeMode};
use super::infrastructure::error::Result;

/// Which screen the front end should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Setup,
    Order,
    Summary,
    Settings,
}

/// Whether the dispatch loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct AppState {
    pub session: OrderSession,
    pub catalog: Catalog,
    pub draft: PersonDraft,
    pub settings: AppSettings,
    pub view: View,
    /// Last summary produced, shown on the summary screen.
    pub summary: Option<Summary>,
    /// Where settings are written; None keeps them in memory only.
    settings_path: Option<PathBuf>,
}

impl AppState {
    pub fn new(settings: AppSettings, catalog: Catalog, settings_path: Option<PathBuf>) -> Self {
        let draft = PersonDraft::new(&catalog);
        Self {
            session: OrderSession::new(),
            catalog,
            draft,
            settings,
            view: View::Setup,
            summary: None,
            settings_path,
        }
    }

    pub fn theme(&self) -> ThemeMode {
        self.settings.theme
    }

    /// Apply one message. On error the state is left as it was and the
    /// caller re-prompts.
    pub fn handle(&mut self, msg: Message) -> Result<Flow> {
        tracing::debug!(?msg, view = ?self.view, "Dispatching message");

        match msg {
            Message::AdjustPeople(delta) => {
                self.session.adjust_party_size(delta);
            }
            Message::SetPeople(n) => {
                self.session.try_set_party_size(n)?;
            }
            Message::StartOrder => self.start_order(),

            Message::AddRow => {
                self.draft.add_row(&self.catalog);
            }
            Message::RemoveRow(i) => {
                self.draft.remove_row(i)?;
            }
            Message::StepQuantity(i, delta) => {
                self.draft.step_quantity(i, delta)?;
            }
            Message::SetQuantity(i, text) => {
                self.draft.set_quantity(i, &text)?;
            }
            Message::SelectItem(i, name) => {
                self.draft.select_item(i, &name, &self.catalog)?;
            }
            Message::SelectVariant(i, variant) => {
                self.draft.select_variant(i, variant)?;
            }
            Message::NextPerson => self.next_person()?,

            Message::Restart | Message::BackHome => self.reset(),

            Message::ToggleTheme => self.toggle_theme(),
            Message::OpenSettings => self.view = View::Settings,
            Message::CloseSettings => self.view = View::Setup,
            Message::AddSpecialty(name) => {
                self.catalog.add(&name);
            }
            Message::RemoveSpecialty(name) => {
                self.catalog.remove(&name);
            }

            Message::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn start_order(&mut self) {
        self.session.start();
        self.draft = PersonDraft::new(&self.catalog);
        self.summary = None;
        self.view = View::Order;
    }

    fn next_person(&mut self) -> Result<()> {
        let items = self.draft.build(&self.catalog)?;
        match self.session.submit_current_person(&items)? {
            SubmitOutcome::Advance(_) => {
                self.draft = PersonDraft::new(&self.catalog);
            }
            SubmitOutcome::Complete => {
                self.summary = Some(self.session.summary()?);
                self.view = View::Summary;
            }
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.session.reset();
        self.draft = PersonDraft::new(&self.catalog);
        self.summary = None;
        self.view = View::Setup;
    }

    fn toggle_theme(&mut self) {
        self.settings.theme = self.settings.theme.toggled();
        if let Some(path) = &self.settings_path
            && let Err(e) = self.settings.save_to(path)
        {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }
}
