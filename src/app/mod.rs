use crate::config::AppConfig;
use crate::data::Catalog;
use crate::i18n::{Lang, Texts};
use crate::model::AppState;
use crate::session::QuizSession;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// Submodules
pub mod actions;
pub mod completion;
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod resets;
pub mod view_models;

pub use crate::view_models::{ProgressLine, ResultsSummary, TopicInfo};

/// Application state. Only the preferences are persisted between runs;
/// catalog and quiz session are rebuilt on start.
#[derive(Serialize, Deserialize)]
pub struct QuizApp {
    pub language: Lang,
    pub dark_mode: bool,
    pub catalog_dir: Option<PathBuf>,
    #[serde(skip)]
    pub catalog: Catalog,
    #[serde(skip)]
    pub session: Option<QuizSession>,
    #[serde(skip)]
    pub state: AppState,
    #[serde(skip)]
    pub input: String,
    #[serde(skip)]
    pub folder_input: String,
    #[serde(skip)]
    pub selected_topic: Option<String>,
    #[serde(skip)]
    pub message: String,
}

impl QuizApp {
    /// Builds the app from the config file settings and loads the catalog.
    pub fn new(config: AppConfig) -> Self {
        let mut app = Self::with_catalog(Catalog::default());
        app.language = config.language;
        app.dark_mode = config.dark_mode;
        app.catalog_dir = config.catalog_dir;
        app.reload_catalog();
        app
    }

    /// App over an already loaded catalog; nothing is read from disk.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            language: Lang::default(),
            dark_mode: true,
            catalog_dir: None,
            catalog,
            session: None,
            state: AppState::MainMenu,
            input: String::new(),
            folder_input: String::new(),
            selected_topic: None,
            message: String::new(),
        }
    }

    /// Restores the stored preferences, if any, on top of the config.
    /// A folder set in the config file wins over the remembered one.
    pub fn from_creation_context(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let stored: Option<QuizApp> = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY));

        let mut app = match stored {
            Some(mut prev) => {
                if config.catalog_dir.is_some() {
                    prev.catalog_dir = config.catalog_dir;
                }
                prev.reload_catalog();
                prev
            }
            None => QuizApp::new(config),
        };
        app.state = AppState::MainMenu;
        app.apply_visuals(&cc.egui_ctx);
        app
    }

    pub fn texts(&self) -> &'static Texts {
        self.language.texts()
    }

    pub fn apply_visuals(&self, ctx: &egui::Context) {
        if self.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
    }
}
