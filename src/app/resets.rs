use super::*;
use crate::data;
use std::path::Path;

impl QuizApp {
    /// Fresh session over the finished quiz's questions (reshuffled for exams).
    pub fn repeat_quiz(&mut self) {
        if let Some(session) = &self.session {
            self.session = Some(session.repeat());
            self.input.clear();
            self.message.clear();
            self.state = AppState::Quiz;
        }
    }

    /// Reloads from the configured folder or archive, or the default pool location.
    pub fn reload_catalog(&mut self) {
        let loaded = match &self.catalog_dir {
            Some(dir) => data::load_from_path(dir),
            None => data::load_pool(&data::default_pool_dir()),
        };
        self.apply_loaded(loaded);
    }

    /// Loads the folder or `.zip` typed on the load screen and remembers it.
    pub fn load_folder_input(&mut self) {
        let path = PathBuf::from(self.folder_input.trim());
        self.load_folder(&path);
    }

    pub fn load_folder(&mut self, path: &Path) {
        let loaded = data::load_from_path(path);
        let ok = loaded.as_ref().is_ok_and(|c| !c.is_empty());
        self.apply_loaded(loaded);
        if ok {
            self.catalog_dir = Some(path.to_path_buf());
            self.state = AppState::MainMenu;
        }
    }

    fn apply_loaded(&mut self, loaded: Result<Catalog, data::CatalogError>) {
        let t = self.texts();
        match loaded {
            Ok(catalog) if !catalog.is_empty() => {
                let stats = catalog.stats();
                self.message = format!(
                    "✅ {} {} - {} {}",
                    stats.questions,
                    t.questions_loaded,
                    stats.topics,
                    t.available_topics.to_lowercase()
                );
                self.catalog = catalog;
                self.selected_topic = None;
            }
            Ok(_) => {
                self.message = format!("❌ {}", t.no_questions);
            }
            Err(e) => {
                log::warn!("{e}");
                self.message = format!("❌ {}: {e}", t.no_questions);
            }
        }
    }
}
