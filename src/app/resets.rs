use super::*;

impl LearnApp {
    /// Todas las claves de posición posibles con el contenido cargado.
    fn all_step_keys(&self) -> Vec<String> {
        let mut out = Vec::new();
        for lang in Language::ALL {
            out.push(keys::step_key(Activity::Workshop, None, lang));
            for course in self.content.courses(lang) {
                out.push(keys::step_key(Activity::Course, Some(&course.id), lang));
            }
            out.push(keys::step_key(Activity::Course, None, lang));
        }
        out
    }

    /// Borra posiciones y marca de completado; conserva tema, idioma y barra lateral.
    pub fn reset_progress(&mut self) {
        for key in self.all_step_keys() {
            self.store.remove(&key);
        }
        self.store.remove(keys::COMPLETED);
        self.store.remove(keys::SELECTED_COURSE);
        self.settings.selected_course = None;
        self.reload_track();
        self.confirm_reset = false;
        self.set_view(AppState::Catalog);
        log::info!("progress reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::progress::MemoryStore;

    #[test]
    fn reset_clears_positions_but_keeps_preferences() {
        let mut app = LearnApp::new(ContentStore::embedded().unwrap(), Box::new(MemoryStore::new()));
        app.toggle_theme();
        app.switch_activity(Activity::Workshop);
        app.go_next(0.0);
        app.tick(1.0);
        assert_eq!(app.navigator.current_index(), 1);

        app.reset_progress();
        assert_eq!(app.navigator.current_index(), 0);
        assert_eq!(app.store.get("lbd.workshop.step.en"), None);
        assert_eq!(app.store.get(keys::THEME).as_deref(), Some("dark"));
        assert_eq!(app.settings.view, AppState::Catalog);
    }
}
