use super::*;
use crate::app::navigation::NavOutcome;
use crate::app::quiz::SubmitOutcome;
use crate::i18n::{Text, tr};

/// Comando de teclado ya traducido desde egui.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Previous,
    Next,
    /// Tecla numérica 1..=9.
    Digit(usize),
}

impl LearnApp {
    pub fn set_language(&mut self, lang: Language) {
        if self.settings.language == lang {
            return;
        }
        self.settings.language = lang;
        self.store.set(keys::LANGUAGE, lang.code());

        // El curso elegido puede no existir en el otro idioma
        if let Some(id) = self.settings.selected_course.clone() {
            if self.content.course(lang, &id).is_none() {
                self.settings.selected_course = None;
                self.store.remove(keys::SELECTED_COURSE);
            }
        }
        self.reload_track();
        log::info!("language -> {}", lang.code());
    }

    pub fn toggle_theme(&mut self) {
        self.settings.theme = self.settings.theme.toggled();
        self.store.set(keys::THEME, self.settings.theme.code());
    }

    pub fn toggle_sidebar(&mut self) {
        self.settings.sidebar_collapsed = !self.settings.sidebar_collapsed;
        let value = if self.settings.sidebar_collapsed { "true" } else { "false" };
        self.store.set(keys::SIDEBAR_COLLAPSED, value);
    }

    pub fn set_view(&mut self, view: AppState) {
        self.settings.view = view;
        self.store.set(keys::VIEW, view.code());
        self.message.clear();
    }

    pub fn switch_activity(&mut self, activity: Activity) {
        if self.settings.activity != activity {
            self.settings.activity = activity;
            self.store.set(keys::ACTIVITY, activity.code());
            self.reload_track();
        }
        self.set_view(AppState::Learning);
    }

    /// Abre la ficha de un curso del catálogo.
    pub fn open_course(&mut self, course_id: &str) {
        if self.content.course(self.settings.language, course_id).is_none() {
            return;
        }
        self.settings.selected_course = Some(course_id.to_string());
        self.store.set(keys::SELECTED_COURSE, course_id);
        self.set_view(AppState::CourseDetails);
    }

    pub fn start_learning(&mut self) {
        self.settings.activity = Activity::Course;
        self.store.set(keys::ACTIVITY, Activity::Course.code());
        self.reload_track();
        self.set_view(AppState::Learning);
    }

    pub fn back_to_catalog(&mut self) {
        self.set_view(AppState::Catalog);
    }

    pub fn toggle_filter(&mut self, id: &str) {
        self.filter.toggle(id);
    }

    // Navegación: todo pasa por el navegador, que ignora peticiones durante el fundido

    pub fn go_next(&mut self, now: f64) -> NavOutcome {
        let outcome = self.navigator.advance(now, self.store.as_mut());
        log::debug!("advance -> {outcome:?}");
        match outcome {
            NavOutcome::Blocked => {
                self.message = tr(self.settings.language, Text::AnswerToContinue).to_string();
            }
            NavOutcome::Transition(_) | NavOutcome::GateOpened => self.message.clear(),
            _ => {}
        }
        outcome
    }

    pub fn go_prev(&mut self, now: f64) -> NavOutcome {
        self.message.clear();
        self.navigator.retreat(now)
    }

    pub fn jump_to(&mut self, index: usize, now: f64) -> NavOutcome {
        self.navigator.jump_to(index, now)
    }

    pub fn restart_track(&mut self, now: f64) -> NavOutcome {
        self.navigator.restart(now)
    }

    pub fn answer(&mut self, option: &str) -> Option<SubmitOutcome> {
        self.message.clear();
        self.navigator.submit(option)
    }

    /// Avanza el fundido; al confirmarse un paso nuevo se limpia el estado visual.
    pub fn tick(&mut self, now: f64) -> Option<usize> {
        let committed = self.navigator.tick(now, self.store.as_mut());
        if committed.is_some() {
            self.expanded_code.clear();
            self.sandbox_help = false;
        }
        committed
    }

    /// Las teclas solo actúan en la vista de aprendizaje.
    pub fn handle_key(&mut self, key: KeyCommand, now: f64) {
        if self.settings.view != AppState::Learning || self.confirm_reset {
            return;
        }
        match key {
            KeyCommand::Previous => {
                self.go_prev(now);
            }
            KeyCommand::Next => {
                self.go_next(now);
            }
            KeyCommand::Digit(d) => {
                self.navigator.submit_digit(d);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::navigation::Phase;
    use crate::app::progress::MemoryStore;

    fn app() -> LearnApp {
        let content = ContentStore::embedded().unwrap();
        LearnApp::new(content, Box::new(MemoryStore::new()))
    }

    #[test]
    fn keys_are_ignored_outside_the_learning_view() {
        let mut app = app();
        assert_eq!(app.settings.view, AppState::Catalog);
        app.handle_key(KeyCommand::Next, 0.0);
        assert!(!app.navigator.is_fading());

        app.switch_activity(Activity::Workshop);
        app.handle_key(KeyCommand::Next, 0.0);
        assert!(app.navigator.is_fading());
    }

    #[test]
    fn digit_keys_answer_the_visible_quiz() {
        let mut app = app();
        app.switch_activity(Activity::Workshop);
        // paso 0 sin quiz, paso 1 con quiz
        app.handle_key(KeyCommand::Next, 0.0);
        app.tick(1.0);
        app.handle_key(KeyCommand::Next, 1.0);
        assert_eq!(app.navigator.phase(), Phase::QuizGate);
        app.handle_key(KeyCommand::Next, 1.0);
        assert!(!app.message.is_empty());
        app.handle_key(KeyCommand::Digit(9), 1.0);
        assert_eq!(app.navigator.quiz_state().attempts(), 0);
        app.handle_key(KeyCommand::Digit(2), 1.0);
        assert!(app.navigator.quiz_answered());
    }

    #[test]
    fn language_switch_restores_each_language_position() {
        let mut app = app();
        app.switch_activity(Activity::Workshop);
        app.go_next(0.0);
        app.tick(1.0);
        assert_eq!(app.navigator.current_index(), 1);

        app.set_language(Language::Fr);
        assert_eq!(app.navigator.current_index(), 0);
        assert_eq!(app.navigator.current_step().unwrap().title, "Créer le projet");

        app.set_language(Language::En);
        assert_eq!(app.navigator.current_index(), 1);
        assert!(!app.navigator.show_quiz());
    }

    #[test]
    fn settings_survive_a_restart() {
        let mut store = MemoryStore::new();
        store.set(keys::THEME, "dark");
        store.set(keys::LANGUAGE, "fr");
        store.set(keys::VIEW, "details");
        store.set(keys::SELECTED_COURSE, "react-state");
        store.set(keys::SIDEBAR_COLLAPSED, "true");
        let app = LearnApp::new(ContentStore::embedded().unwrap(), Box::new(store));
        assert_eq!(app.settings.theme, Theme::Dark);
        assert_eq!(app.settings.language, Language::Fr);
        assert_eq!(app.settings.view, AppState::CourseDetails);
        assert_eq!(app.settings.selected_course.as_deref(), Some("react-state"));
        assert!(app.settings.sidebar_collapsed);
    }

    #[test]
    fn unknown_saved_course_falls_back_to_the_catalog() {
        let mut store = MemoryStore::new();
        store.set(keys::VIEW, "details");
        store.set(keys::SELECTED_COURSE, "gone");
        let app = LearnApp::new(ContentStore::embedded().unwrap(), Box::new(store));
        assert_eq!(app.settings.view, AppState::Catalog);
        assert_eq!(app.settings.selected_course, None);
    }

    #[test]
    fn starting_a_course_loads_its_own_steps() {
        let mut app = app();
        app.open_course("react-state");
        assert_eq!(app.settings.view, AppState::CourseDetails);
        app.start_learning();
        assert_eq!(app.settings.view, AppState::Learning);
        assert_eq!(app.navigator.total(), 3);
        assert_eq!(app.navigator.progress_key(), "lbd.course.react-state.step.en");
    }
}
