use crate::data::ContentStore;
use crate::model::{Activity, AppState, Language, Theme};
use egui_commonmark::CommonMarkCache;
use std::collections::HashSet;

// Submódulos
pub mod actions;
pub mod catalog;
pub mod navigation;
pub mod progress;
pub mod quiz;
pub mod resets;
pub mod view_models;

use catalog::CourseFilter;
use navigation::StepNavigator;
use progress::{ProgressStore, keys, saved_flag};

/// Contexto explícito de la sesión: lo que antes serían globales de UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub language: Language,
    pub theme: Theme,
    pub view: AppState,
    pub activity: Activity,
    pub selected_course: Option<String>,
    pub sidebar_collapsed: bool,
}

impl Settings {
    /// Lee los ajustes guardados; lo que falte o no se entienda toma su valor por defecto.
    pub fn load(store: &dyn ProgressStore) -> Self {
        let get = |key: &str| store.get(key);
        Self {
            language: get(keys::LANGUAGE)
                .and_then(|v| Language::from_code(&v))
                .unwrap_or_default(),
            theme: get(keys::THEME)
                .and_then(|v| Theme::from_code(&v))
                .unwrap_or_default(),
            view: get(keys::VIEW)
                .and_then(|v| AppState::from_code(&v))
                .unwrap_or_default(),
            activity: get(keys::ACTIVITY)
                .and_then(|v| Activity::from_code(&v))
                .unwrap_or_default(),
            selected_course: get(keys::SELECTED_COURSE).filter(|v| !v.is_empty()),
            sidebar_collapsed: saved_flag(store, keys::SIDEBAR_COLLAPSED),
        }
    }
}

pub struct LearnApp {
    pub content: ContentStore,
    pub store: Box<dyn ProgressStore>,
    pub settings: Settings,
    pub navigator: StepNavigator,
    pub filter: CourseFilter,
    pub message: String,
    pub cm_cache: CommonMarkCache,
    /// Bloques de código desplegados en el paso actual.
    pub expanded_code: HashSet<usize>,
    /// Se pulsó el enlace al sandbox: mostrar la alternativa local.
    pub sandbox_help: bool,
    pub confirm_reset: bool,
}

impl LearnApp {
    pub fn new(content: ContentStore, store: Box<dyn ProgressStore>) -> Self {
        let mut settings = Settings::load(store.as_ref());

        // Un curso guardado que ya no existe se descarta
        if let Some(id) = settings.selected_course.clone() {
            if content.course(settings.language, &id).is_none() {
                log::warn!("saved course {id:?} not found, falling back to catalog");
                settings.selected_course = None;
                if settings.view == AppState::CourseDetails {
                    settings.view = AppState::Catalog;
                }
            }
        }
        if settings.view == AppState::CourseDetails && settings.selected_course.is_none() {
            settings.view = AppState::Catalog;
        }

        let (steps, key) = track_for(&content, &settings);
        let navigator = StepNavigator::new(steps, key, store.as_ref());
        log::info!(
            "starting in {:?} view, {} track ({}), step {}",
            settings.view,
            settings.activity.code(),
            settings.language.code(),
            navigator.current_index()
        );

        Self {
            content,
            store,
            settings,
            navigator,
            filter: CourseFilter::default(),
            message: String::new(),
            cm_cache: CommonMarkCache::default(),
            expanded_code: HashSet::new(),
            sandbox_help: false,
            confirm_reset: false,
        }
    }

    /// Reconstruye el navegador para la pista que indican los ajustes actuales.
    pub(crate) fn reload_track(&mut self) {
        let (steps, key) = track_for(&self.content, &self.settings);
        self.navigator.switch_track(steps, key, self.store.as_ref());
        self.expanded_code.clear();
        self.sandbox_help = false;
    }
}

fn track_for(content: &ContentStore, settings: &Settings) -> (Vec<crate::model::Step>, String) {
    let course = match settings.activity {
        Activity::Course => settings
            .selected_course
            .as_deref()
            .or_else(|| content.default_course_id(settings.language)),
        Activity::Workshop => None,
    };
    let steps = content.track(settings.language, settings.activity, course);
    let key = keys::step_key(settings.activity, course, settings.language);
    (steps, key)
}
