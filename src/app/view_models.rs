use super::*;
use crate::model::{Course, Step};
use crate::view_models::{FilterCategory, StepRow, StepStatus, TrackProgress};

impl LearnApp {
    pub fn step_rows(&self) -> Vec<StepRow> {
        let current = self.navigator.current_index();
        self.navigator
            .steps()
            .iter()
            .enumerate()
            .map(|(idx, step)| StepRow {
                idx,
                title: step.title.clone(),
                duration: step.duration().map(str::to_string),
                status: if idx < current {
                    StepStatus::Completed
                } else if idx == current {
                    StepStatus::Active
                } else {
                    StepStatus::Upcoming
                },
            })
            .collect()
    }

    /// Posición 1-based dentro de la pista activa.
    pub fn track_progress(&self) -> TrackProgress {
        let total = self.navigator.total();
        TrackProgress {
            position: if total == 0 { 0 } else { self.navigator.current_index() + 1 },
            total,
        }
    }

    pub fn visible_courses(&self) -> Vec<&Course> {
        self.filter.apply(self.content.courses(self.settings.language))
    }

    pub fn filter_categories(&self) -> Vec<FilterCategory> {
        catalog::filter_categories(self.content.courses(self.settings.language), self.settings.language)
    }

    pub fn selected_course(&self) -> Option<&Course> {
        let id = self.settings.selected_course.as_deref()?;
        self.content.course(self.settings.language, id)
    }

    pub fn selected_course_steps(&self) -> Vec<&Step> {
        match self.settings.selected_course.as_deref() {
            Some(id) => self.content.course_steps(self.settings.language, Some(id)),
            None => Vec::new(),
        }
    }

    /// Título de la actividad para la cabecera de la barra lateral.
    pub fn track_title(&self) -> String {
        match self.settings.activity {
            Activity::Workshop => crate::i18n::tr(self.settings.language, crate::i18n::Text::Workshop).to_string(),
            Activity::Course => self
                .settings
                .selected_course
                .as_deref()
                .or_else(|| self.content.default_course_id(self.settings.language))
                .and_then(|id| self.content.course(self.settings.language, id))
                .map(|c| c.title.clone())
                .unwrap_or_else(|| crate::i18n::tr(self.settings.language, crate::i18n::Text::Theory).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::progress::MemoryStore;

    #[test]
    fn rows_mark_completed_active_and_upcoming() {
        let mut app = LearnApp::new(ContentStore::embedded().unwrap(), Box::new(MemoryStore::new()));
        app.switch_activity(Activity::Workshop);
        app.go_next(0.0);
        app.tick(1.0);
        let rows = app.step_rows();
        assert_eq!(rows[0].status, StepStatus::Completed);
        assert!(rows[0].clickable());
        assert_eq!(rows[1].status, StepStatus::Active);
        assert_eq!(rows[2].status, StepStatus::Upcoming);
        assert!(!rows[2].clickable());
        let progress = app.track_progress();
        assert_eq!(progress.position, 2);
        assert_eq!(progress.total, rows.len());
    }
}
