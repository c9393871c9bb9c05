use crate::app::LearnApp;
use crate::i18n::{Text, tr};
use crate::ui::layout::{simple_panel, wide_button};
use egui::{Context, RichText};

pub fn ui_course_details(app: &mut LearnApp, ctx: &Context) {
    let lang = app.settings.language;
    let Some(course) = app.selected_course().cloned() else {
        // Sin curso válido no hay ficha que enseñar
        app.back_to_catalog();
        return;
    };
    let steps: Vec<(String, Option<String>)> = app
        .selected_course_steps()
        .into_iter()
        .map(|s| (s.title.clone(), s.duration().map(str::to_string)))
        .collect();

    simple_panel(ctx, 760.0, |ui| {
        if ui.button(tr(lang, Text::BackToCourses)).clicked() {
            app.back_to_catalog();
            return;
        }
        ui.add_space(10.0);

        ui.heading(&course.title);
        let mut facts = Vec::new();
        if !course.difficulty.is_empty() {
            facts.push(course.difficulty.clone());
        }
        if !course.duration.is_empty() {
            facts.push(course.duration.clone());
        }
        facts.push(format!("{} {}", steps.len(), tr(lang, Text::Steps).to_lowercase()));
        ui.label(RichText::new(facts.join(" · ")).weak());
        if !course.tags.is_empty() {
            ui.horizontal_wrapped(|ui| {
                for tag in &course.tags {
                    ui.label(RichText::new(format!("#{tag}")).small());
                }
            });
        }
        ui.add_space(8.0);
        ui.label(&course.description);

        if !course.what_you_will_learn.is_empty() {
            ui.add_space(12.0);
            ui.strong(tr(lang, Text::WhatYouWillLearn));
            for item in &course.what_you_will_learn {
                ui.label(format!("✔ {item}"));
            }
        }

        if !course.prerequisites.is_empty() {
            ui.add_space(12.0);
            ui.strong(tr(lang, Text::Prerequisites));
            for item in &course.prerequisites {
                ui.label(format!("• {item}"));
            }
        }

        ui.add_space(12.0);
        ui.strong(tr(lang, Text::CourseContent));
        egui::Grid::new("course_steps_grid")
            .striped(true)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                for (i, (title, duration)) in steps.iter().enumerate() {
                    ui.label(format!("{}", i + 1));
                    ui.label(title);
                    ui.label(duration.as_deref().unwrap_or(""));
                    ui.end_row();
                }
            });

        ui.add_space(16.0);
        let width = ui.available_width().min(320.0);
        if wide_button(ui, tr(lang, Text::StartLearning), width, !steps.is_empty()) {
            app.start_learning();
        }
    });
}
