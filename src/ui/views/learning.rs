use crate::app::LearnApp;
use crate::i18n::{Text, tr};
use crate::model::Activity;
use crate::ui::layout::{simple_panel, wide_button};
use crate::ui::views::blocks::{quiz_box, sandbox_panel, show_blocks};
use egui::{Button, Context, Frame, RichText, Vec2};

/// Acción del paso que lleva al taller.
const START_WORKSHOP: &str = "start-workshop";

pub fn ui_learning(app: &mut LearnApp, ctx: &Context, now: f64) {
    let lang = app.settings.language;

    let Some(step) = app.navigator.current_step().cloned() else {
        simple_panel(ctx, 820.0, |ui| {
            ui.label(tr(lang, Text::NoSteps));
        });
        return;
    };
    let index = app.navigator.current_index();
    let total = app.navigator.total();
    let opacity = app.navigator.fade_opacity(now);
    let fading = app.navigator.is_fading();

    simple_panel(ctx, 820.0, |ui| {
        ui.set_opacity(opacity);

        ui.label(
            RichText::new(format!(
                "{} {} {} {}",
                tr(lang, Text::Step),
                index + 1,
                tr(lang, Text::Of),
                total
            ))
            .weak(),
        );
        ui.heading(&step.title);
        if let Some(duration) = step.duration() {
            ui.label(RichText::new(format!("⏱ {duration}")).small().weak());
        }
        ui.add_space(10.0);

        if app.navigator.show_quiz() {
            if let Some(quiz) = step.quiz() {
                quiz_box(app, ui, quiz);
            }
        } else {
            show_blocks(app, ui, &step);
            sandbox_panel(app, ui, &step);

            if step.action() == Some(START_WORKSHOP) && app.settings.activity == Activity::Course {
                ui.add_space(8.0);
                if ui
                    .add(Button::new(tr(lang, Text::StartWorkshop)).min_size(Vec2::new(240.0, 36.0)))
                    .clicked()
                {
                    app.switch_activity(Activity::Workshop);
                    return;
                }
            }
        }

        if app.navigator.is_finished() {
            ui.add_space(12.0);
            Frame::group(ui.style())
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.heading(tr(lang, Text::TrackCompleted));
                    ui.label(tr(lang, Text::Congratulations));
                    ui.add_space(6.0);
                    if ui.add_enabled(!fading, Button::new(tr(lang, Text::Restart))).clicked() {
                        app.restart_track(now);
                    }
                });
        }

        ui.add_space(16.0);
        ui.separator();
        let half = (ui.available_width() - 8.0) / 2.0;
        ui.horizontal(|ui| {
            if wide_button(ui, tr(lang, Text::Previous), half, !fading && app.navigator.can_retreat()) {
                app.go_prev(now);
            }
            if wide_button(ui, tr(lang, Text::Next), half, !fading && app.navigator.can_advance()) {
                app.go_next(now);
            }
        });

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }
    });
}
