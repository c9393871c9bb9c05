use crate::app::LearnApp;
use crate::i18n::{Text, tr};
use crate::ui::layout::simple_panel;
use egui::{Button, Context, Frame, RichText, Vec2};

const CARD_WIDTH: f32 = 260.0;

pub fn ui_catalog(app: &mut LearnApp, ctx: &Context) {
    let lang = app.settings.language;

    // Datos precalculados para no mantener el préstamo durante el dibujo
    let categories = app.filter_categories();
    let courses: Vec<(String, String, String, String, String)> = app
        .visible_courses()
        .into_iter()
        .map(|c| {
            (
                c.id.clone(),
                c.title.clone(),
                c.short_description.clone(),
                c.difficulty.clone(),
                c.duration.clone(),
            )
        })
        .collect();

    simple_panel(ctx, 1100.0, |ui| {
        ui.heading(tr(lang, Text::CatalogTitle));
        ui.add_space(12.0);

        ui.horizontal_top(|ui| {
            // ----------- FILTROS -----------
            ui.vertical(|ui| {
                ui.set_width(200.0);
                ui.strong(tr(lang, Text::Filters));
                for category in &categories {
                    ui.add_space(8.0);
                    ui.label(RichText::new(&category.title).strong());
                    for option in &category.options {
                        let mut checked = app.filter.is_selected(&option.id);
                        if ui.checkbox(&mut checked, option.label()).changed() {
                            app.toggle_filter(&option.id);
                        }
                    }
                }
                ui.add_space(8.0);
                if ui
                    .add_enabled(!app.filter.is_empty(), Button::new(tr(lang, Text::ClearFilters)))
                    .clicked()
                {
                    app.filter.clear();
                }
            });

            ui.separator();

            // ----------- TARJETAS -----------
            ui.vertical(|ui| {
                if courses.is_empty() {
                    ui.label(tr(lang, Text::NoCourses));
                    return;
                }
                ui.horizontal_wrapped(|ui| {
                    for (id, title, short, difficulty, duration) in &courses {
                        Frame::group(ui.style())
                            .inner_margin(egui::Margin::same(12))
                            .show(ui, |ui| {
                                ui.set_width(CARD_WIDTH);
                                ui.set_min_height(150.0);
                                ui.vertical(|ui| {
                                    ui.label(RichText::new(title).heading().strong());
                                    ui.label(RichText::new(format!("{difficulty} · {duration}")).weak());
                                    ui.add_space(6.0);
                                    ui.label(short);
                                    ui.add_space(8.0);
                                    if ui
                                        .add(Button::new("➡").min_size(Vec2::new(CARD_WIDTH, 30.0)))
                                        .clicked()
                                    {
                                        app.open_course(id);
                                    }
                                });
                            });
                    }
                });
            });
        });
    });
}
