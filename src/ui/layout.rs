use crate::app::LearnApp;
use crate::i18n::{Text, tr};
use crate::model::{Activity, AppState, Language, Theme};
use crate::ui::helpers::{selectable_row, two_button_row};
use egui::{Align, Align2, Button, CentralPanel, Context, Frame, Layout, ProgressBar, ScrollArea, Ui};
use egui_code_editor::{CodeEditor, ColorTheme, Syntax};

pub const SIDEBAR_WIDTH: f32 = 260.0;
const SIDEBAR_COLLAPSED_WIDTH: f32 = 36.0;

/// Barra superior: marca, catálogo, idioma, tema y borrado de progreso.
pub fn top_panel(app: &mut LearnApp, ctx: &Context) {
    let lang = app.settings.language;
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.heading("LearnBD");
            ui.add_space(12.0);
            if ui
                .selectable_label(app.settings.view == AppState::Catalog, tr(lang, Text::Courses))
                .clicked()
            {
                app.back_to_catalog();
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button(tr(lang, Text::ResetProgress)).clicked() {
                    app.confirm_reset = true;
                }

                let theme_label = match app.settings.theme {
                    Theme::Light => tr(lang, Text::DarkMode),
                    Theme::Dark => tr(lang, Text::LightMode),
                };
                if ui.button(theme_label).clicked() {
                    app.toggle_theme();
                }

                ui.separator();
                // Orden invertido por el layout de derecha a izquierda
                for option in Language::ALL.iter().rev() {
                    if ui
                        .selectable_label(lang == *option, option.code().to_uppercase())
                        .on_hover_text(match option {
                            Language::En => tr(lang, Text::English),
                            Language::Fr => tr(lang, Text::French),
                        })
                        .clicked()
                    {
                        app.set_language(*option);
                    }
                }
            });
        });
    });
}

/// Barra lateral de la vista de aprendizaje.
pub fn sidebar(app: &mut LearnApp, ctx: &Context) {
    let lang = app.settings.language;

    if app.settings.sidebar_collapsed {
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(SIDEBAR_COLLAPSED_WIDTH)
            .show(ctx, |ui| {
                if ui.button("»").on_hover_text(tr(lang, Text::ExpandSidebar)).clicked() {
                    app.toggle_sidebar();
                }
            });
        return;
    }

    let now = ctx.input(|i| i.time);
    let rows = app.step_rows();
    let progress = app.track_progress();
    let title = app.track_title();

    egui::SidePanel::left("sidebar")
        .resizable(false)
        .exact_width(SIDEBAR_WIDTH)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong(&title);
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("«").on_hover_text(tr(lang, Text::CollapseSidebar)).clicked() {
                        app.toggle_sidebar();
                    }
                });
            });
            ui.add_space(6.0);

            ui.label(tr(lang, Text::Activities));
            let (theory, workshop) = two_button_row(
                ui,
                SIDEBAR_WIDTH - 16.0,
                tr(lang, Text::Theory),
                tr(lang, Text::Workshop),
                match app.settings.activity {
                    Activity::Course => Some(true),
                    Activity::Workshop => Some(false),
                },
            );
            if theory {
                app.switch_activity(Activity::Course);
            }
            if workshop {
                app.switch_activity(Activity::Workshop);
            }

            ui.add_space(8.0);
            ui.separator();
            ui.label(tr(lang, Text::Steps));

            let footer_h = 48.0;
            ScrollArea::vertical()
                .max_height((ui.available_height() - footer_h).max(0.0))
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    for row in &rows {
                        if selectable_row(ui, &row.label(), row.status, row.clickable()) {
                            app.jump_to(row.idx, now);
                        }
                    }
                });

            ui.separator();
            ui.label(format!(
                "{} {} {} {}",
                tr(lang, Text::Progress),
                progress.position,
                tr(lang, Text::Of),
                progress.total
            ));
            ui.add(ProgressBar::new(progress.fraction()).show_percentage());
        });
}

pub fn confirm_reset_window(app: &mut LearnApp, ctx: &Context) {
    let lang = app.settings.language;
    egui::Window::new(tr(lang, Text::ResetProgress))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(tr(lang, Text::ConfirmReset));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(tr(lang, Text::Yes)).clicked() {
                    app.reset_progress();
                }
                if ui.button(tr(lang, Text::No)).clicked() {
                    app.confirm_reset = false;
                }
            });
        });
}

/// Panel central con ancho máximo y desplazamiento vertical.
pub fn simple_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                Frame::default()
                    .inner_margin(egui::Margin::symmetric(16, 12))
                    .show(ui, |ui| {
                        ui.set_width(w);
                        inner(ui);
                    });
            });
    });
}

/// Editor de solo lectura: se edita una copia que se descarta.
pub fn code_viewer(ui: &mut Ui, id: &str, theme: Theme, syntax: Syntax, code: &str) {
    let mut buf = code.to_owned();
    let rows = buf.lines().count().max(1);
    let fontsize = egui::TextStyle::Monospace.resolve(ui.style()).size;
    CodeEditor::default()
        .id_source(id)
        .with_rows(rows)
        .with_fontsize(fontsize)
        .with_theme(match theme {
            Theme::Dark => ColorTheme::GITHUB_DARK,
            Theme::Light => ColorTheme::GITHUB_LIGHT,
        })
        .with_syntax(syntax)
        .with_numlines(true)
        .vscroll(false)
        .show(ui, &mut buf);
}

/// Botón a ancho completo, habilitado o no.
pub fn wide_button(ui: &mut Ui, label: &str, width: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(egui::vec2(width, 36.0)))
        .clicked()
}
