use crate::app::LearnApp;
use crate::app::quiz::{Feedback, MAX_ATTEMPTS};
use crate::code_utils::{LOCAL_COMMAND, collapsed_code, sandbox_url, shell_syntax, syntax_for};
use crate::i18n::{Text, tr};
use crate::model::{Block, QuizData, Section, Step};
use crate::ui::layout::code_viewer;
use egui::{Button, Color32, Frame, RichText, Ui, Vec2};
use egui_commonmark::CommonMarkViewer;

/// Contenido del paso en fase de lectura. El quiz y la acción se muestran aparte.
pub fn show_blocks(app: &mut LearnApp, ui: &mut Ui, step: &Step) {
    let lang = app.settings.language;
    for (i, block) in step.blocks.iter().enumerate() {
        match block {
            Block::Text(text) => {
                CommonMarkViewer::new().show(ui, &mut app.cm_cache, text);
            }
            Block::Code { language, content } => {
                code_block(app, ui, i, language.as_deref(), content);
            }
            Block::Explain(text) => {
                Frame::group(ui.style())
                    .fill(ui.visuals().faint_bg_color)
                    .inner_margin(egui::Margin::same(10))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.strong(tr(lang, Text::Explanation));
                        CommonMarkViewer::new().show(ui, &mut app.cm_cache, text);
                    });
            }
            Block::Reflect(prompt) => {
                Frame::group(ui.style())
                    .inner_margin(egui::Margin::same(10))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.strong(tr(lang, Text::Reflect));
                        ui.label(RichText::new(prompt).italics());
                    });
            }
            Block::Diagram(url) => {
                ui.hyperlink_to(format!("🖼 {}", tr(lang, Text::Diagram)), url);
            }
            Block::Quiz(_) | Block::Action(_) => {}
        }
        ui.add_space(8.0);
    }
}

fn code_block(app: &mut LearnApp, ui: &mut Ui, idx: usize, language: Option<&str>, content: &str) {
    let lang = app.settings.language;
    let expanded = app.expanded_code.contains(&idx);
    let (shown, collapsible) = collapsed_code(content, expanded);

    ui.horizontal(|ui| {
        if let Some(tag) = language {
            ui.label(RichText::new(tag).small().weak());
        }
        if ui.small_button(tr(lang, Text::Copy)).clicked() {
            ui.ctx().copy_text(content.to_string());
        }
        if collapsible {
            let label = if expanded {
                tr(lang, Text::Collapse)
            } else {
                tr(lang, Text::Expand)
            };
            if ui.small_button(label).clicked() {
                if expanded {
                    app.expanded_code.remove(&idx);
                } else {
                    app.expanded_code.insert(idx);
                }
            }
        }
    });
    code_viewer(
        ui,
        &format!("code_block_{idx}"),
        app.settings.theme,
        syntax_for(language),
        &shown,
    );
    if collapsible && !expanded {
        ui.label(RichText::new("…").weak());
    }
}

/// Enlace al sandbox para los pasos de taller con código.
pub fn sandbox_panel(app: &mut LearnApp, ui: &mut Ui, step: &Step) {
    if step.section != Section::Workshop || step.first_code().is_none() {
        return;
    }
    let lang = app.settings.language;
    Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            if ui.button(tr(lang, Text::OpenInStackBlitz)).clicked() {
                let url = sandbox_url(step);
                log::info!("opening sandbox {url}");
                ui.ctx().open_url(egui::OpenUrl::new_tab(url));
                app.sandbox_help = true;
            }
            ui.label(RichText::new(tr(lang, Text::NoSignInRequired)).small().weak());

            if app.sandbox_help {
                ui.add_space(6.0);
                ui.label(tr(lang, Text::SandboxHelp));
                code_viewer(ui, "local_command", app.settings.theme, shell_syntax(), LOCAL_COMMAND);
            } else {
                ui.label(RichText::new(format!("{} `{LOCAL_COMMAND}`", tr(lang, Text::ToTryLocally))).small());
            }
        });
}

/// Caja del quiz con opciones numeradas (teclas 1..9).
pub fn quiz_box(app: &mut LearnApp, ui: &mut Ui, quiz: &QuizData) {
    let lang = app.settings.language;
    let width = ui.available_width();

    Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(width);
            ui.strong(tr(lang, Text::QuizCheckpoint));
            ui.add_space(4.0);
            ui.label(RichText::new(&quiz.question).heading());
            ui.add_space(8.0);

            let state = app.navigator.quiz_state();
            let finalized = state.is_finalized();
            let selected = state.selected().map(str::to_string);
            let feedback = state.feedback();

            let mut chosen = None;
            for (n, option) in quiz.options.iter().enumerate() {
                let is_answer = *option == quiz.answer;
                let is_selected = selected.as_deref() == Some(option.as_str());
                let mut button = Button::new(format!("{}. {option}", n + 1))
                    .min_size(Vec2::new(width, 32.0))
                    .selected(is_selected);
                if finalized && is_answer {
                    button = button.fill(Color32::from_rgb(40, 120, 70));
                } else if is_selected && feedback == Some(Feedback::TryAgain) {
                    button = button.fill(Color32::from_rgb(140, 50, 50));
                }
                if ui.add_enabled(!finalized, button).clicked() {
                    chosen = Some(option.clone());
                }
            }
            if let Some(option) = chosen {
                app.answer(&option);
            }

            ui.add_space(6.0);
            match app.navigator.quiz_state().feedback() {
                Some(Feedback::Correct) => {
                    ui.label(RichText::new(tr(lang, Text::Correct)).color(Color32::GREEN));
                }
                Some(Feedback::TryAgain) => {
                    ui.label(
                        RichText::new(format!(
                            "{} ({}/{MAX_ATTEMPTS})",
                            tr(lang, Text::TryAgain),
                            app.navigator.quiz_state().attempts()
                        ))
                        .color(Color32::YELLOW),
                    );
                }
                Some(Feedback::Revealed) => {
                    ui.label(RichText::new(tr(lang, Text::AnswerRevealed)).color(Color32::YELLOW));
                }
                None => {}
            }
        });
}
