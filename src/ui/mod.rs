mod helpers;
pub mod layout;
pub mod views;

use crate::app::LearnApp;
use crate::app::actions::KeyCommand;
use crate::model::{AppState, Theme};
use eframe::{App, Frame};
use egui::{Context, Key, Visuals};
use layout::{confirm_reset_window, sidebar, top_panel};

const DIGIT_KEYS: [Key; 9] = [
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
    Key::Num8,
    Key::Num9,
];

/// Traduce las teclas pulsadas en este frame. Nada si un campo de texto tiene el foco.
fn read_keys(ctx: &Context) -> Vec<KeyCommand> {
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }
    ctx.input(|i| {
        let mut out = Vec::new();
        if i.key_pressed(Key::ArrowLeft) {
            out.push(KeyCommand::Previous);
        }
        if i.key_pressed(Key::ArrowRight) {
            out.push(KeyCommand::Next);
        }
        for (n, key) in DIGIT_KEYS.iter().enumerate() {
            if i.key_pressed(*key) {
                out.push(KeyCommand::Digit(n + 1));
            }
        }
        out
    })
}

impl App for LearnApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        ctx.set_visuals(match self.settings.theme {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        });

        let now = ctx.input(|i| i.time);
        for key in read_keys(ctx) {
            self.handle_key(key, now);
        }

        // El fundido necesita frames aunque no haya entrada
        if self.tick(now).is_some() || self.navigator.is_fading() {
            ctx.request_repaint();
        }

        top_panel(self, ctx);
        if self.settings.view == AppState::Learning {
            sidebar(self, ctx);
        }

        match self.settings.view {
            AppState::Catalog => views::catalog::ui_catalog(self, ctx),
            AppState::CourseDetails => views::course_details::ui_course_details(self, ctx),
            AppState::Learning => views::learning::ui_learning(self, ctx, now),
        }

        if self.confirm_reset {
            confirm_reset_window(self, ctx);
        }
    }
}
