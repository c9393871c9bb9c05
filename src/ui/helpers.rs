// src/ui/helpers.rs
use crate::view_models::StepStatus;
use egui::{Button, Color32, RichText, Ui, Vec2};

/// Dos botones del mismo tamaño en una fila. `selected` marca cuál está activo
/// (`Some(true)` el izquierdo, `Some(false)` el derecho).
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
    selected: Option<bool>,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_sized(
                [btn_w, 32.0],
                Button::new(left_label).selected(selected == Some(true)),
            )
            .clicked();
        clicked_right = ui
            .add_sized(
                [btn_w, 32.0],
                Button::new(right_label).selected(selected == Some(false)),
            )
            .clicked();
    });
    (clicked_left, clicked_right)
}

/// Fila de la lista de pasos. Solo las filas habilitadas responden al clic.
pub fn selectable_row(ui: &mut Ui, label: &str, status: StepStatus, enabled: bool) -> bool {
    let text = match status {
        StepStatus::Active => RichText::new(label).strong(),
        StepStatus::Completed => RichText::new(label).color(Color32::from_rgb(80, 170, 110)),
        StepStatus::Upcoming => RichText::new(label).weak(),
    };
    let width = ui.available_width();
    // La fila activa se ve normal aunque no sea clicable
    let response = ui.add_enabled(
        enabled || status == StepStatus::Active,
        Button::new(text)
            .selected(status == StepStatus::Active)
            .frame(status == StepStatus::Active)
            .min_size(Vec2::new(width, 28.0)),
    );
    response.clicked() && enabled
}
