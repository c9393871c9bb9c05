// src/view_models.rs

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Upcoming,
}

/// Fila de la barra lateral.
#[derive(Clone, Debug)]
pub struct StepRow {
    pub idx: usize,
    pub title: String,
    pub duration: Option<String>,
    pub status: StepStatus,
}

impl StepRow {
    pub fn label(&self) -> String {
        let marker = match self.status {
            StepStatus::Completed => "✔".to_string(),
            StepStatus::Active => "▶".to_string(),
            StepStatus::Upcoming => (self.idx + 1).to_string(),
        };
        match &self.duration {
            Some(d) => format!("{marker}  {}  · {d}", self.title),
            None => format!("{marker}  {}", self.title),
        }
    }

    /// Solo se puede volver a pasos ya vistos.
    pub fn clickable(&self) -> bool {
        self.status == StepStatus::Completed
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOption {
    pub id: String,
    pub label: String,
    pub count: usize,
}

impl FilterOption {
    pub fn label(&self) -> String {
        format!("{} ({})", self.label, self.count)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterCategory {
    pub id: String,
    pub title: String,
    pub options: Vec<FilterOption>,
}

/// Resumen de progreso de la pista activa.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackProgress {
    pub position: usize,
    pub total: usize,
}

impl TrackProgress {
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.position as f32 / self.total as f32
        }
    }
}
