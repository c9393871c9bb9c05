use serde::{Deserialize, Serialize};

/// Idioma de la interfaz y del contenido.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Fr];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }
}

/// Pista a la que pertenece un paso.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Course,
    Workshop,
}

/// Actividad activa: teoría (curso) o taller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Activity {
    #[default]
    Course,
    Workshop,
}

impl Activity {
    pub fn code(self) -> &'static str {
        match self {
            Activity::Course => "course",
            Activity::Workshop => "workshop",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "course" => Some(Activity::Course),
            "workshop" => Some(Activity::Workshop),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn code(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Vista activa de la aplicación.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppState {
    #[default]
    Catalog,
    CourseDetails,
    Learning,
}

impl AppState {
    pub fn code(self) -> &'static str {
        match self {
            AppState::Catalog => "catalog",
            AppState::CourseDetails => "details",
            AppState::Learning => "learning",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "catalog" => Some(AppState::Catalog),
            "details" => Some(AppState::CourseDetails),
            "learning" => Some(AppState::Learning),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepMeta {
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sandbox {
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
}

/// Pregunta de opción múltiple que bloquea el avance.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizData {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// Bloque de contenido ya normalizado.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Text(String),
    Code { language: Option<String>, content: String },
    Explain(String),
    Quiz(QuizData),
    Action(String),
    Diagram(String),
    /// Pregunta de reflexión (solo texto, nunca bloquea).
    Reflect(String),
}

/// Paso canónico: el navegador solo ve esta forma.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub section: Section,
    pub title: String,
    pub course_id: Option<String>,
    pub meta: Option<StepMeta>,
    pub blocks: Vec<Block>,
    pub sandbox: Option<Sandbox>,
}

impl Step {
    pub fn quiz(&self) -> Option<&QuizData> {
        self.blocks.iter().find_map(|b| match b {
            Block::Quiz(q) => Some(q),
            _ => None,
        })
    }

    pub fn has_quiz(&self) -> bool {
        self.quiz().is_some()
    }

    pub fn action(&self) -> Option<&str> {
        self.blocks.iter().find_map(|b| match b {
            Block::Action(a) => Some(a.as_str()),
            _ => None,
        })
    }

    /// Primer bloque de código, si lo hay.
    pub fn first_code(&self) -> Option<&str> {
        self.blocks.iter().find_map(|b| match b {
            Block::Code { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }

    pub fn duration(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.duration.as_deref())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub total_steps: usize,
    #[serde(default)]
    pub what_you_will_learn: Vec<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}
