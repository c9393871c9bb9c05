// src/data.rs

use crate::model::{Activity, Block, Course, Language, QuizData, Sandbox, Section, Step, StepMeta};
use serde::Deserialize;
use serde::de::IgnoredAny;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse JSON {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("parse YAML {origin}: {source}")]
    Yaml {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("no steps_<lang> file found in {}", .0.display())]
    NoSteps(PathBuf),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(Format::Json),
            Some("yaml") | Some("yml") => Some(Format::Yaml),
            _ => None,
        }
    }
}

// Formas crudas tal y como llegan de los ficheros (nueva por bloques y legacy plana)

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStep {
    section: Section,
    title: String,
    #[serde(default)]
    course_id: Option<String>,
    #[serde(default)]
    meta: Option<StepMeta>,
    #[serde(default)]
    blocks: Option<Vec<Lenient<RawBlock>>>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    explain: Option<String>,
    #[serde(default)]
    quiz: Option<RawQuiz>,
    #[serde(default)]
    diagram: Option<String>,
    #[serde(default)]
    sandbox: Option<Sandbox>,
    #[serde(default)]
    action: Option<String>,
}

/// Pieza que puede no encajar con su forma; la mala se descarta con un aviso
/// en vez de tumbar el fichero entero.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

#[derive(Deserialize)]
struct RawBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    options: Option<Vec<String>>,
    #[serde(default)]
    answer: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuiz {
    Prompt(String),
    Structured {
        #[serde(default)]
        question: Option<String>,
        #[serde(default)]
        options: Option<Vec<String>>,
        #[serde(default)]
        answer: Option<String>,
    },
    Invalid(IgnoredAny),
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Un quiz solo es válido con pregunta, al menos una opción y respuesta.
fn build_quiz(
    title: &str,
    question: Option<String>,
    options: Option<Vec<String>>,
    answer: Option<String>,
) -> Option<QuizData> {
    let (Some(question), Some(options), Some(answer)) =
        (non_empty(question), options, non_empty(answer))
    else {
        log::warn!("step {title:?}: incomplete quiz dropped");
        return None;
    };
    if options.is_empty() {
        log::warn!("step {title:?}: quiz without options dropped");
        return None;
    }
    if !options.contains(&answer) {
        log::warn!("step {title:?}: quiz answer {answer:?} is not one of its options");
    }
    Some(QuizData {
        question,
        options,
        answer,
    })
}

fn normalize_block(title: &str, raw: RawBlock) -> Option<Block> {
    let block = match raw.kind.as_str() {
        "text" => Block::Text(non_empty(raw.content)?),
        "code" => Block::Code {
            language: non_empty(raw.language),
            content: non_empty(raw.content)?,
        },
        "explain" => Block::Explain(non_empty(raw.content)?),
        "action" => Block::Action(non_empty(raw.content)?),
        "diagram" => Block::Diagram(non_empty(raw.content)?),
        "reflect" => Block::Reflect(non_empty(raw.content)?),
        "quiz" => Block::Quiz(build_quiz(title, raw.question, raw.options, raw.answer)?),
        other => {
            log::warn!("step {title:?}: unknown block type {other:?} ignored");
            return None;
        }
    };
    Some(block)
}

fn normalize_step(raw: RawStep) -> Step {
    let title = raw.title;
    let blocks = match raw.blocks {
        Some(blocks) => blocks
            .into_iter()
            .filter_map(|b| match b {
                Lenient::Valid(raw) => normalize_block(&title, raw),
                Lenient::Invalid(_) => {
                    log::warn!("step {title:?}: malformed block dropped");
                    None
                }
            })
            .collect(),
        None => {
            let mut blocks = Vec::new();
            if let Some(content) = non_empty(raw.content) {
                blocks.push(Block::Text(content));
            }
            if let Some(url) = non_empty(raw.diagram) {
                blocks.push(Block::Diagram(url));
            }
            if let Some(code) = non_empty(raw.code) {
                blocks.push(Block::Code {
                    language: None,
                    content: code,
                });
            }
            if let Some(explain) = non_empty(raw.explain) {
                blocks.push(Block::Explain(explain));
            }
            match raw.quiz {
                Some(RawQuiz::Prompt(prompt)) if !prompt.trim().is_empty() => {
                    blocks.push(Block::Reflect(prompt));
                }
                Some(RawQuiz::Structured {
                    question,
                    options,
                    answer,
                }) => {
                    if let Some(quiz) = build_quiz(&title, question, options, answer) {
                        blocks.push(Block::Quiz(quiz));
                    }
                }
                Some(RawQuiz::Invalid(_)) => {
                    log::warn!("step {title:?}: malformed quiz dropped");
                }
                _ => {}
            }
            if let Some(action) = non_empty(raw.action) {
                blocks.push(Block::Action(action));
            }
            blocks
        }
    };

    Step {
        section: raw.section,
        title,
        course_id: non_empty(raw.course_id),
        meta: raw.meta,
        blocks,
        sandbox: raw.sandbox,
    }
}

fn parse_records<T: for<'de> Deserialize<'de>>(
    text: &str,
    format: Format,
    origin: &str,
) -> Result<T, ContentError> {
    match format {
        Format::Json => serde_json::from_str(text).map_err(|source| ContentError::Json {
            origin: origin.to_string(),
            source,
        }),
        Format::Yaml => serde_yaml::from_str(text).map_err(|source| ContentError::Yaml {
            origin: origin.to_string(),
            source,
        }),
    }
}

/// Parsea una lista de pasos (cualquiera de las dos formas) y la normaliza.
pub fn parse_steps(text: &str, format: Format, origin: &str) -> Result<Vec<Step>, ContentError> {
    let raw: Vec<Lenient<RawStep>> = parse_records(text, format, origin)?;
    Ok(raw
        .into_iter()
        .enumerate()
        .filter_map(|(i, step)| match step {
            Lenient::Valid(raw) => Some(normalize_step(raw)),
            Lenient::Invalid(_) => {
                log::warn!("{origin}: step #{i} is malformed and was dropped");
                None
            }
        })
        .collect())
}

pub fn parse_courses(text: &str, format: Format, origin: &str) -> Result<Vec<Course>, ContentError> {
    parse_records(text, format, origin)
}

/// Almacén de contenido inmutable, indexado por idioma.
#[derive(Clone, Debug, Default)]
pub struct ContentStore {
    steps: HashMap<Language, Vec<Step>>,
    courses: HashMap<Language, Vec<Course>>,
}

impl ContentStore {
    /// Carga el contenido embebido en el binario.
    pub fn embedded() -> Result<Self, ContentError> {
        let mut steps = HashMap::new();
        let mut courses = HashMap::new();
        steps.insert(
            Language::En,
            parse_steps(include_str!("data/steps_en.yaml"), Format::Yaml, "steps_en.yaml")?,
        );
        steps.insert(
            Language::Fr,
            parse_steps(include_str!("data/steps_fr.yaml"), Format::Yaml, "steps_fr.yaml")?,
        );
        courses.insert(
            Language::En,
            parse_courses(include_str!("data/courses_en.yaml"), Format::Yaml, "courses_en.yaml")?,
        );
        courses.insert(
            Language::Fr,
            parse_courses(include_str!("data/courses_fr.yaml"), Format::Yaml, "courses_fr.yaml")?,
        );
        Ok(Self { steps, courses })
    }

    /// Carga `steps_<lang>` y `courses_<lang>` (json/yaml/yml) desde un directorio.
    pub fn from_dir(dir: &Path) -> Result<Self, ContentError> {
        let mut store = Self::default();
        for lang in Language::ALL {
            if let Some(path) = find_file(dir, &format!("steps_{}", lang.code())) {
                let (text, format) = read_file(&path)?;
                let steps = parse_steps(&text, format, &path.display().to_string())?;
                log::info!("loaded {} steps for {}", steps.len(), lang.code());
                store.steps.insert(lang, steps);
            } else {
                log::warn!("no steps file for {} in {}", lang.code(), dir.display());
            }
            if let Some(path) = find_file(dir, &format!("courses_{}", lang.code())) {
                let (text, format) = read_file(&path)?;
                let courses = parse_courses(&text, format, &path.display().to_string())?;
                store.courses.insert(lang, courses);
            }
        }
        if store.steps.is_empty() {
            return Err(ContentError::NoSteps(dir.to_path_buf()));
        }
        Ok(store)
    }

    /// Contenido de `dir` si se indicó y carga bien; si no, el embebido.
    pub fn load_or_embedded(dir: Option<&Path>) -> Result<Self, ContentError> {
        let Some(dir) = dir else {
            return Self::embedded();
        };
        match Self::from_dir(dir) {
            Ok(store) => Ok(store),
            Err(err) => {
                log::error!("cannot load content from {}: {err}; using embedded content", dir.display());
                Self::embedded()
            }
        }
    }

    pub fn steps(&self, lang: Language) -> &[Step] {
        self.steps.get(&lang).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn courses(&self, lang: Language) -> &[Course] {
        self.courses.get(&lang).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn course(&self, lang: Language, id: &str) -> Option<&Course> {
        self.courses(lang).iter().find(|c| c.id == id)
    }

    /// Los pasos sin `courseId` pertenecen al primer curso del catálogo.
    pub fn default_course_id(&self, lang: Language) -> Option<&str> {
        self.courses(lang).first().map(|c| c.id.as_str())
    }

    fn belongs_to(&self, lang: Language, step: &Step, course_id: Option<&str>) -> bool {
        let default = self.default_course_id(lang);
        let wanted = course_id.or(default);
        match (step.course_id.as_deref(), wanted) {
            (_, None) => true,
            (Some(id), Some(wanted)) => id == wanted,
            (None, Some(wanted)) => default == Some(wanted),
        }
    }

    /// Pasos del curso indicado (o del curso por defecto).
    pub fn course_steps(&self, lang: Language, course_id: Option<&str>) -> Vec<&Step> {
        self.steps(lang)
            .iter()
            .filter(|s| s.section == Section::Course && self.belongs_to(lang, s, course_id))
            .collect()
    }

    /// Secuencia de pasos que recorre el navegador para una actividad.
    pub fn track(&self, lang: Language, activity: Activity, course_id: Option<&str>) -> Vec<Step> {
        match activity {
            Activity::Course => self
                .course_steps(lang, course_id)
                .into_iter()
                .cloned()
                .collect(),
            Activity::Workshop => self
                .steps(lang)
                .iter()
                .filter(|s| s.section == Section::Workshop)
                .cloned()
                .collect(),
        }
    }
}

fn find_file(dir: &Path, stem: &str) -> Option<PathBuf> {
    ["json", "yaml", "yml"]
        .iter()
        .map(|ext| dir.join(format!("{stem}.{ext}")))
        .find(|p| p.is_file())
}

fn read_file(path: &Path) -> Result<(String, Format), ContentError> {
    let text = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = Format::from_path(path).unwrap_or(Format::Json);
    Ok((text, format))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGACY: &str = r#"[
        {
            "section": "workshop",
            "title": "Create the page",
            "content": "Open the file.",
            "code": "// app/page.tsx\nexport default function Page() {}",
            "explain": "Server component by default.",
            "quiz": { "question": "Q", "options": ["A", "B"], "answer": "B" },
            "sandbox": { "file": "app/page.tsx" }
        },
        { "section": "course", "title": "Reflect", "content": "Think.", "quiz": "Why?" }
    ]"#;

    const BLOCKS: &str = r#"
- section: workshop
  title: Create the page
  sandbox:
    file: app/page.tsx
  blocks:
    - type: text
      content: Open the file.
    - type: code
      content: "// app/page.tsx\nexport default function Page() {}"
    - type: explain
      content: Server component by default.
    - type: quiz
      question: Q
      options: [A, B]
      answer: B
"#;

    #[test]
    fn legacy_and_block_shapes_normalize_to_the_same_step() {
        let legacy = parse_steps(LEGACY, Format::Json, "legacy").unwrap();
        let blocks = parse_steps(BLOCKS, Format::Yaml, "blocks").unwrap();
        assert_eq!(legacy[0], blocks[0]);
        assert!(legacy[0].has_quiz());
    }

    #[test]
    fn legacy_string_quiz_becomes_reflection_without_gate() {
        let steps = parse_steps(LEGACY, Format::Json, "legacy").unwrap();
        assert!(!steps[1].has_quiz());
        assert!(steps[1].blocks.contains(&Block::Reflect("Why?".into())));
    }

    #[test]
    fn malformed_blocks_are_dropped_not_fatal() {
        let text = r#"[{ "section": "course", "title": "T", "blocks": [
            { "type": "quiz", "question": "Q", "options": [] , "answer": "A" },
            { "type": "quiz", "question": "Q" },
            { "type": "video", "content": "x" },
            { "type": "text" },
            { "type": "text", "content": "kept" }
        ]}]"#;
        let steps = parse_steps(text, Format::Json, "t").unwrap();
        assert_eq!(steps[0].blocks, vec![Block::Text("kept".into())]);
    }

    #[test]
    fn badly_shaped_pieces_keep_the_rest_of_the_file() {
        let text = r#"[
            { "section": "course", "title": "Good", "content": "ok" },
            { "section": "course", "title": "Typeless", "blocks": [
                { "content": "no type" },
                { "type": "quiz", "question": "Q", "options": "A", "answer": "A" },
                { "type": "text", "content": "still here" }
            ]},
            { "section": "course", "title": "Legacy", "content": "c", "quiz": { "question": "Q", "options": "A" } },
            { "title": "no section" }
        ]"#;
        let steps = parse_steps(text, Format::Json, "t").unwrap();
        let titles: Vec<&str> = steps.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Good", "Typeless", "Legacy"]);
        assert_eq!(steps[1].blocks, vec![Block::Text("still here".into())]);
        assert_eq!(steps[2].blocks, vec![Block::Text("c".into())]);
    }

    #[test]
    fn content_dir_with_a_bad_block_is_not_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let text = r#"[
            { "section": "workshop", "title": "Good", "content": "ok" },
            { "section": "workshop", "title": "Bad", "blocks": [{ "content": "no type" }] }
        ]"#;
        std::fs::write(dir.path().join("steps_en.json"), text).unwrap();
        let store = ContentStore::load_or_embedded(Some(dir.path())).unwrap();
        let titles: Vec<&str> = store.steps(Language::En).iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Good", "Bad"]);
        assert!(store.steps(Language::En)[1].blocks.is_empty());
    }

    #[test]
    fn embedded_bundle_parses_for_every_language() {
        let store = ContentStore::embedded().expect("embedded content");
        for lang in Language::ALL {
            assert!(!store.track(lang, Activity::Workshop, None).is_empty());
            assert!(!store.track(lang, Activity::Course, None).is_empty());
            assert!(!store.courses(lang).is_empty());
        }
    }

    #[test]
    fn course_track_uses_default_course_for_steps_without_id() {
        let store = ContentStore::embedded().unwrap();
        let default = store.default_course_id(Language::En).unwrap().to_string();
        let default_track = store.track(Language::En, Activity::Course, Some(&default));
        assert!(default_track
            .iter()
            .all(|s| s.course_id.as_deref().is_none_or(|id| id == default)));
        let other = store
            .courses(Language::En)
            .iter()
            .find(|c| c.id != default)
            .unwrap();
        let other_track = store.track(Language::En, Activity::Course, Some(&other.id));
        assert!(other_track
            .iter()
            .all(|s| s.course_id.as_deref() == Some(other.id.as_str())));
    }

    #[test]
    fn from_dir_reads_json_and_yaml_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("steps_en.json"), LEGACY).unwrap();
        std::fs::write(dir.path().join("steps_fr.yaml"), BLOCKS).unwrap();
        let store = ContentStore::from_dir(dir.path()).unwrap();
        assert_eq!(store.steps(Language::En).len(), 2);
        assert_eq!(store.steps(Language::Fr).len(), 1);
        assert!(store.courses(Language::En).is_empty());
    }

    #[test]
    fn from_dir_without_steps_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ContentStore::from_dir(dir.path()),
            Err(ContentError::NoSteps(_))
        ));
    }

    #[test]
    fn broken_content_dir_falls_back_to_embedded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("steps_en.json"), "{ not json").unwrap();
        let store = ContentStore::load_or_embedded(Some(dir.path())).unwrap();
        assert_eq!(
            store.steps(Language::En),
            ContentStore::embedded().unwrap().steps(Language::En)
        );
    }
}
