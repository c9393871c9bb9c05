use crate::model::{Activity, Language};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

/// Claves persistidas.
pub mod keys {
    use super::*;

    pub const THEME: &str = "lbd.theme";
    pub const LANGUAGE: &str = "lbd.language";
    pub const VIEW: &str = "lbd.view";
    pub const ACTIVITY: &str = "lbd.activity";
    pub const SELECTED_COURSE: &str = "lbd.selectedCourse";
    pub const SIDEBAR_COLLAPSED: &str = "lbd.sidebar.collapsed";
    pub const COMPLETED: &str = "lbd.completed";

    /// Posición del paso, separada por actividad (y curso) e idioma.
    pub fn step_key(activity: Activity, course_id: Option<&str>, lang: Language) -> String {
        match (activity, course_id) {
            (Activity::Course, Some(course)) => format!("lbd.course.{course}.step.{}", lang.code()),
            _ => format!("lbd.{}.step.{}", activity.code(), lang.code()),
        }
    }
}

/// Almacén clave-valor persistente. Las escrituras son best-effort:
/// un fallo se registra y se ignora, nunca interrumpe la navegación.
pub trait ProgressStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Índice guardado; ausente o ilegible vale 0.
pub fn saved_index(store: &dyn ProgressStore, key: &str) -> usize {
    store
        .get(key)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0)
}

pub fn saved_flag(store: &dyn ProgressStore, key: &str) -> bool {
    store.get(key).is_some_and(|v| v.trim() == "true")
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Ruta por defecto del progreso en escritorio: `<storage_dir>/progress.json`.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_store_path() -> Option<PathBuf> {
    eframe::storage_dir("learnbd").map(|dir| dir.join("progress.json"))
}

/// Fichero JSON con un objeto plano `{clave: valor}`; se reescribe en cada cambio.
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Abre el fichero; si no existe o está corrupto se empieza vacío.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|err| {
                log::warn!("ignoring unreadable progress file {}: {err}", path.display());
                BTreeMap::new()
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                log::warn!("cannot read progress file {}: {err}", path.display());
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    fn flush(&self) {
        let json = match serde_json::to_string_pretty(&self.values) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("cannot serialize progress: {err}");
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                log::warn!("cannot create {}: {err}", parent.display());
                return;
            }
        }
        if let Err(err) = std::fs::write(&self.path, json) {
            log::warn!("cannot write progress file {}: {err}", self.path.display());
        }
    }
}

impl ProgressStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.flush();
        }
    }
}

/// `localStorage` del navegador (build web).
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, progress will not persist");
        }
        Self { storage }
    }
}

#[cfg(target_arch = "wasm32")]
impl ProgressStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for {key}");
            }
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = &self.storage {
            if storage.remove_item(key).is_err() {
                log::warn!("localStorage remove failed for {key}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_keys_are_namespaced_by_activity_course_and_language() {
        let a = keys::step_key(Activity::Workshop, None, Language::En);
        let b = keys::step_key(Activity::Workshop, None, Language::Fr);
        let c = keys::step_key(Activity::Course, Some("react-state"), Language::En);
        let d = keys::step_key(Activity::Course, None, Language::En);
        assert_eq!(a, "lbd.workshop.step.en");
        assert_eq!(b, "lbd.workshop.step.fr");
        assert_eq!(c, "lbd.course.react-state.step.en");
        assert_eq!(d, "lbd.course.step.en");
    }

    #[test]
    fn saved_index_defaults_to_zero_when_missing_or_garbage() {
        let mut store = MemoryStore::new();
        assert_eq!(saved_index(&store, "k"), 0);
        store.set("k", "abc");
        assert_eq!(saved_index(&store, "k"), 0);
        store.set("k", "-3");
        assert_eq!(saved_index(&store, "k"), 0);
        store.set("k", "4");
        assert_eq!(saved_index(&store, "k"), 4);
    }

    #[test]
    fn file_store_round_trips_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("progress.json");
        {
            let mut store = FileStore::open(&path);
            store.set(keys::THEME, "dark");
            store.set(keys::COMPLETED, "true");
            store.remove(keys::COMPLETED);
        }
        let store = FileStore::open(&path);
        assert_eq!(store.get(keys::THEME).as_deref(), Some("dark"));
        assert_eq!(store.get(keys::COMPLETED), None);
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = FileStore::open(&path);
        assert_eq!(store.get(keys::THEME), None);
    }

    #[test]
    fn write_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // el "fichero" es un directorio: la escritura falla
        let mut store = FileStore::open(dir.path());
        store.set(keys::THEME, "dark");
        assert_eq!(store.get(keys::THEME).as_deref(), Some("dark"));
    }
}
