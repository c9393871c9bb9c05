use crate::i18n::{Text, tr};
use crate::model::{Course, Language};
use crate::view_models::{FilterCategory, FilterOption};
use std::collections::{BTreeMap, BTreeSet};

const DIFFICULTY: &str = "difficulty";
const TAG: &str = "tag";

fn filter_id(kind: &str, value: &str) -> String {
    format!("{kind}:{value}")
}

/// Filtros seleccionados en el catálogo (`difficulty:<v>` / `tag:<v>`).
///
/// Dentro de una categoría basta con que coincida una opción; entre
/// categorías deben coincidir todas las que tengan algo seleccionado.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseFilter {
    selected: BTreeSet<String>,
}

impl CourseFilter {
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    fn selected_values(&self, kind: &str) -> BTreeSet<&str> {
        self.selected
            .iter()
            .filter_map(|id| id.split_once(':'))
            .filter(|(k, _)| *k == kind)
            .map(|(_, v)| v)
            .collect()
    }

    pub fn matches(&self, course: &Course) -> bool {
        let difficulties = self.selected_values(DIFFICULTY);
        let tags = self.selected_values(TAG);
        let difficulty_ok = difficulties.is_empty() || difficulties.contains(course.difficulty.as_str());
        let tags_ok = tags.is_empty() || course.tags.iter().any(|t| tags.contains(t.as_str()));
        difficulty_ok && tags_ok
    }

    pub fn apply<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        courses.iter().filter(|c| self.matches(c)).collect()
    }
}

fn options(kind: &str, counts: BTreeMap<&str, usize>) -> Vec<FilterOption> {
    counts
        .into_iter()
        .map(|(value, count)| FilterOption {
            id: filter_id(kind, value),
            label: value.to_string(),
            count,
        })
        .collect()
}

/// Categorías de filtro con el número de cursos de cada opción.
pub fn filter_categories(courses: &[Course], lang: Language) -> Vec<FilterCategory> {
    let mut difficulties: BTreeMap<&str, usize> = BTreeMap::new();
    let mut tags: BTreeMap<&str, usize> = BTreeMap::new();
    for course in courses {
        if !course.difficulty.is_empty() {
            *difficulties.entry(course.difficulty.as_str()).or_insert(0) += 1;
        }
        let unique: BTreeSet<&str> = course.tags.iter().map(String::as_str).collect();
        for tag in unique {
            *tags.entry(tag).or_insert(0) += 1;
        }
    }

    vec![
        FilterCategory {
            id: DIFFICULTY.to_string(),
            title: tr(lang, Text::Difficulty).to_string(),
            options: options(DIFFICULTY, difficulties),
        },
        FilterCategory {
            id: TAG.to_string(),
            title: tr(lang, Text::Tags).to_string(),
            options: options(TAG, tags),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, difficulty: &str, tags: &[&str]) -> Course {
        Course {
            id: id.into(),
            title: id.into(),
            difficulty: difficulty.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Course::default()
        }
    }

    fn catalog() -> Vec<Course> {
        vec![
            course("next", "Beginner", &["Next.js", "React"]),
            course("state", "Intermediate", &["React", "Hooks"]),
            course("ts", "Beginner", &["TypeScript"]),
        ]
    }

    fn ids(found: Vec<&Course>) -> Vec<&str> {
        found.into_iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_matches_everything() {
        let courses = catalog();
        assert_eq!(CourseFilter::default().apply(&courses).len(), 3);
    }

    #[test]
    fn options_within_a_category_are_ored() {
        let courses = catalog();
        let mut filter = CourseFilter::default();
        filter.toggle("tag:Hooks");
        filter.toggle("tag:TypeScript");
        assert_eq!(ids(filter.apply(&courses)), vec!["state", "ts"]);
    }

    #[test]
    fn categories_are_anded() {
        let courses = catalog();
        let mut filter = CourseFilter::default();
        filter.toggle("difficulty:Beginner");
        filter.toggle("tag:React");
        assert_eq!(ids(filter.apply(&courses)), vec!["next"]);
        filter.toggle("tag:React");
        assert_eq!(ids(filter.apply(&courses)), vec!["next", "ts"]);
    }

    #[test]
    fn categories_count_courses_per_option() {
        let cats = filter_categories(&catalog(), Language::En);
        let difficulty = &cats[0];
        assert_eq!(difficulty.options.len(), 2);
        assert_eq!(difficulty.options[0].id, "difficulty:Beginner");
        assert_eq!(difficulty.options[0].count, 2);
        let react = cats[1].options.iter().find(|o| o.label == "React").unwrap();
        assert_eq!(react.count, 2);
    }
}
