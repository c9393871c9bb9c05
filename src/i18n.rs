use crate::model::Language;

/// Textos de la interfaz.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Text {
    Courses,
    CatalogTitle,
    Filters,
    Difficulty,
    Tags,
    ClearFilters,
    NoCourses,
    BackToCourses,
    StartLearning,
    WhatYouWillLearn,
    Prerequisites,
    CourseContent,
    Activities,
    Theory,
    Workshop,
    Steps,
    Step,
    Of,
    Progress,
    Language,
    English,
    French,
    DarkMode,
    LightMode,
    Previous,
    Next,
    QuizCheckpoint,
    TrackCompleted,
    Congratulations,
    Restart,
    Reflect,
    Correct,
    TryAgain,
    AnswerRevealed,
    Explanation,
    Copy,
    Expand,
    Collapse,
    OpenInStackBlitz,
    NoSignInRequired,
    ToTryLocally,
    SandboxHelp,
    StartWorkshop,
    ExpandSidebar,
    CollapseSidebar,
    ResetProgress,
    ConfirmReset,
    Yes,
    No,
    NoSteps,
    Diagram,
    AnswerToContinue,
}

pub fn tr(lang: Language, key: Text) -> &'static str {
    match lang {
        Language::En => en(key),
        Language::Fr => fr(key).unwrap_or_else(|| en(key)),
    }
}

fn en(key: Text) -> &'static str {
    match key {
        Text::Courses => "Courses",
        Text::CatalogTitle => "Explore our courses",
        Text::Filters => "Filters",
        Text::Difficulty => "Difficulty",
        Text::Tags => "Tags",
        Text::ClearFilters => "Clear filters",
        Text::NoCourses => "No course matches these filters.",
        Text::BackToCourses => "⬅ Back to courses",
        Text::StartLearning => "Start learning ▶",
        Text::WhatYouWillLearn => "What you will learn",
        Text::Prerequisites => "Prerequisites",
        Text::CourseContent => "Course content",
        Text::Activities => "Activities",
        Text::Theory => "Theory",
        Text::Workshop => "Workshop",
        Text::Steps => "Steps",
        Text::Step => "Step",
        Text::Of => "of",
        Text::Progress => "Progress",
        Text::Language => "Language",
        Text::English => "English",
        Text::French => "Français",
        Text::DarkMode => "🌙 Dark mode",
        Text::LightMode => "☀ Light mode",
        Text::Previous => "⬅ Previous",
        Text::Next => "Next ➡",
        Text::QuizCheckpoint => "Quiz checkpoint",
        Text::TrackCompleted => "🎓 Completed",
        Text::Congratulations => "Congratulations! You reached the end of this track.",
        Text::Restart => "⟲ Restart",
        Text::Reflect => "Reflect 💭",
        Text::Correct => "✅ Correct!",
        Text::TryAgain => "❌ Try again",
        Text::AnswerRevealed => "The correct answer is highlighted.",
        Text::Explanation => "💡 Explanation",
        Text::Copy => "Copy",
        Text::Expand => "Expand",
        Text::Collapse => "Collapse",
        Text::OpenInStackBlitz => "▶ Open in StackBlitz (Next.js)",
        Text::NoSignInRequired => "No sign-in required. Runs the Next.js 14 + TS example by Vercel.",
        Text::ToTryLocally => "To try locally, run",
        Text::SandboxHelp => "If the sandbox does not open, copy the code above and run",
        Text::StartWorkshop => "Start workshop 🚀",
        Text::ExpandSidebar => "Expand sidebar",
        Text::CollapseSidebar => "Collapse sidebar",
        Text::ResetProgress => "🔄 Reset progress",
        Text::ConfirmReset => "Erase all saved progress? This cannot be undone.",
        Text::Yes => "Yes, erase",
        Text::No => "No",
        Text::NoSteps => "No steps available for this track.",
        Text::Diagram => "Open diagram",
        Text::AnswerToContinue => "Answer the quiz to continue.",
    }
}

// Lo que falte en francés cae al inglés.
fn fr(key: Text) -> Option<&'static str> {
    let text = match key {
        Text::Courses => "Cours",
        Text::CatalogTitle => "Découvrez nos cours",
        Text::Filters => "Filtres",
        Text::Difficulty => "Difficulté",
        Text::Tags => "Étiquettes",
        Text::ClearFilters => "Effacer les filtres",
        Text::NoCourses => "Aucun cours ne correspond à ces filtres.",
        Text::BackToCourses => "⬅ Retour aux cours",
        Text::StartLearning => "Commencer ▶",
        Text::WhatYouWillLearn => "Ce que vous allez apprendre",
        Text::Prerequisites => "Prérequis",
        Text::CourseContent => "Contenu du cours",
        Text::Activities => "Activités",
        Text::Theory => "Théorie",
        Text::Workshop => "Atelier",
        Text::Steps => "Étapes",
        Text::Step => "Étape",
        Text::Of => "sur",
        Text::Progress => "Progression",
        Text::Language => "Langue",
        Text::DarkMode => "🌙 Mode sombre",
        Text::LightMode => "☀ Mode clair",
        Text::Previous => "⬅ Précédent",
        Text::Next => "Suivant ➡",
        Text::QuizCheckpoint => "Point de contrôle",
        Text::TrackCompleted => "🎓 Terminé",
        Text::Congratulations => "Félicitations ! Vous êtes arrivé au bout de ce parcours.",
        Text::Restart => "⟲ Recommencer",
        Text::Reflect => "Réfléchir 💭",
        Text::Correct => "✅ Correct !",
        Text::TryAgain => "❌ Réessayer",
        Text::AnswerRevealed => "La bonne réponse est mise en évidence.",
        Text::Explanation => "💡 Explication",
        Text::Copy => "Copier",
        Text::Expand => "Développer",
        Text::Collapse => "Réduire",
        Text::OpenInStackBlitz => "▶ Ouvrir dans StackBlitz (Next.js)",
        Text::NoSignInRequired => "Aucune connexion requise. Exécute l'exemple Next.js 14 + TS de Vercel.",
        Text::ToTryLocally => "Pour essayer localement, exécutez",
        Text::SandboxHelp => "Si le bac à sable ne s'ouvre pas, copiez le code ci-dessus et exécutez",
        Text::StartWorkshop => "Commencer l'atelier 🚀",
        Text::ExpandSidebar => "Développer la barre latérale",
        Text::CollapseSidebar => "Réduire la barre latérale",
        Text::ResetProgress => "🔄 Effacer la progression",
        Text::ConfirmReset => "Effacer toute la progression ? Action irréversible.",
        Text::Yes => "Oui, effacer",
        Text::No => "Non",
        Text::NoSteps => "Aucune étape pour ce parcours.",
        Text::Diagram => "Ouvrir le schéma",
        Text::AnswerToContinue => "Répondez au quiz pour continuer.",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn french_falls_back_to_english() {
        assert_eq!(tr(Language::Fr, Text::English), "English");
        assert_eq!(tr(Language::Fr, Text::French), "Français");
        assert_eq!(tr(Language::Fr, Text::Next), "Suivant ➡");
    }
}
