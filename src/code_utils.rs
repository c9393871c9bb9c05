use crate::model::{Section, Step};
use egui_code_editor::Syntax;

pub const STACKBLITZ_HOME: &str = "https://stackblitz.com";
pub const STACKBLITZ_NEXT_TEMPLATE: &str =
    "https://stackblitz.com/fork/github/vercel/next.js/tree/canary/examples/with-typescript-app-router";
pub const DEFAULT_SANDBOX_FILE: &str = "app/page.tsx";
pub const LOCAL_COMMAND: &str = "npx create-next-app@latest --typescript --app";

/// Líneas visibles de un bloque de código plegado.
pub const MAX_LINES_COLLAPSED: usize = 15;

/// Busca una ruta en un comentario del tipo `// app/page.tsx` o `// components/X.tsx`.
pub fn code_file_path(code: &str) -> Option<String> {
    let mut rest = code;
    while let Some(pos) = rest.find("//") {
        let after = rest[pos + 2..].trim_start_matches([' ', '\t']);
        if after.starts_with("app/") || after.starts_with("components/") {
            let path: String = after.chars().take_while(|c| !c.is_whitespace()).collect();
            let prefix_len = if after.starts_with("app/") { 4 } else { 11 };
            if path.len() > prefix_len {
                return Some(path);
            }
        }
        rest = &rest[pos + 2..];
    }
    None
}

/// Fichero a abrir en el sandbox: el declarado o el del comentario del código.
pub fn step_file_path(step: &Step) -> Option<String> {
    step.sandbox
        .as_ref()
        .and_then(|s| s.file.clone())
        .filter(|f| !f.trim().is_empty())
        .or_else(|| step.first_code().and_then(code_file_path))
}

/// URL de StackBlitz para probar el código del paso.
pub fn sandbox_url(step: &Step) -> String {
    if step.section != Section::Workshop || step.first_code().is_none() {
        return STACKBLITZ_HOME.to_string();
    }
    let file = step_file_path(step).unwrap_or_else(|| DEFAULT_SANDBOX_FILE.to_string());
    let normalized = if file.starts_with('/') {
        file
    } else {
        format!("/{file}")
    };
    match url::Url::parse_with_params(STACKBLITZ_NEXT_TEMPLATE, &[("file", normalized.as_str())]) {
        Ok(url) => url.into(),
        Err(err) => {
            log::warn!("cannot build sandbox url: {err}");
            STACKBLITZ_HOME.to_string()
        }
    }
}

pub fn tsx_syntax() -> Syntax {
    Syntax::new("tsx")
        .with_comment("//")
        .with_comment_multiline(["/*", "*/"])
        .with_keywords([
            "import", "export", "default", "from", "function", "return", "const", "let", "var",
            "if", "else", "for", "while", "async", "await", "new", "type", "interface", "extends",
            "implements", "class", "true", "false", "null", "undefined", "typeof", "as",
        ])
        .with_types([
            "string", "number", "boolean", "void", "any", "unknown", "never", "React", "ReactNode",
            "Promise", "Array", "Record",
        ])
}

pub fn shell_syntax() -> Syntax {
    Syntax::new("sh")
        .with_comment("#")
        .with_keywords(["npm", "npx", "cd", "mkdir", "git", "pnpm", "yarn"])
}

/// Resaltado según la etiqueta de lenguaje del bloque; por defecto TSX.
pub fn syntax_for(language: Option<&str>) -> Syntax {
    match language.map(str::to_ascii_lowercase).as_deref() {
        Some("bash" | "sh" | "shell" | "console") => shell_syntax(),
        _ => tsx_syntax(),
    }
}

/// Devuelve el código a mostrar y si hay líneas ocultas.
pub fn collapsed_code(code: &str, expanded: bool) -> (String, bool) {
    let lines: Vec<&str> = code.lines().collect();
    let collapsible = lines.len() > MAX_LINES_COLLAPSED;
    if collapsible && !expanded {
        (lines[..MAX_LINES_COLLAPSED].join("\n"), true)
    } else {
        (code.trim_end_matches('\n').to_string(), collapsible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Sandbox};

    fn workshop_step(code: &str, sandbox: Option<&str>) -> Step {
        Step {
            section: Section::Workshop,
            title: "t".into(),
            course_id: None,
            meta: None,
            blocks: vec![Block::Code {
                language: None,
                content: code.into(),
            }],
            sandbox: sandbox.map(|f| Sandbox {
                template: None,
                file: Some(f.into()),
            }),
        }
    }

    #[test]
    fn file_path_comes_from_a_code_comment() {
        assert_eq!(
            code_file_path("// components/TodoList.tsx\n\"use client\";").as_deref(),
            Some("components/TodoList.tsx")
        );
        assert_eq!(code_file_path("const a = 1; //app/x/page.tsx").as_deref(), Some("app/x/page.tsx"));
        assert_eq!(code_file_path("// just a comment"), None);
        assert_eq!(code_file_path("https://example.com/app/"), None);
    }

    #[test]
    fn sandbox_url_encodes_the_file() {
        let step = workshop_step("// components/TodoList.tsx\n", None);
        assert_eq!(
            sandbox_url(&step),
            format!("{STACKBLITZ_NEXT_TEMPLATE}?file=%2Fcomponents%2FTodoList.tsx")
        );
    }

    #[test]
    fn explicit_sandbox_file_wins_and_default_applies() {
        let step = workshop_step("// components/A.tsx", Some("/app/layout.tsx"));
        assert!(sandbox_url(&step).ends_with("?file=%2Fapp%2Flayout.tsx"));
        let step = workshop_step("export default 1", None);
        assert!(sandbox_url(&step).ends_with("?file=%2Fapp%2Fpage.tsx"));
    }

    #[test]
    fn course_steps_link_to_the_home_page() {
        let mut step = workshop_step("// app/page.tsx", None);
        step.section = Section::Course;
        assert_eq!(sandbox_url(&step), STACKBLITZ_HOME);
    }

    #[test]
    fn long_code_collapses() {
        let code = (1..=20).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let (shown, collapsible) = collapsed_code(&code, false);
        assert!(collapsible);
        assert_eq!(shown.lines().count(), MAX_LINES_COLLAPSED);
        let (shown, _) = collapsed_code(&code, true);
        assert_eq!(shown.lines().count(), 20);
        assert_eq!(collapsed_code("a\nb\n", false), ("a\nb".to_string(), false));
    }
}
