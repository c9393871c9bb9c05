use super::progress::{ProgressStore, keys, saved_index};
use super::quiz::{QuizState, SubmitOutcome};
use crate::model::{QuizData, Step};

/// Duración del fundido entre pasos, en segundos.
pub const FADE_SECS: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Mostrando el contenido del paso.
    Viewing,
    /// Mostrando el quiz del paso actual.
    QuizGate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// Empieza el fundido hacia el índice indicado.
    Transition(usize),
    GateOpened,
    GateClosed,
    /// Último paso alcanzado; se guarda la marca de completado.
    Completed,
    /// El quiz visible aún no está resuelto.
    Blocked,
    /// Hay un fundido en curso: la petición se descarta.
    Busy,
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Pending {
    target: usize,
    commit_at: f64,
}

/// Máquina de estados lineal sobre una secuencia de pasos.
///
/// Los cambios de índice no son inmediatos: `advance`/`retreat`/`jump_to`
/// arrancan un fundido y `tick` confirma el cambio cuando termina.
/// Mientras tanto cualquier otra petición de navegación se ignora.
pub struct StepNavigator {
    steps: Vec<Step>,
    progress_key: String,
    current: usize,
    phase: Phase,
    quiz: QuizState,
    pending: Option<Pending>,
}

fn clamp_index(saved: usize, total: usize) -> usize {
    saved.min(total.saturating_sub(1))
}

impl StepNavigator {
    /// Crea el navegador y recupera la posición guardada bajo `progress_key`.
    pub fn new(steps: Vec<Step>, progress_key: impl Into<String>, store: &dyn ProgressStore) -> Self {
        let progress_key = progress_key.into();
        let current = clamp_index(saved_index(store, &progress_key), steps.len());
        Self {
            steps,
            progress_key,
            current,
            phase: Phase::Viewing,
            quiz: QuizState::default(),
            pending: None,
        }
    }

    /// Cambia de pista (idioma, actividad o curso) y restaura su posición.
    pub fn switch_track(
        &mut self,
        steps: Vec<Step>,
        progress_key: impl Into<String>,
        store: &dyn ProgressStore,
    ) {
        *self = Self::new(steps, progress_key, store);
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn total(&self) -> usize {
        self.steps.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.current)
    }

    pub fn current_quiz(&self) -> Option<&QuizData> {
        self.current_step().and_then(Step::quiz)
    }

    pub fn progress_key(&self) -> &str {
        &self.progress_key
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn show_quiz(&self) -> bool {
        self.phase == Phase::QuizGate
    }

    pub fn quiz_answered(&self) -> bool {
        self.quiz.is_finalized()
    }

    pub fn quiz_state(&self) -> &QuizState {
        &self.quiz
    }

    pub fn is_fading(&self) -> bool {
        self.pending.is_some()
    }

    /// Opacidad del contenido en `now`: baja de 1 a 0 durante el fundido.
    pub fn fade_opacity(&self, now: f64) -> f32 {
        match self.pending {
            Some(p) => ((p.commit_at - now) / FADE_SECS).clamp(0.0, 1.0) as f32,
            None => 1.0,
        }
    }

    pub fn is_last(&self) -> bool {
        self.total() > 0 && self.current == self.total() - 1
    }

    /// Vista final: último paso y nada más que resolver.
    pub fn is_finished(&self) -> bool {
        self.is_last()
            && match self.phase {
                Phase::Viewing => self.current_quiz().is_none(),
                Phase::QuizGate => self.quiz.is_finalized(),
            }
    }

    pub fn can_retreat(&self) -> bool {
        self.show_quiz() || self.current > 0
    }

    /// En el último paso sin quiz, avanzar solo guarda la marca de completado.
    pub fn can_advance(&self) -> bool {
        match self.phase {
            Phase::Viewing => !self.steps.is_empty(),
            Phase::QuizGate => self.quiz.is_finalized() && !self.is_last(),
        }
    }

    pub fn advance(&mut self, now: f64, store: &mut dyn ProgressStore) -> NavOutcome {
        if self.pending.is_some() {
            return NavOutcome::Busy;
        }
        if self.steps.is_empty() {
            return NavOutcome::Ignored;
        }
        match self.phase {
            Phase::Viewing => {
                if self.current_quiz().is_some() {
                    self.phase = Phase::QuizGate;
                    self.quiz.reset();
                    NavOutcome::GateOpened
                } else if self.is_last() {
                    store.set(keys::COMPLETED, "true");
                    log::info!("track {} completed", self.progress_key);
                    NavOutcome::Completed
                } else {
                    self.begin(self.current + 1, now)
                }
            }
            Phase::QuizGate => {
                if !self.quiz.is_finalized() {
                    NavOutcome::Blocked
                } else if self.is_last() {
                    NavOutcome::Ignored
                } else {
                    self.begin(self.current + 1, now)
                }
            }
        }
    }

    pub fn retreat(&mut self, now: f64) -> NavOutcome {
        if self.pending.is_some() {
            return NavOutcome::Busy;
        }
        match self.phase {
            Phase::QuizGate => {
                self.phase = Phase::Viewing;
                self.quiz.reset();
                NavOutcome::GateClosed
            }
            Phase::Viewing if self.current == 0 => NavOutcome::Ignored,
            Phase::Viewing => self.begin(self.current - 1, now),
        }
    }

    /// Salto desde la barra lateral: solo hacia pasos anteriores.
    pub fn jump_to(&mut self, index: usize, now: f64) -> NavOutcome {
        if self.pending.is_some() {
            return NavOutcome::Busy;
        }
        if index >= self.current {
            return NavOutcome::Ignored;
        }
        self.begin(index, now)
    }

    /// Vuelve al primer paso (botón de reinicio de la vista final).
    pub fn restart(&mut self, now: f64) -> NavOutcome {
        if self.pending.is_some() {
            return NavOutcome::Busy;
        }
        if self.steps.is_empty() {
            return NavOutcome::Ignored;
        }
        self.begin(0, now)
    }

    /// Confirma el fundido pendiente si ya ha terminado. Devuelve el nuevo índice.
    pub fn tick(&mut self, now: f64, store: &mut dyn ProgressStore) -> Option<usize> {
        let pending = self.pending?;
        if now < pending.commit_at {
            return None;
        }
        self.pending = None;
        self.current = clamp_index(pending.target, self.total());
        self.phase = Phase::Viewing;
        self.quiz.reset();
        store.set(&self.progress_key, &self.current.to_string());
        log::debug!("{} -> step {}", self.progress_key, self.current);
        Some(self.current)
    }

    /// Envía una opción al quiz visible. `None` si no hay quiz visible.
    pub fn submit(&mut self, option: &str) -> Option<SubmitOutcome> {
        if self.pending.is_some() || self.phase != Phase::QuizGate {
            return None;
        }
        let quiz = self.steps.get(self.current)?.quiz()?;
        Some(self.quiz.submit(quiz, option))
    }

    pub fn submit_digit(&mut self, digit: usize) -> Option<SubmitOutcome> {
        if self.pending.is_some() || self.phase != Phase::QuizGate {
            return None;
        }
        let quiz = self.steps.get(self.current)?.quiz()?;
        self.quiz.submit_digit(quiz, digit)
    }

    fn begin(&mut self, target: usize, now: f64) -> NavOutcome {
        self.pending = Some(Pending {
            target,
            commit_at: now + FADE_SECS,
        });
        NavOutcome::Transition(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::progress::MemoryStore;
    use crate::model::{Block, Section};

    fn step(title: &str) -> Step {
        Step {
            section: Section::Workshop,
            title: title.into(),
            course_id: None,
            meta: None,
            blocks: vec![Block::Text(format!("{title} body"))],
            sandbox: None,
        }
    }

    fn nav(n: usize, store: &MemoryStore) -> StepNavigator {
        let steps = (0..n).map(|i| step(&format!("s{i}"))).collect();
        StepNavigator::new(steps, "lbd.workshop.step.en", store)
    }

    #[test]
    fn index_change_waits_for_the_fade() {
        let mut store = MemoryStore::new();
        let mut nav = nav(3, &store);
        assert_eq!(nav.advance(0.0, &mut store), NavOutcome::Transition(1));
        assert!(nav.is_fading());
        assert!((nav.fade_opacity(0.1) - 0.5).abs() < 1e-6);
        assert_eq!(nav.tick(0.1, &mut store), None);
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.tick(0.2, &mut store), Some(1));
        assert_eq!(store.get("lbd.workshop.step.en").as_deref(), Some("1"));
    }

    #[test]
    fn requests_during_fade_are_ignored() {
        let mut store = MemoryStore::new();
        let mut nav = nav(4, &store);
        nav.advance(0.0, &mut store);
        assert_eq!(nav.advance(0.05, &mut store), NavOutcome::Busy);
        assert_eq!(nav.retreat(0.1), NavOutcome::Busy);
        assert_eq!(nav.jump_to(0, 0.1), NavOutcome::Busy);
        nav.tick(1.0, &mut store);
        assert_eq!(nav.current_index(), 1);
    }

    fn quiz_steps(store: &MemoryStore) -> StepNavigator {
        let mut steps: Vec<Step> = (0..3).map(|i| step(&format!("s{i}"))).collect();
        steps[1].blocks.push(Block::Quiz(QuizData {
            question: "Q".into(),
            options: vec!["A".into(), "B".into()],
            answer: "B".into(),
        }));
        StepNavigator::new(steps, "lbd.workshop.step.en", store)
    }

    #[test]
    fn quiz_and_restart_are_ignored_while_leaving_an_answered_gate() {
        let mut store = MemoryStore::new();
        store.set("lbd.workshop.step.en", "1");
        let mut nav = quiz_steps(&store);
        assert_eq!(nav.advance(0.0, &mut store), NavOutcome::GateOpened);
        nav.submit("A");
        nav.submit("B");
        assert_eq!(nav.advance(0.0, &mut store), NavOutcome::Transition(2));

        assert_eq!(nav.submit("A"), None);
        assert_eq!(nav.submit_digit(1), None);
        assert_eq!(nav.restart(0.1), NavOutcome::Busy);
        assert_eq!(nav.quiz_state().attempts(), 1);

        nav.tick(1.0, &mut store);
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn an_open_gate_does_not_count_answers_mid_fade() {
        let mut store = MemoryStore::new();
        store.set("lbd.workshop.step.en", "1");
        let mut nav = quiz_steps(&store);
        nav.advance(0.0, &mut store);
        nav.submit("A");
        // el reinicio sale del quiz abierto con un fundido
        assert_eq!(nav.restart(0.0), NavOutcome::Transition(0));
        assert!(nav.show_quiz());
        assert_eq!(nav.submit("A"), None);
        assert_eq!(nav.submit_digit(2), None);
        assert_eq!(nav.quiz_state().attempts(), 1);
        assert!(!nav.quiz_answered());
        assert_eq!(nav.restart(0.1), NavOutcome::Busy);

        nav.tick(1.0, &mut store);
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.quiz_state().attempts(), 0);
    }

    #[test]
    fn seeded_index_is_clamped() {
        let mut store = MemoryStore::new();
        store.set("lbd.workshop.step.en", "42");
        assert_eq!(nav(3, &store).current_index(), 2);
        assert_eq!(nav(0, &store).current_index(), 0);
    }

    #[test]
    fn empty_track_ignores_everything() {
        let mut store = MemoryStore::new();
        let mut nav = nav(0, &store);
        assert_eq!(nav.advance(0.0, &mut store), NavOutcome::Ignored);
        assert_eq!(nav.retreat(0.0), NavOutcome::Ignored);
        assert_eq!(nav.restart(0.0), NavOutcome::Ignored);
        assert!(nav.current_step().is_none());
        assert!(!nav.is_finished());
        assert!(!nav.can_advance());
        assert!(!nav.can_retreat());
    }

    #[test]
    fn restart_fades_back_to_the_first_step() {
        let mut store = MemoryStore::new();
        store.set("lbd.workshop.step.en", "2");
        let mut nav = nav(3, &store);
        assert_eq!(nav.restart(0.0), NavOutcome::Transition(0));
        nav.tick(0.3, &mut store);
        assert_eq!(nav.current_index(), 0);
        assert_eq!(store.get("lbd.workshop.step.en").as_deref(), Some("0"));
    }
}
