use std::fmt;

use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use quiz_core::Clock;
use quiz_core::catalog::Catalog;
use quiz_core::model::{FoodId, FoodItem, GameMode, QuizSettings, SessionSummary};

use super::answer::{evaluate_typed, is_correct_choice};
use super::options::build_options;
use super::plan::build_order;
use super::progress::QuizProgress;

//
// ─── STATES AND OUTCOMES ───────────────────────────────────────────────────────
//

/// Which screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Start,
    ModeSelect,
    Playing,
    Feedback,
    End,
}

/// Mode-specific state of the question on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Round {
    MultipleChoice {
        options: Vec<String>,
        selected: Option<String>,
    },
    Typing {
        draft: String,
    },
}

impl Round {
    #[must_use]
    pub fn mode(&self) -> GameMode {
        match self {
            Round::MultipleChoice { .. } => GameMode::MultipleChoice,
            Round::Typing { .. } => GameMode::TypingPractice,
        }
    }
}

/// Why an action left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    WrongPhase,
    WrongMode,
    NoCurrentItem,
    AlreadyAnswered,
    EmptyAnswer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored(Rejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Scored { correct: bool },
    Ignored(Rejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved on; `index` is the new 0-based question index.
    NextQuestion { index: usize },
    Finished { score: usize, total: usize },
    Ignored(Rejection),
}

/// One scored answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub item_id: FoodId,
    pub expected: String,
    pub given: String,
    pub correct: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

struct Session {
    items: Vec<FoodItem>,
    current: usize,
    score: usize,
    round: Round,
    last_answer_correct: Option<bool>,
    answers: Vec<AnswerRecord>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl Session {
    fn current_item(&self) -> Option<&FoodItem> {
        self.items.get(self.current)
    }

    fn record(&mut self, given: &str, correct: bool) {
        let Some(item) = self.current_item() else {
            return;
        };
        let record = AnswerRecord {
            item_id: item.id().clone(),
            expected: item.display_name().to_string(),
            given: given.to_string(),
            correct,
        };
        self.answers.push(record);
        if correct {
            self.score += 1;
        }
        self.last_answer_correct = Some(correct);
    }
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Owns the single active game and every transition between screens.
///
/// Actions that do not fit the current state are ignored and reported
/// through the returned outcome; they never change state.
pub struct SessionController {
    catalog: Catalog,
    settings: QuizSettings,
    clock: Clock,
    rng: StdRng,
    phase: QuizPhase,
    session: Option<Session>,
    content_loading: bool,
}

impl SessionController {
    #[must_use]
    pub fn new(catalog: Catalog, settings: QuizSettings) -> Self {
        Self::with_rng(catalog, settings, StdRng::from_os_rng())
    }

    /// Deterministic shuffles, for tests and reproducible runs.
    #[must_use]
    pub fn with_seed(catalog: Catalog, settings: QuizSettings, seed: u64) -> Self {
        Self::with_rng(catalog, settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: Catalog, settings: QuizSettings, rng: StdRng) -> Self {
        Self {
            catalog,
            settings,
            clock: Clock::default(),
            rng,
            phase: QuizPhase::Start,
            session: None,
            content_loading: false,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    // ── transitions ──

    /// Start screen → mode selection.
    pub fn begin(&mut self) -> Transition {
        if self.phase != QuizPhase::Start {
            return self.ignore("begin", Rejection::WrongPhase);
        }
        self.phase = QuizPhase::ModeSelect;
        Transition::Applied
    }

    /// Starts a fresh session in `mode` with a newly shuffled question order.
    pub fn select_mode(&mut self, mode: GameMode) -> Transition {
        if self.phase != QuizPhase::ModeSelect {
            return self.ignore("select_mode", Rejection::WrongPhase);
        }

        let items = build_order(self.catalog.items(), &mut self.rng);
        let round = self.new_round(mode, items.first());
        info!("starting {mode} session with {} questions", items.len());

        self.content_loading = !items.is_empty();
        self.session = Some(Session {
            items,
            current: 0,
            score: 0,
            round,
            last_answer_correct: None,
            answers: Vec::new(),
            started_at: self.clock.now(),
            completed_at: None,
        });
        self.phase = QuizPhase::Playing;
        Transition::Applied
    }

    /// Scores the chosen option for the current multiple-choice question.
    pub fn submit_multiple_choice_answer(&mut self, option: &str) -> AnswerOutcome {
        if let Err(rejection) = self.check_answerable(GameMode::MultipleChoice) {
            return self.ignore_answer("multiple choice", rejection);
        }
        let Some(expected) = self.current_item().map(|i| i.display_name().to_string()) else {
            return AnswerOutcome::Ignored(Rejection::NoCurrentItem);
        };
        let correct = is_correct_choice(option, &expected);
        let Some(session) = self.session.as_mut() else {
            return AnswerOutcome::Ignored(Rejection::NoCurrentItem);
        };

        if let Round::MultipleChoice { selected, .. } = &mut session.round {
            *selected = Some(option.to_string());
        }
        session.record(option, correct);
        self.phase = QuizPhase::Feedback;
        debug!("multiple choice answer {option:?} correct={correct}");
        AnswerOutcome::Scored { correct }
    }

    /// Scores typed text for the current typing question. Blank input is
    /// rejected and the question stays open.
    pub fn submit_typed_answer(&mut self, text: &str) -> AnswerOutcome {
        if let Err(rejection) = self.check_answerable(GameMode::TypingPractice) {
            return self.ignore_answer("typed", rejection);
        }
        let Some(expected) = self.current_item().map(|i| i.display_name().to_string()) else {
            return AnswerOutcome::Ignored(Rejection::NoCurrentItem);
        };
        let Some(correct) = evaluate_typed(text, &expected) else {
            return self.ignore_answer("typed", Rejection::EmptyAnswer);
        };
        let Some(session) = self.session.as_mut() else {
            return AnswerOutcome::Ignored(Rejection::NoCurrentItem);
        };

        session.record(text.trim(), correct);
        self.phase = QuizPhase::Feedback;
        debug!("typed answer {text:?} correct={correct}");
        AnswerOutcome::Scored { correct }
    }

    /// Stores partially typed text while a typing question is open.
    pub fn update_draft(&mut self, text: &str) -> Transition {
        if self.phase != QuizPhase::Playing {
            return self.ignore("update_draft", Rejection::WrongPhase);
        }
        if let Some(Round::Typing { draft }) = self.session.as_mut().map(|s| &mut s.round) {
            text.clone_into(draft);
            return Transition::Applied;
        }
        self.ignore("update_draft", Rejection::WrongMode)
    }

    /// Leaves the feedback screen: next question, or the end screen after
    /// the last one.
    pub fn advance_to_next(&mut self) -> AdvanceOutcome {
        if self.phase != QuizPhase::Feedback {
            debug!("ignoring advance_to_next: {:?}", Rejection::WrongPhase);
            return AdvanceOutcome::Ignored(Rejection::WrongPhase);
        }
        let Some(session) = self.session.as_ref() else {
            return AdvanceOutcome::Ignored(Rejection::NoCurrentItem);
        };

        let next = session.current + 1;
        if next < session.items.len() {
            let mode = session.round.mode();
            let next_item = session.items.get(next).cloned();
            let round = self.new_round(mode, next_item.as_ref());
            if let Some(session) = self.session.as_mut() {
                session.current = next;
                session.round = round;
                session.last_answer_correct = None;
            }
            self.content_loading = true;
            self.phase = QuizPhase::Playing;
            return AdvanceOutcome::NextQuestion { index: next };
        }

        let now = self.clock.now();
        let Some(session) = self.session.as_mut() else {
            return AdvanceOutcome::Ignored(Rejection::NoCurrentItem);
        };
        session.completed_at = Some(now.max(session.started_at));
        let (score, total) = (session.score, session.items.len());
        info!("session finished: {score}/{total}");

        self.content_loading = false;
        self.phase = QuizPhase::End;
        AdvanceOutcome::Finished { score, total }
    }

    /// End screen → mode selection. The next order is built when a mode is
    /// chosen again.
    pub fn restart(&mut self) -> Transition {
        if self.phase != QuizPhase::End {
            return self.ignore("restart", Rejection::WrongPhase);
        }
        self.session = None;
        self.content_loading = false;
        self.phase = QuizPhase::ModeSelect;
        Transition::Applied
    }

    /// Presentation signal that the current question's media finished loading.
    pub fn mark_content_ready(&mut self) {
        self.content_loading = false;
    }

    // ── state readers ──

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn mode(&self) -> Option<GameMode> {
        self.session.as_ref().map(|s| s.round.mode())
    }

    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.session.as_ref().map(|s| &s.round)
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&FoodItem> {
        self.session.as_ref().and_then(Session::current_item)
    }

    /// Options for the current multiple-choice question; empty otherwise.
    #[must_use]
    pub fn options(&self) -> &[String] {
        match self.round() {
            Some(Round::MultipleChoice { options, .. }) => options.as_slice(),
            _ => &[],
        }
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        match self.round() {
            Some(Round::MultipleChoice { selected, .. }) => selected.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn draft(&self) -> Option<&str> {
        match self.round() {
            Some(Round::Typing { draft }) => Some(draft.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn last_answer_correct(&self) -> Option<bool> {
        self.session.as_ref().and_then(|s| s.last_answer_correct)
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.score)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.current)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.items.len())
    }

    /// The shuffled question order of the running session.
    #[must_use]
    pub fn ordered_items(&self) -> &[FoodItem] {
        self.session
            .as_ref()
            .map(|s| s.items.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        self.session
            .as_ref()
            .map(|s| s.answers.as_slice())
            .unwrap_or_default()
    }

    /// True when the question after this one exists.
    #[must_use]
    pub fn has_next_question(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.current + 1 < s.items.len())
    }

    #[must_use]
    pub fn is_content_loading(&self) -> bool {
        self.content_loading
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        match self.session.as_ref() {
            Some(s) => QuizProgress {
                position: if s.items.is_empty() { 0 } else { s.current + 1 },
                total: s.items.len(),
                answered: s.answers.len(),
                score: s.score,
            },
            None => QuizProgress::default(),
        }
    }

    /// Final result, available on the end screen.
    #[must_use]
    pub fn summary(&self) -> Option<SessionSummary> {
        let session = self.session.as_ref()?;
        let completed_at = session.completed_at?;
        SessionSummary::new(
            session.round.mode(),
            session.score,
            session.items.len(),
            session.started_at,
            completed_at,
        )
        .ok()
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ── helpers ──

    fn new_round(&mut self, mode: GameMode, item: Option<&FoodItem>) -> Round {
        match mode {
            GameMode::MultipleChoice => {
                let options = item
                    .map(|item| {
                        build_options(
                            item,
                            self.catalog.items(),
                            self.settings.options_per_question(),
                            &mut self.rng,
                        )
                    })
                    .unwrap_or_default();
                Round::MultipleChoice {
                    options,
                    selected: None,
                }
            }
            GameMode::TypingPractice => Round::Typing {
                draft: String::new(),
            },
        }
    }

    fn check_answerable(&self, mode: GameMode) -> Result<(), Rejection> {
        match self.phase {
            QuizPhase::Playing => {}
            QuizPhase::Feedback => return Err(Rejection::AlreadyAnswered),
            _ => return Err(Rejection::WrongPhase),
        }
        if self.mode() != Some(mode) {
            return Err(Rejection::WrongMode);
        }
        if self.current_item().is_none() {
            return Err(Rejection::NoCurrentItem);
        }
        Ok(())
    }

    fn ignore(&self, action: &str, rejection: Rejection) -> Transition {
        debug!("ignoring {action} in {:?}: {rejection:?}", self.phase);
        Transition::Ignored(rejection)
    }

    fn ignore_answer(&self, kind: &str, rejection: Rejection) -> AnswerOutcome {
        debug!("ignoring {kind} answer in {:?}: {rejection:?}", self.phase);
        AnswerOutcome::Ignored(rejection)
    }
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("phase", &self.phase)
            .field("mode", &self.mode())
            .field("current_index", &self.current_index())
            .field("total", &self.total())
            .field("score", &self.score())
            .field("content_loading", &self.content_loading)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
