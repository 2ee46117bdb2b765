//! # Practice Sessions
//!
//! Small state machines that sit between the generators/checker and a front
//! end. They hold counters only; any delays between questions are the front
//! end's business.
//!
//! - [`QuestionAttempt`] - one question: attempts, feedback, hint cursor
//! - [`StepWalkthrough`] - step-by-step cursor over a worked solution
//! - [`PracticeSession`] - practice or challenge run with streak tracking
//!
//! ## Example
//!
//! ```rust
//! use algebra_core::equations::{Difficulty, EquationType};
//! use algebra_core::session::{Feedback, PracticeSession};
//!
//! let mut session = PracticeSession::new(EquationType::Radical, Difficulty::Basic);
//! assert_eq!(session.submit("12").unwrap(), Feedback::Incorrect);
//! assert_eq!(session.submit("13").unwrap(), Feedback::Correct);
//! assert_eq!(session.stats().solved, 1);
//! ```

use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::checker::AnswerChecker;
use crate::equations::{generate_with, Difficulty, Equation, EquationStep, EquationType};
use crate::errors::{AlgebraError, AlgebraResult};

/// Failed attempts before feedback switches to a hint
pub const DEFAULT_HINT_THRESHOLD: u32 = 3;

/// Challenge mode: five intermediate questions, then two advanced bonus ones.
pub const CHALLENGE_LAYOUT: [(EquationType, Difficulty); 7] = [
    (EquationType::Polynomial, Difficulty::Intermediate),
    (EquationType::Fractional, Difficulty::Intermediate),
    (EquationType::Radical, Difficulty::Intermediate),
    (EquationType::Quadratic, Difficulty::Intermediate),
    (EquationType::WordProblem, Difficulty::Intermediate),
    (EquationType::Polynomial, Difficulty::Advanced),
    (EquationType::WordProblem, Difficulty::Advanced),
];

/// Outcome of submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    Correct,
    Incorrect,
    /// Incorrect, and enough misses have piled up that a hint is shown
    Hint,
}

impl Feedback {
    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct)
    }
}

// ============================================================================
// Single question
// ============================================================================

/// Attempt state for one question.
#[derive(Debug, Clone)]
pub struct QuestionAttempt {
    equation: Equation,
    attempts: u32,
    hint_index: Option<usize>,
    hint_threshold: u32,
    hints_enabled: bool,
    solved: bool,
}

impl QuestionAttempt {
    pub fn new(equation: Equation) -> Self {
        QuestionAttempt {
            equation,
            attempts: 0,
            hint_index: None,
            hint_threshold: DEFAULT_HINT_THRESHOLD,
            hints_enabled: true,
            solved: false,
        }
    }

    /// Number of failed attempts before [`Feedback::Hint`]; `0` disables
    /// automatic hints.
    pub fn with_hint_threshold(mut self, threshold: u32) -> Self {
        self.hint_threshold = threshold;
        self.hints_enabled = threshold > 0;
        self
    }

    pub fn equation(&self) -> &Equation {
        &self.equation
    }

    /// Failed attempts so far
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Submit an answer. Blank input is rejected before it reaches the
    /// checker and does not count as an attempt.
    pub fn submit(&mut self, checker: &AnswerChecker, answer: &str) -> AlgebraResult<Feedback> {
        let answer = answer.trim();
        if answer.is_empty() {
            return Err(AlgebraError::EmptyAnswer);
        }

        if checker.check(answer, self.equation.solution()) {
            self.solved = true;
            return Ok(Feedback::Correct);
        }

        self.attempts += 1;
        if self.hints_enabled && self.attempts >= self.hint_threshold {
            if self.hint_index.is_none() {
                self.hint_index = Some(0);
            }
            Ok(Feedback::Hint)
        } else {
            Ok(Feedback::Incorrect)
        }
    }

    /// Advance the hint cursor (wrapping) and return the step it lands on.
    /// The first call shows step 1.
    pub fn show_hint(&mut self) -> &EquationStep {
        let len = self.equation.steps().len();
        let next = match self.hint_index {
            None => 0,
            Some(i) => (i + 1) % len,
        };
        self.hint_index = Some(next);
        &self.equation.steps()[next]
    }

    /// Step currently shown as a hint, if any
    pub fn current_hint(&self) -> Option<&EquationStep> {
        self.hint_index.map(|i| &self.equation.steps()[i])
    }
}

// ============================================================================
// Walkthrough
// ============================================================================

/// Cursor for revealing a worked solution one step at a time.
#[derive(Debug, Clone)]
pub struct StepWalkthrough<'a> {
    steps: &'a [EquationStep],
    current: usize,
    show_explanation: bool,
}

impl<'a> StepWalkthrough<'a> {
    pub fn new(equation: &'a Equation) -> Self {
        StepWalkthrough {
            steps: equation.steps(),
            current: 0,
            show_explanation: false,
        }
    }

    pub fn current_step(&self) -> &'a EquationStep {
        &self.steps[self.current]
    }

    /// `(current, total)`, 1-based, for progress display
    pub fn progress(&self) -> (usize, usize) {
        (self.current + 1, self.steps.len())
    }

    /// Steps revealed so far, including the current one
    pub fn revealed(&self) -> &'a [EquationStep] {
        &self.steps[..=self.current]
    }

    /// Move forward; returns false at the last step.
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.steps.len() {
            self.current += 1;
            self.show_explanation = false;
            true
        } else {
            false
        }
    }

    /// Move back; returns false at the first step.
    pub fn prev(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            self.show_explanation = false;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.show_explanation = false;
    }

    pub fn is_complete(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    /// Flip the explanation panel and return its new state
    pub fn toggle_explanation(&mut self) -> bool {
        self.show_explanation = !self.show_explanation;
        self.show_explanation
    }

    pub fn explanation_visible(&self) -> bool {
        self.show_explanation
    }
}

// ============================================================================
// Session
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    /// Endless questions of one category and tier
    Practice,
    /// A fixed set of mixed questions with a final score
    Challenge,
}

/// Counters shown to the learner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Questions answered correctly
    pub solved: u32,
    /// Answers submitted (blank input excluded)
    pub attempts: u32,
    /// Consecutive correct answers
    pub streak: u32,
    /// Longest streak this session
    pub best_streak: u32,
}

/// Progress through a challenge set.
#[derive(Debug, Clone)]
pub struct ChallengeProgress {
    questions: Vec<Equation>,
    index: usize,
    correct_answers: usize,
    completed: bool,
}

impl ChallengeProgress {
    pub fn questions(&self) -> &[Equation] {
        &self.questions
    }

    /// 0-based index of the current question
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn correct_answers(&self) -> usize {
        self.correct_answers
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

/// Build the challenge set described by [`CHALLENGE_LAYOUT`].
pub fn challenge_set<R: Rng + ?Sized>(rng: &mut R) -> Vec<Equation> {
    CHALLENGE_LAYOUT
        .iter()
        .map(|&(equation_type, difficulty)| generate_with(rng, equation_type, difficulty))
        .collect()
}

/// A practice or challenge run.
pub struct PracticeSession<R: Rng = ThreadRng> {
    rng: R,
    checker: AnswerChecker,
    hint_threshold: u32,
    mode: SessionMode,
    category: EquationType,
    difficulty: Difficulty,
    current: QuestionAttempt,
    stats: SessionStats,
    challenge: Option<ChallengeProgress>,
}

impl PracticeSession<ThreadRng> {
    /// Practice session drawing from the thread-local random source.
    pub fn new(category: EquationType, difficulty: Difficulty) -> Self {
        Self::with_rng(rand::thread_rng(), category, difficulty)
    }
}

impl<R: Rng> PracticeSession<R> {
    pub fn with_rng(mut rng: R, category: EquationType, difficulty: Difficulty) -> Self {
        let first = generate_with(&mut rng, category, difficulty);
        PracticeSession {
            rng,
            checker: AnswerChecker::new(),
            hint_threshold: DEFAULT_HINT_THRESHOLD,
            mode: SessionMode::Practice,
            category,
            difficulty,
            current: QuestionAttempt::new(first),
            stats: SessionStats::default(),
            challenge: None,
        }
    }

    /// Use a different checker (e.g. a configured tolerance)
    pub fn with_checker(mut self, checker: AnswerChecker) -> Self {
        self.checker = checker;
        self
    }

    pub fn with_hint_threshold(mut self, threshold: u32) -> Self {
        self.hint_threshold = threshold;
        self.current = QuestionAttempt::new(self.current.equation.clone()).with_hint_threshold(threshold);
        self
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn category(&self) -> EquationType {
        self.category
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn current(&self) -> &QuestionAttempt {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut QuestionAttempt {
        &mut self.current
    }

    pub fn challenge(&self) -> Option<&ChallengeProgress> {
        self.challenge.as_ref()
    }

    /// `(correct, total)` once a challenge has been started
    pub fn challenge_score(&self) -> Option<(usize, usize)> {
        self.challenge
            .as_ref()
            .map(|c| (c.correct_answers, c.questions.len()))
    }

    /// Submit an answer to the current question and update the counters.
    ///
    /// In practice mode a correct answer moves on to a fresh question. In
    /// challenge mode it advances through the set and marks the challenge
    /// complete after the last one.
    pub fn submit(&mut self, answer: &str) -> AlgebraResult<Feedback> {
        if self.challenge.as_ref().is_some_and(|c| c.completed) {
            return Err(AlgebraError::invalid_input(
                "answer",
                answer,
                "the challenge is already complete",
            ));
        }

        let feedback = self.current.submit(&self.checker, answer)?;
        self.stats.attempts += 1;
        debug!("{} -> {:?}", self.current.equation.id(), feedback);

        if feedback.is_correct() {
            self.stats.solved += 1;
            self.stats.streak += 1;
            self.stats.best_streak = self.stats.best_streak.max(self.stats.streak);
            if let Some(challenge) = self.challenge.as_mut() {
                challenge.correct_answers += 1;
            }
            self.advance();
        } else {
            self.stats.streak = 0;
        }
        Ok(feedback)
    }

    /// Move on without answering: a fresh question in practice mode, the
    /// next question (uncounted) in challenge mode.
    pub fn skip(&mut self) {
        self.advance();
    }

    /// Change category; a new question is generated.
    pub fn set_category(&mut self, category: EquationType) {
        self.category = category;
        if self.mode == SessionMode::Practice {
            self.new_practice_question();
        }
    }

    /// Change difficulty; a new question is generated.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        if self.mode == SessionMode::Practice {
            self.new_practice_question();
        }
    }

    /// Switch to challenge mode with a freshly generated set. Also used to
    /// restart a finished challenge.
    pub fn start_challenge(&mut self) {
        let questions = challenge_set(&mut self.rng);
        info!("starting challenge with {} questions", questions.len());
        self.current = self.attempt_for(questions[0].clone());
        self.challenge = Some(ChallengeProgress {
            questions,
            index: 0,
            correct_answers: 0,
            completed: false,
        });
        self.mode = SessionMode::Challenge;
    }

    /// Back to open-ended practice in the current category and tier.
    pub fn start_practice(&mut self) {
        self.mode = SessionMode::Practice;
        self.challenge = None;
        self.new_practice_question();
    }

    fn advance(&mut self) {
        match self.challenge.as_mut() {
            None => self.new_practice_question(),
            Some(challenge) => {
                if challenge.index + 1 < challenge.questions.len() {
                    challenge.index += 1;
                    let next = challenge.questions[challenge.index].clone();
                    self.current = self.attempt_for(next);
                } else {
                    challenge.completed = true;
                    info!(
                        "challenge complete: {}/{}",
                        challenge.correct_answers,
                        challenge.questions.len()
                    );
                }
            }
        }
    }

    fn new_practice_question(&mut self) {
        let equation = generate_with(&mut self.rng, self.category, self.difficulty);
        self.current = self.attempt_for(equation);
    }

    fn attempt_for(&self, equation: Equation) -> QuestionAttempt {
        QuestionAttempt::new(equation).with_hint_threshold(self.hint_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::Solution;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(category: EquationType, difficulty: Difficulty) -> PracticeSession<StdRng> {
        PracticeSession::with_rng(StdRng::seed_from_u64(17), category, difficulty)
    }

    fn correct_answer(equation: &Equation) -> String {
        match equation.solution() {
            Solution::Coordinates { x, y } => format!("({}, {})", x, y),
            other => other.values()[0].to_string(),
        }
    }

    #[test]
    fn test_blank_answer_rejected() {
        let mut session = seeded(EquationType::Radical, Difficulty::Basic);
        assert_eq!(session.submit("   "), Err(AlgebraError::EmptyAnswer));
        assert_eq!(session.stats().attempts, 0);
        assert_eq!(session.current().attempts(), 0);
    }

    #[test]
    fn test_streak_resets_on_wrong_answer() {
        let mut session = seeded(EquationType::Polynomial, Difficulty::Basic);
        for _ in 0..3 {
            let answer = correct_answer(session.current().equation());
            assert_eq!(session.submit(&answer).unwrap(), Feedback::Correct);
        }
        assert_eq!(session.stats().streak, 3);

        assert_ne!(session.submit("1000").unwrap(), Feedback::Correct);
        let stats = session.stats();
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.best_streak, 3);
        assert_eq!(stats.solved, 3);
        assert_eq!(stats.attempts, 4);
    }

    #[test]
    fn test_practice_generates_new_question_after_correct() {
        let mut session = seeded(EquationType::Quadratic, Difficulty::Basic);
        let first_id = session.current().equation().id().to_string();
        session.submit("-2").unwrap();
        assert_ne!(session.current().equation().id(), first_id);
        assert_eq!(session.current().attempts(), 0);
    }

    #[test]
    fn test_hint_after_three_misses() {
        let mut session = seeded(EquationType::Radical, Difficulty::Basic);
        assert_eq!(session.submit("1").unwrap(), Feedback::Incorrect);
        assert_eq!(session.submit("2").unwrap(), Feedback::Incorrect);
        assert_eq!(session.submit("3").unwrap(), Feedback::Hint);
        let hint = session.current().current_hint().unwrap();
        assert_eq!(hint.step_number, 1);
    }

    #[test]
    fn test_hint_threshold_zero_disables_hints() {
        let mut session = seeded(EquationType::Radical, Difficulty::Basic).with_hint_threshold(0);
        for _ in 0..5 {
            assert_eq!(session.submit("0").unwrap(), Feedback::Incorrect);
        }
    }

    #[test]
    fn test_show_hint_cycles() {
        let mut session = seeded(EquationType::Radical, Difficulty::Basic);
        let total = session.current().equation().steps().len();
        let attempt = session.current_mut();
        assert_eq!(attempt.show_hint().step_number, 1);
        assert_eq!(attempt.show_hint().step_number, 2);
        for _ in 2..total {
            attempt.show_hint();
        }
        assert_eq!(attempt.show_hint().step_number, 1);
    }

    #[test]
    fn test_challenge_runs_to_completion() {
        let mut session = seeded(EquationType::Polynomial, Difficulty::Basic);
        session.start_challenge();
        assert_eq!(session.mode(), SessionMode::Challenge);
        assert_eq!(session.challenge_score(), Some((0, 7)));

        // Miss the first one once
        session.submit("12345").unwrap();
        for _ in 0..CHALLENGE_LAYOUT.len() {
            let answer = correct_answer(session.current().equation());
            assert_eq!(session.submit(&answer).unwrap(), Feedback::Correct);
        }

        let challenge = session.challenge().unwrap();
        assert!(challenge.is_completed());
        assert_eq!(challenge.correct_answers(), 7);
        assert!(session.submit("1").is_err());

        session.start_challenge();
        assert_eq!(session.challenge_score(), Some((0, 7)));
    }

    #[test]
    fn test_challenge_layout() {
        let set = challenge_set(&mut StdRng::seed_from_u64(4));
        let layout: Vec<(EquationType, Difficulty)> =
            set.iter().map(|e| (e.equation_type(), e.difficulty())).collect();
        assert_eq!(layout, CHALLENGE_LAYOUT.to_vec());
    }

    #[test]
    fn test_set_category_regenerates() {
        let mut session = seeded(EquationType::Polynomial, Difficulty::Basic);
        session.set_category(EquationType::WordProblem);
        assert_eq!(session.current().equation().equation_type(), EquationType::WordProblem);
        session.set_difficulty(Difficulty::Advanced);
        assert_eq!(session.current().equation().difficulty(), Difficulty::Advanced);
    }

    #[test]
    fn test_walkthrough() {
        let eq = crate::equations::generate(EquationType::Radical, Difficulty::Basic);
        let mut walk = StepWalkthrough::new(&eq);
        assert_eq!(walk.progress(), (1, 5));
        assert!(!walk.prev());
        assert!(walk.toggle_explanation());
        assert!(walk.next());
        assert!(!walk.explanation_visible());
        assert_eq!(walk.revealed().len(), 2);
        while walk.next() {}
        assert!(walk.is_complete());
        assert_eq!(walk.current_step().instruction, "Verify");
        walk.reset();
        assert_eq!(walk.progress(), (1, 5));
    }
}
