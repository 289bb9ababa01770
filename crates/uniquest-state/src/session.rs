//! Re-entrancy-guarded interactive sessions.
//!
//! Execution is event-driven with no preemption, so the only race worth
//! guarding against is rapid repeated input landing on the same item.
//! Each session arms an "already answered" flag before any scoring and
//! only re-arms on advance; a second click on the same question is
//! silently ignored, never double-credited.

use uniquest_logic::catalog::{QuizQuestion, SimulationChoice, SimulationStep};
use uniquest_logic::profile::StudentProfile;

/// A running pass over a questionnaire (main quiz, self-discovery items).
///
/// Accumulates option deltas into a profile. The accumulated profile is
/// read after [`QuizSession::is_complete`]; partial reads are fine too.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: &'static [QuizQuestion],
    current: usize,
    profile: StudentProfile,
    answered: bool,
}

impl QuizSession {
    pub fn new(questions: &'static [QuizQuestion]) -> Self {
        Self {
            questions,
            current: 0,
            profile: StudentProfile::default(),
            answered: false,
        }
    }

    /// The question awaiting an answer, or `None` when the session is done.
    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        self.questions.get(self.current)
    }

    /// Zero-based index of the current question.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Answer the current question.
    ///
    /// Returns the applied delta, or `None` when the pick was ignored:
    /// question already answered, session complete, or the option index
    /// does not exist (benign miss).
    pub fn select_option(&mut self, option_index: usize) -> Option<StudentProfile> {
        if self.answered {
            return None;
        }
        let question = self.current_question()?;
        let option = question.options.get(option_index)?;

        // Arm the guard before scoring — further clicks on this question
        // are dead.
        self.answered = true;
        let delta = option.delta();
        self.profile = self.profile.apply_scores(&delta);
        Some(delta)
    }

    /// Move to the next question. Ignored until the current one is
    /// answered.
    pub fn advance(&mut self) {
        if !self.answered {
            return;
        }
        self.current += 1;
        self.answered = false;
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// The profile accumulated so far.
    pub fn profile(&self) -> StudentProfile {
        self.profile
    }
}

/// A running pass over a city scenario, averaging harmony at the end.
#[derive(Debug, Clone)]
pub struct SimulationSession {
    steps: &'static [SimulationStep],
    current: usize,
    total_harmony: f32,
    choices_made: u32,
    chosen: bool,
}

impl SimulationSession {
    pub fn new(steps: &'static [SimulationStep]) -> Self {
        Self {
            steps,
            current: 0,
            total_harmony: 0.0,
            choices_made: 0,
            chosen: false,
        }
    }

    /// The step awaiting a choice, or `None` when the scenario is over.
    pub fn current_step(&self) -> Option<&'static SimulationStep> {
        self.steps.get(self.current)
    }

    /// Pick a choice on the current step.
    ///
    /// Returns the choice (for its feedback text), or `None` when the
    /// pick was ignored — same guard rules as the quiz session.
    pub fn select_choice(&mut self, choice_index: usize) -> Option<&'static SimulationChoice> {
        if self.chosen {
            return None;
        }
        let step = self.current_step()?;
        let choice = step.choices.get(choice_index)?;

        self.chosen = true;
        self.total_harmony += choice.harmony;
        self.choices_made += 1;
        Some(choice)
    }

    /// Move to the next step. Ignored until a choice was made.
    pub fn advance(&mut self) {
        if !self.chosen {
            return;
        }
        self.current += 1;
        self.chosen = false;
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.steps.len()
    }

    /// Average harmony over the choices made, in [0, 1]. Zero when no
    /// choice was made at all.
    pub fn harmony(&self) -> f32 {
        if self.choices_made == 0 {
            return 0.0;
        }
        self.total_harmony / self.choices_made as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uniquest_logic::catalog::{find_simulation, QUIZ_QUESTIONS, SELF_DISCOVERY_QUIZZES};

    #[test]
    fn repeated_select_on_same_question_is_ignored() {
        let mut session = QuizSession::new(QUIZ_QUESTIONS);
        let first = session.select_option(0);
        assert!(first.is_some());
        // Rapid second click: no double credit.
        assert!(session.select_option(1).is_none());
        assert_eq!(session.profile(), first.unwrap());
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut session = QuizSession::new(QUIZ_QUESTIONS);
        session.advance();
        assert_eq!(session.current_index(), 0);
        session.select_option(0);
        session.advance();
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn full_quiz_accumulates_every_answer() {
        let mut session = QuizSession::new(SELF_DISCOVERY_QUIZZES);
        let mut expected = StudentProfile::default();
        while !session.is_complete() {
            let delta = session.select_option(0).unwrap();
            expected = expected.apply_scores(&delta);
            session.advance();
        }
        assert!(session.is_complete());
        assert!(session.current_question().is_none());
        assert_eq!(session.profile(), expected);
        assert!(expected.total() > 0);
    }

    #[test]
    fn out_of_range_option_is_a_benign_miss() {
        let mut session = QuizSession::new(QUIZ_QUESTIONS);
        assert!(session.select_option(99).is_none());
        // The guard did not arm — a valid pick still works.
        assert!(session.select_option(0).is_some());
    }

    #[test]
    fn simulation_averages_harmony() {
        let sim = find_simulation(1).unwrap();
        let mut session = SimulationSession::new(sim.steps);

        let first = session.select_choice(0).unwrap();
        assert!(!first.feedback.is_empty());
        assert!(session.select_choice(2).is_none()); // guarded
        session.advance();
        session.select_choice(2).unwrap();
        session.advance();

        assert!(session.is_complete());
        let expected = (sim.steps[0].choices[0].harmony + sim.steps[1].choices[2].harmony) / 2.0;
        assert!((session.harmony() - expected).abs() < f32::EPSILON);
        assert!((0.0..=1.0).contains(&session.harmony()));
    }

    #[test]
    fn empty_simulation_yields_zero_harmony() {
        let session = SimulationSession::new(&[]);
        assert!(session.is_complete());
        assert!(session.harmony().abs() < f32::EPSILON);
    }
}
