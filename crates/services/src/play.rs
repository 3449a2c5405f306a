//! Randomized, no-repeat quiz rounds.
//!
//! A [`PlaySession`] owns the selection pool and the score for one `play`
//! invocation. The caller drives it with [`PlaySession::next_question`] and
//! [`PlaySession::resolve`] until the phase becomes `Finished`, then consumes
//! it with [`PlaySession::finish`].

use rand::Rng;

use quiz_core::model::QuizId;
use storage::repository::{QuizRepository, StorageError};

/// Why a round stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// Every quiz in the snapshot was answered correctly (or there were none).
    Exhausted,
    /// The last answer was wrong.
    Missed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Active,
    Finished(RoundEnd),
}

/// Result of resolving one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct { score: u32 },
    Incorrect,
}

/// What is left of a round once it is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub score: u32,
    pub asked: u32,
    pub end: RoundEnd,
}

#[derive(Debug)]
pub struct PlaySession {
    score: u32,
    asked: u32,
    pool: Vec<QuizId>,
    phase: SessionPhase,
}

impl PlaySession {
    /// Start a round over the given ids, in store order.
    #[must_use]
    pub fn new(pool: Vec<QuizId>) -> Self {
        Self {
            score: 0,
            asked: 0,
            pool,
            phase: SessionPhase::Active,
        }
    }

    /// Start a round over a fresh snapshot of every quiz in the store.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the snapshot cannot be read.
    pub async fn start(quizzes: &dyn QuizRepository) -> Result<Self, StorageError> {
        let pool: Vec<QuizId> = quizzes.find_all().await?.iter().map(|q| q.id()).collect();
        tracing::debug!(size = pool.len(), "play round started");
        Ok(Self::new(pool))
    }

    /// Draw the next quiz to ask, removing it from the pool.
    ///
    /// Returns `None` once the round is finished; an empty pool finishes it
    /// as `Exhausted`.
    pub fn next_question<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<QuizId> {
        if !self.is_active() {
            return None;
        }
        if self.pool.is_empty() {
            self.phase = SessionPhase::Finished(RoundEnd::Exhausted);
            return None;
        }

        let index = rng.random_range(0..self.pool.len());
        let id = self.pool.remove(index);
        self.asked += 1;
        Some(id)
    }

    /// Judge `given` against the drawn quiz's `expected` answer.
    ///
    /// A right answer bumps the score and keeps the round going; a wrong one
    /// finishes it.
    pub fn resolve(&mut self, given: &str, expected: &str) -> Verdict {
        if !self.is_active() {
            return Verdict::Incorrect;
        }
        if quiz_core::matches(given, expected) {
            self.score += 1;
            Verdict::Correct { score: self.score }
        } else {
            self.phase = SessionPhase::Finished(RoundEnd::Missed);
            Verdict::Incorrect
        }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Quizzes not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    /// Close the round. A round abandoned while still active counts as missed.
    #[must_use]
    pub fn finish(self) -> RoundSummary {
        let end = match self.phase {
            SessionPhase::Finished(end) => end,
            SessionPhase::Active => RoundEnd::Missed,
        };
        RoundSummary {
            score: self.score,
            asked: self.asked,
            end,
        }
    }
}
