use crate::libshindan::hantei::{self, Band, Verdict};
use crate::libshindan::shitsumon::{Question, QuestionBank};
use crate::libshindan::Error;
use log::{debug, warn};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Answering,
    Complete,
}

/// Walks a [`QuestionBank`] one question at a time.
///
/// `Answering` moves to `Complete` once the last question is answered. A
/// complete session refuses further answers with [`Error::InvalidState`] until
/// [`QuizSession::reset`] is called; the refused call changes nothing.
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: QuestionBank,
    current_index: usize,
    answers: HashMap<u32, bool>,
    phase: Phase,
}

impl QuizSession {
    pub fn new(bank: QuestionBank) -> Self {
        let answers = HashMap::with_capacity(bank.count());
        Self {
            bank,
            current_index: 0,
            answers,
            phase: Phase::Answering,
        }
    }

    pub fn submit_answer(&mut self, value: bool) -> Result<Phase, Error> {
        if self.phase == Phase::Complete {
            warn!("[Session] Answer submitted after completion; ignoring.");
            return Err(Error::InvalidState);
        }

        let id = self.bank.at(self.current_index)?.id;
        self.answers.insert(id, value);
        debug!(
            "[Session] Question {} (index {}) answered {}.",
            id, self.current_index, value
        );

        if self.current_index + 1 == self.bank.count() {
            self.phase = Phase::Complete;
            debug!("[Session] All {} questions answered.", self.bank.count());
        } else {
            self.current_index += 1;
        }
        Ok(self.phase)
    }

    pub fn reset(&mut self) {
        self.answers.clear();
        self.current_index = 0;
        self.phase = Phase::Answering;
        debug!("[Session] Reset.");
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question waiting for an answer, or `None` once complete.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Answering => self.bank.at(self.current_index).ok(),
            Phase::Complete => None,
        }
    }

    /// 1-based position for "Question N of M" labels.
    pub fn question_number(&self) -> usize {
        (self.answered_count() + 1).min(self.bank.count())
    }

    pub fn answer_for(&self, id: u32) -> Option<bool> {
        self.answers.get(&id).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn progress_fraction(&self) -> f32 {
        self.answered_count() as f32 / self.bank.count() as f32
    }

    pub fn score(&self) -> u8 {
        hantei::score(&self.bank, &self.answers)
    }

    pub fn classify(&self) -> Band {
        hantei::classify(self.score())
    }

    pub fn verdict(&self) -> Option<Verdict> {
        match self.phase {
            Phase::Complete => Some(Verdict::from_score(self.score())),
            Phase::Answering => None,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(QuestionBank::builtin())
    }
}
