use crate::libshindan::Error;
use log::debug;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub weight: u32,
}

macro_rules! question {
    ($id:expr, $weight:expr, $text:expr) => {
        Question {
            id: $id,
            text: $text,
            weight: $weight,
        }
    };
}

/// The compiled-in questionnaire, in presentation order.
pub const QUESTIONS: &[Question] = &[
    question!(1, 2, "Does he suddenly care more about his appearance?"),
    question!(2, 3, "Is he always on his phone, being secretive about it?"),
    question!(3, 2, "Has he changed his password recently?"),
    question!(4, 3, "Does he come home late with vague excuses?"),
    question!(5, 2, "Is he less affectionate with you?"),
    question!(6, 3, "Does he get defensive when you ask where he's been?"),
    question!(7, 2, "Has his cologne/perfume scent changed?"),
    question!(8, 2, "Is he working \"late\" more than usual?"),
    question!(9, 2, "Does he avoid making eye contact?"),
    question!(10, 2, "Has his spending suddenly increased?"),
    question!(11, 2, "Is he emotionally distant?"),
    question!(12, 3, "Does he delete his text messages frequently?"),
    question!(13, 2, "Has he mentioned an \"old friend\" he reconnected with?"),
    question!(14, 2, "Does he show less interest in your day/life?"),
    question!(15, 3, "Do you have a gut feeling something's wrong?"),
];

/// An ordered, read-only list of weighted questions.
///
/// Construction checks that the list is non-empty, that every id is unique and
/// that every weight is positive, so the rest of the crate can rely on
/// `total_weight() > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
    total_weight: u64,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, Error> {
        if questions.is_empty() {
            return Err(Error::EmptyBank);
        }
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(Error::DuplicateId(question.id));
            }
            if question.weight == 0 {
                return Err(Error::ZeroWeight(question.id));
            }
        }

        let total_weight = questions.iter().map(|q| u64::from(q.weight)).sum();
        debug!(
            "[Setup] Question bank ready: {} questions, total weight {}.",
            questions.len(),
            total_weight
        );
        Ok(Self {
            questions,
            total_weight,
        })
    }

    pub fn builtin() -> Self {
        Self {
            questions: QUESTIONS.to_vec(),
            total_weight: QUESTIONS.iter().map(|q| u64::from(q.weight)).sum(),
        }
    }

    pub fn count(&self) -> usize {
        self.questions.len()
    }

    pub fn at(&self, index: usize) -> Result<&Question, Error> {
        self.questions.get(index).ok_or(Error::OutOfRange {
            index,
            count: self.count(),
        })
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
