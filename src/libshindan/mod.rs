pub mod hantei;
pub mod session;
pub mod shitsumon;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("question index {index} is out of range (bank has {count} questions)")]
    OutOfRange { index: usize, count: usize },
    #[error("the session is already complete; reset it before answering again")]
    InvalidState,
    #[error("a question bank needs at least one question")]
    EmptyBank,
    #[error("question id {0} appears more than once")]
    DuplicateId(u32),
    #[error("question id {0} has a weight of zero")]
    ZeroWeight(u32),
}
