use crate::libshindan::shitsumon::QuestionBank;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Low,
    Moderate,
    High,
    Severe,
}

/// Display content for a band. None of it affects scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandInfo {
    pub band: Band,
    /// Inclusive lower bound of the band.
    pub min_score: u8,
    pub emoji: &'static str,
    pub message: &'static str,
    pub advice: &'static str,
    pub accent: (u8, u8, u8),
    pub alarming: bool,
}

/// Highest band first; `classify` takes the first row whose bound is met.
pub const BANDS: [BandInfo; 4] = [
    BandInfo {
        band: Band::Severe,
        min_score: 70,
        emoji: "🚩🚩🚩",
        message: "💔 Major Red Flags... Trust Your Gut",
        advice: "🚨 Multiple concerning signs detected. Trust your intuition and consider having an honest conversation. You deserve clarity.",
        accent: (0xff, 0x33, 0x66),
        alarming: true,
    },
    BandInfo {
        band: Band::High,
        min_score: 50,
        emoji: "😭😭😭",
        message: "😭 Suspicious Activity Detected",
        advice: "⚠️ Several flags raised. Keep your eyes open and don't ignore your gut feeling. Pay attention to his behavior.",
        accent: (0xff, 0x6b, 0x9d),
        alarming: true,
    },
    BandInfo {
        band: Band::Moderate,
        min_score: 30,
        emoji: "😔😔😔",
        message: "😔 Some Concerns... Watch Closely",
        advice: "🤔 Some signs to be cautious about. It might be worth a conversation to clear things up and ease your mind.",
        accent: (0xff, 0xaa, 0x00),
        alarming: false,
    },
    BandInfo {
        band: Band::Low,
        min_score: 0,
        emoji: "💚💚💚",
        message: "💚 Probably Okay... (For Now)",
        advice: "💚 Good news! Limited red flags detected. He's probably not cheating... but trust your instincts above all else.",
        accent: (0x00, 0xdd, 0x88),
        alarming: false,
    },
];

impl Band {
    pub fn key(&self) -> &'static str {
        match self {
            Band::Low => "low",
            Band::Moderate => "moderate",
            Band::High => "high",
            Band::Severe => "severe",
        }
    }

    pub fn info(&self) -> &'static BandInfo {
        // every band has exactly one row
        BANDS
            .iter()
            .find(|info| info.band == *self)
            .unwrap_or(&BANDS[BANDS.len() - 1])
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Weighted percentage of "yes" answers, rounded half up.
///
/// Questions without an entry in `answers` count as "no", so this can be
/// called on a half-finished session. Ids that are not in the bank are
/// ignored.
pub fn score(bank: &QuestionBank, answers: &HashMap<u32, bool>) -> u8 {
    let total = bank.total_weight();
    let yes: u64 = bank
        .iter()
        .filter(|q| answers.get(&q.id).copied().unwrap_or(false))
        .map(|q| u64::from(q.weight))
        .sum();

    // round(100 * yes / total) == floor((200 * yes + total) / (2 * total))
    ((200 * yes + total) / (2 * total)) as u8
}

pub fn classify(score: u8) -> Band {
    BANDS
        .iter()
        .find(|info| score >= info.min_score)
        .map(|info| info.band)
        .unwrap_or(Band::Low)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub score: u8,
    pub band: Band,
}

impl Verdict {
    pub fn from_score(score: u8) -> Self {
        Self {
            score,
            band: classify(score),
        }
    }

    pub fn info(&self) -> &'static BandInfo {
        self.band.info()
    }
}
