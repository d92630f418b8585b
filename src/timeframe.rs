//! Reporting windows offered by the form.
//!
//! Each window has a human label (what the sidebar shows) and the token the
//! trends provider expects in its `time` field. The mapping is a fixed table;
//! labels are never sent to the provider.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A provider reporting window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "today 1-m")]
    PastMonth,
    #[serde(rename = "today 3-m")]
    PastThreeMonths,
    #[serde(rename = "today 12-m")]
    PastYear,
    #[serde(rename = "today 5-y")]
    PastFiveYears,
    #[serde(rename = "all")]
    AllTime,
}

/// Label → token lookup, in the order the selector lists them
const TABLE: [(Timeframe, &str, &str); 5] = [
    (Timeframe::PastMonth, "today 1-m: Past month", "today 1-m"),
    (Timeframe::PastThreeMonths, "today 3-m: Past three months", "today 3-m"),
    (Timeframe::PastYear, "today 12-m: Past twelve months (one year)", "today 12-m"),
    (Timeframe::PastFiveYears, "today 5-y: Past five years", "today 5-y"),
    (Timeframe::AllTime, "all: All available trend data", "all"),
];

impl Timeframe {
    /// All windows in selector order
    pub const ALL: [Timeframe; 5] = [
        Timeframe::PastMonth,
        Timeframe::PastThreeMonths,
        Timeframe::PastYear,
        Timeframe::PastFiveYears,
        Timeframe::AllTime,
    ];

    /// Human-readable label shown in the selector
    pub fn label(self) -> &'static str {
        TABLE[self.index()].1
    }

    /// Canonical token sent to the trends provider
    pub fn token(self) -> &'static str {
        TABLE[self.index()].2
    }

    /// Position in the selector
    pub fn index(self) -> usize {
        match self {
            Timeframe::PastMonth => 0,
            Timeframe::PastThreeMonths => 1,
            Timeframe::PastYear => 2,
            Timeframe::PastFiveYears => 3,
            Timeframe::AllTime => 4,
        }
    }

    /// Window at a selector position, if in range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Resolve a selector label to its window
    pub fn from_label(label: &str) -> Option<Self> {
        TABLE
            .iter()
            .find(|(_, l, _)| *l == label)
            .map(|(tf, _, _)| *tf)
    }

    /// Resolve a provider token to its window
    pub fn from_token(token: &str) -> Option<Self> {
        TABLE
            .iter()
            .find(|(_, _, t)| *t == token)
            .map(|(tf, _, _)| *tf)
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Error for an unknown timeframe token on the command line
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown timeframe '{0}' (expected one of: today 1-m, today 3-m, today 12-m, today 5-y, all)")]
pub struct UnknownTimeframe(pub String);

impl FromStr for Timeframe {
    type Err = UnknownTimeframe;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::from_token(s)
            .or_else(|| Self::from_label(s))
            .ok_or_else(|| UnknownTimeframe(s.to_string()))
    }
}
