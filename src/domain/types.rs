/// Core types and enums used throughout the domain layer
///
/// This module defines the record identifier and the label enums (flow,
/// severity, symptom and mood kinds) shared by cycles, symptoms and moods.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Last id handed out by this process, used to keep fresh ids monotonic
static LAST_ISSUED_ID: AtomicI64 = AtomicI64::new(0);

/// Unique identifier for a cycle, symptom or mood record
///
/// Fresh ids are millisecond timestamps, but ids loaded from storage are
/// treated as opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a new id that is strictly greater than any id issued
    /// earlier in this process
    pub fn new() -> Self {
        let now = Utc::now().timestamp_millis();
        let mut last = LAST_ISSUED_ID.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match LAST_ISSUED_ID.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed) {
                Ok(_) => return Self(next.to_string()),
                Err(current) => last = current,
            }
        }
    }

    /// Borrow the raw id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Subjective intensity of a period's flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    Light,
    #[default]
    Medium,
    Heavy,
}

impl Flow {
    /// Parse a flow label, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Flow::Light),
            "medium" => Some(Flow::Medium),
            "heavy" => Some(Flow::Heavy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Flow::Light => "light",
            Flow::Medium => "medium",
            Flow::Heavy => "heavy",
        }
    }
}

/// Subjective intensity of a symptom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    #[default]
    Moderate,
    Severe,
}

impl Severity {
    /// Parse a severity label, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mild" => Some(Severity::Mild),
            "moderate" => Some(Severity::Moderate),
            "severe" => Some(Severity::Severe),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

/// What kind of symptom was logged
///
/// The fixed catalogue covers the common cases; anything else is kept
/// verbatim as a custom label. Stored as a plain string: catalogue entries
/// as their exact key, custom labels as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SymptomKind {
    Cramps,
    Headache,
    Nausea,
    Bloating,
    BreastTenderness,
    Fatigue,
    BackPain,
    Acne,
    Insomnia,
    Other,
    /// Free-text symptom outside the catalogue
    Custom(String),
}

impl SymptomKind {
    /// Every catalogue entry, in display order
    pub const CATALOGUE: [SymptomKind; 10] = [
        SymptomKind::Cramps,
        SymptomKind::Headache,
        SymptomKind::Nausea,
        SymptomKind::Bloating,
        SymptomKind::BreastTenderness,
        SymptomKind::Fatigue,
        SymptomKind::BackPain,
        SymptomKind::Acne,
        SymptomKind::Insomnia,
        SymptomKind::Other,
    ];

    /// Stable key used for storage and tool arguments
    pub fn key(&self) -> &str {
        match self {
            SymptomKind::Cramps => "cramps",
            SymptomKind::Headache => "headache",
            SymptomKind::Nausea => "nausea",
            SymptomKind::Bloating => "bloating",
            SymptomKind::BreastTenderness => "breast_tenderness",
            SymptomKind::Fatigue => "fatigue",
            SymptomKind::BackPain => "back_pain",
            SymptomKind::Acne => "acne",
            SymptomKind::Insomnia => "insomnia",
            SymptomKind::Other => "other",
            SymptomKind::Custom(label) => label,
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &str {
        match self {
            SymptomKind::Cramps => "Cramps",
            SymptomKind::Headache => "Headache",
            SymptomKind::Nausea => "Nausea",
            SymptomKind::Bloating => "Bloating",
            SymptomKind::BreastTenderness => "Breast tenderness",
            SymptomKind::Fatigue => "Fatigue",
            SymptomKind::BackPain => "Back pain",
            SymptomKind::Acne => "Acne",
            SymptomKind::Insomnia => "Insomnia",
            SymptomKind::Other => "Other",
            SymptomKind::Custom(label) => label,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, SymptomKind::Custom(_))
    }

    /// Catalogue entry whose key is exactly `key`
    fn from_key(key: &str) -> Option<Self> {
        Self::CATALOGUE.into_iter().find(|kind| kind.key() == key)
    }

    /// Interpret a user-entered label
    ///
    /// Case, spaces and hyphens are ignored when matching the catalogue, so
    /// "Back pain" and "back-pain" both mean [`SymptomKind::BackPain`].
    pub fn parse_label(label: &str) -> Self {
        let label = label.trim();
        let normalized = label.to_lowercase().replace([' ', '-'], "_");
        Self::from_key(&normalized).unwrap_or_else(|| SymptomKind::Custom(label.to_string()))
    }

    /// Fold a custom label that spells an exact catalogue key into that entry
    ///
    /// Records pass through here on creation so every stored kind reads back
    /// as the same variant.
    pub fn canonical(self) -> Self {
        match self {
            SymptomKind::Custom(label) => {
                Self::from_key(&label).unwrap_or(SymptomKind::Custom(label))
            }
            known => known,
        }
    }
}

impl From<String> for SymptomKind {
    fn from(s: String) -> Self {
        Self::from_key(&s).unwrap_or(SymptomKind::Custom(s))
    }
}

impl From<SymptomKind> for String {
    fn from(kind: SymptomKind) -> Self {
        match kind {
            SymptomKind::Custom(label) => label,
            known => known.key().to_string(),
        }
    }
}

/// Mood label attached to a mood entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MoodKind {
    Happy,
    Calm,
    Neutral,
    Sad,
    Irritated,
    /// Label outside the catalogue
    Custom(String),
}

impl MoodKind {
    /// Every catalogue entry, in display order
    pub const CATALOGUE: [MoodKind; 5] = [
        MoodKind::Happy,
        MoodKind::Calm,
        MoodKind::Neutral,
        MoodKind::Sad,
        MoodKind::Irritated,
    ];

    pub fn key(&self) -> &str {
        match self {
            MoodKind::Happy => "happy",
            MoodKind::Calm => "calm",
            MoodKind::Neutral => "neutral",
            MoodKind::Sad => "sad",
            MoodKind::Irritated => "irritated",
            MoodKind::Custom(label) => label,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            MoodKind::Happy => "Happy",
            MoodKind::Calm => "Calm",
            MoodKind::Neutral => "Neutral",
            MoodKind::Sad => "Sad",
            MoodKind::Irritated => "Irritated",
            MoodKind::Custom(label) => label,
        }
    }
}

impl MoodKind {
    fn from_key(key: &str) -> Option<Self> {
        Self::CATALOGUE.into_iter().find(|kind| kind.key() == key)
    }

    /// Interpret a user-entered label, ignoring case
    pub fn parse_label(label: &str) -> Self {
        let label = label.trim();
        Self::from_key(&label.to_lowercase()).unwrap_or_else(|| MoodKind::Custom(label.to_string()))
    }

    /// Fold a custom label that spells an exact catalogue key into that entry
    pub fn canonical(self) -> Self {
        match self {
            MoodKind::Custom(label) => Self::from_key(&label).unwrap_or(MoodKind::Custom(label)),
            known => known,
        }
    }
}

impl From<String> for MoodKind {
    fn from(s: String) -> Self {
        Self::from_key(&s).unwrap_or(MoodKind::Custom(s))
    }
}

impl From<MoodKind> for String {
    fn from(kind: MoodKind) -> Self {
        match kind {
            MoodKind::Custom(label) => label,
            known => known.key().to_string(),
        }
    }
}
