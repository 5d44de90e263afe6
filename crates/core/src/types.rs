use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Weight applied to language codes missing from the language table.
pub const NEUTRAL_LANGUAGE_WEIGHT: f64 = 1.0;

/// Production and audience inputs for a single revenue forecast.
/// Constructed fresh per request and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MovieInputRecord {
    /// Production budget in currency units.
    pub budget: f64,
    pub popularity: f64,
    /// Runtime in minutes.
    pub runtime: f64,
    pub vote_average: f64,
    pub vote_count: u64,
    /// ISO-639-1 style code, e.g. `en`.
    pub original_language: String,
    pub num_genres: u32,
    pub num_production_companies: u32,
}

/// Original languages with a calibrated revenue weight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Zh,
    Es,
    Fr,
    Hi,
}

struct LanguageEntry {
    language: Language,
    code: &'static str,
    name: &'static str,
    weight: f64,
}

static LANGUAGE_TABLE: [LanguageEntry; 5] = [
    LanguageEntry { language: Language::En, code: "en", name: "English", weight: 1.2 },
    LanguageEntry { language: Language::Zh, code: "zh", name: "Chinese", weight: 1.1 },
    LanguageEntry { language: Language::Es, code: "es", name: "Spanish", weight: 1.0 },
    LanguageEntry { language: Language::Fr, code: "fr", name: "French", weight: 0.9 },
    LanguageEntry { language: Language::Hi, code: "hi", name: "Hindi", weight: 0.8 },
];

impl Language {
    /// All known languages, in the order the input form lists them.
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Zh,
        Language::Es,
        Language::Fr,
        Language::Hi,
    ];

    /// Case-sensitive lookup; unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        LANGUAGE_TABLE
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.language)
    }

    fn entry(self) -> &'static LanguageEntry {
        // The table holds every variant exactly once.
        &LANGUAGE_TABLE[self as usize]
    }

    pub fn code(self) -> &'static str {
        self.entry().code
    }

    pub fn display_name(self) -> &'static str {
        self.entry().name
    }

    pub fn weight(self) -> f64 {
        self.entry().weight
    }
}

/// Revenue multiplier for a language code, neutral for unknown codes.
pub fn language_weight(code: &str) -> f64 {
    Language::from_code(code)
        .map(Language::weight)
        .unwrap_or(NEUTRAL_LANGUAGE_WEIGHT)
}

/// One selectable language as exposed to the input form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LanguageOption {
    pub code: String,
    pub name: String,
    pub weight: f64,
}

impl From<Language> for LanguageOption {
    fn from(language: Language) -> Self {
        Self {
            code: language.code().to_string(),
            name: language.display_name().to_string(),
            weight: language.weight(),
        }
    }
}

/// Named inputs that appear in the explanatory breakdowns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Budget,
    Popularity,
    Rating,
    VoteCount,
    Runtime,
    Genres,
    Companies,
    Language,
}

impl Feature {
    /// Chart label.
    pub fn label(self) -> &'static str {
        match self {
            Feature::Budget => "Budget",
            Feature::Popularity => "Popularity",
            Feature::Rating => "Rating",
            Feature::VoteCount => "Vote Count",
            Feature::Runtime => "Runtime",
            Feature::Genres => "Genres",
            Feature::Companies => "Companies",
            Feature::Language => "Language",
        }
    }
}

/// Heuristic dollar impact of one feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeatureContribution {
    pub feature: Feature,
    pub amount: f64,
}

/// Per-feature revenue-impact breakdown in chart order.
///
/// Amounts are independent partial effects and do not sum to
/// `revenue - budget`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Attribution {
    pub contributions: Vec<FeatureContribution>,
}

impl Attribution {
    pub fn get(&self, feature: Feature) -> Option<f64> {
        self.contributions
            .iter()
            .find(|c| c.feature == feature)
            .map(|c| c.amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureContribution> {
        self.contributions.iter()
    }
}

/// One multiplicative adjustment applied on top of the budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FactorValue {
    pub feature: Feature,
    pub factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Profitable,
    Loss,
}

impl Verdict {
    pub fn from_roi(roi_percent: f64) -> Self {
        if roi_percent > 0.0 {
            Verdict::Profitable
        } else {
            Verdict::Loss
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Profitable => "Profitable",
            Verdict::Loss => "Loss",
        }
    }
}

/// Outcome of one forecast. Derived per call, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictionResult {
    pub revenue: f64,
    pub roi_percent: f64,
    pub verdict: Verdict,
    pub attribution: Attribution,
    /// Multiplicative factors; `budget * product(factors)` reproduces `revenue`.
    pub factors: Vec<FactorValue>,
}
