use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DreamType {
    #[serde(rename = "Fear Dream")]
    Fear,
    #[serde(rename = "Wish Dream")]
    Wish,
    #[default]
    #[serde(rename = "Processing Dream")]
    Processing,
    #[serde(rename = "Nightmare")]
    Nightmare,
    #[serde(rename = "Lucid Dream")]
    Lucid,
    #[serde(rename = "Recurring Dream")]
    Recurring,
    #[serde(rename = "Prophetic Dream")]
    Prophetic,
}

impl DreamType {
    pub const ALL: [DreamType; 7] = [
        Self::Fear,
        Self::Wish,
        Self::Processing,
        Self::Nightmare,
        Self::Lucid,
        Self::Recurring,
        Self::Prophetic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Fear => "Fear Dream",
            Self::Wish => "Wish Dream",
            Self::Processing => "Processing Dream",
            Self::Nightmare => "Nightmare",
            Self::Lucid => "Lucid Dream",
            Self::Recurring => "Recurring Dream",
            Self::Prophetic => "Prophetic Dream",
        }
    }

    /// Accepts the display label or its first word, with spaces, dashes or underscores.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase().replace(['_', '-'], " ");
        let normalized = normalized.strip_suffix(" dream").unwrap_or(&normalized);

        match normalized.trim() {
            "fear" => Some(Self::Fear),
            "wish" => Some(Self::Wish),
            "processing" => Some(Self::Processing),
            "nightmare" => Some(Self::Nightmare),
            "lucid" => Some(Self::Lucid),
            "recurring" => Some(Self::Recurring),
            "prophetic" => Some(Self::Prophetic),
            _ => None,
        }
    }
}

impl fmt::Display for DreamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DreamType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| format!("unknown dream type: {value}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DreamSymbol {
    pub symbol: String,
    pub meaning: String,
}

impl DreamSymbol {
    pub fn new(symbol: &str, meaning: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            meaning: meaning.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Religion {
    Islamic,
    Hindu,
    Christian,
}

impl Religion {
    pub const ORDER: [Religion; 3] = [Self::Islamic, Self::Hindu, Self::Christian];

    pub fn icon(self) -> &'static str {
        match self {
            Self::Islamic => "moon-star",
            Self::Hindu => "lotus",
            Self::Christian => "cross",
        }
    }
}

impl fmt::Display for Religion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Islamic => "Islamic",
            Self::Hindu => "Hindu",
            Self::Christian => "Christian",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReligiousInterpretation {
    pub religion: Religion,
    pub interpretation: String,
    pub key_symbols: Vec<String>,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DreamAnalysis {
    pub interpretation: String,
    pub dream_type: DreamType,
    pub symbols: Vec<DreamSymbol>,
    pub emotions: Vec<String>,
    pub religious_interpretations: Vec<ReligiousInterpretation>,
}

impl DreamAnalysis {
    /// Returns a copy carrying the user-selected dream type. The interpretation text is left
    /// as classified.
    pub fn with_dream_type(&self, dream_type: DreamType) -> Self {
        Self {
            dream_type,
            ..self.clone()
        }
    }
}

/// What the submit action hands to the interpreter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DreamRequest {
    pub text: Option<String>,
    pub dream_type_override: Option<DreamType>,
}

impl DreamRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            dream_type_override: None,
        }
    }

    pub fn with_override(mut self, dream_type: Option<DreamType>) -> Self {
        self.dream_type_override = dream_type;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogCategory {
    #[serde(rename = "Nightmare")]
    Nightmare,
    #[serde(rename = "Wishful Dream")]
    WishfulDream,
    #[serde(rename = "Anxiety Dream")]
    AnxietyDream,
    #[serde(rename = "Processing Dream")]
    ProcessingDream,
    #[serde(rename = "Lucid Dream")]
    LucidDream,
    #[serde(rename = "Recurring Dream")]
    RecurringDream,
    #[serde(rename = "Prophetic Dream")]
    PropheticDream,
}

impl CatalogCategory {
    pub const ALL: [CatalogCategory; 7] = [
        Self::Nightmare,
        Self::WishfulDream,
        Self::AnxietyDream,
        Self::ProcessingDream,
        Self::LucidDream,
        Self::RecurringDream,
        Self::PropheticDream,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Nightmare => "Nightmare",
            Self::WishfulDream => "Wishful Dream",
            Self::AnxietyDream => "Anxiety Dream",
            Self::ProcessingDream => "Processing Dream",
            Self::LucidDream => "Lucid Dream",
            Self::RecurringDream => "Recurring Dream",
            Self::PropheticDream => "Prophetic Dream",
        }
    }

    /// `Ok(None)` stands for "All".
    pub fn parse_filter(value: &str) -> Result<Option<Self>, String> {
        let normalized = value.trim().to_lowercase().replace(['_', '-'], " ");
        let normalized = normalized.strip_suffix(" dream").unwrap_or(&normalized);

        match normalized.trim() {
            "" | "all" => Ok(None),
            "nightmare" => Ok(Some(Self::Nightmare)),
            "wishful" => Ok(Some(Self::WishfulDream)),
            "anxiety" => Ok(Some(Self::AnxietyDream)),
            "processing" => Ok(Some(Self::ProcessingDream)),
            "lucid" => Ok(Some(Self::LucidDream)),
            "recurring" => Ok(Some(Self::RecurringDream)),
            "prophetic" => Ok(Some(Self::PropheticDream)),
            _ => Err(format!("unknown catalog category: {value}")),
        }
    }
}

impl fmt::Display for CatalogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DreamMeaning {
    pub id: u32,
    pub symbol: &'static str,
    pub category: CatalogCategory,
    pub meaning: &'static str,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsultationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub dream_description: String,
    pub preferred_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultationReceipt {
    pub reference: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub client_name: String,
    pub preferred_time: String,
    pub fee_cents: u32,
    pub currency: String,
    pub response_window: String,
}
