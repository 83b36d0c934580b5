use serde::{Deserialize, Serialize};

use crate::constants::{NONE_VALUE, STAGE_ORDER_UNORDERED};

fn none_value() -> String {
    NONE_VALUE.to_string()
}

fn unordered() -> u32 {
    STAGE_ORDER_UNORDERED
}

/// The full knowledge-base record for one chant.
///
/// Nominal attributes are total: an absent value is the literal `"None"`,
/// never a missing field. The free-text fields are opaque to the core logic
/// and pass through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChantDetail {
    /// Unique identifier, e.g. `Kidung_Wargasari_Ref`.
    pub target: String,
    /// Display title.
    pub judul: String,
    /// Ceremony type.
    #[serde(default = "none_value")]
    pub yadnya: String,
    /// Occasion.
    #[serde(default = "none_value")]
    pub upacara: String,
    /// Ritual stage.
    #[serde(default = "none_value")]
    pub tahap: String,
    /// Meaning category.
    #[serde(default = "none_value")]
    pub makna: String,
    /// Location.
    #[serde(default = "none_value")]
    pub pura: String,
    /// Position of the stage within the occasion; 99 means unordered/last.
    #[serde(default = "unordered")]
    pub urutan_tahap: u32,
    /// Lyrics.
    #[serde(default)]
    pub lirik: String,
    /// Deep meaning / philosophy.
    #[serde(default)]
    pub makna_mendalam: String,
    /// Singing technique notes.
    #[serde(default)]
    pub teknik_menyanyikan: String,
    /// Validation status of the record.
    #[serde(default)]
    pub status_validasi: String,
    /// Source attribution.
    #[serde(default)]
    pub sumber: String,
}

impl ChantDetail {
    /// Human-facing title: explicit `judul` when present, otherwise the
    /// identifier with reference suffix and underscores cleaned up.
    pub fn display_title(&self) -> String {
        if !self.judul.trim().is_empty() {
            return self.judul.trim().to_string();
        }
        self.target.replace("_Ref", "").replace('_', " ")
    }
}
