use serde::{Deserialize, Serialize};

use crate::feature::Feature;
use crate::models::chant::ChantDetail;

/// One row of the tabular extract: the categorical projection of a chant.
///
/// This is what the classifier trains on and what the questionnaire and
/// resolver filter over. Column values are normalized at extract-build time;
/// a row never carries a raw null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChantRow {
    pub target: String,
    pub judul: String,
    pub yadnya: String,
    pub upacara: String,
    pub tahap: String,
    pub makna: String,
    pub pura: String,
    pub urutan_tahap: u32,
}

impl ChantRow {
    /// Column accessor by feature.
    pub fn value(&self, feature: Feature) -> &str {
        match feature {
            Feature::Yadnya => &self.yadnya,
            Feature::Upacara => &self.upacara,
            Feature::Tahap => &self.tahap,
            Feature::Makna => &self.makna,
            Feature::Pura => &self.pura,
        }
    }
}

impl From<&ChantDetail> for ChantRow {
    fn from(detail: &ChantDetail) -> Self {
        Self {
            target: detail.target.clone(),
            judul: detail.judul.clone(),
            yadnya: detail.yadnya.clone(),
            upacara: detail.upacara.clone(),
            tahap: detail.tahap.clone(),
            makna: detail.makna.clone(),
            pura: detail.pura.clone(),
            urutan_tahap: detail.urutan_tahap,
        }
    }
}
