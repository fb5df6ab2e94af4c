//! Static crop reference table

use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

pub const SELECT_CROP_PROMPT: &str = "Please select a crop to see information";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CropKey {
    Wheat,
    Rice,
    Corn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CropFacts {
    pub name: &'static str,
    pub season: &'static str,
    pub water: &'static str,
    pub temperature: &'static str,
    pub states: &'static str,
    pub tips: &'static str,
}

static WHEAT: CropFacts = CropFacts {
    name: "Wheat",
    season: "Rabi",
    water: "450-600 mm",
    temperature: "10-15°C",
    states: "Punjab, Haryana, Uttar Pradesh",
    tips: "Sow from October to December. Apply nitrogen fertilizer in splits.",
};

static RICE: CropFacts = CropFacts {
    name: "Rice",
    season: "Kharif",
    water: "1000-1500 mm",
    temperature: "20-35°C",
    states: "West Bengal, Uttar Pradesh, Andhra Pradesh",
    tips: "Requires flooded fields. Use System of Rice Intensification (SRI) for better yields.",
};

static CORN: CropFacts = CropFacts {
    name: "Corn",
    season: "Kharif",
    water: "500-700 mm",
    temperature: "20-27°C",
    states: "Karnataka, Andhra Pradesh, Tamil Nadu",
    tips: "Plant in rows with 60cm spacing. Control stem borers with neem-based pesticides.",
};

impl CropKey {
    pub const ALL: [CropKey; 3] = [CropKey::Wheat, CropKey::Rice, CropKey::Corn];

    pub fn key(&self) -> &'static str {
        match self {
            CropKey::Wheat => "wheat",
            CropKey::Rice => "rice",
            CropKey::Corn => "corn",
        }
    }

    pub fn facts(&self) -> &'static CropFacts {
        match self {
            CropKey::Wheat => &WHEAT,
            CropKey::Rice => &RICE,
            CropKey::Corn => &CORN,
        }
    }
}

impl FromStr for CropKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CropKey::ALL
            .iter()
            .copied()
            .find(|crop| crop.key() == s)
            .ok_or_else(|| Error::unknown_crop(s))
    }
}

/// What the crop information panel shows for a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CropInfoView {
    Prompt,
    Card(&'static CropFacts),
    Unknown(String),
}

impl CropInfoView {
    pub fn for_selection(selection: &str) -> Self {
        if selection.is_empty() {
            return CropInfoView::Prompt;
        }
        match selection.parse::<CropKey>() {
            Ok(crop) => CropInfoView::Card(crop.facts()),
            Err(_) => CropInfoView::Unknown(selection.to_string()),
        }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            CropInfoView::Prompt => Some(SELECT_CROP_PROMPT.to_string()),
            CropInfoView::Card(_) => None,
            CropInfoView::Unknown(key) => Some(format!("No information available for '{}'", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheat_is_rabi() {
        match CropInfoView::for_selection("wheat") {
            CropInfoView::Card(facts) => {
                assert_eq!(facts.season, "Rabi");
                assert_eq!(facts.name, "Wheat");
            }
            other => panic!("expected a crop card, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_selection_prompts() {
        let view = CropInfoView::for_selection("");
        assert_eq!(view, CropInfoView::Prompt);
        assert_eq!(view.message().as_deref(), Some(SELECT_CROP_PROMPT));
    }

    #[test]
    fn test_unknown_crop_is_reported() {
        let view = CropInfoView::for_selection("quinoa");
        assert_eq!(view, CropInfoView::Unknown("quinoa".to_string()));
        assert_eq!(
            view.message().as_deref(),
            Some("No information available for 'quinoa'")
        );
    }

    #[test]
    fn test_every_key_has_facts() {
        for crop in CropKey::ALL {
            assert!(!crop.facts().tips.is_empty());
            assert_eq!(crop.key().parse::<CropKey>().unwrap(), crop);
        }
    }
}
