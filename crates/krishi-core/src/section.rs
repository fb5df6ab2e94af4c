//! Main-view sections

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the mutually exclusive content panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Dashboard,
    Recommend,
    Disease,
    Weather,
    Mandi,
    Crops,
    Fertilizer,
    Chat,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Dashboard,
        Section::Recommend,
        Section::Disease,
        Section::Weather,
        Section::Mandi,
        Section::Crops,
        Section::Fertilizer,
        Section::Chat,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Recommend => "recommend",
            Section::Disease => "disease",
            Section::Weather => "weather",
            Section::Mandi => "mandi",
            Section::Crops => "crops",
            Section::Fertilizer => "fertilizer",
            Section::Chat => "chat",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Recommend => "Crop Recommendation",
            Section::Disease => "Disease Detection",
            Section::Weather => "Weather",
            Section::Mandi => "Mandi Prices",
            Section::Crops => "Crop Information",
            Section::Fertilizer => "Fertilizer Advice",
            Section::Chat => "AI Assistant",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "🏠",
            Section::Recommend => "🌱",
            Section::Disease => "🍂",
            Section::Weather => "🌦️",
            Section::Mandi => "💰",
            Section::Crops => "🌾",
            Section::Fertilizer => "🧪",
            Section::Chat => "💬",
        }
    }

    /// DOM id of the navigation link
    pub fn nav_id(&self) -> String {
        format!("nav-{}", self.key())
    }

    /// DOM id of the content panel
    pub fn panel_id(&self) -> String {
        format!("section-{}", self.key())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.key() == s)
            .ok_or_else(|| Error::unknown_section(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.key().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn test_unknown_key() {
        let err = "harvest".parse::<Section>().unwrap_err();
        assert!(matches!(err, Error::UnknownSection(ref k) if k == "harvest"));
    }

    #[test]
    fn test_dom_ids() {
        assert_eq!(Section::Weather.nav_id(), "nav-weather");
        assert_eq!(Section::Weather.panel_id(), "section-weather");
    }
}
