use serde::{Deserialize, Serialize};

/// User gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Korean display label used in prompts
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "남성",
            Gender::Female => "여성",
        }
    }
}

/// Seasonal personal-color classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalColorMain {
    WinterCool,
    SummerCool,
    AutumnWarm,
    SpringWarm,
}

impl PersonalColorMain {
    /// Korean display label used in prompts
    pub fn label(&self) -> &'static str {
        match self {
            PersonalColorMain::WinterCool => "겨울 쿨톤",
            PersonalColorMain::SummerCool => "여름 쿨톤",
            PersonalColorMain::AutumnWarm => "가을 웜톤",
            PersonalColorMain::SpringWarm => "봄 웜톤",
        }
    }
}

/// Personal-color profile: a main seasonal tone plus an optional
/// free-text sub-type (e.g. "겨울 딥", "여름 뮤트")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonalColor {
    pub main: PersonalColorMain,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// User profile submitted with every recommendation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserPreference {
    pub gender: Gender,
    pub personal_color: PersonalColor,
}

/// The 7 fixed clothing-layer slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutfitPart {
    Outer,
    TopOuter,
    TopMid,
    TopInner,
    Bottom,
    Socks,
    Shoes,
}

/// All parts in canonical order, used for iteration and prompt formatting
pub const OUTFIT_PARTS: [OutfitPart; 7] = [
    OutfitPart::Outer,
    OutfitPart::TopOuter,
    OutfitPart::TopMid,
    OutfitPart::TopInner,
    OutfitPart::Bottom,
    OutfitPart::Socks,
    OutfitPart::Shoes,
];

impl OutfitPart {
    /// Wire key for this part, matching the serde snake_case name
    pub fn wire_name(&self) -> &'static str {
        match self {
            OutfitPart::Outer => "outer",
            OutfitPart::TopOuter => "top_outer",
            OutfitPart::TopMid => "top_mid",
            OutfitPart::TopInner => "top_inner",
            OutfitPart::Bottom => "bottom",
            OutfitPart::Socks => "socks",
            OutfitPart::Shoes => "shoes",
        }
    }

    /// Korean display label used in prompts and validation messages
    pub fn label(&self) -> &'static str {
        match self {
            OutfitPart::Outer => "아우터",
            OutfitPart::TopOuter => "상의 탑",
            OutfitPart::TopMid => "상의 미드",
            OutfitPart::TopInner => "상의 이너",
            OutfitPart::Bottom => "하의",
            OutfitPart::Socks => "양말",
            OutfitPart::Shoes => "신발",
        }
    }
}

/// A single clothing item: kind and color, both optional free text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutfitItem {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl OutfitItem {
    /// True when neither field carries text
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.color.is_none()
    }
}

/// Fixed-key record of the 7 outfit slots. Unknown keys are rejected at
/// deserialization rather than silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutfitInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer: Option<OutfitItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_outer: Option<OutfitItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_mid: Option<OutfitItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_inner: Option<OutfitItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<OutfitItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socks: Option<OutfitItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoes: Option<OutfitItem>,
}

impl OutfitInput {
    /// Borrow the slot for a given part
    pub fn get(&self, part: OutfitPart) -> Option<&OutfitItem> {
        match part {
            OutfitPart::Outer => self.outer.as_ref(),
            OutfitPart::TopOuter => self.top_outer.as_ref(),
            OutfitPart::TopMid => self.top_mid.as_ref(),
            OutfitPart::TopInner => self.top_inner.as_ref(),
            OutfitPart::Bottom => self.bottom.as_ref(),
            OutfitPart::Socks => self.socks.as_ref(),
            OutfitPart::Shoes => self.shoes.as_ref(),
        }
    }

    /// Set the slot for a given part
    pub fn set(&mut self, part: OutfitPart, item: OutfitItem) {
        let slot = match part {
            OutfitPart::Outer => &mut self.outer,
            OutfitPart::TopOuter => &mut self.top_outer,
            OutfitPart::TopMid => &mut self.top_mid,
            OutfitPart::TopInner => &mut self.top_inner,
            OutfitPart::Bottom => &mut self.bottom,
            OutfitPart::Socks => &mut self.socks,
            OutfitPart::Shoes => &mut self.shoes,
        };
        *slot = Some(item);
    }

    /// Iterate parts that carry at least one field, in canonical order
    pub fn present_parts(&self) -> impl Iterator<Item = (OutfitPart, &OutfitItem)> {
        OUTFIT_PARTS
            .iter()
            .filter_map(|&part| self.get(part).map(|item| (part, item)))
            .filter(|(_, item)| !item.is_empty())
    }
}

/// Hand-cream pick from the fixed PLEUVOIR catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandCream {
    pub brand: String,
    pub product_name: String,
    pub scent_description: String,
}

/// The complete AI-produced recommendation, returned to the client verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub outfit: OutfitInput,
    pub hand_cream: HandCream,
    pub accessories: Vec<String>,
    pub weather_insight: String,
    pub style_message: String,
}

/// Request payload for `POST /api/recommend`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecommendRequest {
    pub user_preference: UserPreference,
    pub outfit_input: OutfitInput,
}
