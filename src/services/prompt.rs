//! Prompt assembly for the outfit recommendation request.
//!
//! The fragrance catalog and instruction text are static data, kept apart
//! from the control flow so the prompt content can change without touching
//! the handler.

use crate::models::{OutfitInput, UserPreference};

/// One PLEUVOIR hand-cream line: name, scent notes and mood copy,
/// embedded verbatim in every prompt
pub struct FragranceProfile {
    pub name: &'static str,
    pub features: &'static str,
    pub notes: &'static str,
    pub mood: &'static str,
}

/// The 5 hand-cream products the model must pick from
pub const HAND_CREAM_CATALOG: [FragranceProfile; 5] = [
    FragranceProfile {
        name: "HINOKI LEATHER",
        features: "히노끼와 가죽의 관능, 유니크한 우디",
        notes: "Top(Warm spicy, Hinoki Pine, Cypress), Middle(Atlas cedar, Leather, Styrax), Base(Tobacco, Gaiac wood, Musk, Sandalwood, Amber)",
        mood: "햇빛과 바람이 좋은 히노끼 숲에 둘러 싸인 듯, 신비롭고 따뜻하며 매혹적인 느낌. 편백나무 숲속 온천의 편안함과 가죽의 강렬함",
    },
    FragranceProfile {
        name: "ROSE WOOD",
        features: "싱그러운 생화로즈향과 스모키한 우디 향",
        notes: "Top(Bergamot, Pink Rose), Middle(Fresh spicy, Vetiver), Base(Gaiac wood, Musk, Sandalwood, Olibanum)",
        mood: "햇빛이 좋은 오후, 장미가 피어난 정원을 거닐며 느껴지는 숲의 향기. 부드러운 로즈향과 스모키한 우디향의 조화",
    },
    FragranceProfile {
        name: "MORNING SOIL",
        features: "비 온 뒤의 자연의 향",
        notes: "Top(Ozonic, Rosemary), Middle(Fresh spicy, Patchouli, Aromatic Muguet, Jasmine), Base(Amber, Musk)",
        mood: "가뭄 후에 내린 소나기로 상쾌해진 땅의 공기. 비와 대지의 조화 속에 피어오르는 편안함",
    },
    FragranceProfile {
        name: "FLORAL MUSK",
        features: "부담스럽지 않은 은은한 꽃향기와 크리미한 머스크",
        notes: "Top(African orange flower, Iris, Rose, Jasmine), Middle(Tuberose, Orris, Peony, Amber), Base(Musk, Benzoin)",
        mood: "따스한 햇살 속 들판에 피어난 야생화와 강인한 머스크. 순백의 중성적 무드",
    },
    FragranceProfile {
        name: "TOKYO CLOUD",
        features: "청량한 도쿄의 하늘 구름처럼 가볍고 투명한 향",
        notes: "Top(Bergamot, Pine Needles), Middle(Rose, Neroli), Base(Sandalwood, Patchouli, Cedarwood, Moss, Amber, White Musk)",
        mood: "투명한 시트러스와 은은한 머스크. 청량하고 여유로운 향",
    },
];

/// Format the user-supplied outfit parts as one line per part, or the
/// "nothing entered" marker when every slot is empty
fn format_outfit_lines(outfit: &OutfitInput) -> String {
    let lines: Vec<String> = outfit
        .present_parts()
        .map(|(part, item)| {
            format!(
                "{}: {} / {}",
                part.label(),
                item.kind.as_deref().unwrap_or("미정"),
                item.color.as_deref().unwrap_or("미정"),
            )
        })
        .collect();

    if lines.is_empty() {
        "없음 (전체 추천 필요)".to_string()
    } else {
        lines.join("\n")
    }
}

fn format_catalog() -> String {
    HAND_CREAM_CATALOG
        .iter()
        .enumerate()
        .map(|(i, profile)| {
            format!(
                "{}. {}\n- 특징: {}\n- 노트: {}\n- 무드: {}",
                i + 1,
                profile.name,
                profile.features,
                profile.notes,
                profile.mood,
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Build the full recommendation prompt.
///
/// `preference` and `outfit` must be the processed output of validation;
/// raw user input never reaches this function. `month` is the current
/// calendar month (1-12) for the weather instruction.
pub fn build_prompt(preference: &UserPreference, outfit: &OutfitInput, month: u32) -> String {
    let gender_text = preference.gender.label();
    let color_text = preference.personal_color.main.label();
    let detail_text = preference
        .personal_color
        .detail
        .as_deref()
        .map(|d| format!(" (세부: {d})"))
        .unwrap_or_default();

    format!(
        "당신은 퍼스널 컬러 전문가이자 패션 스타일리스트입니다.\n\
        \n\
        사용자 정보:\n\
        - 성별: {gender_text}\n\
        - 퍼스널 컬러: {color_text}{detail_text}\n\
        \n\
        사용자가 입력한 의상:\n\
        {outfit_text}\n\
        \n\
        PLEUVOIR(플르부아) 핸드크림 제품 라인업:\n\
        \n\
        {catalog}\n\
        \n\
        요청사항:\n\
        1. 사용자의 퍼스널 컬러에 맞는 색상으로 전체 의상을 완성해주세요.\n\
        2. 입력되지 않은 부위는 자동으로 추천해주세요.\n\
        3. 입력된 부위가 있다면 그것을 기반으로 전체 조화를 맞춰주세요.\n\
        4. 위 5가지 PLEUVOIR 핸드크림 제품 중 이 코디와 가장 어울리는 향을 1개 추천해주세요. 제품명과 향의 특징을 자세히 설명해주세요.\n\
        5. 추가 액세서리 3-5개를 제안해주세요 (예: 시계, 가방, 모자, 선글라스, 스카프 등).\n\
        6. 오늘의 날씨를 고려한 스타일 조언을 해주세요 (현재 계절: {month}월).\n\
        7. **스타일링 메시지**: 추천한 의상과 향기가 함께 어우러졌을 때 형성되는 시각적, 후각적 이미지를 감각적으로 표현해주세요.\n\
        \x20  - 의상의 색감과 실루엣이 주는 시각적 인상\n\
        \x20  - 핸드크림 향이 더해졌을 때 완성되는 분위기\n\
        \x20  - 이 조합이 전달하는 전체적인 느낌과 감성\n\
        \x20  - 반드시 3문장 이내로 작성해주세요.\n\
        \n\
        중요:\n\
        - 모든 색상은 퍼스널 컬러에 적합해야 합니다.\n\
        - 의상 종류와 색상은 구체적으로 명시해주세요.\n\
        - 핸드크림은 반드시 위 5가지 제품 중에서 선택해주세요.\n\
        - 스타일링 메시지는 구체적이고 감각적으로 작성하되, 3문장을 초과하지 마세요.\n\
        - 전문적이고 실용적인 조언을 제공해주세요.",
        outfit_text = format_outfit_lines(outfit),
        catalog = format_catalog(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Gender, OutfitItem, OutfitPart, PersonalColor, PersonalColorMain, UserPreference,
    };

    fn winter_male() -> UserPreference {
        UserPreference {
            gender: Gender::Male,
            personal_color: PersonalColor {
                main: PersonalColorMain::WinterCool,
                detail: None,
            },
        }
    }

    #[test]
    fn test_prompt_embeds_translated_labels() {
        let prompt = build_prompt(&winter_male(), &OutfitInput::default(), 1);
        assert!(prompt.contains("성별: 남성"));
        assert!(prompt.contains("퍼스널 컬러: 겨울 쿨톤"));
        assert!(!prompt.contains("세부:"));
    }

    #[test]
    fn test_prompt_embeds_detail_when_present() {
        let mut pref = winter_male();
        pref.personal_color.detail = Some("겨울 딥".to_string());
        let prompt = build_prompt(&pref, &OutfitInput::default(), 1);
        assert!(prompt.contains("겨울 쿨톤 (세부: 겨울 딥)"));
    }

    #[test]
    fn test_prompt_marks_empty_outfit() {
        let prompt = build_prompt(&winter_male(), &OutfitInput::default(), 1);
        assert!(prompt.contains("없음 (전체 추천 필요)"));
    }

    #[test]
    fn test_prompt_lists_supplied_parts_with_placeholders() {
        let mut outfit = OutfitInput::default();
        outfit.set(
            OutfitPart::Outer,
            OutfitItem {
                kind: Some("데님 트러커 재킷".to_string()),
                color: None,
            },
        );
        outfit.set(
            OutfitPart::Shoes,
            OutfitItem {
                kind: None,
                color: Some("화이트".to_string()),
            },
        );

        let prompt = build_prompt(&winter_male(), &outfit, 1);
        assert!(prompt.contains("아우터: 데님 트러커 재킷 / 미정"));
        assert!(prompt.contains("신발: 미정 / 화이트"));
        assert!(!prompt.contains("없음 (전체 추천 필요)"));
    }

    #[test]
    fn test_prompt_embeds_month_and_catalog() {
        let prompt = build_prompt(&winter_male(), &OutfitInput::default(), 8);
        assert!(prompt.contains("현재 계절: 8월"));
        for profile in &HAND_CREAM_CATALOG {
            assert!(prompt.contains(profile.name));
        }
    }
}
