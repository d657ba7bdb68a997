//! Input sanitization and validation for free-text fields.
//!
//! Every string a user types ends up inside a prompt sent to the generation
//! model, so free text is stripped of prompt-breaking characters and emoji
//! before it is accepted. All functions here are pure; callers must use the
//! `processed` copies downstream, never the raw input.

use crate::models::{OutfitInput, OutfitItem, PersonalColor, UserPreference, OUTFIT_PARTS};

/// Minimum accepted length of a sanitized field, in Unicode scalar values
pub const MIN_LENGTH: usize = 2;
/// Maximum accepted length of a sanitized field, in Unicode scalar values
pub const MAX_LENGTH: usize = 50;

/// Characters removed from all free-text input before prompt assembly
fn is_special_char(c: char) -> bool {
    matches!(
        c,
        '<' | '>' | '{' | '}' | '[' | ']' | '\\' | '/' | '|' | '`' | '~'
    )
}

/// Emoji blocks removed from all free-text input
fn is_emoji(c: char) -> bool {
    matches!(
        c as u32,
        0x1F300..=0x1F9FF | 0x2600..=0x26FF | 0x2700..=0x27BF
    )
}

fn strip(input: &str) -> String {
    input
        .chars()
        .filter(|&c| !is_special_char(c) && !is_emoji(c))
        .collect()
}

/// Sanitize a field for final submission: trim outer whitespace, strip the
/// special-character set and emoji. Returns `None` when nothing remains.
pub fn sanitize_final(input: &str) -> Option<String> {
    let processed = strip(input.trim());
    if processed.is_empty() {
        None
    } else {
        Some(processed)
    }
}

/// Sanitize a field while the user is still typing: same stripping as
/// [`sanitize_final`] but without trimming, so interior and trailing spaces
/// survive until final submission. Returns `None` when nothing remains.
pub fn sanitize_live(input: &str) -> Option<String> {
    let processed = strip(input);
    if processed.is_empty() {
        None
    } else {
        Some(processed)
    }
}

/// Validate one optional free-text field.
///
/// Absent or blank input is valid (all fields are optional) and yields
/// `Ok(None)`. Otherwise the input is sanitized and checked against the
/// length bounds; the sanitized copy is returned for downstream use.
/// Error messages embed `label` so the client can point at the field.
pub fn validate_field(input: Option<&str>, label: &str) -> Result<Option<String>, String> {
    let raw = match input {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Ok(None),
    };

    let processed = match sanitize_final(raw) {
        Some(p) => p,
        None => return Err(format!("{label}에 유효한 문자가 없습니다.")),
    };

    let len = processed.chars().count();
    if len < MIN_LENGTH {
        return Err(format!("{label}은(는) 최소 {MIN_LENGTH}자 이상이어야 합니다."));
    }
    if len > MAX_LENGTH {
        return Err(format!("{label}은(는) 최대 {MAX_LENGTH}자까지 입력 가능합니다."));
    }

    Ok(Some(processed))
}

/// Outcome of validating the 7-part outfit record
#[derive(Debug, Clone, PartialEq)]
pub struct OutfitValidation {
    pub errors: Vec<String>,
    pub processed: OutfitInput,
}

impl OutfitValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate every present outfit item, accumulating all errors rather than
/// stopping at the first. The processed record keeps only sanitized items
/// where at least one of kind/color survived.
pub fn validate_outfit_input(input: &OutfitInput) -> OutfitValidation {
    let mut errors = Vec::new();
    let mut processed = OutfitInput::default();

    for part in OUTFIT_PARTS {
        let item = match input.get(part) {
            Some(item) => item,
            None => continue,
        };

        let label = part.label();
        let mut clean = OutfitItem::default();

        match validate_field(item.kind.as_deref(), &format!("{label} 종류")) {
            Ok(kind) => clean.kind = kind,
            Err(e) => errors.push(e),
        }
        match validate_field(item.color.as_deref(), &format!("{label} 색상")) {
            Ok(color) => clean.color = color,
            Err(e) => errors.push(e),
        }

        if !clean.is_empty() {
            processed.set(part, clean);
        }
    }

    OutfitValidation { errors, processed }
}

/// Validate the optional personal-color detail text. Membership of `main`
/// in the 4-tone set is already enforced by the enum at deserialization.
pub fn validate_personal_color(color: &PersonalColor) -> Result<PersonalColor, String> {
    let detail = validate_field(color.detail.as_deref(), "퍼스널 컬러 세부 타입")?;
    Ok(PersonalColor {
        main: color.main,
        detail,
    })
}

/// Outcome of validating the user preference block
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceValidation {
    pub errors: Vec<String>,
    pub processed: UserPreference,
}

impl PreferenceValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate the full user preference. Gender membership is enforced by the
/// enum; only the personal-color detail carries free text.
pub fn validate_user_preference(preference: &UserPreference) -> PreferenceValidation {
    let mut errors = Vec::new();

    let personal_color = match validate_personal_color(&preference.personal_color) {
        Ok(processed) => processed,
        Err(e) => {
            errors.push(e);
            PersonalColor {
                main: preference.personal_color.main,
                detail: None,
            }
        }
    };

    PreferenceValidation {
        errors,
        processed: UserPreference {
            gender: preference.gender,
            personal_color,
        },
    }
}
