use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use chrono::{Datelike, Utc};

use crate::error::{AppError, AppResult};
use crate::models::{Recommendation, RecommendRequest};
use crate::services::prompt;
use crate::validation;

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// `POST /api/recommend`
///
/// Linear lifecycle: parse, credential check, validate preference, validate
/// outfit, build prompt, one provider call. Every failure maps to a status
/// code and a user-safe message; validation errors carry the full list.
pub async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> AppResult<Json<Recommendation>> {
    let Json(request) = payload.map_err(|_| AppError::MalformedRequest)?;

    if state.config.gemini_api_key.is_none() {
        tracing::error!("recommendation requested but no generation credential is configured");
        return Err(AppError::MissingCredential);
    }

    let preference = validation::validate_user_preference(&request.user_preference);
    if !preference.is_valid() {
        return Err(AppError::InvalidPreference(preference.errors));
    }

    let outfit = validation::validate_outfit_input(&request.outfit_input);
    if !outfit.is_valid() {
        return Err(AppError::InvalidOutfit(outfit.errors));
    }

    // Processed copies only from here on; the raw request is dropped
    let prompt = prompt::build_prompt(
        &preference.processed,
        &outfit.processed,
        Utc::now().month(),
    );

    match state.provider.generate(&prompt).await {
        Ok(recommendation) => {
            tracing::info!(
                supplied_parts = outfit.processed.present_parts().count(),
                accessories = recommendation.accessories.len(),
                "recommendation generated"
            );
            Ok(Json(recommendation))
        }
        Err(err) => {
            tracing::error!(error = %err, "AI recommendation failed");
            Err(AppError::from_provider(
                err,
                state.config.expose_error_detail(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::create_router;
    use crate::models::{OutfitInput, OutfitItem};
    use crate::services::prompt::HAND_CREAM_CATALOG;
    use crate::services::providers::{MockRecommendationProvider, ProviderError};
    use axum_test::TestServer;
    use serde_json::json;
    use std::sync::Arc;

    fn test_config(api_key: Option<&str>) -> crate::config::Config {
        let mut vars = vec![("APP_ENV".to_string(), "production".to_string())];
        if let Some(key) = api_key {
            vars.push(("GEMINI_API_KEY".to_string(), key.to_string()));
        }
        envy::from_iter::<_, crate::config::Config>(vars).unwrap()
    }

    fn server_with(api_key: Option<&str>, provider: MockRecommendationProvider) -> TestServer {
        let state = AppState::new(test_config(api_key), Arc::new(provider));
        TestServer::new(create_router(state)).unwrap()
    }

    fn full_recommendation() -> Recommendation {
        let mut outfit = OutfitInput::default();
        for part in crate::models::OUTFIT_PARTS {
            outfit.set(
                part,
                OutfitItem {
                    kind: Some(format!("{} 아이템", part.label())),
                    color: Some("다크 네이비".to_string()),
                },
            );
        }
        Recommendation {
            outfit,
            hand_cream: crate::models::HandCream {
                brand: "PLEUVOIR".to_string(),
                product_name: "HINOKI LEATHER".to_string(),
                scent_description: "우디한 잔향".to_string(),
            },
            accessories: vec![
                "시계".to_string(),
                "가방".to_string(),
                "머플러".to_string(),
                "선글라스".to_string(),
            ],
            weather_insight: "쌀쌀한 날씨에는 레이어드를 추천합니다.".to_string(),
            style_message: "깊고 차분한 겨울의 무드.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_full_recommendation_flow() {
        let mut provider = MockRecommendationProvider::new();
        provider
            .expect_generate()
            .returning(|_| Ok(full_recommendation()));

        let server = server_with(Some("test-key"), provider);
        let response = server
            .post("/api/recommend")
            .json(&json!({
                "userPreference": {
                    "gender": "male",
                    "personalColor": { "main": "winter_cool" }
                },
                "outfitInput": {}
            }))
            .await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();

        // All 7 parts populated
        for key in [
            "outer", "top_outer", "top_mid", "top_inner", "bottom", "socks", "shoes",
        ] {
            assert!(body["outfit"][key]["type"].is_string(), "missing part {key}");
        }

        // Hand cream must come from the fixed catalog
        let product = body["handCream"]["productName"].as_str().unwrap();
        assert!(HAND_CREAM_CATALOG.iter().any(|p| p.name == product));

        let accessories = body["accessories"].as_array().unwrap();
        assert!((3..=5).contains(&accessories.len()));
    }

    #[tokio::test]
    async fn test_prompt_receives_processed_input() {
        let mut provider = MockRecommendationProvider::new();
        provider
            .expect_generate()
            .withf(|prompt: &str| {
                prompt.contains("아우터: 데님 재킷 / 네이비") && !prompt.contains("<")
            })
            .returning(|_| Ok(full_recommendation()));

        let server = server_with(Some("test-key"), provider);
        let response = server
            .post("/api/recommend")
            .json(&json!({
                "userPreference": {
                    "gender": "female",
                    "personalColor": { "main": "summer_cool" }
                },
                "outfitInput": {
                    "outer": { "type": " 데님 <재킷> ", "color": "네이비" }
                }
            }))
            .await;

        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_short_outfit_field_is_rejected() {
        let mut provider = MockRecommendationProvider::new();
        provider.expect_generate().never();

        let server = server_with(Some("test-key"), provider);
        let response = server
            .post("/api/recommend")
            .json(&json!({
                "userPreference": {
                    "gender": "male",
                    "personalColor": { "main": "winter_cool" }
                },
                "outfitInput": {
                    "outer": { "type": "a", "color": "navy" }
                }
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "의상 입력 정보를 확인해주세요.");
        let details = body["details"].as_array().unwrap();
        let first = details[0].as_str().unwrap();
        assert!(first.contains("아우터 종류"));
        assert!(first.contains("최소 2자"));
    }

    #[tokio::test]
    async fn test_missing_credential_is_generic_500() {
        let mut provider = MockRecommendationProvider::new();
        provider.expect_generate().never();

        let server = server_with(None, provider);
        let response = server
            .post("/api/recommend")
            .json(&json!({
                "userPreference": {
                    "gender": "male",
                    "personalColor": { "main": "winter_cool" }
                },
                "outfitInput": {}
            }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = response.json();
        assert_eq!(
            body["error"],
            "AI 처리 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요."
        );
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_rate_limited_upstream_maps_to_429() {
        let mut provider = MockRecommendationProvider::new();
        provider.expect_generate().returning(|_| {
            Err(ProviderError::Api {
                status: 400,
                message: "rate limit exceeded for model".to_string(),
            })
        });

        let server = server_with(Some("test-key"), provider);
        let response = server
            .post("/api/recommend")
            .json(&json!({
                "userPreference": {
                    "gender": "female",
                    "personalColor": { "main": "spring_warm" }
                },
                "outfitInput": {}
            }))
            .await;

        response.assert_status(StatusCode::TOO_MANY_REQUESTS);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "요청이 너무 많습니다. 잠시 후 다시 시도해주세요.");
        // Production config: raw upstream text is not attached
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_unavailable_upstream_maps_to_503() {
        let mut provider = MockRecommendationProvider::new();
        provider.expect_generate().returning(|_| {
            Err(ProviderError::Api {
                status: 503,
                message: "overloaded".to_string(),
            })
        });

        let server = server_with(Some("test-key"), provider);
        let response = server
            .post("/api/recommend")
            .json(&json!({
                "userPreference": {
                    "gender": "male",
                    "personalColor": { "main": "autumn_warm" }
                },
                "outfitInput": {}
            }))
            .await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_malformed_body_is_400() {
        let mut provider = MockRecommendationProvider::new();
        provider.expect_generate().never();

        let server = server_with(Some("test-key"), provider);
        let response = server
            .post("/api/recommend")
            .text("not json at all")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "잘못된 요청 형식입니다.");
        assert_eq!(body["details"], "JSON 형식이 올바르지 않습니다.");
    }

    #[tokio::test]
    async fn test_unknown_outfit_key_is_rejected() {
        let mut provider = MockRecommendationProvider::new();
        provider.expect_generate().never();

        let server = server_with(Some("test-key"), provider);
        let response = server
            .post("/api/recommend")
            .json(&json!({
                "userPreference": {
                    "gender": "male",
                    "personalColor": { "main": "winter_cool" }
                },
                "outfitInput": {
                    "hat": { "type": "beanie" }
                }
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
