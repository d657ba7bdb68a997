/// Gemini (Generative Language API) provider.
///
/// Calls `models/{model}:generateContent` with a JSON response schema so the
/// model's output parses directly into [`Recommendation`]. The schema mirrors
/// the response contract: 7 optional outfit slots, the hand-cream triple, an
/// accessories list and the two insight strings.
use crate::{
    config::Config,
    models::{Recommendation, OUTFIT_PARTS},
    services::providers::{ProviderError, RecommendationProvider},
};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

#[derive(Clone)]
pub struct GeminiProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key: config.gemini_api_key.clone(),
            api_url: config.gemini_api_url.clone(),
            model: config.gemini_model.clone(),
        }
    }
}

/// Response schema in Generative Language API form (uppercase type names)
fn response_schema() -> Value {
    let outfit_properties: Value = OUTFIT_PARTS
        .iter()
        .map(|part| {
            let key = part.wire_name().to_string();
            let label = part.label();
            let schema = json!({
                "type": "OBJECT",
                "properties": {
                    "type": { "type": "STRING", "description": format!("{label} 종류") },
                    "color": { "type": "STRING", "description": format!("{label} 색상") },
                },
                "required": ["type", "color"],
            });
            (key, schema)
        })
        .collect::<serde_json::Map<String, Value>>()
        .into();

    json!({
        "type": "OBJECT",
        "properties": {
            "outfit": {
                "type": "OBJECT",
                "properties": outfit_properties,
            },
            "handCream": {
                "type": "OBJECT",
                "properties": {
                    "brand": { "type": "STRING", "description": "브랜드 이름 (PLEUVOIR)" },
                    "productName": { "type": "STRING", "description": "제품명 (예: HINOKI LEATHER)" },
                    "scentDescription": { "type": "STRING", "description": "향 설명" },
                },
                "required": ["brand", "productName", "scentDescription"],
            },
            "accessories": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "추천 액세서리 목록",
            },
            "weatherInsight": { "type": "STRING", "description": "날씨를 고려한 스타일 인사이트" },
            "styleMessage": { "type": "STRING", "description": "이 코디가 전달하는 메시지" },
        },
        "required": ["outfit", "handCream", "accessories", "weatherInsight", "styleMessage"],
    })
}

/// Pull the first candidate's text and parse it against the schema
fn decode_recommendation(response: GenerateContentResponse) -> Result<Recommendation, ProviderError> {
    let text = response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.parts.first())
        .map(|part| part.text.as_str())
        .ok_or_else(|| {
            ProviderError::MalformedResponse("no candidates in response".to_string())
        })?;

    serde_json::from_str(text)
        .map_err(|e| ProviderError::MalformedResponse(format!("schema mismatch: {e}")))
}

#[async_trait::async_trait]
impl RecommendationProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<Recommendation, ProviderError> {
        // The handler checks the credential up front; this guards direct use
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential)?;

        let url = format!("{}/models/{}:generateContent", self.api_url, self.model);
        let request_body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            },
        });

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, message });
        }

        let body: GenerateContentResponse = response.json().await?;
        let recommendation = decode_recommendation(body)?;

        tracing::debug!(
            model = %self.model,
            accessories = recommendation.accessories.len(),
            "Gemini generation completed"
        );

        Ok(recommendation)
    }
}
