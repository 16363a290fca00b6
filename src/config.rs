/// Configuration for the generative-text client used by the chatbot and template tools
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TkdError};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    BlockNone,
    BlockOnlyHigh,
    BlockMediumAndAbove,
    BlockLowAndAbove,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

/// Every category blocked at medium probability and above
pub fn default_safety_settings() -> Vec<SafetySetting> {
    [
        HarmCategory::Harassment,
        HarmCategory::HateSpeech,
        HarmCategory::SexuallyExplicit,
        HarmCategory::DangerousContent,
    ]
    .into_iter()
    .map(|category| SafetySetting {
        category,
        threshold: HarmBlockThreshold::BlockMediumAndAbove,
    })
    .collect()
}

#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerativeConfig {
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
    pub safety_settings: Vec<SafetySetting>,
}

impl GenerativeConfig {
    /// Build a config with default model settings, failing on a missing key
    pub fn new(api_key: &str) -> Result<GenerativeConfig> {
        let config = GenerativeConfig {
            api_key: api_key.trim().to_string(),
            ..GenerativeConfig::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(TkdError::MissingApiKey);
        }
        if self.model.trim().is_empty() {
            return Err(TkdError::InvalidConfig("model must not be empty".to_string()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(TkdError::InvalidConfig(format!(
                "temperature {} outside 0.0..=2.0",
                self.temperature
            )));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(TkdError::InvalidConfig(format!(
                "topP {} outside 0.0..=1.0",
                self.top_p
            )));
        }
        if self.top_k == 0 {
            return Err(TkdError::InvalidConfig("topK must be positive".to_string()));
        }
        if self.max_output_tokens == 0 {
            return Err(TkdError::InvalidConfig(
                "maxOutputTokens must be positive".to_string(),
            ));
        }
        for (i, setting) in self.safety_settings.iter().enumerate() {
            if self.safety_settings[..i]
                .iter()
                .any(|earlier| earlier.category == setting.category)
            {
                return Err(TkdError::InvalidConfig(format!(
                    "duplicate safety setting for {:?}",
                    setting.category
                )));
            }
        }
        Ok(())
    }
}

impl Default for GenerativeConfig {
    fn default() -> Self {
        GenerativeConfig {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
            safety_settings: default_safety_settings(),
        }
    }
}

// Keep the key out of console logs
impl fmt::Debug for GenerativeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerativeConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("top_k", &self.top_k)
            .field("top_p", &self.top_p)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("safety_settings", &self.safety_settings)
            .finish()
    }
}
