pub mod client;

pub use client::{GeminiClient, SYSTEM_INSTRUCTION};

use tracing::{info, warn};

use crate::server::AssistantConfig;
use crate::{Error, Result};

pub const MOCK_LOAN_ANSWER: &str = "MOCK: For crop loans, look at the Kisan Credit Card (KCC) \
scheme. It offers short-term credit at a subsidised interest rate, with extra interest \
subvention for prompt repayment. Visit your nearest bank branch with land records and ID.";

pub const MOCK_GENERIC_ANSWER: &str = "MOCK: The AI assistant is running in offline mode. \
Ask about loans, subsidies or crop planning, or set GOOGLE_API_KEY to enable live answers.";

/// Question-answering gateway, fixed at startup to either a live client or canned answers.
#[derive(Debug, Clone)]
pub enum Assistant {
    Configured(GeminiClient),
    Mock,
}

impl Assistant {
    /// Build the gateway, downgrading to [`Assistant::Mock`] when the credential is
    /// missing or unusable.
    pub fn from_config(config: &AssistantConfig) -> Self {
        match Self::try_configure(config) {
            Ok(client) => {
                info!(
                    "Gemini client initialized with model {}",
                    client.model()
                );
                Assistant::Configured(client)
            }
            Err(e) => {
                warn!("{}. Using mock AI responses ({})", e, e.error_type());
                Assistant::Mock
            }
        }
    }

    fn try_configure(config: &AssistantConfig) -> Result<GeminiClient> {
        let raw = config.api_key.as_deref().ok_or(Error::MissingCredential)?;
        let api_key = validate_api_key(raw)?;

        GeminiClient::new(
            &config.base_url,
            &config.model,
            api_key,
            config.timeout,
            config.max_output_tokens,
        )
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Assistant::Configured(_))
    }

    pub fn mode(&self) -> &'static str {
        match self {
            Assistant::Configured(_) => "configured",
            Assistant::Mock => "mock",
        }
    }

    /// Answer a question. Failures of the live client come back as `Err` and are left
    /// to the caller to render.
    pub async fn answer(&self, question: &str) -> Result<String> {
        match self {
            Assistant::Configured(client) => client.generate(question).await,
            Assistant::Mock => Ok(mock_answer(question).to_string()),
        }
    }
}

pub fn mock_answer(question: &str) -> &'static str {
    if question.to_lowercase().contains("loan") {
        MOCK_LOAN_ANSWER
    } else {
        MOCK_GENERIC_ANSWER
    }
}

/// User-visible text for a failed completion call.
pub fn failure_answer(error: &Error) -> String {
    format!("Error: Could not connect to the AI model. {error}")
}

fn validate_api_key(raw: &str) -> Result<&str> {
    let key = raw.trim().trim_matches(|c: char| c == '"' || c == '\'');

    if key.is_empty() {
        return Err(Error::MissingCredential);
    }
    if key.chars().any(char::is_whitespace) {
        return Err(Error::InvalidCredential {
            reason: "key contains whitespace".to_string(),
        });
    }
    Ok(key)
}
