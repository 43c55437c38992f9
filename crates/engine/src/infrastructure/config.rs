//! Engine configuration loaded from environment variables.

use std::path::PathBuf;

use crate::infrastructure::groq::{DEFAULT_GROQ_BASE_URL, DEFAULT_GROQ_MODEL, DEFAULT_TIMEOUT_SECS};
use crate::prompt_templates::{TEMPLATE_ENV_VAR, TEMPLATE_PATH_ENV_VAR};

/// Default cap on generated tokens per reply.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Default listening port.
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Completion provider settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmSettings {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

/// Everything the engine binary needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub llm: LlmSettings,
    pub server_host: String,
    pub server_port: u16,
    /// `None` disables the CORS layer entirely.
    pub cors_allowed_origins: Option<String>,
    pub static_dir: PathBuf,
    pub prompt_template: Option<String>,
    pub prompt_template_path: Option<PathBuf>,
}

impl EngineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let llm = LlmSettings {
            base_url: var("GROQ_BASE_URL").unwrap_or_else(|| DEFAULT_GROQ_BASE_URL.into()),
            model: var("GROQ_MODEL").unwrap_or_else(|| DEFAULT_GROQ_MODEL.into()),
            api_key: var("GROQ_API_KEY"),
            max_tokens: var("LLM_MAX_TOKENS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_TOKENS),
            timeout_secs: var("LLM_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        // An explicitly empty value turns CORS off; unset means "any origin".
        let cors_allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(v) if v.trim().is_empty() => None,
            Some(v) => Some(v.trim().to_string()),
            None => Some("*".to_string()),
        };

        Self {
            llm,
            server_host: var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            server_port: var("SERVER_PORT")
                .or_else(|| var("PORT"))
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            cors_allowed_origins,
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("dist")),
            // Templates are multi-line text; keep them untrimmed.
            prompt_template: lookup(TEMPLATE_ENV_VAR).filter(|v| !v.trim().is_empty()),
            prompt_template_path: var(TEMPLATE_PATH_ENV_VAR).map(PathBuf::from),
        }
    }
}

/// Load `.env.local` and `.env` from the workspace root, then the working directory.
///
/// Earlier files win because dotenvy never overwrites variables that are already set.
pub fn load_dotenv() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    for dir in [repo_root, PathBuf::from(".")] {
        // Prefer local overrides.
        for filename in [".env.local", ".env"] {
            let path = dir.join(filename);
            if path.exists() {
                let _ = dotenvy::from_path(path);
            }
        }
    }
}
