//! Player configuration.

use url::Url;

use crate::error::PlayerError;

pub const SERVER_URL_ENV_VAR: &str = "TUTOR_SERVER_URL";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerConfig {
    /// Engine to talk to over HTTP. `None` runs the exchange in-process.
    pub server_url: Option<Url>,
}

impl PlayerConfig {
    pub fn from_env() -> Result<Self, PlayerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PlayerError> {
        let server_url = lookup(SERVER_URL_ENV_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(|v| Url::parse(&v).map_err(|e| PlayerError::InvalidUrl(format!("{v}: {e}"))))
            .transpose()?;

        Ok(Self { server_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_url_means_local() {
        let config = PlayerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.server_url, None);

        let config = PlayerConfig::from_lookup(|_| Some("  ".into())).unwrap();
        assert_eq!(config.server_url, None);
    }

    #[test]
    fn parses_server_url() {
        let config =
            PlayerConfig::from_lookup(|_| Some("http://localhost:5000".into())).unwrap();
        assert_eq!(
            config.server_url.map(|u| u.to_string()),
            Some("http://localhost:5000/".to_string())
        );
    }

    #[test]
    fn rejects_garbage_url() {
        let err = PlayerConfig::from_lookup(|_| Some("not a url".into())).unwrap_err();
        assert!(matches!(err, PlayerError::InvalidUrl(_)));
    }
}
