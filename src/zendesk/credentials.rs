//! Zendesk credential resolution from CLI flags and environment

use log::debug;

use crate::config::env;
use crate::error::{Result, ZendeskError};
use crate::zendesk::ZendeskConfig;

/// Credentials given on the command line; any may be absent
///
/// Missing values fall back to the environment when resolved.
#[derive(Debug, Default, Clone)]
pub struct Credentials<'a> {
    pub company: Option<&'a str>,
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
    pub base_url: Option<&'a str>,
}

impl Credentials<'_> {
    /// Resolve each value from the CLI first, then from the process environment
    pub fn resolve(&self) -> Result<ZendeskConfig> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve with a custom environment lookup
    ///
    /// A base URL, when present, replaces the company host entirely.
    pub fn resolve_with<F>(&self, lookup: F) -> Result<ZendeskConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |cli: Option<&str>, var: &str| -> Option<String> {
            if let Some(value) = cli.filter(|v| !v.is_empty()) {
                debug!("Using {} from CLI argument", var);
                return Some(value.to_string());
            }
            let value = lookup(var).filter(|v| !v.is_empty())?;
            debug!("Using {} from environment", var);
            Some(value)
        };

        let username = pick(self.username, env::USERNAME)
            .ok_or_else(|| missing(env::USERNAME, "--username"))?;
        let password = pick(self.password, env::PASSWORD)
            .ok_or_else(|| missing(env::PASSWORD, "--password"))?;

        match pick(self.base_url, env::BASE_URL) {
            Some(base_url) => ZendeskConfig::with_base_url(&base_url, &username, &password),
            None => {
                let company = pick(self.company, env::COMPANY)
                    .ok_or_else(|| missing(env::COMPANY, "--company"))?;
                ZendeskConfig::for_company(&company, &username, &password)
            }
        }
    }
}

fn missing(var: &str, flag: &str) -> ZendeskError {
    ZendeskError::Config(format!(
        "{} is not set. Provide it with {} or export {}=<value>",
        var, flag, var
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_resolve_from_environment() {
        let lookup = lookup_from(&[
            ("ZENDESK_COMPANY", "acme"),
            ("ZENDESK_USERNAME", "agent@acme.com"),
            ("ZENDESK_PASSWORD", "pw"),
        ]);
        let config = Credentials::default().resolve_with(lookup).unwrap();

        assert_eq!(config.base_url, "https://acme.zendesk.com/api/v2");
        assert_eq!(config.username, "agent@acme.com");
        assert_eq!(config.password, "pw");
    }

    #[test]
    fn test_cli_takes_precedence() {
        let lookup = lookup_from(&[
            ("ZENDESK_COMPANY", "acme"),
            ("ZENDESK_USERNAME", "env-user"),
            ("ZENDESK_PASSWORD", "env-pw"),
        ]);
        let args = Credentials {
            company: Some("other"),
            username: Some("cli-user"),
            ..Default::default()
        };
        let config = args.resolve_with(lookup).unwrap();

        assert_eq!(config.base_url, "https://other.zendesk.com/api/v2");
        assert_eq!(config.username, "cli-user");
        assert_eq!(config.password, "env-pw");
    }

    #[test]
    fn test_base_url_overrides_company() {
        let lookup = lookup_from(&[
            ("ZENDESK_URL", "http://127.0.0.1:9999/"),
            ("ZENDESK_USERNAME", "u"),
            ("ZENDESK_PASSWORD", "p"),
        ]);
        let config = Credentials::default().resolve_with(lookup).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn test_missing_variable_is_named() {
        let lookup = lookup_from(&[("ZENDESK_COMPANY", "acme"), ("ZENDESK_USERNAME", "u")]);
        let err = Credentials::default().resolve_with(lookup).unwrap_err();

        match err {
            ZendeskError::Config(msg) => {
                assert!(msg.contains("ZENDESK_PASSWORD"));
                assert!(msg.contains("--password"));
            }
            other => panic!("Expected ZendeskError::Config, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let lookup = lookup_from(&[
            ("ZENDESK_COMPANY", ""),
            ("ZENDESK_USERNAME", "u"),
            ("ZENDESK_PASSWORD", "p"),
        ]);
        let err = Credentials::default().resolve_with(lookup).unwrap_err();
        assert!(err.to_string().contains("ZENDESK_COMPANY"));
    }
}
