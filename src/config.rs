use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{RankerError, Result};

/// Selection options, usually embedded in the host's configuration.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use path_match_ranker::SelectionOptions;
///
/// let mut config = HashMap::new();
/// config.insert("limit".to_string(), "25".to_string());
///
/// let options = SelectionOptions::from_config(&config).unwrap();
/// assert_eq!(options.limit, 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionOptions {
    /// Maximum number of matches to keep (0 = unlimited)
    #[serde(default, alias = "max_results")]
    pub limit: usize,
}

impl SelectionOptions {
    /// Build options from string key/value pairs, falling back to defaults.
    ///
    /// `max_results` is accepted as an alias for `limit`; `limit` wins when
    /// both are present.
    pub fn from_config(config: &HashMap<String, String>) -> Result<Self> {
        let defaults = Self::default();

        let limit = match config
            .get_key_value("limit")
            .or_else(|| config.get_key_value("max_results"))
        {
            Some((key, value)) => value
                .trim()
                .parse::<usize>()
                .map_err(|_| RankerError::InvalidOption {
                    key: key.clone(),
                    value: value.clone(),
                })?,
            None => defaults.limit,
        };

        Ok(Self { limit })
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_unlimited(&self) -> bool {
        self.limit == 0
    }
}

impl fmt::Display for SelectionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unlimited() {
            write!(f, "limit=unlimited")
        } else {
            write!(f, "limit={}", self.limit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_values() {
        let options = SelectionOptions::default();
        assert_eq!(options.limit, 0);
        assert!(options.is_unlimited());
    }

    #[test]
    fn test_from_config_with_values() {
        let options = SelectionOptions::from_config(&config(&[("limit", "10")])).unwrap();
        assert_eq!(options.limit, 10);

        let options = SelectionOptions::from_config(&config(&[("max_results", " 7 ")])).unwrap();
        assert_eq!(options.limit, 7);

        let options =
            SelectionOptions::from_config(&config(&[("limit", "3"), ("max_results", "9")])).unwrap();
        assert_eq!(options.limit, 3);
    }

    #[test]
    fn test_from_config_empty() {
        let options = SelectionOptions::from_config(&HashMap::new()).unwrap();
        assert_eq!(options, SelectionOptions::default());
    }

    #[test]
    fn test_from_config_invalid() {
        let err = SelectionOptions::from_config(&config(&[("limit", "-1")])).unwrap_err();
        match err {
            RankerError::InvalidOption { key, value } => {
                assert_eq!(key, "limit");
                assert_eq!(value, "-1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_json() {
        assert_eq!(SelectionOptions::from_json(r#"{"limit": 5}"#).unwrap().limit, 5);
        assert_eq!(SelectionOptions::from_json(r#"{"max_results": 4}"#).unwrap().limit, 4);
        assert_eq!(SelectionOptions::from_json("{}").unwrap().limit, 0);
        assert!(matches!(
            SelectionOptions::from_json("not json"),
            Err(RankerError::Json(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(SelectionOptions::default().to_string(), "limit=unlimited");
        assert_eq!(SelectionOptions { limit: 12 }.to_string(), "limit=12");
    }
}
