use serde::{Deserialize, Serialize};
use statusmatch_core::{RuleSet, StatusRange};
use statusmatch_http::{Alternatives, Tag};
use tracing::debug;

use crate::error::ConfigError;
use crate::serialization::ValueSerialization;

/// Rules for every alternative of a response type.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ResponsesConfig {
    /// Format used by alternatives that do not pick one.
    #[serde(default)]
    pub format: ValueSerialization,
    /// One entry per alternative, in type-parameter order.
    pub alternatives: Vec<AlternativeConfig>,
}

/// Status ranges and body format of one alternative.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AlternativeConfig {
    /// Status ranges the alternative is declared for.
    pub status: Vec<StatusRange>,
    /// Body format, overriding [`ResponsesConfig::format`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ValueSerialization>,
    /// Expected type name; checked against the bound type when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ResponsesConfig {
    /// Parses a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_saphyr::from_str(yaml).map_err(|error| ConfigError::Yaml {
            message: error.to_string(),
        })
    }

    /// Builds the conflict-checked rule set for `V`.
    pub fn into_rule_set<V: Alternatives>(self) -> Result<RuleSet<V>, ConfigError> {
        let count = self.alternatives.len();
        if count > Tag::ALL.len() {
            return Err(ConfigError::TooManyAlternatives {
                count,
                max: Tag::ALL.len(),
            });
        }

        let mut rules = RuleSet::new();
        for (tag, alternative) in Tag::ALL.into_iter().zip(self.alternatives) {
            let position = tag.index();
            if !V::is_declared(tag) {
                return Err(ConfigError::UnknownAlternative {
                    position,
                    declared: V::arity(),
                });
            }

            let actual = V::type_name(tag);
            if let Some(configured) = alternative.name
                && configured != actual.as_str()
            {
                return Err(ConfigError::NameMismatch {
                    position,
                    configured,
                    actual,
                });
            }

            let format = alternative.format.unwrap_or(self.format);
            let rule = V::rule(tag, alternative.status, format.to_format())
                .map_err(|source| ConfigError::Rule { position, source })?;
            debug!(position, rule = %rule, ?format, "configured response alternative");
            rules.append(rule)?;
        }
        Ok(rules)
    }
}
