//! Settings registry
//! Registry that holds setting descriptors and applies raw `name=value` pairs

use super::descriptor::{SettingDescriptor, SettingError, SettingType, SettingValue};

/// Outcome of resolving a user-typed option name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// Exact match on a name or explicit alias
    Exact(&'static str),
    /// Unique prefix of a name or alias
    Prefix(&'static str),
    /// Several options share the prefix
    Ambiguous {
        prefix: String,
        matches: Vec<&'static str>,
    },
    /// Nothing matched
    Unknown(String),
}

/// Settings registry
///
/// Holds static setting descriptors and provides:
/// - Option name resolution (exact name, alias, unique prefix)
/// - Value parsing and setter dispatch
pub struct SettingsRegistry<T: 'static> {
    /// Static array of setting descriptors
    settings: &'static [SettingDescriptor<T>],
}

impl<T: 'static> Clone for SettingsRegistry<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SettingsRegistry<T> {}

impl<T: 'static> std::fmt::Debug for SettingsRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsRegistry")
            .field("settings", &self.settings.iter().map(|d| d.name).collect::<Vec<_>>())
            .finish()
    }
}

impl<T: 'static> SettingsRegistry<T> {
    /// Create a new registry from static descriptors
    #[must_use]
    pub const fn new(descriptors: &'static [SettingDescriptor<T>]) -> Self {
        SettingsRegistry {
            settings: descriptors,
        }
    }

    #[must_use]
    pub fn descriptors(&self) -> &'static [SettingDescriptor<T>] {
        self.settings
    }

    /// Resolve an option name
    ///
    /// Exact names and aliases win outright. Otherwise the input must be a
    /// prefix of exactly one option's name or alias.
    #[must_use]
    pub fn match_option(&self, input: &str) -> MatchResult {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return MatchResult::Unknown(input);
        }

        for desc in self.settings {
            if desc.name == input || desc.aliases.iter().any(|a| *a == input) {
                return MatchResult::Exact(desc.name);
            }
        }

        let matches: Vec<&'static str> = self
            .settings
            .iter()
            .filter(|desc| {
                desc.name.starts_with(&input) || desc.aliases.iter().any(|a| a.starts_with(&input))
            })
            .map(|desc| desc.name)
            .collect();

        match matches.as_slice() {
            [] => MatchResult::Unknown(input),
            [name] => MatchResult::Prefix(*name),
            _ => MatchResult::Ambiguous {
                prefix: input,
                matches,
            },
        }
    }

    /// Descriptor for a user-typed option name
    pub fn find(&self, name: &str) -> Result<&'static SettingDescriptor<T>, SettingError> {
        let matched = match self.match_option(name) {
            MatchResult::Exact(n) | MatchResult::Prefix(n) => n,
            MatchResult::Ambiguous { prefix, matches } => {
                return Err(SettingError::UnknownOption(format!(
                    "{prefix} (ambiguous: matches {})",
                    matches.join(", ")
                )));
            }
            MatchResult::Unknown(_) => return Err(SettingError::UnknownOption(name.to_string())),
        };

        self.settings
            .iter()
            .find(|d| d.name == matched)
            .ok_or_else(|| SettingError::UnknownOption(name.to_string()))
    }

    /// Parse string value to `SettingValue` using `SettingType`
    ///
    /// Handles parsing and validation according to the setting type.
    /// Returns typed `SettingValue` or structured error.
    pub(crate) fn parse_value(ty: &SettingType, value: &str) -> Result<SettingValue, SettingError> {
        match ty {
            SettingType::Enum { variants } => {
                let val_lower = value.to_lowercase();
                // Case-insensitive match onto the canonical spelling
                if let Some(canonical) = variants.iter().find(|v| v.to_lowercase() == val_lower) {
                    Ok(SettingValue::Enum(canonical.to_string()))
                } else {
                    Err(SettingError::ParseError(format!(
                        "Invalid enum value: {value}. Valid values: {variants:?}"
                    )))
                }
            }
            SettingType::Text => Ok(SettingValue::Text(value.to_string())),
            SettingType::List { item } => {
                if value.is_empty() {
                    return Ok(SettingValue::List(Vec::new()));
                }
                value
                    .split(',')
                    .map(|part| Self::parse_value(item, part))
                    .collect::<Result<Vec<_>, _>>()
                    .map(SettingValue::List)
            }
        }
    }

    /// Apply a setting by name with string value
    ///
    /// Flow:
    /// 1. Resolve option name (handles aliases, prefixes, ambiguity)
    /// 2. Parse string value to `SettingValue` using `SettingType`
    /// 3. Call setter function with typed value
    ///
    /// Returns the canonical name of the option that changed.
    pub fn execute_setting(
        &self,
        name: &str,
        value: &str,
        target: &mut T,
    ) -> Result<&'static str, SettingError> {
        let desc = self.find(name)?;
        let typed_value = Self::parse_value(&desc.ty, value)?;
        (desc.set)(target, typed_value)?;
        Ok(desc.name)
    }

    /// Current value of an option, formatted as it would be typed
    pub fn query_setting(&self, name: &str, target: &T) -> Result<String, SettingError> {
        let desc = self.find(name)?;
        Ok((desc.get)(target))
    }
}
