//! Settings definitions
//! Declarative registry of the navigation options

use super::descriptor::{SettingDescriptor, SettingError, SettingType, SettingValue};
use super::registry::SettingsRegistry;
use crate::error::NavError;
use crate::movement::NumberFormats;
use crate::pairs::DEFAULT_MATCH_PAIRS;

/// Option values consulted by the navigation queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavOptions {
    /// `<open>:<close>` tokens, in priority order
    pub match_pairs: Vec<String>,
    /// Alphabets the number extractor recognises besides decimal
    pub nrformats: NumberFormats,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            match_pairs: DEFAULT_MATCH_PAIRS.iter().map(|s| (*s).to_string()).collect(),
            nrformats: NumberFormats::HEX | NumberFormats::OCTAL,
        }
    }
}

fn set_match_pairs(options: &mut NavOptions, value: SettingValue) -> Result<(), SettingError> {
    let SettingValue::List(items) = value else {
        return Err(SettingError::ValidationError("Expected list".to_string()));
    };

    let mut pairs = Vec::with_capacity(items.len());
    for item in items {
        let SettingValue::Text(token) = item else {
            return Err(SettingError::ValidationError("Expected text".to_string()));
        };
        let chars: Vec<char> = token.chars().collect();
        if !matches!(chars[..], [_, ':', _]) {
            return Err(SettingError::ValidationError(format!(
                "Invalid match pair: {token:?} (expected <open>:<close>)"
            )));
        }
        pairs.push(token);
    }

    options.match_pairs = pairs;
    Ok(())
}

fn get_match_pairs(options: &NavOptions) -> String {
    options.match_pairs.join(",")
}

fn set_nrformats(options: &mut NavOptions, value: SettingValue) -> Result<(), SettingError> {
    let SettingValue::List(items) = value else {
        return Err(SettingError::ValidationError("Expected list".to_string()));
    };

    let mut formats = NumberFormats::empty();
    for item in items {
        let flag = match item {
            SettingValue::Enum(name) => NumberFormats::from_option_name(&name),
            _ => None,
        };
        match flag {
            Some(flag) => formats |= flag,
            None => {
                return Err(SettingError::ValidationError(
                    "Expected alpha, hex or octal".to_string(),
                ))
            }
        }
    }

    options.nrformats = formats;
    Ok(())
}

fn get_nrformats(options: &NavOptions) -> String {
    NumberFormats::NAMES
        .iter()
        .copied()
        .filter(|name| {
            NumberFormats::from_option_name(name).is_some_and(|f| options.nrformats.contains(f))
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Static registry of all settings
pub const SETTINGS: &[SettingDescriptor<NavOptions>] = &[
    SettingDescriptor {
        name: "matchpairs",
        aliases: &["mps"],
        description: "Delimiter pairs used by %, [( and block text objects",
        ty: SettingType::List {
            item: &SettingType::Text,
        },
        set: set_match_pairs,
        get: get_match_pairs,
    },
    SettingDescriptor {
        name: "nrformats",
        aliases: &["nf"],
        description: "Number alphabets recognised under the cursor besides decimal",
        ty: SettingType::List {
            item: &SettingType::Enum {
                variants: &["alpha", "hex", "octal"],
            },
        },
        set: set_nrformats,
        get: get_nrformats,
    },
];

/// Create the settings registry with all navigation options
#[must_use]
pub fn create_settings_registry() -> SettingsRegistry<NavOptions> {
    SettingsRegistry::new(SETTINGS)
}

/// Navigation options plus a revision counter.
///
/// Every successful [`NavSettings::set`] bumps the revision; derived data
/// such as the parsed pair table compares revisions to know when to rebuild.
#[derive(Debug, Clone)]
pub struct NavSettings {
    options: NavOptions,
    revision: u64,
    registry: SettingsRegistry<NavOptions>,
}

impl NavSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(NavOptions::default())
    }

    #[must_use]
    pub fn with_options(options: NavOptions) -> Self {
        Self {
            options,
            revision: 0,
            registry: create_settings_registry(),
        }
    }

    #[must_use]
    pub fn options(&self) -> &NavOptions {
        &self.options
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn registry(&self) -> SettingsRegistry<NavOptions> {
        self.registry
    }

    /// Apply `name=value`. On error the options are left untouched.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), NavError> {
        let mut options = self.options.clone();
        let canonical = self.registry.execute_setting(name, value, &mut options)?;
        self.options = options;
        self.revision += 1;
        log::debug!("set {}={} (revision {})", canonical, value, self.revision);
        Ok(())
    }

    /// Apply a `name=value` assignment as typed on a command line
    pub fn apply(&mut self, assignment: &str) -> Result<(), NavError> {
        match assignment.split_once('=') {
            Some((name, value)) => self.set(name, value),
            None => Err(SettingError::ParseError(format!(
                "Expected name=value, got {assignment:?}"
            ))
            .into()),
        }
    }

    /// Current value of an option as it would be typed
    pub fn get(&self, name: &str) -> Result<String, NavError> {
        Ok(self.registry.query_setting(name, &self.options)?)
    }
}

impl Default for NavSettings {
    fn default() -> Self {
        Self::new()
    }
}
