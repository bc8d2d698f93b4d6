//! Navigation options
//! Declarative `:set`-style registry for the options the queries consult

pub mod definitions;
pub mod descriptor;
pub mod registry;


pub use definitions::{create_settings_registry, NavOptions, NavSettings, SETTINGS};
pub use descriptor::{
    SettingDescriptor, SettingError, SettingGetter, SettingSetter, SettingType, SettingValue,
};
pub use registry::{MatchResult, SettingsRegistry};
