use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Variables whose values are lists of paths, matched case-insensitively.
pub const SPLIT_ENV_VARS: &[&str] = &[
    "Path",
    "PSModulePath",
    "PathEXT",
    "MANPATH",
    "INFOPATH",
    "LD_LIBRARY_PATH",
    "XDG_DATA_DIRS",
    "XDG_CONFIG_DIRS",
];

pub const LS_COLORS: &str = "LS_COLORS";

/// How a single variable is rendered in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Plain,
    Split,
    LsColors,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentInfo {
    pub variables: BTreeMap<String, String>,
    pub path_separator: char,
}

impl EnvironmentInfo {
    pub fn new(path_separator: char) -> Self {
        Self::from_vars(
            std::env::vars_os().map(|(key, value)| {
                (
                    key.to_string_lossy().into_owned(),
                    value.to_string_lossy().into_owned(),
                )
            }),
            path_separator,
        )
    }

    pub fn from_vars<I, K, V>(vars: I, path_separator: char) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        EnvironmentInfo {
            variables: vars
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            path_separator,
        }
    }

    /// Splits a path-like value into its entries.
    pub fn split<'a>(&self, value: &'a str) -> Vec<&'a str> {
        value.split(self.path_separator).collect()
    }
}

pub fn classify(key: &str) -> VariableKind {
    if key.eq_ignore_ascii_case(LS_COLORS) {
        VariableKind::LsColors
    } else if SPLIT_ENV_VARS
        .iter()
        .any(|name| name.eq_ignore_ascii_case(key))
    {
        VariableKind::Split
    } else {
        VariableKind::Plain
    }
}
