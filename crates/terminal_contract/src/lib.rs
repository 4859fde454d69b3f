//! Shared command contracts used by the headless terminal core and the terminal UI.
//!
//! This crate is intentionally runtime-agnostic. It defines the serializable command registry
//! metadata, parsed command entries, and output view identifiers without depending on Leptos,
//! browser APIs, or the interpreter itself.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable command registration identifier, such as `help` or `set-lang`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommandId(String);

impl CommandId {
    /// Creates a command identifier from trusted caller input.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Output view bound to a registered command.
///
/// Views are plain identifiers; the UI layer resolves each one to a render function so neither the
/// registry nor the parser depend on a UI framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputView {
    /// Build timestamp and publication metadata.
    BuildInfo,
    /// Contact details.
    Contact,
    /// Open-source contribution list.
    Contribs,
    /// Command listing with usage links.
    Help,
    /// Welcome banner.
    Intro,
    /// Language switch confirmation.
    SetLang,
    /// Web2 work history.
    Web2Work,
    /// Web3 work history.
    Web3Work,
    /// About-me page.
    Whoami,
}

/// Named `--key=value` argument accepted by a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentSpec {
    /// Argument name without the leading `--`.
    pub name: String,
    /// Values suggested for the argument. Empty when the value is free-form.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl ArgumentSpec {
    /// Creates a free-form argument.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    /// Restricts the argument to a fixed set of suggested values.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }
}

/// Registry entry describing one recognized command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Command name typed by the user.
    pub name: CommandId,
    /// View rendered as the command's output, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<OutputView>,
    /// Single-token values accepted directly after the command name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Named `--key=value` arguments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<ArgumentSpec>,
}

impl CommandSpec {
    /// Creates a command with no view, options, or arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: CommandId::new(name),
            view: None,
            options: Vec::new(),
            arguments: Vec::new(),
        }
    }

    /// Binds an output view.
    pub fn with_view(mut self, view: OutputView) -> Self {
        self.view = Some(view);
        self
    }

    /// Sets the accepted single-token options.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a named argument.
    pub fn with_argument(mut self, argument: ArgumentSpec) -> Self {
        self.arguments.push(argument);
        self
    }
}

/// Millisecond timestamp identifying a [`CommandEntry`].
///
/// Timestamps are strictly increasing within a session and double as render keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryTimestamp(pub u64);

/// Canonical record of one submitted or simulated command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEntry {
    /// Ordering key and identity.
    pub timestamp: EntryTimestamp,
    /// Registered command name, or the raw first token when unrecognized.
    pub cmd_name: String,
    /// Output view attached at parse time from the matched registry entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<OutputView>,
    /// Single-token option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,
    /// Argument name from a `--name=value` token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arg_name: Option<String>,
    /// Argument value from a `--name=value` token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arg_value: Option<String>,
}

impl CommandEntry {
    /// Creates an entry for input that matched no registered command.
    pub fn unrecognized(cmd_name: impl Into<String>, timestamp: EntryTimestamp) -> Self {
        Self {
            timestamp,
            cmd_name: cmd_name.into(),
            view: None,
            option: None,
            arg_name: None,
            arg_value: None,
        }
    }

    /// Returns whether the entry carries the same command fields as `other`, ignoring identity.
    pub fn same_command(&self, other: &Self) -> bool {
        self.cmd_name == other.cmd_name
            && self.option == other.option
            && self.arg_name == other.arg_name
            && self.arg_value == other.arg_value
    }
}

/// Interface language supported by the message catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// English.
    #[default]
    En,
    /// French.
    Fr,
}

impl Lang {
    /// Every supported language, in display order.
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Fr];

    /// Returns the short language code used in URLs and `set-lang` options.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Returns the language's own display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
        }
    }

    /// Parses a language code, ignoring ASCII case.
    pub fn from_code(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(raw))
    }
}
