//! Static command table, prefix completion, and help/usage metadata.

use std::collections::BTreeSet;

use terminal_contract::{ArgumentSpec, CommandSpec, Lang, OutputView};
use thiserror::Error;

/// Maximum number of argument options listed in a usage line before eliding the rest.
pub const MAX_LISTED_ARGUMENT_OPTIONS: usize = 6;

/// Name of the command intercepted by the session to empty the history.
pub const CLEAR_COMMAND: &str = "clear";

/// Name of the command that switches the interface language.
pub const SET_LANG_COMMAND: &str = "set-lang";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Registry construction errors for malformed command tables.
pub enum RegistryError {
    /// A command was registered with an empty name.
    #[error("command name must not be empty")]
    EmptyName,
    /// A command name contains whitespace and could never be typed as one token.
    #[error("command name `{0}` contains whitespace")]
    WhitespaceInName(String),
    /// Two commands share a name.
    #[error("command `{0}` is registered more than once")]
    DuplicateCommand(String),
    /// An argument was declared without a name.
    #[error("command `{command}` declares an argument with an empty name")]
    EmptyArgumentName {
        /// Owning command.
        command: String,
    },
    /// Two arguments of the same command share a name.
    #[error("command `{command}` declares argument `{argument}` more than once")]
    DuplicateArgument {
        /// Owning command.
        command: String,
        /// Repeated argument name.
        argument: String,
    },
}

/// Immutable, ordered table of recognized commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRegistry {
    specs: Vec<CommandSpec>,
}

impl CommandRegistry {
    /// Validates `specs` and builds a registry preserving their order.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] when a name is empty, contains whitespace, or is repeated, or when
    /// a command repeats an argument name.
    pub fn new(specs: Vec<CommandSpec>) -> Result<Self, RegistryError> {
        let mut seen = BTreeSet::new();
        for spec in &specs {
            let name = spec.name.as_str();
            if name.is_empty() {
                return Err(RegistryError::EmptyName);
            }
            if name.chars().any(char::is_whitespace) {
                return Err(RegistryError::WhitespaceInName(name.to_string()));
            }
            if !seen.insert(name) {
                return Err(RegistryError::DuplicateCommand(name.to_string()));
            }
            validate_arguments(name, &spec.arguments)?;
        }
        Ok(Self { specs })
    }

    /// Returns the built-in portfolio command table.
    pub fn portfolio() -> Self {
        Self {
            specs: portfolio_specs(),
        }
    }

    /// Returns every registered command in registration order.
    pub fn specs(&self) -> &[CommandSpec] {
        &self.specs
    }

    /// Looks up a command by exact name.
    pub fn find(&self, name: &str) -> Option<&CommandSpec> {
        self.specs.iter().find(|spec| spec.name.as_str() == name)
    }

    /// Returns every registered name in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|spec| spec.name.as_str())
    }

    /// Returns the registered names starting with `prefix`, in registration order.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        self.names()
            .filter(|name| name.starts_with(prefix))
            .map(str::to_string)
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::portfolio()
    }
}

fn validate_arguments(command: &str, arguments: &[ArgumentSpec]) -> Result<(), RegistryError> {
    let mut seen = BTreeSet::new();
    for argument in arguments {
        if argument.name.is_empty() {
            return Err(RegistryError::EmptyArgumentName {
                command: command.to_string(),
            });
        }
        if !seen.insert(argument.name.as_str()) {
            return Err(RegistryError::DuplicateArgument {
                command: command.to_string(),
                argument: argument.name.clone(),
            });
        }
    }
    Ok(())
}

fn portfolio_specs() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new("build-info").with_view(OutputView::BuildInfo),
        CommandSpec::new(CLEAR_COMMAND),
        CommandSpec::new("contact").with_view(OutputView::Contact),
        CommandSpec::new("contribs").with_view(OutputView::Contribs),
        CommandSpec::new("help").with_view(OutputView::Help),
        CommandSpec::new("intro").with_view(OutputView::Intro),
        CommandSpec::new(SET_LANG_COMMAND)
            .with_view(OutputView::SetLang)
            .with_options(Lang::ALL.map(Lang::code)),
        CommandSpec::new("web2work").with_view(OutputView::Web2Work),
        CommandSpec::new("web3work").with_view(OutputView::Web3Work),
        CommandSpec::new("whoami").with_view(OutputView::Whoami),
    ]
}

/// What clicking a usage line's command link should do to the live prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// Pre-fill the prompt and wait for the user to finish typing.
    Prefill(String),
    /// Type the command automatically and submit it.
    Simulate(String),
}

/// One line of help output: a translated description plus a clickable usage link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageLine {
    /// Translation key for the description text.
    pub description_key: String,
    /// Command name shown on the link.
    pub command: String,
    /// Option or argument hint displayed after the command name.
    pub hint: Option<String>,
    /// Prompt action triggered by the link.
    pub action: LinkAction,
}

/// Builds the help lines for `spec`: one for the command and one per declared argument.
pub fn usage_lines(spec: &CommandSpec) -> Vec<UsageLine> {
    let name = spec.name.as_str();
    let mut lines = vec![UsageLine {
        description_key: format!("cmds.{name}.description"),
        command: name.to_string(),
        hint: (!spec.options.is_empty()).then(|| spec.options.join("|")),
        action: command_link_action(spec),
    }];

    lines.extend(spec.arguments.iter().map(|argument| UsageLine {
        description_key: format!("cmds.{name}.argsDesc.{}", argument.name),
        command: name.to_string(),
        hint: Some(argument_hint(argument)),
        action: argument_link_action(spec, argument),
    }));
    lines
}

/// Returns the prompt action for a link naming `spec` itself.
pub fn command_link_action(spec: &CommandSpec) -> LinkAction {
    if spec.options.is_empty() {
        LinkAction::Simulate(spec.name.as_str().to_string())
    } else {
        LinkAction::Prefill(format!("{} ", spec.name))
    }
}

/// Returns the prompt action for a link naming one of `spec`'s arguments.
///
/// A command that also takes options pre-fills only its name, like its own link does.
pub fn argument_link_action(spec: &CommandSpec, argument: &ArgumentSpec) -> LinkAction {
    if spec.options.is_empty() {
        LinkAction::Prefill(format!("{} --{}=", spec.name, argument.name))
    } else {
        LinkAction::Prefill(format!("{} ", spec.name))
    }
}

fn argument_hint(argument: &ArgumentSpec) -> String {
    let mut hint = format!("--{}=", argument.name);
    let listed = argument
        .options
        .iter()
        .take(MAX_LISTED_ARGUMENT_OPTIONS)
        .map(String::as_str)
        .collect::<Vec<_>>();
    hint.push_str(&listed.join("|"));
    if argument.options.len() > MAX_LISTED_ARGUMENT_OPTIONS {
        hint.push_str("|...");
    }
    hint
}
