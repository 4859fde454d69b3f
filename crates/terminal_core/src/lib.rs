//! Headless interpreter behind the portfolio terminal.
//!
//! The crate turns free-text prompt input into typed command entries, keeps the session
//! scrollback, drives the readline-style prompt state machine (recall, autocomplete, scripted
//! typing), and resolves each entry to the output view the UI should render. It has no UI
//! framework dependency; hosts execute the [`PromptEffect`] intents it returns.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod dispatch;
pub mod history;
pub mod host;
pub mod i18n;
pub mod parser;
pub mod prompt;
pub mod registry;
pub mod session;
pub mod simulate;
pub mod time;

pub use config::{ConfigError, TerminalConfig};
pub use dispatch::{render_entry, resolve_view, ResolvedView, ViewRenderer};
pub use history::{reconstruct_input, CommandHistory};
pub use i18n::Translator;
pub use parser::{parse_entry, parse_entry_at};
pub use prompt::{
    reduce_prompt, PromptAction, PromptContext, PromptEffect, PromptMode, PromptState,
    SimulationId,
};
pub use registry::{CommandRegistry, LinkAction, RegistryError, UsageLine};
pub use session::{SessionEvent, SubmitOutcome, TerminalSession};
pub use simulate::run_simulation;
