//! Portfolio terminal UI backed by a headless [`terminal_core::TerminalSession`].
//!
//! [`TerminalApp`] renders the scrollback (a read-only prompt plus output view per entry) followed by
//! the live prompt, plays the welcome command once on mount, and reports `set-lang` requests to
//! the host page.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod context;
mod effects;
pub mod i18n;
pub mod keys;
pub mod outputs;
pub mod prompt;
pub mod timers;

use std::rc::Rc;

use leptos::*;
use serde_json::Value;
use terminal_contract::Lang;
use terminal_core::{render_entry, CommandRegistry, TerminalConfig, TerminalSession};

pub use context::{use_terminal_session, TerminalSessionContext, TerminalSessionProvider};
pub use i18n::Catalog;
pub use outputs::{CmdLink, PortfolioViews};
pub use prompt::TerminalPrompt;

#[component]
/// Terminal view contents.
///
/// Builds a session over the portfolio command table, configured from `launch_params` (see
/// [`TerminalConfig`]). Invalid parameters are logged and replaced with defaults.
pub fn TerminalApp(
    /// Launch parameters, for example `{"typing_delay_ms": 30, "welcome_command": null}`.
    #[prop(optional)]
    launch_params: Value,
    /// Initial language. Overrides `default_lang` from the launch parameters.
    #[prop(optional)]
    lang: Option<Lang>,
    /// Called when `set-lang` switches the interface language.
    #[prop(optional, into)]
    on_lang_change: Option<Callback<Lang>>,
) -> impl IntoView {
    let mut config = TerminalConfig::from_launch_params(&launch_params).unwrap_or_else(|err| {
        logging::warn!("{err}; using default terminal configuration");
        TerminalConfig::default()
    });
    if let Some(lang) = lang {
        config.default_lang = lang;
    }
    let session = TerminalSession::new(Rc::new(CommandRegistry::portfolio()), config);

    view! {
        <TerminalSessionProvider session=session>
            <TerminalScreen on_lang_change=on_lang_change/>
        </TerminalSessionProvider>
    }
}

#[component]
fn TerminalScreen(on_lang_change: Option<Callback<Lang>>) -> impl IntoView {
    let ctx = use_terminal_session();
    let views = PortfolioViews::new(ctx);
    let entries = create_memo(move |_| ctx.session.with(|session| session.history().all().to_vec()));

    // Welcome once the live input exists so focus and caret effects have a target.
    create_effect(move |_| {
        if ctx.input_ref.get().is_none() {
            return;
        }
        if !ctx.session.with_untracked(TerminalSession::has_introduced) {
            ctx.run(TerminalSession::begin_welcome);
        }
    });

    create_effect(move |previous: Option<Lang>| {
        let lang = ctx.lang.get();
        if previous.is_some_and(|previous| previous != lang) {
            if let Some(on_lang_change) = on_lang_change {
                on_lang_change.call(lang);
            }
        }
        lang
    });

    view! {
        <div class="app-shell app-terminal-shell">
            <div
                class="terminal-screen"
                role="log"
                aria-live="polite"
                on:click=move |_| ctx.focus()
            >
                <For each=move || entries.get() key=|entry| entry.timestamp let:entry>
                    <div class="terminal-entry">
                        <TerminalPrompt entry=entry.clone()/>
                        <div class="terminal-output">
                            {move || render_entry(&entry, &Catalog::new(ctx.lang.get()), &views)}
                        </div>
                    </div>
                </For>
                <TerminalPrompt/>
            </div>
        </div>
    }
}
