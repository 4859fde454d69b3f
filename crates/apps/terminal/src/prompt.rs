//! Live and read-only prompt rows.

use leptos::ev::KeyboardEvent;
use leptos::*;
use terminal_contract::CommandEntry;
use terminal_core::{host::prompt_label, PromptAction, PromptState, Translator};

use crate::{context::use_terminal_session, i18n::Catalog, keys::prompt_binding_for_key};

const LIVE_INPUT_ID: &str = "terminal-live-input";

/// Formats the line shown under the live prompt after Tab.
pub fn autocomplete_hint(candidates: &[String], t: &dyn Translator) -> String {
    let listed = if candidates.is_empty() {
        t.t("noMatch")
    } else {
        candidates.join(" | ")
    };
    format!("{} {listed}", t.t("autocomplete"))
}

fn current_host() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().host().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

#[component]
/// A prompt row.
///
/// Without `entry` this is the session's live prompt, wired to the session dispatch. With `entry`
/// it echoes the input that produced a past history entry and accepts no input.
pub fn TerminalPrompt(
    /// Past entry to echo.
    #[prop(optional)]
    entry: Option<CommandEntry>,
) -> impl IntoView {
    let ctx = use_terminal_session();
    let host = current_host();
    let label = move || {
        let catalog = Catalog::new(ctx.lang.get());
        let visitor = ctx
            .session
            .with_untracked(|session| catalog.t(&session.config().visitor_label));
        prompt_label(&visitor, &host)
    };

    if let Some(entry) = entry {
        let echoed = PromptState::read_only(&entry).buffer;
        return view! {
            <div class="terminal-input-row">
                <span class="terminal-prompt">{label}</span>
                <input
                    class="terminal-input"
                    type="text"
                    readonly=true
                    tabindex="-1"
                    prop:value=echoed
                />
            </div>
        }
        .into_view();
    }

    let buffer = create_memo(move |_| ctx.session.with(|session| session.prompt().buffer.clone()));
    let candidates =
        create_memo(move |_| ctx.session.with(|session| session.prompt().autocomplete.clone()));

    let input_ref = ctx.input_ref;

    view! {
        <div class="terminal-live-prompt">
            <div class="terminal-input-row">
                <label class="terminal-prompt" for=LIVE_INPUT_ID>{label}</label>
                <input
                    id=LIVE_INPUT_ID
                    node_ref=input_ref
                    class="terminal-input"
                    type="text"
                    prop:value=move || buffer.get()
                    on:input=move |ev| {
                        ctx.dispatch_action(PromptAction::Edit {
                            value: event_target_value(&ev),
                        })
                    }
                    on:keydown=move |ev: KeyboardEvent| {
                        if let Some(binding) = prompt_binding_for_key(&ev.key(), ev.ctrl_key()) {
                            if binding.prevent_default {
                                ev.prevent_default();
                            }
                            ctx.dispatch_action(binding.action);
                        }
                    }
                    autocomplete="off"
                    autocapitalize="off"
                    spellcheck="false"
                />
            </div>
            {move || {
                candidates
                    .get()
                    .map(|candidates| {
                        let hint = autocomplete_hint(&candidates, &Catalog::new(ctx.lang.get()));
                        view! { <div class="terminal-autocomplete">{hint}</div> }
                    })
            }}
        </div>
    }
    .into_view()
}
