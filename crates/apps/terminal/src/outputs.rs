//! Output views rendered beneath history entries.

use leptos::*;
use terminal_contract::{CommandEntry, Lang, OutputView};
use terminal_core::{
    dispatch::unknown_command_message,
    registry::{command_link_action, usage_lines, UsageLine},
    LinkAction, Translator, ViewRenderer,
};

use crate::{
    context::{use_terminal_session, TerminalSessionContext},
    i18n::split_rich,
};

const HELP_COMMAND: &str = "help";

/// [`ViewRenderer`] producing the portfolio's Leptos output views.
#[derive(Clone, Copy)]
pub struct PortfolioViews {
    ctx: TerminalSessionContext,
}

impl PortfolioViews {
    /// Creates a renderer reading the registry from `ctx`.
    pub fn new(ctx: TerminalSessionContext) -> Self {
        Self { ctx }
    }

    fn help_lines(&self) -> Vec<UsageLine> {
        self.ctx.session.with_untracked(|session| {
            session
                .registry()
                .specs()
                .iter()
                .flat_map(usage_lines)
                .collect()
        })
    }

    fn help_link_action(&self) -> LinkAction {
        self.ctx.session.with_untracked(|session| {
            session
                .registry()
                .find(HELP_COMMAND)
                .map(command_link_action)
                .unwrap_or_else(|| LinkAction::Simulate(HELP_COMMAND.to_string()))
        })
    }
}

impl ViewRenderer for PortfolioViews {
    type Output = View;

    fn render_bound(&self, view: OutputView, entry: &CommandEntry, t: &dyn Translator) -> View {
        match view {
            OutputView::Help => {
                let lines = self
                    .help_lines()
                    .into_iter()
                    .map(|line| (t.t(&line.description_key), line))
                    .collect::<Vec<_>>();
                view! { <HelpOutput lines=lines/> }.into_view()
            }
            OutputView::Intro => {
                let help_action = self.help_link_action();
                let slot = t.t("cmds.intro.site_intro_2");
                let (before, after) = match split_rich(&slot) {
                    Some((before, after)) => (before.to_string(), Some(after.to_string())),
                    None => (slot.clone(), None),
                };
                view! {
                    <div class="terminal-intro">
                        <p class="terminal-intro-welcome">{t.t("cmds.intro.welcome")}</p>
                        <p>{t.t("cmds.intro.site_intro_1")}</p>
                        <p>
                            {before}
                            {after.map(move |after| {
                                view! {
                                    <CmdLink command=HELP_COMMAND.to_string() action=help_action/>
                                    {after}
                                }
                            })}
                        </p>
                    </div>
                }
                .into_view()
            }
            OutputView::BuildInfo => {
                let rows =
                    build_info_rows(option_env!("BUILD_TIMESTAMP"), option_env!("IPNS_HASH"), t);
                view! {
                    <div class="terminal-build-info">
                        <div class="terminal-output-title">{t.t("cmds.build-info.title")}</div>
                        {rows
                            .into_iter()
                            .map(|(label, value)| view! { <div><span>{label}": "</span>{value}</div> })
                            .collect_view()}
                    </div>
                }
                .into_view()
            }
            OutputView::SetLang => {
                let message = set_lang_message(entry.option.as_deref(), t);
                view! { <div class="terminal-set-lang">{message}</div> }.into_view()
            }
            OutputView::Contact
            | OutputView::Contribs
            | OutputView::Web2Work
            | OutputView::Web3Work
            | OutputView::Whoami => {
                let body = t.t(&format!("cmds.{}.body", entry.cmd_name));
                view! { <p class="terminal-output-body">{body}</p> }.into_view()
            }
        }
    }

    fn render_unknown(&self, cmd_name: &str, t: &dyn Translator) -> View {
        view! { <span class="terminal-error">{unknown_command_message(cmd_name, t)}</span> }
            .into_view()
    }
}

/// Returns the labelled build metadata rows.
pub fn build_info_rows(
    timestamp: Option<&str>,
    ipns_name: Option<&str>,
    t: &dyn Translator,
) -> Vec<(String, String)> {
    vec![
        (
            t.t("cmds.build-info.time"),
            timestamp
                .map(str::to_string)
                .unwrap_or_else(|| t.t("cmds.build-info.unknown")),
        ),
        (
            t.t("cmds.build-info.ipns"),
            ipns_name
                .map(str::to_string)
                .unwrap_or_else(|| t.t("cmds.build-info.unconfigured")),
        ),
    ]
}

/// Describes the outcome of a `set-lang` entry.
pub fn set_lang_message(option: Option<&str>, t: &dyn Translator) -> String {
    match option.filter(|code| !code.is_empty()) {
        None => {
            let codes = Lang::ALL.map(Lang::code).join("|");
            format!("{}: {codes}", t.t("cmds.set-lang.missing"))
        }
        Some(code) => match Lang::from_code(code) {
            Some(lang) => format!("{} {}", t.t("cmds.set-lang.applied"), lang.label()),
            None => format!("{}: {code}", t.t("cmds.set-lang.unsupported")),
        },
    }
}

#[component]
fn HelpOutput(lines: Vec<(String, UsageLine)>) -> impl IntoView {
    lines
        .into_iter()
        .map(|(description, line)| {
            view! {
                <div class="terminal-help-line">
                    <span class="terminal-help-description">"- "{description}</span>
                    <CmdLink command=line.command hint=line.hint action=line.action/>
                </div>
            }
        })
        .collect_view()
}

#[component]
/// Clickable command name that drives the live prompt.
pub fn CmdLink(
    /// Command name shown on the link.
    command: String,
    /// Option or argument hint displayed after the name.
    #[prop(optional_no_strip)]
    hint: Option<String>,
    /// What clicking the link does.
    action: LinkAction,
) -> impl IntoView {
    let ctx = use_terminal_session();

    view! {
        <span class="terminal-cmd-link-row">
            <button
                type="button"
                class="terminal-cmd-link"
                on:click=move |ev| {
                    ev.stop_propagation();
                    match action.clone() {
                        LinkAction::Prefill(text) => ctx.set_input(text),
                        LinkAction::Simulate(text) => ctx.simulate(text),
                    }
                }
            >
                {command}
            </button>
            {hint.map(|hint| view! { <span class="terminal-cmd-hint">" "{hint}</span> })}
        </span>
    }
}
