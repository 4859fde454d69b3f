use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use portfolio_terminal::TerminalApp;
use terminal_contract::Lang;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Portfolio terminal" />
        <Meta name="description" content="A personal site you browse by typing commands." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DefaultLocaleRedirect />
                    <Route path="/:locale" view=LocaleEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn DefaultLocaleRedirect() -> impl IntoView {
    view! { <Redirect path=locale_path(Lang::default()) /> }
}

fn locale_path(lang: Lang) -> String {
    format!("/{}", lang.code())
}

/// Terminal mounted under a `/:locale` route.
///
/// Unknown locales redirect to the default one. `set-lang` navigates to the new locale path while
/// the session, and its history, stays mounted.
#[component]
pub fn LocaleEntry() -> impl IntoView {
    let params = use_params_map();
    let requested = params.with_untracked(|map| map.get("locale").cloned());
    let Some(lang) = requested.as_deref().and_then(Lang::from_code) else {
        logging::warn!("unsupported locale `{}`", requested.unwrap_or_default());
        return view! { <Redirect path=locale_path(Lang::default()) /> }.into_view();
    };

    let html_lang = create_rw_signal(lang);
    let navigate = use_navigate();
    let on_lang_change = Callback::new(move |lang: Lang| {
        html_lang.set(lang);
        navigate(&locale_path(lang), NavigateOptions::default());
    });

    view! {
        <Html lang=move || html_lang.get().code() />
        <TerminalApp lang=lang on_lang_change=on_lang_change />
    }
    .into_view()
}
