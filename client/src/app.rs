//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::AppConfig;
use crate::pages::{
    feed::FeedPage, home::HomePage, login::LoginPage, reset_password::ResetPasswordPage, signup::SignupPage,
    update_password::UpdatePasswordPage,
};
use crate::state::auth::AuthServices;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is published to the browser bundle as `window.BOARD_CONFIG`.
pub fn shell(options: LeptosOptions, config: AppConfig) -> impl IntoView {
    let runtime_config = config.to_script();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=runtime_config></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Composition root for auth: builds the identity provider from the public
/// config (provided by the host during SSR, read from `window.BOARD_CONFIG`
/// in the browser) and shares it through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<AppConfig>().unwrap_or_else(AppConfig::load);
    if !config.is_configured() {
        log::warn!("identity provider is not configured; every protected page will redirect to login");
    }
    provide_context(AuthServices::hosted(config));

    // Email links may land on any page, gated or not.
    #[cfg(feature = "hydrate")]
    crate::net::token_store::adopt_session_from_location();

    view! {
        <Stylesheet id="leptos" href="/pkg/community-board.css"/>
        <Title text="Community Board"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                <Route path=StaticSegment("update-password") view=UpdatePasswordPage/>
                <Route path=StaticSegment("app") view=FeedPage/>
            </Routes>
        </Router>
    }
}
