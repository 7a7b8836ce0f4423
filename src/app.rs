use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::pages::{HomePage, NotFoundPage};
use crate::ui::{AnimationStyles, DefaultLocale, provide_site_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Server renders in the configured default; the client reads it back
    let DefaultLocale(locale) = use_context::<DefaultLocale>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang=locale.code() dir=locale.direction().as_str()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Locale, menu, loading and overlay state shared by every section
    provide_site_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/junction.css"/>
        <AnimationStyles />

        <Title text="The Junction Dubai"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("") view=HomePage />
            </Routes>
        </Router>
    }
}
