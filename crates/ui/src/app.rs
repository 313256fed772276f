use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::{
    AppContext, DarkModeSignal, SessionSignal, SharedContent, SharedContentSignal,
};
use crate::routes::Route;
use crate::views::AuthView;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();

    let session = use_signal(|| ctx.initial_session());
    let dark = use_signal(|| ctx.initial_dark_mode());
    let shared = use_signal(SharedContent::default);
    use_context_provider(|| SessionSignal(session));
    use_context_provider(|| DarkModeSignal(dark));
    use_context_provider(|| SharedContentSignal(shared));

    let root_class = if dark() { "app-root dark" } else { "app-root" };

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "AskEd AI Assistant" }

        div { class: "{root_class}",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                if session().is_some() {
                    Router::<Route> {}
                } else {
                    AuthView {}
                }
            }
        }
    }
}
