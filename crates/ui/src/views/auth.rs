use asked_core::model::{LoginDraft, RegisterDraft};
use chrono::{Datelike, Utc};
use dioxus::prelude::*;

use crate::context::{AppContext, SessionSignal};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
}

/// Full-screen sign-in gate shown until a session exists.
#[component]
pub fn AuthView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<SessionSignal>();
    let mut mode = use_signal(|| AuthMode::Login);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let year = Utc::now().year();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let auth = ctx.auth();
        let current_mode = mode();
        let mut session = session.0;
        spawn(async move {
            busy.set(true);
            error.set(None);
            let outcome = match current_mode {
                AuthMode::Login => {
                    let draft = LoginDraft {
                        username: username(),
                        password: password(),
                    };
                    auth.login(draft).await
                }
                AuthMode::Register => {
                    let draft = RegisterDraft {
                        username: username(),
                        email: email(),
                        password: password(),
                        confirm_password: confirm(),
                    };
                    auth.register(draft).await
                }
            };
            match outcome {
                Ok(new_session) => session.set(Some(new_session)),
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    let is_login = mode() == AuthMode::Login;
    let title = if is_login { "Login" } else { "Register" };
    let username_placeholder = if is_login {
        "Enter your username"
    } else {
        "Choose a username"
    };
    let password_placeholder = if is_login {
        "Enter your password"
    } else {
        "Create a password (min 6 characters)"
    };
    let submit_label = match (is_login, busy()) {
        (true, true) => "Logging in...",
        (true, false) => "Login",
        (false, true) => "Creating account...",
        (false, false) => "Register",
    };

    rsx! {
        div { class: "auth-screen",
            header { class: "app-header",
                h1 { class: "app-title", "AskEd AI Assistant" }
                p { class: "app-tagline",
                    "Summarize, generate flashcards, and quizzes from your documents"
                }
            }
            main { class: "auth-main",
                div { class: "auth-card",
                    h2 { class: "auth-title", "{title}" }
                    if let Some(message) = error() {
                        div { class: "form-error", "{message}" }
                    }
                    form {
                        onsubmit: submit,
                        div { class: "form-field",
                            label { r#for: "username", "Username" }
                            input {
                                id: "username",
                                r#type: "text",
                                placeholder: "{username_placeholder}",
                                value: "{username()}",
                                oninput: move |evt| username.set(evt.value()),
                            }
                        }
                        if !is_login {
                            div { class: "form-field",
                                label { r#for: "email", "Email" }
                                input {
                                    id: "email",
                                    r#type: "email",
                                    placeholder: "Enter your email",
                                    value: "{email()}",
                                    oninput: move |evt| email.set(evt.value()),
                                }
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "password", "Password" }
                            input {
                                id: "password",
                                r#type: "password",
                                placeholder: "{password_placeholder}",
                                value: "{password()}",
                                oninput: move |evt| password.set(evt.value()),
                            }
                        }
                        if !is_login {
                            div { class: "form-field",
                                label { r#for: "confirm-password", "Confirm Password" }
                                input {
                                    id: "confirm-password",
                                    r#type: "password",
                                    placeholder: "Confirm your password",
                                    value: "{confirm()}",
                                    oninput: move |evt| confirm.set(evt.value()),
                                }
                            }
                        }
                        button {
                            class: "btn btn-primary auth-submit",
                            r#type: "submit",
                            disabled: busy(),
                            "{submit_label}"
                        }
                    }
                    p { class: "auth-switch",
                        if is_login {
                            "Don't have an account? "
                            button {
                                class: "link-button",
                                r#type: "button",
                                onclick: move |_| {
                                    mode.set(AuthMode::Register);
                                    error.set(None);
                                },
                                "Register here"
                            }
                        } else {
                            "Already have an account? "
                            button {
                                class: "link-button",
                                r#type: "button",
                                onclick: move |_| {
                                    mode.set(AuthMode::Login);
                                    error.set(None);
                                },
                                "Login here"
                            }
                        }
                    }
                }
            }
            footer { class: "app-footer",
                "© {year} AskEd AI. All rights reserved."
            }
        }
    }
}
