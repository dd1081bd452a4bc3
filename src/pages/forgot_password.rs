//! Password reset request page.

use leptos::prelude::*;

use crate::net::api::AuthClient;
use crate::state::ui::{Screen, UiState};
use crate::util::validate::{FieldErrors, validate_forgot_password};

/// Forgot-password form: fire-and-forget email request with local
/// status handling (this flow never touches the session store).
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let pending = RwSignal::new(false);
    let sent = RwSignal::new(false);
    let banner = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let field_errors = validate_forgot_password(&email.get_untracked());
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());
        banner.set(None);
        pending.set(true);

        leptos::task::spawn_local(async move {
            let client = AuthClient::browser();
            match client.forgot_password(&email.get_untracked()).await {
                Ok(_) => sent.set(true),
                Err(err) => {
                    log::warn!("forgot password failed: {err}");
                    let msg = err
                        .server_message()
                        .unwrap_or("Error al enviar el email de recuperación")
                        .to_owned();
                    banner.set(Some(msg));
                }
            }
            pending.set(false);
        });
    };

    let go_to_login = move |_| ui.update(|u| u.screen = Screen::Login);

    view! {
        <div class="auth-page">
            <header class="auth-page__header">
                <h1>"Recuperar contraseña"</h1>
                <p>"Te enviaremos un email con instrucciones"</p>
            </header>

            {move || {
                if sent.get() {
                    view! {
                        <div class="auth-form__success">
                            <p>"Si el email existe, recibirás las instrucciones en breve."</p>
                            <button type="button" class="auth-form__link" on:click=go_to_login>
                                "Volver al Login"
                            </button>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <form class="auth-form" on:submit=on_submit>
                            {move || {
                                banner.get().map(|msg| {
                                    view! { <div class="auth-form__banner">{msg}</div> }
                                })
                            }}

                            <label class="auth-form__field">
                                "Email"
                                <input
                                    type="email"
                                    placeholder="tu@email.com"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                                <span class="auth-form__error">{move || errors.get().email}</span>
                            </label>

                            <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                                {move || if pending.get() { "Enviando..." } else { "Enviar" }}
                            </button>
                        </form>
                    }
                        .into_any()
                }
            }}

            <p class="auth-page__footer">
                <button type="button" class="auth-form__link" on:click=go_to_login>
                    "Volver al Login"
                </button>
            </p>
        </div>
    }
}
