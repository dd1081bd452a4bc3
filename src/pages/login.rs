//! Login page: email + password against `/api/auth/login`.

use leptos::prelude::*;

use crate::net::api::AuthClient;
use crate::state::auth::{self, AuthState};
use crate::state::ui::{Screen, UiState};
use crate::util::validate::{FieldErrors, validate_login};

/// Login form. Validation failures stay inline per field; a rejected
/// login shows the store's banner message.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let field_errors = validate_login(&email.get_untracked(), &password.get_untracked());
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());

        leptos::task::spawn_local(async move {
            let client = AuthClient::browser();
            match auth::login(
                auth,
                &client,
                &email.get_untracked(),
                &password.get_untracked(),
            )
            .await
            {
                Ok(session) => log::info!("login ok, user {:?}", session.user.id),
                Err(err) => log::warn!("login failed: {err}"),
            }
        });
    };

    // Navigating away dismisses any leftover banner.
    let go_to = move |screen: Screen| {
        move |_| {
            auth::clear_error(auth);
            ui.update(|u| u.screen = screen);
        }
    };

    view! {
        <div class="auth-page">
            <header class="auth-page__header">
                <h1>"Liga"</h1>
                <p>"Inicia sesión para gestionar tu liga"</p>
            </header>

            <form class="auth-form" on:submit=on_submit>
                {move || {
                    auth.get().error.map(|msg| {
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

                <label class="auth-form__field">
                    "Contraseña"
                    <input
                        type="password"
                        placeholder="••••••••"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <span class="auth-form__error">{move || errors.get().password}</span>
                </label>

                <button
                    type="button"
                    class="auth-form__link"
                    on:click=go_to(Screen::ForgotPassword)
                >
                    "¿Olvidaste tu contraseña?"
                </button>

                <button
                    type="submit"
                    class="btn btn--primary"
                    disabled=move || auth.get().loading()
                >
                    {move || if auth.get().loading() { "Entrando..." } else { "Iniciar Sesión" }}
                </button>
            </form>

            <p class="auth-page__footer">
                "¿No tienes cuenta? "
                <button type="button" class="auth-form__link" on:click=go_to(Screen::Register)>
                    "Regístrate aquí"
                </button>
            </p>
        </div>
    }
}
