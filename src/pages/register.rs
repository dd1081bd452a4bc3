//! SuperAdmin registration page: the first user creates their league.

use leptos::prelude::*;

use crate::net::api::AuthClient;
use crate::state::auth::{self, AuthState};
use crate::state::ui::{Screen, UiState};
use crate::util::validate::{FieldErrors, validate_registration};

/// Registration form. A successful registration does not sign the user
/// in; the account must be verified by email first.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let league_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let registered = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let field_errors = validate_registration(
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm_password.get_untracked(),
            &league_name.get_untracked(),
        );
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());

        leptos::task::spawn_local(async move {
            let client = AuthClient::browser();
            match auth::register_super_admin(
                auth,
                &client,
                &email.get_untracked(),
                &password.get_untracked(),
                &league_name.get_untracked(),
            )
            .await
            {
                Ok(_) => {
                    registered.set(true);
                    league_name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(err) => log::warn!("registration failed: {err}"),
            }
        });
    };

    let go_to_login = move |_| {
        auth::clear_error(auth);
        ui.update(|u| u.screen = Screen::Login);
    };

    view! {
        <div class="auth-page">
            <header class="auth-page__header">
                <h1>"Crear Liga"</h1>
                <p>"Regístrate como SuperAdmin y crea tu liga"</p>
            </header>

            {move || {
                if registered.get() {
                    view! {
                        <div class="auth-form__success">
                            <p>"¡Registro exitoso!"</p>
                            <p>"Revisa tu email para verificar tu cuenta antes de iniciar sesión."</p>
                            <button type="button" class="auth-form__link" on:click=go_to_login>
                                "Ir al Login"
                            </button>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <form class="auth-form" on:submit=on_submit>
                            {move || {
                                auth.get().error.map(|msg| {
                                    view! { <div class="auth-form__banner">{msg}</div> }
                                })
                            }}

                            <label class="auth-form__field">
                                "Nombre de tu Liga"
                                <input
                                    type="text"
                                    placeholder="Ej: Liga Deportiva Municipal"
                                    prop:value=move || league_name.get()
                                    on:input=move |ev| league_name.set(event_target_value(&ev))
                                />
                                <span class="auth-form__error">{move || errors.get().league_name}</span>
                            </label>

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

                            <label class="auth-form__field">
                                "Confirmar Contraseña"
                                <input
                                    type="password"
                                    placeholder="••••••••"
                                    prop:value=move || confirm_password.get()
                                    on:input=move |ev| confirm_password.set(event_target_value(&ev))
                                />
                                <span class="auth-form__error">
                                    {move || errors.get().confirm_password}
                                </span>
                            </label>

                            <div class="auth-form__hint">
                                <p>"Requisitos de contraseña:"</p>
                                <ul>
                                    <li>"Mínimo 8 caracteres"</li>
                                    <li>"Al menos una mayúscula y una minúscula"</li>
                                    <li>"Al menos un número"</li>
                                </ul>
                            </div>

                            <button
                                type="submit"
                                class="btn btn--primary"
                                disabled=move || auth.get().loading()
                            >
                                {move || {
                                    if auth.get().loading() {
                                        "Creando..."
                                    } else {
                                        "Crear Liga y Registrarse"
                                    }
                                }}
                            </button>
                        </form>
                    }
                        .into_any()
                }
            }}

            <p class="auth-page__footer">
                "¿Ya tienes cuenta? "
                <button type="button" class="auth-form__link" on:click=go_to_login>
                    "Inicia sesión aquí"
                </button>
            </p>
        </div>
    }
}
