//! Root application component with context providers and screen
//! switching.

use leptos::prelude::*;

use crate::net::api::AuthClient;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::session::SessionVault;
use crate::state::auth::{self, AuthState};
use crate::state::ui::{Screen, UiState};
use crate::storage::BrowserStorage;

/// Root application component.
///
/// Reads durable storage once to restore a surviving session, provides
/// the shared state contexts, and switches between the auth screens.
#[component]
pub fn App() -> impl IntoView {
    let vault = SessionVault::new(BrowserStorage);
    let auth = RwSignal::new(AuthState::restore(&vault));
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ui);

    view! {
        <main class="app">
            {move || {
                if auth.get().is_authenticated() {
                    return view! { <WelcomeView/> }.into_any();
                }
                match ui.get().screen {
                    Screen::Login => view! { <LoginPage/> }.into_any(),
                    Screen::Register => view! { <RegisterPage/> }.into_any(),
                    Screen::ForgotPassword => view! { <ForgotPasswordPage/> }.into_any(),
                }
            }}
        </main>
    }
}

/// Signed-in placeholder: the league management screens hang off this
/// once a session exists.
#[component]
fn WelcomeView() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| {
        let client = AuthClient::browser();
        auth::logout(auth, &client);
    };

    let who = move || {
        auth.get()
            .session
            .and_then(|s| s.user.email)
            .unwrap_or_else(|| "usuario".to_owned())
    };

    view! {
        <section class="welcome">
            <h1>"Bienvenido"</h1>
            <p class="welcome__who">{who}</p>
            <button type="button" class="btn" on:click=on_logout>
                "Cerrar sesión"
            </button>
        </section>
    }
}
