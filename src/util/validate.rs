//! Client-side form validation.
//!
//! Runs before any network call; a form that fails here never produces
//! a request. Messages are the user-facing field copy, so they stay in
//! the product's language.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Per-field validation messages. Empty means the form may be
/// submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub league_name: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
            && self.league_name.is_none()
    }
}

/// Lenient `name@host.tld` shape check.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}

fn email_error(email: &str) -> Option<String> {
    if email.is_empty() {
        Some("El email es requerido".to_owned())
    } else if !is_valid_email(email) {
        Some("Email inválido".to_owned())
    } else {
        None
    }
}

/// Validate the login form: email shape plus a 6-character password
/// minimum.
pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let password_error = if password.is_empty() {
        Some("La contraseña es requerida".to_owned())
    } else if password.chars().count() < 6 {
        Some("La contraseña debe tener al menos 6 caracteres".to_owned())
    } else {
        None
    };

    FieldErrors {
        email: email_error(email),
        password: password_error,
        ..FieldErrors::default()
    }
}

fn has_required_mix(password: &str) -> bool {
    password.chars().any(char::is_lowercase)
        && password.chars().any(char::is_uppercase)
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Validate the SuperAdmin registration form. Registration passwords
/// are held to a stricter bar than login: 8 characters minimum with an
/// upper/lower/digit mix, plus a matching confirmation and a league
/// name of at least 3 characters.
pub fn validate_registration(
    email: &str,
    password: &str,
    confirm_password: &str,
    league_name: &str,
) -> FieldErrors {
    let password_error = if password.is_empty() {
        Some("La contraseña es requerida".to_owned())
    } else if password.chars().count() < 8 {
        Some("La contraseña debe tener al menos 8 caracteres".to_owned())
    } else if !has_required_mix(password) {
        Some("Debe contener mayúsculas, minúsculas y números".to_owned())
    } else {
        None
    };

    let confirm_error = if confirm_password.is_empty() {
        Some("Confirma tu contraseña".to_owned())
    } else if confirm_password != password {
        Some("Las contraseñas no coinciden".to_owned())
    } else {
        None
    };

    let league_error = if league_name.is_empty() {
        Some("El nombre de la liga es requerido".to_owned())
    } else if league_name.chars().count() < 3 {
        Some("Debe tener al menos 3 caracteres".to_owned())
    } else {
        None
    };

    FieldErrors {
        email: email_error(email),
        password: password_error,
        confirm_password: confirm_error,
        league_name: league_error,
    }
}

/// Validate the forgot-password form (email only).
pub fn validate_forgot_password(email: &str) -> FieldErrors {
    FieldErrors {
        email: email_error(email),
        ..FieldErrors::default()
    }
}
