//! Signed-in identity and its display name.

use serde::Serialize;

use crate::domain::foundation::ValidationError;

/// Who is signed in. Set once at login and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    login: String,
    display_name: String,
}

impl Identity {
    /// Builds an identity from the login e-mail.
    ///
    /// The display name is the first dot-separated segment of the local
    /// part, capitalised: `yannick.v@maison.com` becomes `Yannick`.
    /// The domain is always dropped, so a dot-less address such as
    /// `yannick@maison.com` also gives `Yannick` rather than `Yannick@maison`.
    /// A login that yields no name is rejected before any credential check.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if no display name can be derived
    pub fn from_login(login: impl Into<String>) -> Result<Self, ValidationError> {
        let login = login.into().trim().to_string();
        let display_name = derive_display_name(&login);
        if display_name.is_empty() {
            return Err(ValidationError::empty_field("identity"));
        }
        Ok(Self {
            login,
            display_name,
        })
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

fn derive_display_name(login: &str) -> String {
    let local = login.split('@').next().unwrap_or_default();
    let first = local.split('.').next().unwrap_or_default().trim();

    let mut chars = first.chars();
    match chars.next() {
        Some(head) => head
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
