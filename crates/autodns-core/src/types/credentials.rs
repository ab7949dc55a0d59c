use serde::{Deserialize, Serialize};
use std::fmt;

/// Gateway login, sent verbatim in the `<auth>` block of every request.
///
/// The gateway decides whether the values are valid; nothing is checked
/// locally.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account user name
    pub user: String,

    /// Account password
    pub password: String,

    /// Registry context (numeric string, e.g. "4")
    pub context: String,

    /// Address asynchronous replies are routed to. Never sent in `<auth>`.
    #[serde(default)]
    pub email: Option<String>,
}

impl Credentials {
    /// Create a new credential set
    #[must_use]
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
            context: context.into(),
            email: None,
        }
    }

    /// Set the notification email
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("context", &self.context)
            .field("email", &self.email)
            .finish()
    }
}
