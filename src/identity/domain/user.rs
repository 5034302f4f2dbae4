//! Authenticated user value types and profile display helpers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Display name used when no profile information is available.
pub const GUEST_NAME: &str = "Guest";

/// Initial used when no display name is available.
pub const GUEST_INITIAL: char = 'G';

const NAME_KEYS: [&str; 4] = ["preferred_username", "display_name", "full_name", "name"];

const AVATAR_KEYS: [&str; 7] = [
    "avatar_url",
    "picture",
    "avatar",
    "image",
    "image_url",
    "photo_url",
    "profile_image",
];

/// Opaque identifier issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wraps an identity-provider user identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Authenticated user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: Option<String>,
    #[serde(default)]
    metadata: Map<String, Value>,
}

impl User {
    /// Creates a user with no email or profile metadata.
    #[must_use]
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            email: None,
            metadata: Map::new(),
        }
    }

    /// Sets the user's email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Adds a profile metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the email address, if known.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the name shown in account menus.
    ///
    /// Prefers profile metadata, then the local part of the email address,
    /// then [`GUEST_NAME`].
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = first_non_blank(&self.metadata, &NAME_KEYS) {
            return name.to_owned();
        }

        self.email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .filter(|local| !local.is_empty())
            .map_or_else(|| GUEST_NAME.to_owned(), str::to_owned)
    }

    /// Returns the profile picture URL, if the provider supplied one.
    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        first_non_blank(&self.metadata, &AVATAR_KEYS)
    }
}

/// Returns the upper-cased first character of a display name.
#[must_use]
pub fn user_initial(name: Option<&str>) -> char {
    name.map(str::trim)
        .and_then(|trimmed| trimmed.chars().next())
        .and_then(|first| first.to_uppercase().next())
        .unwrap_or(GUEST_INITIAL)
}

fn first_non_blank<'a>(metadata: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| metadata.get(*key).and_then(Value::as_str))
        .find(|value| !value.trim().is_empty())
}
