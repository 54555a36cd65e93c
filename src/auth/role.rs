//! Account roles and the role → destination mapping.
//!
//! DESIGN
//! ======
//! `dashboard_path` is the single source of truth for post-login and
//! header navigation; both call sites share it so the mapping cannot
//! drift. It selects a navigation target only — access control happens
//! server-side.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Account role stored on the user's profile document.
///
/// The store types `role` as an open string; values outside the three
/// recognized ones are preserved as [`Role::Other`] and echoed verbatim
/// where displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Seller,
    Buyer,
    Other(String),
}

impl Role {
    /// Parse a stored role string. Never fails; unrecognized values
    /// become [`Role::Other`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "admin" => Self::Admin,
            "seller" => Self::Seller,
            "buyer" => Self::Buyer,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Seller => "seller",
            Self::Buyer => "buyer",
            Self::Other(raw) => raw,
        }
    }

    /// Post-login destination for this role.
    ///
    /// Total mapping: admin and seller get their dashboards, everything
    /// else lands on the public listing view.
    #[must_use]
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Seller => "/seller",
            Self::Buyer | Self::Other(_) => "/browse",
        }
    }

    /// Localized label shown in the header user menu. Display only.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Admin => "مدير",
            Self::Seller => "بائع",
            Self::Buyer => "مشتري",
            Self::Other(raw) => raw,
        }
    }

    /// Whether the header shows the public listing link for this role.
    /// Sellers navigate their own inventory instead.
    #[must_use]
    pub fn browses_listings(&self) -> bool {
        matches!(self, Self::Admin | Self::Buyer)
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
