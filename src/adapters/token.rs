//! Static bearer-token identity provider
//!
//! Maps tokens listed under `[auth.tokens]` in the config file to user ids.

use std::collections::HashMap;

use crate::core::models::UserId;
use crate::core::ports::IdentityProvider;

/// Identity provider backed by a fixed token table
#[derive(Debug, Clone, Default)]
pub struct TokenIdentity {
    tokens: HashMap<String, UserId>,
}

impl TokenIdentity {
    /// Build from `token -> user` pairs; entries with a blank user are skipped
    #[must_use]
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let tokens = pairs
            .into_iter()
            .filter_map(|(token, user)| UserId::new(user).map(|id| (token.into(), id)))
            .collect();
        Self { tokens }
    }

    /// Number of configured tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no tokens are configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Extract the token from an `Authorization` header value
///
/// Accepts `Bearer <token>` (scheme is case-insensitive) or a bare token.
#[must_use]
pub fn bearer_token(header: &str) -> Option<&str> {
    let header = header.trim();
    let token = match header.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        Some(_) => return None,
        None => header,
    };
    (!token.is_empty()).then_some(token)
}

impl IdentityProvider for TokenIdentity {
    fn authenticate(&self, credential: Option<&str>) -> Option<UserId> {
        let token = bearer_token(credential?)?;
        self.tokens.get(token).cloned()
    }
}
