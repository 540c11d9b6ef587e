//! Identity provider port

use super::super::models::UserId;

/// Resolves a request credential to a user
///
/// `None` means the caller is anonymous; implementations never fail loudly,
/// an unknown credential is simply unauthenticated.
pub trait IdentityProvider: Send + Sync {
    /// Resolve a credential (for example a bearer token)
    fn authenticate(&self, credential: Option<&str>) -> Option<UserId>;
}
