//! Shared handler state

use crate::core::models::UserId;
use crate::core::ports::{ClaimStore, IdentityProvider};
use crate::core::services::ClaimService;

/// Default claim length limit, matching the submission form
pub const DEFAULT_MAX_CLAIM_CHARS: usize = 500;

/// Everything the handlers need: the claim service, identity and limits
pub struct ApiState {
    claims: ClaimService,
    identity: Box<dyn IdentityProvider>,
    max_claim_chars: usize,
}

impl std::fmt::Debug for ApiState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiState")
            .field("max_claim_chars", &self.max_claim_chars)
            .finish_non_exhaustive()
    }
}

impl ApiState {
    /// Create state over a store and identity provider
    #[must_use]
    pub fn new(store: Box<dyn ClaimStore>, identity: Box<dyn IdentityProvider>) -> Self {
        Self {
            claims: ClaimService::new(store),
            identity,
            max_claim_chars: DEFAULT_MAX_CLAIM_CHARS,
        }
    }

    /// Override the claim length limit (0 disables it)
    #[must_use]
    pub fn with_max_claim_chars(mut self, max: usize) -> Self {
        self.max_claim_chars = max;
        self
    }

    /// Claim service
    #[must_use]
    pub const fn claims(&self) -> &ClaimService {
        &self.claims
    }

    /// Configured claim length limit
    #[must_use]
    pub const fn max_claim_chars(&self) -> usize {
        self.max_claim_chars
    }

    /// Resolve an `Authorization` header value to a caller
    #[must_use]
    pub fn authenticate(&self, authorization: Option<&str>) -> Option<UserId> {
        self.identity.authenticate(authorization)
    }
}
