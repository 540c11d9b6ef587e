//! Claims and the identifiers attached to them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Verdict;

/// Prefix used when rendering claim identifiers
const ID_PREFIX: &str = "CLM-";

/// Store-assigned claim identifier, rendered as `CLM-<n>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ClaimId(u64);

impl ClaimId {
    /// Wrap a raw sequence number
    #[must_use]
    pub const fn new(seq: u64) -> Self {
        Self(seq)
    }

    /// The raw sequence number
    #[must_use]
    pub const fn seq(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ClaimId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{ID_PREFIX}{}", self.0)
    }
}

impl std::str::FromStr for ClaimId {
    type Err = String;

    /// Accepts `CLM-12`, `clm-12` or a bare `12`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = match trimmed.get(..ID_PREFIX.len()) {
            Some(head) if head.eq_ignore_ascii_case(ID_PREFIX) => &trimmed[ID_PREFIX.len()..],
            _ => trimmed,
        };
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| format!("Invalid claim id: {s}"))
    }
}

impl From<ClaimId> for String {
    fn from(id: ClaimId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for ClaimId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Authenticated user identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a user id; blank ids are rejected
    #[must_use]
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Borrow the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A classified claim ready to be persisted (no id yet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClaim {
    /// Claim text as submitted
    pub text: String,
    /// Owner of the claim
    pub owner: UserId,
    /// Classification outcome
    pub verdict: Verdict,
    /// Why the verdict was reached
    pub explanation: String,
    /// Companion remark drawn from the verdict's pool
    pub witty_remark: String,
    /// Unrelated trivia shown alongside
    pub bonus_fact: String,
    /// Submission time
    pub created_at: DateTime<Utc>,
    /// Classification time
    pub processed_at: DateTime<Utc>,
}

impl NewClaim {
    /// Attach a store-assigned id
    #[must_use]
    pub fn with_id(self, id: ClaimId) -> Claim {
        Claim {
            id,
            text: self.text,
            owner: self.owner,
            verdict: self.verdict,
            explanation: self.explanation,
            witty_remark: self.witty_remark,
            bonus_fact: self.bonus_fact,
            created_at: self.created_at,
            processed_at: self.processed_at,
        }
    }
}

/// A persisted claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim identifier
    pub id: ClaimId,
    /// Claim text as submitted
    pub text: String,
    /// Owner of the claim
    pub owner: UserId,
    /// Classification outcome
    pub verdict: Verdict,
    /// Why the verdict was reached
    pub explanation: String,
    /// Companion remark drawn from the verdict's pool
    pub witty_remark: String,
    /// Unrelated trivia shown alongside
    pub bonus_fact: String,
    /// Submission time
    pub created_at: DateTime<Utc>,
    /// Classification time
    pub processed_at: DateTime<Utc>,
}

impl Claim {
    /// Key for "newest first" ordering: creation time, then id
    #[must_use]
    pub fn recency_key(&self) -> (DateTime<Utc>, ClaimId) {
        (self.created_at, self.id)
    }

    /// Whether `user` owns this claim
    #[must_use]
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        &self.owner == user
    }
}

/// Sort claims newest first
pub fn sort_newest_first(claims: &mut [Claim]) {
    claims.sort_by(|a, b| b.recency_key().cmp(&a.recency_key()));
}
