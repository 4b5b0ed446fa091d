//! Record entities held by the store.
//!
//! All four collections are append-only: records are immutable once created
//! and only the action dispatcher creates them.

pub mod candidate;
pub mod client;
pub mod closure;
pub mod recruiter;

pub use self::candidate::{Candidate, CandidateStatus, ParseCandidateStatusError};
pub use self::client::Client;
pub use self::closure::Closure;
pub use self::recruiter::Recruiter;

use serde::Serialize;
use uuid::Uuid;

/// A freshly created record of any entity type.
///
/// Returned by the dispatcher so callers can show what was added without
/// knowing the action kind up front.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Record {
    /// A new candidate.
    Candidate(Candidate),
    /// A new recruiter.
    Recruiter(Recruiter),
    /// A new client.
    Client(Client),
    /// A new closure.
    Closure(Closure),
}

impl Record {
    /// Identity of the wrapped record.
    pub fn id(&self) -> Uuid {
        match self {
            Self::Candidate(candidate) => candidate.id,
            Self::Recruiter(recruiter) => recruiter.id,
            Self::Client(client) => client.id,
            Self::Closure(closure) => closure.id,
        }
    }
}
