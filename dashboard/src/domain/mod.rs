//! Dashboard domain: entities, policy, dispatch, filtering, and aggregation.
//!
//! Purpose: hold the role-aware core behind the recruitment-operations
//! dashboard. Everything is synchronous and pure apart from the single
//! bounded append inside `dispatch::submit`; filter and report functions are
//! deterministic reads over `(&RecordStore, &FilterState)`.
//!
//! Public surface:
//! - Records and value types — `Candidate`, `Recruiter`, `Client`, `Closure`,
//!   `Email`, `ScaledDecimal`, `Role`.
//! - `policy` — `Action`, `allowed_actions`, `authorize`.
//! - `dispatch` — per-action schemas and `submit`.
//! - `filter` — `FilterState` and the visible record sequences.
//! - `report` — KPI tiles, performance cards, matrix, and summaries.
//! - `session` — `DashboardSession`, the facade the presentation layer holds.

pub mod decimal;
pub mod dispatch;
pub mod email;
pub mod filter;
pub mod policy;
pub mod records;
pub mod report;
pub mod role;
pub mod session;
pub mod store;

pub use self::decimal::{ScaledDecimal, ScaledDecimalValidationError};
pub use self::dispatch::{DispatchError, FieldError, Payload};
pub use self::email::{Email, EmailValidationError};
pub use self::filter::{
    FilterState, KpiKind, ParseKpiKindError, PeriodFilter, ScopeFilter, TableView,
};
pub use self::policy::{allowed_actions, authorize, Action, ParseActionError};
pub use self::records::{
    Candidate, CandidateStatus, Client, Closure, ParseCandidateStatusError, Record, Recruiter,
};
pub use self::report::{
    CandidateSummary, CardKind, DepartmentBreakdown, KpiTile, PerformanceCard, TopPerformer, Trend,
};
pub use self::role::{ParseRoleError, Role};
pub use self::session::DashboardSession;
pub use self::store::RecordStore;
