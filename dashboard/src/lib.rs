//! Role-aware recruitment-operations dashboard core.
//!
//! Four roles share one set of KPI and performance data but differ in which
//! create-record actions they may invoke and which records they act on. This
//! crate holds the pure core behind that dashboard: the role access policy,
//! the validating action dispatcher, the cross-filtering engine with KPI
//! drill-down, and the stateless aggregation reporter. Rendering, routing,
//! authentication, and persistence are collaborators supplied by the caller.

pub mod domain;
pub mod example_data;

pub use domain::DashboardSession;
