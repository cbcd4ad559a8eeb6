//! Derived metrics over a ledger snapshot.
//!
//! Everything here is pure and side-effect-free: functions take the item
//! collection, the transaction log, and a reference time, and return numbers.
//! Safe to invoke on every render cycle.

pub mod kpi;
pub mod summary;

pub use kpi::KpiReport;
pub use summary::DashboardSummary;
