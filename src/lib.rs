//! Maintenance commands for the audit-log database: create upcoming monthly
//! partitions and drop expired ones per service. The partitioning itself lives
//! in server-side routines; this client resolves month ranges, drives the
//! calls transactionally and reports what happened.

pub mod cli;
pub mod config;
pub mod error;
pub mod month;
pub mod queries;
