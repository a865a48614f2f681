//! Tenant-facing pages and the document shells they share.

pub mod ics;
pub mod shell;
pub mod volunteering;
