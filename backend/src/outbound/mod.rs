//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM, plus
//!   the shared connection manager
//! - **memory**: in-process repositories over fixed record sets, used for
//!   local runs and behavioural tests
//!
//! Adapters only translate between domain types and store representations.

pub mod memory;
pub mod persistence;
