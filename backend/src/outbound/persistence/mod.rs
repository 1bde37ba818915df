//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the read-side repository ports, backed by
//! PostgreSQL via `diesel-async` and a `bb8` pool.
//!
//! - **One shared handle**: repositories hold an `Arc<DbConnectionManager>`
//!   created at startup; the pool itself is built on first use.
//! - **Thin adapters**: repositories only translate Diesel rows into port
//!   results. Validation and ordering live in the domain services.
//! - **Internal schema**: `schema.rs` is private to this module.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use coursehub::outbound::persistence::{
//!     DbConnectionManager, DieselEnrollmentRepository, PoolConfig,
//! };
//!
//! let connections = Arc::new(DbConnectionManager::postgres(PoolConfig::new(
//!     "postgres://localhost/coursehub",
//! )));
//! let enrollments = DieselEnrollmentRepository::new(Arc::clone(&connections));
//! # let _ = enrollments;
//! ```

mod connection;
mod diesel_basic_error_mapping;
mod diesel_course_repository;
mod diesel_enrollment_repository;
mod pool;
mod schema;

pub use connection::{ConnectionManager, Connector, DbConnectionManager, PgConnector};
pub use diesel_course_repository::DieselCourseRepository;
pub use diesel_enrollment_repository::DieselEnrollmentRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
