//! # jobboard
//!
//! Data-access core for a job-board backend on PostgreSQL.
//!
//! ## Features
//!
//! - **SQL explicit**: statements are assembled as text plus a positional
//!   parameter list (`$1, $2, ...`), never by interpolating values
//! - **Partial updates**: [`assignment_clause`] turns an ordered field list
//!   into a ready-to-splice `SET` fragment with deterministic numbering
//! - **Filtered listing**: [`JobFilter`] composes only the predicates the
//!   caller supplied, always with a stable `ORDER BY`
//! - **Transaction-friendly**: every operation takes `&impl GenericClient`,
//!   so a `tokio_postgres::Transaction` works anywhere a client does
//! - **Closed error set**: validation, not-found and storage failures are
//!   distinct variants of one enum, dispatched by exhaustive matching
//!
//! ## Example
//!
//! ```ignore
//! use jobboard::{job, JobFilter, UpdateFields};
//!
//! let pool = jobboard::create_pool(&std::env::var("DATABASE_URL")?)?;
//! let client = pool.get().await?;
//!
//! let senior = job::find_all(
//!     &client,
//!     &JobFilter {
//!         title: Some("engineer".into()),
//!         min_salary: Some(90_000),
//!         has_equity: Some(true),
//!     },
//! )
//! .await?;
//!
//! let fields = UpdateFields::new().set("salary", 120_000_i32);
//! let updated = job::update(&client, senior[0].id, &fields).await?;
//! ```

pub mod client;
pub mod error;
pub mod filter;
pub mod job;
pub mod param;
pub mod row;
pub mod sql;

pub use client::GenericClient;
pub use error::{BoardError, BoardResult};
pub use filter::JobFilter;
pub use job::{Job, NewJob};
pub use param::{Param, ParamList};
pub use row::{FromRow, RowExt};
pub use sql::{AssignmentClause, ColumnMap, UpdateFields, assignment_clause};

#[cfg(feature = "pool")]
pub mod pool;

#[cfg(feature = "pool")]
pub use pool::{create_pool, create_pool_with_config};

#[cfg(feature = "migrate")]
pub mod migrate;
