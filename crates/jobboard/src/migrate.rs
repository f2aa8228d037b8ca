//! SQL migrations via [`refinery`].
//!
//! Migration definitions live in the `migrations/` directory and are
//! embedded into the binary:
//!
//! ```ignore
//! mod embedded {
//!     use jobboard::migrate::embed_migrations;
//!     embed_migrations!("./migrations");
//! }
//!
//! let pool = jobboard::create_pool(&std::env::var("DATABASE_URL")?)?;
//! jobboard::migrate::run_pool(&pool, embedded::migrations::runner()).await?;
//! ```

use crate::error::BoardResult;

pub use refinery::{Report, Runner, embed_migrations};

/// Run pending migrations on a direct connection.
pub async fn run(client: &mut tokio_postgres::Client, runner: Runner) -> BoardResult<Report> {
    Ok(runner.run_async(client).await?)
}

/// Pool variant of [`run`].
#[cfg(feature = "pool")]
pub async fn run_pool(pool: &deadpool_postgres::Pool, runner: Runner) -> BoardResult<Report> {
    let mut client = pool.get().await?;
    run(&mut client, runner).await
}
