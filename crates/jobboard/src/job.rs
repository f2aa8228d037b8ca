//! The `jobs` resource: entity type and CRUD operations.
//!
//! Every operation is a single round trip against the backing store; the
//! store's row-level semantics arbitrate concurrent writers. None of these
//! functions open a transaction, but all of them accept one through the
//! [`GenericClient`] seam.

use crate::client::GenericClient;
use crate::error::{BoardError, BoardResult};
use crate::filter::JobFilter;
use crate::row::{FromRow, RowExt};
use crate::sql::{ColumnMap, UpdateFields, assignment_clause};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// Columns selected by every job query.
pub(crate) const COLUMNS: &str = "id, title, salary, equity, company_handle";

/// Logical-to-physical translation for partial updates. API field names are
/// camelCase; anything not listed passes through unchanged.
const JOB_COLUMNS: ColumnMap = ColumnMap::new(&[("companyHandle", "company_handle")]);

/// A job posting.
///
/// The identifier is server-generated and immutable. The owning-group
/// reference is stored as `company_handle` and serialized back under its
/// logical `companyHandle` name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

impl FromRow for Job {
    fn from_row(row: &Row) -> BoardResult<Self> {
        Ok(Self {
            id: row.try_get_column("id")?,
            title: row.try_get_column("title")?,
            salary: row.try_get_column("salary")?,
            equity: row.try_get_column("equity")?,
            company_handle: row.try_get_column("company_handle")?,
        })
    }
}

/// Input for [`create`]; the identifier is generated by the store.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    #[serde(default)]
    pub salary: Option<i32>,
    #[serde(default)]
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

/// Insert a job and return it with its generated identifier.
///
/// No uniqueness pre-check is made; constraint violations surface as
/// [`BoardError::Storage`].
pub async fn create(conn: &impl GenericClient, job: &NewJob) -> BoardResult<Job> {
    let sql = format!(
        "INSERT INTO jobs (title, salary, equity, company_handle) \
         VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
    );
    tracing::debug!(sql = %sql, "creating job");

    let row = conn
        .query_opt(
            &sql,
            &[&job.title, &job.salary, &job.equity, &job.company_handle],
        )
        .await?
        .ok_or_else(|| BoardError::Other("insert returned no row".to_string()))?;
    Job::from_row(&row)
}

/// Find all jobs matching the given filter, ordered by title.
pub async fn find_all(conn: &impl GenericClient, filter: &JobFilter) -> BoardResult<Vec<Job>> {
    let (sql, params) = filter.build();
    tracing::debug!(sql = %sql, "listing jobs");

    let rows = conn.query(&sql, &params.as_refs()).await?;
    rows.iter().map(Job::from_row).collect()
}

/// Fetch a single job by identifier.
///
/// Fails with [`BoardError::NotFound`] if no row matches.
pub async fn get(conn: &impl GenericClient, id: i64) -> BoardResult<Job> {
    let sql = format!("SELECT {COLUMNS} FROM jobs WHERE id = $1");
    tracing::debug!(sql = %sql, id, "fetching job");

    let row = conn
        .query_opt(&sql, &[&id])
        .await?
        .ok_or(BoardError::NotFound(id))?;
    Job::from_row(&row)
}

/// Apply a partial update and return the updated job.
///
/// Clause construction happens first, so an empty field set fails with
/// [`BoardError::Validation`] before any storage round trip. The
/// row-identifying predicate takes the placeholder right after the
/// assignment values. Fails with [`BoardError::NotFound`] if no row
/// matches.
pub async fn update(
    conn: &impl GenericClient,
    id: i64,
    fields: &UpdateFields,
) -> BoardResult<Job> {
    let set = assignment_clause(fields, &JOB_COLUMNS)?;
    let sql = format!(
        "UPDATE jobs SET {} WHERE id = ${} RETURNING {COLUMNS}",
        set.clause(),
        set.next_placeholder(),
    );
    tracing::debug!(sql = %sql, id, "updating job");

    let (_, mut params) = set.into_parts();
    params.push(id);

    let row = conn
        .query_opt(&sql, &params.as_refs())
        .await?
        .ok_or(BoardError::NotFound(id))?;
    Job::from_row(&row)
}

/// Delete a job by identifier.
///
/// Fails with [`BoardError::NotFound`] if no row matches.
pub async fn delete(conn: &impl GenericClient, id: i64) -> BoardResult<()> {
    let sql = "DELETE FROM jobs WHERE id = $1";
    tracing::debug!(sql = %sql, id, "deleting job");

    let affected = conn.execute(sql, &[&id]).await?;
    if affected == 0 {
        return Err(BoardError::NotFound(id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_owning_group_under_logical_name() {
        let job = Job {
            id: 1,
            title: "Engineer".to_string(),
            salary: Some(100_000),
            equity: None,
            company_handle: "acme".to_string(),
        };
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["companyHandle"], "acme");
        assert_eq!(value["salary"], 100_000);
        assert!(value["equity"].is_null());
    }

    #[test]
    fn new_job_accepts_sparse_input() {
        let new: NewJob = serde_json::from_value(serde_json::json!({
            "title": "Engineer",
            "companyHandle": "acme",
        }))
        .unwrap();
        assert_eq!(new.title, "Engineer");
        assert_eq!(new.salary, None);
        assert_eq!(new.equity, None);
    }

    #[test]
    fn update_clause_translates_owning_group_column() {
        let fields = UpdateFields::new()
            .set("title", "Staff Engineer")
            .set("companyHandle", "acme");
        let set = assignment_clause(&fields, &JOB_COLUMNS).unwrap();
        assert_eq!(set.clause(), r#""title"=$1, "company_handle"=$2"#);
        assert_eq!(set.next_placeholder(), 3);
    }
}
