//! Filter criteria for job listings.

use crate::param::ParamList;
use serde::Deserialize;

/// Optional filter criteria for [`job::find_all`](crate::job::find_all).
///
/// All three fields are independent; any subset, including none, may be
/// present. `has_equity` is a real tri-state: only `Some(true)` restricts
/// results to jobs with non-zero equity, `Some(false)` and `None` leave the
/// field unfiltered.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobFilter {
    /// Case-insensitive substring match on the title.
    pub title: Option<String>,
    /// Inclusive lower bound on salary.
    pub min_salary: Option<i32>,
    /// Restrict to jobs granting equity.
    pub has_equity: Option<bool>,
}

impl JobFilter {
    /// Compose the selection statement for this filter.
    ///
    /// Predicates are inspected in a fixed order (title, salary, equity) so
    /// placeholder numbering is stable. The equity predicate is a literal
    /// and consumes no placeholder. The statement always ends with
    /// `ORDER BY title`, keeping result order independent of storage order.
    pub fn build(&self) -> (String, ParamList) {
        let mut sql = format!("SELECT {} FROM jobs", crate::job::COLUMNS);
        let mut params = ParamList::new();
        let mut predicates = Vec::new();

        if let Some(title) = &self.title {
            let idx = params.push(format!("%{title}%"));
            predicates.push(format!("title ILIKE ${idx}"));
        }

        if let Some(min_salary) = self.min_salary {
            let idx = params.push(min_salary);
            predicates.push(format!("salary >= ${idx}"));
        }

        if self.has_equity == Some(true) {
            predicates.push("equity > 0".to_string());
        }

        if !predicates.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&predicates.join(" AND "));
        }

        sql.push_str(" ORDER BY title");

        (sql, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_criteria_selects_everything_ordered() {
        let (sql, params) = JobFilter::default().build();
        assert_eq!(
            sql,
            "SELECT id, title, salary, equity, company_handle FROM jobs ORDER BY title"
        );
        assert!(params.is_empty());
    }

    #[test]
    fn title_filter_binds_wrapped_pattern() {
        let filter = JobFilter {
            title: Some("Engineer".to_string()),
            ..Default::default()
        };
        let (sql, params) = filter.build();
        assert_eq!(
            sql,
            "SELECT id, title, salary, equity, company_handle FROM jobs \
             WHERE title ILIKE $1 ORDER BY title"
        );
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn min_salary_filter_is_inclusive_bound() {
        let filter = JobFilter {
            min_salary: Some(90_000),
            ..Default::default()
        };
        let (sql, _) = filter.build();
        assert!(sql.contains("salary >= $1"));
    }

    #[test]
    fn equity_predicate_consumes_no_placeholder() {
        let filter = JobFilter {
            has_equity: Some(true),
            ..Default::default()
        };
        let (sql, params) = filter.build();
        assert_eq!(
            sql,
            "SELECT id, title, salary, equity, company_handle FROM jobs \
             WHERE equity > 0 ORDER BY title"
        );
        assert!(params.is_empty());
    }

    #[test]
    fn has_equity_false_leaves_field_unfiltered() {
        let filter = JobFilter {
            has_equity: Some(false),
            ..Default::default()
        };
        let (sql, params) = filter.build();
        assert!(!sql.contains("WHERE"));
        assert!(params.is_empty());
    }

    #[test]
    fn combined_filters_number_placeholders_in_order() {
        let filter = JobFilter {
            title: Some("dev".to_string()),
            min_salary: Some(50_000),
            has_equity: Some(true),
        };
        let (sql, params) = filter.build();
        assert_eq!(
            sql,
            "SELECT id, title, salary, equity, company_handle FROM jobs \
             WHERE title ILIKE $1 AND salary >= $2 AND equity > 0 ORDER BY title"
        );
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn deserializes_from_camel_case_query_shape() {
        let filter: JobFilter = serde_json::from_value(serde_json::json!({
            "title": "Engineer",
            "minSalary": 90_000,
            "hasEquity": true,
        }))
        .unwrap();
        assert_eq!(filter.title.as_deref(), Some("Engineer"));
        assert_eq!(filter.min_salary, Some(90_000));
        assert_eq!(filter.has_equity, Some(true));
    }
}
