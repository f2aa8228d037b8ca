//! Assignment-clause construction for partial updates.
//!
//! The clause produced here is designed to be spliced into a larger UPDATE
//! whose placeholder numbering continues where the clause leaves off; the
//! caller binds its row-identifying predicate at
//! [`AssignmentClause::next_placeholder`].

use crate::error::{BoardError, BoardResult};
use crate::param::{Param, ParamList};
use tokio_postgres::types::ToSql;

/// Logical-to-physical column-name translation.
///
/// A total function over field names: entries translate, anything else
/// passes through unchanged. The table does not need to cover every field
/// a caller may set.
#[derive(Clone, Copy, Debug, Default)]
pub struct ColumnMap {
    entries: &'static [(&'static str, &'static str)],
}

impl ColumnMap {
    /// Create a map from `(logical, physical)` entries.
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Resolve a logical field name to its physical column name.
    pub fn resolve<'a>(&self, logical: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(from, _)| *from == logical)
            .map(|(_, to)| *to)
            .unwrap_or(logical)
    }
}

/// An ordered set of fields for a partial update.
///
/// Insertion order determines placeholder numbering, so a given
/// construction sequence always produces the same clause text.
#[derive(Debug, Default)]
pub struct UpdateFields {
    fields: Vec<(String, Param)>,
}

impl UpdateFields {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value.
    pub fn set<T: ToSql + Send + Sync + 'static>(mut self, name: &str, value: T) -> Self {
        self.fields.push((name.to_string(), Param::new(value)));
        self
    }

    /// Set a field only when a value is present (None => skip).
    pub fn set_opt<T: ToSql + Send + Sync + 'static>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.set(name, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// A ready-to-splice `SET` fragment plus its positional values.
#[derive(Debug)]
pub struct AssignmentClause {
    clause: String,
    params: ParamList,
}

impl AssignmentClause {
    /// The comma-joined `"column"=$n` fragments.
    pub fn clause(&self) -> &str {
        &self.clause
    }

    /// The values bound to the fragments, in clause order.
    pub fn params(&self) -> &ParamList {
        &self.params
    }

    /// 1-based index of the next free placeholder after the bound values.
    pub fn next_placeholder(&self) -> usize {
        self.params.len() + 1
    }

    /// Split into clause text and parameter list.
    pub fn into_parts(self) -> (String, ParamList) {
        (self.clause, self.params)
    }
}

/// Build the `SET` fragment of a partial update.
///
/// Each field becomes `"<physical>"=$<n>`, numbered from 1 in insertion
/// order, with its value at the same position in the parameter list.
/// Column names are double-quoted verbatim; translated names must not
/// contain embedded quote characters (identifier escaping beyond the
/// quoting is out of scope here).
///
/// An empty field set fails with [`BoardError::Validation`] before any
/// other work.
///
/// # Example
///
/// ```ignore
/// let fields = UpdateFields::new().set("firstName", "Test").set("age", 30);
/// let set = assignment_clause(&fields, &columns)?;
/// assert_eq!(set.clause(), r#""first_name"=$1, "age"=$2"#);
/// ```
pub fn assignment_clause(
    fields: &UpdateFields,
    columns: &ColumnMap,
) -> BoardResult<AssignmentClause> {
    if fields.is_empty() {
        return Err(BoardError::validation("no data supplied"));
    }

    let mut params = ParamList::new();
    let mut parts = Vec::with_capacity(fields.len());
    for (name, value) in &fields.fields {
        let idx = params.push_param(value.clone());
        parts.push(format!("\"{}\"=${}", columns.resolve(name), idx));
    }

    Ok(AssignmentClause {
        clause: parts.join(", "),
        params,
    })
}
