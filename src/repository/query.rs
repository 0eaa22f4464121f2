use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

/// Comparison operators shared by text ranges and timestamp ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOp {
    Lt,
    Lte,
    Gt,
    Gte,
}

impl RangeOp {
    /// SQL spelling of the operator, used by the Postgres query builder.
    pub fn as_sql(self) -> &'static str {
        match self {
            RangeOp::Lt => " < ",
            RangeOp::Lte => " <= ",
            RangeOp::Gt => " > ",
            RangeOp::Gte => " >= ",
        }
    }

    /// Evaluates the operator on any ordered pair, used by the memory backend.
    pub fn holds<T: PartialOrd + ?Sized>(self, left: &T, right: &T) -> bool {
        match self {
            RangeOp::Lt => left < right,
            RangeOp::Lte => left <= right,
            RangeOp::Gt => left > right,
            RangeOp::Gte => left >= right,
        }
    }
}

/// Condition
///
/// A single predicate over a document. Field names always address top-level
/// keys of the JSON body.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Exact JSON equality (`body.field == value`).
    Eq { field: String, value: Value },
    /// Text comparison of a string field (ISO dates compare lexicographically).
    Range { field: String, op: RangeOp, value: String },
    /// Comparison against the document creation timestamp.
    CreatedAt { op: RangeOp, at: DateTime<Utc> },
    /// Case-insensitive literal substring match on any of the fields.
    Search { fields: Vec<String>, term: String },
    /// Excludes one document id (uniqueness checks on update).
    ExcludeId(Uuid),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    Field(String),
    CreatedAt,
}

/// Query
///
/// Builder for the filter/sort/limit triple accepted by every `Repository::find`
/// style call. The builder methods consume and return `self` so call sites read
/// as a single expression.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub conditions: Vec<Condition>,
    pub sort: Vec<(SortKey, Direction)>,
    pub limit: Option<i64>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.conditions.push(Condition::Eq {
            field: field.to_string(),
            value: value.into(),
        });
        self
    }

    /// Adds an equality condition only when a value is present. Keeps optional
    /// query-string filters on one line at the call site.
    pub fn eq_opt<V: Into<Value>>(self, field: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.eq(field, v),
            None => self,
        }
    }

    pub fn range(mut self, field: &str, op: RangeOp, value: impl Into<String>) -> Self {
        self.conditions.push(Condition::Range {
            field: field.to_string(),
            op,
            value: value.into(),
        });
        self
    }

    pub fn created(mut self, op: RangeOp, at: DateTime<Utc>) -> Self {
        self.conditions.push(Condition::CreatedAt { op, at });
        self
    }

    /// Adds a search condition. Blank terms are ignored so an empty `?search=`
    /// behaves like no filter at all.
    pub fn search(mut self, fields: &[&str], term: &str) -> Self {
        let term = term.trim();
        if term.is_empty() {
            return self;
        }
        self.conditions.push(Condition::Search {
            fields: fields.iter().map(|f| f.to_string()).collect(),
            term: term.to_string(),
        });
        self
    }

    pub fn exclude_id(mut self, id: Uuid) -> Self {
        self.conditions.push(Condition::ExcludeId(id));
        self
    }

    pub fn sort_by(mut self, field: &str, direction: Direction) -> Self {
        self.sort.push((SortKey::Field(field.to_string()), direction));
        self
    }

    pub fn sort_by_created(mut self, direction: Direction) -> Self {
        self.sort.push((SortKey::CreatedAt, direction));
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Escapes `%`, `_` and `\` so a user term is matched literally by `ILIKE`.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_is_dropped() {
        let query = Query::new().search(&["title"], "   ");
        assert!(query.conditions.is_empty());
    }

    #[test]
    fn eq_opt_skips_none() {
        let query = Query::new().eq_opt::<String>("status", None).eq_opt("level", Some("Beginner"));
        assert_eq!(query.conditions.len(), 1);
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }

    #[test]
    fn range_op_holds() {
        assert!(RangeOp::Gte.holds("2025-01-02", "2025-01-02"));
        assert!(RangeOp::Lt.holds("2025-01-01", "2025-01-02"));
        assert!(!RangeOp::Gt.holds(&1, &2));
    }
}
