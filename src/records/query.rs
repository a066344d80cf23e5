use serde::{Deserialize, Serialize};

use crate::records::value::FieldValue;

/// Filter expression evaluated by the remote store while scanning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    /// Matches every record of the queried type.
    True,
    /// Matches records whose field holds exactly the given value.
    Equals { field: String, value: FieldValue },
    /// Matches records satisfying every sub-predicate.
    And(Vec<Predicate>),
}

impl Predicate {
    pub fn equals(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Predicate::Equals {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl Default for Predicate {
    fn default() -> Self {
        Predicate::True
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One sort key applied by the store, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDescriptor {
    field: String,
    direction: SortDirection,
}

impl SortDescriptor {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}

/// A fully described scan: record type, filter, sort keys and result limit.
/// Stateless, built fluently and consumed by a single execution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDefinition {
    record_type: String,
    predicate: Predicate,
    sort: Vec<SortDescriptor>,
    limit: Option<usize>,
}

impl QueryDefinition {
    pub fn new(record_type: impl Into<String>) -> Self {
        Self {
            record_type: record_type.into(),
            predicate: Predicate::True,
            sort: Vec::new(),
            limit: None,
        }
    }

    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = predicate;
        self
    }

    pub fn with_sort(mut self, sort: Vec<SortDescriptor>) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn record_type(&self) -> &str {
        &self.record_type
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    pub fn sort(&self) -> &[SortDescriptor] {
        &self.sort
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}
