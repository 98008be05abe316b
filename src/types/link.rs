//! Linked item queries: the typed edges emitted for a resource.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use strum_macros::{Display as StrumDisplay, EnumString};
use utoipa::ToSchema;

use super::item_type::ItemType;

/// How the target of a link is resolved.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, StrumDisplay, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum QueryMethod {
    /// The query is the target's exact unique key.
    Get,
    /// The query is matched against targets, e.g. by ARN or prefix.
    Search,
}

/// Whether a change on one side of a link is expected to affect the other.
///
/// `r#in`: changes to the target affect the source.
/// `out`: changes to the source affect the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
pub struct BlastPropagation {
    #[serde(rename = "in")]
    pub r#in: bool,
    pub out: bool,
}

impl BlastPropagation {
    pub const fn new(r#in: bool, out: bool) -> Self {
        Self { r#in, out }
    }

    /// Both directions.
    pub const fn both() -> Self {
        Self::new(true, true)
    }

    /// The target affects the source only.
    pub const fn inbound() -> Self {
        Self::new(true, false)
    }

    /// The source affects the target only.
    pub const fn outbound() -> Self {
        Self::new(false, true)
    }
}

/// Everything needed to resolve the target of a link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Query {
    #[serde(rename = "type")]
    pub item_type: String,
    pub method: QueryMethod,
    pub query: String,
    pub scope: String,
}

/// A single edge from a source item to a target item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinkedItemQuery {
    pub query: Query,
    pub blast_propagation: BlastPropagation,
}

impl LinkedItemQuery {
    pub fn new(
        item_type: impl Into<String>,
        method: QueryMethod,
        query: impl Into<String>,
        scope: impl Into<String>,
        blast_propagation: BlastPropagation,
    ) -> Self {
        Self {
            query: Query {
                item_type: item_type.into(),
                method,
                query: query.into(),
                scope: scope.into(),
            },
            blast_propagation,
        }
    }

    /// A `SEARCH` link.
    pub fn search(
        item_type: impl Into<String>,
        query: impl Into<String>,
        scope: impl Into<String>,
        blast_propagation: BlastPropagation,
    ) -> Self {
        Self::new(item_type, QueryMethod::Search, query, scope, blast_propagation)
    }

    /// A `GET` link.
    pub fn get(
        item_type: impl Into<String>,
        query: impl Into<String>,
        scope: impl Into<String>,
        blast_propagation: BlastPropagation,
    ) -> Self {
        Self::new(item_type, QueryMethod::Get, query, scope, blast_propagation)
    }

    pub fn item_type(&self) -> &str {
        &self.query.item_type
    }

    pub fn method(&self) -> QueryMethod {
        self.query.method
    }

    pub fn query(&self) -> &str {
        &self.query.query
    }

    pub fn scope(&self) -> &str {
        &self.query.scope
    }

    pub fn blast_propagation(&self) -> BlastPropagation {
        self.blast_propagation
    }

    /// Whether the target is one of the well-known `item_type`s.
    pub fn targets(&self, item_type: ItemType) -> bool {
        self.query.item_type == item_type.as_str()
    }
}

impl Display for LinkedItemQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} {} {} @ {} (in={}, out={})",
            self.query.method,
            self.query.item_type,
            self.query.query,
            self.query.scope,
            self.blast_propagation.r#in,
            self.blast_propagation.out
        )
    }
}
