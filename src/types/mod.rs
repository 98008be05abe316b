//! Data model for ARNs, scopes, policy documents and the links built from them.
//!
//! Canonical string forms:
//! - ARN: `arn:<partition>:<service>:<region>:<account>:<resource>`
//! - Scope: `<account>.<region>`, `<account>`, `global`, or `*` for any scope
//! - Item type: `<service>-<resource type>`, e.g. `iam-role`, `sqs-queue`
//! - Link: `<METHOD> <type> <query> @ <scope>`

mod arn;
mod item_type;
mod link;
mod one_or_many;
mod policy;
mod scope;

pub use arn::Arn;
pub use item_type::{ItemType, derived_item_type};
pub use link::{BlastPropagation, LinkedItemQuery, Query, QueryMethod};
pub use one_or_many::OneOrMany;
pub use policy::{
    ArnLikeCondition, Condition, Effect, PolicyDocument, Principal, PrincipalEntities, Statement,
    StringEqualsCondition,
};
pub use scope::{GLOBAL_SCOPE, WILDCARD_SCOPE, format_scope};
