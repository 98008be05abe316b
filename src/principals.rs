use std::str::FromStr;

use tracing::trace;

use crate::types::{Arn, BlastPropagation, ItemType, LinkedItemQuery};

/// Link an explicit `Principal.AWS` entry to the IAM role or user it names.
///
/// Entries that are not ARNs (account IDs, `*`) and ARNs of any other kind
/// (`root`, `assumed-role`, ...) produce nothing.
pub(crate) fn principal_link(principal: &str) -> Option<LinkedItemQuery> {
    let arn = Arn::from_str(principal).ok()?;

    let item_type = match arn.resource_type() {
        "role" => ItemType::IamRole,
        "user" => ItemType::IamUser,
        other => {
            trace!(
                event = "Extract",
                phase = "Principal",
                principal = principal,
                skipped = other
            );
            return None;
        }
    };

    Some(LinkedItemQuery::search(
        item_type.as_str(),
        principal,
        arn.scope(),
        BlastPropagation::both(),
    ))
}
