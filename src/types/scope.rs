//! Scope strings identifying the namespace a linked resource lives in.

/// Scope for resources with no account or region boundary, e.g. IPs and DNS names.
pub const GLOBAL_SCOPE: &str = "global";

/// Scope sentinel matching any scope.
pub const WILDCARD_SCOPE: &str = "*";

/// Compose a scope from an account ID and a region.
///
/// Returns `account_id` when `region` is empty, `account_id.region` otherwise.
/// Neither part is validated.
///
/// ```rust
/// use arnlink_core::format_scope;
/// assert_eq!(format_scope("123456789012", "eu-west-1"), "123456789012.eu-west-1");
/// assert_eq!(format_scope("123456789012", ""), "123456789012");
/// ```
pub fn format_scope(account_id: &str, region: &str) -> String {
    if region.is_empty() {
        account_id.to_string()
    } else {
        format!("{account_id}.{region}")
    }
}
