use percent_encoding::percent_decode_str;

use crate::error::LinkError;
use crate::types::PolicyDocument;

/// Decode a raw policy string as returned by the IAM and Lambda APIs.
///
/// IAM hands out policy documents URL-encoded (RFC 3986); they are decoded
/// first and then unmarshalled. Plain JSON passes through the decoding step
/// unchanged. Decoding errors map to `LinkError::PolicyDecode`, JSON errors
/// to `LinkError::PolicyParse`.
///
/// Example:
/// ```rust
/// use arnlink_core::parse_policy_document;
/// let raw = "%7B%22Statement%22%3A%5B%5D%7D";
/// let policy = parse_policy_document(raw).unwrap();
/// assert_eq!(policy.statements().count(), 0);
/// ```
pub fn parse_policy_document(raw: &str) -> Result<PolicyDocument, LinkError> {
    let decoded = percent_decode_str(raw).decode_utf8()?;
    Ok(serde_json::from_str(&decoded)?)
}
