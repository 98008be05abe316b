//! Amazon Resource Names.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LinkError;

use super::scope::format_scope;

const ARN_PREFIX: &str = "arn";
const ARN_SECTIONS: usize = 6;

/// A parsed ARN: `arn:<partition>:<service>:<region>:<account>:<resource>`.
///
/// Only the top-level structure is interpreted. Whatever follows the fifth
/// colon is kept verbatim in `resource`, so `to_string()` always reproduces
/// the parsed input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Arn {
    partition: String,
    service: String,
    region: String,
    account_id: String,
    resource: String,
}

impl Arn {
    pub fn partition(&self) -> &str {
        &self.partition
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Best-effort guess at the resource type, e.g. `role` for `role/admin`
    /// or `function` for `function:my-fn`.
    ///
    /// The separator is the first `/`; resources without one fall back to the
    /// first `:`. Without either, the whole resource string is returned.
    pub fn resource_type(&self) -> &str {
        self.split_resource().0
    }

    /// Everything after the separator used by [`Arn::resource_type`], or the
    /// whole resource string when there is none.
    pub fn resource_id(&self) -> &str {
        match self.split_resource() {
            (_, Some(id)) => id,
            (whole, None) => whole,
        }
    }

    /// The scope this ARN lives in, see [`format_scope`].
    pub fn scope(&self) -> String {
        format_scope(&self.account_id, &self.region)
    }

    fn split_resource(&self) -> (&str, Option<&str>) {
        let resource = self.resource.as_str();
        let split = resource
            .split_once('/')
            .or_else(|| resource.split_once(':'));
        match split {
            Some((kind, id)) => (kind, Some(id)),
            None => (resource, None),
        }
    }
}

impl Display for Arn {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{ARN_PREFIX}:{}:{}:{}:{}:{}",
            self.partition, self.service, self.region, self.account_id, self.resource
        )
    }
}

impl FromStr for Arn {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sections: Vec<&str> = s.splitn(ARN_SECTIONS, ':').collect();
        if sections[0] != ARN_PREFIX {
            return Err(LinkError::InvalidArn(format!(
                "'{s}' does not start with '{ARN_PREFIX}:'"
            )));
        }
        if sections.len() != ARN_SECTIONS {
            return Err(LinkError::InvalidArn(format!(
                "'{s}' has {} sections, expected {ARN_SECTIONS} (arn:partition:service:region:account:resource)",
                sections.len()
            )));
        }

        Ok(Arn {
            partition: sections[1].to_string(),
            service: sections[2].to_string(),
            region: sections[3].to_string(),
            account_id: sections[4].to_string(),
            resource: sections[5].to_string(),
        })
    }
}

impl TryFrom<String> for Arn {
    type Error = LinkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Arn> for String {
    fn from(arn: Arn) -> Self {
        arn.to_string()
    }
}
