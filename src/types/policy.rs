//! IAM policy documents, as far as link extraction needs them.
//!
//! Unknown keys are ignored. Fields AWS allows as scalar-or-array use
//! [`OneOrMany`], so multi-valued entries survive decoding.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::one_or_many::OneOrMany;

/// A parsed policy document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolicyDocument {
    #[serde(rename = "Version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Statement", default, skip_serializing_if = "Option::is_none")]
    pub statement: Option<OneOrMany<Statement>>,
}

impl PolicyDocument {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            version: Some("2012-10-17".to_string()),
            id: None,
            statement: Some(OneOrMany::Many(statements)),
        }
    }

    /// Statements in document order; empty when the document has none.
    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.statement.iter().flat_map(OneOrMany::iter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum Effect {
    Allow,
    Deny,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Statement {
    #[serde(rename = "Sid", default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    #[serde(rename = "Effect", default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<Effect>,
    #[serde(rename = "Action", default, skip_serializing_if = "Option::is_none")]
    pub action: Option<OneOrMany<String>>,
    #[serde(rename = "Principal", default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<Principal>,
    #[serde(rename = "Resource", default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<OneOrMany<String>>,
    #[serde(rename = "Condition", default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

impl Statement {
    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.action.iter().flat_map(OneOrMany::iter).map(String::as_str)
    }

    pub fn has_actions(&self) -> bool {
        self.actions().next().is_some()
    }

    pub fn resources(&self) -> impl Iterator<Item = &str> {
        self.resource.iter().flat_map(OneOrMany::iter).map(String::as_str)
    }

    /// Values of `Principal.AWS`; empty for `"Principal": "*"`.
    pub fn aws_principals(&self) -> impl Iterator<Item = &str> {
        self.principal_entities()
            .and_then(|p| p.aws.as_ref())
            .into_iter()
            .flat_map(OneOrMany::iter)
            .map(String::as_str)
    }

    /// Values of `Principal.Service`, e.g. `sns.amazonaws.com`.
    pub fn service_principals(&self) -> impl Iterator<Item = &str> {
        self.principal_entities()
            .and_then(|p| p.service.as_ref())
            .into_iter()
            .flat_map(OneOrMany::iter)
            .map(String::as_str)
    }

    /// `Condition.ArnLike["aws:SourceArn"]`, first value if several are given.
    pub fn source_arn(&self) -> Option<&str> {
        self.condition
            .as_ref()
            .and_then(|c| c.arn_like.as_ref())
            .and_then(|a| a.source_arn.as_ref())
            .and_then(|v| v.iter().next())
            .map(String::as_str)
    }

    /// `Condition.StringEquals["aws:SourceAccount"]`, first value if several are given.
    pub fn source_account(&self) -> Option<&str> {
        self.condition
            .as_ref()
            .and_then(|c| c.string_equals.as_ref())
            .and_then(|s| s.source_account.as_ref())
            .and_then(|v| v.iter().next())
            .map(String::as_str)
    }

    fn principal_entities(&self) -> Option<&PrincipalEntities> {
        match self.principal.as_ref()? {
            Principal::Entities(entities) => Some(entities),
            Principal::Wildcard(_) => None,
        }
    }
}

/// `"Principal": "*"` or a map of principal kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Principal {
    Wildcard(String),
    Entities(PrincipalEntities),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrincipalEntities {
    #[serde(rename = "AWS", default, skip_serializing_if = "Option::is_none")]
    pub aws: Option<OneOrMany<String>>,
    #[serde(rename = "Service", default, skip_serializing_if = "Option::is_none")]
    pub service: Option<OneOrMany<String>>,
}

impl PrincipalEntities {
    pub fn aws(principals: impl Into<OneOrMany<String>>) -> Principal {
        Principal::Entities(Self {
            aws: Some(principals.into()),
            service: None,
        })
    }

    pub fn service(services: impl Into<OneOrMany<String>>) -> Principal {
        Principal::Entities(Self {
            aws: None,
            service: Some(services.into()),
        })
    }
}

/// The condition blocks the service-principal resolver reads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "ArnLike", default, skip_serializing_if = "Option::is_none")]
    pub arn_like: Option<ArnLikeCondition>,
    #[serde(rename = "StringEquals", default, skip_serializing_if = "Option::is_none")]
    pub string_equals: Option<StringEqualsCondition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArnLikeCondition {
    #[serde(
        rename = "aws:SourceArn",
        alias = "AWS:SourceArn",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_arn: Option<OneOrMany<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StringEqualsCondition {
    #[serde(
        rename = "aws:SourceAccount",
        alias = "AWS:SourceAccount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_account: Option<OneOrMany<String>>,
}

impl Condition {
    pub fn source_arn(arn: &str) -> Self {
        Self {
            arn_like: Some(ArnLikeCondition {
                source_arn: Some(arn.into()),
            }),
            string_equals: None,
        }
    }

    pub fn with_source_account(mut self, account_id: &str) -> Self {
        self.string_equals = Some(StringEqualsCondition {
            source_account: Some(account_id.into()),
        });
        self
    }
}
