//! Resource extractors: regex-keyed rules turning a resource ARN named in a
//! policy statement into links.
//!
//! A [`ExtractorRegistry`] holds extractors in priority order. For each
//! resource the first extractor whose pattern matches wins and no other
//! extractor is consulted. Registries are immutable once built and are
//! shared behind an `Arc`.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::str::FromStr;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::error::LinkError;
use crate::types::{
    Arn, BlastPropagation, ItemType, LinkedItemQuery, WILDCARD_SCOPE, derived_item_type,
};

pub trait QueryExtractor: Send + Sync {
    /// Short name used in logs, e.g. "ssm".
    fn name(&self) -> &str;
    /// Pattern a resource string must match for this extractor to apply.
    fn relevant_resources(&self) -> &Regex;
    /// Produce links for a matching resource given the actions granted on it.
    fn extract(&self, resource: &str, actions: &[&str]) -> Vec<LinkedItemQuery>;

    fn applies_to(&self, resource: &str) -> bool {
        self.relevant_resources().is_match(resource)
    }
}

pub type ExtractFn = fn(&str, &[&str]) -> Vec<LinkedItemQuery>;

/// An extractor made of a pattern and a plain function.
#[derive(Clone)]
pub struct RegexExtractor {
    name: String,
    relevant_resources: Regex,
    extract: ExtractFn,
}

impl RegexExtractor {
    pub fn new(name: impl Into<String>, relevant_resources: Regex, extract: ExtractFn) -> Self {
        Self {
            name: name.into(),
            relevant_resources,
            extract,
        }
    }

    /// Compile `pattern` and build the extractor.
    pub fn from_pattern(
        name: impl Into<String>,
        pattern: &str,
        extract: ExtractFn,
    ) -> Result<Self, LinkError> {
        Ok(Self::new(name, Regex::new(pattern)?, extract))
    }
}

impl Debug for RegexExtractor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("RegexExtractor")
            .field("name", &self.name)
            .field("relevant_resources", &self.relevant_resources.as_str())
            .finish()
    }
}

impl QueryExtractor for RegexExtractor {
    fn name(&self) -> &str {
        &self.name
    }

    fn relevant_resources(&self) -> &Regex {
        &self.relevant_resources
    }

    fn extract(&self, resource: &str, actions: &[&str]) -> Vec<LinkedItemQuery> {
        (self.extract)(resource, actions)
    }
}

/// Ordered, immutable set of extractors.
#[derive(Clone, Default)]
pub struct ExtractorRegistry {
    extractors: Vec<Arc<dyn QueryExtractor>>,
}

impl ExtractorRegistry {
    /// Run the first extractor that applies to `resource`.
    ///
    /// Returns an empty list when no extractor applies.
    pub fn extract(&self, resource: &str, actions: &[&str]) -> Vec<LinkedItemQuery> {
        match self.extractors.iter().find(|e| e.applies_to(resource)) {
            Some(extractor) => {
                trace!(
                    event = "Extract",
                    phase = "Resource",
                    extractor = extractor.name(),
                    resource = resource
                );
                extractor.extract(resource, actions)
            }
            None => {
                trace!(
                    event = "Extract",
                    phase = "Resource",
                    resource = resource,
                    skipped = "no matching extractor"
                );
                Vec::new()
            }
        }
    }

    /// Extractor names in priority order.
    pub fn names(&self) -> Vec<&str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ExtractorRegistry")
            .field("extractors", &self.names())
            .finish()
    }
}

/// Builder for [`ExtractorRegistry`]; extractors keep the order they are added in.
#[derive(Default)]
pub struct ExtractorRegistryBuilder {
    extractors: Vec<Arc<dyn QueryExtractor>>,
}

impl ExtractorRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_extractor(mut self, extractor: Arc<dyn QueryExtractor>) -> Self {
        self.extractors.push(extractor);
        self
    }

    /// Append the built-in SSM and fallback extractors.
    pub fn with_defaults(mut self) -> Self {
        self.extractors.extend(default_extractors());
        self
    }

    pub fn build(self) -> ExtractorRegistry {
        ExtractorRegistry {
            extractors: self.extractors,
        }
    }
}

static SSM_RESOURCES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^arn:aws[a-z-]*:ssm:").expect("static SSM pattern is valid"));

static ANY_ARN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^arn:").expect("static ARN pattern is valid"));

/// The built-in extractors in priority order: SSM parameters, then any ARN.
pub fn default_extractors() -> Vec<Arc<dyn QueryExtractor>> {
    vec![
        Arc::new(RegexExtractor::new("ssm", SSM_RESOURCES.clone(), ssm_parameter_links)),
        Arc::new(RegexExtractor::new("fallback", ANY_ARN.clone(), arn_links)),
    ]
}

/// Process-wide registry with the built-in extractors, built on first use.
pub(crate) static DEFAULT_REGISTRY: Lazy<Arc<ExtractorRegistry>> =
    Lazy::new(|| Arc::new(ExtractorRegistryBuilder::new().with_defaults().build()));

/// SSM grants access by path prefix: a parameter ARN also covers everything
/// beneath it, so the link searches for the prefix.
fn ssm_parameter_links(resource: &str, _actions: &[&str]) -> Vec<LinkedItemQuery> {
    let Ok(arn) = Arn::from_str(resource) else {
        return Vec::new();
    };

    vec![LinkedItemQuery::search(
        ItemType::SsmParameter.as_str(),
        format!("{resource}*"),
        arn.scope(),
        BlastPropagation::both(),
    )]
}

/// Link to whatever the ARN names, typed by the `<service>-<type>` convention.
///
/// The policy holder may change the resource, but nothing is known about
/// the action semantics, so propagation is outbound only.
fn arn_links(resource: &str, _actions: &[&str]) -> Vec<LinkedItemQuery> {
    let Ok(arn) = Arn::from_str(resource) else {
        return Vec::new();
    };

    // AWS-owned resources and fully wildcarded ARNs can live in any scope.
    let any_scope = arn.account_id() == "aws" || (arn.account_id() == "*" && arn.region() == "*");
    let scope = if any_scope {
        WILDCARD_SCOPE.to_string()
    } else {
        arn.scope()
    };

    vec![LinkedItemQuery::search(
        derived_item_type(&arn),
        resource,
        scope,
        BlastPropagation::outbound(),
    )]
}
