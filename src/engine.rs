use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::destinations;
use crate::error::LinkError;
use crate::extractor::{DEFAULT_REGISTRY, ExtractorRegistry};
use crate::loader;
use crate::metrics::{self, ExtractionKind};
use crate::principals::principal_link;
use crate::service_principals::service_principal_links;
use crate::types::{LinkedItemQuery, PolicyDocument};

/// The main link extraction handle. Cloneable and thread-safe.
///
/// Extraction is pure: the engine only reads its registry, so a single
/// instance can be shared freely between threads.
#[derive(Clone, Debug)]
pub struct LinkEngine {
    registry: Arc<ExtractorRegistry>,
}

impl Default for LinkEngine {
    fn default() -> Self {
        LinkEngine {
            registry: Arc::clone(&DEFAULT_REGISTRY),
        }
    }
}

impl LinkEngine {
    /// An engine using the built-in extractors.
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine using a custom set of resource extractors.
    pub fn with_registry(registry: ExtractorRegistry) -> Self {
        LinkEngine {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &ExtractorRegistry {
        &self.registry
    }

    /// Links for the principals and resources an identity policy names.
    ///
    /// Only entities named explicitly are followed; a wildcard resource does
    /// not expand into the entities it matches. Resources in statements
    /// without actions are ignored. Links come back in statement order and
    /// are not de-duplicated.
    pub fn links_from_policy(&self, policy: Option<&PolicyDocument>) -> Vec<LinkedItemQuery> {
        let start = Instant::now();
        let mut links = Vec::new();
        let mut statements = 0;

        for statement in policy.into_iter().flat_map(PolicyDocument::statements) {
            statements += 1;

            links.extend(statement.aws_principals().filter_map(principal_link));

            let actions: Vec<&str> = statement.actions().collect();
            if actions.is_empty() {
                if statement.resources().next().is_some() {
                    trace!(
                        event = "Extract",
                        phase = "Resource",
                        sid = statement.sid.as_deref(),
                        skipped = "statement has no actions"
                    );
                }
                continue;
            }

            for resource in statement.resources() {
                links.extend(self.registry.extract(resource, &actions));
            }
        }

        self.finish(ExtractionKind::IdentityPolicy, start, statements, &links);
        links
    }

    /// Decode a raw (URL-encoded) policy and extract its links.
    ///
    /// A document that cannot be decoded yields no links; the failure is
    /// logged and reported to the metrics sink rather than returned, so it
    /// never aborts the caller's lookup.
    pub fn links_from_encoded_policy(&self, raw: &str) -> Vec<LinkedItemQuery> {
        match loader::parse_policy_document(raw) {
            Ok(policy) => self.links_from_policy(Some(&policy)),
            Err(err) => {
                warn!(event = "Extract", phase = "Decode", error = %err);
                metrics::record_decode_failure(err.to_string());
                Vec::new()
            }
        }
    }

    /// Links for the AWS services a resource-based policy lets in, e.g.
    /// the SNS topics allowed to invoke a Lambda function.
    pub fn resource_policy_links(&self, policy: &PolicyDocument) -> Vec<LinkedItemQuery> {
        let start = Instant::now();
        let mut links = Vec::new();
        let mut statements = 0;

        for statement in policy.statements() {
            statements += 1;
            links.extend(service_principal_links(statement));
        }

        self.finish(ExtractionKind::ResourcePolicy, start, statements, &links);
        links
    }

    /// Link a delivery destination ARN (dead-letter queue, on-success or
    /// on-failure target) to the resource it names.
    pub fn destination_link(&self, destination: &str) -> Result<LinkedItemQuery, LinkError> {
        let start = Instant::now();
        let link = destinations::destination_link(destination)?;

        self.finish(
            ExtractionKind::Destination,
            start,
            0,
            std::slice::from_ref(&link),
        );
        Ok(link)
    }

    fn finish(
        &self,
        kind: ExtractionKind,
        start: Instant,
        statements: usize,
        links: &[LinkedItemQuery],
    ) {
        let duration = start.elapsed();
        debug!(
            event = "Extract",
            phase = "Result",
            kind = %kind,
            statements = statements,
            links = links.len(),
            duration_us = duration.as_micros() as u64
        );
        metrics::record_extraction(kind, duration, statements, links.len());
    }
}

#[cfg(test)]
mod tests;
