use std::sync::Arc;

use super::*;
use crate::extractor::{ExtractorRegistryBuilder, RegexExtractor};
use crate::types::{
    BlastPropagation, Condition, ItemType, OneOrMany, PrincipalEntities, QueryMethod, Statement,
};

mod destinations;

fn principal_statement(principal: &str) -> Statement {
    Statement {
        principal: Some(PrincipalEntities::aws(principal)),
        ..Default::default()
    }
}

fn resource_statement(action: Option<&str>, resource: &str) -> Statement {
    Statement {
        action: action.map(OneOrMany::from),
        resource: Some(resource.into()),
        ..Default::default()
    }
}

fn policy(statements: Vec<Statement>) -> PolicyDocument {
    PolicyDocument::new(statements)
}

fn assert_single_link(links: &[LinkedItemQuery]) -> &LinkedItemQuery {
    assert_eq!(links.len(), 1, "expected exactly one link, got {links:?}");
    &links[0]
}

#[test]
fn test_default_engine_uses_builtin_extractors() {
    let engine = LinkEngine::new();
    assert_eq!(engine.registry().names(), vec!["ssm", "fallback"]);
}

#[test]
fn test_custom_registry_replaces_builtin_extractors() {
    fn table_links(resource: &str, _actions: &[&str]) -> Vec<LinkedItemQuery> {
        vec![LinkedItemQuery::get(
            "dynamodb-table",
            resource.rsplit('/').next().unwrap_or(resource),
            "123456789012.us-east-1",
            BlastPropagation::both(),
        )]
    }

    let dynamodb = RegexExtractor::from_pattern("dynamodb", r"^arn:aws:dynamodb:", table_links).unwrap();
    let engine = LinkEngine::with_registry(
        ExtractorRegistryBuilder::new()
            .add_extractor(Arc::new(dynamodb))
            .build(),
    );

    let document = policy(vec![
        resource_statement(
            Some("dynamodb:GetItem"),
            "arn:aws:dynamodb:us-east-1:123456789012:table/orders",
        ),
        resource_statement(Some("sts:AssumeRole"), "arn:aws:iam::123456789012:role/X"),
    ]);

    let links = engine.links_from_policy(Some(&document));
    let link = assert_single_link(&links);
    assert_eq!(link.method(), QueryMethod::Get);
    assert_eq!(link.query(), "orders");
}

#[test]
fn test_custom_extractor_ahead_of_defaults() {
    fn secret_links(resource: &str, actions: &[&str]) -> Vec<LinkedItemQuery> {
        // Read-only access cannot change the secret.
        let writes = actions.iter().any(|a| !a.starts_with("secretsmanager:Get"));
        vec![LinkedItemQuery::search(
            "secretsmanager-secret",
            resource,
            "123456789012.us-east-1",
            BlastPropagation::new(true, writes),
        )]
    }

    let secrets = RegexExtractor::from_pattern("secrets", r"^arn:aws:secretsmanager:", secret_links).unwrap();
    let engine = LinkEngine::with_registry(
        ExtractorRegistryBuilder::new()
            .add_extractor(Arc::new(secrets))
            .with_defaults()
            .build(),
    );

    let document = policy(vec![resource_statement(
        Some("secretsmanager:GetSecretValue"),
        "arn:aws:secretsmanager:us-east-1:123456789012:secret:db-AbCdEf",
    )]);

    let links = engine.links_from_policy(Some(&document));
    let link = assert_single_link(&links);
    assert_eq!(link.item_type(), "secretsmanager-secret");
    assert_eq!(link.blast_propagation(), BlastPropagation::inbound());
}

#[test]
fn test_concurrent_extraction() {
    use std::thread;

    let engine = Arc::new(LinkEngine::new());
    let document = Arc::new(policy(vec![
        principal_statement("arn:aws:iam::123456789:role/X"),
        resource_statement(
            Some("ssm:GetParameter"),
            "arn:aws:ssm:us-west-2:123456789:parameter/foo",
        ),
    ]));
    let expected = engine.links_from_policy(Some(&document));

    let mut handles = vec![];
    for i in 0..10 {
        let engine = Arc::clone(&engine);
        let document = Arc::clone(&document);
        let expected = expected.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..100 {
                assert_eq!(engine.links_from_policy(Some(&document)), expected);
                let destination = format!("arn:aws:sqs:us-east-1:123456789012:queue-{i}");
                let link = engine.destination_link(&destination).unwrap();
                assert!(link.targets(ItemType::SqsQueue));
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_engine_clone_shares_registry() {
    let engine = LinkEngine::new();
    let clone = engine.clone();
    assert!(std::ptr::eq(engine.registry(), clone.registry()));
}

#[test]
fn test_resource_policy_ignores_identity_entries() {
    let engine = LinkEngine::new();
    let document = policy(vec![
        principal_statement("arn:aws:iam::123456789:role/X"),
        Statement {
            action: Some("lambda:InvokeFunction".into()),
            principal: Some(PrincipalEntities::service("sns.amazonaws.com")),
            condition: Some(Condition::source_arn("arn:aws:sns:us-east-1:123456789012:alerts")),
            ..Default::default()
        },
    ]);

    let links = engine.resource_policy_links(&document);
    let link = assert_single_link(&links);
    assert!(link.targets(ItemType::SnsTopic));
}
