//! Links from resource-based policies that grant an AWS service access,
//! e.g. the invoke permissions on a Lambda function.
//!
//! The grantee is named by `Principal.Service`; which resource of that
//! service is allowed comes from the `aws:SourceArn` condition.

use std::str::FromStr;

use tracing::trace;

use crate::types::{
    Arn, BlastPropagation, ItemType, LinkedItemQuery, QueryMethod, Statement, format_scope,
};

/// Map a service principal to the item type of the resource it acts from.
pub fn service_principal_target(service: &str) -> Option<(ItemType, QueryMethod)> {
    let target = match service {
        "sns.amazonaws.com" => (ItemType::SnsTopic, QueryMethod::Get),
        "elasticloadbalancing.amazonaws.com" => (ItemType::Elbv2TargetGroup, QueryMethod::Search),
        "vpc-lattice.amazonaws.com" => (ItemType::VpcLatticeTargetGroup, QueryMethod::Search),
        "logs.amazonaws.com" => (ItemType::LogsLogGroup, QueryMethod::Search),
        "events.amazonaws.com" => (ItemType::EventsRule, QueryMethod::Search),
        "s3.amazonaws.com" => (ItemType::S3Bucket, QueryMethod::Search),
        _ => return None,
    };
    Some(target)
}

pub(crate) fn service_principal_links(statement: &Statement) -> Vec<LinkedItemQuery> {
    statement
        .service_principals()
        .filter_map(|service| service_principal_link(statement, service))
        .collect()
}

fn service_principal_link(statement: &Statement, service: &str) -> Option<LinkedItemQuery> {
    let Some((item_type, method)) = service_principal_target(service) else {
        trace!(
            event = "Extract",
            phase = "ServicePrincipal",
            service = service,
            skipped = "unknown service"
        );
        return None;
    };

    let Some(source_arn) = statement.source_arn() else {
        trace!(
            event = "Extract",
            phase = "ServicePrincipal",
            service = service,
            skipped = "no aws:SourceArn"
        );
        return None;
    };

    // S3 ARNs carry no account or region, the account comes from its own condition.
    let scope = if item_type == ItemType::S3Bucket {
        format_scope(statement.source_account()?, "")
    } else {
        match Arn::from_str(source_arn) {
            Ok(arn) => arn.scope(),
            Err(err) => {
                trace!(
                    event = "Extract",
                    phase = "ServicePrincipal",
                    service = service,
                    error = %err
                );
                return None;
            }
        }
    };

    Some(LinkedItemQuery::new(
        item_type.as_str(),
        method,
        source_arn,
        scope,
        BlastPropagation::inbound(),
    ))
}
