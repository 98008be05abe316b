use std::str::FromStr;

use crate::error::LinkError;
use crate::types::{Arn, BlastPropagation, ItemType, LinkedItemQuery};

/// Link an asynchronous delivery target, such as a Lambda dead-letter queue
/// or an on-success/on-failure destination, to the resource it names.
///
/// Only SNS topics, SQS queues, Lambda functions and EventBridge buses can be
/// destinations; any other service is an `UnsupportedDestination` error that
/// callers treat as "no link".
pub(crate) fn destination_link(destination: &str) -> Result<LinkedItemQuery, LinkError> {
    let arn = Arn::from_str(destination)?;

    let item_type = match arn.service() {
        "sns" => ItemType::SnsTopic,
        "sqs" => ItemType::SqsQueue,
        "lambda" => ItemType::LambdaFunction,
        "events" => ItemType::EventsEventBus,
        other => return Err(LinkError::UnsupportedDestination(other.to_string())),
    };

    Ok(LinkedItemQuery::search(
        item_type.as_str(),
        destination,
        arn.scope(),
        BlastPropagation::both(),
    ))
}
