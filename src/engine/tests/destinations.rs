use super::*;
use yare::parameterized;

#[parameterized(
    sns = { "arn:aws:sns:us-east-1:123456789012:failures", ItemType::SnsTopic },
    sqs = { "arn:aws:sqs:us-east-1:123456789012:dlq", ItemType::SqsQueue },
    lambda = { "arn:aws:lambda:us-east-1:123456789012:function:on-success", ItemType::LambdaFunction },
    events = { "arn:aws:events:us-east-1:123456789012:event-bus/default", ItemType::EventsEventBus },
)]
fn test_destination(destination: &str, expected: ItemType) {
    let link = LinkEngine::new().destination_link(destination).unwrap();
    assert!(link.targets(expected));
    assert_eq!(link.method(), QueryMethod::Search);
    assert_eq!(link.scope(), "123456789012.us-east-1");
}

#[parameterized(
    garbage = { "something-bad" },
    empty = { "" },
    too_few_sections = { "arn:aws:sqs:us-east-1" },
)]
fn test_invalid_destination(destination: &str) {
    let err = LinkEngine::new().destination_link(destination).unwrap_err();
    assert!(matches!(err, LinkError::InvalidArn(_)));
}

#[test]
fn test_unsupported_destination() {
    let err = LinkEngine::new()
        .destination_link("arn:aws:kinesis:us-east-1:123456789012:stream/s")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "no matching request for destination service 'kinesis'"
    );
}
