//! Item type names for link targets.
//!
//! Well-known targets used by the fixed lookup tables live in [`ItemType`].
//! Anything else is named by convention through [`derived_item_type`].

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use super::arn::Arn;

/// Target types the built-in resolvers link to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum ItemType {
    #[strum(serialize = "iam-role")]
    IamRole,
    #[strum(serialize = "iam-user")]
    IamUser,
    #[strum(serialize = "ssm-parameter")]
    SsmParameter,
    #[strum(serialize = "sns-topic")]
    SnsTopic,
    #[strum(serialize = "sqs-queue")]
    SqsQueue,
    #[strum(serialize = "lambda-function")]
    LambdaFunction,
    #[strum(serialize = "events-event-bus")]
    EventsEventBus,
    #[strum(serialize = "events-rule")]
    EventsRule,
    #[strum(serialize = "elbv2-target-group")]
    Elbv2TargetGroup,
    #[strum(serialize = "vpc-lattice-target-group")]
    VpcLatticeTargetGroup,
    #[strum(serialize = "logs-log-group")]
    LogsLogGroup,
    #[strum(serialize = "s3-bucket")]
    S3Bucket,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Guess the item type of an arbitrary ARN as `<service>-<resource type>`.
///
/// This mirrors the `<aws-cli-service>-<singular-resource-type>` naming used
/// by the adapters but is not checked against any registry, so the result
/// may name a type that does not exist.
pub fn derived_item_type(arn: &Arn) -> String {
    format!("{}-{}", arn.service(), arn.resource_type())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;
    use yare::parameterized;

    #[test]
    fn test_item_type_round_trips_through_str() {
        for item_type in ItemType::iter() {
            let parsed = ItemType::from_str(item_type.as_str()).unwrap();
            assert_eq!(parsed, item_type);
            assert_eq!(item_type.to_string(), item_type.as_str());
        }
    }

    #[test]
    fn test_item_type_names() {
        assert_eq!(ItemType::IamRole.as_str(), "iam-role");
        assert_eq!(ItemType::Elbv2TargetGroup.as_str(), "elbv2-target-group");
        assert_eq!(ItemType::VpcLatticeTargetGroup.as_str(), "vpc-lattice-target-group");
        assert_eq!(ItemType::EventsEventBus.as_ref(), "events-event-bus");
        assert!(ItemType::from_str("ec2-instance").is_err());
    }

    #[parameterized(
        iam_role = { "arn:aws:iam::123456789012:role/admin", "iam-role" },
        dynamodb_table = { "arn:aws:dynamodb:us-east-1:123456789012:table/orders", "dynamodb-table" },
        lambda_function = { "arn:aws:lambda:us-east-1:123456789012:function:my-fn", "lambda-function" },
        sqs_queue_without_type = { "arn:aws:sqs:us-east-1:123456789012:orders", "sqs-orders" },
        s3_object = { "arn:aws:s3:::my-bucket/key", "s3-my-bucket" },
    )]
    fn test_derived_item_type(input: &str, expected: &str) {
        let arn = Arn::from_str(input).unwrap();
        assert_eq!(derived_item_type(&arn), expected);
    }
}
