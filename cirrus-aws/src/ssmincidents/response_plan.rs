//! AWS::SSMIncidents::ResponsePlan

use cirrus_core::{CfnProperties, CfnResource, CfnTag};

cirrus_core::cfn_records! {
    /// Action started at the beginning of an incident
    #[derive(Default)]
    pub struct Action("AWS::SSMIncidents::ResponsePlan.Action"), builder ActionBuilder {
        required {}
        optional {
            ssm_automation: SsmAutomation => "SsmAutomation",
        }
    }

    /// AWS Chatbot channel used during an incident
    #[derive(Default)]
    pub struct ChatChannel("AWS::SSMIncidents::ResponsePlan.ChatChannel"), builder ChatChannelBuilder {
        required {}
        optional {
            chatbot_sns: Vec<String> => "ChatbotSns",
        }
    }

    /// Details used to create an incident
    pub struct IncidentTemplate("AWS::SSMIncidents::ResponsePlan.IncidentTemplate"), builder IncidentTemplateBuilder {
        required {
            /// 1 (critical) to 5 (no impact)
            impact: i64 => "Impact",
            title: String => "Title",
        }
        optional {
            /// Deduplicates incidents created from the same event
            dedupe_string: String => "DedupeString",
            notification_targets: Vec<NotificationTargetItem> => "NotificationTargets",
            summary: String => "Summary",
        }
    }

    #[derive(Default)]
    pub struct NotificationTargetItem("AWS::SSMIncidents::ResponsePlan.NotificationTargetItem"), builder NotificationTargetItemBuilder {
        required {}
        optional {
            sns_topic_arn: String => "SnsTopicArn",
        }
    }

    /// Systems Manager automation document run as a runbook
    pub struct SsmAutomation("AWS::SSMIncidents::ResponsePlan.SsmAutomation"), builder SsmAutomationBuilder {
        required {
            document_name: String => "DocumentName",
            role_arn: String => "RoleArn",
        }
        optional {
            document_version: String => "DocumentVersion",
            parameters: Vec<SsmParameter> => "Parameters",
            /// `RESPONSE_PLAN_OWNER_ACCOUNT` or `IMPACTED_ACCOUNT`
            target_account: String => "TargetAccount",
        }
    }

    pub struct SsmParameter("AWS::SSMIncidents::ResponsePlan.SsmParameter"), builder SsmParameterBuilder {
        required {
            key: String => "Key",
            values: Vec<String> => "Values",
        }
        optional {}
    }

    /// Properties of an Incident Manager response plan
    pub struct ResponsePlanProps("AWS::SSMIncidents::ResponsePlan"), builder ResponsePlanPropsBuilder {
        required {
            incident_template: IncidentTemplate => "IncidentTemplate",
            name: String => "Name",
        }
        optional {
            actions: Vec<Action> => "Actions",
            chat_channel: ChatChannel => "ChatChannel",
            display_name: String => "DisplayName",
            /// Contact and escalation plan ARNs
            engagements: Vec<String> => "Engagements",
            tags: Vec<CfnTag> => "Tags",
        }
    }
}

impl ResponsePlanProps {
    pub const ATTR_ARN: &'static str = "Arn";
}

impl CfnProperties for ResponsePlanProps {
    const RESOURCE_TYPE: &'static str = "AWS::SSMIncidents::ResponsePlan";
    const ATTRIBUTES: &'static [&'static str] = &[Self::ATTR_ARN];
    const TAGGABLE: bool = true;
    const DESCRIPTION: Option<&'static str> = Some("An Incident Manager response plan");
}

cirrus_core::impl_taggable!(ResponsePlanProps);

pub type ResponsePlan = CfnResource<ResponsePlanProps>;
