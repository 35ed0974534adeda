//! Template - Reading the `Resources` section of a CloudFormation template

use std::collections::HashMap;

use thiserror::Error;

use crate::resource::{Resource, ResourceId, Value};

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Malformed template: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template has no Resources section")]
    MissingResources,

    #[error("Resources section must be an object")]
    InvalidResources,

    #[error("Resource '{logical_id}' must be an object")]
    InvalidResource { logical_id: String },

    #[error("Resource '{logical_id}' has no string Type")]
    MissingType { logical_id: String },

    #[error("Properties of resource '{logical_id}' must be an object")]
    InvalidProperties { logical_id: String },
}

/// A parsed template
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub description: Option<String>,
    /// Resources sorted by logical id
    pub resources: Vec<Resource>,
}

impl Template {
    pub fn from_json(text: &str) -> Result<Self, TemplateError> {
        let json: serde_json::Value = serde_json::from_str(text)?;

        let description = json
            .get("Description")
            .and_then(|d| d.as_str())
            .map(String::from);

        let entries = json
            .get("Resources")
            .ok_or(TemplateError::MissingResources)?
            .as_object()
            .ok_or(TemplateError::InvalidResources)?;

        let mut resources = Vec::with_capacity(entries.len());
        for (logical_id, entry) in entries {
            resources.push(parse_resource(logical_id, entry)?);
        }
        resources.sort_by(|a, b| a.id.logical_id.cmp(&b.id.logical_id));

        Ok(Self {
            description,
            resources,
        })
    }

    pub fn get(&self, logical_id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id.logical_id == logical_id)
    }
}

fn parse_resource(logical_id: &str, entry: &serde_json::Value) -> Result<Resource, TemplateError> {
    let entry = entry
        .as_object()
        .ok_or_else(|| TemplateError::InvalidResource {
            logical_id: logical_id.to_string(),
        })?;

    let resource_type = entry
        .get("Type")
        .and_then(|t| t.as_str())
        .ok_or_else(|| TemplateError::MissingType {
            logical_id: logical_id.to_string(),
        })?;

    let properties: HashMap<String, Value> = match entry.get("Properties") {
        None | Some(serde_json::Value::Null) => HashMap::new(),
        Some(serde_json::Value::Object(map)) => map
            .iter()
            .map(|(k, v)| (k.clone(), Value::from_json(v)))
            .collect(),
        Some(_) => {
            return Err(TemplateError::InvalidProperties {
                logical_id: logical_id.to_string(),
            });
        }
    };

    Ok(Resource {
        id: ResourceId::new(resource_type, logical_id),
        properties,
    })
}
