//! Tag - The standard CloudFormation `Key`/`Value` tag

crate::cfn_records! {
    /// A resource tag
    pub struct CfnTag("Tag"), builder CfnTagBuilder {
        required {
            key: String => "Key",
            value: String => "Value",
        }
        optional {}
    }
}

impl CfnTag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Records carrying a standard tag list
pub trait Taggable {
    fn tags(&self) -> Option<&[CfnTag]>;

    fn tags_mut(&mut self) -> &mut Option<Vec<CfnTag>>;

    fn tag_value(&self, key: &str) -> Option<&str> {
        self.tags()?
            .iter()
            .find(|tag| tag.key == key)
            .map(|tag| tag.value.as_str())
    }

    /// Set a tag, replacing the value of an existing key
    fn set_tag(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        let tags = self.tags_mut().get_or_insert_with(Vec::new);
        match tags.iter_mut().find(|tag| tag.key == key) {
            Some(tag) => tag.value = value,
            None => tags.push(CfnTag { key, value }),
        }
    }

    /// Remove a tag, returning its value.
    /// An emptied tag list stays present as an empty list.
    fn remove_tag(&mut self, key: &str) -> Option<String> {
        let tags = self.tags_mut().as_mut()?;
        let index = tags.iter().position(|tag| tag.key == key)?;
        Some(tags.remove(index).value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CfnType;
    use crate::schema::AttributeType;

    #[derive(Default)]
    struct Tagged {
        tags: Option<Vec<CfnTag>>,
    }

    crate::impl_taggable!(Tagged);

    #[test]
    fn tag_serializes_with_key_and_value() {
        let tag = CfnTag::new("team", "data");
        assert_eq!(
            serde_json::to_value(&tag).unwrap(),
            serde_json::json!({ "Key": "team", "Value": "data" })
        );
    }

    #[test]
    fn tag_schema_requires_both_fields() {
        let AttributeType::Struct(schema) = CfnTag::cfn_type() else {
            panic!("expected struct schema");
        };
        assert_eq!(schema.required_attributes().count(), 2);
    }

    #[test]
    fn set_tag_appends_then_replaces() {
        let mut tagged = Tagged::default();
        assert_eq!(tagged.tag_value("team"), None);

        tagged.set_tag("team", "data");
        tagged.set_tag("env", "prod");
        tagged.set_tag("team", "platform");

        assert_eq!(tagged.tag_value("team"), Some("platform"));
        assert_eq!(tagged.tags().map(|t| t.len()), Some(2));
    }

    #[test]
    fn remove_tag_returns_previous_value() {
        let mut tagged = Tagged::default();
        assert_eq!(tagged.remove_tag("team"), None);

        tagged.set_tag("team", "data");
        assert_eq!(tagged.remove_tag("team"), Some("data".to_string()));
        assert_eq!(tagged.tag_value("team"), None);
        assert_eq!(tagged.tags(), Some(&[][..]));
    }
}
