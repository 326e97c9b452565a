//! Render context - the data value every template of a run is rendered against

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::core::config::Configuration;
use crate::core::utils::to_proper_case;
use crate::infrastructure::openapi::OperationDefinition;

/// Operations sharing one tag, rendered as one handler interface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagGroup {
    /// Tag as written in the OpenAPI document
    pub tag: String,
    /// Go identifier derived from the tag (`cat` -> `Cat`)
    pub name: String,
    pub operations: Vec<OperationDefinition>,
}

/// Data handed to the generators: operations, tag groups and the active configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderContext {
    pub operations: Vec<OperationDefinition>,
    pub groups: Vec<TagGroup>,
    pub ungrouped: Vec<OperationDefinition>,
    pub opts: Configuration,
}

impl RenderContext {
    pub fn new(operations: Vec<OperationDefinition>, config: &Configuration) -> Self {
        let mut groups: Vec<TagGroup> = Vec::new();
        let mut ungrouped = Vec::new();

        for operation in &operations {
            // Tags that yield no Go identifier stay in the main interface
            let Some((tag, name)) = operation
                .tag
                .as_ref()
                .map(|tag| (tag, to_proper_case(tag)))
                .filter(|(_, name)| name.starts_with(char::is_alphabetic))
            else {
                ungrouped.push(operation.clone());
                continue;
            };

            match groups.iter_mut().find(|group| group.name == name) {
                Some(group) => group.operations.push(operation.clone()),
                None => groups.push(TagGroup {
                    tag: tag.clone(),
                    name,
                    operations: vec![operation.clone()],
                }),
            }
        }

        Self {
            operations,
            groups,
            ungrouped,
            opts: config.clone(),
        }
    }

    /// Serialize the context into the value passed to the template engine
    pub fn to_value(&self) -> Result<JsonValue, serde_json::Error> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::OutputOptions;

    fn operations() -> Vec<OperationDefinition> {
        vec![
            OperationDefinition::new("GetCatStatus", "GET", "/cat").with_tag("cat"),
            OperationDefinition::new("Ping", "GET", "/ping"),
            OperationDefinition::new("ListDogs", "GET", "/dogs").with_tag("dog-house"),
            OperationDefinition::new("FeedCat", "POST", "/cat/food").with_tag("Cat"),
        ]
    }

    #[test]
    fn test_groups_follow_first_seen_order() {
        let context = RenderContext::new(operations(), &Configuration::default());

        let names: Vec<_> = context.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Cat", "DogHouse"]);

        let cat_ops: Vec<_> = context.groups[0]
            .operations
            .iter()
            .map(|o| o.operation_id.as_str())
            .collect();
        assert_eq!(cat_ops, vec!["GetCatStatus", "FeedCat"]);
        assert_eq!(context.groups[0].tag, "cat");
    }

    #[test]
    fn test_untagged_operations_are_ungrouped() {
        let context = RenderContext::new(operations(), &Configuration::default());
        assert_eq!(context.ungrouped.len(), 1);
        assert_eq!(context.ungrouped[0].operation_id, "Ping");
        assert_eq!(context.operations.len(), 4);
    }

    #[test]
    fn test_tags_without_identifier_are_ungrouped() {
        let operations = vec![
            OperationDefinition::new("Shout", "GET", "/shout").with_tag("!!!"),
            OperationDefinition::new("Whisper", "GET", "/whisper").with_tag("..."),
            OperationDefinition::new("Year", "GET", "/year").with_tag("2024"),
            OperationDefinition::new("GetCatStatus", "GET", "/cat").with_tag("cat"),
        ];
        let context = RenderContext::new(operations, &Configuration::default());

        let names: Vec<_> = context.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Cat"]);

        let ungrouped: Vec<_> = context
            .ungrouped
            .iter()
            .map(|o| o.operation_id.as_str())
            .collect();
        assert_eq!(ungrouped, vec!["Shout", "Whisper", "Year"]);
    }

    #[test]
    fn test_to_value_exposes_configuration() {
        let config = Configuration {
            output_options: OutputOptions { group_by_tag: true },
            ..Default::default()
        };
        let value = RenderContext::new(Vec::new(), &config).to_value().unwrap();

        assert_eq!(value["opts"]["output_options"]["group_by_tag"], true);
        assert_eq!(value["opts"]["package_name"], "api");
        assert_eq!(value["operations"], serde_json::json!([]));
        assert_eq!(value["groups"], serde_json::json!([]));
    }
}
