//! Client-side view of a remote schema, built from introspection results.

use crate::types::{IntrospectionResponse, IntrospectionSchema, IntrospectionType, NamedTypeRef};
use crate::{IntrospectionError, Result};
use std::collections::BTreeMap;

/// The schema the explorer panel renders.
///
/// Types are keyed by name. Root operation types are guaranteed to refer to
/// types present in the map.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSchema {
    query_type: Option<String>,
    mutation_type: Option<String>,
    subscription_type: Option<String>,
    types: BTreeMap<String, IntrospectionType>,
}

impl ClientSchema {
    /// Build a schema from a decoded introspection response.
    ///
    /// # Errors
    ///
    /// Returns [`IntrospectionError::Invalid`] if a type name appears twice
    /// or a root operation type names a type the response does not define.
    pub fn from_introspection(response: IntrospectionResponse) -> Result<Self> {
        Self::from_schema(response.data.schema)
    }

    fn from_schema(schema: IntrospectionSchema) -> Result<Self> {
        let mut types = BTreeMap::new();
        for ty in schema.types {
            if let Some(previous) = types.insert(ty.name.clone(), ty) {
                return Err(IntrospectionError::Invalid(format!(
                    "type \"{}\" is defined more than once",
                    previous.name
                )));
            }
        }

        let root = |root: Option<NamedTypeRef>, operation: &str| -> Result<Option<String>> {
            match root {
                Some(NamedTypeRef { name }) if !types.contains_key(&name) => {
                    Err(IntrospectionError::Invalid(format!(
                        "{operation} root type \"{name}\" is not defined"
                    )))
                }
                other => Ok(other.map(|r| r.name)),
            }
        };

        let query_type = root(schema.query_type, "query")?;
        let mutation_type = root(schema.mutation_type, "mutation")?;
        let subscription_type = root(schema.subscription_type, "subscription")?;

        tracing::debug!(types = types.len(), "Built client schema");
        Ok(Self {
            query_type,
            mutation_type,
            subscription_type,
            types,
        })
    }

    #[must_use]
    pub fn query_type(&self) -> Option<&str> {
        self.query_type.as_deref()
    }

    #[must_use]
    pub fn mutation_type(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    #[must_use]
    pub fn subscription_type(&self) -> Option<&str> {
        self.subscription_type.as_deref()
    }

    /// Look up a named type.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&IntrospectionType> {
        self.types.get(name)
    }

    /// Names of all user-visible types, sorted. Introspection types such
    /// as `__Type` are left out.
    #[must_use]
    pub fn type_names(&self) -> Vec<&str> {
        self.types
            .values()
            .filter(|ty| !ty.is_introspection_type())
            .map(|ty| ty.name.as_str())
            .collect()
    }

    /// Fields of an object or interface type with their rendered types,
    /// in declaration order. Empty for unknown or field-less types.
    #[must_use]
    pub fn fields_of(&self, type_name: &str) -> Vec<(&str, String)> {
        self.get_type(type_name)
            .and_then(|ty| ty.fields.as_deref())
            .unwrap_or_default()
            .iter()
            .map(|field| (field.name.as_str(), field.type_ref.to_type_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(schema: serde_json::Value) -> IntrospectionResponse {
        serde_json::from_value(json!({ "data": { "__schema": schema } })).unwrap()
    }

    fn object(name: &str, fields: &serde_json::Value) -> serde_json::Value {
        json!({ "kind": "OBJECT", "name": name, "fields": fields, "interfaces": [] })
    }

    fn scalar_field(name: &str, scalar: &str) -> serde_json::Value {
        json!({
            "name": name,
            "args": [],
            "type": { "kind": "SCALAR", "name": scalar, "ofType": null }
        })
    }

    #[test]
    fn test_root_types_and_type_names() {
        let schema = ClientSchema::from_introspection(response(json!({
            "queryType": { "name": "Query" },
            "mutationType": null,
            "subscriptionType": { "name": "Subscription" },
            "types": [
                object("Query", &json!([scalar_field("hello", "String")])),
                object("Subscription", &json!([scalar_field("tick", "Int")])),
                { "kind": "SCALAR", "name": "String" },
                { "kind": "SCALAR", "name": "Int" },
                object("__Schema", &json!([])),
            ],
        })))
        .unwrap();

        assert_eq!(schema.query_type(), Some("Query"));
        assert_eq!(schema.mutation_type(), None);
        assert_eq!(schema.subscription_type(), Some("Subscription"));
        assert_eq!(
            schema.type_names(),
            vec!["Int", "Query", "String", "Subscription"]
        );
        assert_eq!(
            schema.fields_of("Query"),
            vec![("hello", "String".to_string())]
        );
        assert!(schema.fields_of("String").is_empty());
        assert!(schema.get_type("Missing").is_none());
    }

    #[test]
    fn test_undefined_root_type_is_invalid() {
        let result = ClientSchema::from_introspection(response(json!({
            "queryType": { "name": "Query" },
            "types": [{ "kind": "SCALAR", "name": "String" }],
        })));
        assert_eq!(
            result,
            Err(IntrospectionError::Invalid(
                "query root type \"Query\" is not defined".to_string()
            ))
        );
    }

    #[test]
    fn test_duplicate_type_is_invalid() {
        let result = ClientSchema::from_introspection(response(json!({
            "queryType": null,
            "types": [
                { "kind": "SCALAR", "name": "String" },
                { "kind": "SCALAR", "name": "String" },
            ],
        })));
        assert!(matches!(result, Err(IntrospectionError::Invalid(_))));
    }
}
