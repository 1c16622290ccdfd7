use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JSON:API resource object returned by the Up API.
///
/// Only `id` and `type` are modelled. Every other member (`attributes`,
/// `relationships`, `links`, ...) is kept verbatim in `members` so payloads
/// pass through to the MCP host unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Resource {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub members: Map<String, Value>,
}

impl Resource {
    /// Ids linked through the named relationship, e.g. a transaction's `tags`.
    ///
    /// Handles both to-many (`data: [...]`) and to-one (`data: {...}`)
    /// relationships; a missing or null relationship yields no ids.
    pub fn relationship_ids(&self, name: &str) -> Vec<&str> {
        let Some(data) = self
            .members
            .get("relationships")
            .and_then(|r| r.get(name))
            .and_then(|r| r.get("data"))
        else {
            return Vec::new();
        };

        match data {
            Value::Array(items) => items
                .iter()
                .filter_map(|item| item.get("id").and_then(Value::as_str))
                .collect(),
            Value::Object(_) => data.get("id").and_then(Value::as_str).into_iter().collect(),
            _ => Vec::new(),
        }
    }
}

/// Pagination links of a list document. `None` marks the first or last page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PageLinks {
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
}

/// A list response, e.g. `GET /accounts`.
///
/// Category listings are not paginated and come without `links`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ListDocument {
    pub data: Vec<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<PageLinks>,
}

impl ListDocument {
    pub fn next_link(&self) -> Option<&str> {
        self.links.as_ref().and_then(|l| l.next.as_deref())
    }

    pub fn prev_link(&self) -> Option<&str> {
        self.links.as_ref().and_then(|l| l.prev.as_deref())
    }
}

/// A single-resource response, e.g. `GET /accounts/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Document {
    pub data: Resource,
}

/// Reference to a resource inside a relationship payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

impl ResourceIdentifier {
    pub fn category(id: impl Into<String>) -> Self {
        Self {
            kind: "categories".to_string(),
            id: id.into(),
        }
    }

    pub fn tag(id: impl Into<String>) -> Self {
        Self {
            kind: "tags".to_string(),
            id: id.into(),
        }
    }
}

/// Request body for relationship endpoints.
///
/// `Relationship<Option<ResourceIdentifier>>` sets or clears a to-one link;
/// `Relationship<Vec<ResourceIdentifier>>` adds or removes to-many links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship<T> {
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn transaction() -> Resource {
        serde_json::from_value(json!({
            "type": "transactions",
            "id": "tx-1",
            "attributes": { "description": "Coffee", "amount": { "value": "-4.50" } },
            "relationships": {
                "category": { "data": { "type": "categories", "id": "restaurants-and-cafes" } },
                "tags": { "data": [
                    { "type": "tags", "id": "Holiday" },
                    { "type": "tags", "id": "Work" }
                ] },
                "parentCategory": { "data": null }
            }
        }))
        .unwrap()
    }

    #[test]
    fn resource_round_trips_unknown_members() {
        let raw = json!({
            "type": "accounts",
            "id": "acc-1",
            "attributes": { "displayName": "Spending" },
            "links": { "self": "https://api.up.com.au/api/v1/accounts/acc-1" }
        });

        let resource: Resource = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(resource.id, "acc-1");
        assert_eq!(resource.kind, "accounts");
        assert_eq!(serde_json::to_value(&resource).unwrap(), raw);
    }

    #[test]
    fn relationship_ids_reads_to_many_links() {
        assert_eq!(transaction().relationship_ids("tags"), vec!["Holiday", "Work"]);
    }

    #[test]
    fn relationship_ids_reads_to_one_links() {
        assert_eq!(
            transaction().relationship_ids("category"),
            vec!["restaurants-and-cafes"]
        );
    }

    #[test]
    fn relationship_ids_is_empty_for_null_or_missing_links() {
        let tx = transaction();
        assert!(tx.relationship_ids("parentCategory").is_empty());
        assert!(tx.relationship_ids("account").is_empty());
    }

    #[test]
    fn list_document_without_links_keeps_them_absent() {
        let doc: ListDocument = serde_json::from_value(json!({ "data": [] })).unwrap();
        assert!(doc.links.is_none());
        assert!(doc.next_link().is_none());
        assert_eq!(serde_json::to_value(&doc).unwrap(), json!({ "data": [] }));
    }

    #[test]
    fn list_document_exposes_page_links() {
        let doc: ListDocument = serde_json::from_value(json!({
            "data": [],
            "links": { "prev": null, "next": "https://api.up.com.au/api/v1/tags?page%5Bafter%5D=abc" }
        }))
        .unwrap();

        assert_eq!(
            doc.next_link(),
            Some("https://api.up.com.au/api/v1/tags?page%5Bafter%5D=abc")
        );
        assert_eq!(doc.prev_link(), None);
    }

    #[test]
    fn relationship_bodies_match_json_api_shape() {
        let clear: Relationship<Option<ResourceIdentifier>> = Relationship { data: None };
        assert_eq!(serde_json::to_value(&clear).unwrap(), json!({ "data": null }));

        let tags = Relationship {
            data: vec![ResourceIdentifier::tag("Holiday")],
        };
        assert_eq!(
            serde_json::to_value(&tags).unwrap(),
            json!({ "data": [{ "type": "tags", "id": "Holiday" }] })
        );
    }
}
