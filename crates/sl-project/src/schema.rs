//! Economy document schema (format version 2).
//!
//! The wire format uses camelCase field names; defaults exist only to
//! tolerate sparse documents on load, the codec always writes every field.

use serde::{Deserialize, Serialize};
use sl_core::ProductId;

/// The only document version this codec reads or writes.
pub const FORMAT_VERSION: u32 = 2;

/// Top-level wire document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EconomyDoc {
    #[serde(default)]
    pub version: u32,
    /// Absent (as opposed to empty) nodes mark a malformed document.
    #[serde(default)]
    pub nodes: Option<Vec<ProductDef>>,
    #[serde(default)]
    pub next_node_id: u32,
    #[serde(default)]
    pub fuel_product_id: Option<ProductId>,
}

/// One serialized product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDef {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub image_path: String,
    #[serde(default)]
    pub inputs: Vec<InputDef>,
}

/// One serialized recipe input.
///
/// Ids and amounts stay raw here; they are validated when the document is
/// installed into a graph, so a negative id or a zero amount surfaces as a
/// product validation error instead of an opaque parse failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InputDef {
    pub product_id: i64,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_document_fills_defaults() {
        let doc: EconomyDoc = serde_json::from_str(r#"{"version": 2}"#).unwrap();
        assert_eq!(doc.version, 2);
        assert!(doc.nodes.is_none());
        assert_eq!(doc.next_node_id, 0);
        assert_eq!(doc.fuel_product_id, None);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let doc = EconomyDoc {
            version: FORMAT_VERSION,
            nodes: Some(vec![ProductDef {
                id: ProductId::from_index(0),
                name: "Ore".into(),
                image_path: String::new(),
                inputs: vec![InputDef {
                    product_id: 0,
                    amount: 1.0,
                }],
            }]),
            next_node_id: 1,
            fuel_product_id: None,
        };
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"nextNodeId\""));
        assert!(json.contains("\"fuelProductId\""));
        assert!(json.contains("\"imagePath\""));
        assert!(json.contains("\"productId\""));
    }
}
