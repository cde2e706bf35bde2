//! Graph <-> document conversion and the JSON entry points.

use std::path::Path;

use sl_core::ProductId;
use sl_graph::{EconomyGraph, Product, ProductError, ProductInput};

use crate::schema::{EconomyDoc, FORMAT_VERSION, InputDef, ProductDef};
use crate::{ProjectError, ProjectResult};

/// Capture a graph as a version-2 document.
pub fn doc_from_graph(graph: &EconomyGraph) -> EconomyDoc {
    EconomyDoc {
        version: FORMAT_VERSION,
        nodes: Some(graph.products().iter().map(product_def).collect()),
        next_node_id: graph.next_node_id(),
        fuel_product_id: graph.fuel_product_id(),
    }
}

/// Build a fresh graph from a parsed document.
pub fn graph_from_doc(doc: &EconomyDoc) -> ProjectResult<EconomyGraph> {
    let mut graph = EconomyGraph::new();
    load_doc_into(&mut graph, doc)?;
    Ok(graph)
}

/// Install a parsed document into `graph`, replacing its contents.
///
/// The whole document is validated before the swap, so the previous graph
/// survives a rejected load untouched.
pub fn load_doc_into(graph: &mut EconomyGraph, doc: &EconomyDoc) -> ProjectResult<()> {
    if doc.version != FORMAT_VERSION {
        return Err(ProjectError::UnsupportedVersion {
            version: doc.version,
        });
    }
    let Some(defs) = &doc.nodes else {
        return Err(ProjectError::Malformed { what: "nodes" });
    };
    let mut products = Vec::with_capacity(defs.len());
    for def in defs {
        products.push(product_from_def(def)?);
    }
    graph.load_parts(products, doc.next_node_id, doc.fuel_product_id)?;
    Ok(())
}

/// Parse a JSON document text into a fresh graph.
pub fn from_json_str(text: &str) -> ProjectResult<EconomyGraph> {
    let doc: EconomyDoc = serde_json::from_str(text)?;
    graph_from_doc(&doc)
}

/// Parse a JSON document text into an existing graph, replacing it.
pub fn load_into(graph: &mut EconomyGraph, text: &str) -> ProjectResult<()> {
    let doc: EconomyDoc = serde_json::from_str(text)?;
    load_doc_into(graph, &doc)
}

/// Serialize a graph to pretty-printed document JSON.
pub fn to_json_string(graph: &EconomyGraph) -> ProjectResult<String> {
    Ok(serde_json::to_string_pretty(&doc_from_graph(graph))?)
}

pub fn load_json(path: &Path) -> ProjectResult<EconomyGraph> {
    let content = std::fs::read_to_string(path)?;
    from_json_str(&content)
}

pub fn save_json(path: &Path, graph: &EconomyGraph) -> ProjectResult<()> {
    std::fs::write(path, to_json_string(graph)?)?;
    Ok(())
}

fn product_def(product: &Product) -> ProductDef {
    ProductDef {
        id: product.id,
        name: product.name.clone(),
        image_path: product.image_path.clone(),
        inputs: product
            .inputs
            .iter()
            .map(|input| InputDef {
                product_id: i64::from(input.product_id.index()),
                amount: input.amount,
            })
            .collect(),
    }
}

fn product_from_def(def: &ProductDef) -> ProjectResult<Product> {
    let mut inputs = Vec::with_capacity(def.inputs.len());
    for (index, input) in def.inputs.iter().enumerate() {
        if input.product_id < 0 || input.product_id >= i64::from(u32::MAX) {
            return Err(ProductError::BadInputId { index }.into());
        }
        inputs.push(ProductInput {
            product_id: ProductId::from_index(input.product_id as u32),
            amount: input.amount,
        });
    }
    let product = Product {
        id: def.id,
        name: def.name.clone(),
        image_path: def.image_path.clone(),
        inputs,
        position: None,
    };
    product.validate()?;
    Ok(product)
}
