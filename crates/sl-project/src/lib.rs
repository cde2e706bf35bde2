//! sl-project: the versioned economy document format.

pub mod codec;
pub mod schema;

pub use codec::{
    doc_from_graph, from_json_str, graph_from_doc, load_doc_into, load_into, load_json, save_json,
    to_json_string,
};
pub use schema::{EconomyDoc, FORMAT_VERSION, InputDef, ProductDef};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Unsupported document version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Malformed document: missing {what}")]
    Malformed { what: &'static str },

    #[error("Invalid product: {0}")]
    Product(#[from] sl_graph::ProductError),

    #[error("Graph error: {0}")]
    Graph(#[from] sl_graph::GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
