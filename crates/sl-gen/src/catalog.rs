//! Icon catalog feeding names and images to generated products.

/// One catalog entry: a product name and the path of its icon image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDef {
    pub name: String,
    pub path: String,
}

impl IconDef {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Fallback entry used when the catalog is exhausted or blank.
    pub(crate) fn placeholder() -> Self {
        Self {
            name: "Product".to_string(),
            path: String::new(),
        }
    }
}
