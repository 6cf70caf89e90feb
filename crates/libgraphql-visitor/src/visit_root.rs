use crate::NodeKind;
use libgraphql_ast::Document;
use libgraphql_ast::Schema;

/// A node that a traversal can start from.
#[derive(Clone, Copy, Debug)]
pub enum VisitRoot<'a> {
    Document(&'a Document),
    Schema(&'a Schema),
}
impl VisitRoot<'_> {
    pub fn node_kind(&self) -> NodeKind {
        match self {
            Self::Document(_) => NodeKind::Document,
            Self::Schema(_) => NodeKind::Schema,
        }
    }
}
impl<'a> std::convert::From<&'a Document> for VisitRoot<'a> {
    fn from(value: &'a Document) -> Self {
        Self::Document(value)
    }
}
impl<'a> std::convert::From<&'a Schema> for VisitRoot<'a> {
    fn from(value: &'a Schema) -> Self {
        Self::Schema(value)
    }
}
