//! A depth-first enter/leave traversal engine over [`libgraphql_ast`]
//! documents and schemas.
//!
//! Implement [`Handler`] for the node kinds of interest and pass it to
//! [`visit`] along with a context value of your choosing. Each `enter_*`
//! callback decides whether the walk descends into that node's children
//! ([`VisitFlow::Continue`]) or skips them ([`VisitFlow::Prune`]); any `Err`
//! returned by a callback stops the walk and comes back from [`visit`]
//! wrapped in a [`VisitError`] that records where in the tree it happened.

mod handler;
mod node_kind;
mod visit_error;
mod visit_flow;
mod visit_root;
mod visitor;

pub use handler::Handler;
pub use node_kind::NodeKind;
pub use visit_error::VisitError;
pub use visit_error::VisitStage;
pub use visit_flow::EnterResult;
pub use visit_flow::HandlerError;
pub use visit_flow::LeaveResult;
pub use visit_flow::VisitFlow;
pub use visit_root::VisitRoot;
pub use visitor::visit;
pub use visitor::visit_any;

#[cfg(test)]
mod tests;
