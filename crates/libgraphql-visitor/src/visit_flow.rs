/// An error returned by a [`Handler`](crate::Handler) callback. Any such
/// error aborts the whole traversal.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// What an `enter_*` callback returns.
pub type EnterResult = std::result::Result<VisitFlow, HandlerError>;

/// What a `leave_*` callback returns.
pub type LeaveResult = std::result::Result<(), HandlerError>;

/// How traversal should proceed after a successful `enter_*` callback.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum VisitFlow {
    /// Descend into the node's children.
    #[default]
    Continue,

    /// Skip the node's children. Siblings and ancestors are still visited
    /// and the node's matching `leave_*` callback still fires.
    Prune,
}
impl VisitFlow {
    pub fn is_prune(&self) -> bool {
        matches!(self, Self::Prune)
    }
}
