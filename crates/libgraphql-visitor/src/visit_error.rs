use crate::HandlerError;
use crate::NodeKind;
use thiserror::Error;

/// The step of a traversal that an error propagated through.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VisitStage {
    /// The `enter_*` callback for this kind failed.
    Enter(NodeKind),

    /// The `leave_*` callback for this kind failed.
    Leave(NodeKind),

    /// Something failed while visiting a node (or list) of this kind.
    Visit(NodeKind),
}
impl VisitStage {
    pub fn node_kind(&self) -> NodeKind {
        match self {
            Self::Enter(kind) | Self::Leave(kind) | Self::Visit(kind) => *kind,
        }
    }
}
impl std::fmt::Display for VisitStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enter(kind) => write!(f, "visit {kind} (enter)"),
            Self::Leave(kind) => write!(f, "visit {kind} (leave)"),
            Self::Visit(kind) => write!(f, "visit {kind}"),
        }
    }
}

/// The error a traversal stops with.
///
/// Handler failures are wrapped in one [`VisitError::Stage`] per step they
/// propagate through, so the rendered message reads as a trail from the root
/// down to the failing callback. The underlying cause stays reachable through
/// [`VisitError::root_cause`] and [`VisitError::handler_error`].
#[derive(Debug, Error)]
pub enum VisitError {
    #[error(transparent)]
    Handler(HandlerError),

    #[error("invalid input type for visit: `{type_name}`")]
    InvalidInputType {
        type_name: &'static str,
    },

    #[error("failed to {stage}: {source}")]
    Stage {
        stage: VisitStage,
        #[source]
        source: Box<VisitError>,
    },
}
impl VisitError {
    pub(crate) fn in_stage(self, stage: VisitStage) -> Self {
        Self::Stage {
            stage,
            source: Box::new(self),
        }
    }

    /// Downcast the underlying handler error to a concrete type.
    pub fn downcast_handler_error_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.handler_error()?.downcast_ref::<E>()
    }

    /// The error returned by the failing callback, if a callback failed.
    pub fn handler_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self.root_cause() {
            Self::Handler(err) => Some(err.as_ref()),
            _ => None,
        }
    }

    pub fn is_invalid_input_type(&self) -> bool {
        matches!(self.root_cause(), Self::InvalidInputType { .. })
    }

    /// The innermost error, with every [`VisitError::Stage`] wrapper removed.
    pub fn root_cause(&self) -> &VisitError {
        let mut err = self;
        while let Self::Stage { source, .. } = err {
            err = source.as_ref();
        }
        err
    }

    /// The stages this error propagated through, outermost (closest to the
    /// root node) first.
    pub fn stages(&self) -> Vec<VisitStage> {
        let mut stages = vec![];
        let mut err = self;
        while let Self::Stage { stage, source } = err {
            stages.push(*stage);
            err = source.as_ref();
        }
        stages
    }
}
