use crate::FragmentSpread;
use crate::InlineFragment;
use crate::SelectionField;

/// A single entry within a selection set.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Selection {
    Field(SelectionField),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}
impl Selection {
    pub fn as_field(&self) -> Option<&SelectionField> {
        if let Self::Field(field) = self {
            Some(field)
        } else {
            None
        }
    }
}
impl std::convert::From<SelectionField> for Selection {
    fn from(value: SelectionField) -> Self {
        Self::Field(value)
    }
}
impl std::convert::From<FragmentSpread> for Selection {
    fn from(value: FragmentSpread) -> Self {
        Self::FragmentSpread(value)
    }
}
impl std::convert::From<InlineFragment> for Selection {
    fn from(value: InlineFragment) -> Self {
        Self::InlineFragment(value)
    }
}
