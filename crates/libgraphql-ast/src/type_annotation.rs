use crate::Named;
use inherent::inherent;

/// A type reference as written on a variable, field, argument, or union
/// member.
///
/// Non-null wrapping is not a variant of its own: each concrete annotation
/// carries its own nullability flag, so `[String!]!` is a non-null
/// [`ListType`] whose inner [`NamedType`] is also non-null.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Type {
    List(ListType),
    Named(NamedType),
}
impl Type {
    /// Unwrap the [`ListType`] if this annotation is one.
    pub fn as_list_type(&self) -> Option<&ListType> {
        if let Self::List(list) = self {
            Some(list)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedType`] if this annotation is one.
    pub fn as_named_type(&self) -> Option<&NamedType> {
        if let Self::Named(named) = self {
            Some(named)
        } else {
            None
        }
    }

    /// Recursively unwrap list wrappers and return the innermost
    /// [`NamedType`].
    pub fn innermost_named_type(&self) -> &NamedType {
        match self {
            Self::List(list) => list.inner_type().innermost_named_type(),
            Self::Named(named) => named,
        }
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::List(list) => list.nullable(),
            Self::Named(named) => named.nullable(),
        }
    }

    pub fn set_nullable(&mut self, nullable: bool) {
        match self {
            Self::List(list) => list.set_nullable(nullable),
            Self::Named(named) => named.set_nullable(nullable),
        }
    }
}
impl std::convert::From<ListType> for Type {
    fn from(value: ListType) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedType> for Type {
    fn from(value: NamedType) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list) => write!(
                f,
                "[{}]{}",
                list.inner_type(),
                if list.nullable() { "" } else { "!" },
            ),

            Self::Named(named) => write!(
                f,
                "{}{}",
                named.name(),
                if named.nullable() { "" } else { "!" },
            ),
        }
    }
}

/// A reference to a type by name (e.g. `User` or `String!`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedType {
    name: String,
    nullable: bool,
}
impl NamedType {
    /// Create a nullable reference to the type named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: true,
        }
    }

    /// Same as [`NamedType::new`], but already marked non-null.
    pub fn non_null(name: impl Into<String>) -> Self {
        let mut named = Self::new(name);
        named.set_nullable(false);
        named
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn set_nullable(&mut self, nullable: bool) {
        self.nullable = nullable;
    }
}
#[inherent]
impl Named for NamedType {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// A list wrapper around another [`Type`] (e.g. `[User]`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListType {
    inner_type: Box<Type>,
    nullable: bool,
}
impl ListType {
    /// Create a nullable list of `inner_type`.
    pub fn new(inner_type: impl Into<Type>) -> Self {
        Self {
            inner_type: Box::new(inner_type.into()),
            nullable: true,
        }
    }

    pub fn inner_type(&self) -> &Type {
        &self.inner_type
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn set_nullable(&mut self, nullable: bool) {
        self.nullable = nullable;
    }
}
