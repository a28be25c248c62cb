//! Runtime identity of conversion target types.

use std::any::{type_name, TypeId};
use std::fmt::{Display, Formatter};

/// Identifies one conversion target at runtime. Tag equality replaces the
/// reflection queries a host framework would otherwise perform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeTag {
  id: TypeId,
  name: &'static str,
}

impl TypeTag {
  /// Tag for the concrete type `T`.
  #[must_use]
  pub fn of<T: 'static>() -> Self {
    Self {
      id: TypeId::of::<T>(),
      name: type_name::<T>(),
    }
  }

  /// Tag for `Option<T>`, the nullable-wrapped form of `T`.
  #[must_use]
  pub fn optional_of<T: 'static>() -> Self {
    Self::of::<Option<T>>()
  }

  /// The static type name, as used in error reports.
  #[must_use]
  pub fn name(&self) -> &'static str {
    self.name
  }
}

impl Display for TypeTag {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name)
  }
}
