use std::fmt;

use serde::{Deserialize, Serialize};

/// How a described type can (or cannot) be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeShape {
    /// A directly constructible type.
    Concrete,
    /// A pure contract with no state of its own (trait object, interface).
    Interface,
    /// A base type that only exists through its subtypes.
    Abstract,
}

/// A single generic argument of a described type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum GenericArg {
    /// A type parameter that has not been bound yet (`T` in `Vec<T>`).
    Unbound {
        /// Name of the type parameter.
        name: String,
    },
    /// A type parameter bound to a concrete argument.
    Bound {
        /// Descriptor of the argument type.
        ty: TypeDescriptor,
    },
}

/// Describes a type for instantiability checks.
///
/// Rust has no runtime view of interfaces, abstract bases or generic
/// definitions, so callers that broker types across a plugin or
/// deserialization boundary describe them explicitly with this value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor {
    name: String,
    shape: TypeShape,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    args: Vec<GenericArg>,
}

impl TypeDescriptor {
    /// Describes a concrete, non-generic type.
    pub fn concrete(name: impl Into<String>) -> Self {
        Self::with_shape(name, TypeShape::Concrete)
    }

    /// Describes an interface type.
    pub fn interface(name: impl Into<String>) -> Self {
        Self::with_shape(name, TypeShape::Interface)
    }

    /// Describes an abstract base type.
    pub fn abstract_class(name: impl Into<String>) -> Self {
        Self::with_shape(name, TypeShape::Abstract)
    }

    /// Describes an open generic definition whose parameters are all unbound.
    pub fn generic_definition<I, S>(name: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args = params
            .into_iter()
            .map(|name| GenericArg::Unbound { name: name.into() })
            .collect();
        Self {
            name: name.into(),
            shape: TypeShape::Concrete,
            args,
        }
    }

    /// Describes a Rust type by its compiler-provided name.
    ///
    /// Every Rust type that can be named is fully instantiated, so the result
    /// is always concrete.
    pub fn of<T: ?Sized>() -> Self {
        Self::concrete(std::any::type_name::<T>())
    }

    fn with_shape(name: impl Into<String>, shape: TypeShape) -> Self {
        Self {
            name: name.into(),
            shape,
            args: Vec::new(),
        }
    }

    /// Binds the generic parameters positionally, producing a closed type.
    ///
    /// Parameters without a matching argument stay unbound; surplus arguments
    /// are appended.
    pub fn bind<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = TypeDescriptor>,
    {
        let mut args = args.into_iter();
        for slot in self.args.iter_mut() {
            if let GenericArg::Unbound { .. } = slot {
                match args.next() {
                    Some(ty) => *slot = GenericArg::Bound { ty },
                    None => break,
                }
            }
        }
        self.args.extend(args.map(|ty| GenericArg::Bound { ty }));
        self
    }

    /// Type name without generic arguments.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Construction shape.
    pub fn shape(&self) -> TypeShape {
        self.shape
    }

    /// Generic arguments, in declaration order.
    pub fn args(&self) -> &[GenericArg] {
        &self.args
    }

    /// True when any generic parameter, at any nesting depth, is unbound.
    pub fn is_open_generic(&self) -> bool {
        self.args.iter().any(|arg| match arg {
            GenericArg::Unbound { .. } => true,
            GenericArg::Bound { ty } => ty.is_open_generic(),
        })
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.args.is_empty() {
            return Ok(());
        }
        f.write_str("<")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match arg {
                GenericArg::Unbound { name } => f.write_str(name)?,
                GenericArg::Bound { ty } => write!(f, "{}", ty)?,
            }
        }
        f.write_str(">")
    }
}
