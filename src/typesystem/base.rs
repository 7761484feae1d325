use std::sync::Arc;

use crate::typesystem::PrimitiveKind;

/// Reference to a `TypeRef`
pub type TypeRefRc = Arc<TypeRef>;

/// The structural classification of a type occurrence.
///
/// A type is exactly one of these; the variants carry the data that only makes sense for
/// their branch (a rank only exists for arrays, a position only for generic parameters).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TypeFlavor {
    #[default]
    /// An ordinary named type (class, value type, interface, enum, delegate)
    Named,
    /// A generic parameter, identified by its zero-based position in the owning list
    GenericParameter {
        /// Position within the declaring type's or method's generic parameter list
        position: u32,
    },
    /// An array of `element`
    Array {
        /// The element type of the array
        element: TypeRefRc,
        /// The number of dimensions, at least 1
        rank: u32,
    },
    /// An unmanaged pointer to `element`
    Pointer {
        /// The type pointed to
        element: TypeRefRc,
    },
    /// A function pointer
    FnPtr,
}

/// Read-only snapshot of a type, as reported by the type-introspection facility.
///
/// Describes a type wherever it occurs: declaring type, parameter type, return type, generic
/// argument or array element type. Snapshots are built once and never mutated; sharing is done
/// through [`TypeRefRc`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TypeRef {
    /// `TypeNamespace` (can be empty, also for nested types which inherit it from their parent)
    pub namespace: String,
    /// `TypeName`, as stored in metadata (generic types carry their arity suffix, e.g. "List`1")
    pub name: String,
    /// The enclosing type, present iff this type is nested
    pub declaring_type: Option<TypeRefRc>,
    /// Structural classification
    pub flavor: TypeFlavor,
    /// Generic arguments of an instantiated generic type (empty for open definitions)
    pub generic_arguments: Vec<TypeRefRc>,
    /// Names of the generic parameters declared by a generic type definition
    pub generic_parameters: Vec<String>,
    /// Type is an open generic definition (e.g. "List`1" itself, not "List`1<int>")
    pub is_generic_type_definition: bool,
    /// Type occurs by reference
    pub is_by_ref: bool,
    /// Type is an enumeration
    pub is_enum: bool,
}

impl TypeRef {
    /// Create an ordinary named type
    ///
    /// ## Arguments
    /// * 'namespace' - Namespace of the type, may be empty
    /// * 'name'      - Simple name of the type
    pub fn named(namespace: &str, name: &str) -> Self {
        TypeRef {
            namespace: namespace.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Create one of the built-in `System` types
    ///
    /// ## Arguments
    /// * 'kind' - The primitive to describe
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::named(kind.namespace(), kind.name())
    }

    /// Create a generic parameter
    ///
    /// ## Arguments
    /// * 'name'     - Declared name of the parameter (e.g. "T")
    /// * 'position' - Zero-based position within the owning parameter list
    pub fn generic_parameter(name: &str, position: u32) -> Self {
        TypeRef {
            name: name.to_string(),
            flavor: TypeFlavor::GenericParameter { position },
            ..Default::default()
        }
    }

    /// Create an array type
    ///
    /// ## Arguments
    /// * 'element' - The element type
    /// * 'rank'    - Number of dimensions
    pub fn array(element: TypeRefRc, rank: u32) -> Self {
        let dimensions = ",".repeat(rank.saturating_sub(1) as usize);
        TypeRef {
            namespace: element.namespace.clone(),
            name: format!("{}[{}]", element.name, dimensions),
            flavor: TypeFlavor::Array { element, rank },
            ..Default::default()
        }
    }

    /// Create an unmanaged pointer type
    ///
    /// ## Arguments
    /// * 'element' - The type pointed to
    pub fn pointer(element: TypeRefRc) -> Self {
        TypeRef {
            namespace: element.namespace.clone(),
            name: format!("{}*", element.name),
            flavor: TypeFlavor::Pointer { element },
            ..Default::default()
        }
    }

    /// Create a function pointer type
    pub fn function_pointer() -> Self {
        TypeRef {
            name: "method".to_string(),
            flavor: TypeFlavor::FnPtr,
            ..Default::default()
        }
    }

    /// Nest this type inside `declaring`
    #[must_use]
    pub fn nested_in(mut self, declaring: &TypeRefRc) -> Self {
        self.declaring_type = Some(declaring.clone());
        self
    }

    /// Mark this type as an open generic definition declaring the given parameters
    #[must_use]
    pub fn with_generic_parameters<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.generic_parameters = names.into_iter().map(Into::into).collect();
        self.is_generic_type_definition = true;
        self
    }

    /// Instantiate this type with the given generic arguments
    #[must_use]
    pub fn with_generic_arguments<I>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = TypeRefRc>,
    {
        self.generic_arguments = arguments.into_iter().collect();
        self.generic_parameters.clear();
        self.is_generic_type_definition = false;
        self
    }

    /// Mark this occurrence as by-reference
    #[must_use]
    pub fn by_ref(mut self) -> Self {
        self.is_by_ref = true;
        self
    }

    /// Mark this type as an enumeration
    #[must_use]
    pub fn enumeration(mut self) -> Self {
        self.is_enum = true;
        self
    }

    /// Wrap into a shareable reference
    #[must_use]
    pub fn into_rc(self) -> TypeRefRc {
        Arc::new(self)
    }

    /// Is this a generic parameter
    #[must_use]
    pub fn is_generic_parameter(&self) -> bool {
        matches!(self.flavor, TypeFlavor::GenericParameter { .. })
    }

    /// Is this an array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self.flavor, TypeFlavor::Array { .. })
    }

    /// Is this type nested inside another type
    #[must_use]
    pub fn is_nested(&self) -> bool {
        self.declaring_type.is_some()
    }

    /// Position of a generic parameter, `None` for every other shape
    #[must_use]
    pub fn position(&self) -> Option<u32> {
        match self.flavor {
            TypeFlavor::GenericParameter { position } => Some(position),
            _ => None,
        }
    }

    /// Element type of arrays and pointers
    #[must_use]
    pub fn element_type(&self) -> Option<&TypeRefRc> {
        match &self.flavor {
            TypeFlavor::Array { element, .. } | TypeFlavor::Pointer { element } => Some(element),
            _ => None,
        }
    }

    /// Is this an instantiated generic type (has arguments, is not an open definition)
    #[must_use]
    pub fn is_closed_generic(&self) -> bool {
        !self.generic_arguments.is_empty() && !self.is_generic_type_definition
    }

    /// Does the name end in a metadata arity suffix ("`" followed by digits)
    #[must_use]
    pub fn has_arity_marker(&self) -> bool {
        strip_arity(&self.name).len() != self.name.len()
    }

    /// The namespace of this type; nested types without an own namespace report the one of
    /// their outermost declaring type
    #[must_use]
    pub fn effective_namespace(&self) -> &str {
        let mut current = self;
        while current.namespace.is_empty() {
            match &current.declaring_type {
                Some(parent) => current = parent,
                None => break,
            }
        }
        &current.namespace
    }

    /// Names that identify generic parameters owned by this type.
    ///
    /// For a definition these are the declared parameter names, for an instantiation the names
    /// of those generic arguments that are themselves generic parameters.
    #[must_use]
    pub fn generic_scope_names(&self) -> Vec<&str> {
        if self.generic_parameters.is_empty() {
            self.generic_arguments
                .iter()
                .filter(|argument| argument.is_generic_parameter())
                .map(|argument| argument.name.as_str())
                .collect()
        } else {
            self.generic_parameters.iter().map(String::as_str).collect()
        }
    }

    /// Returns the full name (Namespace.Name) of the type
    #[must_use]
    pub fn fullname(&self) -> String {
        let namespace = self.effective_namespace();
        if namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{0}.{1}", namespace, self.name)
        }
    }
}

/// Remove a trailing arity marker ("List`1" -> "List")
pub(crate) fn strip_arity(name: &str) -> &str {
    match name.rfind('`') {
        Some(index)
            if index + 1 < name.len() && name[index + 1..].bytes().all(|b| b.is_ascii_digit()) =>
        {
            &name[..index]
        }
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_are_exclusive() {
        let int = TypeRef::primitive(PrimitiveKind::I4).into_rc();
        let param = TypeRef::generic_parameter("T", 0);
        let array = TypeRef::array(int.clone(), 2);

        assert!(param.is_generic_parameter());
        assert!(!param.is_array());
        assert_eq!(param.position(), Some(0));

        assert!(array.is_array());
        assert!(!array.is_generic_parameter());
        assert_eq!(array.position(), None);
        assert_eq!(array.name, "Int32[,]");
        assert_eq!(array.element_type(), Some(&int));

        assert!(!int.is_array());
        assert!(!int.is_generic_parameter());
    }

    #[test]
    fn arity_marker() {
        assert_eq!(strip_arity("List`1"), "List");
        assert_eq!(strip_arity("Dictionary`2"), "Dictionary");
        assert_eq!(strip_arity("Widget"), "Widget");
        assert_eq!(strip_arity("Odd`"), "Odd`");
        assert_eq!(strip_arity("Odd`x"), "Odd`x");

        assert!(TypeRef::named("System.Collections.Generic", "List`1").has_arity_marker());
        assert!(!TypeRef::named("Sample", "Widget").has_arity_marker());
    }

    #[test]
    fn nested_namespace() {
        let outer = TypeRef::named("Sample", "Outer").into_rc();
        let middle = TypeRef::named("", "Middle").nested_in(&outer).into_rc();
        let inner = TypeRef::named("", "Inner").nested_in(&middle);

        assert!(inner.is_nested());
        assert_eq!(inner.effective_namespace(), "Sample");
        assert_eq!(inner.fullname(), "Sample.Inner");
        assert_eq!(TypeRef::named("", "Global").fullname(), "Global");
    }

    #[test]
    fn generic_scope_names() {
        let definition =
            TypeRef::named("Sample", "Pair`2").with_generic_parameters(["TKey", "TValue"]);
        assert!(definition.is_generic_type_definition);
        assert!(!definition.is_closed_generic());
        assert_eq!(definition.generic_scope_names(), vec!["TKey", "TValue"]);

        let closed = TypeRef::named("Sample", "Pair`2").with_generic_arguments([
            TypeRef::generic_parameter("U", 0).into_rc(),
            TypeRef::primitive(PrimitiveKind::String).into_rc(),
        ]);
        assert!(closed.is_closed_generic());
        assert_eq!(closed.generic_scope_names(), vec!["U"]);
    }
}
