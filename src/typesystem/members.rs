use std::sync::Arc;

use bitflags::bitflags;
use strum::{Display, EnumCount, EnumIter};

use crate::typesystem::{TypeRef, TypeRefRc};

/// Reference to a `MemberRef`
pub type MemberRefRc = Arc<MemberRef>;

/// The category of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumCount)]
pub enum MemberKind {
    /// An ordinary method, including property/event accessors and operators
    Method,
    /// An instance or static constructor
    Constructor,
    /// A field
    Field,
    /// A property
    Property,
    /// An event
    Event,
    /// A type nested inside the declaring type
    NestedType,
    #[default]
    /// A member without a documentation-id rule
    Unknown,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Member attributes relevant for naming, §II.23.1.10
    pub struct MemberFlags: u32 {
        /// Name is special, e.g. property accessor or operator
        const SPECIAL_NAME = 0x0800;
        /// Runtime should check the name encoding, e.g. constructors
        const RT_SPECIAL_NAME = 0x1000;
    }
}

/// A single parameter of a method, constructor or indexer accessor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterRef {
    /// Name of the parameter, if known
    pub name: Option<String>,
    /// The type of this parameter
    pub base: TypeRefRc,
    /// `out` parameter
    pub is_out: bool,
}

impl ParameterRef {
    /// Create an unnamed parameter of type `base`
    pub fn new(base: TypeRefRc) -> Self {
        ParameterRef {
            name: None,
            base,
            is_out: false,
        }
    }

    /// Attach a name
    #[must_use]
    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Mark as an `out` parameter
    #[must_use]
    pub fn out(mut self) -> Self {
        self.is_out = true;
        self
    }
}

/// Read-only snapshot of a member belonging to a declaring type.
///
/// Built once by the type-introspection facility per queried member. Which attributes are
/// meaningful depends on `kind`: parameters apply to methods, constructors and indexer
/// accessors, `getter`/`setter` to properties, and `return_type` is required for conversion
/// operators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberRef {
    /// Category of the member
    pub kind: MemberKind,
    /// Name as stored in metadata (".ctor", "get_Item", "op_Explicit", ...)
    pub name: String,
    /// The type that declares this member
    pub declaring_type: TypeRefRc,
    /// Naming related attributes
    pub flags: MemberFlags,
    /// Names of the generic parameters this method declares itself
    pub generic_parameters: Vec<String>,
    /// Parameters in declaration order
    pub parameters: Vec<ParameterRef>,
    /// The `Method` that retrieves this property
    pub getter: Option<MemberRefRc>,
    /// The `Method` that sets this property
    pub setter: Option<MemberRefRc>,
    /// Return type, required for conversion operators
    pub return_type: Option<TypeRefRc>,
}

impl MemberRef {
    /// Create a member of any kind
    ///
    /// ## Arguments
    /// * 'kind'      - Category of the member
    /// * 'declaring' - The type that declares the member
    /// * 'name'      - Metadata name of the member
    pub fn new(kind: MemberKind, declaring: &TypeRefRc, name: &str) -> Self {
        MemberRef {
            kind,
            name: name.to_string(),
            declaring_type: declaring.clone(),
            flags: MemberFlags::empty(),
            generic_parameters: Vec::new(),
            parameters: Vec::new(),
            getter: None,
            setter: None,
            return_type: None,
        }
    }

    /// Create a method
    pub fn method(declaring: &TypeRefRc, name: &str) -> Self {
        Self::new(MemberKind::Method, declaring, name)
    }

    /// Create an instance constructor
    pub fn constructor(declaring: &TypeRefRc) -> Self {
        let mut ctor = Self::new(MemberKind::Constructor, declaring, ".ctor");
        ctor.flags = MemberFlags::SPECIAL_NAME | MemberFlags::RT_SPECIAL_NAME;
        ctor
    }

    /// Create a type initializer
    pub fn static_constructor(declaring: &TypeRefRc) -> Self {
        let mut cctor = Self::new(MemberKind::Constructor, declaring, ".cctor");
        cctor.flags = MemberFlags::SPECIAL_NAME | MemberFlags::RT_SPECIAL_NAME;
        cctor
    }

    /// Create a field
    pub fn field(declaring: &TypeRefRc, name: &str) -> Self {
        Self::new(MemberKind::Field, declaring, name)
    }

    /// Create a property
    pub fn property(declaring: &TypeRefRc, name: &str) -> Self {
        Self::new(MemberKind::Property, declaring, name)
    }

    /// Create an event
    pub fn event(declaring: &TypeRefRc, name: &str) -> Self {
        Self::new(MemberKind::Event, declaring, name)
    }

    /// Create a nested type entry
    pub fn nested_type(declaring: &TypeRefRc, name: &str) -> Self {
        Self::new(MemberKind::NestedType, declaring, name)
    }

    /// Mark the name as compiler synthesized
    #[must_use]
    pub fn special_name(mut self) -> Self {
        self.flags |= MemberFlags::SPECIAL_NAME;
        self
    }

    /// Append a parameter of type `base`
    #[must_use]
    pub fn with_parameter(mut self, base: TypeRefRc) -> Self {
        self.parameters.push(ParameterRef::new(base));
        self
    }

    /// Append a fully described parameter
    #[must_use]
    pub fn with_parameter_ref(mut self, parameter: ParameterRef) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Declare the method's own generic parameters
    #[must_use]
    pub fn with_generic_parameters<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.generic_parameters = names.into_iter().map(Into::into).collect();
        self
    }

    /// Attach the get accessor of a property
    #[must_use]
    pub fn with_getter(mut self, getter: MemberRef) -> Self {
        self.getter = Some(Arc::new(getter));
        self
    }

    /// Attach the set accessor of a property
    #[must_use]
    pub fn with_setter(mut self, setter: MemberRef) -> Self {
        self.setter = Some(Arc::new(setter));
        self
    }

    /// Set the return type
    #[must_use]
    pub fn returns(mut self, return_type: TypeRefRc) -> Self {
        self.return_type = Some(return_type);
        self
    }

    /// Wrap into a shareable reference
    #[must_use]
    pub fn into_rc(self) -> MemberRefRc {
        Arc::new(self)
    }

    /// Is the name compiler synthesized
    #[must_use]
    pub fn is_special_name(&self) -> bool {
        self.flags.contains(MemberFlags::SPECIAL_NAME)
    }

    /// Does this method declare generic parameters of its own
    #[must_use]
    pub fn is_generic_method(&self) -> bool {
        !self.generic_parameters.is_empty()
    }

    /// Number of generic parameters declared by the method itself
    #[must_use]
    pub fn generic_arity(&self) -> usize {
        self.generic_parameters.len()
    }

    /// Is this the get or set accessor of an indexer
    #[must_use]
    pub fn is_indexer_accessor(&self) -> bool {
        self.kind == MemberKind::Method
            && self.is_special_name()
            && (self.name == "get_Item" || self.name == "set_Item")
    }

    /// Is this an `explicit` or `implicit` conversion operator
    #[must_use]
    pub fn is_conversion_operator(&self) -> bool {
        self.kind == MemberKind::Method
            && self.is_special_name()
            && (self.name == "op_Explicit" || self.name == "op_Implicit")
    }

    /// Is this a type initializer
    #[must_use]
    pub fn is_static_constructor(&self) -> bool {
        self.kind == MemberKind::Constructor && self.name == ".cctor"
    }

    /// The type described by a `NestedType` member
    #[must_use]
    pub fn nested_type_ref(&self) -> TypeRef {
        TypeRef::named("", &self.name).nested_in(&self.declaring_type)
    }
}
