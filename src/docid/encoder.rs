//! The identifier encoder.
//!
//! [`DocIdEncoder`] maps member descriptors to their canonical documentation id. All methods are
//! pure: they only read the descriptor tree they are given and never keep a reference to it past
//! the call, so a single encoder can be shared freely between threads.

use crate::{
    docid::{EncoderConfig, GenericScope, IdPrefix},
    typesystem::{strip_arity, MemberKind, MemberRef, ParameterRef, TypeFlavor, TypeRef},
    Error::{RecursionLimit, Unsupported},
    Result,
};

/// Generic parameter names and signature context of the occurrence being encoded
#[derive(Clone, Copy, Default)]
struct Scope<'a> {
    /// Parameters declared by the declaring type (rendered with one back-tick)
    type_generics: &'a [&'a str],
    /// Parameters declared by the method itself (rendered with two back-ticks)
    method_generics: &'a [&'a str],
    /// The type occurs in a parameter list or as an operator return type
    in_signature: bool,
}

/// Computes documentation ids for types and members
///
/// ```rust
/// use cildocid::{docid::DocIdEncoder, typesystem::{MemberRef, PrimitiveKind, TypeRef}};
///
/// let widget = TypeRef::named("Sample", "Widget").into_rc();
/// let ctor = MemberRef::constructor(&widget)
///     .with_parameter(TypeRef::primitive(PrimitiveKind::String).into_rc());
///
/// let encoder = DocIdEncoder::new();
/// assert_eq!(encoder.method_id(&ctor)?, "M:Sample.Widget.#ctor(System.String)");
/// # Ok::<(), cildocid::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DocIdEncoder {
    config: EncoderConfig,
}

impl DocIdEncoder {
    /// Create an encoder with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with a custom configuration
    ///
    /// ## Arguments
    /// * 'config' - The configuration to use
    #[must_use]
    pub fn with_config(config: EncoderConfig) -> Self {
        DocIdEncoder { config }
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// `T:` id of a type
    ///
    /// # Errors
    /// Returns an error if the type graph is malformed, too deep, or contains a construct
    /// without an encoding.
    pub fn type_id(&self, ty: &TypeRef) -> Result<String> {
        let owner_generics = ty
            .declaring_type
            .as_ref()
            .map(|declaring| declaring.generic_scope_names())
            .unwrap_or_default();
        let scope = Scope {
            type_generics: &owner_generics,
            ..Scope::default()
        };

        Ok(format!(
            "{}:{}",
            IdPrefix::Type,
            self.encode_type(ty, scope, false, 0)?
        ))
    }

    /// `M:` id of a method or constructor, `P:` id for indexer accessors
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if `method` is neither a method nor a
    /// constructor, or if a conversion operator has no return type.
    pub fn method_id(&self, method: &MemberRef) -> Result<String> {
        if !matches!(method.kind, MemberKind::Method | MemberKind::Constructor) {
            return Err(invalid_argument!(
                "method_id expects a method or constructor, '{}' is a {}",
                method.name,
                method.kind
            ));
        }

        let owner = self.owner_id(&method.declaring_type)?;

        // Indexers are properties, their accessors share the property's id
        if method.is_indexer_accessor() {
            let index = match method.parameters.split_last() {
                Some((_value, index)) if method.name == "set_Item" => index,
                _ => method.parameters.as_slice(),
            };
            return Ok(format!(
                "{}:{}.Item{}",
                IdPrefix::Property,
                owner,
                self.parameter_list(method, index)?
            ));
        }

        let mut id = format!("{}:{}.{}", IdPrefix::Method, owner, method_name(method));
        if method.is_generic_method() {
            id.push_str(&format!("``{}", method.generic_arity()));
        }
        id.push_str(&self.parameter_list(method, &method.parameters)?);

        // Conversion operators may only differ by their return type
        if method.is_conversion_operator() {
            let Some(return_type) = &method.return_type else {
                return Err(invalid_argument!(
                    "conversion operator '{}' on '{}' has no return type",
                    method.name,
                    method.declaring_type.fullname()
                ));
            };

            let type_generics = method.declaring_type.generic_scope_names();
            let method_generics = method_generic_names(method);
            let scope = Scope {
                type_generics: &type_generics,
                method_generics: &method_generics,
                in_signature: true,
            };

            id.push('~');
            id.push_str(&self.encode_type(return_type, scope, false, 0)?);
        }

        Ok(id)
    }

    /// `P:` id of a property, including index parameters for indexers
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if `property` is not a property.
    pub fn property_id(&self, property: &MemberRef) -> Result<String> {
        if property.kind != MemberKind::Property {
            return Err(invalid_argument!(
                "property_id expects a property, '{}' is a {}",
                property.name,
                property.kind
            ));
        }

        let owner = self.owner_id(&property.declaring_type)?;
        let parameters = match index_parameters(property) {
            Some((accessor, index)) => self.parameter_list(accessor, index)?,
            None => String::new(),
        };

        Ok(format!(
            "{}:{}.{}{}",
            IdPrefix::Property,
            owner,
            property.name,
            parameters
        ))
    }

    /// `F:` id of a field
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if `field` is not a field.
    pub fn field_id(&self, field: &MemberRef) -> Result<String> {
        if field.kind != MemberKind::Field {
            return Err(invalid_argument!(
                "field_id expects a field, '{}' is a {}",
                field.name,
                field.kind
            ));
        }

        Ok(format!(
            "{}:{}.{}",
            IdPrefix::Field,
            self.owner_id(&field.declaring_type)?,
            field.name
        ))
    }

    /// `E:` id of an event
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if `event` is not an event.
    pub fn event_id(&self, event: &MemberRef) -> Result<String> {
        if event.kind != MemberKind::Event {
            return Err(invalid_argument!(
                "event_id expects an event, '{}' is a {}",
                event.name,
                event.kind
            ));
        }

        Ok(format!(
            "{}:{}.{}",
            IdPrefix::Event,
            self.owner_id(&event.declaring_type)?,
            event.name
        ))
    }

    /// `F:` id of an enumeration value
    ///
    /// ## Arguments
    /// * 'enum_type' - The enumeration declaring the value
    /// * 'name'      - Name of the value
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if `enum_type` is not an enum or `name` is empty.
    pub fn enum_value_id(&self, enum_type: &TypeRef, name: &str) -> Result<String> {
        if !enum_type.is_enum {
            return Err(invalid_argument!(
                "enum_value_id expects an enum, '{}' is not one",
                enum_type.fullname()
            ));
        }
        if name.is_empty() {
            return Err(invalid_argument!(
                "enum_value_id requires a value name for '{}'",
                enum_type.fullname()
            ));
        }

        Ok(format!(
            "{}:{}.{}",
            IdPrefix::Field,
            self.owner_id(enum_type)?,
            name
        ))
    }

    /// `T:` id of a nested type member
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if `nested` is not a nested type.
    pub fn nested_type_id(&self, nested: &MemberRef) -> Result<String> {
        if nested.kind != MemberKind::NestedType {
            return Err(invalid_argument!(
                "nested_type_id expects a nested type, '{}' is a {}",
                nested.name,
                nested.kind
            ));
        }

        self.type_id(&nested.nested_type_ref())
    }

    /// `N:` id of a namespace
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if `namespace` is empty.
    pub fn namespace_id(&self, namespace: &str) -> Result<String> {
        if namespace.is_empty() {
            return Err(invalid_argument!("namespace_id requires a non-empty namespace"));
        }

        Ok(format!("{}:{}", IdPrefix::Namespace, namespace))
    }

    /// Id of any member, dispatched on its kind
    ///
    /// # Errors
    /// Returns [`crate::Error::Unsupported`] for [`MemberKind::Unknown`], otherwise whatever the
    /// kind specific operation returns.
    pub fn member_id(&self, member: &MemberRef) -> Result<String> {
        tracing::trace!(kind = %member.kind, name = %member.name, "computing documentation id");

        let result = match member.kind {
            MemberKind::Method | MemberKind::Constructor => self.method_id(member),
            MemberKind::Field => self.field_id(member),
            MemberKind::Property => self.property_id(member),
            MemberKind::Event => self.event_id(member),
            MemberKind::NestedType => self.nested_type_id(member),
            MemberKind::Unknown => Err(Unsupported(format!(
                "member '{}' on '{}' has no identifier rule for kind {}",
                member.name,
                member.declaring_type.fullname(),
                member.kind
            ))),
        };

        result.inspect_err(|error| {
            tracing::debug!(name = %member.name, %error, "member rejected");
        })
    }

    /// Body of the declaring type's id, as used in front of member names
    fn owner_id(&self, owner: &TypeRef) -> Result<String> {
        let type_generics = owner.generic_scope_names();
        let scope = Scope {
            type_generics: &type_generics,
            ..Scope::default()
        };

        self.encode_type(owner, scope, false, 0)
    }

    /// Parenthesized, comma separated list of parameter type ids; empty without parameters
    fn parameter_list(&self, method: &MemberRef, parameters: &[ParameterRef]) -> Result<String> {
        if parameters.is_empty() {
            return Ok(String::new());
        }

        let type_generics = method.declaring_type.generic_scope_names();
        let method_generics = method_generic_names(method);
        let scope = Scope {
            type_generics: &type_generics,
            method_generics: &method_generics,
            in_signature: true,
        };

        let encoded = parameters
            .iter()
            .map(|parameter| self.encode_type(&parameter.base, scope, parameter.is_out, 0))
            .collect::<Result<Vec<_>>>()?;

        Ok(format!("({})", encoded.join(",")))
    }

    /// Recursive type id computation
    ///
    /// ## Arguments
    /// * 'ty'     - The type occurrence to encode
    /// * 'scope'  - Generic names and signature context
    /// * 'by_ref' - The occurrence is an `out` / by-reference parameter
    /// * 'depth'  - Indicator of recursion level
    fn encode_type(
        &self,
        ty: &TypeRef,
        scope: Scope<'_>,
        by_ref: bool,
        depth: usize,
    ) -> Result<String> {
        if depth >= self.config.max_depth {
            return Err(RecursionLimit(self.config.max_depth));
        }

        let mut id = match &ty.flavor {
            TypeFlavor::Named => self.encode_named(ty, scope, depth)?,
            TypeFlavor::GenericParameter { position } => {
                self.encode_generic_parameter(ty, *position, scope)?
            }
            TypeFlavor::Array { element, rank } => {
                if *rank == 0 {
                    return Err(invalid_argument!(
                        "array of '{}' has rank 0",
                        element.fullname()
                    ));
                }

                let mut id = self.encode_type(element, scope, false, depth + 1)?;
                id.push_str(&array_suffix(*rank));
                id
            }
            TypeFlavor::Pointer { element } => {
                let mut id = self.encode_type(element, scope, false, depth + 1)?;
                id.push('*');
                id
            }
            TypeFlavor::FnPtr => {
                return Err(Unsupported(
                    "function pointers have no documentation id encoding".to_string(),
                ))
            }
        };

        // Reference markers from metadata names are replaced by the trailing '@'
        id.retain(|c| c != '&');
        if by_ref || ty.is_by_ref {
            id.push('@');
        }

        Ok(id)
    }

    fn encode_named(&self, ty: &TypeRef, scope: Scope<'_>, depth: usize) -> Result<String> {
        let name = if ty.is_closed_generic() && (ty.has_arity_marker() || scope.in_signature) {
            let arguments = ty
                .generic_arguments
                .iter()
                .map(|argument| self.encode_type(argument, scope, false, depth + 1))
                .collect::<Result<Vec<_>>>()?;

            format!("{}{{{}}}", strip_arity(&ty.name), arguments.join(","))
        } else {
            ty.name.clone()
        };

        let mut id = String::new();

        let namespace = ty.effective_namespace();
        if !namespace.is_empty() {
            id.push_str(namespace);
            id.push('.');
        }

        // Only the immediate declaring type is spelled out
        if let Some(declaring) = &ty.declaring_type {
            id.push_str(&declaring.name);
            id.push('.');
        }

        id.push_str(&name);
        Ok(id)
    }

    fn encode_generic_parameter(
        &self,
        ty: &TypeRef,
        position: u32,
        scope: Scope<'_>,
    ) -> Result<String> {
        let name = ty.name.as_str();
        let in_type = scope.type_generics.contains(&name);

        match self.config.generic_scope {
            GenericScope::NameMatch if in_type => Ok(format!("`{position}")),
            GenericScope::NameMatch => Ok(format!("``{position}")),
            GenericScope::Strict => match (in_type, scope.method_generics.contains(&name)) {
                (true, false) => Ok(format!("`{position}")),
                (false, true) => Ok(format!("``{position}")),
                (true, true) => Err(invalid_argument!(
                    "generic parameter '{}' is declared by both the type and the method",
                    name
                )),
                (false, false) => Err(invalid_argument!(
                    "generic parameter '{}' is not declared by the type or the method",
                    name
                )),
            },
        }
    }
}

/// Name component of a method id
fn method_name(method: &MemberRef) -> &str {
    match method.kind {
        MemberKind::Constructor if method.is_static_constructor() => "#cctor",
        MemberKind::Constructor => "#ctor",
        _ => &method.name,
    }
}

fn method_generic_names(method: &MemberRef) -> Vec<&str> {
    method.generic_parameters.iter().map(String::as_str).collect()
}

/// `[]` for vectors, `[0:,0:]` for a rank 2 array, ...
fn array_suffix(rank: u32) -> String {
    if rank == 1 {
        "[]".to_string()
    } else {
        format!("[{}]", vec!["0:"; rank as usize].join(","))
    }
}

/// The accessor and parameters that index a property, `None` for plain properties
fn index_parameters(property: &MemberRef) -> Option<(&MemberRef, &[ParameterRef])> {
    if let Some(getter) = &property.getter {
        if !getter.parameters.is_empty() {
            return Some((getter.as_ref(), getter.parameters.as_slice()));
        }
    }

    // The last setter parameter is the assigned value
    if let Some(setter) = &property.setter {
        if setter.parameters.len() > 1 {
            let (_value, index) = setter.parameters.split_last()?;
            return Some((setter.as_ref(), index));
        }
    }

    None
}
