/// Fixed-width integer types that can hold a sequence value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
}

impl IntWidth {
    fn from_ident(ident: &str) -> Option<Self> {
        Some(match ident {
            "i8" => Self::I8,
            "i16" => Self::I16,
            "i32" => Self::I32,
            "i64" => Self::I64,
            "u8" => Self::U8,
            "u16" => Self::U16,
            "u32" => Self::U32,
            "u64" => Self::U64,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
        }
    }
}

/// What the generator knows about a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeClass {
    /// `bson::oid::ObjectId`
    ObjectId,

    /// `bson::DateTime`
    DateTime,

    Int(IntWidth),

    /// Anything else; never auto-filled.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldType {
    pub class: TypeClass,

    /// Declared as `Option<_>`
    pub nullable: bool,
}

impl FieldType {
    /// Inspects a type signature. Signatures that do not parse as a type are
    /// treated as an unknown, non-optional type.
    pub fn parse(signature: &str) -> Self {
        match syn::parse_str::<syn::Type>(signature) {
            Ok(ty) => Self::from_type(&ty),
            Err(_) => Self {
                class: TypeClass::Other,
                nullable: false,
            },
        }
    }

    pub(crate) fn from_type(ty: &syn::Type) -> Self {
        match option_inner(ty) {
            Some(inner) => Self {
                class: classify(inner),
                nullable: true,
            },
            None => Self {
                class: classify(ty),
                nullable: false,
            },
        }
    }
}

/// Matching is by last path segment, so `ObjectId`, `oid::ObjectId` and
/// `mongodb::bson::oid::ObjectId` all qualify. Type aliases are not followed.
fn classify(ty: &syn::Type) -> TypeClass {
    let Some(segment) = last_segment(ty) else {
        return TypeClass::Other;
    };

    if !segment.arguments.is_none() {
        return TypeClass::Other;
    }

    let ident = segment.ident.to_string();

    match ident.as_str() {
        "ObjectId" => TypeClass::ObjectId,
        "DateTime" => TypeClass::DateTime,
        _ => IntWidth::from_ident(&ident).map_or(TypeClass::Other, TypeClass::Int),
    }
}

fn option_inner(ty: &syn::Type) -> Option<&syn::Type> {
    let segment = last_segment(ty)?;

    if segment.ident != "Option" {
        return None;
    }

    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    if args.args.len() != 1 {
        return None;
    }

    match args.args.first()? {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

fn last_segment(ty: &syn::Type) -> Option<&syn::PathSegment> {
    match ty {
        syn::Type::Path(path) if path.qself.is_none() => path.path.segments.last(),
        syn::Type::Group(group) => last_segment(&group.elem),
        syn::Type::Paren(paren) => last_segment(&paren.elem),
        _ => None,
    }
}
