// File: rusty-validator-derive/src/classify.rs
// Purpose: Map a declared field type to a data kind and a value accessor

use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use syn::{GenericArgument, PathArguments, Type};

/// Kind of a field as far as the declared type tells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Int,
    Uint,
    Float,
    Char,
    String,
    Sequence,
    Map,
    Option,
    Tuple,
    Unit,
    Struct,
    Other,
}

impl FieldKind {
    /// Variant name of `rusty_validator::Kind`
    pub fn variant(&self) -> Ident {
        let name = match self {
            FieldKind::Bool => "Bool",
            FieldKind::Int => "Int",
            FieldKind::Uint => "Uint",
            FieldKind::Float => "Float",
            FieldKind::Char => "Char",
            FieldKind::String => "String",
            FieldKind::Sequence => "Sequence",
            FieldKind::Map => "Map",
            FieldKind::Option => "Option",
            FieldKind::Tuple => "Tuple",
            FieldKind::Unit => "Unit",
            FieldKind::Struct => "Struct",
            FieldKind::Other => "Other",
        };
        Ident::new(name, Span::call_site())
    }
}

/// Classified field type: its kind plus how many references wrap it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified {
    pub kind: FieldKind,
    pub derefs: usize,
}

/// Classify a declared type syntactically
///
/// References are looked through. Any named type not recognised below is
/// assumed to be a nested record.
pub fn classify(ty: &Type) -> Classified {
    match ty {
        Type::Reference(reference) => {
            let inner = classify(&reference.elem);
            Classified {
                kind: inner.kind,
                derefs: inner.derefs + 1,
            }
        }
        Type::Paren(paren) => classify(&paren.elem),
        Type::Group(group) => classify(&group.elem),
        Type::Slice(_) | Type::Array(_) => plain(FieldKind::Sequence),
        Type::Tuple(tuple) if tuple.elems.is_empty() => plain(FieldKind::Unit),
        Type::Tuple(_) => plain(FieldKind::Tuple),
        Type::Path(type_path) if type_path.qself.is_none() => {
            match type_path.path.segments.last() {
                Some(segment) => plain(classify_segment(segment)),
                None => plain(FieldKind::Other),
            }
        }
        _ => plain(FieldKind::Other),
    }
}

fn plain(kind: FieldKind) -> Classified {
    Classified { kind, derefs: 0 }
}

fn classify_segment(segment: &syn::PathSegment) -> FieldKind {
    match segment.ident.to_string().as_str() {
        "String" | "str" => FieldKind::String,
        "Box" | "Cow" | "Rc" | "Arc" if first_type_arg_is_str(&segment.arguments) => {
            FieldKind::String
        }
        "i8" | "i16" | "i32" | "i64" | "i128" | "isize" => FieldKind::Int,
        "u8" | "u16" | "u32" | "u64" | "u128" | "usize" => FieldKind::Uint,
        "f32" | "f64" => FieldKind::Float,
        "bool" => FieldKind::Bool,
        "char" => FieldKind::Char,
        "Vec" | "VecDeque" | "LinkedList" | "BinaryHeap" => FieldKind::Sequence,
        "HashMap" | "BTreeMap" | "HashSet" | "BTreeSet" => FieldKind::Map,
        "Option" => FieldKind::Option,
        _ => FieldKind::Struct,
    }
}

/// `Box<str>`, `Cow<'a, str>`, `Rc<str>`, `Arc<str>`
fn first_type_arg_is_str(arguments: &PathArguments) -> bool {
    let PathArguments::AngleBracketed(args) = arguments else {
        return false;
    };
    args.args
        .iter()
        .find_map(|arg| match arg {
            GenericArgument::Type(ty) => Some(ty),
            _ => None,
        })
        .is_some_and(|ty| matches!(ty, Type::Path(p) if p.path.is_ident("str")))
}

/// Expression building the `FieldValue` of `access` (e.g. `self.name`)
pub fn value_expr(classified: Classified, access: &TokenStream) -> TokenStream {
    let derefs: Vec<TokenStream> = (0..classified.derefs).map(|_| quote!(*)).collect();
    let value = quote!(::rusty_validator::FieldValue);

    match classified.kind {
        FieldKind::String => quote! {
            #value::Str(::core::convert::AsRef::<str>::as_ref(&#access))
        },
        FieldKind::Int => quote!(#value::Int((#(#derefs)* #access) as i128)),
        FieldKind::Uint => quote!(#value::Uint((#(#derefs)* #access) as u128)),
        FieldKind::Float => quote!(#value::Float((#(#derefs)* #access) as f64)),
        FieldKind::Bool => quote!(#value::Bool(#(#derefs)* #access)),
        FieldKind::Char => quote!(#value::Char(#(#derefs)* #access)),
        FieldKind::Sequence | FieldKind::Map => quote!(#value::Len(#access.len())),
        FieldKind::Option => quote!(#value::Present(#access.is_some())),
        FieldKind::Tuple | FieldKind::Unit | FieldKind::Struct | FieldKind::Other => {
            quote!(#value::Opaque)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use syn::parse_quote;

    fn kind_of(ty: Type) -> FieldKind {
        classify(&ty).kind
    }

    #[test]
    fn test_strings() {
        assert_eq!(kind_of(parse_quote!(String)), FieldKind::String);
        assert_eq!(kind_of(parse_quote!(std::string::String)), FieldKind::String);
        assert_eq!(kind_of(parse_quote!(&'a str)), FieldKind::String);
        assert_eq!(kind_of(parse_quote!(Box<str>)), FieldKind::String);
        assert_eq!(kind_of(parse_quote!(Cow<'a, str>)), FieldKind::String);
        assert_eq!(kind_of(parse_quote!(Arc<str>)), FieldKind::String);
        assert_eq!(kind_of(parse_quote!(Box<Person>)), FieldKind::Struct);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(kind_of(parse_quote!(i32)), FieldKind::Int);
        assert_eq!(kind_of(parse_quote!(isize)), FieldKind::Int);
        assert_eq!(kind_of(parse_quote!(u8)), FieldKind::Uint);
        assert_eq!(kind_of(parse_quote!(f64)), FieldKind::Float);
        assert_eq!(kind_of(parse_quote!(bool)), FieldKind::Bool);
        assert_eq!(kind_of(parse_quote!(char)), FieldKind::Char);
    }

    #[test]
    fn test_collections() {
        assert_eq!(kind_of(parse_quote!(Vec<String>)), FieldKind::Sequence);
        assert_eq!(kind_of(parse_quote!([u8; 4])), FieldKind::Sequence);
        assert_eq!(kind_of(parse_quote!(&'a [u8])), FieldKind::Sequence);
        assert_eq!(kind_of(parse_quote!(HashMap<String, i32>)), FieldKind::Map);
        assert_eq!(kind_of(parse_quote!(BTreeSet<u8>)), FieldKind::Map);
        assert_eq!(kind_of(parse_quote!(Option<i32>)), FieldKind::Option);
    }

    #[test]
    fn test_everything_else() {
        assert_eq!(kind_of(parse_quote!(())), FieldKind::Unit);
        assert_eq!(kind_of(parse_quote!((i32, String))), FieldKind::Tuple);
        assert_eq!(kind_of(parse_quote!(OtherStruct)), FieldKind::Struct);
        assert_eq!(kind_of(parse_quote!(T)), FieldKind::Struct);
        assert_eq!(kind_of(parse_quote!(fn(i32) -> i32)), FieldKind::Other);
        assert_eq!(kind_of(parse_quote!(*const u8)), FieldKind::Other);
        assert_eq!(kind_of(parse_quote!(<T as Trait>::Output)), FieldKind::Other);
    }

    #[test]
    fn test_references_count_derefs() {
        let classified = classify(&parse_quote!(&'a &'b i64));
        assert_eq!(
            classified,
            Classified {
                kind: FieldKind::Int,
                derefs: 2
            }
        );
    }

    #[test]
    fn test_int_value_expr_derefs() {
        let access = quote!(self.weight);
        let expr = value_expr(classify(&parse_quote!(&'a i32)), &access);
        assert_eq!(
            expr.to_string(),
            quote!(::rusty_validator::FieldValue::Int((*self.weight) as i128)).to_string()
        );
    }

    #[test]
    fn test_opaque_value_expr() {
        let access = quote!(self.inner);
        let expr = value_expr(classify(&parse_quote!(Inner)), &access);
        assert_eq!(
            expr.to_string(),
            quote!(::rusty_validator::FieldValue::Opaque).to_string()
        );
    }
}
