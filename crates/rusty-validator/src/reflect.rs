// File: src/reflect.rs
// Purpose: Compile-time field introspection consumed by the validation driver

use crate::kind::Kind;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;

/// Visibility of a field as declared on the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// `pub`
    Public,
    /// `pub(crate)`, `pub(super)`, `pub(in path)`
    Restricted,
    /// no visibility modifier
    Private,
}

/// Static metadata of one record field
///
/// Emitted once per type by `#[derive(Reflect)]` and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: Kind,
    /// Raw rule string from `#[validator = "..."]`, empty when absent
    pub rule: &'static str,
    pub visibility: Visibility,
}

impl FieldDescriptor {
    pub const fn new(
        name: &'static str,
        kind: Kind,
        rule: &'static str,
        visibility: Visibility,
    ) -> Self {
        Self {
            name,
            kind,
            rule,
            visibility,
        }
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// Whether the rule string names at least one token
    pub fn has_rules(&self) -> bool {
        self.rule.split(',').any(|token| !token.trim().is_empty())
    }
}

/// Borrowed runtime value of a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Int(i128),
    Uint(u128),
    Float(f64),
    Bool(bool),
    Char(char),
    /// Element count of a sequence or map
    Len(usize),
    /// Whether an `Option` holds a value
    Present(bool),
    /// Records, tuples and anything else the engine does not look into
    Opaque,
}

impl FieldValue<'_> {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i128> {
        match *self {
            FieldValue::Int(i) => Some(i),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) => write!(f, "{:?}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Uint(u) => write!(f, "{}", u),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Char(c) => write!(f, "{:?}", c),
            FieldValue::Len(n) => write!(f, "<{} items>", n),
            FieldValue::Present(true) => f.write_str("Some(..)"),
            FieldValue::Present(false) => f.write_str("None"),
            FieldValue::Opaque => f.write_str(".."),
        }
    }
}

/// A value the driver can ask for its kind
///
/// Implemented for the common std types and by `#[derive(Reflect)]`.
pub trait Reflect {
    fn kind(&self) -> Kind;

    /// Field view of the value, `None` unless it is a record
    fn as_record(&self) -> Option<&dyn Record> {
        None
    }
}

/// A struct whose fields have been enumerated at compile time
pub trait Record {
    fn type_name(&self) -> &'static str;

    /// Field descriptors in declaration order
    fn fields(&self) -> &'static [FieldDescriptor];

    /// Runtime value of the field at `index` in [`Record::fields`]
    ///
    /// Non-public fields and out-of-range indices yield [`FieldValue::Opaque`].
    fn field_value(&self, index: usize) -> FieldValue<'_>;
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn kind(&self) -> Kind {
        (**self).kind()
    }

    fn as_record(&self) -> Option<&dyn Record> {
        (**self).as_record()
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn kind(&self) -> Kind {
        (**self).kind()
    }

    fn as_record(&self) -> Option<&dyn Record> {
        (**self).as_record()
    }
}

macro_rules! impl_reflect {
    ($kind:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Reflect for $ty {
                fn kind(&self) -> Kind {
                    $kind
                }
            }
        )+
    };
}

impl_reflect!(Kind::Bool => bool);
impl_reflect!(Kind::Int => i8, i16, i32, i64, i128, isize);
impl_reflect!(Kind::Uint => u8, u16, u32, u64, u128, usize);
impl_reflect!(Kind::Float => f32, f64);
impl_reflect!(Kind::Char => char);
impl_reflect!(Kind::String => str, String, Cow<'_, str>);
impl_reflect!(Kind::Unit => ());

impl<T> Reflect for [T] {
    fn kind(&self) -> Kind {
        Kind::Sequence
    }
}

impl<T, const N: usize> Reflect for [T; N] {
    fn kind(&self) -> Kind {
        Kind::Sequence
    }
}

impl<T> Reflect for Vec<T> {
    fn kind(&self) -> Kind {
        Kind::Sequence
    }
}

impl<T> Reflect for VecDeque<T> {
    fn kind(&self) -> Kind {
        Kind::Sequence
    }
}

impl<K, V, S> Reflect for HashMap<K, V, S> {
    fn kind(&self) -> Kind {
        Kind::Map
    }
}

impl<K, V> Reflect for BTreeMap<K, V> {
    fn kind(&self) -> Kind {
        Kind::Map
    }
}

impl<T, S> Reflect for HashSet<T, S> {
    fn kind(&self) -> Kind {
        Kind::Map
    }
}

impl<T> Reflect for BTreeSet<T> {
    fn kind(&self) -> Kind {
        Kind::Map
    }
}

impl<T> Reflect for Option<T> {
    fn kind(&self) -> Kind {
        Kind::Option
    }
}

macro_rules! impl_reflect_tuple {
    ($(($($name:ident),+)),+ $(,)?) => {
        $(
            impl<$($name),+> Reflect for ($($name,)+) {
                fn kind(&self) -> Kind {
                    Kind::Tuple
                }
            }
        )+
    };
}

impl_reflect_tuple!((A), (A, B), (A, B, C), (A, B, C, D), (A, B, C, D, E), (A, B, C, D, E, F));
