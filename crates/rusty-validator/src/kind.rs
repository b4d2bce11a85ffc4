// File: src/kind.rs
// Purpose: Closed set of data kinds used to key the validator registry

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Data kind of a value or of a declared field type
///
/// Field kinds are assigned at compile time by `#[derive(Reflect)]` from the
/// declared type; value kinds come from [`Reflect::kind`](crate::Reflect::kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Bool,
    /// Signed integers (`i8` through `i128`, `isize`)
    Int,
    /// Unsigned integers (`u8` through `u128`, `usize`)
    Uint,
    Float,
    Char,
    String,
    /// `Vec`, `VecDeque`, slices and arrays
    Sequence,
    /// Keyed and set collections
    Map,
    Option,
    Tuple,
    Unit,
    Struct,
    Enum,
    Other,
}

impl Kind {
    /// Every kind, in declaration order
    pub const ALL: [Kind; 14] = [
        Kind::Bool,
        Kind::Int,
        Kind::Uint,
        Kind::Float,
        Kind::Char,
        Kind::String,
        Kind::Sequence,
        Kind::Map,
        Kind::Option,
        Kind::Tuple,
        Kind::Unit,
        Kind::Struct,
        Kind::Enum,
        Kind::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Char => "char",
            Kind::String => "string",
            Kind::Sequence => "sequence",
            Kind::Map => "map",
            Kind::Option => "option",
            Kind::Tuple => "tuple",
            Kind::Unit => "unit",
            Kind::Struct => "struct",
            Kind::Enum => "enum",
            Kind::Other => "other",
        }
    }

    /// Only structs carry fields the driver can walk
    pub fn is_record(&self) -> bool {
        matches!(self, Kind::Struct)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a kind name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Kind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownKind(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(Kind::String.to_string(), "string");
        assert_eq!(Kind::Int.to_string(), "int");
        assert_eq!(Kind::Struct.to_string(), "struct");
        assert_eq!(Kind::Sequence.to_string(), "sequence");
    }

    #[test]
    fn test_from_str_round_trips_every_kind() {
        for kind in Kind::ALL {
            assert_eq!(kind.as_str().parse::<Kind>(), Ok(kind));
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive_and_trimmed() {
        assert_eq!(" String ".parse::<Kind>(), Ok(Kind::String));
        assert_eq!("INT".parse::<Kind>(), Ok(Kind::Int));
    }

    #[test]
    fn test_from_str_unknown() {
        assert_eq!(
            "pointer".parse::<Kind>(),
            Err(UnknownKind("pointer".to_string()))
        );
    }

    #[test]
    fn test_only_struct_is_record() {
        let records: Vec<Kind> = Kind::ALL.into_iter().filter(Kind::is_record).collect();
        assert_eq!(records, vec![Kind::Struct]);
    }
}
