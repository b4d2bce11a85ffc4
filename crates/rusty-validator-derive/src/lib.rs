// rusty-validator procedural macros

use proc_macro::TokenStream;

use syn::{parse_macro_input, DeriveInput};

mod classify;
mod reflect;

/// Derive macro recording a struct's fields for validation
///
/// Generates `Reflect` and `Record` implementations. Every field gets a
/// static descriptor (name, kind, rule, visibility); public fields also get a
/// value accessor. The rule is read from `#[validator = "..."]`.
///
/// # Example
///
/// ```ignore
/// use rusty_validator::{Reflect, Validate};
///
/// #[derive(Reflect)]
/// struct Person {
///     #[validator = "required"]
///     pub first: String,
///
///     #[validator = "required,allowempty"]
///     pub last: String,
///
///     #[validator = "required,greaterthan,0"]
///     pub weight: i32,
///
///     pub notes: String,  // no rule: never checked
/// }
///
/// let errors = person.validate();
/// ```
///
/// # Field kinds
///
/// Kinds are read off the declared type:
///
/// - `String`, `&str`, `Box<str>`, `Cow<str>` → `string`
/// - `i8` .. `i128`, `isize` → `int`; `u8` .. `u128`, `usize` → `uint`
/// - `f32`, `f64` → `float`; `bool`; `char`
/// - `Vec`, `VecDeque`, arrays, slices → `sequence`
/// - `HashMap`, `BTreeMap`, `HashSet`, `BTreeSet` → `map`
/// - `Option<T>` → `option`; tuples → `tuple`; `()` → `unit`
/// - any other named type → `struct`
///
/// Enums get a `Reflect` impl of kind `enum` and are not records. Unions are
/// rejected.
#[proc_macro_derive(Reflect, attributes(validator))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    reflect::impl_reflect(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
