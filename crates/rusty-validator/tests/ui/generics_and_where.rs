use rusty_validator::{Reflect, Validate};
use std::fmt::Debug;

#[derive(Reflect)]
struct Envelope<'a, T, const N: usize>
where
    T: Debug,
{
    #[validator = "required"]
    pub label: &'a str,
    #[validator = "required,greaterthan,0"]
    pub size: usize,
    pub items: [T; N],
}

fn main() {
    let envelope = Envelope {
        label: "box",
        size: 1,
        items: [1u8, 2, 3],
    };
    // usize is unsigned, which the standard registry does not cover
    assert_eq!(envelope.validate().len(), 1);
}
