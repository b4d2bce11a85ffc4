use rusty_validator::{validate, Reflect};

#[derive(Reflect)]
struct Inner {
    #[validator = "required"]
    pub name: String,
}

fn main() {
    let boxed: Box<dyn Reflect> = Box::new(Inner {
        name: String::new(),
    });
    assert_eq!(validate(&boxed).len(), 1);
    assert_eq!(validate(boxed.as_ref()).len(), 1);

    let slice: &[i32] = &[1, 2];
    assert_eq!(validate(slice).len(), 1);
}
