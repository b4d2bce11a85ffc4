use rusty_validator::{Record, Reflect};

#[derive(Reflect)]
struct r#Match {
    #[validator = "required"]
    pub r#type: String,
}

fn main() {
    let value = r#Match {
        r#type: "exact".to_string(),
    };
    let record = value.as_record().unwrap();
    assert_eq!(record.type_name(), "Match");
    assert_eq!(record.fields()[0].name, "type");
}
