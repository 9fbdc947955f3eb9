use mongo_dao_gen_macros::Dao;

#[derive(Dao)]
pub struct Tag {
    pub label: String,
}

fn main() {
    let tag = Tag {
        label: "rust".to_string(),
    };

    assert_eq!(tag.label, "rust");
}
