use mongo_dao_gen_macros::Dao;

pub struct ObjectId([u8; 12]);
pub struct DateTime(i64);

#[derive(Dao)]
pub struct User {
    #[column("_id")]
    #[dao("autoFill")]
    pub id: ObjectId, // user id
    #[dao("autoIncr:uid")]
    pub uid: i32,
    /// Login name
    pub account: String,
    #[dao("autoFill")]
    pub register_time: Option<DateTime>,
    secret: String,
}

fn main() {
    let user = User {
        id: ObjectId([0; 12]),
        uid: 0,
        account: String::new(),
        register_time: None,
        secret: String::new(),
    };

    let _ = (user.id.0, user.uid, user.account, user.register_time, user.secret);
}
