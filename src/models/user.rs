#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub avatar: String,
    pub whatsapp: String,
    pub bio: String,
}
