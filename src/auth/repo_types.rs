/// User record in the database.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,              // database-assigned id
    pub email: String,           // user email
    pub hashed_password: String, // Argon2 hash
}

/// User record before insertion.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub hashed_password: String,
}
