use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// A stored user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Store-assigned identifier
    pub id: i32,
    pub name: String,
    /// Unique, fixed at creation
    pub email: String,
    /// Argon2id hash, never serialized
    #[serde(skip_serializing)]
    pub password: String,
}

/// Every user, ascending by id
pub type UserList = Vec<User>;

/// Insert payload for the repository; `password` is already hashed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Update payload for the repository; only `name` and `password` are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserChanges {
    pub id: i32,
    pub name: String,
    pub password: String,
}

/// Rejects strings that are empty once surrounding whitespace is removed.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Accepts an RFC 5322 mailbox: a bare address, a quoted local part, or a
/// display name followed by an address in angle brackets.
fn rfc5322_address(value: &str) -> Result<(), ValidationError> {
    if EmailAddress::is_valid(value) {
        return Ok(());
    }
    Err(ValidationError::new("email").with_message("must be a valid email address".into()))
}

/// Request body for `PUT /users`
///
/// Missing fields decode as empty strings and are caught by validation.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Ann")]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "rfc5322_address"))]
    #[schema(example = "ann@example.com")]
    pub email: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

/// Request body for `PATCH /users/{id}`
///
/// Both fields are replaced. Any `email` or `id` in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub password: String,
}

/// User as exposed by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = "ann@example.com")]
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
