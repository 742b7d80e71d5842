//! User entity for the directory service.

/// A user account as stored, password hash included.
///
/// This struct never serializes; responses go through the public DTO which
/// carries only id, name, and email.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i64, name: String, email: String, password_hash: String) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
        }
    }
}

/// Input data for creating a new user. The password is already hashed by the
/// time it reaches the repository.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Update for an existing user. Name and email are replaced together; the
/// password hash is never touched by an update.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(
            1,
            "John Doe".to_string(),
            "john@example.com".to_string(),
            "$2b$12$abcdefghijklmnopqrstuv".to_string(),
        );

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "john@example.com");
        assert!(user.password_hash.starts_with("$2b$"));
    }

    #[test]
    fn test_new_user_creation() {
        let new_user = NewUser {
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            password_hash: "hash".to_string(),
        };

        assert_eq!(new_user.name, "Jane Smith");
        assert_eq!(new_user.email, "jane@example.com");
    }

    #[test]
    fn test_user_update_leaves_password_out() {
        let update = UserUpdate {
            name: "Jane Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
        };

        assert_eq!(update.name, "Jane Doe");
        assert_eq!(update.email, "jane.doe@example.com");
    }
}
