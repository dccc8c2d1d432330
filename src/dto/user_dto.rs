use serde::{Deserialize, Serialize};
use validator::Validate;

// Request para crear un usuario (el id lo asigna el servidor)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,
}

// Response con un mensaje simple
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("Tommy Vercetti", "tommy@example.com").validate().is_ok());
    }

    #[test]
    fn test_invalid_requests() {
        assert!(request("", "tommy@example.com").validate().is_err());
        assert!(request("Tommy", "not-an-email").validate().is_err());
    }
}
