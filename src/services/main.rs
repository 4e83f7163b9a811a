use serde::Serialize;

/// Greeting served from `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to the FastAPI Homework!";

/// Static payload returned by the root endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Welcome {
    pub message: &'static str,
}

/// Builds the welcome payload.
pub fn welcome() -> Welcome {
    Welcome {
        message: WELCOME_MESSAGE,
    }
}
