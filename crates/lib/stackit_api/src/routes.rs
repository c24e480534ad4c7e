//! Route paths served by the API.

pub const GET_HEALTH: &str = "/health";
pub const POST_API_CHAT: &str = "/api/chat";
pub const POST_API_ENHANCE_TEXT: &str = "/api/enhance-text";
pub const POST_API_GENERATE_CONTENT: &str = "/api/generate-content";
