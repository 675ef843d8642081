pub mod chat_id;
pub mod chat_session;
pub mod user_id;
pub mod validated_json;

pub use chat_id::ChatIdPath;
pub use chat_session::ChatSession;
pub use user_id::UserIdPath;
pub use validated_json::ValidatedJson;
