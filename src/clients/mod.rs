pub mod ai_client;
pub mod auth_client;
pub mod upload_client;

pub use ai_client::AiClient;
pub use auth_client::AuthClient;
pub use upload_client::{UploadClient, UploadResponse, UploadTransport};
