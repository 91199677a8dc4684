use async_trait::async_trait;

/// Defines the interface for a chat-based language model API (e.g., Groq, OpenAI).
///
/// This trait allows consumers to abstract over different backend implementations
/// (e.g., real HTTP clients, scripted stubs for testing).
///
/// Any implementation must be thread-safe (`Send + Sync`) and provide an asynchronous
/// method for sending one system/user message pair and receiving the model's reply.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Sends a system instruction plus a single user turn to a chat API and
    /// returns the first completion's text.
    async fn call_chat_api(
        &self,
        system: &str,
        user: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}
