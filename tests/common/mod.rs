use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use cardex::AppState;
use cardex::services::extractor::Extractor;
use cardex::traits::chat_api::ChatApi;
use cardex::urls::router;

/// Scripted `ChatApi` used in place of the real Groq client. Counts how many
/// completion calls were issued so tests can assert that the remote
/// capability was (or was not) reached.
pub struct StubChatApi {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl StubChatApi {
    pub fn replying(completion: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(completion.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatApi for StubChatApi {
    async fn call_chat_api(
        &self,
        _system: &str,
        _user: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(message.clone().into()),
        }
    }
}

/// Binds the full app on an ephemeral port and returns its base URL.
pub async fn spawn_app(chat_api: Arc<StubChatApi>) -> String {
    let chat_api: Arc<dyn ChatApi> = chat_api;
    let extractor = Arc::new(Extractor::builder().chat_api(chat_api).build());
    let app = router(AppState { extractor });

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
