use std::net::SocketAddr;

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// IBM Watson NLU API key. The NLU provider is only selected when both
    /// this and `nlu_url` are present.
    pub nlu_api_key: Option<String>,
    pub nlu_url: Option<String>,
    pub nlu_version: String,
    pub nlu_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "nlu_api_key",
                &self.nlu_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("nlu_url", &self.nlu_url)
            .field("nlu_version", &self.nlu_version)
            .field("nlu_timeout_secs", &self.nlu_timeout_secs)
            .finish()
    }
}
