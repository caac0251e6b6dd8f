use serde::Deserialize;

use crate::analyzer::Detail;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_listen_addr")]
    pub listen_addr: String,
    /// Detail level used when a request does not ask for one
    #[serde(default)]
    pub detail: Detail,
    #[serde(default = "ServerConfig::default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    fn default_listen_addr() -> String {
        DEFAULT_LISTEN_ADDR.to_string()
    }

    fn default_max_upload_bytes() -> usize {
        DEFAULT_MAX_UPLOAD_BYTES
    }

    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.listen_addr = addr.into();
        self
    }

    pub fn detail(mut self, detail: Detail) -> Self {
        self.detail = detail;
        self
    }

    pub fn max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = bytes;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: Self::default_listen_addr(),
            detail: Detail::default(),
            max_upload_bytes: Self::default_max_upload_bytes(),
        }
    }
}
