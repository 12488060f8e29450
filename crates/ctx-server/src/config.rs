//! Server configuration.

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on (0 for OS-assigned)
    pub port: u16,
    /// Hostname or IP address to bind to (`localhost`, `127.0.0.1`, `::1`)
    pub hostname: String,
    /// Allow cross-origin requests from any origin
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 7070,
            hostname: "127.0.0.1".into(),
            enable_cors: false,
        }
    }
}
