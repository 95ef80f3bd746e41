use std::sync::LazyLock;
use std::time::Duration;

/// Global HTTP client instance shared by all collaborator calls
///
/// This client is initialized lazily on first access and reused across the
/// application for connection pooling and DNS caching.
///
/// # Features
/// - **Compression**: gzip, deflate, brotli, and zstd
/// - **HTTP/2**: adaptive window sizing and keep-alive
/// - **Timeouts**: 30s request ceiling, 10s connect timeout; the provider
///   dispatch applies its own tighter per-request timeout on top
/// - **Security**: Rustls for TLS (no OpenSSL dependency)
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        // Timeouts
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        // Connection pooling
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        // HTTP/2 settings
        .http2_adaptive_window(true)
        .http2_keep_alive_interval(Duration::from_secs(10))
        .http2_keep_alive_timeout(Duration::from_secs(20))
        // Enable compression (gzip, deflate, brotli, zstd)
        .gzip(true)
        .deflate(true)
        .brotli(true)
        .zstd(true)
        // Security
        .https_only(false)
        .use_rustls_tls()
        .user_agent(concat!("pushrelay-rs/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to build HTTP client")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_initialization() {
        // Access the client to ensure it initializes without panicking
        let _ = &*HTTP_CLIENT;
    }
}
