//! CLI command implementations.

use color_eyre::eyre::Result;

use bazaar_core::SliceMode;
use bazaar_server::{Server, ServerConfig};

/// Starts the HTTP server.
pub async fn serve(host: String, port: u16, cors: bool, strict_slicing: bool) -> Result<()> {
    tracing::info!("Starting Bazaar server...");

    let addr = format!("{}:{}", host, port).parse()?;
    let slice_mode = if strict_slicing {
        SliceMode::LimitAsCount
    } else {
        SliceMode::LimitAsEnd
    };

    let config = ServerConfig::builder()
        .addr(addr)
        .cors(cors)
        .slice_mode(slice_mode)
        .build();

    let server = Server::new(config);
    server.run().await?;

    Ok(())
}

/// Prints version information.
pub fn version() {
    println!("bazaar {}", env!("CARGO_PKG_VERSION"));
}
