//! Serve command - run the HTTP API

use super::context::Context;

/// Start the HTTP server with optional host/port overrides
#[cfg(feature = "server")]
pub fn serve(ctx: Context, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let mut config = ctx.config;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    crate::server::tiny_http::serve(&config)
}

/// Start the HTTP server (unavailable in this build)
#[cfg(not(feature = "server"))]
pub fn serve(_ctx: Context, _host: Option<String>, _port: Option<u16>) -> anyhow::Result<()> {
    anyhow::bail!("cosmic was built without the `server` feature")
}
