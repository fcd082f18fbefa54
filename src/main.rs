// Copyright (c) 2026 The picel authors
// SPDX-License-Identifier: MIT

//! picel (picture element) is an image processing micro service.
//!
//! It serves transformed images over HTTP: a compact URL-path grammar names
//! an origin image and a transformation, the origin is downloaded from a
//! backend store, and the result of running it through the external
//! ImageMagick/libwebp toolchain is streamed back.

mod application;
mod domain;
mod infrastructure;

use std::sync::Arc;

use clap::Parser;

use application::pipeline::Pipeline;
use infrastructure::http::client::HttpImageFetcher;
use infrastructure::http::server::{ServerConfig, ServerState, router};
use infrastructure::logging::init_logging;
use infrastructure::tools::ToolProcessor;
use infrastructure::tools::deps::{REQUIRED_TOOLS, missing_dependencies};

/// picel (picture element) is an image processing micro service.
#[derive(Parser, Debug)]
#[command(name = "picel", version, about)]
struct Cli {
    /// Serving address.
    #[arg(long, default_value = ":8123")]
    addr: String,

    /// Image storage back-end server.
    #[arg(long)]
    backend: Option<String>,

    /// Pipe image processing output to the logs.
    #[arg(long)]
    verbose: bool,
}

/// A bare `:port` address binds every interface.
fn normalize_addr(addr: &str) -> String {
    if addr.starts_with(':') {
        format!("0.0.0.0{addr}")
    } else {
        addr.to_string()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let missing = missing_dependencies(REQUIRED_TOOLS);
    if !missing.is_empty() {
        tracing::warn!("Dependencies missing: {}", missing.join(", "));
    }

    let state = ServerState {
        config: Arc::new(ServerConfig {
            backend: cli.backend.clone(),
        }),
        pipeline: Arc::new(Pipeline::new(
            Arc::new(HttpImageFetcher::new()?),
            Arc::new(ToolProcessor::new(cli.verbose)),
        )),
    };

    let addr = normalize_addr(&cli.addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("picel started listening on {addr}");
    if let Some(backend) = cli.backend.as_deref() {
        tracing::info!("Single backend mode: {backend}");
    }

    axum::serve(listener, router(state)).await?;

    Ok(())
}
