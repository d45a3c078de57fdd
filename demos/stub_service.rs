//! demos/stub_service.rs
//! A controllable stand-in for one backend microservice.
//! Run: cargo run --example stub_service -- <port> [status-code]
//!
//! Env:
//!   DELAY_MS  artificial latency before every response (default 0)

use hyper::{
    service::{make_service_fn, service_fn},
    Body, Request, Response, Server, StatusCode,
};
use std::{convert::Infallible, net::SocketAddr, time::Duration};
use tokio::time::sleep;

#[derive(Clone, Copy)]
struct StubState {
    status: StatusCode,
    delay_ms: u64,
}

async fn handle(req: Request<Body>, state: StubState) -> Result<Response<Body>, Infallible> {
    if state.delay_ms > 0 {
        sleep(Duration::from_millis(state.delay_ms)).await;
    }

    println!("{} {} -> {}", req.method(), req.uri().path(), state.status);

    Ok(Response::builder()
        .status(state.status)
        .header("Content-Type", "application/json")
        .body(Body::from(format!(
            "{{\"status\":\"{}\"}}",
            if state.status.is_success() { "UP" } else { "DOWN" }
        )))
        .unwrap())
}

#[tokio::main]
async fn main() {
    let mut args = std::env::args().skip(1);
    let port: u16 = args
        .next()
        .and_then(|p| p.parse().ok())
        .expect("usage: stub_service <port> [status-code]");
    let status = args
        .next()
        .and_then(|s| s.parse::<u16>().ok())
        .and_then(|s| StatusCode::from_u16(s).ok())
        .unwrap_or(StatusCode::OK);
    let delay_ms: u64 = std::env::var("DELAY_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    let state = StubState { status, delay_ms };

    let make_svc = make_service_fn(move |_| async move {
        Ok::<_, Infallible>(service_fn(move |req| handle(req, state)))
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("stub service on http://{} answering {} (+{}ms)", addr, status, delay_ms);

    if let Err(e) = Server::bind(&addr).serve(make_svc).await {
        eprintln!("stub service error: {}", e);
    }
}
