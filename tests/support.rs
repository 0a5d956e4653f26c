use std::sync::{Arc, Mutex};

use serde_json::Value;
use warp::http::StatusCode;
use warp::Filter;

/// What the fake endpoint saw: the `Authorization` header and the JSON body.
pub type Captured = Arc<Mutex<Option<(Option<String>, Value)>>>;

/// Starts a server answering `POST /v1/chat/completions` with `status` and
/// `body`. Returns the base URL to configure and the captured request.
pub fn spawn_completion_server(status: u16, body: String) -> (String, Captured) {
    let captured: Captured = Arc::new(Mutex::new(None));
    let status = StatusCode::from_u16(status).expect("valid status code");

    let sink = Arc::clone(&captured);
    let route = warp::post()
        .and(warp::path!("v1" / "chat" / "completions"))
        .and(warp::header::optional::<String>("authorization"))
        .and(warp::body::json())
        .map(move |auth: Option<String>, request: Value| {
            *sink.lock().unwrap() = Some((auth, request));
            warp::reply::with_status(body.clone(), status)
        });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    (format!("http://{addr}/v1"), captured)
}

pub fn completion_body(contents: &[&str], total_tokens: u64) -> String {
    let choices: Vec<Value> = contents
        .iter()
        .enumerate()
        .map(|(index, content)| {
            serde_json::json!({
                "index": index,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            })
        })
        .collect();

    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-4-0613",
        "choices": choices,
        "usage": {"prompt_tokens": 7, "completion_tokens": total_tokens - 7, "total_tokens": total_tokens}
    })
    .to_string()
}
