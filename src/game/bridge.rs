//! Web-view side of the host platform message bridge.
//!
//! The host mounts the game in an embedded web view and talks to it with
//! JSON messages over `postMessage`. Each request type is issued at most once
//! per session lifecycle point, so there is no correlation id machinery: fire
//! a request, later receive at most one matching event. The channel is
//! best-effort throughout; nothing here may throw back into the game loop.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{MessageEvent, console, window};

/// Messages the game sends to the host.
#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum HostRequest {
    /// Sent once at startup so the host knows the web view is live.
    #[serde(rename = "webViewReady")]
    WebViewReady,
    #[serde(rename = "getHighScore")]
    GetHighScore,
    #[serde(rename = "saveHighScore")]
    SaveHighScore { score: i64 },
}

/// Messages the host sends back.
#[derive(Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum HostEvent {
    #[serde(rename = "highScoreData")]
    HighScoreData {
        #[serde(rename = "highScore")]
        high_score: i64,
    },
    /// Informational only; game logic does not depend on it.
    #[serde(rename = "initialData")]
    InitialData {
        username: String,
        #[serde(rename = "gameReady")]
        game_ready: bool,
    },
}

/// Fire a request at the host (the parent frame when embedded, our own window
/// otherwise). Failures are logged and swallowed.
pub fn post(request: &HostRequest) {
    let Ok(json) = serde_json::to_string(request) else {
        return;
    };
    let Some(win) = window() else {
        return;
    };
    let target = match win.parent() {
        Ok(Some(parent)) => parent,
        _ => win,
    };
    if target.post_message(&JsValue::from_str(&json), "*").is_err() {
        console::warn_1(&"bridge: postMessage failed".into());
    }
}

/// Decode an inbound message payload. Anything that is not a known host event
/// (other frames chatter on the same channel) decodes to `None`.
pub fn decode(raw: &str) -> Option<HostEvent> {
    serde_json::from_str(raw).ok()
}

/// Attach a `message` listener on the window for the lifetime of the page and
/// feed decoded host events to `on_event`.
pub fn install_listener(
    mut on_event: impl FnMut(HostEvent) + 'static,
) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let closure = Closure::wrap(Box::new(move |evt: MessageEvent| {
        if let Some(raw) = evt.data().as_string() {
            if let Some(event) = decode(&raw) {
                on_event(event);
            }
        }
    }) as Box<dyn FnMut(_)>);
    win.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
