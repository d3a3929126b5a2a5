//! High-score ledger: best karma across sessions.
//!
//! Locally persisted under one `localStorage` key, mirrored to the host via
//! the bridge. Both paths are fire-and-forget; a storage failure is logged to
//! the console and never touches game state.

use web_sys::{console, window};

use crate::game::bridge::{self, HostRequest};

pub const HIGH_SCORE_KEY: &str = "hungrymod_high_score";

/// Read the locally stored best karma. Absent or unparsable values load as 0.
pub fn load() -> i64 {
    if let Some(win) = window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(Some(raw)) = store.get_item(HIGH_SCORE_KEY) {
                return parse_score(&raw);
            }
        }
    }
    0
}

/// Persist a new best karma locally and tell the host about it.
pub fn save(value: i64) {
    if let Some(win) = window() {
        match win.local_storage() {
            Ok(Some(store)) => {
                if store.set_item(HIGH_SCORE_KEY, &value.to_string()).is_err() {
                    console::warn_1(&"ledger: localStorage write failed".into());
                }
            }
            _ => console::warn_1(&"ledger: localStorage unavailable".into()),
        }
    }
    bridge::post(&HostRequest::SaveHighScore { score: value });
}

pub fn parse_score(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}
