//! HungryMod Karma core crate.
//!
//! A short arcade round of comment moderation: cards fall down the canvas and
//! must be clicked to approve or delete before the 30 second clock runs out.
//! The pure game logic (spawning, motion, scoring, session clock) lives in
//! [`game::state`] and [`game::spawn`] and runs natively under `cargo test`;
//! the browser runtime, renderer, high-score ledger and host message bridge
//! sit beside it under [`game`].

use wasm_bindgen::prelude::*;

pub mod game;

pub use game::spawn::{SPAWN_CHANCE, SpawnDraw, draw_comment, roll_spawn, weighted_kind};
pub use game::state::{
    CommentKind, FallingObject, SESSION_SECONDS, SessionState, Status, streak_multiplier,
};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Mount the game into the current document and wait for the first click.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    game::start_app()
}
