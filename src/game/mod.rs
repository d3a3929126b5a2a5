//! Browser runtime: wires the periodic timers, click input, host bridge and
//! renderer to the pure session reducers in [`state`].
//!
//! All mutation funnels through one thread-local cell holding the [`Game`]
//! value; every event (interval tick, click, host message) borrows it, swaps
//! the session for a reduced copy and returns. The spawn/motion and clock
//! intervals exist only while the session is `Active` and are cancelled on
//! every path that leaves `Active`, so a stale callback can never touch a
//! reset session.

pub mod bridge;
pub mod ledger;
pub mod render;
pub mod spawn;
pub mod state;

use std::cell::RefCell;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, console, window};

use self::bridge::{HostEvent, HostRequest};
use self::state::{SessionState, Status};

/// Spawn + motion cadence.
pub const SPAWN_TICK_MS: i32 = 80;
/// Session clock cadence.
pub const CLOCK_TICK_MS: i32 = 1000;

/// A running `setInterval` paired with the closure backing it. Dropping the
/// handle clears the interval and frees the closure.
struct IntervalHandle {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl IntervalHandle {
    fn new(ms: i32, callback: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
        let id = win.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        )?;
        Ok(Self { id, _closure: closure })
    }

    /// Stop firing without freeing the closure. This is the safe form to call
    /// from inside the interval's own callback; the closure is dropped later,
    /// from a different event, when the handle is replaced.
    fn stop(&self) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(self.id);
        }
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

struct Game {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    session: SessionState,
    rng: SmallRng,
    spawn_timer: Option<IntervalHandle>,
    clock_timer: Option<IntervalHandle>,
}

// RefCell::new isn't const on this toolchain; allow Clippy lint until a const initializer is feasible.
thread_local! {
    static GAME: RefCell<Option<Game>> = RefCell::new(None);
}

/// Swap the session for a reduced copy. Every event-driven mutation goes
/// through here so a tick is always one atomic replace.
fn apply(game: &mut Game, reduce: impl FnOnce(SessionState) -> SessionState) {
    let current = std::mem::replace(&mut game.session, SessionState::new(0));
    game.session = reduce(current);
}

/// Entry point: build the canvas and HUD, hook up input and the host bridge,
/// and start the render loop. The game waits in `Idle` until the first click.
pub fn start_app() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // Create / reuse the play area canvas.
    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id("hm-canvas") {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id("hm-canvas");
        c.set_width(render::CANVAS_WIDTH);
        c.set_height(render::CANVAS_HEIGHT);
        c.set_attribute("style", "position:fixed; left:50%; top:50%; transform:translate(-50%,-50%); box-shadow:0 0 32px 0 rgba(0,0,0,0.18); border-radius:12px; border:2px solid #222; background:#0e1113; z-index:20; cursor:pointer;").ok();
        doc.body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&c)?;
        c
    };
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    // HUD overlay (top-left), updated every frame.
    if doc.get_element_by_id("hm-hud").is_none() {
        if let Some(body) = doc.body() {
            let div = doc.create_element("div")?;
            div.set_id("hm-hud");
            div.set_text_content(Some(""));
            div.set_attribute("style", "position:fixed; top:10px; left:12px; font-family:'Fira Code', monospace; font-size:15px; padding:4px 8px; background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:6px; color:#ffd166; z-index:45; letter-spacing:0.5px;").ok();
            body.append_child(&div)?;
        }
    }

    let now = win.performance().map(|p| p.now()).unwrap_or(0.0);
    let game = Game {
        canvas: canvas.clone(),
        ctx,
        session: SessionState::new(ledger::load()),
        rng: SmallRng::seed_from_u64(now.to_bits()),
        spawn_timer: None,
        clock_timer: None,
    };
    GAME.with(|cell| cell.replace(Some(game)));

    // Click listener: hit-test while active, start / restart otherwise.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            handle_click(evt.offset_x() as f64, evt.offset_y() as f64);
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Host bridge: adopt a better remote best, log the greeting.
    bridge::install_listener(|event| match event {
        HostEvent::HighScoreData { high_score } => {
            GAME.with(|cell| {
                if let Some(game) = cell.borrow_mut().as_mut() {
                    apply(game, |mut s| {
                        if high_score > s.best_karma {
                            s.best_karma = high_score;
                        }
                        s
                    });
                }
            });
        }
        HostEvent::InitialData { username, game_ready } => {
            console::log_1(&format!("host ready={game_ready} for {username}").into());
        }
    })?;
    bridge::post(&HostRequest::WebViewReady);
    bridge::post(&HostRequest::GetHighScore);

    start_render_loop();
    Ok(())
}

fn handle_click(x: f64, y: f64) {
    GAME.with(|cell| {
        if let Some(game) = cell.borrow_mut().as_mut() {
            match game.session.status {
                Status::Active => {
                    if let Some(id) = hit_test(game, x, y) {
                        apply(game, |s| s.resolve_click(id));
                    }
                }
                Status::Idle | Status::Ended => {
                    if let Err(err) = start_session(game) {
                        console::warn_1(&err);
                    }
                }
            }
        }
    });
}

/// Topmost card under the cursor; newest objects draw last, so scan in
/// reverse spawn order.
fn hit_test(game: &Game, x: f64, y: f64) -> Option<u32> {
    let w = game.canvas.width() as f64;
    let h = game.canvas.height() as f64;
    game.session.objects.iter().rev().find_map(|obj| {
        let (left, top, cw, ch) = render::card_rect(w, h, obj.x, obj.y);
        (x >= left && x <= left + cw && y >= top && y <= top + ch).then_some(obj.id)
    })
}

/// Enter `Active`: reset the session and start both periodic triggers. Any
/// timers from a previous session are dropped first (this runs from the click
/// listener, never from inside a timer callback).
fn start_session(game: &mut Game) -> Result<(), JsValue> {
    game.spawn_timer = None;
    game.clock_timer = None;
    apply(game, SessionState::start);
    game.spawn_timer = Some(IntervalHandle::new(SPAWN_TICK_MS, on_spawn_tick)?);
    game.clock_timer = Some(IntervalHandle::new(CLOCK_TICK_MS, on_clock_tick)?);
    Ok(())
}

fn on_spawn_tick() {
    GAME.with(|cell| {
        if let Some(game) = cell.borrow_mut().as_mut() {
            if game.session.status != Status::Active {
                return;
            }
            let draw = spawn::roll_spawn(&mut game.rng);
            apply(game, move |s| {
                let s = s.motion_tick();
                match draw {
                    Some(d) => s.admit(d),
                    None => s,
                }
            });
        }
    });
}

fn on_clock_tick() {
    GAME.with(|cell| {
        if let Some(game) = cell.borrow_mut().as_mut() {
            if game.session.status != Status::Active {
                return;
            }
            let prev_best = game.session.best_karma;
            apply(game, SessionState::clock_tick);
            if game.session.status == Status::Ended {
                // Natural end of timer: stop both triggers on this exit path
                // too. The handles stay stored so this closure is not freed
                // while executing; the next restart replaces them.
                if let Some(timer) = &game.spawn_timer {
                    timer.stop();
                }
                if let Some(timer) = &game.clock_timer {
                    timer.stop();
                }
                if game.session.best_karma > prev_best {
                    ledger::save(game.session.best_karma);
                }
            }
        }
    });
}

type FrameCallback = std::rc::Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_render_loop() {
    let f: FrameCallback = std::rc::Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        GAME.with(|cell| {
            if let Some(game) = cell.borrow_mut().as_mut() {
                render::draw(&game.ctx, &game.canvas, &game.session);
                update_hud(&game.session);
            }
        });
        if let Some(w) = window() {
            let _ =
                w.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

fn update_hud(session: &SessionState) {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = doc.get_element_by_id("hm-hud") {
        let shield = if session.protection { " 🛡" } else { "" };
        let bonus = if session.bonus_seconds > 0 {
            format!(" ×2({}s)", session.bonus_seconds)
        } else {
            String::new()
        };
        el.set_text_content(Some(&format!(
            "Karma {} · Combo {} · {}s · Best {}{}{}",
            session.karma, session.combo, session.time_left, session.best_karma, shield, bonus
        )));
    }
}
