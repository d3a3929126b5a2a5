//! Session state and the per-event reducers.
//!
//! The whole game is one value of [`SessionState`] that is replaced wholesale
//! on every timer tick and click; nothing outside this module mutates it
//! partially, so interleaved timer callbacks can never observe a half-applied
//! update. All functions here are pure over (state, input) and run natively,
//! which is where the bulk of the test coverage lives.

use crate::game::spawn::SpawnDraw;

/// Session length in seconds.
pub const SESSION_SECONDS: u32 = 30;
/// Vertical percent position past which an object is culled.
pub const OFFSCREEN_Y: f64 = 110.0;
/// Objects enter just above the visible area.
pub const SPAWN_Y: f64 = -5.0;
/// Seconds of double points granted by a cake-day click.
pub const BONUS_WINDOW_SECONDS: u32 = 5;
/// Streak multiplier never exceeds this.
pub const STREAK_MULTIPLIER_CAP: u32 = 5;

/// The nine comment kinds that can fall. The name says which click action is
/// the right one; `base_points` carries a sign convention (negative for
/// approve kinds).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CommentKind {
    GoodComment,
    HelpfulComment,
    BadComment,
    SpamBot,
    Repost,
    GoldAward,
    ModWarning,
    CakeDay,
    Rickroll,
}

impl CommentKind {
    /// Signed base value fixed at spawn. Negative means "click to approve";
    /// the scoring formula turns that into a positive karma contribution, so
    /// the stored sign must stay as-is.
    pub fn base_points(self) -> i64 {
        match self {
            CommentKind::GoodComment => -5,
            CommentKind::HelpfulComment => -10,
            CommentKind::BadComment => 10,
            CommentKind::SpamBot => 7,
            CommentKind::Repost => 3,
            CommentKind::GoldAward => 5,
            CommentKind::ModWarning => 25,
            CommentKind::CakeDay => 0,
            CommentKind::Rickroll => 3,
        }
    }

    /// Kinds that cost karma when clicked without a protection shield.
    pub fn is_harmful(self) -> bool {
        matches!(
            self,
            CommentKind::BadComment
                | CommentKind::SpamBot
                | CommentKind::Repost
                | CommentKind::ModWarning
                | CommentKind::Rickroll
        )
    }
}

/// One on-screen clickable comment card.
#[derive(Clone, Debug)]
pub struct FallingObject {
    pub id: u32,
    /// Horizontal percent of the play area, 0..100.
    pub x: f64,
    /// Vertical percent; crossing [`OFFSCREEN_Y`] removes the object.
    pub y: f64,
    pub kind: CommentKind,
    /// Percent-per-tick fall speed, fixed for the object's lifetime.
    pub speed: f64,
    pub base_points: i64,
    pub text: String,
    pub username: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    Idle,
    Active,
    Ended,
}

#[derive(Clone, Debug)]
pub struct SessionState {
    /// Objects successfully clicked this session.
    pub score: u32,
    /// Consecutive approve streak.
    pub combo: u32,
    /// Primary outcome metric. Invariant: `karma >= 1` at all times.
    pub karma: i64,
    /// Live objects in spawn order.
    pub objects: Vec<FallingObject>,
    /// One-shot shield consumed by the next harmful click.
    pub protection: bool,
    /// Double-points window, decremented once per clock tick.
    pub bonus_seconds: u32,
    pub time_left: u32,
    pub status: Status,
    /// Best karma across sessions; updated only when a session ends higher.
    pub best_karma: i64,
    next_id: u32,
}

impl SessionState {
    pub fn new(best_karma: i64) -> Self {
        Self {
            score: 0,
            combo: 0,
            karma: 1,
            objects: Vec::new(),
            protection: false,
            bonus_seconds: 0,
            time_left: SESSION_SECONDS,
            status: Status::Idle,
            best_karma,
            next_id: 0,
        }
    }

    /// Start (or restart) a session. Clears every piece of transient state
    /// regardless of how the previous session ended; `best_karma` survives.
    pub fn start(self) -> Self {
        Self {
            score: 0,
            combo: 0,
            karma: 1,
            objects: Vec::new(),
            protection: false,
            bonus_seconds: 0,
            time_left: SESSION_SECONDS,
            status: Status::Active,
            best_karma: self.best_karma,
            next_id: 0,
        }
    }

    /// One second of wall clock. Decays the bonus window and ends the session
    /// at zero; ending objects are left in place on purpose.
    pub fn clock_tick(mut self) -> Self {
        if self.status != Status::Active {
            return self;
        }
        self.time_left = self.time_left.saturating_sub(1);
        self.bonus_seconds = self.bonus_seconds.saturating_sub(1);
        if self.time_left == 0 {
            self.status = Status::Ended;
            if self.karma > self.best_karma {
                self.best_karma = self.karma;
            }
        }
        self
    }

    /// Advance every live object by its own speed, then cull what has left the
    /// screen. Advance-before-cull: an object admitted this tick survives
    /// unless it is already past the bound.
    pub fn motion_tick(mut self) -> Self {
        if self.status != Status::Active {
            return self;
        }
        for obj in &mut self.objects {
            obj.y += obj.speed;
        }
        self.objects.retain(|obj| obj.y < OFFSCREEN_Y);
        self
    }

    /// Turn a spawner draw into a live object. Ids come from a per-session
    /// monotone counter, so at most one live object ever has a given id.
    pub fn admit(mut self, draw: SpawnDraw) -> Self {
        if self.status != Status::Active {
            return self;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.objects.push(FallingObject {
            id,
            x: draw.x,
            y: SPAWN_Y,
            kind: draw.kind,
            speed: draw.speed,
            base_points: draw.kind.base_points(),
            text: draw.text,
            username: draw.username,
        });
        self
    }

    /// Scoring engine. A click on an id with no live object is a no-op, which
    /// makes double clicks and click-vs-cull races harmless.
    pub fn resolve_click(mut self, id: u32) -> Self {
        if self.status != Status::Active {
            return self;
        }
        let Some(pos) = self.objects.iter().position(|obj| obj.id == id) else {
            return self;
        };
        let obj = self.objects.remove(pos);
        self.score += 1;

        let mut effective = obj.base_points;
        if self.bonus_seconds > 0 {
            effective *= 2;
        }

        match obj.kind {
            CommentKind::GoodComment | CommentKind::HelpfulComment => {
                self.combo += 1;
                self.protection = true;
                // Stored points are negative; negate so the streak pays out.
                self.karma += -effective * i64::from(streak_multiplier(self.combo));
            }
            CommentKind::GoldAward => {
                self.karma += effective;
                self.protection = true;
            }
            CommentKind::CakeDay => {
                self.bonus_seconds = BONUS_WINDOW_SECONDS;
                // Flat bonus, deliberately outside the doubling window.
                self.karma += 10;
            }
            CommentKind::BadComment
            | CommentKind::SpamBot
            | CommentKind::Repost
            | CommentKind::ModWarning
            | CommentKind::Rickroll => {
                if self.protection {
                    self.protection = false;
                } else {
                    self.combo = 0;
                    self.karma = (self.karma - effective * 2).max(1);
                }
            }
        }
        self
    }
}

/// Streak multiplier for approve clicks: every third consecutive approve bumps
/// it by one, capped at [`STREAK_MULTIPLIER_CAP`]. `combo` is the value after
/// the current click has been counted.
pub fn streak_multiplier(combo: u32) -> u32 {
    (combo / 3 + 1).min(STREAK_MULTIPLIER_CAP)
}
