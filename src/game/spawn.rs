//! Spawn table and the weighted comment spawner.
//!
//! Kind selection uses a cumulative-weight table and a single uniform draw so
//! the distribution can be rebalanced by editing one array. Payload text and
//! username are drawn independently from the matching list; pairs are flavor,
//! not data.

use rand::Rng;

use crate::game::state::CommentKind;

/// Probability that a spawner tick produces an object.
pub const SPAWN_CHANCE: f64 = 0.3;
/// Horizontal spawn band, percent of play area width.
pub const SPAWN_X_MIN: f64 = 15.0;
pub const SPAWN_X_MAX: f64 = 85.0;
/// Fall speed range, percent per motion tick.
pub const SPEED_MIN: f64 = 1.5;
pub const SPEED_MAX: f64 = 2.5;

/// Relative spawn weights per kind. Order is irrelevant; the sum is the die
/// size for the uniform draw.
pub const KIND_WEIGHTS: &[(CommentKind, u32)] = &[
    (CommentKind::GoodComment, 4),
    (CommentKind::HelpfulComment, 2),
    (CommentKind::BadComment, 3),
    (CommentKind::SpamBot, 2),
    (CommentKind::Repost, 1),
    (CommentKind::GoldAward, 1),
    (CommentKind::ModWarning, 1),
    (CommentKind::CakeDay, 1),
    (CommentKind::Rickroll, 1),
];

// --- Spawn table: (text, username) flavor payloads per kind -----------------

pub const GOOD_COMMENTS: &[(&str, &str)] = &[
    ("This is hilarious! 😂", "r/funny"),
    ("Take my upvote!", "r/all"),
    ("LMAO this made my day", "u/LaughTrackLive"),
    ("Quality content right here", "u/UpvoteEngineer"),
    ("This deserves gold!", "u/KarmaInvestor"),
    ("Saving this post", "u/BookmarkGoblin"),
    ("Best meme I've seen today", "u/MemeSurgeon"),
    ("You win the internet today", "u/WinnerOfWeb"),
];

pub const HELPFUL_COMMENTS: &[(&str, &str)] = &[
    ("Summarized it better than OP", "u/SummaryBot9000"),
    ("Great explanation, thanks!", "u/ClarityPlease"),
    ("This helped me a lot!", "u/RealLearner"),
    ("TIL something new!", "r/todayilearned"),
    ("OP, you might want to check this:", "u/ExtraContext"),
    ("Fantastic point!", "u/ThinkDeeper"),
    ("Very insightful.", "u/ThreadPhilosopher"),
];

pub const BAD_COMMENTS: &[(&str, &str)] = &[
    ("This is the worst post I've ever seen", "u/NoBrainGang"),
    ("Cringe af delete this", "u/CringePolice"),
    ("Nobody asked", "u/SilentMajority"),
    ("Imagine actually posting this", "u/ComplaintDeskKaren"),
    ("You're what's wrong with this site", "u/GatekeepingElite"),
    ("Wake up, the mods are paid shills", "r/conspiracy"),
    ("Delete your account", "u/EdgeMax2000"),
];

pub const SPAM_COMMENTS: &[(&str, &str)] = &[
    ("Check out my new crypto coin!", "u/CoinDropDev"),
    ("FREE V-BUCKS HERE -> [dodgy.link]", "u/VbucksMaster"),
    ("My other page is better", "u/ThirstTrapBot"),
    ("Subscribe to my channel!", "u/CloutHunterYT"),
    ("!!!!!! CLICK HERE !!!!!!", "u/ClickStorm"),
    ("Nice post, visit my profile for more", "u/PromoWizard"),
    ("Earn $5000/month with this ONE trick!", "u/WealthHackers"),
    ("Join our Discord to get free skins!", "u/SkinDropHype"),
    ("I made $2,000 in a day from this site", "u/HustleGuru"),
    ("DM me for a business opportunity", "u/DM4Success"),
];

pub const TROLL_COMMENTS: &[(&str, &str)] = &[
    ("Everyone who likes this is an NPC", "u/MatrixAwakened"),
    ("Flat Earth makes more sense than NASA's lies", "u/GlobeDenier"),
    ("This site is full of brainwashed sheep", "u/MeatPill"),
    ("Downvoted because I can", "u/ContrarianKing"),
    ("Your favorite creator could never", "u/StanWars"),
    ("Prove me wrong. I'll wait.", "u/JustAskingQuestions"),
    ("All mods are power tripping, no exceptions", "u/BanEvader9"),
    ("First!", "u/RefreshSniper"),
    ("Came here to say this", "u/MindReader77"),
    ("Edit: Thanks for the gold, kind stranger!", "u/AwardBait"),
];

pub const REPOST_TEXT: &str = "I've seen this before... pretty sure it's a repost.";
pub const GOLD_AWARD_TEXT: &str = "Someone gave you Gold! Thanks for the Gold Kind Stranger!";
pub const GOLD_AWARD_USERNAME: &str = "Gold Award!";
pub const MOD_WARNING_TEXT: &str = "MOD WARNING: Rule violation detected in comments!";
pub const MOD_WARNING_USERNAME: &str = "r/Mods";
pub const CAKE_DAY_TEXT: &str = "Happy Cake Day! Here's a power-up!";

/// Everything the spawner decides; the session assigns the id and initial `y`
/// when it admits the draw.
#[derive(Clone, Debug)]
pub struct SpawnDraw {
    pub kind: CommentKind,
    pub x: f64,
    pub speed: f64,
    pub text: String,
    pub username: String,
}

/// One spawner tick: with [`SPAWN_CHANCE`], produce exactly one draw.
pub fn roll_spawn<R: Rng + ?Sized>(rng: &mut R) -> Option<SpawnDraw> {
    if rng.gen_range(0.0..1.0) < SPAWN_CHANCE {
        Some(draw_comment(rng))
    } else {
        None
    }
}

/// Build a fully random comment draw: weighted kind, uniform position and
/// speed, flavor payload from the spawn table.
pub fn draw_comment<R: Rng + ?Sized>(rng: &mut R) -> SpawnDraw {
    let kind = weighted_kind(rng.gen_range(0..total_weight()));
    let (text, username) = payload(kind, rng);
    SpawnDraw {
        kind,
        x: rng.gen_range(SPAWN_X_MIN..=SPAWN_X_MAX),
        speed: rng.gen_range(SPEED_MIN..=SPEED_MAX),
        text,
        username,
    }
}

pub fn total_weight() -> u32 {
    KIND_WEIGHTS.iter().map(|&(_, w)| w).sum()
}

/// Map a uniform roll in `0..total_weight()` onto a kind by walking the
/// cumulative weights.
pub fn weighted_kind(roll: u32) -> CommentKind {
    let mut cumulative = 0;
    for &(kind, weight) in KIND_WEIGHTS {
        cumulative += weight;
        if roll < cumulative {
            return kind;
        }
    }
    // A roll within 0..total_weight() always lands in the loop; keep a
    // fallback anyway so an out-of-range roll cannot panic mid-game.
    CommentKind::GoodComment
}

fn payload<R: Rng + ?Sized>(kind: CommentKind, rng: &mut R) -> (String, String) {
    match kind {
        CommentKind::GoodComment => pick_pair(GOOD_COMMENTS, rng),
        CommentKind::HelpfulComment => pick_pair(HELPFUL_COMMENTS, rng),
        CommentKind::BadComment => pick_pair(BAD_COMMENTS, rng),
        CommentKind::SpamBot => pick_pair(SPAM_COMMENTS, rng),
        CommentKind::Rickroll => pick_pair(TROLL_COMMENTS, rng),
        CommentKind::Repost => (
            REPOST_TEXT.to_string(),
            format!("u/ReposterPatrol{}", rng.gen_range(0..100)),
        ),
        CommentKind::GoldAward => (GOLD_AWARD_TEXT.to_string(), GOLD_AWARD_USERNAME.to_string()),
        CommentKind::ModWarning => (MOD_WARNING_TEXT.to_string(), MOD_WARNING_USERNAME.to_string()),
        CommentKind::CakeDay => (
            CAKE_DAY_TEXT.to_string(),
            format!("u/YourCakeDayAlt{}", rng.gen_range(0..100)),
        ),
    }
}

// Text and username are independent draws on purpose; mismatched pairs read
// like a busy comment section.
fn pick_pair<R: Rng + ?Sized>(list: &[(&str, &str)], rng: &mut R) -> (String, String) {
    let text = list[rng.gen_range(0..list.len())].0;
    let username = list[rng.gen_range(0..list.len())].1;
    (text.to_string(), username.to_string())
}
