//! Canvas rendering: a plain view over [`SessionState`], no game rules.
//!
//! Cards are positioned in percent space by the game logic and mapped to
//! pixels here; `card_rect` is shared with the click hit-test so what you see
//! is exactly what you can click.

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::game::state::{CommentKind, SessionState, Status};

pub const CANVAS_WIDTH: u32 = 480;
pub const CANVAS_HEIGHT: u32 = 640;
pub const CARD_WIDTH: f64 = 176.0;
pub const CARD_HEIGHT: f64 = 52.0;

/// Pixel rectangle (left, top, width, height) of a card whose anchor sits at
/// the given percent coordinates. Clamped horizontally so cards near the play
/// area edges stay fully visible and clickable.
pub fn card_rect(canvas_w: f64, canvas_h: f64, x_pct: f64, y_pct: f64) -> (f64, f64, f64, f64) {
    let center_x = x_pct / 100.0 * canvas_w;
    let left = (center_x - CARD_WIDTH / 2.0).clamp(0.0, (canvas_w - CARD_WIDTH).max(0.0));
    let top = y_pct / 100.0 * canvas_h;
    (left, top, CARD_WIDTH, CARD_HEIGHT)
}

fn kind_color(kind: CommentKind) -> &'static str {
    match kind {
        CommentKind::GoodComment => "#1c4a2a",
        CommentKind::HelpfulComment => "#1b3f5e",
        CommentKind::BadComment => "#5a1f1f",
        CommentKind::SpamBot => "#4d3a14",
        CommentKind::Repost => "#3c3c46",
        CommentKind::GoldAward => "#7a5c14",
        CommentKind::ModWarning => "#6b1030",
        CommentKind::CakeDay => "#4a2a5e",
        CommentKind::Rickroll => "#3a2430",
    }
}

fn kind_tag(kind: CommentKind) -> &'static str {
    match kind {
        CommentKind::GoodComment | CommentKind::HelpfulComment => "APPROVE",
        CommentKind::GoldAward => "ACCEPT",
        CommentKind::CakeDay => "CAKE DAY",
        CommentKind::ModWarning => "WARNING",
        _ => "DELETE",
    }
}

// Comment texts carry emoji; clip on char boundaries, never bytes.
fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

pub fn draw(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement, session: &SessionState) {
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;

    ctx.set_fill_style_str("#0e1113");
    ctx.fill_rect(0.0, 0.0, w, h);

    // Subtle feed lanes so the empty field does not look dead.
    ctx.set_stroke_style_str("rgba(255,255,255,0.04)");
    ctx.set_line_width(1.0);
    for lane in 1..4 {
        let x = w * lane as f64 / 4.0;
        ctx.begin_path();
        ctx.move_to(x, 0.0);
        ctx.line_to(x, h);
        ctx.stroke();
    }

    for obj in &session.objects {
        let (left, top, cw, ch) = card_rect(w, h, obj.x, obj.y);
        ctx.set_fill_style_str(kind_color(obj.kind));
        ctx.fill_rect(left, top, cw, ch);
        ctx.set_stroke_style_str("rgba(255,255,255,0.25)");
        ctx.set_line_width(1.5);
        ctx.stroke_rect(left, top, cw, ch);

        ctx.set_text_align("left");
        ctx.set_font("bold 11px 'Fira Code', monospace");
        ctx.set_fill_style_str("#ffd166");
        ctx.fill_text(&clip(&obj.username, 20), left + 6.0, top + 14.0).ok();

        ctx.set_font("11px 'Fira Code', monospace");
        ctx.set_fill_style_str("#e8e8e8");
        ctx.fill_text(&clip(&obj.text, 26), left + 6.0, top + 30.0).ok();

        ctx.set_font("bold 9px 'Fira Code', monospace");
        ctx.set_fill_style_str("rgba(255,255,255,0.55)");
        ctx.fill_text(kind_tag(obj.kind), left + 6.0, top + 45.0).ok();
    }

    match session.status {
        Status::Idle => overlay(ctx, w, h, "HUNGRYMOD KARMA", "Click to start moderating"),
        Status::Ended => {
            let line = format!(
                "Karma {} · Best {} · {} handled",
                session.karma, session.best_karma, session.score
            );
            overlay_with_detail(ctx, w, h, "TIME'S UP", &line, "Click to play again");
        }
        Status::Active => {}
    }
}

fn overlay(ctx: &CanvasRenderingContext2d, w: f64, h: f64, title: &str, hint: &str) {
    overlay_with_detail(ctx, w, h, title, "", hint);
}

fn overlay_with_detail(
    ctx: &CanvasRenderingContext2d,
    w: f64,
    h: f64,
    title: &str,
    detail: &str,
    hint: &str,
) {
    ctx.set_fill_style_str("rgba(0,0,0,0.55)");
    ctx.fill_rect(0.0, 0.0, w, h);
    ctx.set_text_align("center");
    let cx = w / 2.0;
    let cy = h / 2.0;

    ctx.set_font("bold 34px 'Fira Code', monospace");
    ctx.set_line_width(6.0);
    ctx.set_stroke_style_str("#000000");
    ctx.stroke_text(title, cx, cy).ok();
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_text(title, cx, cy).ok();

    if !detail.is_empty() {
        ctx.set_font("16px 'Fira Code', monospace");
        ctx.set_fill_style_str("#ffd166");
        ctx.fill_text(detail, cx, cy + 34.0).ok();
    }

    ctx.set_font("14px 'Fira Code', monospace");
    ctx.set_fill_style_str("#cccccc");
    ctx.fill_text(hint, cx, cy + 64.0).ok();
}
