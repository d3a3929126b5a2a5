// Integration tests (native) for the card geometry shared between the
// renderer and the click hit-test.

use hungrymod_karma::game::render::{CANVAS_HEIGHT, CANVAS_WIDTH, CARD_WIDTH, card_rect};

#[test]
fn card_is_centered_on_its_horizontal_anchor() {
    let w = CANVAS_WIDTH as f64;
    let h = CANVAS_HEIGHT as f64;
    let (left, top, cw, _) = card_rect(w, h, 50.0, 20.0);
    assert_eq!(left + cw / 2.0, w / 2.0);
    assert_eq!(top, h * 0.2);
}

#[test]
fn edge_cards_are_clamped_inside_the_canvas() {
    let w = CANVAS_WIDTH as f64;
    let h = CANVAS_HEIGHT as f64;

    let (left, ..) = card_rect(w, h, 0.0, 50.0);
    assert_eq!(left, 0.0);

    let (left, _, cw, _) = card_rect(w, h, 100.0, 50.0);
    assert_eq!(left + cw, w);
    assert_eq!(cw, CARD_WIDTH);
}

#[test]
fn offscreen_spawn_positions_map_above_the_canvas() {
    let w = CANVAS_WIDTH as f64;
    let h = CANVAS_HEIGHT as f64;
    let (_, top, ..) = card_rect(w, h, 50.0, -5.0);
    assert!(top < 0.0, "fresh spawns start above the visible area");
}
