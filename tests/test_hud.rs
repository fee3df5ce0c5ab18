mod common;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use gate_flyer::constants::{DEATH_PROMPT, HUD_Y, OVERLAY_Y, START_PROMPT};
use gate_flyer::entity::{Entity, TickContext};
use gate_flyer::flyer::Flyer;
use gate_flyer::geometry::Canvas;
use gate_flyer::input::Key;
use gate_flyer::overlay::*;
use gate_flyer::scoreboard::ScoreBoard;
use gate_flyer::surface::{Baseline, Colour};

use common::*;

fn ctx() -> TickContext {
    TickContext {
        canvas: Canvas::new(600, 400),
        fps: 12,
    }
}

fn make_overlay() -> (Rc<RefCell<Flyer>>, MessageOverlay) {
    let flyer = Rc::new(RefCell::new(Flyer::new()));
    let overlay = MessageOverlay::new(Rc::clone(&flyer));
    (flyer, overlay)
}

// ── ScoreBoard ────────────────────────────────────────────────────────────────

#[test]
fn status_line_lists_fps_level_score_and_best() {
    let game = make_game();
    {
        let mut board = game.scoreboard().borrow_mut();
        board.score = 3;
        board.high_score = 9;
    }
    game.level().borrow_mut().level = 2;
    assert_eq!(
        game.scoreboard().borrow().status_line(12),
        "FPS: 12 Lvl: 2 Score: 3 HS: 9"
    );
}

#[test]
fn detached_scoreboard_reports_level_one() {
    let board = ScoreBoard::default();
    assert_eq!(board.level(), 1);
}

#[test]
fn reset_promotes_high_score_then_zeroes() {
    let mut board = ScoreBoard::default();
    board.score = 7;
    board.high_score = 3;
    board.receive_key(Key::Reset, &ctx());
    assert_eq!(board.high_score, 7);
    assert_eq!(board.score, 0);
}

#[test]
fn high_score_never_decreases() {
    let mut board = ScoreBoard::default();
    let mut best = 0;
    for score in [4, 2, 9, 0, 9, 1, 12, 3] {
        board.score = score;
        board.receive_key(Key::Reset, &ctx());
        assert!(board.high_score >= best);
        best = board.high_score;
    }
    assert_eq!(best, 12);
}

#[test]
fn hud_is_centred_white_on_black_at_top() {
    let mut game = make_game();
    let mut surface = RecordingSurface::default();
    game.tick(&mut surface).unwrap();

    let texts = surface.texts();
    let (text, x, y) = &texts[0];
    assert_eq!(text, "FPS: 12 Lvl: 1 Score: 0 HS: 0");
    assert_eq!(*x, 300 - (29 * CHAR_WIDTH) / 2);
    assert_eq!(*y, HUD_Y);
    assert!(surface
        .calls
        .contains(&DrawCall::Stroke(text.clone(), *x, *y)));
}

// ── MessageOverlay ────────────────────────────────────────────────────────────

#[test]
fn starts_with_visible_start_prompt() {
    let (_flyer, overlay) = make_overlay();
    assert!(overlay.visible);
    assert_eq!(overlay.text, START_PROMPT);
    assert_eq!(overlay.countdown, NO_COUNTDOWN);
}

#[test]
fn flap_hides_prompt_without_toast() {
    let (_flyer, mut overlay) = make_overlay();
    overlay.receive_key(Key::Flap, &ctx());
    assert!(!overlay.visible);
}

#[test]
fn flap_cannot_dismiss_running_toast() {
    let (_flyer, mut overlay) = make_overlay();
    overlay.toast("Level 2", 3, 12);
    overlay.receive_key(Key::Flap, &ctx());
    assert!(overlay.visible);
    assert_eq!(overlay.countdown, 36);
}

#[test]
fn toast_counts_down_then_hides() {
    let (_flyer, mut overlay) = make_overlay();
    overlay.toast("hi", 1, 3);
    let mut seen = Vec::new();
    for _ in 0..5 {
        overlay.update(&ctx());
        seen.push((overlay.countdown, overlay.visible));
    }
    assert_eq!(
        seen,
        vec![(2, true), (1, true), (0, true), (-1, false), (-1, false)]
    );
}

#[test]
fn death_prompt_overrides_toast() {
    let (flyer, mut overlay) = make_overlay();
    overlay.toast("Level 3", 3, 12);
    flyer.borrow_mut().hit();
    overlay.update(&ctx());
    assert!(overlay.visible);
    assert_eq!(overlay.text, DEATH_PROMPT);
    assert_eq!(overlay.countdown, 36);
}

#[test]
fn reset_restores_start_prompt() {
    let (flyer, mut overlay) = make_overlay();
    overlay.toast("Level 3", 3, 12);
    flyer.borrow_mut().hit();
    overlay.update(&ctx());
    overlay.receive_key(Key::Reset, &ctx());
    assert!(overlay.visible);
    assert_eq!(overlay.text, START_PROMPT);
    assert!(!overlay.is_counting_down());
}

#[test]
fn hidden_overlay_draws_nothing() {
    let mut game = make_game();
    game.dispatch_key(Key::Flap, Instant::now());
    let mut surface = RecordingSurface::default();
    game.tick(&mut surface).unwrap();
    assert!(surface.texts().iter().all(|(t, _, _)| t != START_PROMPT));
}

#[test]
fn overlay_text_is_red_and_centred() {
    let mut game = make_game();
    let mut surface = RecordingSurface::default();
    game.tick(&mut surface).unwrap();

    let texts = surface.texts();
    let (text, x, y) = texts.last().unwrap();
    assert_eq!(text, START_PROMPT);
    assert_eq!(*x, 300 - (14 * CHAR_WIDTH) / 2);
    assert_eq!(*y, OVERLAY_Y);
    let style = surface.style.as_ref().unwrap();
    assert_eq!(style.fill, Colour::Red);
    assert_eq!(style.stroke, Colour::Black);
    assert_eq!(style.baseline, Baseline::Top);
}
