mod common;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use gate_flyer::assets::ImageId;
use gate_flyer::entity::{Entity, TickContext};
use gate_flyer::flyer::Flyer;
use gate_flyer::geometry::Canvas;
use gate_flyer::input::Key;
use gate_flyer::level::LevelManager;
use gate_flyer::overlay::MessageOverlay;
use gate_flyer::scoreboard::ScoreBoard;
use gate_flyer::Game;

use common::*;

fn set_score(game: &Game, score: u32) {
    game.scoreboard().borrow_mut().score = score;
}

fn level_of(game: &Game) -> (u32, usize) {
    let level = game.level().borrow();
    (level.level, level.background_index)
}

// ── Level-up ──────────────────────────────────────────────────────────────────

#[test]
fn starts_at_level_one() {
    let game = make_game();
    assert_eq!(level_of(&game), (1, 0));
    assert_eq!(game.level().borrow().background_count(), 4);
}

#[test]
fn five_gates_reach_level_two_exactly_once() {
    let mut game = make_game();
    for _ in 0..5 {
        game.scoreboard().borrow_mut().gate_passed();
        tick(&mut game);
    }
    assert_eq!(game.scoreboard().borrow().score, 5);
    assert_eq!(level_of(&game), (2, 1));

    tick_n(&mut game, 10);
    assert_eq!(level_of(&game), (2, 1));
}

#[test]
fn level_toast_shows_for_three_seconds_of_ticks() {
    let mut game = make_game();
    assert_eq!(game.fps(), 12);
    set_score(&game, 5);

    tick(&mut game);
    {
        let overlay = game.overlay().borrow();
        assert!(overlay.visible);
        assert_eq!(overlay.text, "Level 2");
    }

    // Visible for 3 × 12 ticks in total, counting the one that raised it
    for _ in 1..36 {
        tick(&mut game);
        assert!(game.overlay().borrow().visible);
    }
    tick(&mut game);
    let overlay = game.overlay().borrow();
    assert!(!overlay.visible);
    assert!(!overlay.is_counting_down());
}

#[test]
fn toast_length_follows_current_speed() {
    let mut game = make_game();
    game.set_speed(40, Instant::now());
    set_score(&game, 5);
    tick(&mut game);
    // 3 s × 25 fps, one already consumed this tick
    assert_eq!(game.overlay().borrow().countdown, 74);
}

#[test]
fn latch_rearms_after_next_point() {
    let mut game = make_game();
    set_score(&game, 5);
    tick(&mut game);
    assert!(game.level().borrow().leveled_up);

    set_score(&game, 6);
    tick(&mut game);
    assert!(!game.level().borrow().leveled_up);

    set_score(&game, 10);
    tick(&mut game);
    assert_eq!(level_of(&game), (3, 2));
}

#[test]
fn level_capped_at_background_count() {
    let mut game = make_game();
    for score in [5, 6, 10, 11, 15, 16, 20, 21, 25] {
        set_score(&game, score);
        tick(&mut game);
        let (level, bg) = level_of(&game);
        assert!(level as usize <= game.level().borrow().background_count());
        assert!(bg < game.level().borrow().background_count());
    }
    assert_eq!(level_of(&game), (4, 3));
}

#[test]
fn zero_score_shows_first_background() {
    let mut game = make_game();
    game.level().borrow_mut().background_index = 2;
    tick(&mut game);
    assert_eq!(game.level().borrow().background_index, 0);
}

#[test]
fn reset_key_returns_to_level_one() {
    let mut game = make_game();
    set_score(&game, 5);
    tick(&mut game);
    game.dispatch_key(Key::Reset, Instant::now());
    assert_eq!(level_of(&game), (1, 0));
    assert!(!game.level().borrow().leveled_up);
}

#[test]
fn draws_current_background() {
    let mut game = make_game();
    set_score(&game, 5);
    let mut surface = RecordingSurface::default();
    game.tick(&mut surface).unwrap();
    assert_eq!(surface.images()[0], (ImageId::Background(1), 0, 0));
}

// ── Standalone manager ────────────────────────────────────────────────────────

#[test]
fn fewer_backgrounds_mean_fewer_levels() {
    let flyer = Rc::new(RefCell::new(Flyer::new()));
    let overlay = Rc::new(RefCell::new(MessageOverlay::new(Rc::clone(&flyer))));
    let scoreboard = Rc::new(RefCell::new(ScoreBoard::default()));
    let mut level =
        LevelManager::with_backgrounds(2, Rc::clone(&scoreboard), Rc::clone(&overlay));
    let ctx = TickContext {
        canvas: Canvas::new(600, 400),
        fps: 10,
    };

    for score in [5, 6, 10, 11, 15] {
        scoreboard.borrow_mut().score = score;
        level.update(&ctx);
    }
    assert_eq!(level.level, 2);
    assert_eq!(level.background_index, 1);
    assert_eq!(overlay.borrow().text, "Level 2");
    assert_eq!(overlay.borrow().countdown, 30);
}
