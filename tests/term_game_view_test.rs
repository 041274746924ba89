use glam::Vec2;

use pellet_chase::core::{GameSnapshot, GameState};
use pellet_chase::term::game_view::{
    EXIT_PROMPT, LOSS_MESSAGE, MENU_PROMPT, MENU_SUBTITLE, MENU_TITLE, PLAY_AGAIN_PROMPT,
    WIN_MESSAGE,
};
use pellet_chase::term::{FrameBuffer, GameView, Rgb, Viewport};
use pellet_chase::types::{Command, Outcome, Phase};

fn row(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect()
}

fn screen(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&row(fb, y));
        all.push('\n');
    }
    all
}

fn playing_snapshot() -> GameSnapshot {
    let mut gs = GameState::new(1);
    gs.handle_input(Command::Start);
    gs.snapshot()
}

#[test]
fn term_view_renders_menu_text() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(80, 24));

    assert!(row(&fb, 8).contains(MENU_TITLE));
    assert!(row(&fb, 10).contains(MENU_SUBTITLE));
    assert!(row(&fb, 12).contains(MENU_PROMPT));
    // No field on the menu.
    assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
}

#[test]
fn term_view_renders_border_corners() {
    let fb = GameView::default().render(&playing_snapshot(), Viewport::new(80, 24));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(79, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 23).unwrap().ch, '└');
    assert_eq!(fb.get(79, 23).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_score_hud() {
    let mut snap = playing_snapshot();
    snap.score = 7;
    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    assert!(row(&fb, 1).contains("Score: 7"));

    let fb = GameView::default()
        .with_hud(false)
        .render(&snap, Viewport::new(80, 24));
    assert!(!row(&fb, 1).contains("Score"));
}

/// True if some cell in the inclusive box has `ch` drawn in `fg`.
fn painted_near(fb: &FrameBuffer, xs: (u16, u16), ys: (u16, u16), ch: char, fg: Rgb) -> bool {
    (ys.0..=ys.1).any(|y| {
        (xs.0..=xs.1).any(|x| {
            let cell = fb.get(x, y).unwrap();
            cell.ch == ch && cell.style.fg == fg
        })
    })
}

#[test]
fn term_view_places_player_and_ghost() {
    let mut snap = playing_snapshot();
    snap.pellets.clear();
    let fb = GameView::default().render(&snap, Viewport::new(80, 24));

    // Player (910, 490) maps to about (40, 12); ghost (1600, 400) to (69.6, 10).
    let blue = Rgb::new(0, 0, 255);
    let red = Rgb::new(255, 0, 0);
    assert!(painted_near(&fb, (39, 41), (11, 13), '█', blue));
    assert!(painted_near(&fb, (68, 71), (9, 11), '█', red));
    assert!(!painted_near(&fb, (1, 20), (14, 22), '█', red));
}

#[test]
fn term_view_draws_pellets_in_yellow() {
    let mut snap = playing_snapshot();
    snap.pellets.clear();
    snap.pellets.push(Vec2::new(182.0, 98.0));
    snap.ghosts.clear();
    let fb = GameView::default()
        .with_glyph('o')
        .render(&snap, Viewport::new(80, 24));

    // 182 * 78 / 1820 = 7.8 and 98 * 22 / 980 = 2.2, plus the border.
    let yellow = Rgb::new(255, 255, 0);
    assert!(painted_near(&fb, (7, 10), (2, 4), 'o', yellow));
    assert!(!painted_near(&fb, (1, 78), (1, 22), '█', yellow));
}

#[test]
fn term_view_shows_end_panel_per_outcome() {
    let mut snap = playing_snapshot();
    for (outcome, message, other) in [
        (Outcome::Win, WIN_MESSAGE, LOSS_MESSAGE),
        (Outcome::Loss, LOSS_MESSAGE, WIN_MESSAGE),
    ] {
        snap.phase = Phase::Ended(outcome);
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));
        let all = screen(&fb);

        assert!(all.contains(message));
        assert!(!all.contains(other));
        assert!(all.contains(PLAY_AGAIN_PROMPT));
        assert!(all.contains(EXIT_PROMPT));
        assert!(all.contains('╭'));
        assert!(!row(&fb, 1).contains("Score"));
    }
}

#[test]
fn term_view_render_into_matches_render() {
    let snap = playing_snapshot();
    let view = GameView::default();
    let vp = Viewport::new(60, 20);

    let mut fb = FrameBuffer::new(3, 3);
    view.render_into(&snap, vp, &mut fb);
    assert_eq!(fb, view.render(&snap, vp));
}
