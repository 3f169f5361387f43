//! Integration tests for the frame loop
//!
//! Drives a headless session: scripted input, a software canvas, and a
//! clock that never sleeps.

use paintbrush::config::AppConfig;
use paintbrush::session::{Session, SessionState};
use paintbrush::systems::NullClock;
use paintbrush_core::{Canvas, Color, Key, Point, Velocity};
use paintbrush_input::{Event, KeyMapper, ScriptedEvents};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

fn default_session() -> Session<Canvas> {
    let config = AppConfig::default();
    Session::initialize(
        config.to_session_settings(),
        config.to_brush_settings(),
        Canvas::new(config.window.width, config.window.height),
    )
}

#[test]
fn test_run_until_quit() {
    let mut session = default_session();
    let mut clock = NullClock::default();
    let mut events = ScriptedEvents::new([
        vec![Event::KeyDown(Key::Right)],
        vec![],
        vec![],
        vec![Event::KeyUp(Key::Right)],
        vec![Event::Quit],
    ]);

    session.run(&mut events, &mut clock).unwrap();

    assert_eq!(session.state(), SessionState::Closed);
    assert_eq!(session.frames(), 4);
    assert_eq!(clock.ticks(), 4);
    // Three frames of motion at 4 px/frame
    assert_eq!(session.brush().position(), Point::new(252, 190));
    assert_eq!(session.surface().presented_frames(), 4);
}

#[test]
fn test_trail_persists() {
    let mut session = default_session();
    let mut clock = NullClock::default();
    let mut events = ScriptedEvents::new([vec![Event::KeyDown(Key::Down)]]);
    for _ in 0..10 {
        events.push_batch(vec![]);
    }
    events.push_batch(vec![Event::Quit]);

    session.run(&mut events, &mut clock).unwrap();

    let canvas = session.into_surface();
    // Start position and every position along the path stay painted
    for y in (190..230).step_by(4) {
        assert_eq!(canvas.pixel(240, y), Some(Color::RED), "row {}", y);
    }
    assert_eq!(canvas.pixel(239, 200), Some(Color::BLACK));
    assert_eq!(canvas.pixel(250, 200), Some(Color::BLACK));
}

#[test]
fn test_color_change_paints_new_color() {
    let mut session = default_session();
    let mut clock = NullClock::default();
    let mut events = ScriptedEvents::new([
        vec![Event::KeyDown(Key::Char('b'))],
        vec![Event::KeyDown(Key::Char('r'))],
        vec![Event::KeyDown(Key::Char('y'))],
    ]);

    session.step(&mut events, &mut clock).unwrap();
    assert_eq!(session.surface().pixel(240, 190), Some(Color::BLUE));
    session.step(&mut events, &mut clock).unwrap();
    assert_eq!(session.brush().color(), Color::RED);
    session.step(&mut events, &mut clock).unwrap();
    assert_eq!(session.surface().pixel(245, 195), Some(Color::YELLOW));
}

#[test]
fn test_space_selects_black() {
    let mut session = default_session();
    let mut events = ScriptedEvents::new([vec![Event::KeyDown(Key::Space)]]);
    session.step(&mut events, &mut NullClock::default()).unwrap();
    assert_eq!(session.brush().color(), Color::BLACK);
}

#[test]
fn test_diagonal_motion() {
    let mut session = default_session();
    let mut clock = NullClock::default();
    let mut events = ScriptedEvents::new([
        vec![Event::KeyDown(Key::Up), Event::KeyDown(Key::Left)],
        vec![],
    ]);

    session.step(&mut events, &mut clock).unwrap();
    session.step(&mut events, &mut clock).unwrap();
    assert_eq!(session.brush().velocity(), Velocity::new(-4, -4));
    assert_eq!(session.brush().position(), Point::new(232, 182));
}

#[test]
fn test_brush_stops_at_wall() {
    let mut session = default_session();
    let mut clock = NullClock::default();
    let mut events = ScriptedEvents::new([vec![Event::KeyDown(Key::Left)]]);
    for _ in 0..100 {
        events.push_batch(vec![]);
    }
    events.push_batch(vec![Event::Quit]);

    session.run(&mut events, &mut clock).unwrap();

    // 240 is a multiple of 4: the brush reaches x = 0, steps once past the
    // wall to -4, then the clamp stops it
    let brush = session.brush();
    assert_eq!(brush.position(), Point::new(-4, 190));
    assert_eq!(brush.velocity(), Velocity::ZERO);
}

#[test]
fn test_brush_moves_back_in_after_wall() {
    let mut session = default_session();
    let mut clock = NullClock::default();
    session.brush_mut().set_position(Point::new(-4, 190));
    let mut events = ScriptedEvents::new([
        vec![Event::KeyDown(Key::Left)],
        vec![Event::KeyUp(Key::Left), Event::KeyDown(Key::Right)],
    ]);

    session.step(&mut events, &mut clock).unwrap();
    assert_eq!(session.brush().position(), Point::new(-4, 190));
    session.step(&mut events, &mut clock).unwrap();
    assert_eq!(session.brush().position(), Point::new(0, 190));
}

#[test]
fn test_quit_mid_batch_stops_loop() {
    let mut session = default_session();
    let mut clock = NullClock::default();
    let mut events = ScriptedEvents::new([
        vec![Event::Quit, Event::KeyDown(Key::Right)],
        vec![Event::KeyDown(Key::Down)],
    ]);

    session.run(&mut events, &mut clock).unwrap();

    assert_eq!(session.state(), SessionState::Closed);
    assert_eq!(session.frames(), 0);
    assert_eq!(events.remaining(), 1);
}

#[test]
fn test_escape_ignored_with_default_config() {
    let config = AppConfig::default();
    let mapper = KeyMapper::new().with_quit_key(config.input.quit_key);
    let escape = mapper
        .map_key(KeyCode::Escape, ElementState::Pressed, false)
        .unwrap();
    assert_eq!(escape, Event::KeyDown(Key::Escape));

    let mut session = default_session();
    let mut clock = NullClock::default();
    let mut events = ScriptedEvents::new([vec![escape], vec![Event::KeyUp(Key::Escape)]]);
    session.step(&mut events, &mut clock).unwrap();
    session.step(&mut events, &mut clock).unwrap();

    assert_eq!(session.state(), SessionState::Running);
    assert_eq!(session.brush().velocity(), Velocity::ZERO);
    assert_eq!(session.brush().color(), Color::RED);
    assert_eq!(session.brush().position(), Point::new(240, 190));
    assert_eq!(session.frames(), 2);
}
