use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use fokus::countdown::{Countdown, TimerState};
use fokus::runtime::{FixedTicker, FokusEvent, Runner, TestEventSource};

// Headless integration using the internal runtime + Countdown without a TTY
// Verifies that a minimal session flow completes via Runner/TestEventSource.
#[test]
fn headless_session_completes() {
    let mut countdown = Countdown::new(1);

    let (tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(1));
    let runner = Runner::new(es, ticker);

    // Space starts the session
    tx.send(FokusEvent::Key(KeyEvent::new(
        KeyCode::Char(' '),
        KeyModifiers::NONE,
    )))
    .unwrap();

    let mut completions = 0;
    for _ in 0..200u32 {
        match runner.step() {
            // Each synthesized tick stands in for one full second
            FokusEvent::Tick => {
                if countdown.on_tick(1000).is_some() {
                    completions += 1;
                }
            }
            FokusEvent::Key(key) => {
                if key.code == KeyCode::Char(' ') {
                    countdown.toggle();
                }
            }
            _ => {}
        }
        if countdown.state() == TimerState::Completed {
            break;
        }
    }

    assert_eq!(countdown.state(), TimerState::Completed);
    assert_eq!(completions, 1, "completion must fire exactly once");
    assert_eq!(countdown.remaining_secs(), 0);
}

#[test]
fn headless_pause_freezes_time() {
    let mut countdown = Countdown::new(25);

    countdown.toggle(); // start
    countdown.on_tick(5000);
    let frozen = countdown.remaining_secs();

    countdown.toggle(); // pause
    countdown.on_tick(30_000);
    assert_eq!(countdown.remaining_secs(), frozen);
    assert_eq!(countdown.state(), TimerState::Paused);

    countdown.toggle(); // resume
    countdown.on_tick(1000);
    assert_eq!(countdown.remaining_secs(), frozen - 1);
}

#[test]
fn headless_reset_mid_session() {
    let mut countdown = Countdown::new(25);
    countdown.toggle();
    countdown.on_tick(90_000);
    assert!(countdown.remaining_secs() < 25 * 60);

    countdown.reset();
    assert_eq!(countdown.state(), TimerState::Idle);
    assert_eq!(countdown.remaining_secs(), 25 * 60);
}

#[test]
fn runner_passes_mouse_events_through() {
    let (tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(10));
    let runner = Runner::new(es, ticker);

    tx.send(FokusEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 1,
        row: 1,
        modifiers: KeyModifiers::NONE,
    }))
    .unwrap();

    match runner.step() {
        FokusEvent::Mouse(mouse) => {
            assert!(matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)));
        }
        other => panic!("expected mouse event, got {:?}", other),
    }
}
