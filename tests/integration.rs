// Integration tests (native) for the `heartfall` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use heartfall::page::carousel::{DeckEvent, DeckPhase, ReasonDeck};
use heartfall::page::countdown::{CountdownView, DAY_MS, HOUR_MS, countdown_view, render};
use heartfall::page::theme::Theme;
use heartfall::page::typing::Typer;

// --- Carousel ----------------------------------------------------------------

#[test]
fn start_shows_first_reason_with_counter_one() {
    let mut deck = ReasonDeck::new(heartfall::REASONS);
    assert_eq!(deck.phase(), DeckPhase::Idle);
    let event = deck.start();
    assert_eq!(
        event,
        DeckEvent::Show {
            text: heartfall::REASONS[0],
            shown: 1,
            total: heartfall::REASONS.len(),
            last: false,
        }
    );
    assert_eq!(deck.phase(), DeckPhase::Active);
}

#[test]
fn counter_tracks_every_advance() {
    let mut deck = ReasonDeck::new(heartfall::REASONS);
    deck.start();
    let total = heartfall::REASONS.len();
    // Clicks 2..=total reveal reasons 2..=total in order.
    for n in 2..=total {
        match deck.advance() {
            DeckEvent::Show {
                text,
                shown,
                total: t,
                last,
            } => {
                assert_eq!(text, heartfall::REASONS[n - 1]);
                assert_eq!(shown, n);
                assert_eq!(t, total);
                assert_eq!(last, n == total, "last flag wrong at reason {n}");
            }
            other => panic!("expected Show at reason {n}, got {other:?}"),
        }
    }
    assert_eq!(deck.phase(), DeckPhase::Active);
}

#[test]
fn advance_past_last_reason_reveals_finale_exactly_once() {
    let mut deck = ReasonDeck::new(heartfall::REASONS);
    deck.start();
    for _ in 1..heartfall::REASONS.len() {
        deck.advance();
    }
    // One more click than there are reasons: the finale, then nothing.
    assert_eq!(deck.advance(), DeckEvent::Finale);
    assert_eq!(deck.phase(), DeckPhase::Exhausted);
    assert_eq!(deck.advance(), DeckEvent::Ignored);
    assert_eq!(deck.advance(), DeckEvent::Ignored);
}

#[test]
fn advance_before_start_is_ignored() {
    let mut deck = ReasonDeck::new(heartfall::REASONS);
    assert_eq!(deck.advance(), DeckEvent::Ignored);
    assert_eq!(deck.phase(), DeckPhase::Idle);
}

#[test]
fn second_start_is_ignored() {
    let mut deck = ReasonDeck::new(heartfall::REASONS);
    deck.start();
    assert_eq!(deck.start(), DeckEvent::Ignored);
    // The pointer must not rewind: the next advance shows reason #2.
    match deck.advance() {
        DeckEvent::Show { shown, .. } => assert_eq!(shown, 2),
        other => panic!("expected Show, got {other:?}"),
    }
}

#[test]
fn single_reason_deck_marks_first_as_last() {
    static ONE: &[&str] = &["only one"];
    let mut deck = ReasonDeck::new(ONE);
    assert_eq!(
        deck.start(),
        DeckEvent::Show {
            text: "only one",
            shown: 1,
            total: 1,
            last: true,
        }
    );
    assert_eq!(deck.advance(), DeckEvent::Finale);
}

// --- Countdown ---------------------------------------------------------------

#[test]
fn countdown_splits_days_and_hours_with_floor_semantics() {
    let target = 100.0 * DAY_MS;
    let now = target - (3.0 * DAY_MS + 5.0 * HOUR_MS + 59.0 * 60_000.0);
    assert_eq!(
        countdown_view(target, now),
        CountdownView::Remaining { days: 3, hours: 5 }
    );
    // Exactly two days: no hour remainder.
    assert_eq!(
        countdown_view(target, target - 2.0 * DAY_MS),
        CountdownView::Remaining { days: 2, hours: 0 }
    );
    // One millisecond short of two days floors down to 1 day 23 hours.
    assert_eq!(
        countdown_view(target, target - 2.0 * DAY_MS + 1.0),
        CountdownView::Remaining { days: 1, hours: 23 }
    );
}

#[test]
fn countdown_arrives_at_and_past_the_target() {
    let target = 42.0 * DAY_MS;
    assert_eq!(countdown_view(target, target), CountdownView::Arrived);
    assert_eq!(
        countdown_view(target, target + HOUR_MS),
        CountdownView::Arrived
    );
    // Idempotent for repeated calls post-target.
    assert_eq!(
        countdown_view(target, target + DAY_MS),
        CountdownView::Arrived
    );
}

#[test]
fn countdown_renders_days_hours_or_the_done_message() {
    assert_eq!(
        render(CountdownView::Remaining { days: 3, hours: 5 }),
        "3 days 5 hours"
    );
    assert_eq!(render(CountdownView::Arrived), heartfall::COUNTDOWN_DONE_TEXT);
}

#[test]
fn countdown_is_monotonically_non_increasing() {
    let target = 30.0 * DAY_MS;
    let mut last_total_hours = u64::MAX;
    let mut now = 0.0;
    while now < target + DAY_MS {
        let total = match countdown_view(target, now) {
            CountdownView::Remaining { days, hours } => {
                assert!(hours < 24, "hour component must stay below a day");
                days * 24 + hours
            }
            CountdownView::Arrived => 0,
        };
        assert!(total <= last_total_hours);
        last_total_hours = total;
        now += 17.0 * 60_000.0; // odd stride so ticks straddle hour edges
    }
}

// --- Theme -------------------------------------------------------------------

#[test]
fn theme_defaults_to_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    // Unrecognized stored values are treated as light.
    assert_eq!(Theme::from_stored(Some("purple")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
}

#[test]
fn theme_double_toggle_is_identity() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.flipped().flipped(), theme);
        assert_ne!(theme.flipped(), theme);
    }
}

#[test]
fn theme_round_trips_through_the_stored_literal() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
    }
}

// --- Typing ------------------------------------------------------------------

#[test]
fn typer_reveals_growing_prefixes_then_stops() {
    let mut typer = Typer::new("abc");
    assert_eq!(typer.step(), Some("a"));
    assert_eq!(typer.step(), Some("ab"));
    assert!(!typer.is_done());
    assert_eq!(typer.step(), Some("abc"));
    assert!(typer.is_done());
    assert_eq!(typer.step(), None);
    assert_eq!(typer.step(), None);
}

#[test]
fn typer_handles_multibyte_characters() {
    let mut typer = Typer::new("a♥б");
    assert_eq!(typer.step(), Some("a"));
    assert_eq!(typer.step(), Some("a♥"));
    assert_eq!(typer.step(), Some("a♥б"));
    assert_eq!(typer.step(), None);
}

#[test]
fn typer_finishes_the_intro_text_in_char_count_steps() {
    let mut typer = Typer::new(heartfall::INTRO_TEXT);
    let mut steps = 0;
    while typer.step().is_some() {
        steps += 1;
    }
    assert_eq!(steps, heartfall::INTRO_TEXT.chars().count());
}
