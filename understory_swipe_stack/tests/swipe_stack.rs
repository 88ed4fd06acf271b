// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end behavior of `SwipeStack`: gestures, pops, animations, and the
//! exactly-once guarantees of its notifications.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Vec2};
use understory_swipe_stack::{
    CardTransform, Direction, DragOutcome, PopError, SwipeConfig, SwipeStack,
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Event {
    SwipeEnd(char, Direction),
    NoMoreCards,
    Threshold,
}

fn recorded_stack(items: &[char]) -> (SwipeStack<char>, Rc<RefCell<Vec<Event>>>) {
    recorded_stack_with(items, SwipeConfig::default())
}

fn recorded_stack_with(
    items: &[char],
    config: SwipeConfig,
) -> (SwipeStack<char>, Rc<RefCell<Vec<Event>>>) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut stack = SwipeStack::with_config(items.iter().copied(), config);

    let log = Rc::clone(&events);
    stack.on_swipe_end(move |item, direction| {
        log.borrow_mut().push(Event::SwipeEnd(*item, direction));
    });
    let log = Rc::clone(&events);
    stack.on_no_more_cards_left(move || log.borrow_mut().push(Event::NoMoreCards));
    let log = Rc::clone(&events);
    stack.on_threshold_passed(move || log.borrow_mut().push(Event::Threshold));

    (stack, events)
}

fn swipe(stack: &mut SwipeStack<char>, x: f64, now: u64) -> DragOutcome {
    for step in 1..=10 {
        stack.drag_changed(Vec2::new(x * f64::from(step) / 10.0, 0.0));
    }
    stack.drag_ended(Vec2::new(x, 0.0), now)
}

#[test]
fn swipe_past_threshold_commits_front_card() {
    let (mut stack, events) = recorded_stack(&['A', 'B', 'C', 'D', 'E']);

    let outcome = swipe(&mut stack, 200.0, 0);

    assert_eq!(outcome, DragOutcome::Committed(Direction::Right));
    assert_eq!(stack.items(), ['B', 'C', 'D', 'E']);
    assert_eq!(stack.front(), Some(&'B'));
    assert_eq!(stack.live_offset(), Vec2::ZERO);
    assert_eq!(
        *events.borrow(),
        [Event::Threshold, Event::SwipeEnd('A', Direction::Right)]
    );
}

#[test]
fn short_swipe_returns_to_rest_without_callbacks() {
    let (mut stack, events) = recorded_stack(&['A', 'B']);

    let outcome = swipe(&mut stack, 50.0, 0);

    assert_eq!(outcome, DragOutcome::Cancelled);
    assert_eq!(stack.items(), ['A', 'B']);
    assert!(stack.live_offset().x > 0.0);

    stack.advance(1_000);
    assert_eq!(stack.live_offset(), Vec2::ZERO);
    assert!(!stack.is_animating());
    assert!(events.borrow().is_empty());
}

#[test]
fn last_card_reports_empty_after_exit_completes() {
    let (mut stack, events) = recorded_stack(&['A']);

    swipe(&mut stack, -300.0, 0);
    assert!(stack.is_empty());
    assert_eq!(
        *events.borrow(),
        [Event::Threshold, Event::SwipeEnd('A', Direction::Left)]
    );

    stack.advance(499);
    assert!(!events.borrow().contains(&Event::NoMoreCards));
    assert_eq!(stack.popped().map(|p| p.item), Some('A'));

    stack.advance(500);
    assert!(stack.popped().is_none());
    stack.advance(10_000);
    let no_more = events
        .borrow()
        .iter()
        .filter(|e| **e == Event::NoMoreCards)
        .count();
    assert_eq!(no_more, 1);
}

#[test]
fn programmatic_pop_skips_swipe_end() {
    let (mut stack, events) = recorded_stack(&['A', 'B']);

    stack.pop(Direction::Left, 0).unwrap();

    assert_eq!(stack.items(), ['B']);
    let popped = stack.popped().unwrap();
    assert_eq!(popped.direction, Direction::Left);
    assert!(popped.tween.to.x < 0.0);

    stack.advance(250);
    let exiting = stack.frame().exiting.unwrap();
    assert!(exiting.transform.translation.x < 0.0);
    assert!(events.borrow().is_empty());
}

#[test]
fn programmatic_pop_of_last_card_still_reports_empty() {
    let (mut stack, events) = recorded_stack(&['A']);
    stack.pop(Direction::Right, 0).unwrap();
    stack.advance(500);
    assert_eq!(*events.borrow(), [Event::NoMoreCards]);
}

#[test]
fn item_appended_during_exit_suppresses_empty_notification() {
    let (mut stack, events) = recorded_stack(&['A']);

    swipe(&mut stack, 200.0, 0);
    stack.advance(200);
    stack.push('Z');
    stack.advance(600);

    assert_eq!(stack.items(), ['Z']);
    assert!(!events.borrow().contains(&Event::NoMoreCards));
}

#[test]
fn only_one_card_exits_at_a_time() {
    let (mut stack, events) = recorded_stack(&['A', 'B', 'C']);

    stack.pop(Direction::Right, 0).unwrap();
    assert_eq!(stack.pop(Direction::Right, 10), Err(PopError::InFlight));
    assert_eq!(swipe(&mut stack, 400.0, 20), DragOutcome::Cancelled);
    assert_eq!(stack.items(), ['B', 'C']);

    stack.advance(500);
    assert_eq!(swipe(&mut stack, 400.0, 600), DragOutcome::Committed(Direction::Right));
    assert_eq!(stack.items(), ['C']);
    assert_eq!(
        events
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::SwipeEnd(..)))
            .cloned()
            .collect::<Vec<_>>(),
        [Event::SwipeEnd('B', Direction::Right)]
    );
}

#[test]
fn threshold_notification_rearms_within_a_drag() {
    let (mut stack, events) = recorded_stack(&['A', 'B']);

    for x in [100.0, 180.0, 220.0, 260.0, 120.0, 175.0, 300.0, 310.0] {
        stack.drag_changed(Vec2::new(x, 0.0));
    }
    let thresholds = events
        .borrow()
        .iter()
        .filter(|e| **e == Event::Threshold)
        .count();
    assert_eq!(thresholds, 2);
}

#[test]
fn pop_trigger_is_consumed_once() {
    let (mut stack, events) = recorded_stack(&['A', 'B', 'C']);

    stack.set_pop_trigger(Some(Direction::Right));
    stack.advance(0);
    stack.advance(1);
    stack.advance(600);

    assert_eq!(stack.items(), ['B', 'C']);
    assert_eq!(stack.pop_trigger(), None);
    assert!(events.borrow().is_empty());
}

#[test]
fn pop_trigger_on_empty_list_is_cleared() {
    let (mut stack, events) = recorded_stack(&[]);
    stack.set_pop_trigger(Some(Direction::Left));
    stack.advance(0);
    assert_eq!(stack.pop_trigger(), None);
    assert!(events.borrow().is_empty());
}

#[test]
fn teardown_suppresses_pending_notifications() {
    let (mut stack, events) = recorded_stack(&['A']);

    swipe(&mut stack, 200.0, 0);
    stack.teardown();
    stack.advance(10_000);

    assert_eq!(
        *events.borrow(),
        [Event::Threshold, Event::SwipeEnd('A', Direction::Right)]
    );
    assert_eq!(stack.next_deadline(), None);
}

#[test]
fn pointer_positions_drive_the_same_gesture() {
    let (mut stack, events) = recorded_stack(&['A', 'B']);

    stack.pointer_down(Point::new(200.0, 400.0));
    stack.pointer_move(Point::new(300.0, 380.0));
    stack.pointer_move(Point::new(380.0, 370.0));
    let outcome = stack.pointer_up(Point::new(380.0, 370.0), 0);

    assert_eq!(outcome, DragOutcome::Committed(Direction::Right));
    assert_eq!(
        *events.borrow(),
        [Event::Threshold, Event::SwipeEnd('A', Direction::Right)]
    );
    assert_eq!(stack.pointer_up(Point::new(0.0, 0.0), 0), DragOutcome::Ignored);
}

#[test]
fn secondary_axis_follows_drag_when_enabled() {
    let config = SwipeConfig::default().with_secondary_axis(true);
    let (mut stack, _) = recorded_stack_with(&['A', 'B'], config);

    stack.drag_changed(Vec2::new(120.0, -30.0));
    let frame = stack.frame();
    assert_eq!(frame.cards[0].transform.translation, Vec2::new(100.0, -30.0));

    stack.drag_ended(Vec2::new(200.0, -30.0), 0);
    let popped = stack.popped().unwrap();
    assert_eq!(popped.tween.to, Vec2::new(1000.0, -30.0));
}

#[test]
fn stack_advances_visually_as_front_card_leaves() {
    let (mut stack, _) = recorded_stack(&['A', 'B', 'C', 'D', 'E']);

    let rest: Vec<CardTransform> = stack.frame().cards.iter().map(|c| c.transform).collect();
    stack.drag_changed(Vec2::new(170.0, 0.0));
    let dragged = stack.frame();

    assert_eq!(dragged.progress, 1.0);
    for slot in 1..4 {
        let before = rest[slot];
        let after = dragged.cards[slot].transform;
        assert!(after.scale > before.scale);
        assert!(after.translation.y < before.translation.y);
        assert_eq!(after.z_index, before.z_index);
    }
    assert_eq!(rest[3].opacity, 0.0);
    assert_eq!(dragged.cards[3].transform.opacity, 1.0);
}

#[test]
fn zero_threshold_commits_on_any_motion() {
    let config = SwipeConfig::default()
        .with_trigger_threshold(0.0)
        .with_minimum_distance(0.0);
    let (mut stack, events) = recorded_stack_with(&['A', 'B'], config);

    stack.drag_changed(Vec2::new(1.0, 0.0));
    assert_eq!(stack.frame().progress, 1.0);
    assert_eq!(
        stack.drag_ended(Vec2::new(1.0, 0.0), 0),
        DragOutcome::Committed(Direction::Right)
    );
    assert_eq!(
        *events.borrow(),
        [Event::Threshold, Event::SwipeEnd('A', Direction::Right)]
    );
}

#[test]
fn zero_threshold_tap_does_not_commit() {
    let config = SwipeConfig::default().with_trigger_threshold(0.0);
    let (mut stack, events) = recorded_stack_with(&['A', 'B', 'C'], config);

    swipe(&mut stack, 200.0, 0);
    stack.advance(1_000);
    events.borrow_mut().clear();

    let update = stack.drag_changed(Vec2::ZERO).unwrap();
    assert!(!update.threshold_reached);
    assert_eq!(stack.drag_ended(Vec2::ZERO, 1_000), DragOutcome::Cancelled);

    assert_eq!(stack.items(), ['B', 'C']);
    assert!(events.borrow().is_empty());
}

#[test]
fn release_after_exit_deadline_commits_without_advance() {
    let (mut stack, events) = recorded_stack(&['A', 'B', 'C']);

    stack.pop(Direction::Left, 0).unwrap();
    // No `advance` between the exit deadline and the release.
    assert_eq!(swipe(&mut stack, 300.0, 600), DragOutcome::Committed(Direction::Right));
    assert_eq!(stack.items(), ['C']);
    assert_eq!(stack.popped().map(|p| p.item), Some('B'));
    assert!(events.borrow().contains(&Event::SwipeEnd('B', Direction::Right)));
}

#[test]
fn pop_after_exit_deadline_succeeds_without_advance() {
    let (mut stack, events) = recorded_stack(&['A']);

    stack.pop(Direction::Right, 0).unwrap();
    stack.push('B');
    assert_eq!(stack.pop(Direction::Left, 500), Ok(()));
    assert_eq!(stack.popped().map(|p| p.item), Some('B'));
    assert!(stack.is_empty());

    stack.advance(1_000);
    assert_eq!(*events.borrow(), [Event::NoMoreCards]);
}
