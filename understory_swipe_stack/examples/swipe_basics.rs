// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a swipe stack through a simulated gesture and print each frame.
//!
//! Run:
//! - `cargo run -p understory_swipe_stack --example swipe_basics`

use kurbo::{Point, Vec2};
use understory_swipe_stack::{Direction, Frame, SwipeConfig, SwipeStack};

const FRAME_MS: u64 = 16;

fn print_frame(now: u64, frame: &Frame<'_, &str>) {
    println!(
        "t={now:>4}ms offset={:>7.1} progress={:.2} direction={:?}",
        frame.offset.x, frame.progress, frame.direction
    );
    let anchor = Point::new(150.0, 200.0);
    for card in frame.exiting.iter().chain(frame.cards.iter()) {
        let t = card.transform;
        let centre = t.to_affine(anchor) * anchor;
        println!(
            "    {:<8} slot={} z={} scale={:.3} opacity={:.2} rot={:>6.2} centre=({:.1}, {:.1})",
            card.item,
            card.slot,
            t.z_index,
            t.scale,
            t.opacity,
            t.rotation_degrees,
            centre.x,
            centre.y,
        );
    }
}

fn main() {
    let config = SwipeConfig::default()
        .with_visible_count(3)
        .with_exit_distance(2.0 * 300.0);
    let mut stack = SwipeStack::with_config(["alice", "bob", "carol", "dave"], config);

    stack.on_threshold_passed(|| println!("  -> threshold passed"));
    stack.on_swipe_end(|item, direction| println!("  -> swiped {item} {direction:?}"));
    stack.on_no_more_cards_left(|| println!("  -> no more cards"));

    let mut now = 0;

    // Drag right in 20px steps, then release past the threshold.
    for step in 1..=10 {
        stack.drag_changed(Vec2::new(f64::from(step) * 20.0, 0.0));
        stack.advance(now);
        print_frame(now, &stack.frame());
        now += FRAME_MS;
    }
    let outcome = stack.drag_ended(Vec2::new(200.0, 0.0), now);
    println!("release: {outcome:?}");

    // Let the exit animation play out.
    while stack.is_animating() {
        stack.advance(now);
        print_frame(now, &stack.frame());
        now += 5 * FRAME_MS;
    }

    // Dismiss the rest programmatically.
    while !stack.is_empty() {
        stack.set_pop_trigger(Some(Direction::Left));
        stack.advance(now);
        while stack.is_animating() {
            now += 5 * FRAME_MS;
            stack.advance(now);
        }
    }
}
