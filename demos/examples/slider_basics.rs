// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider basics.
//!
//! Build a single-handle slider, drag it, step it with the keyboard, and
//! print the notifications.
//!
//! Run:
//! - `cargo run -p understory_demos --example slider_basics`

use kurbo::{Point, Rect};
use understory_slider::{HeadlessSurface, HeadlessTrack, Key, Slider, SliderValue};

fn main() {
    // 0..=100 in steps of 10 on a 220px track with a 20px handle.
    let mut slider = Slider::new(HeadlessTrack::new(Rect::new(10.0, 0.0, 230.0, 24.0)));
    slider.step(10.0).handle(HeadlessSurface::new(20.0), 30.0);
    slider.on_any(|event| println!("  event: {event:?}"));

    let id = slider.handle_id(0).unwrap();
    println!("== Initial ==\n  value: {:?}", slider.value());

    println!("== Drag to x=110 ==");
    let mut handle = slider.handle_mut(id);
    handle.pointer_down(Point::new(70.0, 12.0));
    handle.pointer_move(Point::new(110.0, 12.0));
    handle.pointer_up();
    println!(
        "  value: {:?}, handle at {}px",
        slider.value(),
        slider.handle_ref(id).position()
    );
    assert_eq!(slider.value(), SliderValue::Single(50.0));

    println!("== Keys: right, right, end, left ==");
    for key in ["right", "right", "end", "left"] {
        slider.handle_mut(id).key_down(Key::from_name(key));
    }
    println!("  value: {:?}", slider.value());
    assert_eq!(slider.value(), SliderValue::Single(90.0));

    // Unrecognized keys change nothing and emit nothing.
    assert!(!slider.handle_mut(id).key_down(Key::from_name("escape")));
}
