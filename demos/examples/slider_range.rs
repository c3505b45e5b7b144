// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-handle range slider rendered as text.
//!
//! Implements `Track` and `Surface` for a character grid, one column per
//! pixel, to show how a toolkit plugs in. Handles cannot cross, and the range
//! bar follows every change.
//!
//! Run:
//! - `cargo run -p understory_demos --example slider_range`

use kurbo::{Point, Rect};
use understory_slider::{Key, RangeBar, RootFlags, Slider, Surface, Track, VisualFlags};

#[derive(Debug)]
struct TextTrack {
    columns: usize,
    range: Option<RangeBar>,
}

impl Track for TextTrack {
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.columns as f64, 1.0)
    }

    fn set_range(&mut self, range: RangeBar) {
        self.range = Some(range);
    }
}

#[derive(Debug, Default)]
struct TextKnob {
    column: f64,
    dragging: bool,
}

impl Surface for TextKnob {
    fn width(&self) -> f64 {
        1.0
    }

    fn move_to(&mut self, offset: f64) {
        self.column = offset;
    }

    fn add_flags(&mut self, flags: VisualFlags) {
        self.dragging |= flags.contains(VisualFlags::DRAGGING);
    }

    fn remove_flags(&mut self, flags: VisualFlags) {
        self.dragging &= !flags.contains(VisualFlags::DRAGGING);
    }
}

fn render(slider: &Slider<TextTrack, TextKnob>) -> String {
    let track = slider.track();
    let mut row = vec!['-'; track.columns];
    if let Some(bar) = track.range {
        let start = bar.offset.round() as usize;
        let end = (bar.offset + bar.length).round() as usize;
        for c in row.iter_mut().take(end).skip(start) {
            *c = '=';
        }
    }
    for id in slider.handle_ids() {
        let h = slider.handle_ref(id);
        let glyph = if h.surface().dragging { '#' } else { '|' };
        row[h.position().round() as usize] = glyph;
    }
    row.into_iter().collect()
}

fn main() {
    let root = RootFlags::new();
    let track = TextTrack {
        columns: 41,
        range: None,
    };
    // 40 columns of travel over 0..=200 in steps of 5: one column per step.
    let mut slider = Slider::with_root(track, root.clone());
    slider
        .max(200.0)
        .step(5.0)
        .handle(TextKnob::default(), 50.0)
        .handle(TextKnob::default(), 150.0);

    println!("[{}] {:?}", render(&slider), slider.value());

    let low = slider.handle_id(0).unwrap();
    let high = slider.handle_id(1).unwrap();

    // Drag the low handle far to the right; it stops at the high handle.
    slider.handle_mut(low).pointer_down(Point::new(10.0, 0.5));
    for x in [15.0, 25.0, 35.0] {
        slider.handle_mut(low).pointer_move(Point::new(x, 0.5));
        println!(
            "[{}] {:?} root dragging: {}",
            render(&slider),
            slider.value(),
            root.contains(VisualFlags::DRAGGING)
        );
    }
    slider.handle_mut(low).pointer_up();
    assert_eq!(slider.value().as_slice(), &[150.0, 150.0]);

    // Keyboard: the high handle cannot go below the low one either.
    slider.handle_mut(high).key_down(Key::Left);
    slider.handle_mut(low).key_down(Key::Home);
    slider.handle_mut(high).key_down(Key::Left);
    println!("[{}] {:?}", render(&slider), slider.value());
    assert_eq!(slider.value().as_slice(), &[0.0, 145.0]);

    // Resize the track and re-derive positions.
    slider.track_mut().columns = 81;
    slider.refresh();
    println!("[{}] {:?}", render(&slider), slider.value());
    assert_eq!(slider.value().as_slice(), &[0.0, 145.0]);
}
