// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a small Trellis scene for a handful of frames without a window.
//!
//! The scene is a rectangle, a circle, and a text label stacked vertically.
//! Each frame logs the damage it produced and what it painted; taps between
//! frames recolor the rectangle, resize the circle, and stamp the label.
//!
//! Run:
//! - `cargo run -p trellis_demos --example headless_frames`
//! - `RUST_LOG=trace cargo run -p trellis_demos --example headless_frames`

use kurbo::{Point, Size};
use trellis_demos::{Frame, FrameDriver};
use trellis_node::{Circle, PointerEvent, Rectangle, RngEntropy, SystemClock, Text};
use trellis_paint::{DrawOp, MonospaceMeasure};
use trellis_stack::{Services, StackLayout, StackParams};

fn log_frame(frame: &Frame) {
    match frame.damage.union_rect() {
        Some(dirty) => log::info!(
            "frame {}: {} commands, dirty {:?}",
            frame.index,
            frame.commands.len(),
            dirty
        ),
        None => log::info!("frame {}: {} commands, clean", frame.index, frame.commands.len()),
    }
    for command in &frame.commands {
        let at = command.offset();
        match &command.op {
            DrawOp::FillRect { rect, color } => {
                log::info!("  rect {}x{} at {at:?} in {color:?}", rect.width(), rect.height());
            }
            DrawOp::FillCircle { circle, .. } => {
                log::info!("  circle r={} at {at:?}", circle.radius);
            }
            DrawOp::Text { text, .. } => log::info!("  text {text:?} at {at:?}"),
        }
    }
}

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    // A fixed seed keeps the rectangle colors reproducible between runs.
    let services = Services::new(
        MonospaceMeasure::default(),
        RngEntropy::seeded(7),
        SystemClock,
    );
    let params = StackParams::default().with_spacing(10.0);
    let mut stack = StackLayout::new(params, services);
    let rect = stack.add(Rectangle::new(200.0, 100.0));
    let circle = stack.add(Circle::new(50.0));
    let label = stack.add(Text::new("Tap me", 16.0));

    let mut driver = FrameDriver::new(stack, Size::new(300.0, 600.0));
    log_frame(&driver.frame());

    // Taps are given in physical pixels; at a ratio of 2 they land on the
    // centers of the rectangle and the circle.
    driver.stack_mut().set_device_pixel_ratio(2.0);
    for target in [rect, circle] {
        let Some(bounds) = driver.stack().bounds(target) else {
            continue;
        };
        let physical = (bounds.center().to_vec2() * 2.0).to_point();
        driver.pointer(PointerEvent::down(physical));
        driver.pointer(PointerEvent::up(physical));
        log_frame(&driver.frame());
    }

    if let Some(bounds) = driver.stack().bounds(label) {
        driver.pointer(PointerEvent::down(Point::new(2.0, bounds.y0 * 2.0 + 2.0)));
    }
    log_frame(&driver.frame());

    // A miss to the right of everything: nothing is consumed and nothing changes.
    driver.pointer(PointerEvent::down(Point::new(590.0, 10.0)));
    log_frame(&driver.frame());

    // Narrow the viewport; every node is re-laid out against the new bounds.
    driver.resize(Size::new(120.0, 600.0));
    log_frame(&driver.frame());

    if driver.stack_mut().remove(rect).is_some() {
        log::info!("removed the rectangle");
    }
    log_frame(&driver.frame());

    log::info!(
        "{} frames, content size {:?}",
        driver.frame_count(),
        driver.stack().content_size()
    );
}
