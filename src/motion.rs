//! Pure style math for the page animations. Nothing here holds state.

use std::time::Duration;

use crate::viewport::PointerPosition;

pub const EASE: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
pub const PARALLAX_FACTOR: f64 = 0.5;
pub const NAV_ELEVATION_THRESHOLD: i32 = 50;
/// Half the width of the pointer glow (w-96).
pub const GLOW_RADIUS: i32 = 192;

pub const NAV_STAGGER: Duration = Duration::from_millis(100);
pub const WORK_STAGGER: Duration = Duration::from_millis(200);
pub const SKILL_STAGGER: Duration = Duration::from_millis(100);
pub const SKILL_ITEM_STAGGER: Duration = Duration::from_millis(50);
pub const SOCIAL_STAGGER: Duration = Duration::from_millis(100);

pub fn parallax_offset(scroll_position: i32) -> f64 {
    f64::from(scroll_position) * PARALLAX_FACTOR
}

pub fn nav_bar_is_elevated(scroll_position: i32) -> bool {
    scroll_position > NAV_ELEVATION_THRESHOLD
}

pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step * index as u32
}

/// Top-left corner that centres the glow on the pointer.
pub fn glow_origin(pointer: PointerPosition) -> (i32, i32) {
    (pointer.x - GLOW_RADIUS, pointer.y - GLOW_RADIUS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Hidden/offset to settled/visible transition for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub axis: Axis,
    pub offset_px: i32,
    pub duration: Duration,
    pub delay: Duration,
}

impl Entrance {
    pub const fn rise(offset_px: i32, duration_ms: u64, delay_ms: u64) -> Self {
        Self {
            axis: Axis::Y,
            offset_px,
            duration: Duration::from_millis(duration_ms),
            delay: Duration::from_millis(delay_ms),
        }
    }

    pub const fn slide(offset_px: i32, duration_ms: u64, delay_ms: u64) -> Self {
        Self {
            axis: Axis::X,
            offset_px,
            duration: Duration::from_millis(duration_ms),
            delay: Duration::from_millis(delay_ms),
        }
    }

    pub fn staggered(self, index: usize, step: Duration) -> Self {
        Self {
            delay: self.delay + stagger_delay(index, step),
            ..self
        }
    }

    fn translate(&self, settled: bool) -> String {
        let offset = if settled { 0 } else { self.offset_px };
        match self.axis {
            Axis::X => format!("translateX({offset}px)"),
            Axis::Y => format!("translateY({offset}px)"),
        }
    }

    fn transition(&self) -> String {
        format!(
            "all {}ms {EASE} {}ms",
            self.duration.as_millis(),
            self.delay.as_millis()
        )
    }

    pub fn style(&self, settled: bool) -> String {
        format!(
            "transform: {}; opacity: {}; transition: {};",
            self.translate(settled),
            if settled { 1 } else { 0 },
            self.transition()
        )
    }

    /// Same as [`Entrance::style`] with a parallax lift stacked on top.
    pub fn style_with_parallax(&self, settled: bool, parallax: f64) -> String {
        format!(
            "transform: {} translateY({}px); opacity: {}; transition: {};",
            self.translate(settled),
            -parallax,
            if settled { 1 } else { 0 },
            self.transition()
        )
    }
}
