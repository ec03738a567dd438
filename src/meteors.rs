use std::ops::Range;

use rand::Rng;

use crate::theme::Theme;

/// Viewports narrower than this get fewer, shorter meteors.
pub const NARROW_BREAKPOINT: f64 = 640.0;

const LEFT_PERCENT: Range<f64> = 9.0..99.0;
const TOP_PX: Range<f64> = 50.0..300.0;
const DURATION_SECS: Range<f64> = 6.0..12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthClass {
    Narrow,
    Wide,
}

impl WidthClass {
    pub fn from_width(px: f64) -> Self {
        if px < NARROW_BREAKPOINT {
            WidthClass::Narrow
        } else {
            WidthClass::Wide
        }
    }

    pub fn meteor_count(self) -> usize {
        match self {
            WidthClass::Narrow => 2,
            WidthClass::Wide => 3,
        }
    }

    pub fn trail_px(self) -> u32 {
        match self {
            WidthClass::Narrow => 120,
            WidthClass::Wide => 160,
        }
    }

    pub fn glow_px(self) -> u32 {
        match self {
            WidthClass::Narrow => 3,
            WidthClass::Wide => 4,
        }
    }

    /// Box-shadow spread for the meteor head.
    pub fn head_glow(self) -> &'static str {
        match self {
            WidthClass::Narrow => "4px 1px",
            WidthClass::Wide => "6px 1px",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Meteor {
    pub id: usize,
    /// Percent of viewport width.
    pub left: f64,
    /// Pixels from the top of the viewport.
    pub top: f64,
    /// Seconds per animation loop.
    pub duration: f64,
}

impl Meteor {
    pub fn style(&self, class: WidthClass, theme: Theme) -> String {
        let color = theme.accent();
        format!(
            "top: {top}px; left: {left}%; width: {width}px; height: 2px; transform: rotate(-45deg); \
             background-image: linear-gradient(to right, {color}, transparent); \
             animation: meteor {duration}s linear infinite; \
             filter: drop-shadow(0 0 {glow}px {color});",
            top = self.top,
            left = self.left,
            width = class.trail_px(),
            duration = self.duration,
            glow = class.glow_px(),
        )
    }

    pub fn head_style(class: WidthClass, theme: Theme) -> String {
        let color = theme.accent();
        format!(
            "background: {color}; box-shadow: 0 0 {} {color};",
            class.head_glow()
        )
    }
}

/// Fresh meteors for a width class; nothing is carried over between calls.
pub fn generate<R: Rng>(rng: &mut R, class: WidthClass) -> Vec<Meteor> {
    (1..=class.meteor_count())
        .map(|id| Meteor {
            id,
            left: rng.gen_range(LEFT_PERCENT),
            top: rng.gen_range(TOP_PX),
            duration: rng.gen_range(DURATION_SECS),
        })
        .collect()
}
