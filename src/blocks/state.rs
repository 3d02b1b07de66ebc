//! Client-side interaction state for menus, tabs and sliders.
//!
//! Each machine belongs to exactly one rendered block. The renderer emits the
//! initial state and the page script replays the same transitions.

use serde::Serialize;

/// Delay between automatic slider advances
pub const AUTOPLAY_DELAY_MS: u64 = 5000;

/// Sticky sub-menu position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StickyState {
    Unstuck,
    Stuck,
}

impl StickyState {
    pub fn as_str(&self) -> &'static str {
        match self {
            StickyState::Unstuck => "unstuck",
            StickyState::Stuck => "stuck",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickyMenu {
    threshold: f64,
    state: StickyState,
}

impl StickyMenu {
    /// Capture the menu's document offset once, at mount
    pub fn mount(threshold: f64) -> Self {
        Self {
            threshold,
            state: StickyState::Unstuck,
        }
    }

    pub fn state(&self) -> StickyState {
        self.state
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> StickyState {
        self.state = if scroll_y > self.threshold {
            StickyState::Stuck
        } else {
            StickyState::Unstuck
        };
        self.state
    }
}

/// Selected tab of a tab strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelection {
    selected: usize,
    count: usize,
}

impl TabSelection {
    pub fn new(count: usize) -> Self {
        Self { selected: 0, count }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.count > 0 && index == self.selected
    }

    /// Out-of-range indices are ignored
    pub fn select(&mut self, index: usize) -> usize {
        if index < self.count {
            self.selected = index;
        }
        self.selected
    }
}

/// Current slide of a carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderPosition {
    index: usize,
    count: usize,
    looping: bool,
}

impl SliderPosition {
    pub fn new(count: usize, looping: bool) -> Self {
        Self {
            index: 0,
            count,
            looping,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) -> usize {
        if self.count == 0 {
            return 0;
        }
        if self.index + 1 < self.count {
            self.index += 1;
        } else if self.looping {
            self.index = 0;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.count == 0 {
            return 0;
        }
        if self.index > 0 {
            self.index -= 1;
        } else if self.looping {
            self.index = self.count - 1;
        }
        self.index
    }

    /// Jump to a slide, as the pagination dots do
    pub fn go_to(&mut self, index: usize) -> usize {
        if index < self.count {
            self.index = index;
        }
        self.index
    }
}
