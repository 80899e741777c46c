//! Hover highlight for the rotation arrows
//!
//! Leaving an arrow does not clear the highlight at once; the clear is
//! scheduled `debounce_ms` later and cancelled if the pointer comes back.
//! Time is passed in by the caller (milliseconds since any fixed origin).

use serde::{Deserialize, Serialize};

use crate::models::Arrow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverState {
    pub hovered: Option<Arrow>,
    clear_at: Option<f64>,
    debounce_ms: u32,
}

impl HoverState {
    pub fn new(debounce_ms: u32) -> Self {
        Self {
            hovered: None,
            clear_at: None,
            debounce_ms,
        }
    }

    pub fn enter(&mut self, arrow: Arrow) {
        self.clear_at = None;
        self.hovered = Some(arrow);
    }

    pub fn leave(&mut self, now_ms: f64) {
        if self.hovered.is_some() {
            self.clear_at = Some(now_ms + f64::from(self.debounce_ms));
        }
    }

    /// Apply a due clear; returns true if the highlight changed
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.clear_at {
            Some(at) if now_ms >= at => {
                self.clear_at = None;
                self.hovered = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.clear_at.is_some()
    }
}

impl Default for HoverState {
    fn default() -> Self {
        Self::new(crate::config::CubeSettings::default().hover_debounce_ms)
    }
}
