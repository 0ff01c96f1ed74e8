//! Optional scroll-animation capability.
//!
//! The engine never depends on an animation library; a host that has one
//! injects it behind [`ScrollAnimator`] and it is initialized exactly once on
//! load. With no animator present every call is a silent no-op, mirroring the
//! feature detection the page performs in the browser.

use serde::{Deserialize, Serialize};

/// Capability seam for a scroll-animation engine supplied by the host.
pub trait ScrollAnimator {
    fn init(&mut self, options: &AnimationOptions);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationOptions {
    pub duration_ms: u32,
    pub easing: Easing,
    /// Animate each element only the first time it scrolls into view.
    pub once: bool,
    /// Re-animate when scrolling back past an element.
    pub mirror: bool,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration_ms: 600,
            easing: Easing::EaseInOut,
            once: true,
            mirror: false,
        }
    }
}

/// Holds the optional animator and guards its one-time initialization.
pub struct AnimationBootstrap {
    animator: Option<Box<dyn ScrollAnimator>>,
    options: AnimationOptions,
    initialized: bool,
}

impl AnimationBootstrap {
    pub fn new(animator: Option<Box<dyn ScrollAnimator>>) -> Self {
        Self::with_options(animator, AnimationOptions::default())
    }

    pub fn with_options(animator: Option<Box<dyn ScrollAnimator>>, options: AnimationOptions) -> Self {
        Self {
            animator,
            options,
            initialized: false,
        }
    }

    pub fn has_animator(&self) -> bool {
        self.animator.is_some()
    }

    /// Initializes the animator the first time the load event fires. Returns
    /// true only when an init actually ran.
    pub fn init_on_load(&mut self) -> bool {
        if self.initialized {
            return false;
        }
        let Some(animator) = &mut self.animator else {
            log::debug!("no scroll animator present, skipping init");
            return false;
        };

        animator.init(&self.options);
        self.initialized = true;
        true
    }
}
