//! Display helpers for callers that show the converted image on screen.
//!
//! The rendered result is shown at half its pixel size, and shrunk further when
//! the viewport is narrower than that. Resize events arrive in bursts, so
//! [`ResizeThrottle`] coalesces them into at most one pending notification.

use std::sync::atomic::{AtomicBool, Ordering};

/// Horizontal space kept free around the displayed image.
pub const VIEWPORT_MARGIN: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLayout {
    width: u32,
    height: u32,
}

impl DisplayLayout {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size the image is displayed at before any viewport scaling.
    pub fn display_size(&self) -> (f32, f32) {
        (self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Scale factor to apply to the displayed image, if any.
    ///
    /// Only images wider than the usable viewport are scaled.
    pub fn scale_for_viewport(&self, viewport_width: u32) -> Option<f32> {
        let max_width = viewport_width.saturating_sub(VIEWPORT_MARGIN);

        if self.width > max_width {
            Some(max_width as f32 / (self.width as f32 / 2.0))
        } else {
            None
        }
    }
}

/// Coalesces bursts of notifications into a single pending one.
#[derive(Debug, Default)]
pub struct ResizeThrottle {
    pending: AtomicBool,
}

impl ResizeThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a resize. Returns `true` if this call scheduled a notification,
    /// `false` if one was already pending.
    pub fn notify(&self) -> bool {
        !self.pending.swap(true, Ordering::AcqRel)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Runs `f` once for the pending notification, if there is one.
    pub fn on_frame<F: FnOnce()>(&self, f: F) -> bool {
        if self.pending.swap(false, Ordering::AcqRel) {
            f();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_display_size() {
        assert_eq!(DisplayLayout::new(800, 601).display_size(), (400.0, 300.5));
    }

    #[test]
    fn test_scale_for_viewport() {
        let layout = DisplayLayout::new(2000, 1000);
        assert_eq!(layout.scale_for_viewport(2016), None);
        assert_eq!(layout.scale_for_viewport(1016), Some(1.0));
        assert_eq!(layout.scale_for_viewport(516), Some(0.5));

        // viewport narrower than the margin
        assert_eq!(layout.scale_for_viewport(10), Some(0.0));
    }

    #[test]
    fn test_throttle_coalesces() {
        let throttle = ResizeThrottle::new();
        assert!(!throttle.is_pending());

        assert!(throttle.notify());
        assert!(!throttle.notify());
        assert!(!throttle.notify());
        assert!(throttle.is_pending());

        let mut calls = 0;
        assert!(throttle.on_frame(|| calls += 1));
        assert!(!throttle.on_frame(|| calls += 1));
        assert_eq!(calls, 1);

        assert!(throttle.notify());
    }

    #[test]
    fn test_throttle_across_threads() {
        let throttle = Arc::new(ResizeThrottle::new());

        let scheduled: usize = (0..8)
            .map(|_| {
                let throttle = Arc::clone(&throttle);
                std::thread::spawn(move || (0..100).filter(|_| throttle.notify()).count())
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .sum();

        assert_eq!(scheduled, 1);
    }
}
