use virtual_window::{Align, Error, ReconcileReport, ScrollView};

use crate::{
    DeviceClass, Easing, FrameCoalescer, ResizeTracker, Tuning, Tween, apply_anchor,
    capture_first_visible_anchor,
};

/// Configuration for [`Driver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DriverOptions {
    /// Pins the device class. `None` classifies from the container width on every resize.
    pub device: Option<DeviceClass>,
    /// Overrides the device's overscan. `None` follows [`Tuning::overscan`].
    pub overscan: Option<usize>,
    pub smooth_scroll_ms: u64,
    pub easing: Easing,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            device: None,
            overscan: None,
            smooth_scroll_ms: 300,
            easing: Easing::EaseInOutCubic,
        }
    }
}

impl DriverOptions {
    pub fn with_device(mut self, device: DeviceClass) -> Self {
        self.device = Some(device);
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = Some(overscan);
        self
    }

    pub fn with_smooth_scroll(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.smooth_scroll_ms = duration_ms;
        self.easing = easing;
        self
    }
}

/// Owns a list or table and turns raw host events into reconciliations.
///
/// The driver holds no UI objects. The host forwards:
/// - every scroll event to `on_scroll_event`, requesting an animation frame when it returns
///   `true`
/// - every resize notification to `on_resize`
/// - every animation frame to `on_animation_frame`, requesting another one while
///   `needs_frame()` is `true`
///
/// Once the view is destroyed, event callbacks do nothing and frame callbacks return
/// `Ok(None)`.
#[derive(Debug)]
pub struct Driver<V> {
    view: V,
    options: DriverOptions,
    device: DeviceClass,
    frames: FrameCoalescer,
    resize: ResizeTracker,
    tween: Option<Tween>,
}

impl<V: ScrollView> Driver<V> {
    /// Applies the device tuning to `view` and reconciles once.
    pub fn new(mut view: V, options: DriverOptions) -> Result<Self, Error> {
        let measured = view.measure();
        let device = options
            .device
            .unwrap_or_else(|| DeviceClass::from_viewport_width(measured.viewport_cross));
        let tuning = device.tuning();
        let overscan = options.overscan.unwrap_or(tuning.overscan);
        view.set_overscan(overscan);
        view.sync_viewport()?;
        vlog!(debug, ?device, overscan, "Driver::new");
        Ok(Self {
            view,
            options,
            device,
            frames: FrameCoalescer::new(tuning.frame_interval_ms),
            resize: ResizeTracker::with_dimensions(
                measured.viewport_extent,
                measured.viewport_cross,
            ),
            tween: None,
        })
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn options(&self) -> &DriverOptions {
        &self.options
    }

    pub fn device(&self) -> DeviceClass {
        self.device
    }

    pub fn tuning(&self) -> Tuning {
        self.device.tuning()
    }

    /// Pins the device class and applies its tuning on the next reconciliation.
    pub fn set_device(&mut self, device: DeviceClass) {
        self.options.device = Some(device);
        self.apply_device(device);
    }

    /// Records a scroll event. Returns `true` if the host must request an animation frame.
    pub fn on_scroll_event(&mut self) -> bool {
        if self.view.is_destroyed() {
            return false;
        }
        self.frames.on_event()
    }

    /// Re-reads container dimensions and reconciles if they changed.
    pub fn on_resize(&mut self) -> Result<Option<ReconcileReport>, Error> {
        if self.view.is_destroyed() {
            return Ok(None);
        }
        let measured = self.view.measure();
        if !self
            .resize
            .observe(measured.viewport_extent, measured.viewport_cross)
        {
            return Ok(None);
        }
        if self.options.device.is_none() {
            self.apply_device(DeviceClass::from_viewport_width(measured.viewport_cross));
        }
        vlog!(
            debug,
            extent = measured.viewport_extent,
            cross = measured.viewport_cross,
            "resize"
        );
        self.view.sync_viewport().map(Some)
    }

    /// Services one animation frame: advances a smooth scroll, or runs the coalesced scroll
    /// work if the frame interval allows it.
    pub fn on_animation_frame(&mut self, now_ms: u64) -> Result<Option<ReconcileReport>, Error> {
        if self.view.is_destroyed() {
            self.tween = None;
            return Ok(None);
        }
        if let Some(tween) = self.tween {
            let report = self.view.apply_scroll_offset(tween.sample(now_ms))?;
            if tween.is_done(now_ms) {
                self.tween = None;
            }
            self.frames.complete(now_ms);
            return Ok(Some(report));
        }
        if !self.frames.on_frame(now_ms) {
            return Ok(None);
        }
        self.view.sync_viewport().map(Some)
    }

    /// Whether the host should keep requesting animation frames.
    pub fn needs_frame(&self) -> bool {
        !self.view.is_destroyed() && (self.frames.is_pending() || self.tween.is_some())
    }

    /// Jumps to `index`. Returns the applied offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> Result<u64, Error> {
        self.tween = None;
        let offset = self.view.offset_for_index(index, align);
        self.view.apply_scroll_offset(offset)?;
        Ok(self.view.viewport().scroll_offset)
    }

    /// Starts (or retargets) a smooth scroll toward `index`. Returns the target offset.
    pub fn smooth_scroll_to_index(
        &mut self,
        index: usize,
        align: Align,
        now_ms: u64,
    ) -> Result<u64, Error> {
        let to = self.view.offset_for_index(index, align);
        self.smooth_scroll_to_offset(to, now_ms)
    }

    pub fn smooth_scroll_to_offset(&mut self, offset: u64, now_ms: u64) -> Result<u64, Error> {
        if self.view.is_destroyed() {
            return Err(Error::Destroyed);
        }
        let to = offset.min(self.view.max_scroll_offset());
        let duration = self.options.smooth_scroll_ms;
        match &mut self.tween {
            Some(tween) => tween.retarget(now_ms, to, duration),
            None => {
                let from = self.view.viewport().scroll_offset;
                self.tween = Some(Tween::new(from, to, now_ms, duration, self.options.easing));
            }
        }
        vlog!(trace, to, duration, "smooth scroll");
        Ok(to)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Stops a smooth scroll where it is.
    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Runs a data change while keeping the first visible item at the same visual position.
    ///
    /// Cancels any smooth scroll. If the anchored item is gone after `change`, the scroll
    /// offset is left as `change` produced it.
    pub fn preserve_anchor<R>(
        &mut self,
        change: impl FnOnce(&mut V) -> Result<R, Error>,
    ) -> Result<R, Error> {
        self.tween = None;
        let anchor = capture_first_visible_anchor(&self.view);
        let out = change(&mut self.view)?;
        if let Some(anchor) = anchor {
            apply_anchor(&mut self.view, &anchor)?;
        }
        Ok(out)
    }

    fn apply_device(&mut self, device: DeviceClass) {
        if device == self.device {
            return;
        }
        let tuning = device.tuning();
        let overscan = self.options.overscan.unwrap_or(tuning.overscan);
        self.device = device;
        self.view.set_overscan(overscan);
        self.frames.set_min_interval_ms(tuning.frame_interval_ms);
        vlog!(debug, ?device, overscan, "device class changed");
    }
}
