/// Viewports at most this wide (in pixels) are treated as mobile.
pub const MOBILE_MAX_WIDTH: u32 = 768;

/// Coarse device class. Only changes tuning, never behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceClass {
    pub fn from_viewport_width(width: u32) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn tuning(self) -> Tuning {
        match self {
            Self::Desktop => Tuning {
                overscan: 5,
                frame_interval_ms: 16,
            },
            Self::Mobile => Tuning {
                overscan: 3,
                frame_interval_ms: 32,
            },
        }
    }
}

/// Performance knobs derived from the device class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuning {
    pub overscan: usize,
    /// Minimum time between two scroll-driven reconciliations.
    pub frame_interval_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        DeviceClass::Desktop.tuning()
    }
}
