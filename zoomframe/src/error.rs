// Copyright 2026 the Zoomframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use zoomframe_gesture::GestureConfigError;
use zoomframe_transform::ConfigError;

/// Rejected configuration passed to [`ZoomFrame::try_new`](crate::ZoomFrame::try_new).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameConfigError {
    /// The zoom limits or animation settings are invalid.
    Zoom(ConfigError),
    /// The gesture thresholds are invalid.
    Gesture(GestureConfigError),
}

impl From<ConfigError> for FrameConfigError {
    fn from(err: ConfigError) -> Self {
        Self::Zoom(err)
    }
}

impl From<GestureConfigError> for FrameConfigError {
    fn from(err: GestureConfigError) -> Self {
        Self::Gesture(err)
    }
}

impl fmt::Display for FrameConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zoom(err) => write!(f, "invalid zoom config: {err}"),
            Self::Gesture(err) => write!(f, "invalid gesture config: {err}"),
        }
    }
}

impl core::error::Error for FrameConfigError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Zoom(err) => Some(err),
            Self::Gesture(err) => Some(err),
        }
    }
}
