//! Layout helpers for hosts
//!
//! The host's measurement pass feeds the measured header height in; these
//! helpers write the extent and compute where the header and its content go.

use serde::{Deserialize, Serialize};

use crate::error::{AppBarError, Result};
use crate::state::HeaderState;

/// How header content moves while the header collapses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderAlignment {
    /// Content scrolls out with the header
    #[default]
    Scroll,
    /// Content moves at half speed, staying centered in the visible part
    Center,
    /// Content stays put and is clipped
    Absolute,
}

/// Result of laying out a header for the current offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderPlacement {
    /// Height the header occupies in the parent
    pub height: f32,
    /// Vertical position of the content inside the (clipped) header
    pub content_y: f32,
}

/// Header sized by its content.
///
/// The extent is the measured height minus `min_extent`, the part that
/// always stays visible.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeaderLayout {
    min_extent: f32,
    alignment: HeaderAlignment,
}

impl HeaderLayout {
    pub fn new(min_extent: f32) -> Self {
        Self {
            min_extent,
            alignment: HeaderAlignment::default(),
        }
    }

    pub fn alignment(mut self, alignment: HeaderAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn min_extent(&self) -> f32 {
        self.min_extent
    }

    /// Write the extent from a measured height and place the header.
    pub fn measure(&self, state: &mut HeaderState, measured_height: f32) -> Result<HeaderPlacement> {
        let extent = measured_height - self.min_extent;
        if extent.is_nan() || extent < 0.0 {
            return Err(AppBarError::MeasurementBelowMinimum {
                measured: measured_height,
                min_extent: self.min_extent,
            });
        }
        state.set_extent(extent.round() as u32);

        let offset = state.offset();
        let content_y = match self.alignment {
            HeaderAlignment::Scroll => -offset,
            HeaderAlignment::Center => -offset / 2.0,
            HeaderAlignment::Absolute => 0.0,
        };
        Ok(HeaderPlacement {
            height: measured_height - offset,
            content_y,
        })
    }
}

/// Header with a fixed expanded and collapsed height.
///
/// The content is laid out into the visible height instead of being
/// translated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizedExtent {
    min: f32,
    max: f32,
}

impl SizedExtent {
    pub fn new(min: f32, max: f32) -> Result<Self> {
        if min.is_nan() || max.is_nan() || max <= min {
            return Err(AppBarError::InvalidExtentRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Collapsible distance, `max - min` in whole layout units
    pub fn extent(&self) -> u32 {
        (self.max.round() - self.min.round()).max(0.0) as u32
    }

    /// Write the extent and place the header
    pub fn apply(&self, state: &mut HeaderState) -> HeaderPlacement {
        state.set_extent(self.extent());
        HeaderPlacement {
            height: self.max - state.offset(),
            content_y: 0.0,
        }
    }
}
