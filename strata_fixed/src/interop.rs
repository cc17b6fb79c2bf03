// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lossy conversions into Kurbo types for drawing.
//!
//! Only the outbound direction exists. Nothing that came back from floating point
//! may be used in simulation.

use crate::Vec2;

impl From<Vec2> for kurbo::Vec2 {
    fn from(v: Vec2) -> Self {
        Self::new(v.x.to_f64(), v.y.to_f64())
    }
}

impl From<Vec2> for kurbo::Point {
    fn from(v: Vec2) -> Self {
        Self::new(v.x.to_f64(), v.y.to_f64())
    }
}
