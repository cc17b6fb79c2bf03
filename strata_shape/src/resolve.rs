// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Evaluating a tree into render primitives.

use alloc::vec::Vec;

use strata_fixed::{Fixed, Vec2};

use crate::bank::Slot;
use crate::node::{
    BallDimensions, BallShape, BoxShape, FillStyle, LineShape, LineStyle, NgonDimensions,
    NgonShape, Node,
};
use crate::params::ParameterSet;
use crate::transform::Transform;
use crate::types::{Colour, NgonStyle, NodeId, RenderFlags, Tag};

/// [`LineStyle`] with every value evaluated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedLineStyle {
    /// Primary colour.
    pub colour0: Colour,
    /// Secondary colour.
    pub colour1: Colour,
    /// Depth.
    pub z: f32,
    /// Stroke width.
    pub width: f32,
}

/// [`FillStyle`] with every value evaluated.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ResolvedFillStyle {
    /// Primary colour.
    pub colour0: Colour,
    /// Secondary colour.
    pub colour1: Colour,
    /// Depth.
    pub z: f32,
}

/// [`BallDimensions`] with every value evaluated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedBallDimensions {
    /// Outer radius.
    pub radius: Fixed,
    /// Inner radius.
    pub inner_radius: Fixed,
}

/// [`NgonDimensions`] with every value evaluated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedNgonDimensions {
    /// Circumradius.
    pub radius: Fixed,
    /// Inner circumradius.
    pub inner_radius: Fixed,
    /// Sides of the full polygon.
    pub sides: u32,
    /// Wedges present.
    pub segments: u32,
}

/// An evaluated [`BallShape`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedBall {
    /// Size.
    pub dimensions: ResolvedBallDimensions,
    /// Outline.
    pub line: ResolvedLineStyle,
    /// Fill.
    pub fill: ResolvedFillStyle,
    /// Renderer tag.
    pub tag: Tag,
    /// Renderer hints.
    pub flags: RenderFlags,
}

/// An evaluated [`BoxShape`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedBox {
    /// Half extents.
    pub dimensions: Vec2,
    /// Outline.
    pub line: ResolvedLineStyle,
    /// Fill.
    pub fill: ResolvedFillStyle,
    /// Renderer tag.
    pub tag: Tag,
    /// Renderer hints.
    pub flags: RenderFlags,
}

/// An evaluated [`LineShape`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedLine {
    /// Start point.
    pub a: Vec2,
    /// End point.
    pub b: Vec2,
    /// Stroke.
    pub style: ResolvedLineStyle,
    /// Renderer tag.
    pub tag: Tag,
    /// Renderer hints.
    pub flags: RenderFlags,
}

/// An evaluated [`NgonShape`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedNgon {
    /// Size.
    pub dimensions: ResolvedNgonDimensions,
    /// Outline form.
    pub style: NgonStyle,
    /// Outline.
    pub line: ResolvedLineStyle,
    /// Fill.
    pub fill: ResolvedFillStyle,
    /// Renderer tag.
    pub tag: Tag,
    /// Renderer hints.
    pub flags: RenderFlags,
}

/// A renderable leaf after evaluation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResolvedShape {
    /// Circle or annulus.
    Ball(ResolvedBall),
    /// Box.
    Box(ResolvedBox),
    /// Segment.
    Line(ResolvedLine),
    /// Regular polygon.
    Ngon(ResolvedNgon),
}

/// One renderable shape and where it goes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolveEntry {
    /// Placement in the root frame.
    pub transform: Transform,
    /// What to draw.
    pub shape: ResolvedShape,
}

/// Output of [`ShapeBank::resolve`](crate::ShapeBank::resolve), in depth-first order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolveResult {
    /// Shapes to draw.
    pub entries: Vec<ResolveEntry>,
}

impl ResolveResult {
    /// Append a shape.
    pub fn add(&mut self, transform: Transform, shape: ResolvedShape) {
        self.entries.push(ResolveEntry { transform, shape });
    }

    /// Drop all entries, keeping the allocation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl LineStyle {
    /// Evaluate against `params`.
    pub fn resolve(&self, params: &ParameterSet) -> ResolvedLineStyle {
        ResolvedLineStyle {
            colour0: self.colour0.resolve(params),
            colour1: self.colour1.resolve(params),
            z: self.z.resolve(params),
            width: self.width.resolve(params),
        }
    }
}

impl FillStyle {
    /// Evaluate against `params`.
    pub fn resolve(&self, params: &ParameterSet) -> ResolvedFillStyle {
        ResolvedFillStyle {
            colour0: self.colour0.resolve(params),
            colour1: self.colour1.resolve(params),
            z: self.z.resolve(params),
        }
    }
}

impl BallDimensions {
    /// Evaluate against `params`.
    pub fn resolve(&self, params: &ParameterSet) -> ResolvedBallDimensions {
        ResolvedBallDimensions {
            radius: self.radius.resolve(params),
            inner_radius: self.inner_radius.resolve(params),
        }
    }
}

impl NgonDimensions {
    /// Evaluate against `params`.
    pub fn resolve(&self, params: &ParameterSet) -> ResolvedNgonDimensions {
        ResolvedNgonDimensions {
            radius: self.radius.resolve(params),
            inner_radius: self.inner_radius.resolve(params),
            sides: self.sides.resolve(params),
            segments: self.segments.resolve(params),
        }
    }
}

impl BallShape {
    /// Evaluate against `params`.
    pub fn resolve(&self, params: &ParameterSet) -> ResolvedBall {
        ResolvedBall {
            dimensions: self.dimensions.resolve(params),
            line: self.line.resolve(params),
            fill: self.fill.resolve(params),
            tag: self.tag.resolve(params),
            flags: self.flags.resolve(params),
        }
    }
}

impl BoxShape {
    /// Evaluate against `params`.
    pub fn resolve(&self, params: &ParameterSet) -> ResolvedBox {
        ResolvedBox {
            dimensions: self.dimensions.resolve(params),
            line: self.line.resolve(params),
            fill: self.fill.resolve(params),
            tag: self.tag.resolve(params),
            flags: self.flags.resolve(params),
        }
    }
}

impl LineShape {
    /// Evaluate against `params`.
    pub fn resolve(&self, params: &ParameterSet) -> ResolvedLine {
        ResolvedLine {
            a: self.a.resolve(params),
            b: self.b.resolve(params),
            style: self.style.resolve(params),
            tag: self.tag.resolve(params),
            flags: self.flags.resolve(params),
        }
    }
}

impl NgonShape {
    /// Evaluate against `params`.
    pub fn resolve(&self, params: &ParameterSet) -> ResolvedNgon {
        ResolvedNgon {
            dimensions: self.dimensions.resolve(params),
            style: self.style.resolve(params),
            line: self.line.resolve(params),
            fill: self.fill.resolve(params),
            tag: self.tag.resolve(params),
            flags: self.flags.resolve(params),
        }
    }
}

/// Depth-first walk over every child, forward transform.
pub(crate) fn resolve_node(
    slots: &[Slot],
    id: NodeId,
    t: Transform,
    params: &ParameterSet,
    out: &mut ResolveResult,
) {
    let Some(slot) = slots.get(id.idx()) else {
        return;
    };
    let t = match &slot.node {
        Node::Ball(x) => return out.add(t, ResolvedShape::Ball(x.resolve(params))),
        Node::Box(x) => return out.add(t, ResolvedShape::Box(x.resolve(params))),
        Node::Line(x) => return out.add(t, ResolvedShape::Line(x.resolve(params))),
        Node::Ngon(x) => return out.add(t, ResolvedShape::Ngon(x.resolve(params))),
        Node::BallCollider(_)
        | Node::BoxCollider(_)
        | Node::NgonCollider(_)
        | Node::ArcCollider(_) => return,
        Node::Compound => t,
        Node::Enable(x) => {
            if !x.condition.resolve(params) {
                return;
            }
            t
        }
        Node::Translate(x) => t.translate(x.offset.resolve(params)),
        Node::Rotate(x) => t.rotate(x.angle.resolve(params)),
        Node::TranslateRotate(x) => t
            .translate(x.translation.resolve(params))
            .rotate(x.rotation.resolve(params)),
    };
    for &child in &slot.children {
        resolve_node(slots, child, t, params, out);
    }
}
