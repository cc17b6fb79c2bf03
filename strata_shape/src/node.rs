// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node payloads: colliders, renderable shapes, and compositors.

use strata_fixed::{Fixed, Vec2};

use crate::params::Value;
use crate::types::{Colour, NgonStyle, NodeCaps, RenderFlags, ShapeFlag, Tag};

/// Outline style of a renderable shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineStyle {
    /// Primary colour.
    pub colour0: Value<Colour>,
    /// Secondary colour, for gradients or alternating segments.
    pub colour1: Value<Colour>,
    /// Depth.
    pub z: Value<f32>,
    /// Stroke width.
    pub width: Value<f32>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            colour0: Value::default(),
            colour1: Value::default(),
            z: Value::default(),
            width: Value::Constant(1.0),
        }
    }
}

impl LineStyle {
    /// Single-colour outline. Both colours read the same value.
    pub fn new(colour: impl Into<Value<Colour>>, z: impl Into<Value<f32>>, width: f32) -> Self {
        let colour = colour.into();
        Self {
            colour0: colour,
            colour1: colour,
            z: z.into(),
            width: Value::Constant(width),
        }
    }
}

/// Fill style of a renderable shape.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FillStyle {
    /// Primary colour.
    pub colour0: Value<Colour>,
    /// Secondary colour.
    pub colour1: Value<Colour>,
    /// Depth.
    pub z: Value<f32>,
}

impl FillStyle {
    /// Single-colour fill.
    pub fn new(colour: impl Into<Value<Colour>>, z: impl Into<Value<f32>>) -> Self {
        let colour = colour.into();
        Self {
            colour0: colour,
            colour1: colour,
            z: z.into(),
        }
    }
}

/// Circle or annulus size. An `inner_radius` of zero means a solid disc.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BallDimensions {
    /// Outer radius.
    pub radius: Value<Fixed>,
    /// Inner radius.
    pub inner_radius: Value<Fixed>,
}

impl BallDimensions {
    /// Solid disc.
    pub fn new(radius: impl Into<Value<Fixed>>) -> Self {
        Self {
            radius: radius.into(),
            inner_radius: Value::default(),
        }
    }

    /// Annulus.
    pub fn annulus(radius: impl Into<Value<Fixed>>, inner_radius: impl Into<Value<Fixed>>) -> Self {
        Self {
            radius: radius.into(),
            inner_radius: inner_radius.into(),
        }
    }
}

/// Regular polygon size.
///
/// `segments` counts how many of the `sides` wedges exist, starting from the
/// positive x axis and turning counter-clockwise. Fewer segments than sides
/// gives a partial polygon.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct NgonDimensions {
    /// Circumradius.
    pub radius: Value<Fixed>,
    /// Inner circumradius; zero for a solid polygon.
    pub inner_radius: Value<Fixed>,
    /// Number of sides of the full polygon.
    pub sides: Value<u32>,
    /// Number of wedges present.
    pub segments: Value<u32>,
}

impl NgonDimensions {
    /// Full solid polygon.
    pub fn new(radius: impl Into<Value<Fixed>>, sides: u32) -> Self {
        Self {
            radius: radius.into(),
            inner_radius: Value::default(),
            sides: Value::Constant(sides),
            segments: Value::Constant(sides),
        }
    }

    /// Keep only the first `segments` wedges.
    pub fn with_segments(mut self, segments: impl Into<Value<u32>>) -> Self {
        self.segments = segments.into();
        self
    }

    /// Cut out the middle, leaving a polygonal ring.
    pub fn with_inner_radius(mut self, inner_radius: impl Into<Value<Fixed>>) -> Self {
        self.inner_radius = inner_radius.into();
        self
    }
}

/// Collider shaped as a disc or annulus centred on the origin.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BallCollider {
    /// Size.
    pub dimensions: BallDimensions,
    /// Gameplay roles.
    pub flags: Value<ShapeFlag>,
}

/// Collider shaped as a box centred on the origin.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoxCollider {
    /// Half extents.
    pub dimensions: Value<Vec2>,
    /// Gameplay roles.
    pub flags: Value<ShapeFlag>,
}

/// Collider shaped as a regular polygon centred on the origin.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct NgonCollider {
    /// Size.
    pub dimensions: NgonDimensions,
    /// Gameplay roles.
    pub flags: Value<ShapeFlag>,
}

/// Collider shaped as an annular sector from angle zero to `arc_angle`.
///
/// Only point queries are supported; other extents never hit.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ArcCollider {
    /// Radii.
    pub dimensions: BallDimensions,
    /// Sweep of the sector, counter-clockwise from the positive x axis.
    pub arc_angle: Value<Fixed>,
    /// Gameplay roles.
    pub flags: Value<ShapeFlag>,
}

/// Renderable circle or annulus.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BallShape {
    /// Size.
    pub dimensions: BallDimensions,
    /// Outline.
    pub line: LineStyle,
    /// Fill.
    pub fill: FillStyle,
    /// Renderer tag.
    pub tag: Value<Tag>,
    /// Renderer hints.
    pub flags: Value<RenderFlags>,
}

/// Renderable box.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoxShape {
    /// Half extents.
    pub dimensions: Value<Vec2>,
    /// Outline.
    pub line: LineStyle,
    /// Fill.
    pub fill: FillStyle,
    /// Renderer tag.
    pub tag: Value<Tag>,
    /// Renderer hints.
    pub flags: Value<RenderFlags>,
}

/// Renderable line segment.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LineShape {
    /// Start point.
    pub a: Value<Vec2>,
    /// End point.
    pub b: Value<Vec2>,
    /// Stroke.
    pub style: LineStyle,
    /// Renderer tag.
    pub tag: Value<Tag>,
    /// Renderer hints.
    pub flags: Value<RenderFlags>,
}

/// Renderable regular polygon.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct NgonShape {
    /// Size.
    pub dimensions: NgonDimensions,
    /// Outline form.
    pub style: Value<NgonStyle>,
    /// Outline.
    pub line: LineStyle,
    /// Fill.
    pub fill: FillStyle,
    /// Renderer tag.
    pub tag: Value<Tag>,
    /// Renderer hints.
    pub flags: Value<RenderFlags>,
}

/// Move children by an offset, in the parent's rotated frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Translate {
    /// Offset.
    pub offset: Value<Vec2>,
}

/// Rotate children about the current origin.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rotate {
    /// Angle in radians.
    pub angle: Value<Fixed>,
}

/// A [`Translate`] directly followed by a [`Rotate`]. Produced by the optimizer.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TranslateRotate {
    /// Offset, applied first.
    pub translation: Value<Vec2>,
    /// Angle, applied after the offset.
    pub rotation: Value<Fixed>,
}

/// Include children only while a condition holds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Enable {
    /// Condition.
    pub condition: Value<bool>,
}

impl Default for Enable {
    fn default() -> Self {
        Self {
            condition: Value::Constant(true),
        }
    }
}

/// One node of a shape tree.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[allow(
    clippy::large_enum_variant,
    reason = "Nodes live in an arena and are matched far more often than moved."
)]
pub enum Node {
    /// Disc or annulus collider.
    BallCollider(BallCollider),
    /// Box collider.
    BoxCollider(BoxCollider),
    /// Regular polygon collider.
    NgonCollider(NgonCollider),
    /// Annular sector collider.
    ArcCollider(ArcCollider),
    /// Renderable circle.
    Ball(BallShape),
    /// Renderable box.
    Box(BoxShape),
    /// Renderable segment.
    Line(LineShape),
    /// Renderable polygon.
    Ngon(NgonShape),
    /// Groups children with no transform.
    #[default]
    Compound,
    /// Offset.
    Translate(Translate),
    /// Rotation.
    Rotate(Rotate),
    /// Offset then rotation.
    TranslateRotate(TranslateRotate),
    /// Conditional inclusion.
    Enable(Enable),
}

impl Node {
    /// Capabilities contributed by this node alone, ignoring children.
    pub fn leaf_caps(&self) -> NodeCaps {
        match self {
            Self::BallCollider(_)
            | Self::BoxCollider(_)
            | Self::NgonCollider(_)
            | Self::ArcCollider(_) => NodeCaps::HAS_COLLISION,
            Self::Ball(_) | Self::Box(_) | Self::Line(_) | Self::Ngon(_) => NodeCaps::HAS_RESOLVE,
            Self::Compound
            | Self::Translate(_)
            | Self::Rotate(_)
            | Self::TranslateRotate(_)
            | Self::Enable(_) => NodeCaps::empty(),
        }
    }

    /// Whether the node may have children that affect evaluation.
    pub fn is_compositor(&self) -> bool {
        self.leaf_caps().is_empty()
    }
}

macro_rules! node_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

node_from!(
    BallCollider(BallCollider),
    BoxCollider(BoxCollider),
    NgonCollider(NgonCollider),
    ArcCollider(ArcCollider),
    Ball(BallShape),
    Box(BoxShape),
    Line(LineShape),
    Ngon(NgonShape),
    Translate(Translate),
    Rotate(Rotate),
    TranslateRotate(TranslateRotate),
    Enable(Enable),
);

impl Translate {
    /// Translate by `offset`.
    pub fn new(offset: impl Into<Value<Vec2>>) -> Self {
        Self {
            offset: offset.into(),
        }
    }
}

impl Rotate {
    /// Rotate by `angle`.
    pub fn new(angle: impl Into<Value<Fixed>>) -> Self {
        Self {
            angle: angle.into(),
        }
    }
}

impl Enable {
    /// Enable children while `condition` holds.
    pub fn new(condition: impl Into<Value<bool>>) -> Self {
        Self {
            condition: condition.into(),
        }
    }
}

impl BallCollider {
    /// Disc collider of `radius`.
    pub fn new(radius: impl Into<Value<Fixed>>, flags: impl Into<Value<ShapeFlag>>) -> Self {
        Self {
            dimensions: BallDimensions::new(radius),
            flags: flags.into(),
        }
    }
}

impl BoxCollider {
    /// Box collider with the given half extents.
    pub fn new(half_extents: impl Into<Value<Vec2>>, flags: impl Into<Value<ShapeFlag>>) -> Self {
        Self {
            dimensions: half_extents.into(),
            flags: flags.into(),
        }
    }
}

impl NgonCollider {
    /// Polygon collider.
    pub fn new(dimensions: NgonDimensions, flags: impl Into<Value<ShapeFlag>>) -> Self {
        Self {
            dimensions,
            flags: flags.into(),
        }
    }
}
