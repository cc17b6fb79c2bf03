// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types shared by nodes and evaluators: identifiers, flags, and small enums.

/// Identifier for a node in a [`ShapeBank`](crate::ShapeBank).
///
/// A plain slot index. Nodes are never removed from a bank, so an id stays valid
/// for the bank's lifetime. Ids from a different bank are not detected; lookups
/// that fall outside the arena return `None` or an empty slice.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32) -> Self {
        Self(idx)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Gameplay role of a collider. Queries carry a mask of these and only
    /// colliders sharing at least one bit are tested.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ShapeFlag: u32 {
        /// Can be hit by the player and consumes non-penetrating shots.
        const VULNERABLE        = 0b0000_0001;
        /// Can be hit by the player; shots pass through.
        const WEAK_VULNERABLE   = 0b0000_0010;
        /// Can be hit by a bomb.
        const BOMB_VULNERABLE   = 0b0000_0100;
        /// Kills the player on contact.
        const DANGEROUS         = 0b0000_1000;
        /// Blocks all player projectiles.
        const SHIELD            = 0b0001_0000;
        /// Blocks normal player projectiles; stronger shots penetrate.
        const WEAK_SHIELD       = 0b0010_0000;
        /// Blocks enemy projectiles.
        const SAFE_SHIELD       = 0b0100_0000;
        /// Takes part in enemy-enemy interactions.
        const ENEMY_INTERACTION = 0b1000_0000;
        /// Every role.
        const EVERYTHING        = 0b1111_1111;
    }
}

bitflags::bitflags! {
    /// Hints passed through to the renderer with each resolved shape.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RenderFlags: u32 {
        /// Do not flash when damaged.
        const NO_FLASH          = 0b0000_0001;
        /// Do not draw status effects.
        const NO_STATUS         = 0b0000_0010;
        /// Suppress the explosion effect used by older content.
        const LEGACY_NO_EXPLODE = 0b0000_0100;
    }
}

bitflags::bitflags! {
    /// What a subtree contains, computed bottom-up by the optimizer.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeCaps: u8 {
        /// The subtree contains at least one collider.
        const HAS_COLLISION = 0b0000_0001;
        /// The subtree contains at least one renderable shape.
        const HAS_RESOLVE   = 0b0000_0010;
    }
}

/// Renderer-defined tag attached to a resolved shape.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tag(pub u8);

/// How an n-gon outline is drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum NgonStyle {
    /// Closed polygon outline.
    #[default]
    Polygon = 0,
    /// Spokes from the centre to each vertex.
    Polystar = 1,
    /// Every vertex joined to every other.
    Polygram = 2,
}

impl NgonStyle {
    /// Decode a stored discriminant. Unknown values give [`NgonStyle::Polygon`].
    pub fn from_u32(v: u32) -> Self {
        match v {
            1 => Self::Polystar,
            2 => Self::Polygram,
            _ => Self::Polygon,
        }
    }
}

/// RGBA colour, in whatever space the renderer expects.
pub type Colour = [f32; 4];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_covers_each_role() {
        for flag in ShapeFlag::all().iter() {
            assert!(ShapeFlag::EVERYTHING.contains(flag));
        }
        assert_eq!(ShapeFlag::EVERYTHING.bits(), 0xff);
    }

    #[test]
    fn ngon_style_decodes_unknown_as_polygon() {
        assert_eq!(NgonStyle::from_u32(NgonStyle::Polygram as u32), NgonStyle::Polygram);
        assert_eq!(NgonStyle::from_u32(77), NgonStyle::Polygon);
    }
}
