// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-time structural simplification of a freshly built tree.

use alloc::vec::Vec;

use crate::bank::Slot;
use crate::node::{Node, TranslateRotate};
use crate::types::{NodeCaps, NodeId};

/// Simplify the subtree under `id` and fill in capabilities and collision lists.
///
/// Bottom-up, per node:
/// - A `Compound` with a single child takes over that child's payload and children.
/// - A `Translate` whose single child is a `Rotate` becomes a `TranslateRotate`.
/// - `Compound` children are spliced into the child list, recursively.
/// - Capabilities are the union of the node's own and its children's.
/// - The collision list keeps only children that contain a collider.
///
/// Nodes already optimized (shared subtrees) are left alone and report their
/// stored capabilities.
pub(crate) fn optimize(slots: &mut [Slot], id: NodeId) -> NodeCaps {
    let Some(slot) = slots.get(id.idx()) else {
        return NodeCaps::empty();
    };
    if slot.optimized {
        return slot.caps;
    }

    collapse_single_child(slots, id);

    let mut children = core::mem::take(&mut slots[id.idx()].children);
    flatten_compounds(slots, id, &mut children);

    let mut caps = slots[id.idx()].node.leaf_caps();
    let mut collision = Vec::new();
    for &child in &children {
        let child_caps = optimize(slots, child);
        if child_caps.contains(NodeCaps::HAS_COLLISION) {
            collision.push(child);
        }
        caps |= child_caps;
    }

    let slot = &mut slots[id.idx()];
    slot.children = children;
    slot.collision = collision;
    slot.caps = caps;
    slot.optimized = true;
    caps
}

fn collapse_single_child(slots: &mut [Slot], id: NodeId) {
    loop {
        let slot = &slots[id.idx()];
        let &[child] = slot.children.as_slice() else {
            return;
        };
        let Some(child_slot) = slots.get(child.idx()) else {
            return;
        };
        let node = match (&slot.node, &child_slot.node) {
            (Node::Compound, inner) => {
                log::trace!("{id:?}: single-child compound replaced by {child:?}");
                *inner
            }
            (Node::Translate(t), Node::Rotate(r)) => {
                log::trace!("{id:?}: translate {child:?} fused into translate-rotate");
                Node::TranslateRotate(TranslateRotate {
                    translation: t.offset,
                    rotation: r.angle,
                })
            }
            _ => return,
        };
        let grandchildren = child_slot.children.clone();
        let slot = &mut slots[id.idx()];
        slot.node = node;
        slot.children = grandchildren;
    }
}

fn flatten_compounds(slots: &[Slot], id: NodeId, children: &mut Vec<NodeId>) {
    let mut i = 0;
    while i < children.len() {
        let child = children[i];
        match slots.get(child.idx()) {
            Some(s) if matches!(s.node, Node::Compound) => {
                log::trace!("{id:?}: compound child {child:?} flattened");
                children.splice(i..=i, s.children.iter().copied());
            }
            _ => i += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use strata_fixed::{Fixed, Vec2};

    use super::*;
    use crate::node::{BallCollider, BallDimensions, BallShape, Rotate, Translate};
    use crate::params::ParameterSet;
    use crate::resolve::{ResolveResult, resolve_node};
    use crate::transform::Transform;
    use crate::types::ShapeFlag;

    fn slot(node: Node, children: &[u32]) -> Slot {
        let mut slot = Slot::new(node);
        slot.children = children.iter().map(|&c| NodeId::new(c)).collect();
        slot
    }

    fn resolve(slots: &[Slot]) -> ResolveResult {
        let mut out = ResolveResult::default();
        resolve_node(slots, NodeId::new(0), Transform::IDENTITY, &ParameterSet::new(), &mut out);
        out
    }

    fn ball(r: i32) -> Node {
        BallShape {
            dimensions: BallDimensions::new(Fixed::from_int(r)),
            ..Default::default()
        }
        .into()
    }

    #[test]
    fn resolve_output_is_unchanged() {
        let mut slots = vec![
            slot(Node::Compound, &[1]),
            slot(Node::Compound, &[2, 6]),
            slot(Translate::new(Vec2::from_ints(3, 4)).into(), &[3]),
            slot(Rotate::new(Fixed::ONE).into(), &[4, 5]),
            slot(ball(1), &[]),
            slot(Node::Compound, &[7]),
            slot(BallCollider::new(Fixed::ONE, ShapeFlag::SHIELD).into(), &[]),
            slot(ball(2), &[]),
        ];
        let before = resolve(&slots);
        assert_eq!(before.entries.len(), 2);

        let caps = optimize(&mut slots, NodeId::new(0));
        assert_eq!(caps, NodeCaps::HAS_COLLISION | NodeCaps::HAS_RESOLVE);
        assert_eq!(resolve(&slots), before);

        let root = &slots[0];
        assert_eq!(root.children, vec![NodeId::new(2), NodeId::new(6)]);
        assert_eq!(root.collision, vec![NodeId::new(6)]);
        assert!(matches!(slots[2].node, Node::TranslateRotate(_)));
        assert_eq!(slots[2].children, vec![NodeId::new(4), NodeId::new(7)]);
        assert!(slots.iter().filter(|s| s.optimized).count() >= 4);
    }

    #[test]
    fn optimizing_twice_is_a_no_op() {
        let mut slots = vec![
            slot(Node::Compound, &[1, 2]),
            slot(ball(1), &[]),
            slot(ball(2), &[]),
        ];
        let first = optimize(&mut slots, NodeId::new(0));
        let children = slots[0].children.clone();
        assert_eq!(optimize(&mut slots, NodeId::new(0)), first);
        assert_eq!(slots[0].children, children);
    }
}
