// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The node arena, per-kind memoization, and the tree builder.

use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::collision::{CheckQuery, HitResult, check_collision_into};
use crate::node::Node;
use crate::optimize::optimize;
use crate::params::ParameterSet;
use crate::resolve::{ResolveResult, resolve_node};
use crate::transform::Transform;
use crate::types::{NodeCaps, NodeId};

#[derive(Clone, Debug)]
pub(crate) struct Slot {
    pub(crate) node: Node,
    pub(crate) children: Vec<NodeId>,
    /// Children whose subtree contains a collider. Filled in by the optimizer.
    pub(crate) collision: Vec<NodeId>,
    pub(crate) caps: NodeCaps,
    pub(crate) optimized: bool,
}

impl Slot {
    pub(crate) fn new(node: Node) -> Self {
        Self {
            node,
            children: Vec::new(),
            collision: Vec::new(),
            caps: NodeCaps::empty(),
            optimized: false,
        }
    }
}

fn push(slots: &mut Vec<Slot>, node: Node) -> NodeId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "NodeId uses 32-bit indices by design."
    )]
    let id = NodeId::new(slots.len() as u32);
    slots.push(Slot::new(node));
    id
}

/// Owns every node of every shape tree and memoizes one tree per kind.
///
/// A *kind* is whatever the caller uses to name a distinct shape: a string, an
/// enum of enemy types, and so on. The first [`get_or_build`](Self::get_or_build)
/// for a kind runs the build closure against a fresh root, optimizes the result,
/// and remembers the root. Later calls return the same [`NodeId`] without building.
///
/// Nodes are never freed. Trees are immutable once built, so evaluation takes
/// `&self` and may run from several threads at once.
///
/// The bank also keeps one [`ParameterSet`] that the `*_kind` helpers update in
/// place before each evaluation. Slots not written by the update keep their
/// previous values.
pub struct ShapeBank<K = &'static str> {
    slots: Vec<Slot>,
    kinds: BTreeMap<K, NodeId>,
    parameters: ParameterSet,
}

impl<K: Debug> Debug for ShapeBank<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ShapeBank")
            .field("nodes", &self.slots.len())
            .field("kinds", &self.kinds)
            .finish_non_exhaustive()
    }
}

impl<K> Default for ShapeBank<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> ShapeBank<K> {
    /// An empty bank.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            kinds: BTreeMap::new(),
            parameters: ParameterSet::new(),
        }
    }

    /// Total number of nodes across every tree.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no node has been allocated.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The payload of a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.idx()).map(|s| &s.node)
    }

    /// Children of a node, in evaluation order. Empty for unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.slots.get(id.idx()).map_or(&[], |s| &s.children)
    }

    /// Children whose subtree contains a collider. Empty before optimization.
    pub fn collision_children(&self, id: NodeId) -> &[NodeId] {
        self.slots.get(id.idx()).map_or(&[], |s| &s.collision)
    }

    /// What the subtree under `id` contains. Empty before optimization.
    pub fn caps(&self, id: NodeId) -> NodeCaps {
        self.slots
            .get(id.idx())
            .map_or(NodeCaps::empty(), |s| s.caps)
    }

    /// Build and optimize a tree without memoizing it.
    ///
    /// Useful for one-off shapes and for sharing: nodes of the returned tree may be
    /// [attached](Builder::attach) into later trees.
    pub fn build(&mut self, build: impl FnOnce(&mut Builder<'_>)) -> NodeId {
        let before = self.slots.len();
        let root = push(&mut self.slots, Node::Compound);
        build(&mut Builder {
            slots: &mut self.slots,
            node: root,
            start: before,
        });
        let caps = optimize(&mut self.slots, root);
        log::debug!(
            "built tree {root:?}: {} nodes, caps {caps:?}",
            self.slots.len() - before
        );
        root
    }

    /// Update the cached parameter set and return it.
    pub fn parameters(&mut self, set: impl FnOnce(&mut ParameterSet)) -> &ParameterSet {
        set(&mut self.parameters);
        &self.parameters
    }

    /// Evaluate the tree under `root` into render primitives.
    pub fn resolve(&self, root: NodeId, params: &ParameterSet) -> ResolveResult {
        let mut out = ResolveResult::default();
        self.resolve_into(root, params, &mut out);
        out
    }

    /// Like [`resolve`](Self::resolve), appending to an existing result.
    pub fn resolve_into(&self, root: NodeId, params: &ParameterSet, out: &mut ResolveResult) {
        resolve_node(&self.slots, root, Transform::IDENTITY, params, out);
    }

    /// Test the tree under `root` against a query.
    pub fn check_collision(
        &self,
        root: NodeId,
        query: &CheckQuery<'_>,
        params: &ParameterSet,
    ) -> HitResult {
        let mut hit = HitResult::default();
        self.check_collision_into(root, query, params, &mut hit);
        hit
    }

    /// Like [`check_collision`](Self::check_collision), accumulating into an existing result.
    pub fn check_collision_into(
        &self,
        root: NodeId,
        query: &CheckQuery<'_>,
        params: &ParameterSet,
        hit: &mut HitResult,
    ) {
        check_collision_into(&self.slots, root, query, params, hit);
    }
}

impl<K: Ord + Debug> ShapeBank<K> {
    /// The root for `kind`, building it on first request.
    ///
    /// `build` runs at most once per kind.
    pub fn get_or_build(&mut self, kind: K, build: impl FnOnce(&mut Builder<'_>)) -> NodeId {
        if let Some(&root) = self.kinds.get(&kind) {
            return root;
        }
        log::debug!("building shape kind {kind:?}");
        let root = self.build(build);
        self.kinds.insert(kind, root);
        root
    }

    /// The root for `kind`, if it has been built.
    pub fn root(&self, kind: &K) -> Option<NodeId> {
        self.kinds.get(kind).copied()
    }

    /// Build if needed, update the cached parameters, and resolve.
    pub fn resolve_kind(
        &mut self,
        kind: K,
        build: impl FnOnce(&mut Builder<'_>),
        set: impl FnOnce(&mut ParameterSet),
    ) -> ResolveResult {
        let root = self.get_or_build(kind, build);
        set(&mut self.parameters);
        self.resolve(root, &self.parameters)
    }

    /// Build if needed, update the cached parameters, and check a collision query.
    pub fn check_kind(
        &mut self,
        kind: K,
        build: impl FnOnce(&mut Builder<'_>),
        query: &CheckQuery<'_>,
        set: impl FnOnce(&mut ParameterSet),
    ) -> HitResult {
        let root = self.get_or_build(kind, build);
        set(&mut self.parameters);
        self.check_collision(root, query, &self.parameters)
    }
}

/// Adds nodes beneath one node of a tree under construction.
pub struct Builder<'a> {
    slots: &'a mut Vec<Slot>,
    node: NodeId,
    /// First slot of the tree under construction. Earlier slots belong to
    /// finished trees.
    start: usize,
}

impl Debug for Builder<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Builder")
            .field("node", &self.node)
            .finish_non_exhaustive()
    }
}

impl Builder<'_> {
    /// The node children are added to.
    pub fn id(&self) -> NodeId {
        self.node
    }

    /// Allocate a node without attaching it anywhere.
    pub fn create(&mut self, node: impl Into<Node>) -> NodeId {
        push(self.slots, node.into())
    }

    /// Allocate a node and append it as the last child.
    pub fn add(&mut self, node: impl Into<Node>) -> NodeId {
        let id = self.create(node);
        self.slots[self.node.idx()].children.push(id);
        id
    }

    /// Append a child and build beneath it.
    pub fn with(&mut self, node: impl Into<Node>, build: impl FnOnce(&mut Builder<'_>)) -> NodeId {
        let id = self.add(node);
        build(&mut Builder {
            slots: self.slots,
            node: id,
            start: self.start,
        });
        id
    }

    /// Build beneath an existing node, typically one from [`create`](Self::create).
    ///
    /// Unknown ids, and nodes of trees that are already built, are ignored. Share
    /// a finished tree with [`attach`](Self::attach) instead.
    pub fn within(&mut self, id: NodeId, build: impl FnOnce(&mut Builder<'_>)) {
        if id.idx() >= self.slots.len() {
            log::warn!("ignoring build beneath unknown node {id:?}");
            return;
        }
        if id.idx() < self.start {
            log::warn!("ignoring build beneath {id:?}: it belongs to a finished tree");
            return;
        }
        build(&mut Builder {
            slots: self.slots,
            node: id,
            start: self.start,
        });
    }

    /// Append an existing node as a child, sharing its subtree.
    ///
    /// Returns `false`, and changes nothing, if `child` is unknown or if the link
    /// would make the tree cyclic.
    pub fn attach(&mut self, child: NodeId) -> bool {
        if child.idx() >= self.slots.len() {
            log::warn!("cannot attach unknown node {child:?}");
            return false;
        }
        if self.reaches(child, self.node) {
            log::warn!("cannot attach {child:?} beneath {:?}: cycle", self.node);
            return false;
        }
        self.slots[self.node.idx()].children.push(child);
        true
    }

    fn reaches(&self, from: NodeId, target: NodeId) -> bool {
        let mut seen = vec![false; self.slots.len()];
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            if id == target {
                return true;
            }
            let Some(visited) = seen.get_mut(id.idx()) else {
                continue;
            };
            if core::mem::replace(visited, true) {
                continue;
            }
            stack.extend_from_slice(&self.slots[id.idx()].children);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{BallCollider, BallDimensions, BallShape, Enable, Rotate, Translate};
    use crate::params::{ParameterKey, Value};
    use crate::types::ShapeFlag;
    use strata_fixed::{Fixed, Vec2};

    fn ball(radius: i32) -> BallShape {
        BallShape {
            dimensions: BallDimensions::new(Fixed::from_int(radius)),
            ..Default::default()
        }
    }

    #[test]
    fn memoizes_by_kind() {
        let mut bank: ShapeBank = ShapeBank::new();
        let mut builds = 0;
        let a = bank.get_or_build("ship", |b| {
            builds += 1;
            b.add(ball(1));
            b.add(ball(2));
        });
        let len = bank.len();
        let again = bank.get_or_build("ship", |_| builds += 1);
        assert_eq!(a, again);
        assert_eq!(builds, 1);
        assert_eq!(bank.len(), len);
        assert_eq!(bank.root(&"ship"), Some(a));
        assert_eq!(bank.root(&"mine"), None);
    }

    #[test]
    fn single_child_root_is_collapsed_in_place() {
        let mut bank: ShapeBank = ShapeBank::new();
        let root = bank.get_or_build("dot", |b| {
            b.add(BallCollider::new(Fixed::from_int(3), ShapeFlag::DANGEROUS));
        });
        assert!(matches!(bank.node(root), Some(Node::BallCollider(_))));
        assert!(bank.children(root).is_empty());
        assert_eq!(bank.caps(root), NodeCaps::HAS_COLLISION);
    }

    #[test]
    fn translate_over_rotate_is_fused() {
        let mut bank: ShapeBank = ShapeBank::new();
        let mut outer = None;
        bank.build(|b| {
            outer = Some(b.with(Translate::new(Vec2::from_ints(1, 2)), |b| {
                b.with(Rotate::new(Fixed::HALF), |b| {
                    b.add(ball(1));
                    b.add(ball(2));
                });
            }));
            b.add(ball(3));
        });
        let outer = outer.unwrap();
        let Some(Node::TranslateRotate(tr)) = bank.node(outer) else {
            panic!("expected fusion, got {:?}", bank.node(outer));
        };
        assert_eq!(tr.translation, Value::Constant(Vec2::from_ints(1, 2)));
        assert_eq!(tr.rotation, Value::Constant(Fixed::HALF));
        assert_eq!(bank.children(outer).len(), 2);
    }

    #[test]
    fn compound_children_are_flattened() {
        let mut bank: ShapeBank = ShapeBank::new();
        let root = bank.build(|b| {
            b.with(Node::Compound, |b| {
                b.add(ball(1));
                b.with(Node::Compound, |b| {
                    b.add(ball(2));
                    b.add(ball(3));
                });
            });
            b.add(ball(4));
        });
        let children = bank.children(root);
        assert_eq!(children.len(), 4);
        assert!(
            children
                .iter()
                .all(|c| matches!(bank.node(*c), Some(Node::Ball(_))))
        );
    }

    #[test]
    fn collision_list_skips_render_only_children() {
        let mut bank: ShapeBank = ShapeBank::new();
        let root = bank.build(|b| {
            b.add(ball(1));
            b.with(Enable::new(ParameterKey(0)), |b| {
                b.add(BallCollider::new(Fixed::ONE, ShapeFlag::VULNERABLE));
            });
            b.add(ball(2));
        });
        assert_eq!(bank.children(root).len(), 3);
        assert_eq!(bank.collision_children(root), &bank.children(root)[1..2]);
        assert_eq!(bank.caps(root), NodeCaps::HAS_COLLISION | NodeCaps::HAS_RESOLVE);
    }

    #[test]
    fn shared_subtree_is_optimized_once() {
        let mut bank: ShapeBank = ShapeBank::new();
        let shared = bank.build(|b| {
            b.add(BallCollider::new(Fixed::from_int(2), ShapeFlag::SHIELD));
            b.add(ball(2));
        });
        let left = bank.get_or_build("left", |b| {
            b.with(Translate::new(Vec2::from_ints(-10, 0)), |b| {
                assert!(b.attach(shared));
            });
            b.add(ball(1));
        });
        let right = bank.get_or_build("right", |b| {
            b.with(Translate::new(Vec2::from_ints(10, 0)), |b| {
                assert!(b.attach(shared));
            });
            b.add(ball(1));
        });
        assert_eq!(bank.children(shared).len(), 2);
        let params = ParameterSet::new();
        let q = CheckQuery::point(ShapeFlag::SHIELD, Vec2::from_ints(10, 1));
        assert!(!bank.check_collision(left, &q, &params).is_hit());
        let hit = bank.check_collision(right, &q, &params);
        assert_eq!(hit.shape_centres, [Vec2::from_ints(10, 0)]);
    }

    #[test]
    fn attach_rejects_cycles_and_unknown_ids() {
        let mut bank: ShapeBank = ShapeBank::new();
        bank.build(|b| {
            let root = b.id();
            let inner = b.add(Node::Compound);
            b.within(inner, |b| {
                assert!(!b.attach(root));
                assert!(!b.attach(inner));
                assert!(!b.attach(NodeId::new(9_999)));
            });
        });
    }

    #[test]
    fn within_refuses_finished_trees() {
        let mut bank: ShapeBank = ShapeBank::new();
        let first = bank.get_or_build("a", |b| {
            b.add(ball(1));
            b.add(ball(2));
        });
        let mut ran = false;
        bank.build(|b| {
            b.within(first, |b| {
                ran = true;
                b.add(BallCollider::new(Fixed::from_int(10), ShapeFlag::VULNERABLE));
            });
        });
        assert!(!ran);
        assert_eq!(bank.children(first).len(), 2);
        assert_eq!(bank.caps(first), NodeCaps::HAS_RESOLVE);
        let q = CheckQuery::point(ShapeFlag::EVERYTHING, Vec2::ZERO);
        assert!(!bank.check_collision(first, &q, &ParameterSet::new()).is_hit());

        // Nodes created during the current build are still open.
        let root = bank.build(|b| {
            let spare = b.create(Node::Compound);
            b.within(spare, |b| {
                b.add(BallCollider::new(Fixed::from_int(10), ShapeFlag::VULNERABLE));
            });
            assert!(b.attach(spare));
            b.add(ball(3));
        });
        assert!(bank.check_collision(root, &q, &ParameterSet::new()).is_hit());
    }

    #[test]
    fn unknown_ids_are_inert() {
        let bank: ShapeBank = ShapeBank::new();
        let id = NodeId::new(42);
        let params = ParameterSet::new();
        assert!(bank.node(id).is_none());
        assert!(bank.children(id).is_empty());
        assert!(bank.resolve(id, &params).entries.is_empty());
        let q = CheckQuery::point(ShapeFlag::EVERYTHING, Vec2::ZERO);
        assert!(!bank.check_collision(id, &q, &params).is_hit());
    }

    #[test]
    fn bank_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ShapeBank>();
        assert_send_sync::<ShapeBank<u32>>();
    }
}
