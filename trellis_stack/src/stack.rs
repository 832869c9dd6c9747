// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stack: ownership, layout, painting, and pointer routing.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::Any;

use kurbo::{Point, Rect, Size};
use trellis_node::{Clock, Entropy, EventCx, LayoutCx, Node, PointerEvent};
use trellis_paint::{Surface, SurfaceScope, TextMeasure};

use crate::damage::Damage;
use crate::services::Services;
use crate::types::{NodeFlags, NodeId, StackParams};
use crate::util::overlaps;

/// Results of a hit test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// The matched node.
    pub node: NodeId,
    /// The query point in the node's local coordinates.
    pub local: Point,
}

/// Filters applied during hit testing and rectangle intersection.
///
/// Used by [`StackLayout::hit_test_point`] and [`StackLayout::intersect_rect`]
/// to restrict which nodes participate in queries.
#[derive(Clone, Copy, Debug)]
pub struct QueryFilter {
    /// Bitfield of required node flags. Only nodes containing all these flags will be included.
    pub required_flags: NodeFlags,
}

impl Default for QueryFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryFilter {
    /// Create a new empty filter (includes all nodes).
    pub const fn new() -> Self {
        Self {
            required_flags: NodeFlags::empty(),
        }
    }

    /// Filter to only visible nodes.
    #[must_use]
    pub const fn visible(mut self) -> Self {
        self.required_flags = self.required_flags.union(NodeFlags::VISIBLE);
        self
    }

    /// Filter to only pickable nodes.
    #[must_use]
    pub const fn pickable(mut self) -> Self {
        self.required_flags = self.required_flags.union(NodeFlags::PICKABLE);
        self
    }

    /// Check if a node's flags satisfy this filter.
    pub fn matches(&self, node_flags: NodeFlags) -> bool {
        node_flags.contains(self.required_flags)
    }
}

/// Nodes that take part in pointer routing.
const ROUTABLE: QueryFilter = QueryFilter::new().visible().pickable();

#[derive(Debug)]
struct Entry {
    id: NodeId,
    node: Box<dyn Node>,
    origin: Point,
    size: Size,
    flags: NodeFlags,
}

impl Entry {
    fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// Offer `event` at `point` to routable entries containing it, topmost first.
///
/// Returns the id and bounds of the entry that consumed the event, if any.
fn route(
    entries: &mut [Entry],
    cx: &mut EventCx<'_>,
    point: Point,
    event: &PointerEvent,
) -> Option<(NodeId, Rect)> {
    for entry in entries.iter_mut().rev() {
        if !ROUTABLE.matches(entry.flags) || !entry.bounds().contains(point) {
            continue;
        }
        let local = point - entry.origin.to_vec2();
        if entry
            .node
            .handle_pointer_event(cx, local, entry.size, event)
        {
            return Some((entry.id, entry.bounds()));
        }
        log::trace!("{:?} passed on {:?} at {local:?}", entry.id, event.kind);
    }
    None
}

/// An ordered scene of nodes stacked top to bottom.
///
/// Insertion order is layout order, paint order (later nodes paint over
/// earlier ones), and reversed, hit-test order (later nodes get events
/// first).
///
/// ## Layout
///
/// [`StackLayout::layout`] walks the nodes once. Each node is sized with
/// [`Node::compute_size`] against [`StackParams::min_size`] and
/// [`StackParams::max_size`], placed at `x = 0` and at the current `y`, and
/// `y` advances by the node's height plus [`StackParams::spacing`]. The pass
/// is deterministic, so running it again with unchanged inputs changes
/// nothing.
///
/// Every mutation that can move a node re-runs layout before returning:
/// [`StackLayout::add`], [`StackLayout::remove`], the parameter setters (when
/// the value actually changes), [`StackLayout::set_measure`], and
/// [`StackLayout::handle_pointer_event`] when the event was consumed. Positions and sizes are therefore never stale.
///
/// ## Example
///
/// ```rust
/// use kurbo::{Point, Size};
/// use trellis_node::{Circle, Rectangle};
/// use trellis_stack::{Services, StackLayout, StackParams};
///
/// let mut stack = StackLayout::new(
///     StackParams::default().with_spacing(10.0),
///     Services::headless(),
/// );
/// let rect = stack.add(Rectangle::new(200.0, 100.0));
/// let circle = stack.add(Circle::new(50.0));
/// assert_eq!(stack.position(circle), Some(Point::new(0.0, 110.0)));
///
/// stack.remove(rect);
/// assert_eq!(stack.position(circle), Some(Point::ORIGIN));
/// assert_eq!(stack.size(circle), Some(Size::new(100.0, 100.0)));
/// ```
pub struct StackLayout {
    entries: Vec<Entry>,
    params: StackParams,
    services: Services,
    device_pixel_ratio: f64,
    next_id: u64,
    damage: Damage,
}

impl core::fmt::Debug for StackLayout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StackLayout")
            .field("nodes", &self.entries.len())
            .field("params", &self.params)
            .field("device_pixel_ratio", &self.device_pixel_ratio)
            .field("pending_damage", &self.damage.dirty_rects.len())
            .finish_non_exhaustive()
    }
}

impl StackLayout {
    /// Create an empty stack.
    ///
    /// `params` are sanitized (see [`StackParams::sanitized`]).
    pub fn new(params: StackParams, services: Services) -> Self {
        Self {
            entries: Vec::new(),
            params: params.sanitized(),
            services,
            device_pixel_ratio: 1.0,
            next_id: 0,
            damage: Damage::default(),
        }
    }

    /// Current layout parameters.
    pub fn params(&self) -> StackParams {
        self.params
    }

    /// Replace the layout parameters, re-running layout if they changed.
    pub fn set_params(&mut self, params: StackParams) {
        let params = params.sanitized();
        if params != self.params {
            self.params = params;
            self.layout();
        }
    }

    /// Replace the constraint bounds, re-running layout if they changed.
    pub fn set_constraints(&mut self, min_size: Size, max_size: Size) {
        self.set_params(
            self.params
                .with_min_size(min_size)
                .with_max_size(max_size),
        );
    }

    /// Replace the spacing, re-running layout if it changed.
    pub fn set_spacing(&mut self, spacing: f64) {
        self.set_params(self.params.with_spacing(spacing));
    }

    /// Ratio of physical to logical pixels used for incoming pointer positions.
    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    /// Set the ratio of physical to logical pixels.
    ///
    /// Values that are not finite and positive reset the ratio to `1.0`.
    pub fn set_device_pixel_ratio(&mut self, ratio: f64) {
        self.device_pixel_ratio = if ratio.is_finite() && ratio > 0.0 {
            ratio
        } else {
            1.0
        };
    }

    /// The services lent to nodes.
    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Replace the text measurement and re-run layout against it.
    pub fn set_measure(&mut self, measure: impl TextMeasure + 'static) {
        self.services.measure = Box::new(measure);
        self.layout();
    }

    /// Replace the randomness handed to event handlers.
    pub fn set_entropy(&mut self, entropy: impl Entropy + 'static) {
        self.services.entropy = Box::new(entropy);
    }

    /// Replace the clock handed to event handlers.
    pub fn set_clock(&mut self, clock: impl Clock + 'static) {
        self.services.clock = Box::new(clock);
    }

    /// Append `node` on top of the stack and re-run layout.
    pub fn add<N: Node>(&mut self, node: N) -> NodeId {
        self.add_boxed(Box::new(node))
    }

    /// Append an already boxed node on top of the stack and re-run layout.
    pub fn add_boxed(&mut self, node: Box<dyn Node>) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        log::debug!("adding {id:?} at index {}", self.entries.len());
        self.entries.push(Entry {
            id,
            node,
            origin: Point::ORIGIN,
            size: Size::ZERO,
            flags: NodeFlags::default(),
        });
        self.layout();
        id
    }

    /// Remove `id` and re-run layout, handing the node back.
    ///
    /// Returns `None`, without re-running layout, if `id` is not in the stack.
    pub fn remove(&mut self, id: NodeId) -> Option<Box<dyn Node>> {
        let index = self.index_of(id)?;
        let entry = self.entries.remove(index);
        log::debug!("removed {id:?} from index {index}");
        self.damage.add_rect(entry.bounds());
        self.layout();
        Some(entry.node)
    }

    /// Recompute the size and position of every node.
    ///
    /// Returns the damage caused by this pass: the old and new bounds of every
    /// node whose rectangle changed. The same rectangles are also added to the
    /// damage returned by [`StackLayout::take_damage`].
    pub fn layout(&mut self) -> Damage {
        let StackParams {
            min_size,
            max_size,
            spacing,
        } = self.params;
        let cx = LayoutCx::new(&*self.services.measure);
        let mut damage = Damage::default();
        let mut y = 0.0;
        for entry in &mut self.entries {
            let size = entry.node.compute_size(&cx, min_size, max_size);
            let origin = Point::new(0.0, y);
            if origin != entry.origin || size != entry.size {
                damage.add_rect(entry.bounds());
                entry.origin = origin;
                entry.size = size;
                damage.add_rect(entry.bounds());
            }
            log::trace!("laid out {:?} at {origin:?} with {size:?}", entry.id);
            y += size.height + spacing;
        }
        self.damage.extend(&damage);
        damage
    }

    /// Paint every visible node, in insertion order.
    ///
    /// Each node paints inside its own [`SurfaceScope`] translated to its
    /// position, so it sees a coordinate space whose origin is its own top-left
    /// corner. The scope restores the surface even if the node's paint panics;
    /// the panic itself is left to propagate.
    pub fn draw(&self, surface: &mut dyn Surface) {
        for entry in &self.entries {
            if !entry.flags.contains(NodeFlags::VISIBLE) {
                continue;
            }
            let mut scope = SurfaceScope::new(&mut *surface);
            scope.translate(entry.origin.to_vec2());
            entry.node.paint(&mut *scope, entry.size);
        }
    }

    /// Route a pointer sample and report whether a node consumed it.
    ///
    /// The physical position is converted to logical coordinates with the
    /// device pixel ratio. Visible, pickable nodes whose bounds contain the
    /// point are offered the event topmost first, in local coordinates, until
    /// one consumes it. At most one node consumes an event. When one does, its
    /// bounds are recorded as damage and layout is re-run, since the handler
    /// may have changed the node's intrinsic size.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> bool {
        let point = event.logical_position(self.device_pixel_ratio);
        let Services { entropy, clock, .. } = &mut self.services;
        let mut cx = EventCx::new(&mut **entropy, &**clock);
        let consumer = route(&mut self.entries, &mut cx, point, event);

        let Some((id, bounds)) = consumer else {
            return false;
        };
        log::debug!("{id:?} consumed {:?} at {point:?}", event.kind);
        self.damage.add_rect(bounds);
        self.layout();
        true
    }

    /// Hit test a point in stack coordinates without invoking any handler.
    ///
    /// Returns the topmost node whose bounds contain `point` and whose flags
    /// satisfy `filter`. Nodes are tested by their bounding rectangles only.
    pub fn hit_test_point(&self, point: Point, filter: QueryFilter) -> Option<Hit> {
        self.entries
            .iter()
            .rev()
            .find(|e| filter.matches(e.flags) && e.bounds().contains(point))
            .map(|e| Hit {
                node: e.id,
                local: point - e.origin.to_vec2(),
            })
    }

    /// Iterate nodes whose bounds overlap `rect`, in insertion order.
    ///
    /// Rectangles that only touch along an edge do not overlap.
    pub fn intersect_rect(
        &self,
        rect: Rect,
        filter: QueryFilter,
    ) -> impl Iterator<Item = NodeId> + '_ {
        self.entries
            .iter()
            .filter(move |e| filter.matches(e.flags) && overlaps(e.bounds(), rect))
            .map(|e| e.id)
    }

    /// Drain the damage accumulated since the last call.
    pub fn take_damage(&mut self) -> Damage {
        core::mem::take(&mut self.damage)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the stack holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Node identifiers in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    /// Returns `true` if `id` is in the stack.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.index_of(id).is_some()
    }

    /// Position of `id` as of the last layout pass.
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.entry(id).map(|e| e.origin)
    }

    /// Size of `id` as of the last layout pass.
    pub fn size(&self, id: NodeId) -> Option<Size> {
        self.entry(id).map(|e| e.size)
    }

    /// Bounds of `id` in stack coordinates as of the last layout pass.
    pub fn bounds(&self, id: NodeId) -> Option<Rect> {
        self.entry(id).map(Entry::bounds)
    }

    /// Flags of `id`.
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        self.entry(id).map(|e| e.flags)
    }

    /// Update the flags of `id`. Unknown ids are ignored.
    ///
    /// A change of flags damages the node's bounds but never moves anything.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let entry = &mut self.entries[index];
        if entry.flags != flags {
            entry.flags = flags;
            let bounds = entry.bounds();
            self.damage.add_rect(bounds);
        }
    }

    /// Shared access to the node behind `id`.
    pub fn node(&self, id: NodeId) -> Option<&dyn Node> {
        self.entry(id).map(|e| &*e.node)
    }

    /// The node behind `id`, if it is a `T`.
    pub fn node_as<T: Node>(&self, id: NodeId) -> Option<&T> {
        let node: &dyn Any = self.node(id)?;
        node.downcast_ref::<T>()
    }

    /// Extent of the laid-out content: the widest node by the bottom edge of
    /// the last node. Trailing spacing is not included.
    pub fn content_size(&self) -> Size {
        let width = self
            .entries
            .iter()
            .map(|e| e.size.width)
            .fold(0.0, f64::max);
        let height = self
            .entries
            .last()
            .map_or(0.0, |e| e.origin.y + e.size.height);
        Size::new(width, height)
    }

    fn index_of(&self, id: NodeId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    fn entry(&self, id: NodeId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }
}
