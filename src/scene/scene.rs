use log::debug;

use crate::forces::ForceCreator;
use crate::objects::body::Body;

/// Stable identifier for a body inside a scene. IDs are handed out at
/// insertion and never reused, so an ID held across a removal simply stops
/// resolving instead of aliasing a different body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(u64);

/// The scene's body storage, passed to force creators each tick.
///
/// Bodies keep their insertion order; index-based access is positional and
/// panics when out of bounds (programmer error), while ID-based access
/// degrades to `None` for pruned bodies.
#[derive(Debug, Default)]
pub struct Bodies {
    slots: Vec<(BodyId, Body)>,
}

impl Bodies {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The body at `index`. Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &Body {
        &self.slots[index].1
    }

    /// The body at `index`, mutably. Panics if `index` is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> &mut Body {
        &mut self.slots[index].1
    }

    /// The ID of the body at `index`. Panics if `index` is out of bounds.
    pub fn id_at(&self, index: usize) -> BodyId {
        self.slots[index].0
    }

    pub fn by_id(&self, id: BodyId) -> Option<&Body> {
        self.position(id).map(|i| &self.slots[i].1)
    }

    pub fn by_id_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.position(id).map(|i| &mut self.slots[i].1)
    }

    /// Resolves two distinct IDs to mutable bodies at once.
    /// Returns `None` if either ID no longer resolves.
    ///
    /// Panics if both IDs refer to the same body.
    pub fn pair_mut(&mut self, a: BodyId, b: BodyId) -> Option<(&mut Body, &mut Body)> {
        let i = self.position(a)?;
        let j = self.position(b)?;
        assert_ne!(i, j, "pair_mut requires two distinct bodies");
        if i < j {
            let (left, right) = self.slots.split_at_mut(j);
            Some((&mut left[i].1, &mut right[0].1))
        } else {
            let (left, right) = self.slots.split_at_mut(i);
            Some((&mut right[0].1, &mut left[j].1))
        }
    }

    /// Like `pair_mut`, but also returns `None` when either body is already
    /// marked for removal: tombstoned bodies are excluded from further
    /// force and collision application within the tick.
    pub fn live_pair_mut(&mut self, a: BodyId, b: BodyId) -> Option<(&mut Body, &mut Body)> {
        let (body_a, body_b) = self.pair_mut(a, b)?;
        if body_a.is_removed() || body_b.is_removed() {
            return None;
        }
        Some((body_a, body_b))
    }

    /// Like `by_id_mut`, but `None` for a tombstoned body.
    pub fn live_by_id_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.by_id_mut(id).filter(|body| !body.is_removed())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.slots.iter().map(|(_, body)| body)
    }

    fn position(&self, id: BodyId) -> Option<usize> {
        self.slots.iter().position(|(slot_id, _)| *slot_id == id)
    }

    fn push(&mut self, id: BodyId, body: Body) {
        self.slots.push((id, body));
    }

    fn remove_at(&mut self, index: usize) -> Body {
        self.slots.remove(index).1
    }
}

/// Owns the live bodies and the registered force creators, and drives the
/// per-frame simulation step.
#[derive(Default)]
pub struct Scene {
    bodies: Bodies,
    force_creators: Vec<Box<dyn ForceCreator>>,
    next_id: u64,
}

impl Scene {
    /// Creates a new, empty scene.
    pub fn new() -> Self {
        Scene {
            bodies: Bodies::default(),
            force_creators: Vec::new(),
            next_id: 0,
        }
    }

    /// Appends a body to the live-body sequence and returns its stable ID.
    /// Insertion order determines index order for positional access.
    pub fn add_body(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(id, body);
        id
    }

    pub fn num_bodies(&self) -> usize {
        self.bodies.len()
    }

    /// The body at `index`. Panics if `index` is out of bounds.
    pub fn get_body(&self, index: usize) -> &Body {
        self.bodies.get(index)
    }

    /// The body at `index`, mutably. Panics if `index` is out of bounds.
    pub fn get_body_mut(&mut self, index: usize) -> &mut Body {
        self.bodies.get_mut(index)
    }

    /// The ID of the body at `index`. Panics if `index` is out of bounds.
    pub fn body_id_at(&self, index: usize) -> BodyId {
        self.bodies.id_at(index)
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.by_id(id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.by_id_mut(id)
    }

    /// Marks the body at `index` for removal; it is pruned at the next tick
    /// boundary. Panics if `index` is out of bounds.
    pub fn remove_body(&mut self, index: usize) {
        self.bodies.get_mut(index).remove();
    }

    /// Registers a force creator, run once per tick in registration order.
    /// The creator is dropped when any body it watches is pruned.
    pub fn add_force_creator(&mut self, creator: Box<dyn ForceCreator>) {
        self.force_creators.push(creator);
    }

    /// Registers a closure-based force creator together with the bodies it
    /// watches: when any of them is pruned, the creator goes with it.
    pub fn add_bodies_force_creator<F>(&mut self, forcer: F, watched: Vec<BodyId>)
    where
        F: FnMut(&mut Bodies) + 'static,
    {
        self.add_force_creator(Box::new(FnForceCreator {
            forcer: Box::new(forcer),
            watched,
        }));
    }

    /// Advances the simulation by one step.
    ///
    /// 1. Every registered force creator runs once, in registration order.
    ///    Handlers may accumulate forces/impulses and mark bodies for
    ///    removal, but removal itself is deferred.
    /// 2. One scan over the body sequence: tombstoned bodies are pruned
    ///    (dropping every creator that watches them first), live bodies are
    ///    integrated. After a removal the same index is re-checked, since
    ///    the next element shifted into it.
    pub fn tick(&mut self, dt: f64) {
        for creator in &mut self.force_creators {
            creator.apply(&mut self.bodies);
        }

        let mut i = 0;
        while i < self.bodies.len() {
            if self.bodies.get(i).is_removed() {
                let id = self.bodies.id_at(i);
                debug!("pruning body {:?} and the creators watching it", id);
                self.force_creators
                    .retain(|creator| !creator.watched().contains(&id));
                self.bodies.remove_at(i);
            } else {
                self.bodies.get_mut(i).tick(dt);
                i += 1;
            }
        }
    }
}

struct FnForceCreator {
    forcer: Box<dyn FnMut(&mut Bodies)>,
    watched: Vec<BodyId>,
}

impl ForceCreator for FnForceCreator {
    fn apply(&mut self, bodies: &mut Bodies) {
        (self.forcer)(bodies);
    }

    fn watched(&self) -> &[BodyId] {
        &self.watched
    }
}
