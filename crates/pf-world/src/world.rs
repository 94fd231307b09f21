//! `World` — the grid plus the entity arenas it refers to.
//!
//! # Ownership
//!
//! The grid owns the placement of every physical entity.  Resource data lives
//! in an arena of `Option<Resource>` slots indexed by `ResourceId`:
//!
//! ```text
//! Some(resource)  → unclaimed, on the grid
//! None            → claimed; the Resource value now belongs to an agent
//!                   (and later to the base, which records and drops it)
//! ```
//!
//! A vacated slot is never refilled, so a claim can happen at most once per
//! resource.  Structures are never destroyed or relocated.

use pf_core::{AgentId, GridPos, ResourceId, StructureId};
use pf_grid::{Grid, GridResult, Occupant};

use crate::{Base, DeliveryRecord, Resource, ResourceKind, Structure};

/// The shared physical state every agent reads and mutates during its step.
#[derive(Debug, Clone)]
pub struct World {
    /// Spatial placement of every entity.
    pub grid: Grid,

    /// Delivery base and ledger.
    pub base: Base,

    resources:  Vec<Option<Resource>>,
    structures: Vec<Structure>,
}

impl World {
    /// An empty `width × height` world with the base placed at `base_position`.
    pub fn new(width: u32, height: u32, base_position: GridPos) -> GridResult<Self> {
        let mut grid = Grid::new(width, height)?;
        grid.place(Occupant::Base, base_position)?;
        Ok(Self {
            grid,
            base: Base::new(base_position),
            resources: Vec::new(),
            structures: Vec::new(),
        })
    }

    #[inline]
    pub fn base_position(&self) -> GridPos {
        self.base.position()
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Create a resource and place it on `position`.
    pub fn spawn_resource(
        &mut self,
        kind:     ResourceKind,
        utility:  u32,
        position: GridPos,
    ) -> GridResult<ResourceId> {
        let id = ResourceId::try_from(self.resources.len())?;
        self.grid.place(Occupant::Resource(id), position)?;
        self.resources.push(Some(Resource::new(id, kind, utility, position)));
        Ok(id)
    }

    /// Create a structure and place it on `position`.
    pub fn spawn_structure(&mut self, position: GridPos) -> GridResult<StructureId> {
        let id = StructureId::try_from(self.structures.len())?;
        self.grid.place(Occupant::Structure(id), position)?;
        self.structures.push(Structure::new(id, position));
        Ok(id)
    }

    /// Put an agent on the grid.
    pub fn place_agent(&mut self, agent: AgentId, position: GridPos) -> GridResult<()> {
        self.grid.place(Occupant::Agent(agent), position)
    }

    #[inline]
    pub fn agent_position(&self, agent: AgentId) -> Option<GridPos> {
        self.grid.position_of(Occupant::Agent(agent))
    }

    /// Move an agent; `false` if the target is outside the grid.
    #[inline]
    pub fn move_agent(&mut self, agent: AgentId, position: GridPos) -> bool {
        self.grid.move_to(Occupant::Agent(agent), position)
    }

    // ── Resource queries ──────────────────────────────────────────────────

    /// Number of resources ever spawned (claimed ones included).
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// The resource if it is still unclaimed.
    pub fn resource(&self, id: ResourceId) -> Option<&Resource> {
        self.resources.get(id.index()).and_then(Option::as_ref)
    }

    /// `true` once `id` has been picked up.  Unknown ids report `false`.
    pub fn is_claimed(&self, id: ResourceId) -> bool {
        matches!(self.resources.get(id.index()), Some(None))
    }

    /// Every resource still lying on the grid, in id order.
    pub fn unclaimed_resources(&self) -> impl Iterator<Item = &Resource> + '_ {
        self.resources
            .iter()
            .filter_map(Option::as_ref)
            .filter(|r| !r.is_claimed())
    }

    /// Unclaimed resources on `position`, in cell insertion order.
    pub fn unclaimed_at(&self, position: GridPos) -> impl Iterator<Item = &Resource> + '_ {
        self.grid
            .contents(position)
            .iter()
            .filter_map(|o| o.as_resource())
            .filter_map(|id| self.resource(id))
            .filter(|r| !r.is_claimed())
    }

    // ── Claim / deliver ───────────────────────────────────────────────────

    /// Atomically claim resource `id`: mark it claimed, take it off the grid,
    /// and hand the value to the caller.
    ///
    /// Returns `None` if it was already claimed or does not exist.
    pub fn claim(&mut self, id: ResourceId) -> Option<Resource> {
        let slot = self.resources.get_mut(id.index())?;
        let mut resource = slot.take()?;
        if !resource.mark_claimed() {
            *slot = Some(resource);
            return None;
        }
        self.grid.remove(Occupant::Resource(id));
        tracing::debug!(resource = %id, kind = %resource.kind, at = %resource.position, "resource claimed");
        Some(resource)
    }

    /// Claim the first unclaimed resource on `position`.
    pub fn claim_first_at(&mut self, position: GridPos) -> Option<Resource> {
        let id = self.unclaimed_at(position).next()?.id;
        self.claim(id)
    }

    /// Hand a carried resource to the base.  See [`Base::deliver`].
    pub fn deliver(&mut self, resource: Resource) -> Option<DeliveryRecord> {
        let record = self.base.deliver(resource, &mut self.grid)?;
        tracing::debug!(kind = %record.kind, utility = record.utility, "resource delivered");
        Some(record)
    }

    // ── Structures ────────────────────────────────────────────────────────

    pub fn structures(&self) -> &[Structure] {
        &self.structures
    }

    pub fn structure(&self, id: StructureId) -> Option<&Structure> {
        self.structures.get(id.index())
    }

    /// Register `agent` as a carrier of structure `id`.
    ///
    /// Returns `false` for an unknown structure or a repeat carrier.
    pub fn attach_carrier(&mut self, id: StructureId, agent: AgentId) -> bool {
        self.structures
            .get_mut(id.index())
            .is_some_and(|s| s.add_carrier(agent))
    }
}
