//! Unit tests for pf-behavior.

use pf_core::{AgentId, AgentRng, GridPos, Tick};
use pf_world::World;

use crate::{Coordination, Forager, Observation, StepContext};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Records every call so tests can inspect what an agent reported.
#[derive(Default)]
struct Recorder {
    received:  Vec<(AgentId, Vec<Observation>)>,
    absorbed:  Vec<(AgentId, Vec<Observation>)>,
    intention: Option<GridPos>,
}

impl Coordination for Recorder {
    fn receive_info(&mut self, agent: AgentId, log: &[Observation]) {
        self.received.push((agent, log.to_vec()));
    }

    fn query_intention(&self, _agent: AgentId) -> Option<GridPos> {
        self.intention
    }

    fn absorb(&mut self, agent: AgentId, observations: &[Observation]) {
        self.absorbed.push((agent, observations.to_vec()));
    }
}

/// 7×7 world with the base at (3, 3).
fn world() -> World {
    World::new(7, 7, GridPos::new(3, 3)).unwrap()
}

fn step(agent: &mut Forager, world: &mut World, coord: &mut dyn Coordination, rng: &mut AgentRng) {
    let mut ctx = StepContext::new(Tick::ZERO, world, coord, rng);
    agent.step(&mut ctx);
}

fn pos_of(world: &World, agent: &Forager) -> GridPos {
    world.agent_position(agent.id()).unwrap()
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement {
    use pf_grid::Grid;

    use super::*;
    use crate::closest_neighbour;

    #[test]
    fn closest_neighbour_moves_diagonally() {
        let grid = Grid::new(7, 7).unwrap();
        let next = closest_neighbour(&grid, GridPos::new(0, 0), GridPos::new(3, 3));
        assert_eq!(next, Some(GridPos::new(1, 1)));
    }

    #[test]
    fn closest_neighbour_ties_go_to_first_in_order() {
        // Four orthogonal neighbours sit at distance 1; (1, 2) is enumerated first.
        let grid = Grid::new(7, 7).unwrap();
        let next = closest_neighbour(&grid, GridPos::new(2, 2), GridPos::new(2, 2));
        assert_eq!(next, Some(GridPos::new(1, 2)));
    }

    #[test]
    fn closest_neighbour_on_single_cell_grid() {
        let grid = Grid::new(1, 1).unwrap();
        assert_eq!(closest_neighbour(&grid, GridPos::new(0, 0), GridPos::new(0, 0)), None);
    }
}

// ── Reactive ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reactive {
    use pf_world::{DeliveryRecord, ResourceKind};

    use super::*;
    use crate::{Archetype, NoCoordination};

    #[test]
    fn fetches_adjacent_crystal_and_delivers() {
        let mut w = world();
        w.spawn_structure(GridPos::new(0, 1)).unwrap();
        w.spawn_structure(GridPos::new(1, 0)).unwrap();
        w.spawn_resource(ResourceKind::Crystal, 10, GridPos::new(1, 1)).unwrap();

        let mut agent = Forager::new(Archetype::Reactive, AgentId(0), w.base_position());
        w.place_agent(agent.id(), GridPos::new(0, 0)).unwrap();
        let mut rng = AgentRng::new(1, agent.id());
        let mut coord = NoCoordination;

        // Only free neighbour holds the crystal.
        step(&mut agent, &mut w, &mut coord, &mut rng);
        assert_eq!(pos_of(&w, &agent), GridPos::new(1, 1));
        assert!(agent.carried().is_some());

        step(&mut agent, &mut w, &mut coord, &mut rng);
        assert_eq!(pos_of(&w, &agent), GridPos::new(2, 2));
        step(&mut agent, &mut w, &mut coord, &mut rng);
        assert_eq!(pos_of(&w, &agent), GridPos::new(3, 3));
        assert!(w.base.records().is_empty(), "delivery happens on the following tick");

        step(&mut agent, &mut w, &mut coord, &mut rng);
        assert_eq!(
            w.base.records(),
            &[DeliveryRecord { kind: ResourceKind::Crystal, utility: 10, position: GridPos::new(1, 1) }]
        );
        assert_eq!(agent.score(), 10);
        assert!(agent.carried().is_none());
        assert_ne!(pos_of(&w, &agent), GridPos::new(3, 3), "resumes exploring after delivery");
    }

    #[test]
    fn boxed_in_by_structures_stands_still() {
        let mut w = world();
        for p in [(0, 1), (1, 0), (1, 1)] {
            w.spawn_structure(p.into()).unwrap();
        }
        let mut agent = Forager::new(Archetype::Reactive, AgentId(0), w.base_position());
        w.place_agent(agent.id(), GridPos::new(0, 0)).unwrap();
        let mut rng = AgentRng::new(1, agent.id());

        step(&mut agent, &mut w, &mut NoCoordination, &mut rng);
        assert_eq!(pos_of(&w, &agent), GridPos::new(0, 0));
    }

    #[test]
    fn unplaced_agent_is_skipped() {
        let mut w = world();
        let mut agent = Forager::new(Archetype::Reactive, AgentId(4), w.base_position());
        let mut rng = AgentRng::new(1, agent.id());
        step(&mut agent, &mut w, &mut NoCoordination, &mut rng);
        assert!(w.agent_position(agent.id()).is_none());
    }
}

// ── State-based ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod state_based {
    use pf_world::ResourceKind;

    use super::*;
    use crate::{Directable, Goal, NoCoordination, StateBasedAgent};

    fn agent_at(w: &mut World, pos: GridPos) -> Forager {
        let a = Forager::StateBased(StateBasedAgent::new(AgentId(0), w.base_position()));
        w.place_agent(a.id(), pos).unwrap();
        a
    }

    fn inner(f: &Forager) -> &StateBasedAgent {
        match f {
            Forager::StateBased(a) => a,
            _ => unreachable!(),
        }
    }

    #[test]
    fn claims_on_sight_then_reports_at_base() {
        // A 3×1 corridor: agent, crystal, base.
        let mut w = World::new(3, 1, GridPos::new(2, 0)).unwrap();
        w.spawn_resource(ResourceKind::Crystal, 10, GridPos::new(1, 0)).unwrap();
        let mut agent = agent_at(&mut w, GridPos::new(0, 0));
        let mut rng = AgentRng::new(3, agent.id());
        let mut coord = Recorder::default();

        step(&mut agent, &mut w, &mut coord, &mut rng);
        assert_eq!(inner(&agent).goal, Goal::Transport);
        assert!(inner(&agent).has_visited(GridPos::new(1, 0)));
        assert_eq!(inner(&agent).log(), &[Observation::resource(ResourceKind::Crystal, GridPos::new(1, 0))]);

        step(&mut agent, &mut w, &mut coord, &mut rng);
        assert_eq!(pos_of(&w, &agent), GridPos::new(2, 0));

        step(&mut agent, &mut w, &mut coord, &mut rng);
        assert_eq!(agent.score(), 10);
        assert_eq!(
            coord.received,
            vec![(AgentId(0), vec![Observation::resource(ResourceKind::Crystal, GridPos::new(1, 0))])]
        );
        assert!(inner(&agent).log().is_empty(), "log drained after reporting");
        assert_eq!(inner(&agent).goal, Goal::Explore, "no intention ⇒ explore");
    }

    #[test]
    fn adopts_intention_after_delivery() {
        let mut w = World::new(3, 1, GridPos::new(2, 0)).unwrap();
        w.spawn_resource(ResourceKind::Metal, 20, GridPos::new(1, 0)).unwrap();
        let mut agent = agent_at(&mut w, GridPos::new(0, 0));
        let mut rng = AgentRng::new(3, agent.id());
        let mut coord = Recorder { intention: Some(GridPos::new(0, 0)), ..Default::default() };

        for _ in 0..3 {
            step(&mut agent, &mut w, &mut coord, &mut rng);
        }
        assert_eq!(agent.score(), 20);
        assert_eq!(inner(&agent).destination, Some(GridPos::new(0, 0)));
        assert_eq!(inner(&agent).goal, Goal::SeekResource);
    }

    #[test]
    fn follows_destination_and_collects() {
        let mut w = world();
        w.spawn_resource(ResourceKind::Metal, 20, GridPos::new(2, 2)).unwrap();
        let mut agent = agent_at(&mut w, GridPos::new(0, 0));
        if let Some(d) = agent.as_directable_mut() {
            d.set_destination(GridPos::new(2, 2));
        }
        let mut rng = AgentRng::new(3, agent.id());

        step(&mut agent, &mut w, &mut NoCoordination, &mut rng);
        assert_eq!(pos_of(&w, &agent), GridPos::new(1, 1));
        step(&mut agent, &mut w, &mut NoCoordination, &mut rng);
        assert_eq!(pos_of(&w, &agent), GridPos::new(2, 2));
        assert_eq!(inner(&agent).goal, Goal::Collect);

        step(&mut agent, &mut w, &mut NoCoordination, &mut rng);
        assert_eq!(agent.carried().map(|r| r.kind), Some(ResourceKind::Metal));
        assert_eq!(inner(&agent).goal, Goal::Transport);
    }

    #[test]
    fn empty_destination_falls_back_to_explore() {
        let mut w = world();
        let mut agent = agent_at(&mut w, GridPos::new(0, 0));
        if let Some(d) = agent.as_directable_mut() {
            d.set_destination(GridPos::new(1, 1));
        }
        let mut rng = AgentRng::new(3, agent.id());

        step(&mut agent, &mut w, &mut NoCoordination, &mut rng);
        assert_eq!(inner(&agent).goal, Goal::Collect);
        step(&mut agent, &mut w, &mut NoCoordination, &mut rng);
        assert_eq!(inner(&agent).goal, Goal::Explore);
        assert_eq!(inner(&agent).destination, None);
        assert!(agent.carried().is_none());
    }

    #[test]
    fn force_explore_keeps_destination() {
        let mut a = StateBasedAgent::new(AgentId(0), GridPos::new(3, 3));
        a.set_destination(GridPos::new(1, 1));
        a.force_explore();
        assert_eq!(a.goal, Goal::Explore);
        assert_eq!(a.destination, Some(GridPos::new(1, 1)));
    }
}

// ── Goal-based ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod goal_based {
    use pf_world::ResourceKind;

    use super::*;
    use crate::{Goal, GoalBasedAgent, NoCoordination};

    fn agent_at(w: &mut World, pos: GridPos) -> Forager {
        let a = Forager::GoalBased(GoalBasedAgent::new(AgentId(0), w.base_position()));
        w.place_agent(a.id(), pos).unwrap();
        a
    }

    fn inner(f: &Forager) -> &GoalBasedAgent {
        match f {
            Forager::GoalBased(a) => a,
            _ => unreachable!(),
        }
    }

    fn inner_mut(f: &mut Forager) -> &mut GoalBasedAgent {
        match f {
            Forager::GoalBased(a) => a,
            _ => unreachable!(),
        }
    }

    #[test]
    fn picks_up_resource_underfoot() {
        let mut w = world();
        w.spawn_resource(ResourceKind::Crystal, 10, GridPos::new(0, 0)).unwrap();
        let mut agent = agent_at(&mut w, GridPos::new(0, 0));
        let mut rng = AgentRng::new(5, agent.id());

        step(&mut agent, &mut w, &mut NoCoordination, &mut rng);
        assert!(agent.carried().is_some());
        assert_eq!(inner(&agent).goal, Goal::Transport);
        assert_eq!(pos_of(&w, &agent), GridPos::new(0, 0));
    }

    #[test]
    fn seek_without_destination_targets_nearest_lowest_id() {
        let mut w = world();
        w.spawn_resource(ResourceKind::Crystal, 10, GridPos::new(1, 0)).unwrap();
        w.spawn_resource(ResourceKind::Metal, 20, GridPos::new(5, 0)).unwrap();
        let mut agent = agent_at(&mut w, GridPos::new(3, 0));
        inner_mut(&mut agent).goal = Goal::SeekResource;
        let mut rng = AgentRng::new(5, agent.id());

        step(&mut agent, &mut w, &mut NoCoordination, &mut rng);
        assert_eq!(inner(&agent).destination, Some(GridPos::new(1, 0)));
        assert_eq!(inner(&agent).goal, Goal::SeekResource);
    }

    #[test]
    fn failed_collect_retargets() {
        let mut w = world();
        w.spawn_resource(ResourceKind::Metal, 20, GridPos::new(6, 6)).unwrap();
        let mut agent = agent_at(&mut w, GridPos::new(0, 0));
        {
            let a = inner_mut(&mut agent);
            a.goal = Goal::Collect;
        }
        let mut rng = AgentRng::new(5, agent.id());

        step(&mut agent, &mut w, &mut NoCoordination, &mut rng);
        assert_eq!(inner(&agent).destination, Some(GridPos::new(6, 6)));
        assert_eq!(inner(&agent).goal, Goal::SeekResource);
    }

    #[test]
    fn failed_collect_with_no_resources_explores() {
        let mut w = world();
        let mut agent = agent_at(&mut w, GridPos::new(0, 0));
        inner_mut(&mut agent).goal = Goal::Collect;
        let mut rng = AgentRng::new(5, agent.id());

        step(&mut agent, &mut w, &mut NoCoordination, &mut rng);
        assert_eq!(inner(&agent).goal, Goal::Explore);
        assert_eq!(inner(&agent).destination, None);
    }

    #[test]
    fn explore_logs_structures_on_new_cell() {
        // 2×1 grid: the only move is onto the structure.
        let mut w = World::new(2, 1, GridPos::new(0, 0)).unwrap();
        w.spawn_structure(GridPos::new(1, 0)).unwrap();
        let mut agent = agent_at(&mut w, GridPos::new(0, 0));
        let mut rng = AgentRng::new(5, agent.id());

        step(&mut agent, &mut w, &mut NoCoordination, &mut rng);
        assert_eq!(inner(&agent).log(), &[Observation::structure(GridPos::new(1, 0))]);
    }

    #[test]
    fn reports_and_adopts_intention_at_base() {
        // A 3×1 corridor: agent, crystal, base.
        let mut w = World::new(3, 1, GridPos::new(2, 0)).unwrap();
        w.spawn_resource(ResourceKind::Crystal, 10, GridPos::new(1, 0)).unwrap();
        let mut agent = agent_at(&mut w, GridPos::new(0, 0));
        let mut rng = AgentRng::new(5, agent.id());
        let mut coord = Recorder { intention: Some(GridPos::new(0, 0)), ..Default::default() };
        let sighting = Observation::resource(ResourceKind::Crystal, GridPos::new(1, 0));

        // Move onto the crystal and log it; claim it; walk home.
        step(&mut agent, &mut w, &mut coord, &mut rng);
        assert_eq!(inner(&agent).log(), &[sighting]);
        step(&mut agent, &mut w, &mut coord, &mut rng);
        assert_eq!(inner(&agent).goal, Goal::Transport);
        step(&mut agent, &mut w, &mut coord, &mut rng);
        assert_eq!(pos_of(&w, &agent), GridPos::new(2, 0));
        assert!(coord.received.is_empty(), "nothing reported before delivery");

        step(&mut agent, &mut w, &mut coord, &mut rng);
        assert_eq!(agent.score(), 10);
        assert_eq!(coord.received, vec![(AgentId(0), vec![sighting])]);
        assert!(inner(&agent).log().is_empty(), "log drained after reporting");
        assert_eq!(inner(&agent).destination, Some(GridPos::new(0, 0)));
        assert_eq!(inner(&agent).goal, Goal::SeekResource);
    }

    #[test]
    fn explores_after_delivery_without_intention() {
        let mut w = World::new(2, 1, GridPos::new(1, 0)).unwrap();
        w.spawn_resource(ResourceKind::Metal, 20, GridPos::new(1, 0)).unwrap();
        let mut agent = agent_at(&mut w, GridPos::new(1, 0));
        let mut rng = AgentRng::new(5, agent.id());
        let mut coord = Recorder::default();

        step(&mut agent, &mut w, &mut coord, &mut rng);
        assert_eq!(inner(&agent).goal, Goal::Transport);
        step(&mut agent, &mut w, &mut coord, &mut rng);
        assert_eq!(agent.score(), 20);
        assert_eq!(coord.received, vec![(AgentId(0), vec![])]);
        assert_eq!(inner(&agent).goal, Goal::Explore);
        assert_eq!(inner(&agent).destination, None);
    }
}

// ── Cooperative ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod cooperative {
    use pf_world::ResourceKind;

    use super::*;
    use crate::{CooperativeAgent, NoCoordination, ObservationKind};

    fn agent_at(w: &mut World, pos: GridPos) -> Forager {
        let a = Forager::Cooperative(CooperativeAgent::new(AgentId(0), w.base_position()));
        w.place_agent(a.id(), pos).unwrap();
        a
    }

    fn log(f: &Forager) -> Vec<Observation> {
        f.observation_log().unwrap().to_vec()
    }

    #[test]
    fn analyze_collect_deliver_flush() {
        let mut w = world();
        w.spawn_resource(ResourceKind::Crystal, 10, GridPos::new(0, 0)).unwrap();
        let mut agent = agent_at(&mut w, GridPos::new(0, 0));
        let mut rng = AgentRng::new(9, agent.id());
        let mut coord = Recorder::default();

        step(&mut agent, &mut w, &mut coord, &mut rng);
        assert_eq!(agent.destination(), Some(GridPos::new(0, 0)));
        assert_eq!(log(&agent), vec![Observation::resource(ResourceKind::Crystal, GridPos::new(0, 0))]);

        step(&mut agent, &mut w, &mut coord, &mut rng);
        assert!(agent.carried().is_some());
        assert_eq!(agent.destination(), None);

        // (1,1), (2,2), (3,3), then deliver.
        for _ in 0..4 {
            step(&mut agent, &mut w, &mut coord, &mut rng);
        }
        assert_eq!(agent.score(), 10);
        assert_eq!(
            coord.absorbed,
            vec![(AgentId(0), vec![Observation::resource(ResourceKind::Crystal, GridPos::new(0, 0))])]
        );
        let remaining = log(&agent);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].kind, ObservationKind::Explored);
        assert_eq!(remaining[0].position, pos_of(&w, &agent));
    }

    #[test]
    fn collects_first_resource_on_target_cell() {
        let mut w = world();
        w.spawn_resource(ResourceKind::Crystal, 10, GridPos::new(6, 6)).unwrap();
        w.spawn_resource(ResourceKind::Metal, 20, GridPos::new(6, 6)).unwrap();
        let mut agent = agent_at(&mut w, GridPos::new(6, 6));
        let mut rng = AgentRng::new(9, agent.id());

        step(&mut agent, &mut w, &mut NoCoordination, &mut rng);
        step(&mut agent, &mut w, &mut NoCoordination, &mut rng);
        // Collection takes the first unclaimed resource on the cell.
        assert_eq!(agent.carried().map(|r| r.kind), Some(ResourceKind::Crystal));
    }

    #[test]
    fn explore_marks_cells() {
        let mut w = world();
        let mut agent = agent_at(&mut w, GridPos::new(0, 0));
        let mut rng = AgentRng::new(9, agent.id());

        step(&mut agent, &mut w, &mut NoCoordination, &mut rng);
        assert_eq!(log(&agent), vec![Observation::explored(pos_of(&w, &agent))]);
    }

    #[test]
    fn destination_cleared_when_resource_taken() {
        let mut w = world();
        let id = w.spawn_resource(ResourceKind::Crystal, 10, GridPos::new(0, 0)).unwrap();
        let mut agent = agent_at(&mut w, GridPos::new(0, 0));
        let mut rng = AgentRng::new(9, agent.id());

        step(&mut agent, &mut w, &mut NoCoordination, &mut rng);
        assert_eq!(agent.destination(), Some(GridPos::new(0, 0)));
        w.claim(id);
        step(&mut agent, &mut w, &mut NoCoordination, &mut rng);
        assert_eq!(agent.destination(), None);
        assert!(agent.carried().is_none());
    }

    #[test]
    fn revisits_do_not_duplicate_log_entries() {
        // 2×1 grid: the agent can only shuttle between the base and the
        // structure cell.
        let mut w = World::new(2, 1, GridPos::new(0, 0)).unwrap();
        w.spawn_structure(GridPos::new(1, 0)).unwrap();
        let mut agent = agent_at(&mut w, GridPos::new(0, 0));
        let mut rng = AgentRng::new(9, agent.id());

        for _ in 0..6 {
            step(&mut agent, &mut w, &mut NoCoordination, &mut rng);
        }
        assert_eq!(
            log(&agent),
            vec![
                Observation::explored(GridPos::new(1, 0)),
                Observation::structure(GridPos::new(1, 0)),
                Observation::explored(GridPos::new(0, 0)),
            ]
        );
    }
}

// ── Forager ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod forager {
    use super::*;
    use crate::Archetype;

    #[test]
    fn archetype_round_trip() {
        for (i, arch) in Archetype::ALL.into_iter().enumerate() {
            let f = Forager::new(arch, AgentId(i as u32), GridPos::new(0, 0));
            assert_eq!(f.archetype(), arch);
            assert_eq!(arch.index(), i);
            assert_eq!(f.id(), AgentId(i as u32));
        }
    }

    #[test]
    fn labels() {
        let labels: Vec<_> = Archetype::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(labels, ["reactive", "state_based", "goal_based", "cooperative"]);
    }

    #[test]
    fn only_planning_agents_are_directable() {
        let base = GridPos::new(0, 0);
        let mut r = Forager::new(Archetype::Reactive, AgentId(0), base);
        let mut s = Forager::new(Archetype::StateBased, AgentId(1), base);
        let mut g = Forager::new(Archetype::GoalBased, AgentId(2), base);
        let mut c = Forager::new(Archetype::Cooperative, AgentId(3), base);
        assert!(r.as_directable_mut().is_none());
        assert!(c.as_directable_mut().is_none());
        assert_eq!(s.as_directable_mut().map(|d| d.agent_id()), Some(AgentId(1)));
        assert_eq!(g.as_directable_mut().map(|d| d.agent_id()), Some(AgentId(2)));
    }

    #[test]
    fn reactive_keeps_no_log() {
        let f = Forager::new(Archetype::Reactive, AgentId(0), GridPos::new(0, 0));
        assert!(f.observation_log().is_none());
        let g = Forager::new(Archetype::GoalBased, AgentId(0), GridPos::new(0, 0));
        assert_eq!(g.observation_log(), Some(&[][..]));
    }

    #[test]
    fn observations_distinguish_kind() {
        let p = GridPos::new(1, 1);
        assert_ne!(Observation::structure(p), Observation::explored(p));
        assert!(Observation::structure(p).is_structure());
        assert!(Observation::explored(p).is_explored());
    }
}
