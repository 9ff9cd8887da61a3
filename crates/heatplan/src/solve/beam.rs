//! Beam search over anchor placements.
//!
//! Anchors are placed one at a time in priority order. Each partial
//! solution branches into the top scoring windows for the next item,
//! then the beam is pruned back to [`SolverConfig::beam_width`] branches.
//! Committed placements block their footprint and emit attraction and
//! repulsion fields that bias every later item, so the search trades off
//! early greed against late fit. Pruning sorts branches by score with a
//! stable sort over deterministic candidates, so equal inputs give equal
//! layouts.
use tracing::{info, warn};

use crate::error::Result;
use crate::field::emitter::{compute_dynamic_fields, FieldEmitter};
use crate::field::mask::{CollisionMask, SwingClearance};
use crate::fixture::{FixtureKind, WishItem};
use crate::layers::StaticLayers;
use crate::room::Room;
use crate::solve::fillers::fill_gaps;
use crate::solve::volume::{SolveDebug, SolveResult, Volume};
use crate::solve::SolverConfig;

/// Score written over hard-blocked cells before the window scan.
pub const HARD_MASK_PENALTY: f32 = -10_000.0;
/// Scale applied to accumulated soft-penalty cells.
pub const SOFT_PENALTY_SCALE: f32 = 100.0;
/// Windows scoring at or below this are discarded as unplaceable.
pub const MIN_CANDIDATE_SCORE: f32 = -5_000.0;

/// A scored window for one item, not yet committed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementCandidate {
    pub position: i32,
    pub score: f32,
    pub kind: FixtureKind,
    pub width_cm: u32,
}

/// One branch of the beam: the placements committed so far plus the
/// mask and emitters they imply. Branching clones the parent.
#[derive(Clone, Debug)]
pub struct PartialSolution {
    pub placements: Vec<PlacementCandidate>,
    pub total_score: f32,
    pub mask: CollisionMask,
    pub emitters: Vec<FieldEmitter>,
}

impl PartialSolution {
    fn empty(span_cm: u32) -> Self {
        Self {
            placements: Vec::new(),
            total_score: 0.0,
            mask: CollisionMask::new(span_cm),
            emitters: Vec::new(),
        }
    }

    fn branch(&self, candidate: PlacementCandidate) -> Self {
        let mut child = self.clone();
        child.placements.push(candidate);
        child.total_score += candidate.score;
        child.mask.mark_occupied(
            candidate.position,
            candidate.position + candidate.width_cm as i32,
            Some(SwingClearance::default()),
        );
        child
            .emitters
            .push(FieldEmitter::new(candidate.position, candidate.width_cm, candidate.kind));
        child
    }
}

/// Places a wishlist along a single straight wall span.
#[derive(Clone, Debug)]
pub struct BeamSolver {
    room: Room,
    config: SolverConfig,
    layers: StaticLayers,
}

impl BeamSolver {
    /// Creates a solver for `room`, precomputing its static layers.
    ///
    /// Returns an error if the room or configuration fails validation.
    pub fn try_new(room: Room, config: SolverConfig) -> Result<Self> {
        room.validate()?;
        config.validate()?;
        let layers = StaticLayers::build(&room);
        Ok(Self {
            room,
            config,
            layers,
        })
    }

    /// Creates a solver without validating, see [`BeamSolver::try_new`].
    pub fn new(room: Room, config: SolverConfig) -> Self {
        debug_assert!(room.validate().is_ok());
        debug_assert!(config.validate().is_ok());
        let layers = StaticLayers::build(&room);
        Self {
            room,
            config,
            layers,
        }
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Precomputed static layers, exposed for inspection and rendering.
    pub fn static_layers(&self) -> &StaticLayers {
        &self.layers
    }

    /// Places the wishlist along the span.
    ///
    /// Anchors run through beam search in priority order; remaining gaps
    /// are packed with fillers unless [`SolverConfig::skip_fillers`] is
    /// set. A wall where some anchor has no valid window yields empty
    /// volumes and a diagnostic in [`SolveDebug::infeasible`] rather than
    /// an error.
    pub fn solve(&self, wishlist: &[WishItem]) -> SolveResult {
        let mut anchors: Vec<WishItem> = wishlist
            .iter()
            .copied()
            .filter(|item| item.kind.is_anchor())
            .collect();
        anchors.sort_by_key(|item| item.kind.anchor_priority());
        let filler_pool: Vec<WishItem> = wishlist
            .iter()
            .copied()
            .filter(|item| item.kind.is_filler())
            .collect();

        info!(
            "Placing {} anchors and {} fillers over {}cm.",
            anchors.len(),
            filler_pool.len(),
            self.room.width_cm
        );

        let mut beam = vec![PartialSolution::empty(self.room.width_cm)];
        for item in &anchors {
            beam = self.expand_beam(&beam, item);
            if beam.is_empty() {
                warn!("No valid placement for {}; wall left empty.", item.kind);
                return SolveResult {
                    volumes: Vec::new(),
                    debug: SolveDebug {
                        beam_final_size: 0,
                        best_score: 0.0,
                        infeasible: Some(format!("no valid placement for {}", item.kind)),
                    },
                };
            }
            info!("Placed {}, beam holds {} branches.", item.kind, beam.len());
        }

        // Pruning sorts the beam, so the first branch is the winner.
        let best = &beam[0];
        let mut volumes: Vec<Volume> = best
            .placements
            .iter()
            .map(|p| Volume::new(p.position, p.width_cm, p.kind).with_score(p.score))
            .collect();
        if !self.config.skip_fillers {
            volumes.extend(fill_gaps(&volumes, &filler_pool, self.room.width_cm));
        }
        volumes.sort_by_key(|v| v.x);

        SolveResult {
            volumes,
            debug: SolveDebug {
                beam_final_size: beam.len(),
                best_score: best.total_score,
                infeasible: None,
            },
        }
    }

    fn expand_beam(&self, beam: &[PartialSolution], item: &WishItem) -> Vec<PartialSolution> {
        let mut children = Vec::new();
        for solution in beam {
            for candidate in self.generate_candidates(item, solution) {
                children.push(solution.branch(candidate));
            }
        }
        children.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
        children.truncate(self.config.beam_width);
        children
    }

    fn generate_candidates(
        &self,
        item: &WishItem,
        solution: &PartialSolution,
    ) -> Vec<PlacementCandidate> {
        let mut combined = self.layers.combined_for(item.kind);
        if !solution.emitters.is_empty() {
            combined += &compute_dynamic_fields(&solution.emitters, item.kind, self.room.width_cm);
        }
        combined.apply_mask(solution.mask.blocking(), HARD_MASK_PENALTY);
        combined.add_scaled(solution.mask.soft(), -SOFT_PENALTY_SCALE);

        combined
            .find_top_k_positions(item.width_cm, self.config.candidates_per_item)
            .into_iter()
            .filter(|(position, score)| {
                solution.mask.is_valid_placement(*position, item.width_cm)
                    && *score > MIN_CANDIDATE_SCORE
            })
            .map(|(position, score)| PlacementCandidate {
                position,
                score,
                kind: item.kind,
                width_cm: item.width_cm,
            })
            .collect()
    }
}
