//! Per-call search state
//!
//! [`SearchContext`] bundles the transposition table, the killer and history
//! heuristics and the search counters. One context is created for each
//! analysis call and threaded through the recursion by `&mut`; nothing here
//! is shared between calls.

use crate::constants::{MAX_KILLERS, MAX_PLY};
use crate::error::{EngineError, EngineResult};
use crate::hash::TranspositionTable;
use shakmaty::Move;
use smallvec::SmallVec;

/// Up to two cutoff moves per ply, oldest first
#[derive(Debug)]
pub struct KillerTable {
    slots: Vec<SmallVec<[Move; MAX_KILLERS]>>,
}

impl Default for KillerTable {
    fn default() -> Self {
        Self {
            slots: vec![SmallVec::new(); MAX_PLY],
        }
    }
}

impl KillerTable {
    /// Record a cutoff move at `ply` (ignored once both slots are taken)
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PlyLimit`] if `ply` is beyond the table.
    pub fn record(&mut self, ply: usize, mv: &Move) -> EngineResult<()> {
        let slot = self.slots.get_mut(ply).ok_or(EngineError::PlyLimit {
            ply,
            limit: MAX_PLY,
        })?;

        if slot.len() < MAX_KILLERS && !slot.contains(mv) {
            slot.push(mv.clone());
        }
        Ok(())
    }

    /// Killer slot index of `mv` in the first ply that holds it
    pub fn slot_of(&self, mv: &Move) -> Option<usize> {
        self.slots
            .iter()
            .find_map(|killers| killers.iter().position(|k| k == mv))
    }

    pub fn at(&self, ply: usize) -> &[Move] {
        self.slots.get(ply).map(|killers| killers.as_slice()).unwrap_or(&[])
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(SmallVec::clear);
    }
}

/// History heuristic indexed by (from, to)
#[derive(Debug)]
pub struct HistoryTable {
    table: Box<[[u32; 64]; 64]>,
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self {
            table: Box::new([[0; 64]; 64]),
        }
    }
}

impl HistoryTable {
    /// Reward a move that caused a cutoff at `depth` with depth²
    pub fn reward(&mut self, mv: &Move, depth: i32) {
        if let Some((from, to)) = squares(mv) {
            let bonus = (depth.max(0) as u32).pow(2);
            self.table[from][to] = self.table[from][to].saturating_add(bonus);
        }
    }

    pub fn score(&self, mv: &Move) -> u32 {
        squares(mv).map_or(0, |(from, to)| self.table[from][to])
    }

    pub fn clear(&mut self) {
        for row in self.table.iter_mut() {
            row.fill(0);
        }
    }
}

fn squares(mv: &Move) -> Option<(usize, usize)> {
    mv.from().map(|from| (from as usize, mv.to() as usize))
}

/// Counters reported with every analysis
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub tt_hits: u64,
    pub beta_cutoffs: u64,
}

/// All mutable state of one analysis call
#[derive(Debug)]
pub struct SearchContext {
    pub tt: TranspositionTable,
    pub killers: KillerTable,
    pub history: HistoryTable,
    pub stats: SearchStats,
    pub quiescence_horizon: i32,
}

impl SearchContext {
    pub fn new(tt_capacity: usize, quiescence_horizon: i32) -> Self {
        Self {
            tt: TranspositionTable::new(tt_capacity),
            killers: KillerTable::default(),
            history: HistoryTable::default(),
            stats: SearchStats::default(),
            quiescence_horizon,
        }
    }

    /// Reset every table and counter
    pub fn reset(&mut self) {
        self.tt.clear();
        self.killers.clear();
        self.history.clear();
        self.stats = SearchStats::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn moves(ucis: &[&str]) -> Vec<Move> {
        let board = Board::default();
        ucis.iter().map(|u| board.parse_uci(u).unwrap()).collect()
    }

    #[test]
    fn test_killers_capped_at_two_without_duplicates() {
        let mut killers = KillerTable::default();
        let mv = moves(&["e2e4", "d2d4", "g1f3"]);

        killers.record(3, &mv[0]).unwrap();
        killers.record(3, &mv[0]).unwrap();
        killers.record(3, &mv[1]).unwrap();
        killers.record(3, &mv[2]).unwrap();

        assert_eq!(killers.at(3), &mv[..2]);
        assert_eq!(killers.slot_of(&mv[1]), Some(1));
        assert_eq!(killers.slot_of(&mv[2]), None);
    }

    #[test]
    fn test_killer_ply_out_of_range() {
        let mut killers = KillerTable::default();
        let mv = moves(&["e2e4"]);
        let err = killers.record(MAX_PLY, &mv[0]).unwrap_err();
        assert!(matches!(err, EngineError::PlyLimit { .. }));
        assert!(killers.at(MAX_PLY).is_empty());
    }

    #[test]
    fn test_history_accumulates_depth_squared() {
        let mut history = HistoryTable::default();
        let mv = moves(&["g1f3", "b1c3"]);

        history.reward(&mv[0], 3);
        history.reward(&mv[0], 2);

        assert_eq!(history.score(&mv[0]), 13);
        assert_eq!(history.score(&mv[1]), 0);

        history.clear();
        assert_eq!(history.score(&mv[0]), 0);
    }

    #[test]
    fn test_context_reset_clears_everything() {
        let mut ctx = SearchContext::new(16, 4);
        let mv = moves(&["e2e4"]);
        ctx.killers.record(0, &mv[0]).unwrap();
        ctx.history.reward(&mv[0], 4);
        ctx.stats.nodes = 99;

        ctx.reset();

        assert!(ctx.killers.at(0).is_empty());
        assert_eq!(ctx.history.score(&mv[0]), 0);
        assert_eq!(ctx.stats, SearchStats::default());
        assert!(ctx.tt.is_empty());
    }
}
