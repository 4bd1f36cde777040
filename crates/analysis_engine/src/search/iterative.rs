//! Iterative deepening search
//!
//! Implements iterative deepening to enable time management and progressive
//! search depth increases. The clock is only read between completed depths.

use super::context::SearchContext;
use super::root::{search_root, RootOutcome};
use crate::board::Board;
use crate::book::OpeningBook;
use crate::config::EngineConfig;
use crate::constants::{BOOK_EVALUATION_CP, MAX_SEARCH_DEPTH};
use crate::error::EngineResult;
use crate::types::{AnalysisResult, AnalysisSource, MoveResult};
use instant::Instant;
use tracing::{debug, info, warn};

/// Position analyzer
///
/// Holds only immutable configuration; every call to [`Analyzer::analyze`]
/// builds its own search tables, so one analyzer can serve many threads.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: EngineConfig,
    book: OpeningBook,
}

impl Analyzer {
    /// Out-of-range limits in `config` are pulled back inside the engine's
    /// hard limits
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config: config.sanitized(),
            book: OpeningBook,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyze `fen` to at most `requested_depth` plies
    ///
    /// The depth is clamped to `1..=max_depth` and never exceeds
    /// [`MAX_SEARCH_DEPTH`]. Book positions are answered
    /// without searching.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFen`](crate::EngineError::InvalidFen) for an
    /// unparseable position, or the search error if the first depth fails.
    pub fn analyze(&self, fen: &str, requested_depth: u8) -> EngineResult<AnalysisResult> {
        let start = Instant::now();
        let mut board = Board::from_fen(fen)?;
        let mut ctx = SearchContext::new(self.config.tt_capacity, self.config.quiescence_horizon);

        if let Some(book_move) = self.book.probe(fen, &board) {
            info!("[ENGINE] Book move {} for {}", board.uci(&book_move), fen);
            return Ok(AnalysisResult {
                evaluation: BOOK_EVALUATION_CP,
                depth: 0,
                moves: vec![MoveResult {
                    mv: book_move.clone(),
                    eval_score: BOOK_EVALUATION_CP,
                    principal_variation: vec![book_move],
                }],
                stats: ctx.stats,
                elapsed: start.elapsed(),
                source: AnalysisSource::OpeningBook,
                root: board,
            });
        }

        let depth_limit = self.config.max_depth.clamp(1, MAX_SEARCH_DEPTH);
        let max_depth = requested_depth.clamp(1, depth_limit);
        let mut outcome = RootOutcome::default();
        let mut reached = 0;

        for depth in 1..=max_depth {
            match search_root(&mut board, &mut ctx, i32::from(depth)) {
                Ok(completed) => {
                    outcome = completed;
                    reached = depth;
                }
                Err(e) if depth == 1 => return Err(e),
                Err(e) => {
                    warn!(
                        "[ENGINE] Search error at depth {}: {}. Keeping depth {} results.",
                        depth, e, reached
                    );
                    break;
                }
            }

            let elapsed = start.elapsed().as_secs_f64();
            debug!(
                "[ENGINE] depth {} eval {} nodes {} ({:.3}s)",
                depth, outcome.evaluation, ctx.stats.nodes, elapsed
            );

            if outcome.evaluation.abs() > self.config.mate_threshold {
                debug!("[ENGINE] Forced mate found, stopping at depth {}", depth);
                break;
            }
            if elapsed > self.config.time_budget_secs {
                debug!("[ENGINE] Time budget spent, stopping at depth {}", depth);
                break;
            }
        }

        let RootOutcome {
            evaluation,
            mut moves,
        } = outcome;
        self.pad_results(&board, evaluation, &mut moves);
        moves.truncate(self.config.result_count);

        let elapsed = start.elapsed();
        info!(
            "[ENGINE] Analyzed to depth {}: eval {} best {} nodes {} tt hits {} cutoffs {} in {:?}",
            reached,
            evaluation,
            moves.first().map_or_else(|| "-".to_string(), MoveResult::uci),
            ctx.stats.nodes,
            ctx.stats.tt_hits,
            ctx.stats.beta_cutoffs,
            elapsed
        );

        Ok(AnalysisResult {
            root: board,
            evaluation,
            depth: reached,
            moves,
            stats: ctx.stats,
            elapsed,
            source: AnalysisSource::Search,
        })
    }

    /// Top up `moves` with unlisted legal moves, in generation order
    fn pad_results(&self, board: &Board, evaluation: i32, moves: &mut Vec<MoveResult>) {
        let target = self.config.result_count;
        if moves.len() >= target {
            return;
        }

        for mv in board.legal_moves() {
            if moves.len() >= target {
                break;
            }
            if moves.iter().any(|listed| listed.mv == mv) {
                continue;
            }
            moves.push(MoveResult {
                mv: mv.clone(),
                eval_score: evaluation - self.config.padding_penalty,
                principal_variation: vec![mv],
            });
        }
    }
}
