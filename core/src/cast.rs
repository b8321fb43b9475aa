//! The six-trial cast: draw, partition, resolve.

use thiserror::Error;

use hexcast_types::{Hexagram, InvalidTossValue, Line, LineTriple};

use crate::catalog::Catalog;
use crate::toss::{CoinSource, CoinsExhausted, draw_trial};

/// Trials per cast. Trials 0..=2 form the lower trigram, 3..=5 the upper,
/// each bottom-to-top in draw order.
pub const TRIALS_PER_CAST: usize = 6;

/// Failure modes of a cast.
///
/// `ImpossibleValue` and `UnmatchedTriple` indicate an internal defect (a
/// trial sum outside 6..=9, or a validated catalog missing a configuration);
/// they are kept distinct from ordinary failures so callers never treat them
/// as retryable.
#[derive(Debug, Error)]
pub enum CastError {
    #[error("cast aborted: {0}")]
    CoinsExhausted(#[from] CoinsExhausted),
    #[error("internal consistency failure: {0}")]
    ImpossibleValue(#[from] InvalidTossValue),
    #[error("internal consistency failure: no catalog entry for line configuration {0}")]
    UnmatchedTriple(LineTriple),
}

/// Cast a full hexagram: six trials resolved against the catalog.
pub fn cast<C: CoinSource + ?Sized>(
    catalog: &Catalog,
    coins: &mut C,
) -> Result<Hexagram, CastError> {
    cast_observed(catalog, coins, |_, _| {})
}

/// Like [`cast`], notifying `observer` once per completed trial in index
/// order (0..=5).
///
/// The observer exists so a caller can reveal lines incrementally; it has no
/// influence on the result.
pub fn cast_observed<C, F>(
    catalog: &Catalog,
    coins: &mut C,
    mut observer: F,
) -> Result<Hexagram, CastError>
where
    C: CoinSource + ?Sized,
    F: FnMut(usize, Line),
{
    let mut draw = |index: usize| -> Result<Line, CastError> {
        let line = draw_trial(coins)?;
        observer(index, line);
        Ok(line)
    };

    let lines = [draw(0)?, draw(1)?, draw(2)?, draw(3)?, draw(4)?, draw(5)?];

    let lower_triple = LineTriple::new(
        lines[0].is_solid(),
        lines[1].is_solid(),
        lines[2].is_solid(),
    );
    let upper_triple = LineTriple::new(
        lines[3].is_solid(),
        lines[4].is_solid(),
        lines[5].is_solid(),
    );

    let lower = catalog
        .lookup(lower_triple)
        .copied()
        .ok_or(CastError::UnmatchedTriple(lower_triple))?;
    let upper = catalog
        .lookup(upper_triple)
        .copied()
        .ok_or(CastError::UnmatchedTriple(upper_triple))?;

    tracing::debug!(
        lower = %lower.id,
        upper = %upper.id,
        values = ?lines.map(|line| line.value()),
        "cast resolved"
    );

    Ok(Hexagram {
        lines,
        lower,
        upper,
    })
}
