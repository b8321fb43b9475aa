//! One trial of the three-coin method.

use std::collections::VecDeque;

use rand::RngExt;
use thiserror::Error;

use hexcast_types::{InvalidTossValue, Line};

/// Coins flipped per trial. Heads contributes 3 to the trial value, tails 2,
/// so the sum always lands in 6..=9.
pub const COINS_PER_TRIAL: usize = 3;

/// A coin source that ran dry mid-trial.
///
/// Only deterministic sources can hit this; a live RNG never runs out.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("coin source ran out of draws")]
pub struct CoinsExhausted;

/// Source of fair binary draws.
///
/// The seam that makes every cast replayable: production code flips a real
/// RNG, tests feed a fixed sequence and assert the exact outcome.
pub trait CoinSource {
    /// Produce one fair binary draw. `true` is heads.
    fn flip(&mut self) -> Result<bool, CoinsExhausted>;
}

/// Thread-local RNG-backed coin source.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadCoins;

impl ThreadCoins {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CoinSource for ThreadCoins {
    fn flip(&mut self) -> Result<bool, CoinsExhausted> {
        Ok(rand::rng().random_bool(0.5))
    }
}

/// Deterministic coin source replaying a fixed sequence of draws.
#[derive(Debug, Clone, Default)]
pub struct FixedCoins {
    draws: VecDeque<bool>,
}

impl FixedCoins {
    #[must_use]
    pub fn new(draws: impl IntoIterator<Item = bool>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Build the coin sequence that produces the given trial values, in order.
    ///
    /// Each value in 6..=9 expands to the three flips that sum to it
    /// (heads = 3, tails = 2); e.g. 8 becomes heads, heads, tails.
    pub fn from_trial_values(values: &[u8]) -> Result<Self, InvalidTossValue> {
        let mut draws = VecDeque::with_capacity(values.len() * COINS_PER_TRIAL);
        for &value in values {
            let heads = match value {
                6..=9 => usize::from(value) - 6,
                other => return Err(InvalidTossValue(other)),
            };
            for coin in 0..COINS_PER_TRIAL {
                draws.push_back(coin < heads);
            }
        }
        Ok(Self { draws })
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl CoinSource for FixedCoins {
    fn flip(&mut self) -> Result<bool, CoinsExhausted> {
        self.draws.pop_front().ok_or(CoinsExhausted)
    }
}

/// Run one trial: three flips, summed and classified.
///
/// The sum is 6..=9 by construction; [`InvalidTossValue`] escaping here
/// indicates a logic defect, not a recoverable runtime condition.
pub fn draw_trial<C: CoinSource + ?Sized>(coins: &mut C) -> Result<Line, crate::CastError> {
    let mut value = 0u8;
    for _ in 0..COINS_PER_TRIAL {
        value += if coins.flip()? { 3 } else { 2 };
    }
    Ok(Line::from_toss_value(value)?)
}
