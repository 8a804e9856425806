use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;

use crate::PieceKind;

/// Supplies the kinds of upcoming pieces.
pub trait PieceSource {
    /// Draws the kind of the next piece.
    fn next_kind(&mut self) -> PieceKind;

    /// Restarts the source for a new game.
    fn reseed(&mut self);
}

/// Seed for deterministic piece generation.
///
/// A 128-bit seed for the piece generator, written as 32 hex digits. The
/// same seed always produces the same piece sequence.
///
/// # Example
///
/// ```
/// use termtris_engine::PieceSeed;
///
/// let seed: PieceSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
/// assert_eq!(seed.to_string(), "000102030405060708090a0b0c0d0e0f");
/// assert!("xyz".parse::<PieceSeed>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSeed([u8; 16]);

/// Allows generating random `PieceSeed` values with `rng.random()`.
impl Distribution<PieceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PieceSeed(seed)
    }
}

impl fmt::Display for PieceSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePieceSeedError {
    #[display("invalid seed: expected 32 hex digits, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    #[display("invalid seed: {_0}")]
    InvalidDigit(std::num::ParseIntError),
}

impl FromStr for PieceSeed {
    type Err = ParsePieceSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParsePieceSeedError::InvalidLength(s.len()));
        }
        let num = u128::from_str_radix(s, 16).map_err(ParsePieceSeedError::InvalidDigit)?;
        Ok(Self(num.to_be_bytes()))
    }
}

/// Uniformly random piece kinds from a PCG32 generator.
///
/// # Example
///
/// ```
/// use termtris_engine::{PieceSource as _, RandomPieceSource};
/// use rand::Rng as _;
///
/// let seed = rand::rng().random();
/// let mut a = RandomPieceSource::with_seed(seed);
/// let mut b = RandomPieceSource::with_seed(seed);
/// for _ in 0..20 {
///     assert_eq!(a.next_kind(), b.next_kind());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RandomPieceSource {
    rng: Pcg32,
    seed: PieceSeed,
    fixed: bool,
}

impl Default for RandomPieceSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPieceSource {
    /// Creates a source seeded from the thread-local generator.
    ///
    /// [`reseed`](PieceSource::reseed) draws a fresh seed each time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fixed: false,
            ..Self::with_seed(rand::rng().random())
        }
    }

    /// Creates a source with a fixed seed.
    ///
    /// [`reseed`](PieceSource::reseed) restarts the same sequence.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
            seed,
            fixed: true,
        }
    }

    /// Returns the seed the current sequence started from.
    #[must_use]
    pub fn seed(&self) -> PieceSeed {
        self.seed
    }
}

impl PieceSource for RandomPieceSource {
    fn next_kind(&mut self) -> PieceKind {
        self.rng.random()
    }

    fn reseed(&mut self) {
        if !self.fixed {
            self.seed = rand::rng().random();
        }
        self.rng = Pcg32::from_seed(self.seed.0);
    }
}

/// Cycles through a fixed list of kinds.
///
/// Useful for scripted games; [`reseed`](PieceSource::reseed) restarts at the
/// first kind.
///
/// ```
/// use termtris_engine::{PieceKind, PieceSource as _, SequencePieceSource};
///
/// let mut source = SequencePieceSource::new([PieceKind::I, PieceKind::O]);
/// assert_eq!(source.next_kind(), PieceKind::I);
/// assert_eq!(source.next_kind(), PieceKind::O);
/// assert_eq!(source.next_kind(), PieceKind::I);
/// ```
#[derive(Debug, Clone)]
pub struct SequencePieceSource {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl SequencePieceSource {
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    #[must_use]
    pub fn new(kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        let kinds: Vec<_> = kinds.into_iter().collect();
        assert!(!kinds.is_empty(), "piece sequence must not be empty");
        Self { kinds, index: 0 }
    }
}

impl PieceSource for SequencePieceSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.index];
        self.index = (self.index + 1) % self.kinds.len();
        kind
    }

    fn reseed(&mut self) {
        self.index = 0;
    }
}
