use rand::{Rng, distr::StandardUniform, prelude::Distribution};

/// Side length of the largest bounding box in the catalog (the I-piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// Enum representing the type of piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// O-piece.
    O = 1,
    /// T-piece.
    T = 2,
    /// S-piece.
    S = 3,
    /// Z-piece.
    Z = 4,
    /// J-piece.
    J = 5,
    /// L-piece.
    L = 6,
}

/// Uniform selection over the seven kinds.
impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::LEN)]
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    /// All kinds, in catalog order.
    pub const ALL: [Self; Self::LEN] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Returns the spawn-orientation matrix of this kind.
    #[must_use]
    pub const fn base_shape(self) -> ShapeMatrix {
        BASE_SHAPES[self as usize]
    }

    /// Returns the occupied-cell matrix of this kind in the given rotation.
    ///
    /// # Example
    ///
    /// ```
    /// use termtris_engine::{PieceKind, PieceRotation};
    ///
    /// let spawn = PieceKind::T.shape(PieceRotation::SPAWN);
    /// assert_eq!(spawn, PieceKind::T.base_shape());
    /// assert_eq!(PieceKind::T.shape(PieceRotation::new(1)), spawn.rotated_cw());
    /// ```
    #[must_use]
    pub const fn shape(self, rotation: PieceRotation) -> ShapeMatrix {
        ROTATED_SHAPES[self as usize][rotation.as_usize()]
    }

    /// Returns the display color assigned to this kind.
    #[must_use]
    pub const fn color(self) -> PieceColor {
        match self {
            PieceKind::I => PieceColor::Blue,
            PieceKind::O => PieceColor::Yellow,
            PieceKind::T => PieceColor::LightMagenta,
            PieceKind::S => PieceColor::Red,
            PieceKind::Z => PieceColor::Green,
            PieceKind::J => PieceColor::LightRed,
            PieceKind::L => PieceColor::Brown,
        }
    }

    /// Returns the single character representation of this piece kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use termtris_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_char(), 'I');
    /// assert_eq!(PieceKind::T.as_char(), 'T');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }

    /// Parses a piece kind from a single character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            _ => None,
        }
    }
}

/// Display color identity of a piece kind.
///
/// Fixed per kind at the catalog level; mapping it to real terminal colors is up
/// to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Blue,
    Yellow,
    LightMagenta,
    Red,
    Green,
    LightRed,
    Brown,
}

/// Rotation state of a piece.
///
/// - `0`: spawn orientation
/// - `1`: 90° clockwise
/// - `2`: 180°
/// - `3`: 270° clockwise
///
/// Rotation wraps around modulo 4.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceRotation(u8);

impl PieceRotation {
    pub const SPAWN: Self = Self(0);

    /// Creates a rotation state, wrapping `quarter_turns` modulo 4.
    #[must_use]
    pub const fn new(quarter_turns: u8) -> Self {
        Self(quarter_turns % 4)
    }

    #[must_use]
    pub const fn rotated_cw(self) -> Self {
        Self((self.0 + 1) % 4)
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// An N×N binary matrix marking the occupied sub-cells of a piece.
///
/// Row index grows downward and column index grows rightward, matching board
/// coordinates. Cells outside the N×N box are always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: usize,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeMatrix {
    /// Builds an N×N matrix from the top-left corner of `rows`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or larger than [`MAX_SHAPE_SIZE`].
    #[must_use]
    pub const fn new(size: usize, rows: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        assert!(size > 0);
        assert!(size <= MAX_SHAPE_SIZE);
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut i = 0;
        while i < size {
            let mut j = 0;
            while j < size {
                cells[i][j] = rows[i][j];
                j += 1;
            }
            i += 1;
        }
        Self { size, cells }
    }

    /// Side length N of the bounding box.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub const fn is_occupied(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.cells[row][col]
    }

    /// Returns the matrix turned 90° clockwise: `rotated[j][N-1-i] = self[i][j]`.
    #[must_use]
    pub const fn rotated_cw(&self) -> Self {
        let n = self.size;
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut i = 0;
        while i < n {
            let mut j = 0;
            while j < n {
                cells[j][n - 1 - i] = self.cells[i][j];
                j += 1;
            }
            i += 1;
        }
        Self { size: n, cells }
    }

    /// Returns an iterator of `(dx, dy)` offsets of occupied cells, row by row.
    pub fn occupied_cells(self) -> impl Iterator<Item = (usize, usize)> {
        let n = self.size;
        (0..n).flat_map(move |dy| {
            (0..n).filter_map(move |dx| self.cells[dy][dx].then_some((dx, dy)))
        })
    }
}

const fn rotations(base: ShapeMatrix) -> [ShapeMatrix; 4] {
    let mut rotated = [base; 4];
    let mut i = 1;
    while i < 4 {
        rotated[i] = rotated[i - 1].rotated_cw();
        i += 1;
    }
    rotated
}

const BASE_SHAPES: [ShapeMatrix; PieceKind::LEN] = {
    const C: bool = true;
    const E: bool = false;
    const EEEE: [bool; 4] = [E; 4];
    [
        // I-piece
        ShapeMatrix::new(4, [EEEE, [C, C, C, C], EEEE, EEEE]),
        // O-piece
        ShapeMatrix::new(2, [[C, C, E, E], [C, C, E, E], EEEE, EEEE]),
        // T-piece
        ShapeMatrix::new(3, [[E, C, E, E], [C, C, C, E], EEEE, EEEE]),
        // S-piece
        ShapeMatrix::new(3, [[E, C, C, E], [C, C, E, E], EEEE, EEEE]),
        // Z-piece
        ShapeMatrix::new(3, [[C, C, E, E], [E, C, C, E], EEEE, EEEE]),
        // J-piece
        ShapeMatrix::new(3, [[C, E, E, E], [C, C, C, E], EEEE, EEEE]),
        // L-piece
        ShapeMatrix::new(3, [[E, E, C, E], [C, C, C, E], EEEE, EEEE]),
    ]
};

// Derived once at compile time from the base matrices.
const ROTATED_SHAPES: [[ShapeMatrix; 4]; PieceKind::LEN] = {
    let mut shapes = [[BASE_SHAPES[0]; 4]; PieceKind::LEN];
    let mut kind = 0;
    while kind < PieceKind::LEN {
        shapes[kind] = rotations(BASE_SHAPES[kind]);
        kind += 1;
    }
    shapes
};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng as _, rngs::StdRng};

    use super::*;

    fn cells(shape: &ShapeMatrix) -> Vec<(usize, usize)> {
        shape.occupied_cells().collect()
    }

    #[test]
    fn test_four_rotations_are_identity() {
        for kind in PieceKind::ALL {
            let base = kind.base_shape();
            let back = base.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(back, base, "{kind:?}");
        }
    }

    #[test]
    fn test_rotation_keeps_bounding_box() {
        for kind in PieceKind::ALL {
            let size = kind.base_shape().size();
            for turns in 0..4 {
                let shape = kind.shape(PieceRotation::new(turns));
                assert_eq!(shape.size(), size, "{kind:?} rotated {turns} times");
                assert_eq!(shape.occupied_cells().count(), 4);
            }
        }
    }

    #[test]
    fn test_bounding_box_sizes() {
        assert_eq!(PieceKind::I.base_shape().size(), 4);
        assert_eq!(PieceKind::O.base_shape().size(), 2);
        for kind in [
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::J,
            PieceKind::L,
        ] {
            assert_eq!(kind.base_shape().size(), 3);
        }
    }

    #[test]
    fn test_t_piece_rotates_clockwise() {
        // .#.    .#.
        // ### -> .##
        // ...    .#.
        let rotated = PieceKind::T.shape(PieceRotation::new(1));
        assert_eq!(cells(&rotated), vec![(1, 0), (1, 1), (2, 1), (1, 2)]);
    }

    #[test]
    fn test_i_piece_rotations() {
        assert_eq!(
            cells(&PieceKind::I.shape(PieceRotation::SPAWN)),
            vec![(0, 1), (1, 1), (2, 1), (3, 1)]
        );
        assert_eq!(
            cells(&PieceKind::I.shape(PieceRotation::new(1))),
            vec![(2, 0), (2, 1), (2, 2), (2, 3)]
        );
        assert_eq!(
            cells(&PieceKind::I.shape(PieceRotation::new(2))),
            vec![(0, 2), (1, 2), (2, 2), (3, 2)]
        );
    }

    #[test]
    fn test_o_piece_is_rotation_invariant() {
        let base = PieceKind::O.base_shape();
        for turns in 0..4 {
            assert_eq!(PieceKind::O.shape(PieceRotation::new(turns)), base);
        }
    }

    #[test]
    fn test_rotation_wraps() {
        assert_eq!(PieceRotation::new(3).rotated_cw(), PieceRotation::SPAWN);
        assert_eq!(PieceRotation::new(5), PieceRotation::new(1));
    }

    #[test]
    fn test_colors_are_distinct() {
        let colors: HashSet<_> = PieceKind::ALL.iter().map(|kind| kind.color()).collect();
        assert_eq!(colors.len(), PieceKind::LEN);
    }

    #[test]
    fn test_piece_kind_char_conversion() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.as_char()), Some(kind));
        }
        assert_eq!(PieceKind::from_char('X'), None);
        assert_eq!(PieceKind::from_char('i'), None);
    }

    #[test]
    fn test_uniform_sampling_covers_all_kinds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0_usize; PieceKind::LEN];
        for _ in 0..7000 {
            let kind: PieceKind = rng.random();
            counts[kind as usize] += 1;
        }
        for (kind, count) in PieceKind::ALL.iter().zip(counts) {
            assert!((700..=1300).contains(&count), "{kind:?} drawn {count} times");
        }
    }
}
