//! Fixed lookup tables for the rotation and translation codes of Hall symbols.
//!
//! All translations are in twelfths of a cell edge.

use phf::{phf_map, Map};

/// A $`3 \times 3`$ integer rotation block. Rows are rows of the matrix.
pub(crate) type RotationBlock = [[i32; 3]; 3];

/// Rotation blocks keyed by their normalised Hall lookup codes. A code is the rotation order
/// followed by the axis type, with an optional reference axis in front of a face-diagonal
/// axis type (*e.g.* `2x'`).
pub(crate) static ROTATIONS: Map<&'static str, RotationBlock> = phf_map! {
    "1_" => [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
    "2x" => [[1, 0, 0], [0, -1, 0], [0, 0, -1]],
    "2y" => [[-1, 0, 0], [0, 1, 0], [0, 0, -1]],
    "2z" => [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
    "2'" => [[0, -1, 0], [-1, 0, 0], [0, 0, -1]],
    "2\"" => [[0, 1, 0], [1, 0, 0], [0, 0, -1]],
    "2x'" => [[-1, 0, 0], [0, 0, -1], [0, -1, 0]],
    "2x\"" => [[-1, 0, 0], [0, 0, 1], [0, 1, 0]],
    "2y'" => [[0, 0, -1], [0, -1, 0], [-1, 0, 0]],
    "2y\"" => [[0, 0, 1], [0, -1, 0], [1, 0, 0]],
    "2z'" => [[0, -1, 0], [-1, 0, 0], [0, 0, -1]],
    "2z\"" => [[0, 1, 0], [1, 0, 0], [0, 0, -1]],
    "3x" => [[1, 0, 0], [0, 0, -1], [0, 1, -1]],
    "3y" => [[-1, 0, 1], [0, 1, 0], [-1, 0, 0]],
    "3z" => [[0, -1, 0], [1, -1, 0], [0, 0, 1]],
    "3*" => [[0, 0, 1], [1, 0, 0], [0, 1, 0]],
    "4x" => [[1, 0, 0], [0, 0, -1], [0, 1, 0]],
    "4y" => [[0, 0, 1], [0, 1, 0], [-1, 0, 0]],
    "4z" => [[0, -1, 0], [1, 0, 0], [0, 0, 1]],
    "6x" => [[1, 0, 0], [0, 1, -1], [0, 1, 0]],
    "6y" => [[0, 0, 1], [0, 1, 0], [-1, 0, 1]],
    "6z" => [[1, -1, 0], [1, 0, 0], [0, 0, 1]],
};

/// Fixed translation vectors keyed by their Hall translation symbols. The symbols `r`, `s`
/// and `t` describe the centring translations of rhombohedral lattices set on hexagonal axes.
pub(crate) static TRANSLATIONS: Map<char, [i32; 3]> = phf_map! {
    'a' => [6, 0, 0],
    'b' => [0, 6, 0],
    'c' => [0, 0, 6],
    'n' => [6, 6, 6],
    'u' => [3, 0, 0],
    'v' => [0, 3, 0],
    'w' => [0, 0, 3],
    'd' => [3, 3, 3],
    'r' => [4, 8, 8],
    's' => [8, 8, 4],
    't' => [8, 4, 8],
};

/// Intrinsic screw translations along the rotation axis, keyed by the rotation order followed
/// by the screw digit (`"61"` is the $`6_1`$ screw).
static SCREWS: Map<&'static str, i32> = phf_map! {
    "21" => 6,
    "31" => 4,
    "32" => 8,
    "41" => 3,
    "43" => 9,
    "61" => 2,
    "62" => 4,
    "64" => 8,
    "65" => 10,
};

/// Looks up the rotation block for a normalised Hall rotation code.
pub(crate) fn rotation(code: &str) -> Option<&'static RotationBlock> {
    ROTATIONS.get(code)
}

/// Looks up the screw translation, in twelfths along the rotation axis, for a screw digit on an
/// axis of a given order.
///
/// # Returns
///
/// The screw translation, or `None` if `digit` is not a valid screw for `order`.
pub(crate) fn screw_shift(digit: char, order: u32) -> Option<i32> {
    SCREWS.get(format!("{order}{digit}").as_str()).copied()
}

/// A lattice-centring type together with the Hall terms it implies.
pub(crate) struct LatticeData {
    pub(crate) code: char,
    pub(crate) designation: &'static str,
    pub(crate) extension: &'static str,
}

/// Lattice types in SHELX `LATT` order: index $`i`$ here has `LATT` code $`i + 1`$.
pub(crate) static LATTICES: [LatticeData; 9] = [
    LatticeData { code: 'P', designation: "primitive", extension: "" },
    LatticeData { code: 'I', designation: "body-centered", extension: " 1n" },
    LatticeData { code: 'R', designation: "rhombohedral", extension: " 1r 1r" },
    LatticeData { code: 'F', designation: "face-centered", extension: " 1ab 1bc 1ac" },
    LatticeData { code: 'A', designation: "A-centered", extension: " 1bc" },
    LatticeData { code: 'B', designation: "B-centered", extension: " 1ac" },
    LatticeData { code: 'C', designation: "C-centered", extension: " 1ab" },
    LatticeData { code: 'S', designation: "rhombohedral(S)", extension: " 1s 1s" },
    LatticeData { code: 'T', designation: "rhombohedral(T)", extension: " 1t 1t" },
];
