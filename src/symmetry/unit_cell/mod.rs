//! Unit-cell geometry: the fractional/Cartesian transform pair, offsets, vertices and
//! displacement ellipsoids.

use std::fmt;

use derive_builder::Builder;
use nalgebra::{Matrix3, Matrix4, Point3, SymmetricEigen, Vector3};
use serde::{Deserialize, Serialize};

use crate::symmetry::symmetry_error::SymmetryError;

#[cfg(test)]
#[path = "unit_cell_tests.rs"]
mod unit_cell_tests;

const TWO_PI_SQUARED: f64 = 2.0 * std::f64::consts::PI * std::f64::consts::PI;

/// Smallest volume of a cell with unit edges for its angles to be accepted.
const UNIT_VOLUME_THRESHOLD: f64 = 1.0e-4;

/// The corners of the unit cube in fractional coordinates, in binary order of $`(x, y, z)`$.
pub const UNIT_CUBE_POINTS: [[f64; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0],
    [0.0, 1.0, 1.0],
    [1.0, 0.0, 0.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 0.0],
    [1.0, 1.0, 1.0],
];

/// The position of each unit-cube point in the canonical (axis-ordered) vertex ordering.
const TO_CANONICAL: [usize; 8] = [0, 3, 4, 7, 1, 2, 5, 6];

// ==================
// Struct definitions
// ==================

/// A structure for the parameters from which a unit cell is constructed.
#[derive(Clone, Builder, Debug, PartialEq, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct CellParameters {
    /// The cell lengths $`a`$, $`b`$, $`c`$ and the angles $`\alpha`$, $`\beta`$,
    /// $`\gamma`$ in degrees. A non-positive $`b`$ denotes a polymer and a non-positive $`c`$
    /// a slab.
    #[builder(setter(strip_option), default = "None")]
    pub lengths_angles: Option<[f64; 6]>,

    /// Explicit Cartesian lattice vectors $`\mathbf{a}`$, $`\mathbf{b}`$, $`\mathbf{c}`$. These
    /// take precedence over [`Self::lengths_angles`].
    #[builder(setter(strip_option), default = "None")]
    pub vectors: Option<[Vector3<f64>; 3]>,

    /// Supercell multipliers along the three lattice directions.
    #[builder(default = "[1, 1, 1]")]
    pub supercell: [u32; 3],
}

impl CellParametersBuilder {
    fn validate(&self) -> Result<(), String> {
        let lengths_angles = self.lengths_angles.flatten();
        let vectors = self.vectors.flatten();
        match (lengths_angles, vectors) {
            (None, None) => Err("Neither cell lengths nor lattice vectors specified.".to_string()),
            (Some(la), None) if la[0] <= 0.0 => {
                log::error!("The cell length `a` must be positive.");
                Err("Invalid cell lengths.".to_string())
            }
            (_, Some(vs)) if vs[0].norm() == 0.0 => {
                log::error!("The first lattice vector must not vanish.");
                Err("Invalid lattice vectors.".to_string())
            }
            _ => Ok(()),
        }
    }
}

impl CellParameters {
    /// Returns a builder to construct a new set of cell parameters.
    pub fn builder() -> CellParametersBuilder {
        CellParametersBuilder::default()
    }
}

/// The anisotropic or isotropic displacement parameters of an atom.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DisplacementParameters {
    /// An isotropic mean-square displacement $`U_\mathrm{iso}`$.
    Isotropic(f64),

    /// Six anisotropic parameters $`(11, 22, 33, 12, 13, 23)`$ together with the Ortep type
    /// code describing their encoding. Types 0 to 5, 8 to 10 and 12 are supported.
    Anisotropic { parameters: [f64; 6], ortep_type: u32 },
}

/// A displacement ellipsoid in Cartesian space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// The unit principal axes.
    pub axes: [Vector3<f64>; 3],

    /// The root-mean-square displacements along [`Self::axes`].
    pub lengths: [f64; 3],

    /// The Cartesian quadric coefficients $`(B_{11}, B_{22}, B_{33}, B_{12}, B_{13}, B_{23})`$,
    /// absent for an isotropic ellipsoid.
    pub b_cartesian: Option<[f64; 6]>,

    /// An equivalent isotropic parameter.
    pub equivalent_isotropic: f64,
}

impl Ellipsoid {
    /// Whether the ellipsoid is a sphere specified by a single isotropic parameter.
    pub fn is_isotropic(&self) -> bool {
        self.b_cartesian.is_none()
    }

    fn from_quadric(b_cartesian: [f64; 6], equivalent_isotropic: f64) -> Self {
        let [b11, b22, b33, b12, b13, b23] = b_cartesian;
        let quadric = Matrix3::new(
            b11,
            b12 / 2.0,
            b13 / 2.0,
            b12 / 2.0,
            b22,
            b23 / 2.0,
            b13 / 2.0,
            b23 / 2.0,
            b33,
        );
        let eig = SymmetricEigen::new(quadric);
        let axes = [0, 1, 2].map(|i| eig.eigenvectors.column(i).normalize());
        let lengths = [0, 1, 2].map(|i| (eig.eigenvalues[i].max(0.0) / TWO_PI_SQUARED).sqrt());
        Self {
            axes,
            lengths,
            b_cartesian: Some(b_cartesian),
            equivalent_isotropic,
        }
    }
}

/// A structure for the geometry of a unit cell.
///
/// The fractional-to-Cartesian matrix and its inverse are always recomputed together. The
/// "absolute" pair is frozen when the lattice is (re)oriented and is unaffected by later
/// offsets.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnitCell {
    parameters: CellParameters,

    a: f64,
    b: f64,
    c: f64,
    alpha: f64,
    beta: f64,
    gamma: f64,

    /// 1 for a polymer, 2 for a slab, 3 for a crystal.
    dimension: u8,

    volume: f64,

    cos_beta: f64,
    cos_gamma: f64,
    sin_gamma: f64,

    // Auxiliaries for the Cartesian quadric of a displacement ellipsoid.
    c_a: f64,
    c_b: f64,

    reciprocal_lengths: [f64; 3],

    fractional_to_cartesian: Matrix4<f64>,
    cartesian_to_fractional: Matrix4<f64>,
    fractional_to_cartesian_absolute: Matrix4<f64>,
    cartesian_to_fractional_absolute: Matrix4<f64>,

    fractional_offset: Vector3<f64>,
    cartesian_offset: Vector3<f64>,
    unit_cell_multiplier: Option<Point3<f64>>,

    vertices: [Point3<f64>; 8],
}

impl UnitCell {
    /// Constructs a unit cell from its parameters.
    ///
    /// # Errors
    ///
    /// Errors if the lattice vectors are linearly dependent, so that no fractional basis
    /// exists.
    pub fn new(parameters: &CellParameters) -> Result<Self, SymmetryError> {
        let [na, nb, nc] = parameters.supercell.map(|n| f64::from(n.max(1)));
        let mut vectors = parameters.vectors;

        let (mut a, mut b, mut c, alpha, beta, gamma) = match (vectors, parameters.lengths_angles)
        {
            (Some([va, vb, vc]), _) => {
                let a = va.norm();
                let mut b = vb.norm();
                let mut c = vc.norm();
                if b == 0.0 {
                    b = -1.0;
                    c = -1.0;
                } else if c == 0.0 {
                    c = -1.0;
                }
                let alpha = if b < 0.0 || c < 0.0 {
                    90.0
                } else {
                    vb.angle(&vc).to_degrees()
                };
                let beta = if c < 0.0 {
                    90.0
                } else {
                    va.angle(&vc).to_degrees()
                };
                let gamma = if b < 0.0 {
                    90.0
                } else {
                    va.angle(&vb).to_degrees()
                };
                if c < 0.0 {
                    // Complete a low-dimensional lattice with unit vectors perpendicular to it.
                    let mut vb_full = vb;
                    if b < 0.0 {
                        vb_full = Vector3::z().cross(&va);
                        if vb_full.norm() < 0.001 {
                            vb_full = Vector3::y();
                        }
                        vb_full.normalize_mut();
                    }
                    let vc_full = va.cross(&vb_full).normalize();
                    vectors = Some([va, vb_full, vc_full]);
                }
                (a, b, c, alpha, beta, gamma)
            }
            (None, Some([a, b, c, alpha, beta, gamma])) => (a, b, c, alpha, beta, gamma),
            (None, None) => {
                return Err(SymmetryError::GeometricDegeneracy(
                    "No cell parameters given.".to_string(),
                ))
            }
        };

        a *= na;
        let dimension = if b <= 0.0 {
            b = 1.0;
            c = 1.0;
            1
        } else if c <= 0.0 {
            c = 1.0;
            b *= nb;
            2
        } else {
            b *= nb;
            c *= nc;
            3
        };

        let (sin_alpha, cos_alpha) = alpha.to_radians().sin_cos();
        let (sin_beta, cos_beta) = beta.to_radians().sin_cos();
        let (sin_gamma, cos_gamma) = gamma.to_radians().sin_cos();
        let unit_volume = (sin_alpha * sin_alpha + sin_beta * sin_beta + sin_gamma * sin_gamma
            + 2.0 * cos_alpha * cos_beta * cos_gamma
            - 2.0)
            .sqrt();
        if unit_volume.is_nan() || unit_volume < UNIT_VOLUME_THRESHOLD {
            let msg = format!(
                "Cell angles ({alpha}, {beta}, {gamma}) do not span three dimensions."
            );
            log::error!("{msg}");
            return Err(SymmetryError::GeometricDegeneracy(msg));
        }
        let volume = a * b * c * unit_volume;
        let c_a = (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
        let c_b = unit_volume / sin_gamma;
        let reciprocal_lengths = [
            b * c * sin_alpha / volume,
            a * c * sin_beta / volume,
            a * b * sin_gamma / volume,
        ];

        let fractional_to_cartesian = match vectors {
            Some([va, vb, vc]) => {
                let mut m = Matrix4::identity();
                m.fixed_view_mut::<3, 1>(0, 0).copy_from(&(va * na));
                m.fixed_view_mut::<3, 1>(0, 1).copy_from(&(vb * nb));
                m.fixed_view_mut::<3, 1>(0, 2).copy_from(&(vc * nc));
                m
            }
            None => Matrix4::new(
                a,
                b * cos_gamma,
                c * cos_beta,
                0.0,
                0.0,
                b * sin_gamma,
                c * c_a,
                0.0,
                0.0,
                0.0,
                volume / (a * b * sin_gamma),
                0.0,
                0.0,
                0.0,
                0.0,
                1.0,
            ),
        };
        let cartesian_to_fractional = invert(&fractional_to_cartesian)?;

        let mut unit_cell = Self {
            parameters: parameters.clone(),
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
            dimension,
            volume,
            cos_beta,
            cos_gamma,
            sin_gamma,
            c_a,
            c_b,
            reciprocal_lengths,
            fractional_to_cartesian,
            cartesian_to_fractional,
            fractional_to_cartesian_absolute: fractional_to_cartesian,
            cartesian_to_fractional_absolute: cartesian_to_fractional,
            fractional_offset: Vector3::zeros(),
            cartesian_offset: Vector3::zeros(),
            unit_cell_multiplier: None,
            vertices: [Point3::origin(); 8],
        };
        unit_cell.calc_vertices();
        log::debug!("Unit cell constructed: {}", unit_cell.dump_info(false));
        Ok(unit_cell)
    }

    /// Constructs a unit cell directly from $`(a, b, c, \alpha, \beta, \gamma)`$.
    pub fn from_lengths_angles(lengths_angles: [f64; 6]) -> Result<Self, SymmetryError> {
        let parameters = CellParameters::builder()
            .lengths_angles(lengths_angles)
            .build()
            .map_err(|err| SymmetryError::GeometricDegeneracy(err.to_string()))?;
        Self::new(&parameters)
    }

    /// Constructs a unit cell from its three Cartesian lattice vectors.
    pub fn from_vectors(vectors: [Vector3<f64>; 3]) -> Result<Self, SymmetryError> {
        let parameters = CellParameters::builder()
            .vectors(vectors)
            .build()
            .map_err(|err| SymmetryError::GeometricDegeneracy(err.to_string()))?;
        Self::new(&parameters)
    }

    fn calc_vertices(&mut self) {
        self.cartesian_to_fractional_absolute = self.cartesian_to_fractional;
        self.fractional_to_cartesian_absolute = self.fractional_to_cartesian;
        for (vertex, corner) in self.vertices.iter_mut().zip(UNIT_CUBE_POINTS.iter()) {
            *vertex = self
                .fractional_to_cartesian
                .transform_point(&Point3::from(*corner));
        }
    }

    /// The parameters this cell was constructed from.
    pub fn parameters(&self) -> &CellParameters {
        &self.parameters
    }

    /// The (supercell-scaled) cell lengths and angles.
    pub fn lengths_angles(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.alpha, self.beta, self.gamma]
    }

    /// The periodic dimensionality: 1 for a polymer, 2 for a slab and 3 for a crystal.
    pub fn dimension(&self) -> u8 {
        self.dimension
    }

    pub fn is_polymer(&self) -> bool {
        self.dimension == 1
    }

    pub fn is_slab(&self) -> bool {
        self.dimension == 2
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// The reciprocal cell lengths $`a^*`$, $`b^*`$, $`c^*`$.
    pub fn reciprocal_lengths(&self) -> [f64; 3] {
        self.reciprocal_lengths
    }

    pub fn fractional_to_cartesian(&self) -> &Matrix4<f64> {
        &self.fractional_to_cartesian
    }

    pub fn cartesian_to_fractional(&self) -> &Matrix4<f64> {
        &self.cartesian_to_fractional
    }

    pub fn fractional_offset(&self) -> &Vector3<f64> {
        &self.fractional_offset
    }

    pub fn cartesian_offset(&self) -> &Vector3<f64> {
        &self.cartesian_offset
    }

    /// The `{i j k}` multiplier set by an offset with components of 100 or more, if any.
    pub fn unit_cell_multiplier(&self) -> Option<&Point3<f64>> {
        self.unit_cell_multiplier.as_ref()
    }

    /// Converts fractional coordinates to Cartesian coordinates.
    ///
    /// # Arguments
    ///
    /// * `pt` - The fractional point.
    /// * `absolute` - If `true`, the current offset is ignored.
    pub fn to_cartesian(&self, pt: &Point3<f64>, absolute: bool) -> Point3<f64> {
        if absolute {
            self.fractional_to_cartesian_absolute.transform_point(pt)
        } else {
            self.fractional_to_cartesian.transform_point(pt)
        }
    }

    /// Converts Cartesian coordinates to fractional coordinates.
    ///
    /// # Arguments
    ///
    /// * `pt` - The Cartesian point.
    /// * `absolute` - If `true`, the current offset is ignored.
    pub fn to_fractional(&self, pt: &Point3<f64>, absolute: bool) -> Point3<f64> {
        if absolute {
            self.cartesian_to_fractional_absolute.transform_point(pt)
        } else {
            self.cartesian_to_fractional.transform_point(pt)
        }
    }

    /// Scales a fractional point of the supercell back to the fractional coordinates of the
    /// primitive cell it was built from.
    pub fn to_supercell(&self, fpt: &Point3<f64>) -> Point3<f64> {
        let [na, nb, nc] = self.parameters.supercell.map(|n| f64::from(n.max(1)));
        Point3::new(fpt.x / na, fpt.y / nb, fpt.z / nc)
    }

    /// Wraps a Cartesian point into the unit cell along every periodic direction.
    ///
    /// # Arguments
    ///
    /// * `pt` - The Cartesian point.
    /// * `offset` - If given, the wrap uses the absolute cell and then shifts the result by
    /// this fractional offset. Otherwise the current (offset) cell is used.
    pub fn to_unit_cell(&self, pt: &Point3<f64>, offset: Option<&Vector3<f64>>) -> Point3<f64> {
        match offset {
            None => {
                let f = self.cartesian_to_fractional.transform_point(pt);
                self.fractional_to_cartesian
                    .transform_point(&self.wrap_fractional(&f))
            }
            Some(offset) => {
                let f = self.cartesian_to_fractional_absolute.transform_point(pt);
                self.fractional_to_cartesian_absolute
                    .transform_point(&(self.wrap_fractional(&f) + offset))
            }
        }
    }

    fn wrap_fractional(&self, f: &Point3<f64>) -> Point3<f64> {
        let mut wrapped = *f;
        for i in 0..usize::from(self.dimension) {
            wrapped[i] = wrap_coordinate(f[i]);
        }
        wrapped
    }

    /// Sets the origin of the cell to a fractional point.
    ///
    /// A point with an $`x`$ or $`y`$ component of 100 or more is an `{i j k}` cell-range
    /// multiplier instead and is only recorded.
    pub fn set_offset(&mut self, pt: &Point3<f64>) {
        if pt.x >= 100.0 || pt.y >= 100.0 {
            self.unit_cell_multiplier = Some(*pt);
            return;
        }
        if pt.coords == Vector3::zeros() {
            self.unit_cell_multiplier = None;
        }
        self.fractional_offset = pt.coords;
        self.cartesian_to_fractional
            .fixed_view_mut::<3, 1>(0, 3)
            .copy_from(&(-pt.coords));
        let basis = self.fractional_to_cartesian.fixed_view::<3, 3>(0, 0).into_owned();
        self.cartesian_offset = basis * pt.coords;
        self.fractional_to_cartesian
            .fixed_view_mut::<3, 1>(0, 3)
            .copy_from(&self.cartesian_offset);
    }

    /// Sets the origin of the cell from a three-digit cell index such as `555` (no offset) or
    /// `656` (one cell along $`a`$).
    pub fn set_offset_ijk(&mut self, nnn: i32) {
        self.set_offset(&ijk_to_point(nnn, 0));
    }

    /// Sets the origin of the cell to a Cartesian point.
    pub fn set_cartesian_offset(&mut self, origin: &Vector3<f64>) {
        self.cartesian_offset = *origin;
        self.fractional_to_cartesian
            .fixed_view_mut::<3, 1>(0, 3)
            .copy_from(origin);
        let basis = self.cartesian_to_fractional.fixed_view::<3, 3>(0, 0).into_owned();
        self.fractional_offset = basis * origin;
        self.cartesian_to_fractional
            .fixed_view_mut::<3, 1>(0, 3)
            .copy_from(&(-self.fractional_offset));
    }

    /// Applies a rotation to the lattice basis. The absolute matrices and the vertices follow
    /// the new orientation.
    pub fn set_orientation(&mut self, mat: &Matrix3<f64>) -> Result<(), SymmetryError> {
        let rotation = mat.to_homogeneous();
        let fractional_to_cartesian = rotation * self.fractional_to_cartesian;
        self.cartesian_to_fractional = invert(&fractional_to_cartesian)?;
        self.fractional_to_cartesian = fractional_to_cartesian;
        self.calc_vertices();
        Ok(())
    }

    /// The Cartesian vertices of the cell at the time it was last oriented, in the order of
    /// [`UNIT_CUBE_POINTS`]. These do not include any later offset.
    pub fn vertices(&self) -> &[Point3<f64>; 8] {
        &self.vertices
    }

    /// The Cartesian vertices of the current (offset) cell in canonical order, optionally
    /// scaled about their centroid.
    ///
    /// # Arguments
    ///
    /// * `scale` - The scale factor. Zero and one leave the box unchanged.
    pub fn canonical_copy(&self, scale: f64) -> [Point3<f64>; 8] {
        let mut pts = [Point3::origin(); 8];
        for (i, corner) in UNIT_CUBE_POINTS.iter().enumerate() {
            pts[TO_CANONICAL[i]] = self
                .fractional_to_cartesian
                .transform_point(&Point3::from(*corner));
        }
        if scale != 0.0 && scale != 1.0 {
            let centre = pts
                .iter()
                .fold(Vector3::zeros(), |acc, p| acc + p.coords)
                / 8.0;
            for pt in pts.iter_mut() {
                pt.coords = centre + (pt.coords - centre) * scale;
            }
        }
        pts
    }

    /// The Cartesian origin followed by the three lattice vectors.
    pub fn unit_cell_vectors(&self) -> [Vector3<f64>; 4] {
        let m = &self.fractional_to_cartesian;
        [
            self.cartesian_offset,
            Vector3::new(m[(0, 0)], m[(1, 0)], m[(2, 0)]),
            Vector3::new(m[(0, 1)], m[(1, 1)], m[(2, 1)]),
            Vector3::new(m[(0, 2)], m[(1, 2)], m[(2, 2)]),
        ]
    }

    /// Searches the neighbouring cells for an image of `f2` at a given distance from `f1`.
    ///
    /// # Arguments
    ///
    /// * `f1`, `f2` - Fractional points.
    /// * `distance` - The target distance.
    /// * `dx` - If positive, the tolerance on `distance`. Otherwise any image closer than
    /// `distance` (but not coincident) matches.
    /// * `ranges` - The number of cells to search on either side along each axis.
    ///
    /// # Returns
    ///
    /// The lattice translation of the first matching image of `f2`, if any.
    pub fn check_distance(
        &self,
        f1: &Point3<f64>,
        f2: &Point3<f64>,
        distance: f64,
        dx: f64,
        ranges: [i32; 3],
    ) -> Option<Vector3<i32>> {
        let p1 = self.to_cartesian(f1, true);
        for i in -ranges[0]..=ranges[0] {
            for j in -ranges[1]..=ranges[1] {
                for k in -ranges[2]..=ranges[2] {
                    let image = f2 + Vector3::new(f64::from(i), f64::from(j), f64::from(k));
                    let d = nalgebra::distance(&p1, &self.to_cartesian(&image, true));
                    let hit = if dx > 0.0 {
                        (d - distance).abs() <= dx
                    } else {
                        d <= distance && d > 0.1
                    };
                    if hit {
                        return Some(Vector3::new(i, j, k));
                    }
                }
            }
        }
        None
    }

    /// Converts displacement parameters into a Cartesian ellipsoid.
    ///
    /// The anisotropic encodings follow the Ortep conventions
    /// $`B_{ij} = D\,C\,\theta_{ij}\,U_{ij}`$, where $`D`$ is $`2\pi^2`$ (types 8 to 10),
    /// $`1/4`$ (types 4, 5), $`\ln 2`$ (types 2, 3) or 1; $`C`$ is 2 for off-diagonal terms
    /// of even types; and $`\theta_{ij} = a_i^* a_j^*`$ for the fractional types 4, 5, 8
    /// and 9. Type 12 is a Cartesian $`U`$.
    ///
    /// # Errors
    ///
    /// Errors if the Ortep type is not supported.
    pub fn ellipsoid(
        &self,
        displacement: &DisplacementParameters,
    ) -> Result<Ellipsoid, SymmetryError> {
        let (u, ortep_type) = match displacement {
            DisplacementParameters::Isotropic(u_iso) => {
                let length = u_iso.max(0.0).sqrt();
                return Ok(Ellipsoid {
                    axes: [Vector3::x(), Vector3::y(), Vector3::z()],
                    lengths: [length; 3],
                    b_cartesian: None,
                    equivalent_isotropic: *u_iso,
                });
            }
            DisplacementParameters::Anisotropic {
                parameters,
                ortep_type,
            } => (parameters, *ortep_type),
        };

        if ortep_type == 12 {
            let b_cartesian = [
                u[0] * TWO_PI_SQUARED,
                u[1] * TWO_PI_SQUARED,
                u[2] * TWO_PI_SQUARED,
                u[3] * TWO_PI_SQUARED * 2.0,
                u[4] * TWO_PI_SQUARED * 2.0,
                u[5] * TWO_PI_SQUARED * 2.0,
            ];
            return Ok(Ellipsoid::from_quadric(
                b_cartesian,
                (u[0] + u[1] + u[2]) / 3.0,
            ));
        }
        if !matches!(ortep_type, 0..=5 | 8..=10) {
            let msg = format!("Unsupported Ortep type {ortep_type} for displacement parameters.");
            log::warn!("{msg}");
            return Err(SymmetryError::NotationParse(msg));
        }

        let is_fractional = matches!(ortep_type, 4 | 5 | 8 | 9);
        let cc = f64::from(2 - (ortep_type % 2));
        let dd = match ortep_type {
            8..=10 => TWO_PI_SQUARED,
            4 | 5 => 0.25,
            2 | 3 => std::f64::consts::LN_2,
            _ => 1.0,
        };
        let [ra, rb, rc] = self.reciprocal_lengths;
        let theta = |x: f64, y: f64| if is_fractional { x * y } else { 1.0 };
        let b11 = u[0] * dd * theta(ra, ra);
        let b22 = u[1] * dd * theta(rb, rb);
        let b33 = u[2] * dd * theta(rc, rc);
        let b12 = u[3] * dd * theta(ra, rb) * cc;
        let b13 = u[4] * dd * theta(ra, rc) * cc;
        let b23 = u[5] * dd * theta(rb, rc) * cc;

        let equivalent_isotropic = (b11 / TWO_PI_SQUARED / ra / ra * b22
            / TWO_PI_SQUARED
            / rb
            / rb
            * b33
            / TWO_PI_SQUARED
            / rc
            / rc)
            .powf(1.0 / 3.0);

        let (a, b, c) = (self.a, self.b, self.c);
        let (cos_beta, cos_gamma, sin_gamma) = (self.cos_beta, self.cos_gamma, self.sin_gamma);
        let (c_a, c_b) = (self.c_a, self.c_b);
        let b_cartesian = [
            a * a * b11
                + b * b * cos_gamma * cos_gamma * b22
                + c * c * cos_beta * cos_beta * b33
                + a * b * cos_gamma * b12
                + b * c * cos_gamma * cos_beta * b23
                + a * c * cos_beta * b13,
            b * b * sin_gamma * sin_gamma * b22
                + c * c * c_a * c_a * b33
                + b * c * c_a * sin_gamma * b23,
            c * c * c_b * c_b * b33,
            2.0 * b * b * cos_gamma * sin_gamma * b22
                + 2.0 * c * c * c_a * cos_beta * b33
                + a * b * sin_gamma * b12
                + b * c * (c_a * cos_gamma + sin_gamma * cos_beta) * b23
                + a * c * c_a * b13,
            2.0 * c * c * c_b * cos_beta * b33 + b * c * cos_gamma * b23 + a * c * c_b * b13,
            2.0 * c * c * c_a * c_b * b33 + b * c * c_b * sin_gamma * b23,
        ];
        Ok(Ellipsoid::from_quadric(b_cartesian, equivalent_isotropic))
    }

    /// Writes the cell parameters and, if `full`, both transform matrices.
    pub fn dump_info(&self, full: bool) -> String {
        let mut s = format!(
            "a={}, b={}, c={}, alpha={}, beta={}, gamma={}",
            self.a, self.b, self.c, self.alpha, self.beta, self.gamma
        );
        if full {
            s += &format!(
                "\nfractional to cartesian: {}\ncartesian to fractional: {}",
                self.fractional_to_cartesian, self.cartesian_to_fractional
            );
        }
        s
    }
}

impl fmt::Display for UnitCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dump_info(false))
    }
}

/// Converts a three-digit cell index such as `555` into a fractional offset.
///
/// # Arguments
///
/// * `nnn` - The cell index. Each digit is offset by 5.
/// * `c` - An additional offset added to every component.
pub fn ijk_to_point(nnn: i32, c: i32) -> Point3<f64> {
    let c = c - 5;
    Point3::new(
        f64::from(nnn / 100 + c),
        f64::from((nnn % 100) / 10 + c),
        f64::from(nnn % 10 + c),
    )
}

/// Reduces a fractional coordinate into $`[0, 1)`$, snapping values within $`10^{-4}`$ of a
/// cell boundary to zero.
fn wrap_coordinate(x: f64) -> f64 {
    let x = x - x.floor();
    if x > 0.9999 || x < 0.0001 {
        0.0
    } else {
        x
    }
}

fn invert(mat: &Matrix4<f64>) -> Result<Matrix4<f64>, SymmetryError> {
    mat.try_inverse().ok_or_else(|| {
        let msg = "The lattice vectors are linearly dependent.".to_string();
        log::error!("{msg}");
        SymmetryError::GeometricDegeneracy(msg)
    })
}
