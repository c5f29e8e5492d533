//! Geometric classification of a symmetry operation.
//!
//! The classification compares a local coordinate frame at a reference point with the frame
//! carried by the operation onto its image. A left-handed image frame reveals an improper
//! operation, which is inverted back before the rotation relating the two frames is analysed
//! as a helical motion. Improper operations are then mapped onto their proper descriptions:
//! an inverted $`2_1`$ screw is a mirror or glide plane, and inverted $`6_1`$, $`4_1`$ and
//! $`3_1`$ screws are $`\bar{6}`$, $`\bar{4}`$ and $`\bar{3}`$ axes located $`2/3`$, $`1`$
//! and $`2`$ of the way along the frame-to-image construction.

use std::fmt;

use nalgebra::{Matrix4, Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::auxiliary::geometry::{helical_axis, quaternion_frame, torsion};
use crate::auxiliary::misc::{approx, approx_to};
use crate::symmetry::symmetry_error::SymmetryError;
use crate::symmetry::symmetry_operation::SymmetryOperation;
use crate::symmetry::twelfths::{fcoord, xyz_from_matrix};
use crate::symmetry::unit_cell::UnitCell;

/// The translation direction of a glide plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlideKind {
    A,
    B,
    C,
    /// Diagonal glide.
    N,
    /// Diamond glide.
    D,
}

impl GlideKind {
    /// Determines the glide type from a fractional glide translation.
    fn from_translation(ftrans: &Vector3<f64>) -> Self {
        let [fx, fy, fz] = [ftrans.x, ftrans.y, ftrans.z].map(|v| approx(v) != 0.0);
        match (fx, fy, fz) {
            (true, true, true) => Self::D,
            (true, true, false) | (false, true, true) | (true, false, true) => Self::N,
            (true, false, false) => Self::A,
            (false, true, false) => Self::B,
            (false, false, _) => Self::C,
        }
    }
}

impl fmt::Display for GlideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::N => "n",
            Self::D => "d",
        };
        write!(f, "{letter}")
    }
}

/// The geometric type of a symmetry operation. Points are Cartesian; translations are
/// fractional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum OperationKind {
    Identity,

    /// A pure lattice or centring translation.
    Translation { translation: Vector3<f64> },

    Inversion { centre: Point3<f64> },

    /// A proper rotation $`C_n`$.
    Rotation {
        order: u32,
        axis_point: Point3<f64>,
        axis: Vector3<f64>,
        angle: i32,
    },

    /// A screw rotation $`n_m`$ with its translation along the axis.
    ScrewRotation {
        order: u32,
        axis_point: Point3<f64>,
        axis: Vector3<f64>,
        angle: i32,
        translation: Vector3<f64>,
    },

    /// A rotoinversion $`\bar{n}`$.
    Rotoinversion {
        order: u32,
        axis_point: Point3<f64>,
        axis: Vector3<f64>,
        angle: i32,
        inversion_centre: Option<Point3<f64>>,
    },

    MirrorPlane {
        point: Point3<f64>,
        normal: Vector3<f64>,
    },

    GlidePlane {
        kind: GlideKind,
        point: Point3<f64>,
        normal: Vector3<f64>,
        translation: Vector3<f64>,
    },
}

/// A structure for the classification of one symmetry operation relative to a reference
/// point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OperationDescription {
    /// The operation, including any lattice translation needed to reach the target point.
    pub xyz: String,

    /// The operation as originally supplied.
    pub xyz_original: String,

    /// The geometric type of the operation.
    pub kind: OperationKind,

    /// A human-readable label, *e.g.* `C2 axis` or `c-glide plane |translation: 0 0 1/2`.
    pub label: String,

    /// The matrix of the operation, including any lattice translation.
    pub matrix: Matrix4<f64>,

    /// The lattice translation added to reach the target point, in cell fractions.
    pub lattice_translation: Vector3<f64>,

    /// The Cartesian translation component, if any.
    pub cartesian_translation: Option<Vector3<f64>>,
}

fn approx0(v: &mut Vector3<f64>) {
    for x in v.iter_mut() {
        if x.abs() < 1.0e-4 {
            *x = 0.0;
        }
    }
}

fn fractional_vector(uc: &UnitCell, v: &Vector3<f64>) -> Vector3<f64> {
    uc.to_fractional(&Point3::from(*v), false).coords
}

impl SymmetryOperation {
    /// Classifies the operation geometrically.
    ///
    /// # Arguments
    ///
    /// * `uc` - The unit cell.
    /// * `pt00` - The Cartesian reference point. The origin is used if absent. It should not
    /// lie on a symmetry element of the operation.
    /// * `target` - An optional Cartesian image of `pt00`. If given, the lattice translation
    /// that carries the image of `pt00` onto `target` is folded into the operation.
    ///
    /// # Errors
    ///
    /// Errors with [`SymmetryError::GeometricDegeneracy`] if `target` is not an image of
    /// `pt00` under the operation, or if no local frame can be formed.
    pub fn describe(
        &self,
        uc: &UnitCell,
        pt00: Option<&Point3<f64>>,
        target: Option<&Point3<f64>>,
    ) -> Result<OperationDescription, SymmetryError> {
        let m = self.finalised();
        let pt00 = pt00
            .filter(|pt| !pt.x.is_nan())
            .copied()
            .unwrap_or_else(Point3::origin);
        let zero = Vector3::zeros();

        let mut vtrans = Vector3::zeros();
        if let Some(target) = target {
            let pt02 = uc.to_unit_cell(target, Some(&zero));
            let pt01 = uc.to_unit_cell(&pt00, Some(&zero));
            let pt01 = uc.to_unit_cell(
                &uc.to_cartesian(&m.transform_point(&uc.to_fractional(&pt01, false)), false),
                Some(&zero),
            );
            if nalgebra::distance(&pt01, &pt02) > 0.1 {
                let msg = format!(
                    "Point {target} is not an image of {pt00} under operation `{}`.",
                    self.xyz
                );
                log::warn!("{msg}");
                return Err(SymmetryError::GeometricDegeneracy(msg));
            }
            let f01 = m.transform_point(&uc.to_fractional(&pt00, false));
            vtrans = uc.to_fractional(target, false) - f01;
        }

        let pt01 = pt00 + Vector3::x();
        let pt02 = pt00 + Vector3::y();
        let pt03 = pt00 + Vector3::z();
        let image = |pt: &Point3<f64>| {
            uc.to_cartesian(&(m.transform_point(&uc.to_fractional(pt, false)) + vtrans), false)
        };
        let p0 = image(&pt00);
        let mut p1 = image(&pt01);
        let mut p2 = image(&pt02);
        let p3 = image(&pt03);
        vtrans.iter_mut().for_each(|v| *v = approx(*v));

        let v01 = p1 - p0;
        let v02 = p2 - p0;
        let v03 = p3 - p0;
        let mut have_inversion = v01.cross(&v02).dot(&v03) < 0.0;

        // Proper rotations only are analysed; an improper image frame is inverted first.
        if have_inversion {
            p1 -= 2.0 * v01;
            p2 -= 2.0 * v02;
        }
        let frame_degeneracy = || {
            let msg = format!("No local frame for operation `{}`.", self.xyz);
            log::warn!("{msg}");
            SymmetryError::GeometricDegeneracy(msg)
        };
        let q_image = quaternion_frame(&p0, &p1, &p2).ok_or_else(frame_degeneracy)?;
        let q_ref = quaternion_frame(&pt00, &pt01, &pt02).ok_or_else(frame_degeneracy)?;
        let helix = helical_axis(&pt00, &p0, &(q_image * q_ref.inverse()));
        let mut pa1 = helix.point;
        let mut ax1 = helix.axis;
        let mut ang1 = approx_to(helix.angle, 1.0).abs() as i32;
        let pitch1 = approx(helix.pitch);

        let mut trans = Some(p0 - pt00).filter(|t| t.norm() >= 0.1);
        let mut ftrans: Option<Vector3<f64>> = None;

        let is_translation = ang1 == 0;
        let mut is_rotation = !is_translation;
        let mut is_inversion = false;
        let mut is_mirror_plane = false;
        if is_rotation || have_inversion {
            trans = None;
        }

        let mut ptinv: Option<Point3<f64>> = None;
        let mut ipt: Option<Point3<f64>> = None;

        if have_inversion && is_translation {
            ipt = Some(Point3::from((pt00.coords + p0.coords) * 0.5));
            ptinv = Some(p0);
            is_inversion = true;
        } else if have_inversion {
            let d = if pitch1 == 0.0 { Vector3::zeros() } else { ax1 };
            let f = match ang1 {
                60 => 2.0 / 3.0,
                120 => 2.0,
                90 => 1.0,
                180 => {
                    // An inverted two-fold is a mirror, possibly with a glide component.
                    let pt0 = pt00 + d;
                    pa1 = pt00 + 0.5 * d;
                    if nalgebra::distance(&pt0, &p0) > 0.1 {
                        let t = p0 - pt0;
                        ftrans = Some(fractional_vector(uc, &t));
                        trans = Some(t);
                    } else {
                        trans = None;
                    }
                    is_rotation = false;
                    have_inversion = false;
                    is_mirror_plane = true;
                    0.0
                }
                _ => 0.0,
            };
            if f != 0.0 {
                let vtemp = ((pt00 - pa1) + (p0 - pa1) - d) * f;
                pa1 += vtemp;
                let centre = pa1 + 0.5 * d;
                ipt = Some(centre);
                ptinv = Some(Point3::from(2.0 * centre.coords - pt00.coords));
            }
        } else if let Some(t) = trans {
            let mut f = fractional_vector(uc, &t);
            f.iter_mut().for_each(|v| {
                if approx(*v) == 1.0 {
                    *v = 0.0;
                }
            });
            ftrans = Some(f);
            trans = Some(uc.to_cartesian(&Point3::from(f), false).coords);
        }

        let ang = ang1;
        approx0(&mut ax1);

        if is_rotation {
            let ang2 = if have_inversion {
                ptinv.map_or(f64::NAN, |ptinv| torsion(&ptinv, &pa1, &(pa1 + ax1), &p0))
            } else {
                torsion(&pt00, &pa1, &(pa1 + ax1), &p0)
            };
            let ang2 = ang2 as i32;
            if ang2 != 0 {
                ang1 = ang2;
            }
        }

        if is_rotation
            && !have_inversion
            && pitch1 == 0.0
            && (ax1.z < 0.0 || ax1.z == 0.0 && (ax1.y < 0.0 || ax1.y == 0.0 && ax1.x < 0.0))
        {
            ax1 = -ax1;
            ang1 = -ang1;
        }

        let fcoord_of = |pt: &Point3<f64>| {
            let f = uc.to_fractional(pt, false);
            fcoord(&[f.x, f.y, f.z])
        };
        let order = if ang != 0 { (360 / ang).unsigned_abs() } else { 1 };
        let mut label = "identity".to_string();
        if is_inversion {
            if let Some(ipt) = ipt.as_ref() {
                label = format!("inversion center|{}", fcoord_of(ipt));
            }
        } else if is_rotation {
            label = if have_inversion {
                format!("{order}-bar axis")
            } else if pitch1 != 0.0 {
                let f = fractional_vector(uc, &ax1);
                format!(
                    "{order}-fold screw axis|translation: {}",
                    fcoord(&[f.x, f.y, f.z])
                )
            } else {
                format!("C{order} axis")
            };
        } else if let (Some(f), true) = (ftrans.as_ref(), trans.is_some()) {
            let s = fcoord(&[f.x, f.y, f.z]);
            if is_translation {
                label = format!("translation: {s}");
            } else if is_mirror_plane {
                label = format!(
                    "{}-glide plane |translation: {s}",
                    GlideKind::from_translation(f)
                );
            }
        } else if is_mirror_plane {
            label = "mirror plane".to_string();
        }
        if have_inversion && !is_inversion {
            if let Some(ipt) = ipt.as_ref() {
                label += &format!("|inversion center at {}", fcoord_of(ipt));
            }
        }

        if trans.is_none() {
            ftrans = None;
        }
        if is_rotation && !have_inversion && pitch1 != 0.0 {
            ftrans = Some(fractional_vector(uc, &ax1));
            trans = Some(ax1);
        }
        if is_mirror_plane {
            ang1 = 0;
        }
        let axis = ax1.try_normalize(f64::EPSILON).unwrap_or(ax1);

        let kind = if is_inversion {
            OperationKind::Inversion {
                centre: ipt.unwrap_or(pt00),
            }
        } else if is_rotation && have_inversion {
            OperationKind::Rotoinversion {
                order,
                axis_point: pa1,
                axis,
                angle: ang1,
                inversion_centre: ipt,
            }
        } else if is_rotation && pitch1 != 0.0 {
            OperationKind::ScrewRotation {
                order,
                axis_point: pa1,
                axis,
                angle: ang1,
                translation: ftrans.unwrap_or(zero),
            }
        } else if is_rotation {
            OperationKind::Rotation {
                order,
                axis_point: pa1,
                axis,
                angle: ang1,
            }
        } else if is_mirror_plane {
            match ftrans {
                Some(translation) => OperationKind::GlidePlane {
                    kind: GlideKind::from_translation(&translation),
                    point: pa1,
                    normal: axis,
                    translation,
                },
                None => OperationKind::MirrorPlane {
                    point: pa1,
                    normal: axis,
                },
            }
        } else if let Some(translation) = ftrans {
            OperationKind::Translation { translation }
        } else {
            OperationKind::Identity
        };

        let mut m2 = *m.matrix();
        for i in 0..3 {
            m2[(i, 3)] += vtrans[i];
        }
        Ok(OperationDescription {
            xyz: xyz_from_matrix(&m2, false, false, false),
            xyz_original: self.xyz_original.clone(),
            kind,
            label,
            matrix: m2,
            lattice_translation: vtrans,
            cartesian_translation: trans.map(|mut t| {
                approx0(&mut t);
                t
            }),
        })
    }
}
