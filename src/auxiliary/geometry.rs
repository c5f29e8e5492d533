//! Geometrical objects and manipulations.

use nalgebra::{Matrix3, Point3, Rotation3, Unit, UnitQuaternion, UnitVector3, Vector3};

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod geometry_tests;

// =================
// Utility functions
// =================

/// Returns a $`3 \times 3`$ rotation matrix in $`\mathbb{R}^3`$ corresponding to a
/// rotation through `angle` about `axis` raised to the power `power`.
pub fn proper_rotation_matrix(angle: f64, axis: &Vector3<f64>, power: i8) -> Matrix3<f64> {
    let normalised_axis = UnitVector3::new_normalize(*axis);
    Rotation3::from_axis_angle(&normalised_axis, f64::from(power) * angle).into_inner()
}

/// Returns a unit quaternion describing a local coordinate frame anchored at `centre`.
///
/// The first frame axis points from `centre` towards `x`. The third axis is normal to the
/// plane containing `centre`, `x` and `xy`, and the second axis completes a right-handed set.
///
/// # Returns
///
/// The frame quaternion, or `None` if the three points are collinear.
pub fn quaternion_frame(
    centre: &Point3<f64>,
    x: &Point3<f64>,
    xy: &Point3<f64>,
) -> Option<UnitQuaternion<f64>> {
    let va = x - centre;
    let vb = xy - centre;
    let vc = va.cross(&vb);
    let vb = vc.cross(&va);
    let columns = [
        va.try_normalize(f64::EPSILON)?,
        vb.try_normalize(f64::EPSILON)?,
        vc.try_normalize(f64::EPSILON)?,
    ];
    let rotation = Rotation3::from_matrix_unchecked(Matrix3::from_columns(&columns));
    Some(UnitQuaternion::from_rotation_matrix(&rotation))
}

/// Returns the rotation angle (in degrees, within $`[0, 180]`$) of a quaternion.
pub fn quaternion_theta(q: &UnitQuaternion<f64>) -> f64 {
    q.angle().to_degrees()
}

/// Returns the rotation axis of a quaternion, taken with a non-negative scalar part. A
/// quaternion without a well-defined axis gives $`\hat{\mathbf{z}}`$.
pub fn quaternion_normal(q: &UnitQuaternion<f64>) -> Vector3<f64> {
    q.axis()
        .map(Unit::into_inner)
        .unwrap_or_else(Vector3::z)
}

/// Returns the rotation angle of a quaternion in degrees, negated if the rotation axis points
/// away from `v`.
pub fn quaternion_theta_directed(q: &UnitQuaternion<f64>, v: &Vector3<f64>) -> f64 {
    let theta = quaternion_theta(q);
    if v.dot(&quaternion_normal(q)) < 0.0 {
        -theta
    } else {
        theta
    }
}

/// Computes the signed dihedral angle in degrees defined by four points.
///
/// # Returns
///
/// The dihedral angle $`p_1 p_2 p_3 p_4`$, or `NaN` if three consecutive points are collinear.
pub fn torsion(p1: &Point3<f64>, p2: &Point3<f64>, p3: &Point3<f64>, p4: &Point3<f64>) -> f64 {
    let ij = p1 - p2;
    let kj = p3 - p2;
    let kl = p3 - p4;
    let a = ij.cross(&kj);
    let c = kj.cross(&kl);
    let denom = (a.norm_squared() * c.norm_squared()).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }
    let cosang = (a.dot(&c) / denom).clamp(-1.0, 1.0);
    let angle = cosang.acos().to_degrees();
    if ij.dot(&c) > 0.0 {
        angle
    } else {
        -angle
    }
}

/// A structure describing the helical axis relating two points.
#[derive(Clone, Debug)]
pub struct HelicalAxis {
    /// A point on the axis, namely the foot of the perpendicular from the first point.
    pub point: Point3<f64>,

    /// The axis vector. Its length is the translation along the axis, unless there is no such
    /// translation, in which case it is a unit vector.
    pub axis: Vector3<f64>,

    /// The vector from [`Self::point`] to the first point.
    pub radius: Vector3<f64>,

    /// The directed rotation angle about the axis, in degrees.
    pub angle: f64,

    /// The pitch of the helix. This is zero for a pure rotation.
    pub pitch: f64,
}

/// Computes the helical (screw) axis that takes point `a` to point `b` under the rotation `dq`.
///
/// # Arguments
///
/// * `a` - The pre-image point.
/// * `b` - The image point.
/// * `dq` - The rotation relating the local frames at `a` and `b`.
///
/// # Returns
///
/// The helical axis.
pub fn helical_axis(a: &Point3<f64>, b: &Point3<f64>, dq: &UnitQuaternion<f64>) -> HelicalAxis {
    let vab = b - a;
    let theta = quaternion_theta(dq);
    let mut n = quaternion_normal(dq);
    let mut v_dot_n = vab.dot(&n);
    if v_dot_n.abs() < 1.0e-4 {
        v_dot_n = 0.0;
    }
    let mut va_prime_d = vab.cross(&n);
    if va_prime_d.norm_squared() != 0.0 {
        va_prime_d.normalize_mut();
    }
    // A vanishing projection is replaced by the smallest positive float so that the axis
    // perpendicular to `vab` is still handled.
    let along = if v_dot_n == 0.0 { None } else { Some(v_dot_n) };
    let vcb = n * along.unwrap_or(f64::MIN_POSITIVE);
    let vda = (vcb - vab) * 0.5;
    va_prime_d *= if theta == 0.0 {
        0.0
    } else {
        vda.norm() / (theta / 2.0).to_radians().tan()
    };
    let mut r = va_prime_d;
    if theta != 0.0 {
        r += vda;
    }
    let point = a - r;
    if let Some(along) = along {
        n *= along;
    }
    let pt_b_prime = point + n;
    let mut angle = torsion(a, &point, &pt_b_prime, b);
    if angle.is_nan() || r.norm() < 1.0e-4 {
        angle = quaternion_theta_directed(dq, &n);
    }
    let pitch = match along {
        None => 0.0,
        Some(_) => (n.norm() * if angle == 0.0 { 1.0 } else { 360.0 / angle }).abs(),
    };
    HelicalAxis {
        point,
        axis: n,
        radius: r,
        angle,
        pitch,
    }
}

// ================
// Trait definitions
// ================

/// A trait for rigid transformations of geometrical objects.
pub trait Transform {
    /// Transforms in-place the coordinates about the origin by a given
    /// transformation.
    ///
    /// # Arguments
    ///
    /// * `mat` - A three-dimensional transformation matrix.
    fn transform_mut(&mut self, mat: &Matrix3<f64>);

    /// Rotates in-place the coordinates through `angle` about `axis`.
    fn rotate_mut(&mut self, angle: f64, axis: &Vector3<f64>) {
        self.transform_mut(&proper_rotation_matrix(angle, axis, 1));
    }

    /// Translates in-place the coordinates by a specified translation vector in
    /// three dimensions.
    fn translate_mut(&mut self, tvec: &Vector3<f64>);

    /// Clones and transforms the coordinates about the origin by a given
    /// transformation.
    #[must_use]
    fn transform(&self, mat: &Matrix3<f64>) -> Self
    where
        Self: Clone,
    {
        let mut transformed = self.clone();
        transformed.transform_mut(mat);
        transformed
    }

    /// Clones and rotates the coordinates through `angle` about `axis`.
    #[must_use]
    fn rotate(&self, angle: f64, axis: &Vector3<f64>) -> Self
    where
        Self: Clone,
    {
        let mut rotated = self.clone();
        rotated.rotate_mut(angle, axis);
        rotated
    }

    /// Clones and translates the coordinates by a specified translation vector.
    #[must_use]
    fn translate(&self, tvec: &Vector3<f64>) -> Self
    where
        Self: Clone,
    {
        let mut translated = self.clone();
        translated.translate_mut(tvec);
        translated
    }
}
