//! Fixed-point rational arithmetic in twelfths of a cell edge, and its textual forms.
//!
//! Every lattice translation that can occur in a crystallographic space group is a multiple
//! of $`1/12`$, so translations are carried as (integral) numbers of twelfths while a group is
//! being generated.

use fraction::GenericFraction;
use nalgebra::Matrix4;

#[cfg(test)]
#[path = "twelfths_tests.rs"]
mod twelfths_tests;

type F = GenericFraction<u32>;

/// Wraps a translation given in twelfths into the centred interval $`(-6, 6]`$ if required.
///
/// # Arguments
///
/// * `n12ths` - The translation in twelfths.
/// * `do_normalise` - If `false`, `n12ths` is returned unchanged.
pub fn normalise_twelfths(n12ths: f64, do_normalise: bool) -> f64 {
    let mut value = n12ths;
    if do_normalise {
        while value > 6.0 {
            value -= 12.0;
        }
        while value <= -6.0 {
            value += 12.0;
        }
    }
    value
}

/// Wraps a translation given in twelfths into $`[0, 12)`$.
pub fn wrap_twelfths(n12ths: f64) -> f64 {
    (n12ths.round() as i64).rem_euclid(12) as f64
}

/// Formats a number of twelfths as a reduced fraction, *e.g.* `1/4`, `-5/12`, `3/2` or `2`.
pub fn twelfths_of(n12ths: f64) -> String {
    let i12ths = n12ths.round() as i64;
    let sign = if i12ths < 0 { "-" } else { "" };
    let magnitude = u32::try_from(i12ths.unsigned_abs()).unwrap_or(u32::MAX);
    let frac = F::new(magnitude, 12u32);
    match (frac.numer(), frac.denom()) {
        (Some(&0), _) => "0".to_string(),
        (Some(numer), Some(&1)) => format!("{sign}{numer}"),
        (Some(numer), Some(denom)) => format!("{sign}{numer}/{denom}"),
        _ => "0".to_string(),
    }
}

/// Formats the constant part of one row of an operator string.
///
/// # Arguments
///
/// * `n12ths` - The translation in twelfths.
/// * `all_positive` - If `true`, negative translations are shifted up by whole cells.
/// * `half_or_less` - If `true` (and `all_positive` is `false`), translations beyond half a
/// cell are shifted down by one cell.
///
/// # Returns
///
/// An empty string for a zero translation, otherwise the signed fraction.
pub fn xyz_fraction(n12ths: f64, all_positive: bool, half_or_less: bool) -> String {
    let mut value = n12ths.round();
    if all_positive {
        while value < 0.0 {
            value += 12.0;
        }
    } else if half_or_less && value > 6.0 {
        value -= 12.0;
    }
    let s = twelfths_of(value);
    if s.starts_with('0') {
        String::new()
    } else if value > 0.0 {
        format!("+{s}")
    } else {
        s
    }
}

/// Formats an affine matrix as an operator string such as `-x,y+1/2,-z`.
///
/// # Arguments
///
/// * `mat` - The affine matrix.
/// * `is_12ths` - Whether the translation column of `mat` is in twelfths or in cell fractions.
/// * `all_positive` - See [`xyz_fraction`].
/// * `half_or_less` - See [`xyz_fraction`].
pub fn xyz_from_matrix(
    mat: &Matrix4<f64>,
    is_12ths: bool,
    all_positive: bool,
    half_or_less: bool,
) -> String {
    (0..3)
        .map(|i| {
            let mut term = String::new();
            for (j, letter) in ['x', 'y', 'z'].iter().enumerate() {
                let coeff = mat[(i, j)];
                if coeff != 0.0 {
                    term.push(if coeff < 0.0 { '-' } else { '+' });
                    term.push(*letter);
                }
            }
            let t = if is_12ths {
                mat[(i, 3)]
            } else {
                mat[(i, 3)] * 12.0
            };
            term += &xyz_fraction(t, all_positive, half_or_less);
            term.strip_prefix('+').map(str::to_string).unwrap_or(term)
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Formats a Seitz matrix whose translation column is in twelfths, one brace-delimited,
/// tab-separated row per line.
pub fn dump_seitz(mat: &Matrix4<f64>) -> String {
    seitz_rows(mat, 0.0)
}

/// Formats a Seitz matrix like [`dump_seitz`], but with the translations shifted by one whole
/// cell so that they sort uniformly. Used to build canonical keys for whole groups.
pub fn dump_canonical_seitz(mat: &Matrix4<f64>) -> String {
    seitz_rows(mat, 12.0)
}

fn seitz_rows(mat: &Matrix4<f64>, shift: f64) -> String {
    let mut s = String::new();
    for i in 0..3 {
        s += &format!(
            "{{\t{}\t{}\t{}\t{}\t}}\n",
            mat[(i, 0)].round() as i64,
            mat[(i, 1)].round() as i64,
            mat[(i, 2)].round() as i64,
            twelfths_of(mat[(i, 3)] + shift),
        );
    }
    s += "{\t0\t0\t0\t1\t}\n";
    s
}

/// Formats a fractional coordinate in thirds or twelfths, *e.g.* `1/3`, `-1/4` or `1`.
///
/// # Arguments
///
/// * `x` - A fractional coordinate. It is rounded to the nearest 1/24 first.
pub fn fractional_coordinate(x: f64) -> String {
    let x24 = crate::auxiliary::misc::approx(x.abs() * 24.0) as i64;
    let sign = if x < 0.0 { "-" } else { "" };
    if x24 % 8 != 0 {
        let s = twelfths_of((x24 >> 1) as f64);
        format!("{sign}{s}")
    } else if x24 == 0 {
        "0".to_string()
    } else if x24 == 24 {
        format!("{sign}1")
    } else {
        format!("{sign}{}/3", x24 / 8)
    }
}

/// Formats a fractional point as three space-separated coordinates using
/// [`fractional_coordinate`].
pub fn fcoord(p: &[f64; 3]) -> String {
    p.iter()
        .map(|x| fractional_coordinate(*x))
        .collect::<Vec<_>>()
        .join(" ")
}
