//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

/// A linear transform between two 3 component spaces.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a [`Transform`] from a 3x3 matrix given in rows, applied to column
/// vectors (`M · v`).
pub fn transform_from_rows(rows: &[[Component; 3]; 3]) -> Transform {
    // euclid multiplies row vectors, so the matrix is stored transposed.
    let [[a, b, c], [d, e, f], [g, h, i]] = *rows;
    Transform::new(
        a, d, g, 0.0, //
        b, e, h, 0.0, //
        c, f, i, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, from: &Components) -> Components {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(from.0, from.1, from.2));
    Components(x, y, z)
}

/// Round `value` to the given number of decimal places.
pub fn round_to<T: Float>(value: T, places: i32) -> T {
    let factor = T::from(10).map_or_else(T::one, |ten: T| ten.powi(places));
    (value * factor).round() / factor
}

/// Convert spherical coordinates, with angles in degrees, to cartesian
/// coordinates.
pub fn spherical_to_cartesian(
    elevation: Component,
    azimuth: Component,
    radius: Component,
) -> (Component, Component, Component) {
    let (elevation, azimuth) = (elevation.to_radians(), azimuth.to_radians());
    let x = radius * elevation.cos() * azimuth.cos();
    let y = radius * elevation.cos() * azimuth.sin();
    let z = radius * elevation.sin();
    (x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn transform_multiplies_column_vectors() {
        let m = transform_from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let result = transform(&m, &Components(1.0, 0.0, -1.0));
        assert_component_eq!(result.0, -2.0);
        assert_component_eq!(result.1, -2.0);
        assert_component_eq!(result.2, -2.0);

        let result = transform(&m, &Components(0.0, 1.0, 0.0));
        assert_eq!(result, Components(2.0, 5.0, 8.0));
    }

    #[test]
    fn inverse_undoes_transform() {
        let m = transform_from_rows(&[[2.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 1.0]]);
        let inverse = m.inverse().unwrap();
        let v = Components(0.25, -0.5, 0.75);
        let back = transform(&inverse, &transform(&m, &v));
        assert_component_eq!(back.0, v.0);
        assert_component_eq!(back.1, v.1);
        assert_component_eq!(back.2, v.2);
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let m = transform_from_rows(&[[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 0.0, 1.0]]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(0.125_f64, 2), 0.13);
        assert_eq!(round_to(-0.344_f64, 2), -0.34);
        assert_eq!(round_to(357.4_f64, 0), 357.0);
    }

    #[test]
    fn spherical() {
        let (x, y, z) = spherical_to_cartesian(0.0, 90.0, 1.0);
        assert_component_eq!(x, 0.0);
        assert_component_eq!(y, 1.0);
        assert_component_eq!(z, 0.0);

        let (x, y, z) = spherical_to_cartesian(90.0, 0.0, 2.0);
        assert_component_eq!(x, 0.0);
        assert_component_eq!(y, 0.0);
        assert_component_eq!(z, 2.0);
    }
}
