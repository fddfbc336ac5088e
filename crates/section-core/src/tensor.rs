//! Inertia tensor and principal-axis resolution.
//!
//! Diagonalizing the 2x2 symmetric inertia tensor is pure tensor math:
//! it depends only on the three scalar components, not on the polygon
//! that produced them.

/// Second moments and product of inertia about a section's centroid.
///
/// For any non-degenerate simple polygon `ixx` and `iyy` are
/// non-negative; `ixy` may carry either sign.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InertiaTensor {
    ixx: f64,
    iyy: f64,
    ixy: f64,
}

impl InertiaTensor {
    /// Creates a tensor from its three centroidal components
    pub fn new(ixx: f64, iyy: f64, ixy: f64) -> Self {
        Self { ixx, iyy, ixy }
    }

    /// Second moment of area about the centroidal x-axis
    pub fn ixx(self) -> f64 {
        self.ixx
    }

    /// Second moment of area about the centroidal y-axis
    pub fn iyy(self) -> f64 {
        self.iyy
    }

    /// Product of inertia about the centroidal axes
    pub fn ixy(self) -> f64 {
        self.ixy
    }

    /// Resolves the principal moments and orientation of this tensor.
    ///
    /// Closed-form eigen-decomposition of the symmetric 2x2 tensor:
    /// the principal moments are `avg ± sqrt(diff² + ixy²)` and the
    /// major-axis orientation is `atan2(-ixy, diff) / 2`.
    ///
    /// An isotropic tensor (`diff == 0` and `ixy == 0`, e.g. a square
    /// about its centroid) has no defined orientation; the angle falls
    /// back to `0.0` rather than propagating a platform-dependent
    /// `atan2(0, 0)` result.
    pub fn principal(self) -> Principal {
        let avg = (self.ixx + self.iyy) / 2.0;
        let diff = (self.ixx - self.iyy) / 2.0;
        let radius = diff.hypot(self.ixy);
        let theta = if diff == 0.0 && self.ixy == 0.0 {
            0.0
        } else {
            (-self.ixy).atan2(diff) / 2.0
        };
        Principal {
            i1: avg + radius,
            i2: avg - radius,
            theta,
        }
    }
}

/// Principal moments of inertia and the major-axis orientation.
///
/// `i1 >= i2` by construction (`i1` takes the positive square-root
/// term). `theta` is the rotation in radians from the x-axis to the
/// `i1` principal axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Principal {
    i1: f64,
    i2: f64,
    theta: f64,
}

impl Principal {
    /// Major principal moment of inertia
    pub fn i1(self) -> f64 {
        self.i1
    }

    /// Minor principal moment of inertia
    pub fn i2(self) -> f64 {
        self.i2
    }

    /// Orientation of the major principal axis, radians from the x-axis
    pub fn theta(self) -> f64 {
        self.theta
    }

    /// Orientation of the major principal axis, in degrees
    pub fn theta_degrees(self) -> f64 {
        self.theta.to_degrees()
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn i1_is_never_below_i2(
            ixx in -1e6f64..1e6,
            iyy in -1e6f64..1e6,
            ixy in -1e6f64..1e6,
        ) {
            let principal = InertiaTensor::new(ixx, iyy, ixy).principal();
            prop_assert!(principal.i1() >= principal.i2());
        }

        #[test]
        fn negating_ixy_reflects_theta(
            ixx in -1e6f64..1e6,
            iyy in -1e6f64..1e6,
            ixy in 1e-6f64..1e6,
        ) {
            let plus = InertiaTensor::new(ixx, iyy, ixy).principal();
            let minus = InertiaTensor::new(ixx, iyy, -ixy).principal();
            prop_assert!((plus.theta() + minus.theta()).abs() < 1e-12);
            prop_assert!((plus.i1() - minus.i1()).abs() < 1e-6);
        }
    }
}
