use glam::{Mat4, Vec3};

/// Placement of a part: translation, rotation in degrees about X, Y and Z,
/// and a per-axis scale. Negative scale components are allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        tx: f32,
        ty: f32,
        tz: f32,
        rx: f32,
        ry: f32,
        rz: f32,
        sx: f32,
        sy: f32,
        sz: f32,
    ) -> Self {
        Self {
            translation: Vec3::new(tx, ty, tz),
            rotation: Vec3::new(rx, ry, rz),
            scale: Vec3::new(sx, sy, sz),
        }
    }

    /// Unrotated pose, the common case for furniture.
    pub const fn placed(tx: f32, ty: f32, tz: f32, sx: f32, sy: f32, sz: f32) -> Self {
        Self::new(tx, ty, tz, 0.0, 0.0, 0.0, sx, sy, sz)
    }

    pub fn with_rotation_y(mut self, degrees: f32) -> Self {
        self.rotation.y = degrees;
        self
    }

    pub fn to_matrix(&self) -> Mat4 {
        compose(self, Vec3::ZERO)
    }
}

/// `T(translation + offset) * Rx * Ry * Rz * S`.
///
/// Scale is applied first and translation last, so every part pivots about
/// its own local origin.
pub fn compose(pose: &Pose, offset: Vec3) -> Mat4 {
    let translation = Mat4::from_translation(pose.translation + offset);
    let rotate_x = Mat4::from_rotation_x(pose.rotation.x.to_radians());
    let rotate_y = Mat4::from_rotation_y(pose.rotation.y.to_radians());
    let rotate_z = Mat4::from_rotation_z(pose.rotation.z.to_radians());
    let scale = Mat4::from_scale(pose.scale);
    translation * rotate_x * rotate_y * rotate_z * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec4;

    fn assert_mat_eq(a: Mat4, b: Mat4) {
        for (x, y) in a.to_cols_array().iter().zip(b.to_cols_array().iter()) {
            assert_relative_eq!(*x, *y, epsilon = 1e-5);
        }
    }

    /// Elementary matrices written out by hand, column-major.
    fn reference(pose: &Pose, offset: Vec3) -> Mat4 {
        let t = pose.translation + offset;
        let translate = Mat4::from_cols(
            Vec4::X,
            Vec4::Y,
            Vec4::Z,
            Vec4::new(t.x, t.y, t.z, 1.0),
        );
        let (sx, cx) = pose.rotation.x.to_radians().sin_cos();
        let rx = Mat4::from_cols(
            Vec4::X,
            Vec4::new(0.0, cx, sx, 0.0),
            Vec4::new(0.0, -sx, cx, 0.0),
            Vec4::W,
        );
        let (sy, cy) = pose.rotation.y.to_radians().sin_cos();
        let ry = Mat4::from_cols(
            Vec4::new(cy, 0.0, -sy, 0.0),
            Vec4::Y,
            Vec4::new(sy, 0.0, cy, 0.0),
            Vec4::W,
        );
        let (sz, cz) = pose.rotation.z.to_radians().sin_cos();
        let rz = Mat4::from_cols(
            Vec4::new(cz, sz, 0.0, 0.0),
            Vec4::new(-sz, cz, 0.0, 0.0),
            Vec4::Z,
            Vec4::W,
        );
        let scale = Mat4::from_diagonal(pose.scale.extend(1.0));
        translate * rx * ry * rz * scale
    }

    #[test]
    fn test_identity_pose() {
        assert_eq!(Pose::IDENTITY.to_matrix(), Mat4::IDENTITY);
        assert_eq!(Pose::default(), Pose::IDENTITY);
    }

    #[test]
    fn test_rotate_x_then_scale() {
        let pose = Pose::new(1.0, 0.0, 0.0, 90.0, 0.0, 0.0, 1.0, 2.0, 1.0);
        let p = compose(&pose, Vec3::ZERO).transform_point3(Vec3::Y);
        // +Y is stretched to length 2, then turned onto +Z by the right-handed
        // quarter turn about X, then moved along X.
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_matches_reference_product() {
        let poses = [
            Pose::new(1.0, -2.0, 3.5, 30.0, 45.0, 60.0, 1.0, 2.0, 0.5),
            Pose::new(-2.35, -0.75, -7.0, 0.0, 0.0, 180.0, 0.2, 5.0, 17.0),
            Pose::new(0.0, 0.0, 0.0, -90.0, 270.0, 15.0, 5.5, -1.0, 0.2),
        ];
        let offsets = [Vec3::ZERO, Vec3::new(4.0, 0.0, -2.0), Vec3::new(-0.1, 1.0, -6.0)];

        for pose in &poses {
            for &offset in &offsets {
                assert_mat_eq(compose(pose, offset), reference(pose, offset));
            }
        }
    }

    #[test]
    fn test_order_is_significant() {
        let pose = Pose::new(0.0, 0.0, 0.0, 90.0, 90.0, 0.0, 1.0, 1.0, 1.0);
        let composed = compose(&pose, Vec3::ZERO);
        let swapped = Mat4::from_rotation_y(90f32.to_radians()) * Mat4::from_rotation_x(90f32.to_radians());
        let p = composed.transform_point3(Vec3::Z);
        let q = swapped.transform_point3(Vec3::Z);
        assert!((p - q).length() > 0.5);
    }

    #[test]
    fn test_offset_adds_to_translation() {
        let pose = Pose::placed(0.0, 0.0, 0.2, 5.5, 0.2, 1.75);
        let offset = Vec3::new(4.0, 0.0, -2.0);
        let m = compose(&pose, offset);
        let moved = Pose {
            translation: pose.translation + offset,
            ..pose
        };
        assert_eq!(m, moved.to_matrix());
        assert_relative_eq!(m.w_axis.x, 4.0);
        assert_relative_eq!(m.w_axis.z, -1.8, epsilon = 1e-6);
    }

    #[test]
    fn test_scale_applies_before_rotation() {
        // A part stretched along X then turned a quarter about Z ends up
        // stretched along Y.
        let pose = Pose::new(0.0, 0.0, 0.0, 0.0, 0.0, 90.0, 3.0, 1.0, 1.0);
        let p = pose.to_matrix().transform_point3(Vec3::X);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_negative_scale_flips_axis() {
        let pose = Pose::placed(0.0, 0.0, 0.57, 5.5, -1.0, 0.2);
        let p = pose.to_matrix().transform_point3(Vec3::new(0.0, 0.5, 0.0));
        assert_relative_eq!(p.y, -0.5);
    }

    #[test]
    fn test_with_rotation_y_keeps_translation() {
        let pose = Pose::placed(2.25, 2.4, -5.75, 3.0, 0.05, 0.4).with_rotation_y(120.0);
        assert_eq!(pose.rotation, Vec3::new(0.0, 120.0, 0.0));
        assert_eq!(pose.translation, Vec3::new(2.25, 2.4, -5.75));
    }
}
