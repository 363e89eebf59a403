//! Preview camera placement
//!
//! The preview camera sits on a fixed azimuth/elevation around the combined
//! bounding box of the exported meshes, at a distance proportional to the
//! box's longest side, and looks at the box center with a level horizon.

use serde::{Deserialize, Serialize};

pub type Vec3 = [f64; 3];

/// Axis-aligned bounding box in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        let mut out = *self;
        for i in 0..3 {
            out.min[i] = out.min[i].min(other.min[i]);
            out.max[i] = out.max[i].max(other.max[i]);
        }
        out
    }

    /// Union of all boxes, `None` when empty
    pub fn union_all<'a>(boxes: impl IntoIterator<Item = &'a Bounds>) -> Option<Bounds> {
        boxes
            .into_iter()
            .fold(None, |acc: Option<Bounds>, b| Some(acc.map_or(*b, |a| a.union(b))))
    }

    pub fn center(&self) -> Vec3 {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
            (self.min[2] + self.max[2]) / 2.0,
        ]
    }

    pub fn longest_side(&self) -> f64 {
        (0..3)
            .map(|i| self.max[i] - self.min[i])
            .fold(0.0, f64::max)
    }

    /// Scale the box about `origin` by per-axis `factor`
    pub fn scaled_about(&self, origin: Vec3, factor: Vec3) -> Bounds {
        let mut min = [0.0; 3];
        let mut max = [0.0; 3];
        for i in 0..3 {
            let a = origin[i] + (self.min[i] - origin[i]) * factor[i];
            let b = origin[i] + (self.max[i] - origin[i]) * factor[i];
            min[i] = a.min(b);
            max[i] = a.max(b);
        }
        Bounds { min, max }
    }
}

/// Framing parameters of the preview render
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    pub resolution: u32,
    pub distance_factor: f64,
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            resolution: 512,
            distance_factor: 2.5,
            azimuth_deg: 45.0,
            elevation_deg: 30.0,
        }
    }
}

/// Camera location and XYZ euler rotation (radians)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPlacement {
    pub location: Vec3,
    pub rotation_euler: Vec3,
}

impl CameraPlacement {
    /// Placement used when the scene has no mesh bounds
    pub const FALLBACK: CameraPlacement = CameraPlacement {
        location: [5.0, 5.0, 5.0],
        rotation_euler: [0.785398, 0.0, 0.785398],
    };
}

/// Camera framing `bounds`, or the fallback placement without bounds
pub fn place_camera(bounds: Option<&Bounds>, settings: &PreviewSettings) -> CameraPlacement {
    let Some(bounds) = bounds else {
        return CameraPlacement::FALLBACK;
    };

    let center = bounds.center();
    let distance = bounds.longest_side() * settings.distance_factor;
    let az = settings.azimuth_deg.to_radians();
    let el = settings.elevation_deg.to_radians();

    let location = [
        center[0] + distance * az.cos() * el.cos(),
        center[1] + distance * az.sin() * el.cos(),
        center[2] + distance * el.sin(),
    ];

    CameraPlacement {
        location,
        rotation_euler: look_at_euler(location, center),
    }
}

/// XYZ euler for a camera at `from` looking at `to`.
///
/// Cameras look down their local -Z with +Y up; rotating by X then Z keeps
/// the local X axis horizontal. A degenerate direction (from == to) keeps
/// the camera looking straight down.
pub fn look_at_euler(from: Vec3, to: Vec3) -> Vec3 {
    let d = [to[0] - from[0], to[1] - from[1], to[2] - from[2]];
    let horizontal = d[0].hypot(d[1]);
    if horizontal == 0.0 && d[2] == 0.0 {
        return [0.0, 0.0, 0.0];
    }
    let x = horizontal.atan2(-d[2]);
    let z = if horizontal == 0.0 { 0.0 } else { (-d[0]).atan2(d[1]) };
    [x, 0.0, z]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Forward vector of a camera with XYZ euler `[x, 0, z]`
    fn forward(rot: Vec3) -> Vec3 {
        let (sx, cx) = rot[0].sin_cos();
        let (sz, cz) = rot[2].sin_cos();
        [-sz * sx, cz * sx, -cx]
    }

    #[test]
    fn union_covers_both_boxes() {
        let a = Bounds::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let b = Bounds::new([-2.0, 0.5, 0.0], [0.5, 3.0, 0.5]);
        let u = a.union(&b);
        assert_eq!(u.min, [-2.0, 0.0, 0.0]);
        assert_eq!(u.max, [1.0, 3.0, 1.0]);
    }

    #[test]
    fn union_all_of_nothing_is_none() {
        assert!(Bounds::union_all(std::iter::empty()).is_none());
    }

    #[test]
    fn fallback_without_bounds() {
        let cam = place_camera(None, &PreviewSettings::default());
        assert_eq!(cam, CameraPlacement::FALLBACK);
    }

    #[test]
    fn camera_distance_scales_with_longest_side() {
        let bounds = Bounds::new([-1.0, -1.0, 0.0], [1.0, 1.0, 4.0]);
        let cam = place_camera(Some(&bounds), &PreviewSettings::default());
        let c = bounds.center();
        let offset: Vec3 = [
            cam.location[0] - c[0],
            cam.location[1] - c[1],
            cam.location[2] - c[2],
        ];
        let dist = (offset[0].powi(2) + offset[1].powi(2) + offset[2].powi(2)).sqrt();
        assert!(close(dist, 4.0 * 2.5));
        // elevation 30 degrees
        assert!(close(offset[2], dist * 0.5));
        // azimuth 45 degrees
        assert!(close(offset[0], offset[1]));
    }

    #[test]
    fn camera_looks_at_center() {
        let bounds = Bounds::new([2.0, -3.0, 1.0], [4.0, 1.0, 2.0]);
        let cam = place_camera(Some(&bounds), &PreviewSettings::default());
        let c = bounds.center();
        let to_center = [
            c[0] - cam.location[0],
            c[1] - cam.location[1],
            c[2] - cam.location[2],
        ];
        let len = (to_center[0].powi(2) + to_center[1].powi(2) + to_center[2].powi(2)).sqrt();
        let f = forward(cam.rotation_euler);
        for i in 0..3 {
            assert!(close(f[i], to_center[i] / len), "axis {i}: {} vs {}", f[i], to_center[i] / len);
        }
        assert_eq!(cam.rotation_euler[1], 0.0);
    }

    #[test]
    fn default_framing_angles() {
        let bounds = Bounds::new([0.0; 3], [1.0; 3]);
        let cam = place_camera(Some(&bounds), &PreviewSettings::default());
        assert!(close(cam.rotation_euler[0], 60f64.to_radians()));
        assert!(close(cam.rotation_euler[2], 135f64.to_radians()));
    }

    #[test]
    fn scaling_about_origin() {
        let b = Bounds::new([1.0, 1.0, 1.0], [3.0, 3.0, 3.0]);
        let s = b.scaled_about([1.0, 1.0, 1.0], [2.0, 2.0, 2.0]);
        assert_eq!(s.min, [1.0, 1.0, 1.0]);
        assert_eq!(s.max, [5.0, 5.0, 5.0]);
    }
}
