//! Rotating wireframe cube.
//!
//! Eight model-space vertices are rotated in place; each frame they are
//! perspective-projected into a 2D cache and the twelve edges are drawn
//! between cached points. Edges hold vertex indices, never references, so
//! the cache can be rebuilt or copied freely.

use libm::{copysignf, fabsf};

use super::math::{Axis, Matrix3, Vertex2D, Vertex3D};
use super::Game;
use crate::canvas::Canvas;
use crate::config::CubeConfig;
use crate::input::{Button, InputSnapshot};
use crate::rng::RandomSource;

/// Canonical cube: ±1 on each axis, front face (z = +1) first.
const MODEL: [Vertex3D; 8] = [
    Vertex3D::new(1.0, 1.0, 1.0),
    Vertex3D::new(1.0, -1.0, 1.0),
    Vertex3D::new(-1.0, -1.0, 1.0),
    Vertex3D::new(-1.0, 1.0, 1.0),
    Vertex3D::new(1.0, 1.0, -1.0),
    Vertex3D::new(1.0, -1.0, -1.0),
    Vertex3D::new(-1.0, -1.0, -1.0),
    Vertex3D::new(-1.0, 1.0, -1.0),
];

/// Edge topology as pairs of vertex indices. Never changes.
pub const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (4, 0),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Smallest magnitude allowed for the projection denominator `f + z`.
///
/// A vertex at `z = -f` sits in the eye plane; its denominator is clamped
/// to this value (keeping its sign, zero counts as positive) so the
/// projection stays finite instead of producing ∞/NaN.
pub const MIN_DEPTH: f32 = 1e-3;

pub struct Cube {
    config: CubeConfig,
    vertices: [Vertex3D; 8],
    projected: [Vertex2D; 8],
}

impl Cube {
    pub fn new(config: CubeConfig) -> Self {
        let mut cube = Self {
            config,
            vertices: MODEL,
            projected: [Vertex2D::default(); 8],
        };
        cube.reproject();
        cube
    }

    /// Rotate every model vertex about `axis` by `angle` radians.
    pub fn rotate(&mut self, axis: Axis, angle: f32) {
        let m = Matrix3::rotation(axis, angle);
        for v in self.vertices.iter_mut() {
            *v = *v * m;
        }
    }

    /// Planar perspective projection: `x' = f·x/(f+z)`, `y' = f·y/(f+z)`.
    ///
    /// See [`MIN_DEPTH`] for the `z = -f` case.
    pub fn project(&self, p: Vertex3D) -> Vertex2D {
        let f = self.config.focal_length;
        let mut depth = f + p.z;
        if fabsf(depth) < MIN_DEPTH {
            trace!("cube: clamping projection depth {}", depth);
            depth = copysignf(MIN_DEPTH, depth);
        }
        Vertex2D::new(f * p.x / depth, f * p.y / depth)
    }

    /// Recompute the projection cache from the model vertices.
    pub fn reproject(&mut self) {
        for i in 0..self.vertices.len() {
            self.projected[i] = self.project(self.vertices[i]);
        }
    }

    pub fn vertices(&self) -> &[Vertex3D; 8] {
        &self.vertices
    }

    pub fn projected(&self) -> &[Vertex2D; 8] {
        &self.projected
    }

    /// Screen-space endpoints of every edge.
    pub fn screen_edges(&self) -> impl Iterator<Item = ((i32, i32), (i32, i32))> + '_ {
        EDGES.iter().map(move |&(a, b)| {
            (
                self.to_screen(self.projected[a]),
                self.to_screen(self.projected[b]),
            )
        })
    }

    fn to_screen(&self, p: Vertex2D) -> (i32, i32) {
        let c = &self.config;
        (
            (p.x * c.scale + c.origin_x as f32) as i32,
            (p.y * c.scale + c.origin_y as f32) as i32,
        )
    }
}

impl Game for Cube {
    fn init(&mut self, _rng: &mut dyn RandomSource) {
        self.vertices = MODEL;
        self.reproject();
    }

    fn update(&mut self, input: InputSnapshot, _rng: &mut dyn RandomSource) {
        let step = self.config.step;

        if input.is_pressed(Button::Up) {
            self.rotate(Axis::Y, step);
        } else if input.is_pressed(Button::Down) {
            self.rotate(Axis::Y, -step);
        }

        if input.is_pressed(Button::AltUp) {
            self.rotate(Axis::Z, step);
        } else if input.is_pressed(Button::AltDown) {
            self.rotate(Axis::Z, -step);
        }

        self.reproject();
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        for ((x0, y0), (x1, y1)) in self.screen_edges() {
            canvas.draw_line(x0, y0, x1, y1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::testing::{DrawOp, Recorder};
    use crate::rng::testing::Scripted;
    use core::f32::consts::PI;

    const EPS: f32 = 1e-4;

    fn cube() -> Cube {
        Cube::new(CubeConfig::default())
    }

    #[test]
    fn rotation_round_trip_restores_vertices() {
        for &angle in &[0.1_f32, PI / 16.0, 1.0, PI, -2.5, 7.0] {
            for axis in [Axis::X, Axis::Y, Axis::Z] {
                let mut c = cube();
                c.rotate(axis, angle);
                c.rotate(axis, -angle);
                for (v, original) in c.vertices().iter().zip(MODEL.iter()) {
                    assert!(v.max_distance(original) < EPS, "{:?} at {}", axis, angle);
                }
            }
        }
    }

    #[test]
    fn canonical_projection_is_distinct_and_point_symmetric() {
        let c = cube();
        let points = c.projected();

        for i in 0..8 {
            for j in (i + 1)..8 {
                assert_ne!(points[i], points[j], "vertices {} and {} coincide", i, j);
            }
        }
        for p in points {
            let mirrored = points
                .iter()
                .any(|q| (q.x + p.x).abs() < EPS && (q.y + p.y).abs() < EPS);
            assert!(mirrored, "no mirror for {:?}", p);
        }
    }

    #[test]
    fn projection_uses_focal_length() {
        let c = cube();
        let p = c.project(Vertex3D::new(1.0, -1.0, 0.0));
        assert!((p.x - 1.0).abs() < EPS);
        assert!((p.y + 1.0).abs() < EPS);

        let near = c.project(Vertex3D::new(1.0, 1.0, 1.0));
        assert!((near.x - 5.0 / 6.0).abs() < EPS);
    }

    #[test]
    fn degenerate_depth_stays_finite() {
        let c = cube();
        let p = c.project(Vertex3D::new(1.0, -1.0, -5.0));
        assert!(p.x.is_finite() && p.y.is_finite());
        assert!((p.x - 5.0 / MIN_DEPTH).abs() < 1.0);

        let behind = c.project(Vertex3D::new(1.0, 1.0, -5.0005));
        assert!(behind.x.is_finite());
        assert!(behind.x < 0.0);
    }

    #[test]
    fn draw_emits_twelve_edges_centred_on_screen() {
        let c = cube();
        let mut canvas = Recorder::default();
        c.draw(&mut canvas);

        assert_eq!(canvas.ops.len(), 12);
        // Edge 0: (1,1,1) → (72,40) and (1,-1,1) → (72,23).
        assert_eq!(canvas.ops[0], DrawOp::Line(72, 40, 72, 23));
    }

    #[test]
    fn held_button_rotates_every_tick() {
        let mut c = cube();
        let mut rng = Scripted::default();
        let input = InputSnapshot::empty().with(Button::Up);

        c.update(input, &mut rng);
        let once = *c.vertices();
        c.update(input, &mut rng);

        assert_ne!(once, MODEL);
        assert_ne!(*c.vertices(), once);

        // 32 steps of π/16 is a full turn.
        for _ in 0..30 {
            c.update(input, &mut rng);
        }
        for (v, original) in c.vertices().iter().zip(MODEL.iter()) {
            assert!(v.max_distance(original) < 1e-3);
        }
    }

    #[test]
    fn opposite_buttons_on_one_axis_prefer_positive() {
        let mut a = cube();
        let mut b = cube();
        let mut rng = Scripted::default();

        a.update(
            InputSnapshot::empty().with(Button::AltUp).with(Button::AltDown),
            &mut rng,
        );
        b.rotate(Axis::Z, PI / 16.0);
        b.reproject();

        assert_eq!(a.vertices(), b.vertices());
        assert_eq!(a.projected(), b.projected());
    }

    #[test]
    fn update_reprojects_and_init_resets() {
        let mut c = cube();
        let mut rng = Scripted::default();
        c.update(InputSnapshot::empty().with(Button::Down), &mut rng);

        for (v, p) in c.vertices().iter().zip(c.projected().iter()) {
            assert_eq!(c.project(*v), *p);
        }

        c.init(&mut rng);
        assert_eq!(*c.vertices(), MODEL);
        assert_eq!(c.projected()[0], c.project(MODEL[0]));
    }
}
