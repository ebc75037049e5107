//! Visual-side state types shared with the frontends.
//!
//! These types avoid platform APIs. The web frontend feeds pointer positions
//! into [`GlobeView`] and reads back the globe's model matrix; [`Camera`]
//! builds the matching view/projection.

use crate::constants::{AUTO_ROTATE_PER_FRAME, DEFAULT_THETA, DRAG_PX_PER_RADIAN};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn looking_at_origin(distance: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: std::f32::consts::FRAC_PI_4,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

#[derive(Clone, Copy, Debug)]
struct DragAnchor {
    pointer_x: f32,
    offset_at_start: f32,
}

/// Globe orientation: idle auto-rotation plus horizontal drag.
#[derive(Clone, Debug)]
pub struct GlobeView {
    pub phi: f32,
    pub theta: f32,
    drag_offset: f32,
    drag: Option<DragAnchor>,
}

impl Default for GlobeView {
    fn default() -> Self {
        Self {
            phi: 0.0,
            theta: DEFAULT_THETA,
            drag_offset: 0.0,
            drag: None,
        }
    }
}

impl GlobeView {
    pub fn begin_drag(&mut self, pointer_x: f32) {
        self.drag = Some(DragAnchor {
            pointer_x,
            offset_at_start: self.drag_offset,
        });
    }

    pub fn drag_to(&mut self, pointer_x: f32) {
        if let Some(anchor) = self.drag {
            self.drag_offset =
                anchor.offset_at_start + (pointer_x - anchor.pointer_x) / DRAG_PX_PER_RADIAN;
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Advance one animation frame. Auto-rotation pauses while dragging.
    pub fn tick(&mut self) {
        if !self.is_dragging() {
            self.phi += AUTO_ROTATE_PER_FRAME;
        }
    }

    /// Rotation angle around the globe's axis, including drag.
    pub fn effective_phi(&self) -> f32 {
        self.phi + self.drag_offset
    }

    /// Spin about +Y by phi, then tilt about +X by theta.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.theta) * Mat4::from_rotation_y(-self.effective_phi())
    }
}
