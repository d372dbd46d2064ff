//! First-person camera and movement on the dock.
//!
//! The fishing engine only ever reads the pose through [`Player::cast_origin`]
//! at cast time; everything else here is simple walk/look handling.

use crate::constants::{PLAYER_LOOK_STEP, PLAYER_MOVE_STEP};
use crate::fishing::CastOrigin;
use crate::math::Vec3;

/// Dock extents the player is clamped to. The dock is a 10x20 platform
/// centered at the origin, sitting just above the water.
const DOCK_HALF_WIDTH: f64 = 5.0;
const DOCK_HALF_LENGTH: f64 = 10.0;

/// Eye height above the water while standing on the dock.
const EYE_HEIGHT: f64 = 2.5;

/// Pitch limits, keeps the view from flipping over.
const PITCH_LIMIT: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: Vec3,
    /// Heading in radians. 0 looks down -z, positive turns right.
    pub yaw: f64,
    /// Elevation in radians. Negative looks down at the water.
    pub pitch: f64,
}

impl Player {
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, EYE_HEIGHT, 5.0),
            yaw: 0.0,
            pitch: -0.2,
        }
    }

    /// Unit-length view direction.
    pub fn forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
    }

    /// Unit-length right vector, horizontal regardless of pitch.
    pub fn right(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vec3::new(cos_yaw, 0.0, sin_yaw)
    }

    /// Pose snapshot for the fishing engine at cast time.
    pub fn cast_origin(&self) -> CastOrigin {
        CastOrigin {
            position: self.position,
            forward: self.forward(),
        }
    }

    /// Turns the view by one look step in each axis direction (-1, 0, 1).
    pub fn look(&mut self, yaw_dir: f64, pitch_dir: f64) {
        self.yaw += yaw_dir * PLAYER_LOOK_STEP;
        self.pitch = (self.pitch + pitch_dir * PLAYER_LOOK_STEP).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Takes one walk step relative to the heading (-1, 0, 1 per axis),
    /// clamped to the dock.
    pub fn walk(&mut self, forward_dir: f64, strafe_dir: f64) {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let planar_forward = Vec3::new(sin_yaw, 0.0, -cos_yaw);
        let step = planar_forward
            .scale(forward_dir * PLAYER_MOVE_STEP)
            .add(self.right().scale(strafe_dir * PLAYER_MOVE_STEP));

        self.position.x = (self.position.x + step.x).clamp(-DOCK_HALF_WIDTH, DOCK_HALF_WIDTH);
        self.position.z = (self.position.z + step.z).clamp(-DOCK_HALF_LENGTH, DOCK_HALF_LENGTH);
        self.position.y = EYE_HEIGHT;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
