//! Animation parameters for runtime tuning
//!
//! All motion constants are expressed per frame at [`NOMINAL_FRAME_RATE`];
//! the animator rescales them by the real frame time. None of them carry
//! physical meaning.

use glam::Vec3;

/// Frame rate the per-frame constants were tuned for
pub const NOMINAL_FRAME_RATE: f32 = 60.0;

/// Longest frame the animator will integrate in one tick (seconds)
pub const MAX_TICK_SECONDS: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationParams {
    // Photon beam
    /// Where photons are emitted
    pub light_source: Vec3,
    /// Photon displacement per frame
    pub photon_step: Vec3,
    /// Lateral wobble amplitude per frame
    pub wave_amplitude: f32,
    /// Lateral wobble angular frequency (rad/s)
    pub wave_frequency: f32,
    /// Delay between consecutive photons of one batch (seconds)
    pub spawn_stagger: f32,

    // Metal surface
    /// Height of the top of the metal slab. Photons are absorbed here and
    /// electrons start here.
    pub surface_height: f32,

    // Electrons
    /// Base launch speed per frame, multiplied by the velocity scale
    pub electron_speed: f32,
    /// Vertical launch speed as a multiple of the base speed
    pub electron_lift: f32,
    /// Downward acceleration per frame²
    pub gravity: f32,
    /// Spin added per frame (rad) around x, y, z
    pub spin: Vec3,
    /// Positions remembered in each electron's trail
    pub trail_length: usize,
    /// Most electrons alive at once
    pub max_electrons: usize,

    // Culling
    /// Electrons below this height are removed
    pub floor: f32,
    /// Electrons beyond ±this on x or z are removed
    pub half_extent: f32,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            light_source: Vec3::new(-25.0, 10.0, 10.0),
            photon_step: Vec3::new(0.5, -0.25, 0.0),
            wave_amplitude: 0.02,
            wave_frequency: 5.0,
            spawn_stagger: 0.3,

            surface_height: -4.0,

            electron_speed: 0.2,
            electron_lift: 2.5,
            gravity: 0.01,
            spin: Vec3::new(0.02, 0.03, 0.0),
            trail_length: 30,
            max_electrons: 10,

            floor: -20.0,
            half_extent: 40.0,
        }
    }
}

impl AnimationParams {
    /// True once a position has left the region electrons may occupy
    pub fn out_of_bounds(&self, position: Vec3) -> bool {
        position.y < self.floor
            || position.x > self.half_extent
            || position.x < -self.half_extent
            || position.z > self.half_extent
            || position.z < -self.half_extent
    }
}
