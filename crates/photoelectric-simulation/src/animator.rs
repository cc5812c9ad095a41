//! Photon and electron animation
//!
//! The animator owns every live photon and electron. It never schedules
//! itself: the host calls [`Animator::tick`] once per rendered frame and
//! reads positions back for drawing. Staggered photon spawns sit in a small
//! queue keyed on the animator's own clock.
//!
//! An entity is alive while it is in one of the live collections. Leaving a
//! collection is final and ids are never handed out twice.

use std::collections::VecDeque;

use glam::Vec3;
use photoelectric_physics::{Rgb, SimulationResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::params::{AnimationParams, MAX_TICK_SECONDS, NOMINAL_FRAME_RATE};

/// Identifier of a photon or electron
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

/// What the last calculation says about electron emission
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Emission {
    pub electron_ejected: bool,
    pub velocity_scale: f32,
}

impl From<&SimulationResult> for Emission {
    fn from(result: &SimulationResult) -> Self {
        Self {
            electron_ejected: result.electron_ejected,
            velocity_scale: result.velocity_scale as f32,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Photon {
    pub id: EntityId,
    pub position: Vec3,
    /// Offset into the lateral wobble
    pub phase: f32,
    pub color: Rgb,
}

/// Fixed-length history of recent positions, newest first
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    positions: VecDeque<Vec3>,
    capacity: usize,
}

impl Trail {
    /// A trail with every slot at `origin`
    pub fn new(capacity: usize, origin: Vec3) -> Self {
        Self {
            positions: std::iter::repeat(origin).take(capacity).collect(),
            capacity,
        }
    }

    pub fn push(&mut self, position: Vec3) {
        if self.capacity == 0 {
            return;
        }
        if self.positions.len() == self.capacity {
            self.positions.pop_back();
        }
        self.positions.push_front(position);
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Vec3> + '_ {
        self.positions.iter()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Electron {
    pub id: EntityId,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Accumulated spin angles (rad), only used for drawing
    pub rotation: Vec3,
    pub trail: Trail,
}

/// Lifecycle notifications, drained by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatorEvent {
    PhotonSpawned(EntityId),
    /// A queued photon fell due while the view was hidden and was dropped
    PhotonSkipped,
    /// A photon hit the surface, possibly freeing an electron
    PhotonAbsorbed {
        photon: EntityId,
        electron: Option<EntityId>,
    },
    ElectronEscaped(EntityId),
    Cleared {
        photons: usize,
        electrons: usize,
        pending: usize,
    },
}

#[derive(Debug, Clone, Copy)]
struct PendingSpawn {
    due: f64,
    color: Rgb,
}

pub struct Animator {
    params: AnimationParams,
    photons: Vec<Photon>,
    electrons: Vec<Electron>,
    pending: Vec<PendingSpawn>,
    events: Vec<AnimatorEvent>,
    /// Seconds of animation so far. Kept in f64 so 60 Hz steps still
    /// register after days of uptime.
    clock: f64,
    visible: bool,
    next_id: u64,
    rng: StdRng,
}

impl Animator {
    pub fn new(params: AnimationParams) -> Self {
        Self::with_rng(params, StdRng::from_rng(&mut rand::rng()))
    }

    /// Animator with a caller-supplied random source for electron launch directions
    pub fn with_rng(params: AnimationParams, rng: StdRng) -> Self {
        Self {
            params,
            photons: Vec::new(),
            electrons: Vec::new(),
            pending: Vec::new(),
            events: Vec::new(),
            clock: 0.0,
            visible: true,
            next_id: 0,
            rng,
        }
    }

    pub fn seeded(params: AnimationParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    pub fn params(&self) -> &AnimationParams {
        &self.params
    }

    /// Replace the tuning parameters. Live entities keep their state.
    pub fn set_params(&mut self, params: AnimationParams) {
        self.params = params;
    }

    pub fn photons(&self) -> &[Photon] {
        &self.photons
    }

    pub fn electrons(&self) -> &[Electron] {
        &self.electrons
    }

    /// Photons queued but not yet emitted
    pub fn pending_spawns(&self) -> usize {
        self.pending.len()
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Queued photons that fall due while hidden are dropped
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            log::debug!("animation visibility: {visible}");
        }
        self.visible = visible;
    }

    /// Queue `count` photons, one every `spawn_stagger` seconds starting now
    pub fn spawn_photons(&mut self, count: usize, color: Rgb) {
        log::debug!(
            "queueing {count} photons (color #{:06x}, every {:.2}s)",
            color.to_hex(),
            self.params.spawn_stagger
        );

        let start = self.clock;
        let stagger = self.params.spawn_stagger;
        self.pending.extend((0..count).map(|i| PendingSpawn {
            due: start + i as f64 * stagger as f64,
            color,
        }));
    }

    /// Remove every photon, electron and queued spawn
    pub fn clear(&mut self) {
        let photons = self.photons.len();
        let electrons = self.electrons.len();
        let pending = self.pending.len();

        self.photons.clear();
        self.electrons.clear();
        self.pending.clear();

        if photons + electrons + pending > 0 {
            log::debug!("cleared {photons} photons, {electrons} electrons, {pending} queued");
        }
        self.events.push(AnimatorEvent::Cleared {
            photons,
            electrons,
            pending,
        });
    }

    /// Advance one frame of `dt` seconds
    pub fn tick(&mut self, dt: f32, emission: Emission) {
        let dt = dt.clamp(0.0, MAX_TICK_SECONDS);
        // Per-frame constants are tuned at the nominal rate
        let frames = dt * NOMINAL_FRAME_RATE;
        self.clock += dt as f64;

        self.advance_photons(frames, emission);
        self.advance_electrons(frames);
        self.release_due_spawns();
    }

    /// Pending events since the last drain. Must be drained regularly.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, AnimatorEvent> {
        self.events.drain(..)
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    fn advance_photons(&mut self, frames: f32, emission: Emission) {
        let params = &self.params;
        let clock = self.clock;
        let mut absorbed = Vec::new();

        self.photons.retain_mut(|photon| {
            photon.position += params.photon_step * frames;
            let angle = clock * params.wave_frequency as f64 + photon.phase as f64;
            photon.position.z += angle.sin() as f32 * params.wave_amplitude * frames;

            if photon.position.y <= params.surface_height {
                absorbed.push((photon.id, photon.position));
                false
            } else {
                true
            }
        });

        for (photon, position) in absorbed {
            let electron = if emission.electron_ejected
                && self.electrons.len() < self.params.max_electrons
            {
                Some(self.emit_electron(position.x, position.z, emission.velocity_scale))
            } else {
                None
            };

            log::trace!("photon {:?} absorbed, electron {:?}", photon, electron);
            self.events
                .push(AnimatorEvent::PhotonAbsorbed { photon, electron });
        }
    }

    fn emit_electron(&mut self, x: f32, z: f32, velocity_scale: f32) -> EntityId {
        let id = self.allocate_id();
        let position = Vec3::new(x, self.params.surface_height, z);

        let speed = self.params.electron_speed * velocity_scale;
        let velocity = Vec3::new(
            (self.rng.random::<f32>() - 0.5) * speed,
            speed * self.params.electron_lift,
            (self.rng.random::<f32>() - 0.5) * speed,
        );

        self.electrons.push(Electron {
            id,
            position,
            velocity,
            rotation: Vec3::ZERO,
            trail: Trail::new(self.params.trail_length, position),
        });
        id
    }

    fn advance_electrons(&mut self, frames: f32) {
        let params = &self.params;
        let mut escaped = Vec::new();

        self.electrons.retain_mut(|electron| {
            electron.position += electron.velocity * frames;
            electron.velocity.y -= params.gravity * frames;
            electron.rotation += params.spin * frames;
            electron.trail.push(electron.position);

            if params.out_of_bounds(electron.position) {
                escaped.push(electron.id);
                false
            } else {
                true
            }
        });

        self.events
            .extend(escaped.into_iter().map(AnimatorEvent::ElectronEscaped));
    }

    fn release_due_spawns(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let clock = self.clock;
        let (due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|spawn| spawn.due <= clock);
        self.pending = waiting;

        for spawn in due {
            if !self.visible {
                self.events.push(AnimatorEvent::PhotonSkipped);
                continue;
            }

            let id = self.allocate_id();
            self.photons.push(Photon {
                id,
                position: self.params.light_source,
                phase: id.0 as f32,
                color: spawn.color,
            });
            self.events.push(AnimatorEvent::PhotonSpawned(id));
        }
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(AnimationParams::default())
    }
}
