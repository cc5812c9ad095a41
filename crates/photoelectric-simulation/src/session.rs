//! One user's simulation: the latest result, the chart series and the animator
//!
//! A session replaces what would otherwise be ambient global state. The
//! host owns it, calls [`SimulationSession::simulate`] on user action and
//! [`SimulationSession::tick`] once per frame.

use photoelectric_physics::{
    evaluate, kinetic_energy_curve, photon_energy_curve, InputError, Metal, SimulationInput,
    SimulationResult,
};

use crate::animator::{Animator, AnimatorEvent, Emission};
use crate::params::AnimationParams;

/// Running totals folded from animator events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub simulations: u64,
    pub photons_emitted: u64,
    pub photons_skipped: u64,
    pub photons_absorbed: u64,
    pub electrons_ejected: u64,
    pub electrons_escaped: u64,
    /// Entities and queued spawns discarded by a new simulate action
    pub entities_cleared: u64,
}

impl SessionStats {
    pub fn record(&mut self, event: &AnimatorEvent) {
        match *event {
            AnimatorEvent::PhotonSpawned(_) => self.photons_emitted += 1,
            AnimatorEvent::PhotonSkipped => self.photons_skipped += 1,
            AnimatorEvent::PhotonAbsorbed { electron, .. } => {
                self.photons_absorbed += 1;
                if electron.is_some() {
                    self.electrons_ejected += 1;
                }
            }
            AnimatorEvent::ElectronEscaped(_) => self.electrons_escaped += 1,
            AnimatorEvent::Cleared {
                photons,
                electrons,
                pending,
            } => self.entities_cleared += (photons + electrons + pending) as u64,
        }
    }
}

/// Kinetic energy series for the selected metal
#[derive(Debug, Clone, PartialEq)]
pub struct KineticSeries {
    pub metal: Metal,
    pub points: Vec<[f64; 2]>,
}

impl KineticSeries {
    fn new(metal: Metal) -> Self {
        Self {
            metal,
            points: kinetic_energy_curve(metal),
        }
    }
}

pub struct SimulationSession {
    animator: Animator,
    result: Option<SimulationResult>,
    emission: Emission,
    energy_curve: Vec<[f64; 2]>,
    kinetic_series: Option<KineticSeries>,
    stats: SessionStats,
}

impl SimulationSession {
    pub fn new(params: AnimationParams) -> Self {
        Self::with_animator(Animator::new(params))
    }

    pub fn with_animator(animator: Animator) -> Self {
        Self {
            animator,
            result: None,
            emission: Emission::default(),
            energy_curve: photon_energy_curve(),
            kinetic_series: None,
            stats: SessionStats::default(),
        }
    }

    /// Evaluate `input` and restart the animation with its photons.
    ///
    /// Invalid input changes nothing: the previous result, chart series and
    /// live entities are all kept.
    pub fn simulate(&mut self, input: &SimulationInput) -> Result<&SimulationResult, InputError> {
        let result = match evaluate(input) {
            Ok(result) => result,
            Err(err) => {
                log::warn!("rejected simulate action: {err}");
                return Err(err);
            }
        };

        log::info!(
            "{}: {:.2} eV photons vs {:.2} eV work function, ejected={} (KE {:.2} eV)",
            result.metal,
            result.photon_energy_ev,
            result.work_function_ev,
            result.electron_ejected,
            result.kinetic_energy_ev
        );

        self.animator.clear();
        self.emission = Emission::from(&result);
        self.select_metal(result.metal);
        self.animator
            .spawn_photons(input.photon_count(), result.photon_color);
        self.stats.simulations += 1;

        Ok(&*self.result.insert(result))
    }

    /// Advance the animation by `dt` seconds using the latest result
    pub fn tick(&mut self, dt: f32) {
        self.animator.tick(dt, self.emission);
        for event in self.animator.drain_events() {
            self.stats.record(&event);
        }
    }

    /// Point the kinetic energy chart at `metal`, replacing the previous series
    pub fn select_metal(&mut self, metal: Metal) {
        if self.kinetic_series.as_ref().map(|s| s.metal) != Some(metal) {
            log::debug!("kinetic energy series now for {metal}");
            self.kinetic_series = Some(KineticSeries::new(metal));
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.animator.set_visible(visible);
    }

    pub fn result(&self) -> Option<&SimulationResult> {
        self.result.as_ref()
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Photon energy against frequency, the same for every metal
    pub fn energy_curve(&self) -> &[[f64; 2]] {
        &self.energy_curve
    }

    pub fn kinetic_series(&self) -> Option<&KineticSeries> {
        self.kinetic_series.as_ref()
    }
}

impl Default for SimulationSession {
    fn default() -> Self {
        Self::new(AnimationParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::EntityId;

    #[test]
    fn stats_fold_events() {
        let mut stats = SessionStats::default();
        for event in [
            AnimatorEvent::PhotonSpawned(EntityId(0)),
            AnimatorEvent::PhotonSpawned(EntityId(1)),
            AnimatorEvent::PhotonSkipped,
            AnimatorEvent::PhotonAbsorbed {
                photon: EntityId(0),
                electron: Some(EntityId(2)),
            },
            AnimatorEvent::PhotonAbsorbed {
                photon: EntityId(1),
                electron: None,
            },
            AnimatorEvent::ElectronEscaped(EntityId(2)),
            AnimatorEvent::Cleared {
                photons: 1,
                electrons: 2,
                pending: 3,
            },
        ] {
            stats.record(&event);
        }

        assert_eq!(
            stats,
            SessionStats {
                simulations: 0,
                photons_emitted: 2,
                photons_skipped: 1,
                photons_absorbed: 2,
                electrons_ejected: 1,
                electrons_escaped: 1,
                entities_cleared: 6,
            }
        );
    }

    #[test]
    fn fresh_session_has_energy_curve_only() {
        let session = SimulationSession::default();
        assert_eq!(session.energy_curve().len(), 16);
        assert!(session.kinetic_series().is_none());
        assert!(session.result().is_none());
    }

    #[test]
    fn selecting_metal_replaces_series() {
        let mut session = SimulationSession::default();
        session.select_metal(Metal::Sodium);
        assert_eq!(session.kinetic_series().map(|s| s.metal), Some(Metal::Sodium));

        session.select_metal(Metal::Copper);
        let series = session.kinetic_series().unwrap();
        assert_eq!(series.metal, Metal::Copper);
        assert_eq!(series.points, kinetic_energy_curve(Metal::Copper));
    }
}
