//! CPU side of the scene: one billboard per photon, electron, trail point
//! and the light source, rebuilt from the animator every frame.

use bytemuck::{Pod, Zeroable};
use photoelectric_physics::Rgb;
use photoelectric_simulation::Animator;

/// Plain shaded sphere
pub const KIND_SPHERE: u32 = 0;
/// Sphere with a glow halo (photons, light source)
pub const KIND_GLOW: u32 = 1;
/// Sphere with a spinning band (electrons)
pub const KIND_SPINNING: u32 = 2;
/// Flat soft dot (trail points)
pub const KIND_TRAIL: u32 = 3;

/// GPU-compatible billboard instance
/// Aligned for WGSL struct compatibility
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SphereInstance {
    pub position: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
    /// Spin angle (rad) for `KIND_SPINNING`
    pub spin: f32,
    pub kind: u32,
    pub _padding: [f32; 2],
}

/// Sizes and colors of scene elements
#[derive(Clone, Copy, Debug)]
pub struct SceneStyle {
    pub photon_radius: f32,
    pub electron_radius: f32,
    pub electron_color: Rgb,
    pub trail_radius: f32,
    pub trail_alpha: f32,
    pub light_radius: f32,
    pub light_color: Rgb,
    pub show_trails: bool,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            photon_radius: 0.3,
            electron_radius: 0.3,
            electron_color: Rgb::from_hex(0x00aaff),
            trail_radius: 0.12,
            trail_alpha: 0.7,
            light_radius: 1.5,
            light_color: Rgb::from_hex(0xffffff),
            show_trails: true,
        }
    }
}

fn instance(position: glam::Vec3, radius: f32, color: [f32; 4], kind: u32) -> SphereInstance {
    SphereInstance {
        position: position.to_array(),
        radius,
        color,
        spin: 0.0,
        kind,
        _padding: [0.0; 2],
    }
}

/// Rebuild `out` from the animator's live entities
pub fn build_instances(animator: &Animator, style: &SceneStyle, out: &mut Vec<SphereInstance>) {
    out.clear();

    out.push(instance(
        animator.params().light_source,
        style.light_radius,
        style.light_color.to_rgba_f32(1.0),
        KIND_GLOW,
    ));

    for photon in animator.photons() {
        out.push(instance(
            photon.position,
            style.photon_radius,
            photon.color.to_rgba_f32(1.0),
            KIND_GLOW,
        ));
    }

    for electron in animator.electrons() {
        if style.show_trails {
            let len = electron.trail.len().max(1) as f32;
            // Newest point sits under the electron itself
            for (i, point) in electron.trail.iter().enumerate().skip(1) {
                let fade = 1.0 - i as f32 / len;
                out.push(instance(
                    *point,
                    style.trail_radius * (0.4 + 0.6 * fade),
                    style.electron_color.to_rgba_f32(style.trail_alpha * fade),
                    KIND_TRAIL,
                ));
            }
        }

        let mut sphere = instance(
            electron.position,
            style.electron_radius,
            style.electron_color.to_rgba_f32(1.0),
            KIND_SPINNING,
        );
        sphere.spin = electron.rotation.x + electron.rotation.y;
        out.push(sphere);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use photoelectric_simulation::{AnimationParams, Emission};

    const FRAME: f32 = 1.0 / 60.0;

    fn animator_with_electron() -> Animator {
        let mut animator = Animator::seeded(
            AnimationParams {
                spawn_stagger: 0.0,
                ..Default::default()
            },
            3,
        );
        let emission = Emission {
            electron_ejected: true,
            velocity_scale: 1.0,
        };
        animator.spawn_photons(2, Rgb::from_hex(0x0000ff));
        while animator.electrons().len() < 2 {
            animator.tick(FRAME, emission);
        }
        animator
    }

    #[test]
    fn instance_matches_wgsl_layout() {
        assert_eq!(std::mem::size_of::<SphereInstance>(), 48);
    }

    #[test]
    fn empty_scene_has_light_source_only() {
        let animator = Animator::seeded(AnimationParams::default(), 1);
        let mut out = Vec::new();
        build_instances(&animator, &SceneStyle::default(), &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, KIND_GLOW);
        assert_eq!(out[0].position, [-25.0, 10.0, 10.0]);
    }

    #[test]
    fn electrons_bring_their_trails() {
        let animator = animator_with_electron();
        let mut out = Vec::new();
        build_instances(&animator, &SceneStyle::default(), &mut out);

        let trails = out.iter().filter(|i| i.kind == KIND_TRAIL).count();
        let electrons = out.iter().filter(|i| i.kind == KIND_SPINNING).count();
        assert_eq!(electrons, 2);
        assert_eq!(trails, 2 * 29);
        assert!(out
            .iter()
            .filter(|i| i.kind == KIND_TRAIL)
            .all(|i| i.color[3] > 0.0 && i.color[3] < 0.7));
    }

    #[test]
    fn trails_can_be_hidden() {
        let animator = animator_with_electron();
        let style = SceneStyle {
            show_trails: false,
            ..Default::default()
        };
        let mut out = Vec::new();
        build_instances(&animator, &style, &mut out);

        assert!(out.iter().all(|i| i.kind != KIND_TRAIL));
    }
}
