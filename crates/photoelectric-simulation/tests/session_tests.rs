use photoelectric_physics::{InputError, Metal, SimulationInput, SpectralBand, MAX_PHOTON_COUNT};
use photoelectric_simulation::*;

const FRAME: f32 = 1.0 / 60.0;

fn session() -> SimulationSession {
    SimulationSession::with_animator(Animator::seeded(AnimationParams::default(), 42))
}

fn run(session: &mut SimulationSession, frames: usize) {
    for _ in 0..frames {
        session.tick(FRAME);
    }
}

fn live_entities(session: &SimulationSession) -> usize {
    session.animator().photons().len() + session.animator().electrons().len()
}

#[test]
fn copper_in_ultraviolet_emits_electrons() {
    let mut session = session();
    let result = *session
        .simulate(&SimulationInput::new(15.0, 50.0, Metal::Copper))
        .expect("valid input");

    assert!(result.electron_ejected);
    assert_eq!(result.photon_color, SpectralBand::Violet.color());
    assert_eq!(session.animator().pending_spawns(), 5);

    // Five photons 0.3s apart, each needing about a second to land
    run(&mut session, 180);
    let stats = *session.stats();
    assert_eq!(stats.simulations, 1);
    assert_eq!(stats.photons_emitted, 5);
    assert!(stats.photons_absorbed >= 4);
    assert_eq!(stats.electrons_ejected, stats.photons_absorbed);
    assert!(!session.animator().electrons().is_empty());
    assert!(session
        .animator()
        .photons()
        .iter()
        .all(|p| p.color == SpectralBand::Violet.color()));
}

#[test]
fn platinum_in_visible_light_emits_nothing() {
    let mut session = session();
    let result = *session
        .simulate(&SimulationInput::new(5.0, 50.0, Metal::Platinum))
        .expect("valid input");
    assert!(!result.electron_ejected);

    for _ in 0..300 {
        session.tick(FRAME);
        assert!(session.animator().electrons().is_empty());
    }
    assert_eq!(session.stats().photons_absorbed, 5);
    assert_eq!(session.stats().electrons_ejected, 0);
}

#[test]
fn intensity_sets_photon_count() {
    let mut session = session();
    session
        .simulate(&SimulationInput::new(10.0, 120.0, Metal::Cesium))
        .expect("valid input");
    assert_eq!(session.animator().pending_spawns(), 12);
}

#[test]
fn oversized_intensity_queues_capped_batch() {
    let mut session = session();
    for intensity in ["inf", "1e12"] {
        let input = SimulationInput::parse("10", intensity, "copper").expect("valid input");
        session.simulate(&input).expect("valid input");
        assert_eq!(session.animator().pending_spawns(), MAX_PHOTON_COUNT);
    }
}

#[test]
fn rejected_input_leaves_state_untouched() {
    let mut session = session();
    session
        .simulate(&SimulationInput::new(15.0, 50.0, Metal::Copper))
        .expect("valid input");
    run(&mut session, 90);

    let result_before = session.result().copied();
    let photons_before = session.animator().photons().to_vec();
    let electrons_before = session.animator().electrons().to_vec();
    let pending_before = session.animator().pending_spawns();
    let series_before = session.kinetic_series().cloned();

    let negative = session.simulate(&SimulationInput::new(-2.0, 50.0, Metal::Sodium));
    assert!(matches!(negative, Err(InputError::InvalidFrequency(_))));

    let no_metal = SimulationInput {
        frequency: 8.0,
        intensity: 50.0,
        metal: None,
    };
    assert_eq!(session.simulate(&no_metal), Err(InputError::MissingMetal));

    assert_eq!(session.result().copied(), result_before);
    assert_eq!(session.animator().photons(), photons_before.as_slice());
    assert_eq!(session.animator().electrons(), electrons_before.as_slice());
    assert_eq!(session.animator().pending_spawns(), pending_before);
    assert_eq!(session.kinetic_series().cloned(), series_before);
    assert_eq!(session.stats().simulations, 1);
}

#[test]
fn new_simulation_supersedes_previous_run() {
    let mut session = session();
    session
        .simulate(&SimulationInput::new(15.0, 200.0, Metal::Copper))
        .expect("valid input");
    run(&mut session, 120);
    assert!(live_entities(&session) > 0);

    session
        .simulate(&SimulationInput::new(5.0, 50.0, Metal::Platinum))
        .expect("valid input");
    assert_eq!(live_entities(&session), 0);
    assert_eq!(session.animator().pending_spawns(), 5);
    assert_eq!(
        session.kinetic_series().map(|s| s.metal),
        Some(Metal::Platinum)
    );

    session.tick(FRAME);
    assert!(session.stats().entities_cleared > 0);
    assert!(session.animator().electrons().is_empty());
}

#[test]
fn clear_then_tick_leaves_nothing_alive() {
    let mut session = session();
    session
        .simulate(&SimulationInput::new(12.0, 300.0, Metal::Cesium))
        .expect("valid input");
    run(&mut session, 150);
    assert!(live_entities(&session) > 0);

    session.animator_mut().clear();
    session.tick(FRAME);
    assert_eq!(live_entities(&session), 0);
    run(&mut session, 60);
    assert_eq!(live_entities(&session), 0);
}

#[test]
fn electron_cap_survives_rapid_resimulation() {
    let mut session = session();
    for round in 0..20 {
        session
            .simulate(&SimulationInput::new(15.0, 1000.0, Metal::Cesium))
            .expect("valid input");
        for _ in 0..(30 + round * 7) {
            session.tick(FRAME);
            assert!(session.animator().electrons().len() <= 10);
        }
    }
    assert_eq!(session.stats().simulations, 20);
}

#[test]
fn hidden_view_skips_spawns() {
    let mut session = session();
    session.set_visible(false);
    session
        .simulate(&SimulationInput::new(15.0, 50.0, Metal::Copper))
        .expect("valid input");
    run(&mut session, 120);

    assert_eq!(live_entities(&session), 0);
    assert_eq!(session.stats().photons_skipped, 5);
    assert_eq!(session.stats().photons_emitted, 0);
}

#[test]
fn parsed_text_input_drives_simulation() {
    let mut session = session();
    let input = SimulationInput::parse("9", "60", "potassium").expect("parses");
    let result = *session.simulate(&input).expect("valid input");

    assert_eq!(result.metal, Metal::Potassium);
    assert!(result.electron_ejected);
    assert_eq!(session.animator().pending_spawns(), 6);
}
