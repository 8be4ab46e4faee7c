// Host-side tests for the scene controller driving a sink.

use glam::Mat4;
use std::collections::HashMap;
use tree_core::playback::CueTable;
use tree_core::{
    AudioDeck, Category, LogicalState, PlaybackError, RibbonUniforms, SceneConfig,
    SceneController, SeedPolicy, Sink, TrackId,
};

#[derive(Default)]
struct CountingSink {
    transforms: HashMap<(Category, usize), u32>,
    volumes: HashMap<TrackId, f32>,
    ribbon_writes: u32,
    last_ribbon: RibbonUniforms,
}

impl Sink for CountingSink {
    fn set_transform(&mut self, category: Category, index: usize, _: Mat4) {
        *self.transforms.entry((category, index)).or_default() += 1;
    }
    fn set_volume(&mut self, track: TrackId, volume: f32) {
        self.volumes.insert(track, volume);
    }
    fn set_ribbon(&mut self, uniforms: RibbonUniforms) {
        self.ribbon_writes += 1;
        self.last_ribbon = uniforms;
    }
}

#[derive(Default)]
struct CountingDeck {
    seeks: usize,
    calls: Vec<&'static str>,
}

impl AudioDeck for CountingDeck {
    fn seek(&mut self, _: TrackId, _: f64) {
        self.seeks += 1;
        self.calls.push("seek");
    }
    fn is_paused(&self, _: TrackId) -> bool {
        false
    }
    fn play(&mut self, _: TrackId) -> Result<(), PlaybackError> {
        self.calls.push("play");
        Ok(())
    }
    fn pause(&mut self, _: TrackId) {}
}

#[derive(Default)]
struct SeekLog {
    seeks: Vec<f64>,
}

impl AudioDeck for SeekLog {
    fn seek(&mut self, _: TrackId, seconds: f64) {
        self.seeks.push(seconds);
    }
    fn is_paused(&self, _: TrackId) -> bool {
        true
    }
    fn play(&mut self, _: TrackId) -> Result<(), PlaybackError> {
        Ok(())
    }
    fn pause(&mut self, _: TrackId) {}
}

fn small_config() -> SceneConfig {
    SceneConfig {
        particle_count: 120,
        ornament_count: 40,
        seeds: SeedPolicy {
            layout: Some(8),
            scatter: Some(9),
        },
        ..SceneConfig::default()
    }
}

fn scene() -> SceneController {
    SceneController::new(small_config()).unwrap()
}

#[test]
fn tick_writes_every_entity_exactly_once() {
    let mut scene = scene();
    let mut sink = CountingSink::default();
    scene.tick(0.5, 1.0 / 60.0, &mut sink);

    let expected: usize = Category::ALL
        .iter()
        .map(|&c| scene.dataset().len(c))
        .sum();
    assert_eq!(sink.transforms.len(), expected);
    assert!(sink.transforms.values().all(|&n| n == 1));
    for c in Category::ALL {
        for i in 0..scene.dataset().len(c) {
            assert!(sink.transforms.contains_key(&(c, i)));
        }
    }
    assert_eq!(sink.ribbon_writes, 1);
    assert!(sink.volumes.contains_key(&TrackId::Main));
}

#[test]
fn ticks_never_touch_the_deck() {
    let mut scene = scene();
    let mut deck = CountingDeck::default();
    let mut sink = CountingSink::default();
    scene.toggle_state(&mut deck);
    for i in 0..120 {
        scene.tick(i as f32 / 60.0, 1.0 / 60.0, &mut sink);
    }
    scene.toggle_state(&mut deck);
    for i in 0..120 {
        scene.tick(2.0 + i as f32 / 60.0, 1.0 / 60.0, &mut sink);
    }
    assert_eq!(deck.seeks, 2);
}

#[test]
fn session_starts_muted_and_first_mute_press_unmutes() {
    let mut scene = scene();
    let mut deck = CountingDeck::default();
    let mut sink = CountingSink::default();
    assert!(scene.is_muted());

    assert!(!scene.toggle_mute(&mut deck));
    assert_eq!(deck.calls, ["seek", "play"]);
    scene.report_play(TrackId::Main, Ok(()));
    for _ in 0..60 {
        scene.tick(0.0, 1.0 / 60.0, &mut sink);
    }
    assert_eq!(sink.volumes[&TrackId::Main], 0.6);
}

#[test]
fn assembling_while_muted_stays_silent() {
    let mut scene = scene();
    let mut deck = CountingDeck::default();
    let mut sink = CountingSink::default();
    scene.toggle_state(&mut deck);
    scene.report_play(TrackId::Main, Ok(()));
    for _ in 0..60 {
        scene.tick(0.0, 1.0 / 60.0, &mut sink);
    }
    assert_eq!(sink.volumes[&TrackId::Main], 0.0);
}

#[test]
fn muting_fades_the_music_out() {
    let mut scene = scene();
    let mut deck = CountingDeck::default();
    let mut sink = CountingSink::default();
    scene.toggle_state(&mut deck);
    scene.report_play(TrackId::Main, Ok(()));
    assert!(!scene.toggle_mute(&mut deck));
    for _ in 0..60 {
        scene.tick(0.0, 1.0 / 60.0, &mut sink);
    }
    assert_eq!(sink.volumes[&TrackId::Main], 0.6);
    assert!(scene.toggle_mute(&mut deck));
    for _ in 0..60 {
        scene.tick(0.0, 1.0 / 60.0, &mut sink);
    }
    assert_eq!(sink.volumes[&TrackId::Main], 0.0);
    assert_eq!(scene.state(), LogicalState::Assembled);
}

#[test]
fn configured_cues_reach_the_deck() {
    let mut scene = SceneController::new(SceneConfig {
        cues: Some(CueTable {
            scattered: 5.0,
            assembled: 20.0,
        }),
        ..small_config()
    })
    .unwrap();
    let mut deck = SeekLog::default();
    scene.toggle_state(&mut deck);
    scene.toggle_state(&mut deck);
    assert_eq!(deck.seeks, [20.0, 5.0]);
}

#[test]
fn huge_frame_gap_is_clamped() {
    let mut scene = scene();
    let mut deck = CountingDeck::default();
    scene.toggle_state(&mut deck);
    scene.tick(10.0, 5.0, &mut CountingSink::default());
    // one clamped step of 0.1 s at rate 1.2
    assert!((scene.particle_progress() - 0.12).abs() < 1e-5);
}

#[test]
fn user_orbit_survives_auto_rotation() {
    let mut scene = scene();
    scene.camera_mut().orbit_by(0.0, 0.5);
    scene.camera_mut().zoom_by(0.5);
    let azimuth = scene.camera().azimuth();
    for _ in 0..60 {
        scene.tick(0.0, 1.0 / 60.0, &mut CountingSink::default());
    }
    assert_eq!(scene.camera().elevation(), 0.5);
    assert!((scene.camera().distance() - 17.5).abs() < 1e-5);
    assert!(scene.camera().azimuth() > azimuth);
}
