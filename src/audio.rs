use crate::constants::*;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{AudioDeck, AudioMode, PlaybackError, TrackId};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub type PlayOutcome = (TrackId, Result<(), PlaybackError>);

fn create_track(url: &str) -> anyhow::Result<web::HtmlAudioElement> {
    let el = web::HtmlAudioElement::new_with_src(url)
        .map_err(|e| anyhow::anyhow!("audio element for {url}: {e:?}"))?;
    el.set_loop(true);
    el.set_volume(0.0);
    el.set_preload("auto");
    // inline playback on iOS Safari
    _ = el.set_attribute("playsinline", "true");
    el.load();
    Ok(el)
}

/// `HTMLAudioElement`s owned for the lifetime of the page session.
///
/// `play()` resolves asynchronously; outcomes are queued and drained by the
/// frame loop into the playback session.
pub struct WebDeck {
    tracks: Vec<(TrackId, web::HtmlAudioElement)>,
    outcomes: Rc<RefCell<Vec<PlayOutcome>>>,
}

impl WebDeck {
    pub fn new(mode: AudioMode) -> anyhow::Result<Self> {
        let tracks = match mode {
            AudioMode::Single => vec![(TrackId::Main, create_track(MAIN_TRACK_URL)?)],
            AudioMode::Crossfade => vec![
                (TrackId::Chaos, create_track(CHAOS_TRACK_URL)?),
                (TrackId::Tree, create_track(TREE_TRACK_URL)?),
            ],
        };
        log::info!("[audio] {} track(s) for {mode:?}", tracks.len());
        Ok(Self {
            tracks,
            outcomes: Rc::new(RefCell::new(Vec::new())),
        })
    }

    fn element(&self, track: TrackId) -> Option<&web::HtmlAudioElement> {
        self.tracks
            .iter()
            .find(|(id, _)| *id == track)
            .map(|(_, el)| el)
    }

    pub fn set_volume(&self, track: TrackId, volume: f32) {
        if let Some(el) = self.element(track) {
            el.set_volume(volume.clamp(0.0, 1.0) as f64);
        }
    }

    pub fn drain_outcomes(&self) -> Vec<PlayOutcome> {
        std::mem::take(&mut *self.outcomes.borrow_mut())
    }
}

impl AudioDeck for WebDeck {
    fn seek(&mut self, track: TrackId, seconds: f64) {
        if let Some(el) = self.element(track) {
            el.set_current_time(seconds);
        }
    }

    fn is_paused(&self, track: TrackId) -> bool {
        self.element(track).map(|el| el.paused()).unwrap_or(true)
    }

    fn play(&mut self, track: TrackId) -> Result<(), PlaybackError> {
        let el = self.element(track).ok_or(PlaybackError::UnknownTrack(track))?;
        let promise: js_sys::Promise = el.play().map_err(|e| PlaybackError::Blocked {
            track,
            reason: format!("{e:?}"),
        })?;
        let outcomes = self.outcomes.clone();
        spawn_local(async move {
            let outcome = JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| PlaybackError::Blocked {
                    track,
                    reason: format!("{e:?}"),
                });
            outcomes.borrow_mut().push((track, outcome));
        });
        Ok(())
    }

    fn pause(&mut self, track: TrackId) {
        if let Some(el) = self.element(track) {
            _ = el.pause();
        }
    }
}

impl Drop for WebDeck {
    fn drop(&mut self) {
        for (_, el) in &self.tracks {
            _ = el.pause();
            el.set_src("");
        }
    }
}
