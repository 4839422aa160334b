//! Per-entity clip player.

use std::sync::Arc;

use bevy::prelude::*;

use super::clip::AnimationClip;

/// Plays one clip at a time.
///
/// Clips are shared between entities through `Arc` and compared by identity,
/// so re-playing the clip that is already bound without `reset` keeps the
/// current frame.
#[derive(Debug, Clone)]
pub struct Animator<F = Handle<Image>> {
    clip: Option<Arc<AnimationClip<F>>>,
    index: usize,
    elapsed: f32,
    finished: bool,
}

impl<F> Default for Animator<F> {
    fn default() -> Self {
        Self {
            clip: None,
            index: 0,
            elapsed: 0.0,
            finished: false,
        }
    }
}

impl<F> Animator<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `clip`. Rewinds when `reset` is set or the clip changes.
    pub fn play(&mut self, clip: &Arc<AnimationClip<F>>, reset: bool) {
        let same = self
            .clip
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, clip));

        if reset || !same {
            self.clip = Some(Arc::clone(clip));
            self.index = 0;
            self.elapsed = 0.0;
            self.finished = false;
        }
    }

    /// Advance by `dt` seconds, catching up several frames if needed.
    pub fn update(&mut self, dt: f32) {
        let Some(clip) = &self.clip else {
            return;
        };
        if self.finished {
            return;
        }

        self.elapsed += dt;
        while self.elapsed >= clip.frame_time() && !self.finished {
            self.elapsed -= clip.frame_time();
            self.index += 1;

            if self.index >= clip.len() {
                if clip.is_looping() {
                    self.index = 0;
                } else {
                    self.index = clip.len() - 1;
                    self.finished = true;
                }
            }
        }
    }

    /// Frame to draw right now, if a clip is bound.
    pub fn current_frame(&self) -> Option<&F> {
        self.clip.as_ref().map(|clip| clip.frame(self.index))
    }

    pub fn clip(&self) -> Option<&Arc<AnimationClip<F>>> {
        self.clip.as_ref()
    }

    /// True when `clip` is the bound clip (by identity).
    pub fn is_playing(&self, clip: &Arc<AnimationClip<F>>) -> bool {
        self.clip.as_ref().is_some_and(|current| Arc::ptr_eq(current, clip))
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
