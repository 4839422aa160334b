//! Immutable animation clips.

use bevy::prelude::*;
use thiserror::Error;

/// Errors that can occur when building a clip.
#[derive(Debug, Error, PartialEq)]
pub enum AnimationError {
    #[error("Animation clip '{0}' has no frames")]
    NoFrames(String),

    #[error("Animation clip '{name}' has non-positive frame time {frame_time}")]
    InvalidFrameTime { name: String, frame_time: f32 },
}

/// An ordered, timed sequence of frames.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip<F = Handle<Image>> {
    name: String,
    frames: Vec<F>,
    frame_time: f32,
    looping: bool,
}

impl<F> AnimationClip<F> {
    pub fn new(
        name: impl Into<String>,
        frames: Vec<F>,
        frame_time: f32,
        looping: bool,
    ) -> Result<Self, AnimationError> {
        let name = name.into();
        if frames.is_empty() {
            return Err(AnimationError::NoFrames(name));
        }
        if !(frame_time > 0.0) {
            return Err(AnimationError::InvalidFrameTime { name, frame_time });
        }

        Ok(Self {
            name,
            frames,
            frame_time,
            looping,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frame_time(&self) -> f32 {
        self.frame_time
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; clips are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Seconds until a non-looping clip finishes.
    pub fn duration(&self) -> f32 {
        self.frame_time * self.frames.len() as f32
    }

    /// Frame at `index`, wrapping past the end.
    pub fn frame(&self, index: usize) -> &F {
        &self.frames[index % self.frames.len()]
    }
}

impl<F: Clone> AnimationClip<F> {
    /// Same frames played back to front.
    pub fn reversed(&self, name: impl Into<String>, frame_time: f32) -> Result<Self, AnimationError> {
        let frames = self.frames.iter().rev().cloned().collect();
        Self::new(name, frames, frame_time, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_zero_time() {
        assert_eq!(
            AnimationClip::<u8>::new("idle", vec![], 0.1, true),
            Err(AnimationError::NoFrames("idle".to_string()))
        );
        assert!(matches!(
            AnimationClip::new("idle", vec![1u8], 0.0, true),
            Err(AnimationError::InvalidFrameTime { .. })
        ));
    }

    #[test]
    fn reversed_keeps_frames_back_to_front() {
        let clip = AnimationClip::new("spawn", vec![0u8, 1, 2], 0.25, false).unwrap();
        let back = clip.reversed("despawn", 0.5).unwrap();
        assert_eq!(*back.frame(0), 2);
        assert_eq!(*back.frame(2), 0);
        assert_eq!(back.duration(), 1.5);
        assert!(!back.is_looping());
    }
}
