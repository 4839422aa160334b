//! Hole grid generation.

use bevy::prelude::*;

use crate::core::{ConfigError, GameConfig};

/// Fixed hole positions for one round.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct HoleLayout {
    hole_size: f32,
    top_lefts: Vec<Vec2>,
}

impl HoleLayout {
    /// Columns and rows used for a hole count.
    pub fn grid_shape(holes: usize) -> Result<(usize, usize), ConfigError> {
        match holes {
            6 | 9 => Ok((3, holes / 3)),
            12 => Ok((4, 3)),
            other => Err(ConfigError::UnsupportedHoleCount(other)),
        }
    }

    /// Spread `holes` evenly over the screen with equal padding between
    /// holes and around the edges.
    pub fn generate(holes: usize, config: &GameConfig) -> Result<Self, ConfigError> {
        let (cols, rows) = Self::grid_shape(holes)?;
        let hole = config.hole_size;

        let padding_col = (config.screen_width - hole * cols as f32) / (cols + 1) as f32;
        let padding_row = (config.screen_height - hole * rows as f32) / (rows + 1) as f32;
        if padding_col < 0.0 || padding_row < 0.0 {
            return Err(ConfigError::GridDoesNotFit {
                holes,
                hole_size: hole,
                width: config.screen_width,
                height: config.screen_height,
            });
        }

        let mut top_lefts = Vec::with_capacity(holes);
        for r in 0..rows {
            let y = r as f32 * hole + (r + 1) as f32 * padding_row;
            for c in 0..cols {
                let x = c as f32 * hole + (c + 1) as f32 * padding_col;
                top_lefts.push(Vec2::new(x.trunc(), y.trunc()));
            }
        }

        Ok(Self {
            hole_size: hole,
            top_lefts,
        })
    }

    pub fn len(&self) -> usize {
        self.top_lefts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.top_lefts.is_empty()
    }

    pub fn hole_size(&self) -> f32 {
        self.hole_size
    }

    /// Top-left corner of a hole, where the hole image is drawn.
    pub fn top_left(&self, slot: usize) -> Option<Vec2> {
        self.top_lefts.get(slot).copied()
    }

    /// Center of a hole, where targets spawn.
    pub fn center(&self, slot: usize) -> Option<Vec2> {
        self.top_left(slot).map(|p| p + Vec2::splat(self.hole_size / 2.0))
    }

    pub fn centers(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.top_lefts
            .iter()
            .map(|p| *p + Vec2::splat(self.hole_size / 2.0))
    }

    /// Slot whose center is closest to `point` (squared distance).
    pub fn nearest_slot(&self, point: Vec2) -> Option<usize> {
        self.centers()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                a.distance_squared(point)
                    .total_cmp(&b.distance_squared(point))
            })
            .map(|(slot, _)| slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_holes_make_two_rows_of_three() {
        let layout = HoleLayout::generate(6, &GameConfig::default()).unwrap();
        assert_eq!(layout.len(), 6);
        // padding_col = (1024 - 384) / 4 = 160, padding_row = (768 - 256) / 3 = 170.67
        assert_eq!(layout.top_left(0), Some(Vec2::new(160.0, 170.0)));
        assert_eq!(layout.top_left(2), Some(Vec2::new(736.0, 170.0)));
        assert_eq!(layout.top_left(3), Some(Vec2::new(160.0, 469.0)));
        assert_eq!(layout.center(0), Some(Vec2::new(224.0, 234.0)));
    }

    #[test]
    fn twelve_holes_use_four_columns() {
        assert_eq!(HoleLayout::grid_shape(12).unwrap(), (4, 3));
        assert_eq!(HoleLayout::grid_shape(9).unwrap(), (3, 3));
        let layout = HoleLayout::generate(12, &GameConfig::default()).unwrap();
        assert_eq!(layout.len(), 12);
    }

    #[test]
    fn other_counts_are_configuration_errors() {
        for holes in [0, 4, 8, 16] {
            assert!(matches!(
                HoleLayout::grid_shape(holes),
                Err(ConfigError::UnsupportedHoleCount(n)) if n == holes
            ));
        }
    }

    #[test]
    fn nearest_slot_picks_closest_center() {
        let layout = HoleLayout::generate(6, &GameConfig::default()).unwrap();
        let near_last = layout.center(5).unwrap() + Vec2::new(10.0, -20.0);
        assert_eq!(layout.nearest_slot(near_last), Some(5));
        assert_eq!(layout.nearest_slot(Vec2::ZERO), Some(0));
    }
}
