//! Rectangular anchor lattice centered in the viewport

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lattice {
    pub cols: u32,
    pub rows: u32,
    pub spacing: f32,
    /// Top-left anchor; the leftover margin is split evenly on both sides
    pub start: Vec2,
}

impl Lattice {
    pub fn for_viewport(width: f32, height: f32, spacing: f32) -> Self {
        let (cols, rows) = if spacing > 0.0 {
            (
                (width.max(0.0) / spacing).floor() as u32,
                (height.max(0.0) / spacing).floor() as u32,
            )
        } else {
            (0, 0)
        };

        let start = Vec2::new(
            (width - cols as f32 * spacing) / 2.0,
            (height - rows as f32 * spacing) / 2.0,
        );

        Self {
            cols,
            rows,
            spacing,
            start,
        }
    }

    pub fn len(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Anchor positions, column by column
    pub fn origins(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.cols).flat_map(move |i| {
            (0..self.rows)
                .map(move |j| self.start + Vec2::new(i as f32, j as f32) * self.spacing)
        })
    }
}
