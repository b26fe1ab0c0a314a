//! Rectangle layout helpers
//!
//! Small geometry toolkit for hosts that lay out their own editor GUI:
//! percentage slicing, remainders, and proportional flex splits over plain
//! rectangles. Fraction arguments are percentages strictly between 0 and 100;
//! out-of-range values fail fast with [`LayoutError::InvalidFraction`]. These
//! helpers never touch the generation core.

/// Layout errors
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Fraction argument outside the open (0, 100) percentage range
    #[error("fraction {0} out of range, expected a percentage strictly between 0 and 100")]
    InvalidFraction(f32),
}

/// Axis-aligned rectangle in GUI coordinates (y grows downward)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Horizontal extent
    pub width: f32,
    /// Vertical extent
    pub height: f32,
}

/// Which edge a flex split grows from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Split top-down
    Top,
    /// Split bottom-up
    Bottom,
    /// Split right-to-left
    Right,
    /// Split left-to-right
    Left,
}

impl Direction {
    fn offset_multiplier(self) -> f32 {
        match self {
            Direction::Top | Direction::Right => 1.0,
            Direction::Bottom | Direction::Left => -1.0,
        }
    }
}

fn check_fraction(fraction: f32) -> Result<(), LayoutError> {
    if fraction <= 0.0 || fraction >= 100.0 {
        return Err(LayoutError::InvalidFraction(fraction));
    }
    Ok(())
}

impl Rect {
    /// Create a rectangle from position and size
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Replace the left edge
    pub fn set_x(self, x: f32) -> Self {
        Self { x, ..self }
    }

    /// Replace the top edge
    pub fn set_y(self, y: f32) -> Self {
        Self { y, ..self }
    }

    /// Replace the width
    pub fn set_width(self, width: f32) -> Self {
        Self { width, ..self }
    }

    /// Replace the height
    pub fn set_height(self, height: f32) -> Self {
        Self { height, ..self }
    }

    /// Translate horizontally
    pub fn move_x(self, dx: f32) -> Self {
        Self { x: self.x + dx, ..self }
    }

    /// Translate vertically
    pub fn move_y(self, dy: f32) -> Self {
        Self { y: self.y + dy, ..self }
    }

    /// Translate by an offset
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Inset all four edges by per-axis offsets
    pub fn shrink_xy(self, offset_x: f32, offset_y: f32) -> Self {
        Self {
            x: self.x + offset_x,
            y: self.y + offset_y,
            width: self.width - offset_x * 2.0,
            height: self.height - offset_y * 2.0,
        }
    }

    /// Inset all four edges uniformly
    pub fn shrink(self, offset: f32) -> Self {
        self.shrink_xy(offset, offset)
    }

    /// Outset all four edges uniformly
    pub fn grow(self, offset: f32) -> Self {
        self.shrink(-offset)
    }

    fn slice_h_at(self, fraction: f32, index: usize) -> Self {
        let height = self.height * fraction / 100.0;
        Self {
            y: self.y + height * index as f32,
            height,
            ..self
        }
    }

    fn slice_w_at(self, fraction: f32, index: usize) -> Self {
        let width = self.width * fraction / 100.0;
        Self {
            x: self.x + width * index as f32,
            width,
            ..self
        }
    }

    /// Take the `index`-th horizontal band of `fraction` percent height
    pub fn slice_h(self, fraction: f32, index: usize) -> Result<Self, LayoutError> {
        check_fraction(fraction)?;
        Ok(self.slice_h_at(fraction, index))
    }

    /// Take the `index`-th vertical band of `fraction` percent width
    pub fn slice_w(self, fraction: f32, index: usize) -> Result<Self, LayoutError> {
        check_fraction(fraction)?;
        Ok(self.slice_w_at(fraction, index))
    }

    /// Top half
    pub fn half_top(self) -> Self {
        self.slice_h_at(50.0, 0)
    }

    /// Bottom half
    pub fn half_bottom(self) -> Self {
        self.slice_h_at(50.0, 1)
    }

    /// Left half
    pub fn half_left(self) -> Self {
        self.slice_w_at(50.0, 0)
    }

    /// Right half
    pub fn half_right(self) -> Self {
        self.slice_w_at(50.0, 1)
    }

    /// Everything below the top `fraction` percent
    pub fn remainder_h(self, fraction: f32) -> Result<Self, LayoutError> {
        check_fraction(fraction)?;
        Ok(Self {
            y: self.y + self.height * fraction / 100.0,
            height: self.height * (1.0 - fraction / 100.0),
            ..self
        })
    }

    /// Everything right of the left `fraction` percent
    pub fn remainder_w(self, fraction: f32) -> Result<Self, LayoutError> {
        check_fraction(fraction)?;
        Ok(Self {
            x: self.x + self.width * fraction / 100.0,
            width: self.width * (1.0 - fraction / 100.0),
            ..self
        })
    }

    /// Split into horizontal bands proportional to `factors`
    pub fn flex_h(self, factors: &[f32]) -> Vec<Self> {
        let total: f32 = factors.iter().sum();
        let mut rects = Vec::with_capacity(factors.len());
        let mut offset = 0.0;

        for &factor in factors {
            let height = self.height * factor / total;
            rects.push(self.set_height(height).move_y(offset));
            offset += height;
        }

        rects
    }

    /// Split into vertical bands proportional to `factors`
    pub fn flex_w(self, factors: &[f32]) -> Vec<Self> {
        let total: f32 = factors.iter().sum();
        let mut rects = Vec::with_capacity(factors.len());
        let mut offset = 0.0;

        for &factor in factors {
            let width = self.width * factor / total;
            rects.push(self.set_width(width).move_x(offset));
            offset += width;
        }

        rects
    }

    /// Split proportionally, growing from the given edge
    pub fn flex(self, direction: Direction, factors: &[f32]) -> Vec<Self> {
        let total: f32 = factors.iter().sum();
        let multiplier = direction.offset_multiplier();
        let mut offset = match direction {
            Direction::Top | Direction::Left => 0.0,
            Direction::Bottom => self.height,
            Direction::Right => self.width,
        };

        let mut rects = Vec::with_capacity(factors.len());
        for &factor in factors {
            let rect = match direction {
                Direction::Top | Direction::Bottom => {
                    let height = self.height * factor / total;
                    self.set_height(height).move_y(offset)
                }
                Direction::Left | Direction::Right => {
                    let width = self.width * factor / total;
                    self.set_width(width).move_x(offset)
                }
            };

            let dimension = match direction {
                Direction::Top | Direction::Bottom => rect.height,
                Direction::Left | Direction::Right => rect.width,
            };
            offset += multiplier * dimension;
            rects.push(rect);
        }

        rects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_validation() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);

        assert_eq!(rect.slice_h(0.0, 0), Err(LayoutError::InvalidFraction(0.0)));
        assert_eq!(rect.slice_h(100.0, 0), Err(LayoutError::InvalidFraction(100.0)));
        assert_eq!(rect.slice_w(-5.0, 0), Err(LayoutError::InvalidFraction(-5.0)));
        assert_eq!(rect.remainder_h(150.0), Err(LayoutError::InvalidFraction(150.0)));
        assert!(rect.slice_h(0.1, 0).is_ok());
        assert!(rect.slice_w(99.9, 0).is_ok());
    }

    #[test]
    fn test_slice_bands() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);

        let first = rect.slice_h(25.0, 0).unwrap();
        assert_eq!(first, Rect::new(0.0, 0.0, 200.0, 25.0));

        let third = rect.slice_h(25.0, 2).unwrap();
        assert_eq!(third, Rect::new(0.0, 50.0, 200.0, 25.0));

        let second_col = rect.slice_w(50.0, 1).unwrap();
        assert_eq!(second_col, Rect::new(100.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn test_halves() {
        let rect = Rect::new(10.0, 20.0, 100.0, 60.0);

        assert_eq!(rect.half_top(), Rect::new(10.0, 20.0, 100.0, 30.0));
        assert_eq!(rect.half_bottom(), Rect::new(10.0, 50.0, 100.0, 30.0));
        assert_eq!(rect.half_left(), Rect::new(10.0, 20.0, 50.0, 60.0));
        assert_eq!(rect.half_right(), Rect::new(60.0, 20.0, 50.0, 60.0));
    }

    #[test]
    fn test_remainders() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);

        assert_eq!(rect.remainder_h(20.0).unwrap(), Rect::new(0.0, 20.0, 100.0, 80.0));
        assert_eq!(rect.remainder_w(20.0).unwrap(), Rect::new(20.0, 0.0, 80.0, 100.0));
    }

    #[test]
    fn test_shrink_grow_round_trip() {
        let rect = Rect::new(10.0, 10.0, 80.0, 40.0);
        assert_eq!(rect.shrink(5.0).grow(5.0), rect);
        assert_eq!(rect.shrink(5.0), Rect::new(15.0, 15.0, 70.0, 30.0));
    }

    #[test]
    fn test_flex_proportions() {
        let rect = Rect::new(0.0, 0.0, 100.0, 90.0);
        let bands = rect.flex_h(&[1.0, 2.0]);

        assert_eq!(bands.len(), 2);
        assert_eq!(bands[0], Rect::new(0.0, 0.0, 100.0, 30.0));
        assert_eq!(bands[1], Rect::new(0.0, 30.0, 100.0, 60.0));

        let cols = rect.flex_w(&[1.0, 1.0, 2.0]);
        assert_eq!(cols[2], Rect::new(50.0, 0.0, 50.0, 90.0));
    }

    #[test]
    fn test_flex_directional() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);

        let down = rect.flex(Direction::Top, &[1.0, 1.0]);
        assert_eq!(down[1].y, 50.0);

        let up = rect.flex(Direction::Bottom, &[1.0, 1.0]);
        assert_eq!(up[0].y, 100.0);
        assert_eq!(up[1].y, 50.0);
    }
}
