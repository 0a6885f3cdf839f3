/// Padding between the card edge and its text, in pixels. Text is wrapped to the
/// width left between `left` and `right`, and paginated into the height left
/// between `top` and `bottom`
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Margins {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: i32, right: i32, bottom: i32, left: i32) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all(value: i32) -> Margins {
        Margins::trbl(value, value, value, value)
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: i32, horizontal: i32) -> Margins {
        Margins::trbl(vertical, horizontal, vertical, horizontal)
    }

    /// Create margins where all values are 0
    pub fn empty() -> Margins {
        Margins::default()
    }

    /// Combined left and right margins
    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Combined top and bottom margins
    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_sides() {
        let margins = Margins::trbl(10, 20, 30, 40);
        assert_eq!(margins.horizontal(), 60);
        assert_eq!(margins.vertical(), 40);
        assert_eq!(Margins::all(5), Margins::symmetric(5, 5));
        assert_eq!(Margins::empty().horizontal(), 0);
    }
}
