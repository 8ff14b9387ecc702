/// Window dimensions, the source of the projection aspect ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

impl WindowDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_dimensions_new() {
        let dims = WindowDimensions::new(1000, 800);
        assert_eq!(dims.width, 1000);
        assert_eq!(dims.height, 800);
    }

    #[test]
    fn test_aspect_ratio() {
        let dims = WindowDimensions::new(1000, 800);
        assert!((dims.aspect_ratio() - 1.25).abs() < f32::EPSILON);

        let square = WindowDimensions::new(512, 512);
        assert_eq!(square.aspect_ratio(), 1.0);
    }

    #[test]
    fn test_window_dimensions_copy() {
        let dims1 = WindowDimensions::new(1024, 768);
        let dims2 = dims1; // Copy

        assert_eq!(dims1, dims2);
    }
}
