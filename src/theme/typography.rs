//! Typography - Font Sizes

/// Typography constants
pub struct Typography;

impl Typography {
    // Font sizes
    pub const TEXT_XS: f32 = 12.0;
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_BASE: f32 = 16.0;
    pub const TEXT_LG: f32 = 18.0;
    pub const TEXT_XL: f32 = 20.0;
    pub const TEXT_2XL: f32 = 24.0;

    /// Font size for a heading level (1 = largest)
    pub fn heading_size(level: u8) -> f32 {
        match level {
            0 | 1 => Self::TEXT_2XL,
            2 => Self::TEXT_LG,
            3 => Self::TEXT_BASE,
            _ => Self::TEXT_SM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_sizes_shrink_with_level() {
        assert_eq!(Typography::heading_size(1), Typography::TEXT_2XL);
        assert_eq!(Typography::heading_size(2), Typography::TEXT_LG);
        assert!(Typography::heading_size(3) > Typography::heading_size(4));
        assert_eq!(Typography::heading_size(6), Typography::TEXT_SM);
    }
}
