//! Container-to-render scale resolution.
//!
//! Pure sizing math with no animation coupling; the app recomputes the scale
//! whenever the window resizes.

use glam::UVec2;

use crate::constants::{CELL_SIZE, MAX_USER_SCALE, MIN_USER_SCALE};

/// Resolves the final render scale for a container of the given pixel size.
///
/// The fitted scale is floored at 1.0 so the sprite occupies at least its
/// natural size even in small containers. The user multiplier (clamped to
/// `[MIN_USER_SCALE, MAX_USER_SCALE]`) applies on top, and the product is
/// floored at 1.0 again so a minimum-scale request in a tiny container still
/// renders the sprite 1:1.
pub fn resolve_scale(container: UVec2, user_scale: f32) -> f32 {
    let fit = (container.min_element() as f32 / CELL_SIZE as f32).max(1.0);
    let user = user_scale.clamp(MIN_USER_SCALE, MAX_USER_SCALE);
    (fit * user).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_scale_clamped() {
        let container = UVec2::new(128, 128);
        assert_eq!(resolve_scale(container, 10.0), resolve_scale(container, MAX_USER_SCALE));
        assert_eq!(resolve_scale(container, 0.01), resolve_scale(container, MIN_USER_SCALE));
    }

    #[test]
    fn test_small_container_floors_at_natural_size() {
        // A container smaller than one cell still renders the sprite 1:1.
        assert_eq!(resolve_scale(UVec2::new(32, 32), 1.0), 1.0);
        assert_eq!(resolve_scale(UVec2::new(32, 32), 0.5), 1.0);
    }

    #[test]
    fn test_fit_scales_with_container() {
        assert_eq!(resolve_scale(UVec2::new(640, 640), 1.0), 10.0);
        assert_eq!(resolve_scale(UVec2::new(640, 640), 2.0), 20.0);
        assert_eq!(resolve_scale(UVec2::new(640, 640), 0.5), 5.0);
    }

    #[test]
    fn test_non_square_container_uses_short_side() {
        assert_eq!(resolve_scale(UVec2::new(640, 128), 1.0), 2.0);
        assert_eq!(resolve_scale(UVec2::new(128, 640), 1.0), 2.0);
    }
}
