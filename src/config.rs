use std::time::Duration;

/// Side length of the grid.
pub const DEFAULT_GRID_SIZE: usize = 40;
/// Side length of the square drawing surface in pixels.
pub const DEFAULT_WINDOW_SIZE: u32 = 800;

/// Settings fixed for the lifetime of one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub grid_size: usize,
    /// Only used by [InteractionController::with_config](crate::InteractionController::with_config)
    /// to derive square pixel cells. Front ends with their own cell layout pass a
    /// [Viewport](crate::Viewport) to [InteractionController::new](crate::InteractionController::new)
    /// instead and ignore it.
    pub window_size: u32,
    /// Pause applied by renderers after every frame, pacing the search animation.
    pub step_delay: Duration,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            grid_size: DEFAULT_GRID_SIZE,
            window_size: DEFAULT_WINDOW_SIZE,
            step_delay: Duration::ZERO,
        }
    }
}
