//! Pointer input handling

/// Latest pointer-derived target for the player paddle's center
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerInput {
    target_y: Option<f32>,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move. `client_y` and `surface_top` are both in page
    /// coordinates; only their difference is kept.
    pub fn pointer_moved(&mut self, client_y: f32, surface_top: f32) {
        self.target_y = Some(surface_y(client_y, surface_top));
    }

    /// Latest known target, `None` until the pointer first moves
    pub fn target(&self) -> Option<f32> {
        self.target_y
    }
}

/// Convert a page y coordinate into one relative to the surface origin
pub fn surface_y(client_y: f32, surface_top: f32) -> f32 {
    client_y - surface_top
}
