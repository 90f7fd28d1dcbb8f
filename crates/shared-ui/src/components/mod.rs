// Standalone components (no primitives beyond attribute merging)
pub mod button;
pub mod card;
pub mod external_link;
pub mod status_message;

// Re-exports for convenience
pub use button::*;
pub use card::*;
pub use external_link::*;
pub use status_message::*;
