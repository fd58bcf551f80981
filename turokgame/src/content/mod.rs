mod ambience_content;
mod content_registry;
mod jungle;

pub use ambience_content::{AmbienceContent, GENERIC_AMBIENCE_NAME};
pub use content_registry::ContentRegistry;
pub use jungle::{JUNGLE_NAME, JUNGLE_RAND_FACTOR, JUNGLE_SOUNDS};
