pub mod content;
pub mod error;
pub mod scripts;

pub use content::{AmbienceContent, ContentRegistry};
pub use error::{ContentError, ContentResult};
pub use scripts::{AreaAmbience, Effect, Script, ScriptHost};
