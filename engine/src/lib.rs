pub mod audio;
pub mod logging;
pub mod random;
