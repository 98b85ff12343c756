pub mod logging;
pub mod script;
pub mod summary;
