pub mod constants;
pub mod format;
pub mod ticker;
pub mod url;
