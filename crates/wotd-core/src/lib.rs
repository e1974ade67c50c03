pub mod fallback;
pub mod headwords;
pub mod source;

pub use source::WordSource;
