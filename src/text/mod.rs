pub mod encoder;
pub mod normalize;

pub use encoder::VocabularyEncoder;
pub use normalize::remove_new_lines;
