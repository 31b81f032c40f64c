pub mod error;
pub mod event;
pub mod processor;
pub mod summary;
#[cfg(test)]
pub(crate) mod testing;

pub use event::{Acknowledgement, StorageEvent};
pub use processor::SpamPipeline;
