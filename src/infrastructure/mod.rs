pub mod directories;
pub mod logging;
pub mod mail;
pub mod notifier;
pub mod store;
