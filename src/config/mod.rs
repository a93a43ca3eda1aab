pub mod catalog;
pub mod template;

pub use catalog::{ApplicationDescriptor, Catalog, InstallCommands};
