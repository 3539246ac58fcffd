// Application layer - Use case interactors

pub mod clean_interactor;
pub mod container;
pub mod convert_interactor;
pub mod import_interactor;
pub mod list_interactor;

// Re-export interactors
pub use clean_interactor::{CleanInteractor, CleanReport, CleanScope};
pub use container::{AppContainer, DefaultAppContainer};
pub use convert_interactor::{ConversionReport, ConvertInteractor};
pub use import_interactor::{ImportInteractor, ImportOptions, ImportReport};
pub use list_interactor::{Inventory, ListInteractor};
