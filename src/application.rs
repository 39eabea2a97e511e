//! アプリケーション層
//!
//! ユースケースを提供する。

mod type_export;
mod type_import;
mod type_operations;

pub use type_export::export_type;
pub use type_import::{import_from_path, Disposition, ImportContext, ImportReport};
pub use type_operations::{
    delete_type, install_type, list_categories, CategoryListing, DeleteOutcome, InstallOutcome,
    LIST_CATEGORIES,
};
