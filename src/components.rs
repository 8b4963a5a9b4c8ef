pub use searchform::SearchForm;
pub use resultentry::ResultEntry;

mod searchform;
mod resultentry;
