//! Domain entities - the core business objects.

mod defaults;
mod post;
mod query;

pub use defaults::ContentDefaults;
pub use post::{Post, PostDraft, newest_first};
pub use query::{ListParams, Page, Pagination, PostQuery};
