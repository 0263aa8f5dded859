pub mod link_rewriter;
pub mod page_store;
pub mod title_index;

pub use link_rewriter::LinkRewriter;
pub use page_store::PageStore;
pub use title_index::TitleIndex;
