//! # TUI Components
//!
//! Stateless components receive everything as props (`TitleBar`,
//! `Banner`); stateful ones own local editing or scroll state and emit
//! high-level events (`PostFormBox`, `PostList`). Each file co-locates
//! its state, events, rendering and tests.

pub mod banner;
pub mod post_form;
pub mod post_list;
pub mod title_bar;

pub use banner::Banner;
pub use post_form::{FormEvent, PostFormBox};
pub use post_list::PostList;
pub use title_bar::TitleBar;
