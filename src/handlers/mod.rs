//! HTTP handlers for books and reviews.

pub mod books;
pub mod reviews;
pub use books::*;
pub use reviews::*;
