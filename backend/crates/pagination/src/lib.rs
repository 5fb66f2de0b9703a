//! Offset pagination primitives shared by the doctor directory endpoints.
//!
//! The crate is deliberately small and free of I/O. It provides:
//!
//! - [`PageRequest`]: a validated `(page, limit)` pair with the bounds the
//!   listing endpoints accept (`page >= 1`, `1 <= limit <= MAX_LIMIT`).
//! - [`Page`]: the envelope returned to clients, carrying the current slice of
//!   items together with the total match count and derived page count.
//! - [`total_pages`]: the ceiling division used by every envelope.
//!
//! Both the database-backed listing and the in-memory fallback use the same
//! arithmetic, so an identical request produces identically shaped envelopes
//! regardless of which path served it.
//!
//! # Example
//!
//! ```
//! use pagination::{Page, PageRequest};
//!
//! let request = PageRequest::new(2, 2).expect("valid request");
//! let page = Page::from_candidates(vec!["a", "b", "c", "d", "e"], request);
//!
//! assert_eq!(page.items(), &["c", "d"]);
//! assert_eq!(page.total(), 5);
//! assert_eq!(page.total_pages(), 3);
//! ```

mod page;
mod request;

pub use page::{Page, total_pages};
pub use request::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, PageRequest, PageRequestError};
