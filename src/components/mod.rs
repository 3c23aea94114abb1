//! Reusable presentational components shared across pages.

pub mod page_footer;
pub mod sign_out;
