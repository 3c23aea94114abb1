//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `guard`, `forms`) so pages can
//! depend on small focused models. Everything here is plain data with
//! pure transitions; the browser-only glue lives behind the `hydrate`
//! feature at the edges.

pub mod forms;
pub mod guard;
pub mod session;
