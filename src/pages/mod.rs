//! Page components, one per routed screen.
//!
//! Each page instantiates the session guard with its own policy and
//! redirect destination, and renders exactly one of the three phases:
//! `Loading`, `Redirecting` (nothing), or `Ready`.

pub mod guest;
pub mod home;
pub mod login;
pub mod profile;
pub mod signup;
