//! Session lifecycle: acquiring a session and gating the protected view

pub mod controller;
pub mod guard;

pub use controller::SessionController;
pub use guard::GuardDecision;
