// View state machine for the single in-memory session, the async flow that
// runs the recommendation request, and the HTTP handlers that drive both.

pub mod flow;
pub mod handlers;
pub mod machine;
pub mod view;

pub use machine::Session;
