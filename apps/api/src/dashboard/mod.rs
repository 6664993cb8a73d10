// Dashboard assembly: concurrent load of the user's records, gap analysis,
// progress aggregation, and the optimistic skill toggle.

pub mod handlers;
pub mod service;
pub mod session;
