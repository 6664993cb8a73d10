// Onboarding and account lookup: the role catalog, profile creation with
// initial skills, email login, and the thin skill/progress list endpoints.

pub mod handlers;
