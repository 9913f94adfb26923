// Brand profiles: creation wizard submit, dashboard reads, generation from a stored profile.

pub mod handlers;
pub mod validation;
