pub mod brand;
pub mod waitlist;
