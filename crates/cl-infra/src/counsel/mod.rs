mod canned;

pub use canned::CannedCounsel;
