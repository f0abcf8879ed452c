pub mod cafe;

pub use cafe::{CafeRecord, RatingScale};
