pub mod counts;

pub use counts::Counts;
