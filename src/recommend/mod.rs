mod recommender;

pub use recommender::{Recommendation, Recommender};
