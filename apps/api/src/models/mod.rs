pub mod career;
pub mod interest;
pub mod recommendation;
