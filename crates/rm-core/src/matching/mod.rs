pub mod education;
pub mod experience;
pub mod explanation;
pub mod pipeline;
pub mod requirements;
pub mod scoring;
pub mod skills;
pub mod weights;
