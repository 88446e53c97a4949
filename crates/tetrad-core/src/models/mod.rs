pub mod demographics;
pub mod response;
pub mod result;
pub mod scale;
pub mod scores;
pub mod statistics;
