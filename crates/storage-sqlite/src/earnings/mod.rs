mod model;
mod repository;

pub use model::EarningDB;
pub use repository::EarningRepository;
