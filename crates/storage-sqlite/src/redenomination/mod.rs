mod repository;

pub use repository::RedenominationRepository;
