//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Lists are ordered by id.

pub mod actor_repo;
pub mod director_repo;
pub mod genre_repo;
pub mod movie_repo;
pub mod production_company_repo;

pub use actor_repo::ActorRepo;
pub use director_repo::DirectorRepo;
pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;
pub use production_company_repo::ProductionCompanyRepo;
