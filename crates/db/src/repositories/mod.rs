//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods that
//! accept `&PgPool` as the first argument. The layer performs only reads,
//! except for the MSA demographics refresh.

pub mod community_repo;
pub mod feature_repo;
pub mod msa_repo;
pub mod unit_repo;

pub use community_repo::CommunityRepo;
pub use feature_repo::FeatureRepo;
pub use msa_repo::MsaRepo;
pub use unit_repo::UnitRepo;
