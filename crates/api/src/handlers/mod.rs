pub mod communities;
pub mod export;
pub mod features;
pub mod msa;
pub mod units;
