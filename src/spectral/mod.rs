pub mod magnitude;
pub mod measure;
pub mod policy;
pub mod sft;
