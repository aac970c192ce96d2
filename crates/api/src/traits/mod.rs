//! Traits implemented by the bincurve algorithm crates

pub mod key_agreement;

pub use key_agreement::KeyAgreement;
