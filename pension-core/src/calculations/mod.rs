//! Retirement calculation pipeline.
//!
//! Each stage lives in its own module and is a pure function over borrowed
//! inputs; [`PensionCalculator`] composes them.

pub mod calculator;
pub mod common;
pub mod dates;
pub mod eligibility;
pub mod modality;
pub mod ordinary_age;
pub mod pension;
pub mod regulatory_base;

pub use calculator::{PensionCalculator, calculate, calculate_as_of};
pub use eligibility::BlockReason;
pub use modality::{ModalityOutcome, ModalityPlan};
pub use regulatory_base::RegulatoryBases;
