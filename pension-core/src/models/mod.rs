mod age;
mod modality;
mod profile;
mod result;
mod scheme_config;

pub use age::{AgeSpan, TimeRemaining};
pub use modality::RetirementModality;
pub use profile::{ContributionBase, WorkerProfile};
pub use result::{CalculationResult, OrdinaryComparison, PensionOption};
pub use scheme_config::{SchemeConfig, SchemeConfigError, WindowShortfall};
