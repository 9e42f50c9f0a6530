pub mod bases;
pub mod profile;
pub mod scheme;

pub use bases::{BaseLoadError, ContributionBaseLoader};
pub use profile::{ProfileLoadError, load_profile_from_file, load_profile_from_str};
pub use scheme::{SchemeLoadError, load_scheme_from_file, load_scheme_from_str};
