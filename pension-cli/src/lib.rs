use pension_core::RetirementModality;

pub mod logging;
pub mod report;

/// Value parser for `--modality`: one of the short modality codes.
pub fn parse_modality(code: &str) -> Result<RetirementModality, String> {
    RetirementModality::parse(code).ok_or_else(|| {
        let known: Vec<&str> = RetirementModality::all().iter().map(|m| m.as_str()).collect();
        format!("unknown modality '{code}', expected one of {}", known.join(", "))
    })
}
