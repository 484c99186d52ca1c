use serde::{Deserialize, Serialize};

/// Kind of IP work an order covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeOfWork {
    PatentSearch,
    PatentDrafting,
    PatentFiling,
    PatentProsecution,
    TrademarkRegistration,
    CopyrightRegistration,
    DesignRegistration,
    Renewal,
    Litigation,
}

impl TypeOfWork {
    /// Value used in form controls
    pub fn code(&self) -> &'static str {
        match self {
            TypeOfWork::PatentSearch => "patent-search",
            TypeOfWork::PatentDrafting => "patent-drafting",
            TypeOfWork::PatentFiling => "patent-filing",
            TypeOfWork::PatentProsecution => "patent-prosecution",
            TypeOfWork::TrademarkRegistration => "trademark-registration",
            TypeOfWork::CopyrightRegistration => "copyright-registration",
            TypeOfWork::DesignRegistration => "design-registration",
            TypeOfWork::Renewal => "renewal",
            TypeOfWork::Litigation => "litigation",
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            TypeOfWork::PatentSearch => "Patent search",
            TypeOfWork::PatentDrafting => "Patent drafting",
            TypeOfWork::PatentFiling => "Patent filing",
            TypeOfWork::PatentProsecution => "Patent prosecution",
            TypeOfWork::TrademarkRegistration => "Trademark registration",
            TypeOfWork::CopyrightRegistration => "Copyright registration",
            TypeOfWork::DesignRegistration => "Design registration",
            TypeOfWork::Renewal => "Renewal",
            TypeOfWork::Litigation => "Litigation",
        }
    }

    pub fn all() -> Vec<TypeOfWork> {
        vec![
            TypeOfWork::PatentSearch,
            TypeOfWork::PatentDrafting,
            TypeOfWork::PatentFiling,
            TypeOfWork::PatentProsecution,
            TypeOfWork::TrademarkRegistration,
            TypeOfWork::CopyrightRegistration,
            TypeOfWork::DesignRegistration,
            TypeOfWork::Renewal,
            TypeOfWork::Litigation,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}

impl std::fmt::Display for TypeOfWork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique_and_reversible() {
        let all = TypeOfWork::all();
        for t in &all {
            assert_eq!(TypeOfWork::from_code(t.code()), Some(*t));
        }
        let mut codes: Vec<_> = all.iter().map(|t| t.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
        assert_eq!(TypeOfWork::from_code(""), None);
    }
}
