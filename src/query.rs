use crate::timeframe::Timeframe;

/// One submitted request: a keyword plus a reporting window.
///
/// Built from the form at submit time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    keyword: String,
    timeframe: Timeframe,
}

impl Query {
    /// Build a query, rejecting blank keywords
    pub fn new(keyword: &str, timeframe: Timeframe) -> Option<Self> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return None;
        }
        Some(Self {
            keyword: keyword.to_string(),
            timeframe,
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_keyword_rejected() {
        assert!(Query::new("", Timeframe::PastYear).is_none());
        assert!(Query::new("   ", Timeframe::PastYear).is_none());
    }

    #[test]
    fn test_keyword_trimmed() {
        let q = Query::new("  rust lang ", Timeframe::AllTime).unwrap();
        assert_eq!(q.keyword(), "rust lang");
        assert_eq!(q.timeframe().token(), "all");
    }
}
