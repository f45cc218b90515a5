//! Tagged outcome of a business-key reference lookup.

/// Result of resolving a business-key reference against a collection.
///
/// Business keys are caller-assigned, so nothing stops two documents from
/// carrying the same one. The join engine keeps the three cases distinct
/// internally and only collapses them at the view boundary: `Unique` joins,
/// `Ambiguous` joins on the first match in insertion order (and is logged as
/// a data-integrity gap), `None` omits the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    Unique(T),
    Ambiguous(Vec<T>),
    None,
}

impl<T> Resolution<T> {
    /// Classify the matches of a lookup (given in insertion order).
    pub fn from_matches(mut matches: Vec<T>) -> Self {
        match matches.len() {
            0 => Resolution::None,
            1 => Resolution::Unique(matches.remove(0)),
            _ => Resolution::Ambiguous(matches),
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Resolution::Ambiguous(_))
    }

    /// Collapse to the stable tie-break: first match in insertion order.
    pub fn into_first(self) -> Option<T> {
        match self {
            Resolution::Unique(v) => Some(v),
            Resolution::Ambiguous(mut candidates) => {
                if candidates.is_empty() {
                    return None;
                }
                Some(candidates.remove(0))
            }
            Resolution::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_match_count() {
        assert_eq!(Resolution::<u32>::from_matches(vec![]), Resolution::None);
        assert_eq!(Resolution::from_matches(vec![7]), Resolution::Unique(7));
        assert_eq!(
            Resolution::from_matches(vec![7, 8]),
            Resolution::Ambiguous(vec![7, 8])
        );
    }

    #[test]
    fn first_match_wins_on_ambiguity() {
        assert_eq!(Resolution::from_matches(vec![7, 8, 9]).into_first(), Some(7));
        assert_eq!(Resolution::<u32>::from_matches(vec![]).into_first(), None);
    }
}
