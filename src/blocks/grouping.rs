//! Bucketing of business-objective questions and solutions by time horizon

use serde::Serialize;

/// The four fixed horizon groups, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Period {
    ShortTerm,
    MediumTerm,
    LongTerm,
    Other,
}

impl Period {
    pub const ALL: [Period; 4] = [
        Period::ShortTerm,
        Period::MediumTerm,
        Period::LongTerm,
        Period::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Period::ShortTerm => "Short Term",
            Period::MediumTerm => "Medium Term",
            Period::LongTerm => "Long Term",
            Period::Other => "Other",
        }
    }

    /// Classify a free-text section tag. Matching is case-sensitive and
    /// checked short, then medium, then long; anything else is `Other`.
    ///
    /// # Examples
    /// ```ignore
    /// Period::classify("Insights_Short_Term") // -> ShortTerm
    /// Period::classify("Short_Mid")           // -> ShortTerm
    /// Period::classify("Unrelated_Tag")       // -> Other
    /// ```
    pub fn classify(tag: &str) -> Self {
        if tag.contains("Short_Term") || tag.contains("Short") {
            Period::ShortTerm
        } else if tag.contains("Medium_Term") || tag.contains("Mid") {
            Period::MediumTerm
        } else if tag.contains("Long_Term") || tag.contains("Long") {
            Period::LongTerm
        } else {
            Period::Other
        }
    }
}

/// A tagged line of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedItem {
    pub section: String,
    pub text: String,
}

/// Items grouped by period, one group per period in display order.
/// Every input item lands in exactly one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodGroups {
    groups: Vec<(Period, Vec<String>)>,
}

impl PeriodGroups {
    pub fn get(&self, period: Period) -> &[String] {
        self.groups
            .iter()
            .find(|(p, _)| *p == period)
            .map(|(_, items)| items.as_slice())
            .unwrap_or(&[])
    }

    /// Groups that have at least one item
    pub fn non_empty(&self) -> impl Iterator<Item = (Period, &[String])> {
        self.groups
            .iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(p, items)| (*p, items.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, items)| items.len()).sum()
    }
}

/// Group items into the four period buckets, keeping input order in each
pub fn group_by_period(items: &[TaggedItem]) -> PeriodGroups {
    let mut groups: Vec<(Period, Vec<String>)> =
        Period::ALL.iter().map(|p| (*p, Vec::new())).collect();

    for item in items {
        let period = Period::classify(&item.section);
        if let Some((_, bucket)) = groups.iter_mut().find(|(p, _)| *p == period) {
            bucket.push(item.text.clone());
        }
    }

    PeriodGroups { groups }
}
