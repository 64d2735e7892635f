//! Label/terminator extraction rules
//!
//! Each field of a vessel page is carved out of the flattened page text by a rule
//! of the form "label, then a lazy capture, then one of the terminator labels".
//! The rules only hold while the registry renders its labels in this order; a
//! markup change upstream silently turns a field into an empty string rather than
//! an error.

use crate::extract::category::category_path;
use crate::model::VesselRecord;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Record field a rule populates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Imo,
    Mmsi,
    Flag,
    VesselType,
    Category,
    Justification,
}

/// Post-processing applied to a rule's capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostProcess {
    /// Trim surrounding whitespace
    Trim,
    /// Reduce a multi-line block to at most two category segments
    CategoryPath,
}

/// One boundary-delimited extraction rule
#[derive(Debug)]
pub struct TextRule {
    pub field: Field,
    /// Pattern that anchors the field
    pub label: &'static str,
    /// Pattern for the value; should be lazy when terminators are given
    pub capture: &'static str,
    /// Patterns that end the value; the first one reached wins
    pub terminators: &'static [&'static str],
    /// Also accept end of text as a terminator
    pub until_end: bool,
    pub case_insensitive: bool,
    pub dot_matches_new_line: bool,
    pub post: PostProcess,
}

/// The extraction table, in application order
pub const RULES: &[TextRule] = &[
    TextRule {
        field: Field::Name,
        label: r"Vessel\s*name",
        capture: r"[A-Z0-9\s\-\.]+?",
        terminators: &["Category", "IMO"],
        until_end: false,
        case_insensitive: true,
        dot_matches_new_line: false,
        post: PostProcess::Trim,
    },
    TextRule {
        field: Field::Imo,
        label: r"IMO",
        capture: r"\d+",
        terminators: &[],
        until_end: false,
        case_insensitive: false,
        dot_matches_new_line: false,
        post: PostProcess::Trim,
    },
    TextRule {
        field: Field::Mmsi,
        label: r"MMSI",
        capture: r"\d+",
        terminators: &[],
        until_end: false,
        case_insensitive: false,
        dot_matches_new_line: false,
        post: PostProcess::Trim,
    },
    TextRule {
        field: Field::Flag,
        label: r"Flag\s*\(Current\)",
        capture: r"[A-Za-z\s]+?",
        terminators: &["MMSI", r"Vessel\s*Type", "Call"],
        until_end: false,
        case_insensitive: false,
        dot_matches_new_line: false,
        post: PostProcess::Trim,
    },
    TextRule {
        field: Field::VesselType,
        label: r"Vessel\s*Type",
        capture: r"[A-Za-z\s/\-]+?",
        terminators: &["Length", "Gross", "DWT", "P&I"],
        until_end: false,
        case_insensitive: false,
        dot_matches_new_line: false,
        post: PostProcess::Trim,
    },
    TextRule {
        field: Field::Category,
        label: r"Category",
        capture: r".+?",
        terminators: &["IMO", "Flag", "MMSI"],
        until_end: false,
        case_insensitive: false,
        dot_matches_new_line: true,
        post: PostProcess::CategoryPath,
    },
    TextRule {
        field: Field::Justification,
        label: r"(?:Justification|Vessel information)",
        capture: r".+?",
        terminators: &[
            "Cases of AIS",
            "Visited ports",
            "Available additional",
            "Web Resources",
            "Go to site",
        ],
        until_end: true,
        case_insensitive: false,
        dot_matches_new_line: true,
        post: PostProcess::Trim,
    },
];

impl TextRule {
    /// Regex source for this rule; the value is capture group 1
    pub fn pattern(&self) -> String {
        let mut pattern = format!(r"{}\s*({})", self.label, self.capture);

        let mut ends: Vec<&str> = self.terminators.to_vec();
        if self.until_end {
            ends.push("$");
        }
        if !ends.is_empty() {
            pattern.push_str("(?:");
            pattern.push_str(&ends.join("|"));
            pattern.push(')');
        }

        pattern
    }

    fn compile(&self) -> Result<Regex, regex::Error> {
        RegexBuilder::new(&self.pattern())
            .case_insensitive(self.case_insensitive)
            .dot_matches_new_line(self.dot_matches_new_line)
            .build()
    }

    /// Applies the rule to flattened page text
    ///
    /// Returns None when the label is absent or nothing survives post-processing.
    pub fn apply(&self, regex: &Regex, text: &str) -> Option<String> {
        let raw = regex.captures(text)?.get(1)?.as_str();
        let value = match self.post {
            PostProcess::Trim => raw.trim().to_string(),
            PostProcess::CategoryPath => category_path(raw),
        };
        (!value.is_empty()).then_some(value)
    }
}

static COMPILED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|rule| rule.compile().expect("valid extraction rule"))
        .collect()
});

/// Runs every rule over the text, filling the matching record fields
///
/// Fields whose rule misses are left as they were.
pub fn apply_rules(text: &str, record: &mut VesselRecord) {
    for (rule, regex) in RULES.iter().zip(COMPILED.iter()) {
        let Some(value) = rule.apply(regex, text) else {
            tracing::debug!("No match for {:?}", rule.field);
            continue;
        };

        let slot = match rule.field {
            Field::Name => &mut record.vessel_name,
            Field::Imo => &mut record.imo,
            Field::Mmsi => &mut record.mmsi,
            Field::Flag => &mut record.flag,
            Field::VesselType => &mut record.vessel_type,
            Field::Category => &mut record.category,
            Field::Justification => &mut record.vessel_information,
        };
        *slot = value;
    }
}
