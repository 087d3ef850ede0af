//! Wizard sections and their tab geometry

use super::field::FieldId;

/// Horizontal gap between two tabs in the tab strip
pub const TAB_GAP: u16 = 1;

/// One step of the application wizard, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Section {
    #[default]
    Personal,
    Academic,
    Parent,
    Research,
    Activities,
    Additional,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Personal,
        Section::Academic,
        Section::Parent,
        Section::Research,
        Section::Activities,
        Section::Additional,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::Personal => 0,
            Self::Academic => 1,
            Self::Parent => 2,
            Self::Research => 3,
            Self::Activities => 4,
            Self::Additional => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The section after this one, `None` on the last section
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The section before this one, `None` on the first section
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_first(self) -> bool {
        self == Self::Personal
    }

    pub fn is_last(self) -> bool {
        self == Self::Additional
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Academic => "Academic",
            Self::Parent => "Parent",
            Self::Research => "Research",
            Self::Activities => "Activities",
            Self::Additional => "Additional",
        }
    }

    /// Longer heading shown above the section body
    pub fn heading(self) -> &'static str {
        match self {
            Self::Personal => "Personal Information",
            Self::Academic => "Academic Background",
            Self::Parent => "Parent / Guardian",
            Self::Research => "Research Interests",
            Self::Activities => "Extracurricular Activities",
            Self::Additional => "Additional Information",
        }
    }

    /// Fields owned by this section, in display order
    pub fn fields(self) -> &'static [FieldId] {
        match self {
            Self::Personal => &[
                FieldId::FullName,
                FieldId::Email,
                FieldId::Phone,
                FieldId::City,
                FieldId::Country,
            ],
            Self::Academic => &[FieldId::School, FieldId::Grade, FieldId::Gpa],
            Self::Parent => &[
                FieldId::ParentName,
                FieldId::ParentEmail,
                FieldId::ParentPhone,
            ],
            Self::Research => &[
                FieldId::FieldsOfInterest,
                FieldId::ResearchInterest,
                FieldId::Motivation,
            ],
            Self::Activities => &[FieldId::Extracurriculars, FieldId::Achievements],
            Self::Additional => &[
                FieldId::FinancialAid,
                FieldId::ReferralSource,
                FieldId::AdditionalInfo,
            ],
        }
    }

    /// Tab caption, e.g. "3 Parent"
    pub fn tab_label(self) -> String {
        format!("{} {}", self.index() + 1, self.title())
    }

    /// Rendered tab width: caption plus two cells of padding on each side
    pub fn tab_width(self) -> u16 {
        self.tab_label().chars().count() as u16 + 4
    }

    /// Column offset that brings this section's tab to the left edge of the strip
    pub fn tab_scroll_offset(self) -> u16 {
        Self::ALL[..self.index()]
            .iter()
            .map(|s| s.tab_width() + TAB_GAP)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_personal() {
        assert_eq!(Section::default(), Section::Personal);
    }

    #[test]
    fn test_next_walks_linear_order() {
        let mut section = Section::Personal;
        let mut visited = vec![section];
        while let Some(next) = section.next() {
            visited.push(next);
            section = next;
        }
        assert_eq!(visited, Section::ALL.to_vec());
    }

    #[test]
    fn test_prev_of_first_is_none() {
        assert!(Section::Personal.prev().is_none());
        assert_eq!(Section::Academic.prev(), Some(Section::Personal));
    }

    #[test]
    fn test_next_of_last_is_none() {
        assert!(Section::Additional.next().is_none());
    }

    #[test]
    fn test_index_round_trips() {
        for section in Section::ALL {
            assert_eq!(Section::from_index(section.index()), Some(section));
        }
        assert!(Section::from_index(6).is_none());
    }

    #[test]
    fn test_every_field_belongs_to_exactly_one_section() {
        for field in FieldId::ALL {
            let owners = Section::ALL
                .iter()
                .filter(|s| s.fields().contains(&field))
                .count();
            assert_eq!(owners, 1, "{field:?}");
            assert!(field.section().fields().contains(&field));
        }
    }

    #[test]
    fn test_first_tab_offset_is_zero() {
        assert_eq!(Section::Personal.tab_scroll_offset(), 0);
    }

    #[test]
    fn test_tab_offsets_accumulate_widths() {
        // "1 Personal" is 10 chars, padded to 14, plus the gap
        assert_eq!(Section::Personal.tab_width(), 14);
        assert_eq!(Section::Academic.tab_scroll_offset(), 15);
        let offsets: Vec<u16> = Section::ALL.iter().map(|s| s.tab_scroll_offset()).collect();
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    }
}
