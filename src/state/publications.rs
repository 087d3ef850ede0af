//! Static publications listing

/// A paper written by program alumni
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Publication {
    pub title: &'static str,
    pub author: &'static str,
    pub paper_link: &'static str,
    pub presentation_link: &'static str,
}

/// Which link of a publication to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationLink {
    Paper,
    Presentation,
}

impl PublicationLink {
    pub fn label(self) -> &'static str {
        match self {
            Self::Paper => "Paper",
            Self::Presentation => "Presentation",
        }
    }
}

impl Publication {
    pub fn link(&self, kind: PublicationLink) -> &'static str {
        match kind {
            PublicationLink::Paper => self.paper_link,
            PublicationLink::Presentation => self.presentation_link,
        }
    }
}

pub const PUBLICATIONS: &[Publication] = &[
    Publication {
        title: "Seasonal Variation of PM2.5 Concentrations in Almaty",
        author: "Aigerim Sadykova",
        paper_link: "https://example.org/papers/pm25-almaty.pdf",
        presentation_link: "https://example.org/slides/pm25-almaty",
    },
    Publication {
        title: "Low-Cost Soil Moisture Sensing for Smallholder Farms",
        author: "Daniyar Akhmetov",
        paper_link: "https://example.org/papers/soil-moisture.pdf",
        presentation_link: "https://example.org/slides/soil-moisture",
    },
    Publication {
        title: "Sentiment Drift in Kazakh-Language Social Media",
        author: "Madina Zhumabekova",
        paper_link: "https://example.org/papers/kazakh-sentiment.pdf",
        presentation_link: "https://example.org/slides/kazakh-sentiment",
    },
    Publication {
        title: "Microplastic Load in the Ili River Basin",
        author: "Arman Nurlanov",
        paper_link: "https://example.org/papers/ili-microplastics.pdf",
        presentation_link: "https://example.org/slides/ili-microplastics",
    },
    Publication {
        title: "Predicting Student Dropout with Gradient-Boosted Trees",
        author: "Aruzhan Bekova",
        paper_link: "https://example.org/papers/dropout-gbt.pdf",
        presentation_link: "https://example.org/slides/dropout-gbt",
    },
    Publication {
        title: "Antibacterial Properties of Steppe Plant Extracts",
        author: "Timur Ospanov",
        paper_link: "https://example.org/papers/steppe-extracts.pdf",
        presentation_link: "https://example.org/slides/steppe-extracts",
    },
];

/// Browsing state for the publications view
#[derive(Debug, Clone, Default)]
pub struct PublicationsState {
    pub selected: usize,
}

impl PublicationsState {
    pub fn select_next(&mut self) {
        if self.selected + 1 < PUBLICATIONS.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn current(&self) -> Option<&'static Publication> {
        PUBLICATIONS.get(self.selected)
    }
}
