//! Structured works and citation styles.

use serde::{Deserialize, Serialize};

use super::Reference;

/// Citation style for references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceStyle {
    /// APA style
    #[default]
    Apa,
    /// IEEE style (numbered)
    Ieee,
    /// MLA style
    Mla,
    /// Chicago style
    Chicago,
}

impl ReferenceStyle {
    /// Check whether entries carry a numeric label.
    pub fn is_numbered(self) -> bool {
        self == ReferenceStyle::Ieee
    }
}

const DOI_PREFIX: &str = "https://doi.org/";

/// A cited work with bibliographic fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    /// Author names in citation order
    pub authors: Vec<String>,

    /// Publication year
    pub year: Option<i32>,

    /// Title of the work
    pub title: String,

    /// Journal, proceedings or publisher
    pub venue: Option<String>,

    /// Volume
    pub volume: Option<String>,

    /// Issue number
    pub issue: Option<String>,

    /// Page range, e.g. "10-20"
    pub pages: Option<String>,

    /// DOI without the resolver prefix
    pub doi: Option<String>,
}

impl Work {
    /// Create a work with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into().trim().to_string(),
            ..Default::default()
        }
    }

    /// Set the authors. Blank names are dropped.
    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors
            .into_iter()
            .map(|a| {
                let a: String = a.into();
                a.trim().to_string()
            })
            .filter(|a| !a.is_empty())
            .collect();
        self
    }

    /// Set the publication year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Set the venue.
    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = non_blank(venue.into());
        self
    }

    /// Set the volume.
    pub fn with_volume(mut self, volume: impl Into<String>) -> Self {
        self.volume = non_blank(volume.into());
        self
    }

    /// Set the issue.
    pub fn with_issue(mut self, issue: impl Into<String>) -> Self {
        self.issue = non_blank(issue.into());
        self
    }

    /// Set the page range.
    pub fn with_pages(mut self, pages: impl Into<String>) -> Self {
        self.pages = non_blank(pages.into());
        self
    }

    /// Set the DOI. A leading `https://doi.org/` is removed.
    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        let doi = doi.into();
        let doi = doi.trim();
        self.doi = non_blank(doi.strip_prefix(DOI_PREFIX).unwrap_or(doi).to_string());
        self
    }

    /// Check whether two entries describe the same work.
    ///
    /// Works with DOIs compare by DOI; otherwise by title and year.
    pub fn is_same_work(&self, other: &Work) -> bool {
        match (&self.doi, &other.doi) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            _ => self.year == other.year && self.title.to_lowercase() == other.title.to_lowercase(),
        }
    }

    /// Format the work as citation text in `style`, without any label.
    pub fn format(&self, style: ReferenceStyle) -> String {
        match style {
            ReferenceStyle::Apa => self.format_apa(),
            ReferenceStyle::Mla => self.format_mla(),
            ReferenceStyle::Chicago => self.format_chicago(),
            ReferenceStyle::Ieee => self.format_ieee(),
        }
    }

    /// Build a reference entry in `style`. IEEE entries are labeled with `number`.
    pub fn to_reference(&self, style: ReferenceStyle, number: usize) -> Reference {
        let text = self.format(style);
        if style.is_numbered() {
            Reference::labeled(number.to_string(), text)
        } else {
            Reference::new(text)
        }
    }

    fn author_list(&self) -> String {
        if self.authors.is_empty() {
            "Anonymous".to_string()
        } else {
            self.authors.join(", ")
        }
    }

    fn year_text(&self) -> String {
        match self.year {
            Some(year) => year.to_string(),
            None => "n.d.".to_string(),
        }
    }

    // Author, A., Author, B. (Year). Title. Venue, Volume(Issue), pages. https://doi.org/...
    fn format_apa(&self) -> String {
        let mut out = format!(
            "{} ({}). {}",
            self.author_list(),
            self.year_text(),
            terminated(&self.title)
        );

        if let Some(ref venue) = self.venue {
            out.push(' ');
            out.push_str(venue);
            if let Some(ref volume) = self.volume {
                out.push_str(&format!(", {}", volume));
                if let Some(ref issue) = self.issue {
                    out.push_str(&format!("({})", issue));
                }
            }
            if let Some(ref pages) = self.pages {
                out.push_str(&format!(", {}", pages));
            }
            out.push('.');
        }

        if let Some(ref doi) = self.doi {
            out.push_str(&format!(" {}{}", DOI_PREFIX, doi));
        }
        out
    }

    // Author, A., Author, B. "Title." Venue, vol. V, no. I, Year, pp. P.
    fn format_mla(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(ref venue) = self.venue {
            parts.push(venue.clone());
            if let Some(ref volume) = self.volume {
                parts.push(format!("vol. {}", volume));
                if let Some(ref issue) = self.issue {
                    parts.push(format!("no. {}", issue));
                }
            }
        }
        parts.push(self.year_text());
        if let Some(ref pages) = self.pages {
            parts.push(format!("pp. {}", pages));
        }

        format!(
            "{} \"{}\" {}",
            terminated(&self.author_list()),
            terminated(&self.title),
            terminated(&parts.join(", "))
        )
    }

    // Author, A., Author, B. "Title." Venue V, no. I (Year): P.
    fn format_chicago(&self) -> String {
        let mut out = format!(
            "{} \"{}\"",
            terminated(&self.author_list()),
            terminated(&self.title)
        );

        if let Some(ref venue) = self.venue {
            out.push(' ');
            out.push_str(venue);
            if let Some(ref volume) = self.volume {
                out.push_str(&format!(" {}", volume));
                if let Some(ref issue) = self.issue {
                    out.push_str(&format!(", no. {}", issue));
                }
            }
        }

        out.push_str(&format!(" ({})", self.year_text()));
        if let Some(ref pages) = self.pages {
            out.push_str(&format!(": {}", pages));
        }
        out.push('.');
        out
    }

    // Author, A., Author, B., "Title," in Venue, vol. V, no. I, pp. P, Year. doi: ...
    fn format_ieee(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(ref venue) = self.venue {
            parts.push(format!("in {}", venue));
            if let Some(ref volume) = self.volume {
                parts.push(format!("vol. {}", volume));
                if let Some(ref issue) = self.issue {
                    parts.push(format!("no. {}", issue));
                }
            }
        }
        if let Some(ref pages) = self.pages {
            parts.push(format!("pp. {}", pages));
        }
        parts.push(self.year_text());

        let mut out = format!(
            "{}, \"{},\" {}",
            self.author_list(),
            self.title.trim_end_matches('.'),
            terminated(&parts.join(", "))
        );
        if let Some(ref doi) = self.doi {
            out.push_str(&format!(" doi: {}", doi));
        }
        out
    }
}

/// Append a period unless the text already ends a sentence.
fn terminated(text: &str) -> String {
    if text.ends_with(&['.', '?', '!'][..]) {
        text.to_string()
    } else {
        format!("{}.", text)
    }
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Work {
        Work::new("Dirt and Life")
            .with_authors(["Doe, J.", "Roe, R."])
            .with_year(2020)
            .with_venue("Soil Journal")
            .with_volume("4")
            .with_issue("2")
            .with_pages("10-20")
            .with_doi("https://doi.org/10.1000/xyz")
    }

    #[test]
    fn test_apa() {
        assert_eq!(
            article().format(ReferenceStyle::Apa),
            "Doe, J., Roe, R. (2020). Dirt and Life. Soil Journal, 4(2), 10-20. \
             https://doi.org/10.1000/xyz"
        );
        assert_eq!(
            Work::new("Untitled Notes").format(ReferenceStyle::Apa),
            "Anonymous (n.d.). Untitled Notes."
        );
    }

    #[test]
    fn test_mla() {
        assert_eq!(
            article().format(ReferenceStyle::Mla),
            "Doe, J., Roe, R. \"Dirt and Life.\" Soil Journal, vol. 4, no. 2, 2020, pp. 10-20."
        );
        assert_eq!(
            Work::new("Why Soil?").with_authors(["Smith"]).with_year(1999).format(ReferenceStyle::Mla),
            "Smith. \"Why Soil?\" 1999."
        );
    }

    #[test]
    fn test_chicago() {
        assert_eq!(
            article().format(ReferenceStyle::Chicago),
            "Doe, J., Roe, R. \"Dirt and Life.\" Soil Journal 4, no. 2 (2020): 10-20."
        );
        assert_eq!(
            Work::new("Roots").with_authors(["Smith"]).format(ReferenceStyle::Chicago),
            "Smith. \"Roots.\" (n.d.)."
        );
    }

    #[test]
    fn test_ieee() {
        assert_eq!(
            article().format(ReferenceStyle::Ieee),
            "Doe, J., Roe, R., \"Dirt and Life,\" in Soil Journal, vol. 4, no. 2, pp. 10-20, 2020. \
             doi: 10.1000/xyz"
        );

        let reference = article().to_reference(ReferenceStyle::Ieee, 3);
        assert_eq!(reference.label.as_deref(), Some("3"));
        assert!(reference.to_string().starts_with("[3] Doe, J., Roe, R., \"Dirt and Life,\""));

        let reference = article().to_reference(ReferenceStyle::Apa, 3);
        assert_eq!(reference.label, None);
    }

    #[test]
    fn test_issue_needs_volume() {
        let work = Work::new("T").with_venue("V").with_issue("9").with_year(2001);
        assert_eq!(work.format(ReferenceStyle::Apa), "Anonymous (2001). T. V.");
    }

    #[test]
    fn test_same_work() {
        let a = article();
        let b = Work::new("Another title").with_doi("10.1000/XYZ");
        assert!(a.is_same_work(&b));

        let c = Work::new("dirt and life").with_year(2020);
        let d = Work::new("Dirt and Life").with_year(2020);
        assert!(c.is_same_work(&d));
        assert!(!c.is_same_work(&d.clone().with_year(2021)));
    }

    #[test]
    fn test_blank_fields_are_dropped() {
        let work = Work::new("  T  ")
            .with_authors(["", " A "])
            .with_venue(" ")
            .with_doi("https://doi.org/");
        assert_eq!(work.title, "T");
        assert_eq!(work.authors, vec!["A"]);
        assert_eq!(work.venue, None);
        assert_eq!(work.doi, None);
    }
}
