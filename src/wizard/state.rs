//! Wizard state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Paper, Work};

use super::{assemble, PaperBackend, PaperRequest};

/// Maximum number of title candidates kept from one generation round.
pub const MAX_TITLE_CANDIDATES: usize = 5;

/// Position of the wizard in the generation flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardState {
    /// Request accepted, no titles yet
    CollectingInput,
    /// Title candidates are available for selection
    TitlesGenerated {
        /// Candidate titles, at most [`MAX_TITLE_CANDIDATES`]
        candidates: Vec<String>,
    },
    /// A title has been chosen; no section started
    TitleConfirmed,
    /// Section `index` is being generated or revised
    GeneratingSection {
        /// Index into the section order
        index: usize,
        /// Latest generated content, if any
        draft: Option<String>,
    },
    /// Section `index` has been accepted
    SectionConfirmed {
        /// Index into the section order
        index: usize,
    },
    /// Every section has been confirmed
    Complete,
}

impl WizardState {
    /// Short human-readable name of the state.
    pub fn name(&self) -> &'static str {
        match self {
            WizardState::CollectingInput => "collecting input",
            WizardState::TitlesGenerated { .. } => "choosing a title",
            WizardState::TitleConfirmed => "title confirmed",
            WizardState::GeneratingSection { .. } => "generating a section",
            WizardState::SectionConfirmed { .. } => "section confirmed",
            WizardState::Complete => "complete",
        }
    }
}

/// One revision of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRecord {
    /// Section that was revised
    pub section: String,
    /// When the revision was applied
    pub timestamp: DateTime<Utc>,
    /// Instructions given for the revision
    pub instructions: String,
    /// Content before the revision
    pub previous_content: String,
    /// Content after the revision
    pub new_content: String,
}

/// Paper-generation wizard.
#[derive(Debug, Clone)]
pub struct Wizard {
    request: PaperRequest,
    sections: Vec<String>,
    state: WizardState,
    title: Option<String>,
    confirmed: Vec<(String, String)>,
    history: Vec<EditRecord>,
    works: Vec<Work>,
}

impl Wizard {
    /// Start a wizard for a validated request.
    pub fn new(request: PaperRequest) -> Result<Self> {
        request.validate()?;
        let sections = request.section_order();
        log::debug!(
            "Starting wizard for {:?} with {} section(s)",
            request.topic,
            sections.len()
        );

        Ok(Self {
            request,
            sections,
            state: WizardState::CollectingInput,
            title: None,
            confirmed: Vec::new(),
            history: Vec::new(),
            works: Vec::new(),
        })
    }

    /// The request driving this wizard.
    pub fn request(&self) -> &PaperRequest {
        &self.request
    }

    /// Current state.
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Confirmed title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Section names in generation order.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Confirmed sections as `(name, content)` pairs.
    pub fn confirmed_sections(&self) -> &[(String, String)] {
        &self.confirmed
    }

    /// All revisions applied so far.
    pub fn edit_history(&self) -> &[EditRecord] {
        &self.history
    }

    /// Works cited so far, in the order they were first added.
    pub fn works(&self) -> &[Work] {
        &self.works
    }

    /// Title candidates when a title is being chosen.
    pub fn title_candidates(&self) -> &[String] {
        match self.state {
            WizardState::TitlesGenerated { ref candidates } => candidates.as_slice(),
            _ => &[],
        }
    }

    /// Name of the section being generated, if any.
    pub fn current_section(&self) -> Option<&str> {
        match self.state {
            WizardState::GeneratingSection { index, .. } => {
                self.sections.get(index).map(String::as_str)
            }
            _ => None,
        }
    }

    /// Draft of the section being generated, if any.
    pub fn current_draft(&self) -> Option<&str> {
        match self.state {
            WizardState::GeneratingSection { ref draft, .. } => draft.as_deref(),
            _ => None,
        }
    }

    /// Check whether every section has been confirmed.
    pub fn is_complete(&self) -> bool {
        self.state == WizardState::Complete
    }

    fn reject(&self, action: &'static str) -> Error {
        Error::InvalidTransition {
            state: self.state.name(),
            action,
        }
    }

    /// Record title candidates. May be repeated to regenerate them.
    pub fn titles_generated(&mut self, titles: Vec<String>) -> Result<()> {
        match self.state {
            WizardState::CollectingInput | WizardState::TitlesGenerated { .. } => {}
            _ => return Err(self.reject("accept title candidates")),
        }

        let mut candidates: Vec<String> = Vec::new();
        for title in titles {
            let title = title.trim();
            if title.is_empty() || candidates.iter().any(|c| c == title) {
                continue;
            }
            candidates.push(title.to_string());
        }

        if candidates.is_empty() {
            return Err(Error::NoTitles);
        }
        if candidates.len() > MAX_TITLE_CANDIDATES {
            log::debug!(
                "Keeping {} of {} title candidates",
                MAX_TITLE_CANDIDATES,
                candidates.len()
            );
            candidates.truncate(MAX_TITLE_CANDIDATES);
        }

        self.state = WizardState::TitlesGenerated { candidates };
        Ok(())
    }

    /// Choose one of the generated title candidates.
    pub fn confirm_title(&mut self, index: usize) -> Result<()> {
        let WizardState::TitlesGenerated { ref candidates } = self.state else {
            return Err(self.reject("confirm a title"));
        };
        let Some(title) = candidates.get(index) else {
            return Err(Error::TitleOutOfRange(index, candidates.len()));
        };

        self.title = Some(title.clone());
        self.state = WizardState::TitleConfirmed;
        Ok(())
    }

    /// Use a title typed by the user instead of a generated one.
    pub fn confirm_custom_title(&mut self, title: impl Into<String>) -> Result<()> {
        match self.state {
            WizardState::CollectingInput | WizardState::TitlesGenerated { .. } => {}
            _ => return Err(self.reject("confirm a title")),
        }

        let title = title.into();
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::InvalidRequest("title must not be empty".to_string()));
        }

        self.title = Some(title.to_string());
        self.state = WizardState::TitleConfirmed;
        Ok(())
    }

    /// Advance to the next section.
    ///
    /// Returns the name of the section to generate, or `None` once every
    /// section is confirmed (the wizard is then complete).
    pub fn next_section(&mut self) -> Result<Option<String>> {
        let next = match self.state {
            WizardState::TitleConfirmed => 0,
            WizardState::SectionConfirmed { index } => index + 1,
            WizardState::Complete => return Ok(None),
            _ => return Err(self.reject("start the next section")),
        };

        match self.sections.get(next) {
            Some(name) => {
                let name = name.clone();
                self.state = WizardState::GeneratingSection {
                    index: next,
                    draft: None,
                };
                Ok(Some(name))
            }
            None => {
                log::debug!("All {} section(s) confirmed", self.sections.len());
                self.state = WizardState::Complete;
                Ok(None)
            }
        }
    }

    /// Store generated content for the current section, replacing any draft.
    pub fn section_generated(&mut self, content: impl Into<String>) -> Result<()> {
        let WizardState::GeneratingSection { ref mut draft, .. } = self.state else {
            return Err(self.reject("accept section content"));
        };
        *draft = Some(content.into());
        Ok(())
    }

    /// Replace the current draft with a revision and record it.
    pub fn edit_section(
        &mut self,
        instructions: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<()> {
        let WizardState::GeneratingSection { index, ref mut draft } = self.state else {
            return Err(self.reject("edit a section"));
        };
        let name = self.sections[index].clone();
        let Some(previous) = draft.take() else {
            return Err(Error::EmptySection(name));
        };

        let content = content.into();
        *draft = Some(content.clone());
        self.history.push(EditRecord {
            section: name,
            timestamp: Utc::now(),
            instructions: instructions.into(),
            previous_content: previous,
            new_content: content,
        });
        Ok(())
    }

    /// Accept the current draft.
    pub fn confirm_section(&mut self) -> Result<()> {
        let WizardState::GeneratingSection { index, ref draft } = self.state else {
            return Err(self.reject("confirm a section"));
        };
        let name = self.sections[index].clone();
        let content = match draft {
            Some(content) if !content.trim().is_empty() => content.clone(),
            _ => return Err(Error::EmptySection(name)),
        };

        log::debug!("Confirmed section {:?}", name);
        self.confirmed.push((name, content));
        self.state = WizardState::SectionConfirmed { index };
        Ok(())
    }

    /// Record works cited by a section. Works already cited are skipped.
    ///
    /// Returns how many new works were added.
    pub fn add_works(&mut self, works: impl IntoIterator<Item = Work>) -> usize {
        let before = self.works.len();
        for work in works {
            if self.works.iter().any(|w| w.is_same_work(&work)) {
                log::debug!("Work already cited: {}", work.title);
                continue;
            }
            self.works.push(work);
        }
        self.works.len() - before
    }

    /// Ask the backend for title candidates.
    pub fn request_titles(&mut self, backend: &dyn PaperBackend) -> Result<&[String]> {
        match self.state {
            WizardState::CollectingInput | WizardState::TitlesGenerated { .. } => {}
            _ => return Err(self.reject("accept title candidates")),
        }
        log::debug!("Requesting titles from {}", backend.name());
        let titles = backend.generate_titles(&self.request)?;
        self.titles_generated(titles)?;
        Ok(self.title_candidates())
    }

    /// Ask the backend to (re)generate the current section.
    pub fn request_section(&mut self, backend: &dyn PaperBackend) -> Result<&str> {
        let Some(section) = self.current_section().map(str::to_string) else {
            return Err(self.reject("generate a section"));
        };
        log::debug!("Requesting section {:?} from {}", section, backend.name());

        let works = backend.find_works(&self.request, &section)?;
        let title = self.title.as_deref().unwrap_or(&self.request.topic);
        let content =
            backend.generate_section(&self.request, title, &section, &self.confirmed)?;

        let added = self.add_works(works);
        if added > 0 {
            log::debug!("Section {:?} cites {} new work(s)", section, added);
        }
        self.section_generated(content)?;
        Ok(self.current_draft().unwrap_or_default())
    }

    /// Advance to the next section and ask the backend to generate it.
    ///
    /// Returns the section name, or `None` when the wizard is complete.
    pub fn request_next_section(&mut self, backend: &dyn PaperBackend) -> Result<Option<String>> {
        let Some(section) = self.next_section()? else {
            return Ok(None);
        };
        self.request_section(backend)?;
        Ok(Some(section))
    }

    /// Ask the backend to revise the current draft.
    pub fn request_edit(
        &mut self,
        backend: &dyn PaperBackend,
        instructions: &str,
    ) -> Result<&str> {
        let (Some(section), Some(current)) = (self.current_section(), self.current_draft()) else {
            return match self.current_section() {
                Some(name) => Err(Error::EmptySection(name.to_string())),
                None => Err(self.reject("edit a section")),
            };
        };

        let revised = backend.edit_section(&self.request, section, current, instructions)?;
        self.edit_section(instructions, revised)?;
        Ok(self.current_draft().unwrap_or_default())
    }

    /// Assemble the finished paper.
    ///
    /// `raw_references` is merged after any references produced by a
    /// `references` section, one entry per non-empty line. Cited works follow,
    /// formatted in the request's reference style.
    pub fn into_paper(self, author: Option<&str>, raw_references: &str) -> Result<Paper> {
        if !self.is_complete() {
            return Err(self.reject("assemble the paper"));
        }
        Ok(assemble::assemble(
            self.title,
            author,
            &self.confirmed,
            raw_references,
            &self.works,
            self.request.reference_style,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard() -> Wizard {
        let request = PaperRequest::new("Topic").with_required_sections(["Intro", "Results"]);
        Wizard::new(request).unwrap()
    }

    fn titled() -> Wizard {
        let mut w = wizard();
        w.titles_generated(vec!["A".into(), "B".into()]).unwrap();
        w.confirm_title(1).unwrap();
        w
    }

    #[test]
    fn test_new_rejects_invalid_request() {
        assert!(Wizard::new(PaperRequest::new("Topic")).is_err());
    }

    #[test]
    fn test_titles_are_cleaned_and_capped() {
        let mut w = wizard();
        let titles = vec![" One ", "", "One", "Two", "Three", "Four", "Five", "Six"]
            .into_iter()
            .map(String::from)
            .collect();
        w.titles_generated(titles).unwrap();
        assert_eq!(w.title_candidates(), &["One", "Two", "Three", "Four", "Five"]);
    }

    #[test]
    fn test_no_titles_keeps_state() {
        let mut w = wizard();
        assert!(matches!(
            w.titles_generated(vec!["  ".into()]),
            Err(Error::NoTitles)
        ));
        assert_eq!(w.state(), &WizardState::CollectingInput);
    }

    #[test]
    fn test_confirm_title_out_of_range() {
        let mut w = wizard();
        w.titles_generated(vec!["Only".into()]).unwrap();
        assert!(matches!(
            w.confirm_title(3),
            Err(Error::TitleOutOfRange(3, 1))
        ));
    }

    #[test]
    fn test_full_flow() {
        let mut w = titled();
        assert_eq!(w.title(), Some("B"));

        assert_eq!(w.next_section().unwrap().as_deref(), Some("Intro"));
        w.section_generated("Intro text.").unwrap();
        w.confirm_section().unwrap();

        assert_eq!(w.next_section().unwrap().as_deref(), Some("Results"));
        w.section_generated("Draft").unwrap();
        w.edit_section("expand", "Results text.").unwrap();
        w.confirm_section().unwrap();

        assert_eq!(w.next_section().unwrap(), None);
        assert!(w.is_complete());
        assert_eq!(w.next_section().unwrap(), None);

        assert_eq!(w.edit_history().len(), 1);
        assert_eq!(w.edit_history()[0].previous_content, "Draft");
        assert_eq!(w.confirmed_sections()[1].1, "Results text.");
    }

    #[test]
    fn test_invalid_transitions_leave_state_unchanged() {
        let mut w = wizard();
        let err = w.confirm_section().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTransition {
                state: "collecting input",
                action: "confirm a section"
            }
        ));
        assert_eq!(w.state(), &WizardState::CollectingInput);

        assert!(w.next_section().is_err());
        assert!(w.section_generated("x").is_err());
        assert_eq!(w.state(), &WizardState::CollectingInput);
    }

    #[test]
    fn test_confirm_requires_content() {
        let mut w = titled();
        w.next_section().unwrap();
        assert!(matches!(w.confirm_section(), Err(Error::EmptySection(_))));
        w.section_generated("   ").unwrap();
        assert!(matches!(w.confirm_section(), Err(Error::EmptySection(_))));
        assert!(matches!(w.state(), WizardState::GeneratingSection { index: 0, .. }));
    }

    #[test]
    fn test_edit_without_draft() {
        let mut w = titled();
        w.next_section().unwrap();
        assert!(matches!(
            w.edit_section("x", "y"),
            Err(Error::EmptySection(_))
        ));
        assert_eq!(w.current_draft(), None);
    }

    #[test]
    fn test_into_paper_requires_complete() {
        let w = titled();
        assert!(w.into_paper(None, "").is_err());
    }

    #[test]
    fn test_add_works_skips_duplicates() {
        let mut w = wizard();
        let work = Work::new("Roots").with_year(2001);
        assert_eq!(w.add_works([work.clone(), work.clone()]), 1);
        assert_eq!(w.add_works([work, Work::new("Leaves")]), 1);
        assert_eq!(w.works().len(), 2);
    }

    #[test]
    fn test_custom_title() {
        let mut w = wizard();
        assert!(w.confirm_custom_title(" ").is_err());
        w.confirm_custom_title("My Own").unwrap();
        assert_eq!(w.title(), Some("My Own"));
        assert!(w.confirm_custom_title("Again").is_err());
    }
}
