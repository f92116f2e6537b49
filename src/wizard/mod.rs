//! Paper-generation wizard.
//!
//! The wizard sequences calls to a remote paper-generation service as an
//! explicit state machine:
//!
//! ```text
//! CollectingInput -> TitlesGenerated -> TitleConfirmed
//!   -> GeneratingSection(n) -> SectionConfirmed(n) -> ... -> Complete
//! ```
//!
//! The service is abstracted by [`PaperBackend`]; the wizard never performs
//! network I/O itself. Results can also be fed in directly through the event
//! methods when the caller owns the remote calls.
//!
//! # Example
//!
//! ```
//! use paperfmt::wizard::{PaperRequest, Wizard};
//!
//! let request = PaperRequest::new("Soil microbes")
//!     .with_required_sections(["Introduction"]);
//! let mut wizard = Wizard::new(request)?;
//!
//! wizard.titles_generated(vec!["Microbes Underground".to_string()])?;
//! wizard.confirm_title(0)?;
//! assert_eq!(wizard.next_section()?, Some("Introduction".to_string()));
//! wizard.section_generated("Soil is alive.")?;
//! wizard.confirm_section()?;
//! assert_eq!(wizard.next_section()?, None);
//!
//! let paper = wizard.into_paper(None, "")?;
//! assert_eq!(paper.metadata.title.as_deref(), Some("Microbes Underground"));
//! # Ok::<(), paperfmt::Error>(())
//! ```

mod assemble;
mod backend;
mod request;
mod state;

pub use backend::PaperBackend;
pub use crate::model::{ReferenceStyle, Work};
pub use request::{PaperLength, PaperRequest, PaperType};
pub use state::{EditRecord, Wizard, WizardState, MAX_TITLE_CANDIDATES};
