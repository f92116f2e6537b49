//! Interface to the remote paper-generation service.

use crate::error::Result;
use crate::model::Work;

use super::PaperRequest;

/// A paper-generation service.
///
/// Implementations wrap whatever transport reaches the real service and
/// report failures as [`crate::Error::Backend`].
pub trait PaperBackend: Send + Sync {
    /// Propose candidate titles for the request.
    fn generate_titles(&self, request: &PaperRequest) -> Result<Vec<String>>;

    /// Generate the content of one section.
    ///
    /// `previous` holds the already confirmed sections as `(name, content)`
    /// pairs in generation order.
    fn generate_section(
        &self,
        request: &PaperRequest,
        title: &str,
        section: &str,
        previous: &[(String, String)],
    ) -> Result<String>;

    /// Revise a section according to free-form instructions.
    fn edit_section(
        &self,
        request: &PaperRequest,
        section: &str,
        current: &str,
        instructions: &str,
    ) -> Result<String>;

    /// Find works to cite in a section.
    ///
    /// Called before each section is generated. The default cites nothing.
    fn find_works(&self, _request: &PaperRequest, _section: &str) -> Result<Vec<Work>> {
        Ok(Vec::new())
    }

    /// Name of the backend, for logging.
    fn name(&self) -> &str {
        "backend"
    }
}
