//! Rendering options and configuration.

use super::CleanupOptions;

/// Options for rendering paper content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Maximum heading level (1-6)
    pub max_heading_level: u8,

    /// Heading level used for section titles
    pub section_heading_level: u8,

    /// Include YAML frontmatter with metadata
    pub include_frontmatter: bool,

    /// Render the reference list when present
    pub include_references: bool,

    /// Heading printed above the abstract
    pub abstract_heading: String,

    /// Heading printed above the reference list
    pub references_heading: String,

    /// Width for wrapping long lines in text output (0 = no wrap)
    pub line_width: u32,

    /// Text cleanup options
    pub cleanup: Option<CleanupOptions>,

    /// Collect rendering statistics
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(1, 6);
        self
    }

    /// Set the heading level for section titles.
    pub fn with_section_heading(mut self, level: u8) -> Self {
        self.section_heading_level = level.clamp(1, 6);
        self
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Enable or disable the reference list.
    pub fn with_references(mut self, include: bool) -> Self {
        self.include_references = include;
        self
    }

    /// Set the abstract heading text.
    pub fn with_abstract_heading(mut self, heading: impl Into<String>) -> Self {
        self.abstract_heading = heading.into();
        self
    }

    /// Set the references heading text.
    pub fn with_references_heading(mut self, heading: impl Into<String>) -> Self {
        self.references_heading = heading.into();
        self
    }

    /// Set line width for wrapping.
    pub fn with_line_width(mut self, width: u32) -> Self {
        self.line_width = width;
        self
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup_preset(mut self, preset: super::CleanupPreset) -> Self {
        self.cleanup = Some(CleanupOptions::from_preset(preset));
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Effective heading level for section titles.
    pub fn section_level(&self) -> u8 {
        self.section_heading_level.min(self.max_heading_level).max(1)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_heading_level: 6,
            section_heading_level: 2,
            include_frontmatter: false,
            include_references: true,
            abstract_heading: "Abstract".to_string(),
            references_heading: "References".to_string(),
            line_width: 0,
            cleanup: None,
            collect_stats: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_frontmatter(true)
            .with_max_heading(3)
            .with_section_heading(9)
            .with_line_width(72);

        assert!(options.include_frontmatter);
        assert_eq!(options.max_heading_level, 3);
        assert_eq!(options.section_heading_level, 6);
        assert_eq!(options.section_level(), 3);
        assert_eq!(options.line_width, 72);
    }

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.section_level(), 2);
        assert!(options.include_references);
        assert!(options.cleanup.is_none());
    }
}
