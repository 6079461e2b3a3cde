use async_trait::async_trait;
use pacbar::prelude::*;

/// Mock UpdateSource fed with raw listing lines, or configured to fail
pub struct MockUpdateSource {
    name: String,
    origin: Origin,
    lines: Vec<String>,
    fail: bool,
}

impl MockUpdateSource {
    pub fn new(name: &str, origin: Origin) -> Self {
        Self {
            name: name.to_string(),
            origin,
            lines: Vec::new(),
            fail: false,
        }
    }

    /// Raw listing lines the source will "emit"; parsed like real output
    pub fn with_lines(mut self, lines: &[&str]) -> Self {
        self.lines = lines.iter().map(|l| l.to_string()).collect();
        self
    }

    /// Makes every fetch return an unexpected-failure error
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl UpdateSource for MockUpdateSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn origin(&self) -> Origin {
        self.origin
    }

    async fn fetch_updates(&self) -> std::result::Result<Vec<PackageUpdate>, SourceError> {
        if self.fail {
            return Err(SourceError::CommandFailed {
                command: format!("mock-{}", self.name),
                status: "exit status: 2".to_string(),
                stderr: "mock failure".to_string(),
            });
        }

        Ok(self
            .lines
            .iter()
            .filter_map(|line| UpdateListingParser::parse_line(line, self.origin))
            .collect())
    }
}
