use crate::update_check::domain::{Origin, PackageUpdate};

/// UpdateListingParser for the textual output of update-listing commands.
///
/// Both `pacman -Qu` and `yay -Qua` emit one update per line in the shape
/// `name current -> new`. The grammar accepted here is deliberately narrow:
/// a line is an update iff it has at least four whitespace-separated tokens
/// and the third token is the literal `->`. Trailing tokens (e.g. pacman's
/// `[ignored]` annotations) are ignored. Anything else is skipped, never an
/// error - partial garbage in the listing must not abort a reporting cycle.
pub struct UpdateListingParser;

impl UpdateListingParser {
    /// Parses a full command output into update records
    ///
    /// # Arguments
    /// * `output` - Captured stdout of an update-listing command
    /// * `origin` - The source the listing came from
    ///
    /// # Returns
    /// Update records in listing order; blank and malformed lines are skipped
    pub fn parse_listing(output: &str, origin: Origin) -> Vec<PackageUpdate> {
        output
            .lines()
            .filter_map(|line| Self::parse_line(line, origin))
            .collect()
    }

    /// Parses a single listing line, returning None for anything that does
    /// not match the `name current -> new` shape
    pub fn parse_line(line: &str, origin: Origin) -> Option<PackageUpdate> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 4 || tokens[2] != "->" {
            return None;
        }

        PackageUpdate::new(
            tokens[0].to_string(),
            tokens[1].to_string(),
            tokens[3].to_string(),
            origin,
        )
        .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_well_formed() {
        let update =
            UpdateListingParser::parse_line("firefox 121.0-1 -> 122.0-1", Origin::Official)
                .unwrap();
        assert_eq!(update.name(), "firefox");
        assert_eq!(update.current_version(), "121.0-1");
        assert_eq!(update.new_version(), "122.0-1");
        assert_eq!(update.origin(), Origin::Official);
    }

    #[test]
    fn test_parse_line_extra_trailing_tokens_ignored() {
        let update =
            UpdateListingParser::parse_line("linux 6.6.1 -> 6.6.2 [ignored]", Origin::Official)
                .unwrap();
        assert_eq!(update.name(), "linux");
        assert_eq!(update.new_version(), "6.6.2");
    }

    #[test]
    fn test_parse_line_extra_internal_whitespace() {
        let update =
            UpdateListingParser::parse_line("  bat   0.24.0-1   ->   0.24.0-2  ", Origin::Aur)
                .unwrap();
        assert_eq!(update.name(), "bat");
        assert_eq!(update.current_version(), "0.24.0-1");
        assert_eq!(update.new_version(), "0.24.0-2");
    }

    #[test]
    fn test_parse_line_too_few_tokens() {
        assert!(UpdateListingParser::parse_line("firefox 121.0-1 ->", Origin::Official).is_none());
        assert!(UpdateListingParser::parse_line("firefox 121.0-1", Origin::Official).is_none());
        assert!(UpdateListingParser::parse_line("firefox", Origin::Official).is_none());
    }

    #[test]
    fn test_parse_line_wrong_separator() {
        assert!(
            UpdateListingParser::parse_line("firefox 121.0-1 => 122.0-1", Origin::Official)
                .is_none()
        );
        assert!(
            UpdateListingParser::parse_line("firefox 121.0-1 - 122.0-1", Origin::Official)
                .is_none()
        );
    }

    #[test]
    fn test_parse_line_blank() {
        assert!(UpdateListingParser::parse_line("", Origin::Official).is_none());
        assert!(UpdateListingParser::parse_line("   ", Origin::Official).is_none());
    }

    #[test]
    fn test_parse_listing_preserves_order_and_skips_garbage() {
        let output = "firefox 121.0-1 -> 122.0-1\n\
                      :: some helper banner\n\
                      \n\
                      linux 6.6.1-1 -> 6.6.2-1\n\
                      warning: database lock\n";
        let updates = UpdateListingParser::parse_listing(output, Origin::Official);
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].name(), "firefox");
        assert_eq!(updates[1].name(), "linux");
    }

    #[test]
    fn test_parse_listing_empty_output() {
        assert!(UpdateListingParser::parse_listing("", Origin::Aur).is_empty());
        assert!(UpdateListingParser::parse_listing("\n\n", Origin::Aur).is_empty());
    }
}
