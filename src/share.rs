//! The fixed promotional message offered for sharing.

use std::fmt;
use std::sync::OnceLock;

/// Repository the message points readers at.
pub const REPO_URL: &str = "https://github.com/ljbudgie/Burgessprinciple";

const MESSAGE_LEAD: &str =
    "I have deployed the Burgess Principle. My inbox is sovereign. The warrant is void. Get the code: ";
const MESSAGE_TAG: &str = " #Sovereignty";

/// Immutable share text plus the repository link embedded in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareMessage {
    text: String,
    repo_url: &'static str,
}

impl ShareMessage {
    pub fn compose(repo_url: &'static str) -> Self {
        Self {
            text: format!("{MESSAGE_LEAD}{repo_url}{MESSAGE_TAG}"),
            repo_url,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn repo_url(&self) -> &'static str {
        self.repo_url
    }
}

impl fmt::Display for ShareMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Process-wide message, composed on first use.
pub fn share_message() -> &'static ShareMessage {
    static MESSAGE: OnceLock<ShareMessage> = OnceLock::new();
    MESSAGE.get_or_init(|| ShareMessage::compose(REPO_URL))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn composes_message_around_repository_link() {
        assert_eq!(
            share_message().as_str(),
            "I have deployed the Burgess Principle. My inbox is sovereign. The warrant is void. \
             Get the code: https://github.com/ljbudgie/Burgessprinciple #Sovereignty"
        );
        assert_eq!(share_message().repo_url(), REPO_URL);
    }

    #[test]
    fn shared_instance_is_stable() {
        assert!(std::ptr::eq(share_message(), share_message()));
        assert_eq!(share_message().to_string(), share_message().as_str());
    }
}
