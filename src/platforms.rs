//! Ordered table of share targets and their share-intent link formats.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::share::{share_message, ShareMessage};

/// Escapes everything a browser's `encodeURIComponent` escapes.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A social platform the message can be pushed to.
#[derive(Debug, Clone, Copy)]
pub struct PlatformDescriptor {
    /// Stable identifier, also rendered as `data-platform`.
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    build_url: fn(&ShareMessage) -> String,
}

impl PlatformDescriptor {
    /// Share-intent link for the process-wide message.
    pub fn share_url(&self) -> String {
        self.share_url_for(share_message())
    }

    pub fn share_url_for(&self, message: &ShareMessage) -> String {
        (self.build_url)(message)
    }
}

impl PartialEq for PlatformDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PlatformDescriptor {}

/// Render order of the share rows.
pub static PLATFORMS: [PlatformDescriptor; 3] = [
    PlatformDescriptor {
        id: "x",
        label: "X (Twitter)",
        icon: "𝕏",
        build_url: |message| {
            format!(
                "https://twitter.com/intent/tweet?text={}",
                encode_component(message.as_str())
            )
        },
    },
    PlatformDescriptor {
        id: "whatsapp",
        label: "WhatsApp",
        icon: "💬",
        build_url: |message| format!("https://wa.me/?text={}", encode_component(message.as_str())),
    },
    PlatformDescriptor {
        id: "telegram",
        label: "Telegram",
        icon: "✈",
        build_url: |message| {
            format!(
                "https://t.me/share/url?url={}&text={}",
                encode_component(message.repo_url()),
                encode_component(message.as_str())
            )
        },
    },
];

pub fn find(id: &str) -> Option<&'static PlatformDescriptor> {
    PLATFORMS.iter().find(|platform| platform.id == id)
}

/// Percent-encodes a value for use inside a URL query component.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}
