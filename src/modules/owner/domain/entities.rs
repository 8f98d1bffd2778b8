use crate::content::domain::draft::ContentDraft;

/// Session-scoped owner credential, handed down as an argument to every
/// privileged call site. Never stored in a global. The store verifies the
/// underlying password independently on each call; holding one of these only
/// means the advisory gate check passed.
#[derive(Clone, PartialEq, Eq)]
pub struct OwnerCredential(String);

impl OwnerCredential {
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    /// The raw password for forwarding to the store.
    pub fn reveal(&self) -> &str {
        &self.0
    }
}

// Keep the password out of logs and panic messages.
impl std::fmt::Debug for OwnerCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("OwnerCredential(****)")
    }
}

/// One open owner-panel session: the credential plus this session's draft.
/// A session corresponds to one browser tab; two sessions editing at once
/// will overwrite each other at the document level, last write wins.
#[derive(Debug, Clone)]
pub struct PanelSession {
    pub credential: OwnerCredential,
    pub draft: ContentDraft,
}

impl PanelSession {
    pub fn new(credential: OwnerCredential) -> Self {
        Self {
            credential,
            draft: ContentDraft::new(),
        }
    }
}
