use crate::owner::domain::entities::OwnerCredential;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OwnerGateError {
    #[error("Incorrect password")]
    IncorrectPassword,
}

/// Advisory password gate in front of the owner panel. Passing it only opens
/// the panel UI flow; the content store verifies the same password again on
/// every privileged call, so this check is not a security boundary.
#[derive(Debug, Clone)]
pub struct OwnerGate {
    expected: String,
}

impl OwnerGate {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    pub fn unlock(&self, candidate: &str) -> Result<OwnerCredential, OwnerGateError> {
        if candidate == self.expected {
            Ok(OwnerCredential::new(candidate))
        } else {
            Err(OwnerGateError::IncorrectPassword)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_password_yields_a_credential() {
        let gate = OwnerGate::new("open-sesame");
        let credential = gate.unlock("open-sesame").unwrap();
        assert_eq!(credential.reveal(), "open-sesame");
    }

    #[test]
    fn wrong_password_is_rejected() {
        let gate = OwnerGate::new("open-sesame");
        assert_eq!(
            gate.unlock("open-sesame "),
            Err(OwnerGateError::IncorrectPassword)
        );
    }
}
