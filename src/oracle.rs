//! Collaborator contract for the generative oracle service.
//!
//! The real service is an external text-generation call and is out of
//! scope here; this module pins its data contract (request context,
//! structured response, opaque failure) and provides the static fallback
//! the caller degrades to when the service is unavailable. Nothing in
//! this module touches the conversion arithmetic.

use thiserror::Error;

/// Opaque oracle failure. The caller maps it to a user-facing
/// "service unavailable" message; retry policy belongs to the service.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The service could not be reached or returned an unusable response.
    #[error("oracle service unavailable")]
    Unavailable,
}

/// Structured context for one oracle consultation.
#[derive(Debug, Clone)]
pub struct OracleRequest {
    /// Pre-composed moon position line.
    pub moon_context: String,
    /// Pre-composed galactic signature line.
    pub kin_context: String,
    /// Free-text location name, if configured.
    pub location: Option<String>,
    /// Free-text user intention, if given.
    pub intention: Option<String>,
}

impl OracleRequest {
    /// Composes the full prompt text sent to the service.
    pub fn prompt(&self) -> String {
        let mut prompt = format!(
            "Today: {}\nSignature: {}\n",
            self.moon_context, self.kin_context
        );
        if let Some(location) = &self.location {
            prompt.push_str(&format!("Location: {location}\n"));
        }
        if let Some(intention) = &self.intention {
            prompt.push_str(&format!("Intention: {intention}\n"));
        }
        prompt
    }
}

/// Structured oracle response: three fixed string-valued fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleReading {
    /// Body/earth channel.
    pub biomass: String,
    /// Mind/spirit channel.
    pub noosphere: String,
    /// Archetype channel.
    pub telepathic_index: String,
}

/// A single-shot oracle consultation.
///
/// One request per user-triggered action; callers must not issue a second
/// request while one is outstanding.
pub trait Oracle {
    /// Consults the oracle with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::Unavailable`] on any service failure.
    fn consult(&self, request: &OracleRequest) -> Result<OracleReading, OracleError>;
}

/// Offline fallback oracle: always succeeds with fixed text.
pub struct StaticOracle;

impl Oracle for StaticOracle {
    fn consult(&self, request: &OracleRequest) -> Result<OracleReading, OracleError> {
        let place = request.location.as_deref().unwrap_or("where you stand");
        Ok(OracleReading {
            biomass: format!("The ground holds steady at {place}; move with it."),
            noosphere: "The day's frequency is already within you; listen before you speak."
                .to_string(),
            telepathic_index: "Walk as the signature you were given.".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> OracleRequest {
        OracleRequest {
            moon_context: "Moon 1 (Magnetic Bat Moon), day 1 of 28, Dali (Target)".to_string(),
            kin_context: "Kin 19: Blue Rhythmic Storm".to_string(),
            location: Some("Palenque".to_string()),
            intention: Some("clarity".to_string()),
        }
    }

    #[test]
    fn prompt_includes_all_context() {
        let prompt = request().prompt();
        assert!(prompt.contains("Magnetic Bat Moon"));
        assert!(prompt.contains("Kin 19"));
        assert!(prompt.contains("Location: Palenque"));
        assert!(prompt.contains("Intention: clarity"));
    }

    #[test]
    fn prompt_omits_absent_fields() {
        let mut req = request();
        req.location = None;
        req.intention = None;
        let prompt = req.prompt();
        assert!(!prompt.contains("Location:"));
        assert!(!prompt.contains("Intention:"));
    }

    #[test]
    fn static_oracle_always_answers() {
        let reading = StaticOracle.consult(&request()).unwrap();
        assert!(reading.biomass.contains("Palenque"));
        assert!(!reading.noosphere.is_empty());
        assert!(!reading.telepathic_index.is_empty());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            OracleError::Unavailable.to_string(),
            "oracle service unavailable"
        );
    }
}
