/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.persistence")]
    Persistence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_code_style_messages() {
        assert_eq!(
            RepositoryError::Duplicated.to_string(),
            "repository.duplicated"
        );
        assert_eq!(
            RepositoryError::Persistence.to_string(),
            "repository.persistence"
        );
    }
}
