use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::ForeignKeyViolation => {
                DomainError::NotFound("referenced record not found".into())
            }
            ErrorKind::UniqueViolation => {
                DomainError::Validation("unique constraint violated".into())
            }
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                DomainError::Validation(db_err.message().to_string())
            }
            _ => DomainError::Persistence(db_err.message().to_string()),
        },
        _ => DomainError::Persistence(err.to_string()),
    }
}
