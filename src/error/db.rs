use sea_orm::{DbErr, SqlErr};

/// Classifies store errors so write handlers can tell a constraint
/// violation apart from a connectivity failure.
pub trait DatabaseError {
    fn constraint_violation(&self) -> bool;
}

impl DatabaseError for DbErr {
    fn constraint_violation(&self) -> bool {
        matches!(
            self.sql_err(),
            Some(SqlErr::UniqueConstraintViolation(_))
                | Some(SqlErr::ForeignKeyConstraintViolation(_))
        )
    }
}
