/// Errors reported while configuring or generating a query.
#[derive(Debug, PartialEq, Eq)]
pub enum QueryError {
    MissingCoverage,
    InvalidArgument(String),
    InvalidOperation(String),
    InvalidReturnType(String),
    IncompleteConfiguration,
}

impl From<QueryError> for String {
    fn from(error: QueryError) -> Self {
        error.to_string()
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::MissingCoverage => {
                write!(
                    f,
                    "At least one coverage must be added before generating the query"
                )
            }
            QueryError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            QueryError::InvalidOperation(name) => write!(f, "Invalid operation: {}", name),
            QueryError::InvalidReturnType(name) => {
                write!(f, "Invalid return type: {}. Valid types are: CSV, PNG, JPEG", name)
            }
            QueryError::IncompleteConfiguration => {
                write!(
                    f,
                    "Insufficient parameters to generate a valid query: check operation, return type, and switch"
                )
            }
        }
    }
}

impl std::error::Error for QueryError {}
