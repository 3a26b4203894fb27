use std::str::FromStr;

use crate::color::Switch;
use crate::coverage::Coverage;
use crate::errors::QueryError;
use crate::expr::Expr;
use crate::scalar::Scalar;

/// Aggregate or encoding action requested for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationKind {
    Max,
    Min,
    Avg,
    Count,
    Encode,
    ColorCoding,
}

impl OperationKind {
    /// True for the operations that reduce a coverage to a single value.
    pub fn is_aggregation(&self) -> bool {
        matches!(
            self,
            OperationKind::Max | OperationKind::Min | OperationKind::Avg | OperationKind::Count
        )
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationKind::Max => write!(f, "max"),
            OperationKind::Min => write!(f, "min"),
            OperationKind::Avg => write!(f, "avg"),
            OperationKind::Count => write!(f, "count"),
            OperationKind::Encode => write!(f, "encode"),
            OperationKind::ColorCoding => write!(f, "colorcoding"),
        }
    }
}

impl FromStr for OperationKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "max" => Ok(OperationKind::Max),
            "min" => Ok(OperationKind::Min),
            "avg" => Ok(OperationKind::Avg),
            "count" => Ok(OperationKind::Count),
            "encode" => Ok(OperationKind::Encode),
            "colorcoding" => Ok(OperationKind::ColorCoding),
            _ => Err(QueryError::InvalidOperation(s.to_string())),
        }
    }
}

/// Encoding format for query output.
///
/// The enumeration is fixed; a format name outside it is rejected when
/// parsed, before it can reach query generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnFormat {
    Csv,
    Png,
    Jpeg,
}

impl ReturnFormat {
    /// The MIME type the server expects inside `encode(...)`.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ReturnFormat::Csv => "text/csv",
            ReturnFormat::Png => "image/png",
            ReturnFormat::Jpeg => "image/jpeg",
        }
    }
}

impl std::fmt::Display for ReturnFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReturnFormat::Csv => write!(f, "CSV"),
            ReturnFormat::Png => write!(f, "PNG"),
            ReturnFormat::Jpeg => write!(f, "JPEG"),
        }
    }
}

impl FromStr for ReturnFormat {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ReturnFormat::Csv),
            "png" => Ok(ReturnFormat::Png),
            "jpeg" => Ok(ReturnFormat::Jpeg),
            _ => Err(QueryError::InvalidReturnType(s.to_string())),
        }
    }
}

/// Builder for a complete WCPS query.
///
/// Configure coverages and the requested operation through the chained
/// setters, then call [`generate`](Query::generate) with a root expression.
/// Every setter overwrites its field; only [`with_coverage`](Query::with_coverage)
/// accumulates. Generation reads the configuration without consuming it, so
/// one builder can serve any number of root expressions.
#[derive(Debug, Default)]
pub struct Query {
    coverages: Vec<Coverage>,
    operation: Option<OperationKind>,
    return_format: Option<ReturnFormat>,
    return_value: Option<Scalar>,
    count_filter: Option<String>,
    switch: Option<Switch>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a coverage binding to the `for` clause.
    pub fn with_coverage(mut self, coverage: &Coverage) -> Self {
        self.coverages.push(coverage.clone());
        self
    }

    /// Set the operation to perform.
    pub fn with_operation(mut self, operation: OperationKind) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Set the return format, discarding any previously set raw return value.
    pub fn with_return(mut self, format: ReturnFormat) -> Self {
        self.return_format = Some(format);
        self.return_value = None;
        self
    }

    /// Set the return format together with a raw return value.
    ///
    /// The value is emitted verbatim by the plain-return template when no
    /// operation is configured.
    pub fn with_return_value(mut self, format: ReturnFormat, value: impl Into<Scalar>) -> Self {
        self.return_format = Some(format);
        self.return_value = Some(value.into());
        self
    }

    /// Set the filter text appended after the expression in a count query.
    pub fn with_count_filter(mut self, filter: &str) -> Self {
        self.count_filter = Some(filter.to_string());
        self
    }

    /// Set the switch block consumed by the colorcoding operation.
    pub fn with_switch(mut self, switch: Switch) -> Self {
        self.switch = Some(switch);
        self
    }

    /// Assemble the query text for `root`.
    ///
    /// Emits the `for` preamble over the added coverages in insertion order,
    /// then the return clause selected by the dispatch rules, first match
    /// wins:
    ///
    /// 1. count with a non-empty filter: `return count({root} {filter})`
    /// 2. encode with a format: `return encode({root}, "{mime}")`
    /// 3. colorcoding with a PNG/JPEG format and a switch:
    ///    `return encode(...{switch}...)`
    /// 4. any aggregate: `return {operation}({root})`
    /// 5. no operation, raw return value set: `return {value}`
    /// 6. no operation: `return ({root})`
    ///
    /// Fails with [`QueryError::MissingCoverage`] before dispatch if no
    /// coverage was added, and with [`QueryError::IncompleteConfiguration`]
    /// when no rule matches. On failure nothing is produced; a returned
    /// query is always complete.
    pub fn generate(&self, root: impl Into<Expr>) -> Result<String, QueryError> {
        if self.coverages.is_empty() {
            return Err(QueryError::MissingCoverage);
        }

        let bindings: Vec<String> = self
            .coverages
            .iter()
            .map(|coverage| format!("${} in ({})", coverage.variable(), coverage.name()))
            .collect();
        let preamble = format!("for {}\n", bindings.join(",\n"));

        let return_clause = self.return_clause(&root.into())?;
        Ok(format!("{}{}", preamble, return_clause))
    }

    fn return_clause(&self, root: &Expr) -> Result<String, QueryError> {
        // Empty filter text counts as no filter, so a bare count falls
        // through to the aggregate template.
        let count_filter = self
            .count_filter
            .as_deref()
            .filter(|condition| !condition.is_empty());

        match (
            &self.operation,
            count_filter,
            &self.return_format,
            &self.switch,
        ) {
            (Some(OperationKind::Count), Some(condition), _, _) => {
                Ok(format!("return count({} {})", root, condition))
            }
            (Some(OperationKind::Encode), _, Some(format), _) => Ok(format!(
                "return encode({}, \"{}\")",
                root,
                format.mime_type()
            )),
            (Some(OperationKind::ColorCoding), _, Some(format), Some(switch))
                if matches!(format, ReturnFormat::Png | ReturnFormat::Jpeg) =>
            {
                Ok(format!(
                    " return encode(\n    {}\n\t, \"{}\")",
                    switch,
                    format.mime_type()
                ))
            }
            (Some(operation), _, _, _) if operation.is_aggregation() => {
                Ok(format!("return {}({})", operation, root))
            }
            (None, _, _, _) => match &self.return_value {
                Some(value) => Ok(format!("return {}", value)),
                None => Ok(format!("return ({})", root)),
            },
            _ => Err(QueryError::IncompleteConfiguration),
        }
    }
}
