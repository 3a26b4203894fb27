use crate::coverage::Coverage;
use crate::scalar::Scalar;

/// Binary operator admitted between two expressions.
///
/// `Eq` renders as `=`, the WCPS spelling for equality; every other operator
/// renders as itself.
#[derive(Debug, Clone)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl std::fmt::Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinOp::Add => write!(f, "+"),
            BinOp::Sub => write!(f, "-"),
            BinOp::Mul => write!(f, "*"),
            BinOp::Div => write!(f, "/"),
            BinOp::Lt => write!(f, "<"),
            BinOp::Le => write!(f, "<="),
            BinOp::Gt => write!(f, ">"),
            BinOp::Ge => write!(f, ">="),
            BinOp::Eq => write!(f, "="),
            BinOp::Ne => write!(f, "!="),
        }
    }
}

/// Expression tree over coverages and literals.
///
/// Every binary node serializes fully parenthesized as `(lhs op rhs)`, so the
/// generated text never relies on target-language precedence. Raw text enters
/// the tree as a string scalar and passes through verbatim, which is how
/// hand-written conditions reach [`Case`](crate::Case).
#[derive(Debug, Clone)]
pub enum Expr {
    Coverage(Coverage),
    Scalar(Scalar),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    // Operator constructors. Each consumes the receiver and returns a new
    // node; operands are never mutated.
    pub fn add(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinOp::Add, self, rhs.into())
    }

    pub fn sub(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinOp::Sub, self, rhs.into())
    }

    pub fn mul(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinOp::Mul, self, rhs.into())
    }

    pub fn div(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinOp::Div, self, rhs.into())
    }

    pub fn lt(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinOp::Lt, self, rhs.into())
    }

    pub fn le(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinOp::Le, self, rhs.into())
    }

    pub fn gt(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinOp::Gt, self, rhs.into())
    }

    pub fn ge(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinOp::Ge, self, rhs.into())
    }

    pub fn eq(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinOp::Eq, self, rhs.into())
    }

    pub fn ne(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinOp::Ne, self, rhs.into())
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Coverage(coverage) => write!(f, "{}", coverage),
            Expr::Scalar(scalar) => write!(f, "{}", scalar),
            Expr::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}

impl From<Coverage> for Expr {
    fn from(coverage: Coverage) -> Self {
        Expr::Coverage(coverage)
    }
}

impl From<&Coverage> for Expr {
    fn from(coverage: &Coverage) -> Self {
        Expr::Coverage(coverage.clone())
    }
}

impl From<Scalar> for Expr {
    fn from(scalar: Scalar) -> Self {
        Expr::Scalar(scalar)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::Scalar(value.into())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Scalar(value.into())
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Scalar(value.into())
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Expr::Scalar(value.into())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Expr::Scalar(value.into())
    }
}
