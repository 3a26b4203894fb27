use std::sync::atomic::{AtomicU64, Ordering};

use crate::axis::Axis;
use crate::errors::QueryError;
use crate::expr::Expr;

static GLOBAL_ALLOCATOR: VariableAllocator = VariableAllocator::new();

/// Hands out unique loop-variable names (`c1`, `c2`, ...).
///
/// `Coverage::new` draws from the process-wide instance, so every coverage
/// in a process gets a distinct variable regardless of which thread built
/// it. Construct a local allocator where deterministic numbering matters,
/// e.g. in test harnesses.
#[derive(Debug)]
pub struct VariableAllocator {
    next: AtomicU64,
}

impl VariableAllocator {
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// The process-wide allocator backing [`Coverage::new`].
    pub fn global() -> &'static VariableAllocator {
        &GLOBAL_ALLOCATOR
    }

    /// Return the next unused variable name.
    pub fn allocate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("c{}", n)
    }

    /// Restart numbering at `c1`.
    ///
    /// For test harnesses that own the allocator. Resetting an allocator
    /// that is still shared voids the uniqueness guarantee for coverages
    /// already handed out.
    pub fn reset(&self) {
        self.next.store(1, Ordering::Relaxed);
    }
}

impl Default for VariableAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// A named dataset binding, introduced into the query `for` clause under a
/// unique loop variable.
///
/// Cloning keeps the already-assigned variable: a clone denotes the same
/// `for` binding, it does not allocate a new one.
#[derive(Debug, Clone)]
pub struct Coverage {
    name: String,
    variable: String,
    subset: Option<Vec<Axis>>,
}

impl Coverage {
    /// Bind `name` under the next variable from the process-wide allocator.
    pub fn new(name: &str) -> Self {
        Self::with_allocator(name, VariableAllocator::global())
    }

    /// Bind `name` under the next variable from `allocator`.
    pub fn with_allocator(name: &str, allocator: &VariableAllocator) -> Self {
        Self {
            name: name.to_string(),
            variable: allocator.allocate(),
            subset: None,
        }
    }

    /// The dataset name as the server knows it.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The allocated loop-variable name, without the leading `$`.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Replace the subset with `axes`, kept in the order supplied.
    ///
    /// A previously stored subset is overwritten, not merged. An empty axis
    /// list is rejected: it would serialize as `$cN[]`, which the query
    /// grammar does not accept.
    pub fn set_subset(&mut self, axes: impl IntoIterator<Item = Axis>) -> Result<(), QueryError> {
        let axes: Vec<Axis> = axes.into_iter().collect();
        if axes.is_empty() {
            return Err(QueryError::InvalidArgument(
                "subset requires at least one axis".to_string(),
            ));
        }
        self.subset = Some(axes);
        Ok(())
    }

    // Operator constructors. Each builds a binary expression node with this
    // coverage (cloned) as the left operand.
    pub fn add(&self, rhs: impl Into<Expr>) -> Expr {
        Expr::from(self).add(rhs)
    }

    pub fn sub(&self, rhs: impl Into<Expr>) -> Expr {
        Expr::from(self).sub(rhs)
    }

    pub fn mul(&self, rhs: impl Into<Expr>) -> Expr {
        Expr::from(self).mul(rhs)
    }

    pub fn div(&self, rhs: impl Into<Expr>) -> Expr {
        Expr::from(self).div(rhs)
    }

    pub fn lt(&self, rhs: impl Into<Expr>) -> Expr {
        Expr::from(self).lt(rhs)
    }

    pub fn le(&self, rhs: impl Into<Expr>) -> Expr {
        Expr::from(self).le(rhs)
    }

    pub fn gt(&self, rhs: impl Into<Expr>) -> Expr {
        Expr::from(self).gt(rhs)
    }

    pub fn ge(&self, rhs: impl Into<Expr>) -> Expr {
        Expr::from(self).ge(rhs)
    }

    pub fn eq(&self, rhs: impl Into<Expr>) -> Expr {
        Expr::from(self).eq(rhs)
    }

    pub fn ne(&self, rhs: impl Into<Expr>) -> Expr {
        Expr::from(self).ne(rhs)
    }
}

impl std::fmt::Display for Coverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.subset {
            Some(axes) => {
                let axes: Vec<String> = axes.iter().map(|axis| axis.to_string()).collect();
                write!(f, "${}[{}]", self.variable, axes.join(", "))
            }
            None => write!(f, "${}", self.variable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_allocator_numbers_in_order() {
        let vars = VariableAllocator::new();
        assert_eq!(vars.allocate(), "c1");
        assert_eq!(vars.allocate(), "c2");
        assert_eq!(vars.allocate(), "c3");
    }

    #[test]
    fn test_allocator_reset_restarts_numbering() {
        let vars = VariableAllocator::new();
        assert_eq!(vars.allocate(), "c1");
        assert_eq!(vars.allocate(), "c2");
        vars.reset();
        assert_eq!(vars.allocate(), "c1");
    }

    #[test]
    fn test_coverages_get_distinct_variables_in_order() {
        let vars = VariableAllocator::new();
        let first = Coverage::with_allocator("Temperature", &vars);
        let second = Coverage::with_allocator("Pressure", &vars);
        let third = Coverage::with_allocator("Humidity", &vars);
        assert_eq!(first.variable(), "c1");
        assert_eq!(second.variable(), "c2");
        assert_eq!(third.variable(), "c3");
    }

    #[test]
    fn test_global_allocator_never_repeats() {
        // Other tests allocate from the global counter too, so only
        // distinctness is asserted here, not the exact numbers.
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    (0..4)
                        .map(|_| Coverage::new("AvgLandTemp").variable().to_string())
                        .collect::<Vec<String>>()
                })
            })
            .collect();
        let names: Vec<String> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        let unique: HashSet<&String> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_display_without_subset() {
        let vars = VariableAllocator::new();
        let coverage = Coverage::with_allocator("AvgLandTemp", &vars);
        assert_eq!(coverage.to_string(), "$c1");
    }

    #[test]
    fn test_display_with_subset() {
        let vars = VariableAllocator::new();
        let mut coverage = Coverage::with_allocator("AvgLandTemp", &vars);
        coverage
            .set_subset([
                Axis::point("Lat", 53.08),
                Axis::point("Long", 8.80),
                Axis::point("ansi", "\"2014-07\""),
            ])
            .unwrap();
        assert_eq!(
            coverage.to_string(),
            "$c1[Lat(53.08), Long(8.8), ansi(\"2014-07\")]"
        );
    }

    #[test]
    fn test_set_subset_overwrites() {
        let vars = VariableAllocator::new();
        let mut coverage = Coverage::with_allocator("AvgLandTemp", &vars);
        coverage.set_subset([Axis::point("Lat", 1)]).unwrap();
        coverage.set_subset([Axis::point("Long", 2)]).unwrap();
        assert_eq!(coverage.to_string(), "$c1[Long(2)]");
    }

    #[test]
    fn test_set_subset_rejects_empty_list() {
        let vars = VariableAllocator::new();
        let mut coverage = Coverage::with_allocator("AvgLandTemp", &vars);
        let err = coverage.set_subset([]).unwrap_err();
        assert!(matches!(err, QueryError::InvalidArgument(_)));
    }

    #[test]
    fn test_clone_keeps_variable() {
        let vars = VariableAllocator::new();
        let coverage = Coverage::with_allocator("AvgLandTemp", &vars);
        let clone = coverage.clone();
        assert_eq!(clone.variable(), coverage.variable());
    }
}
