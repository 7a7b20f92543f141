//! Named configuration values attached to transforms.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use fg_core::{DagError, DagResult, VertexProfile, ensure_name};

/// Computes a constant from the profiling records of the vertices it depends on.
pub type ProfileFn = Rc<dyn Fn(&[VertexProfile]) -> String>;

/// The value a constant is bound to.
#[derive(Clone)]
pub enum ConstValue {
    /// Known at design time.
    Literal(String),
    /// Derived from profiling data once it is available.
    Profiled(ProfileFn),
}

impl ConstValue {
    /// Wrap a closure as a profile-derived value.
    pub fn profiled<F>(f: F) -> Self
    where
        F: Fn(&[VertexProfile]) -> String + 'static,
    {
        Self::Profiled(Rc::new(f))
    }
}

impl fmt::Debug for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstValue::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            ConstValue::Profiled(_) => f.write_str("Profiled(<fn>)"),
        }
    }
}

impl From<&str> for ConstValue {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_string())
    }
}

impl From<String> for ConstValue {
    fn from(s: String) -> Self {
        Self::Literal(s)
    }
}

/// A named configuration value.
///
/// The name is fixed at creation. The value lives behind a `RefCell` so it can
/// be (re)assigned through a shared handle, which is how constants of an
/// already registered transform get filled in after profiling.
pub struct Constant {
    name: String,
    value: RefCell<Option<ConstValue>>,
}

impl Constant {
    /// Create a constant bound to `value`.
    pub fn new(name: impl Into<String>, value: impl Into<ConstValue>) -> DagResult<Self> {
        let name = name.into();
        ensure_name(&name)?;
        Ok(Self {
            name,
            value: RefCell::new(Some(value.into())),
        })
    }

    /// Create a constant with no value yet.
    pub fn declare(name: impl Into<String>) -> DagResult<Self> {
        let name = name.into();
        ensure_name(&name)?;
        Ok(Self {
            name,
            value: RefCell::new(None),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the stored value.
    pub fn set(&self, value: impl Into<ConstValue>) {
        *self.value.borrow_mut() = Some(value.into());
    }

    /// Assign a literal string.
    pub fn set_literal(&self, value: impl Into<String>) {
        self.set(ConstValue::Literal(value.into()));
    }

    /// The bound value.
    pub fn value(&self) -> DagResult<ConstValue> {
        self.value
            .borrow()
            .clone()
            .ok_or_else(|| self.unbound("no value assigned"))
    }

    pub fn is_bound(&self) -> bool {
        self.value.borrow().is_some()
    }

    pub fn is_profiled(&self) -> bool {
        matches!(*self.value.borrow(), Some(ConstValue::Profiled(_)))
    }

    /// Produce the string value, evaluating profile-derived values over `profiles`.
    ///
    /// Literals ignore `profiles`. A profile-derived value with no records to
    /// work on is treated as unbound.
    pub fn resolve(&self, profiles: &[VertexProfile]) -> DagResult<String> {
        // Release the borrow before calling out so the closure may touch the constant.
        let value = self.value()?;
        match value {
            ConstValue::Literal(s) => Ok(s),
            ConstValue::Profiled(_) if profiles.is_empty() => {
                Err(self.unbound("no profiling records supplied"))
            }
            ConstValue::Profiled(f) => Ok(f(profiles)),
        }
    }

    fn unbound(&self, reason: &'static str) -> DagError {
        DagError::UnboundValue {
            name: self.name.clone(),
            reason,
        }
    }
}

impl fmt::Debug for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constant")
            .field("name", &self.name)
            .field("value", &*self.value.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycles(n: u32) -> VertexProfile {
        VertexProfile {
            cycles: n,
            ..Default::default()
        }
    }

    #[test]
    fn literal_resolves_without_profiles() {
        let c = Constant::new("width", "32").unwrap();
        assert_eq!(c.name(), "width");
        assert_eq!(c.resolve(&[]).unwrap(), "32");
        assert!(!c.is_profiled());
    }

    #[test]
    fn empty_name_rejected() {
        let err = Constant::new("", "1").unwrap_err();
        assert!(matches!(err, DagError::InvalidName { .. }));
        assert!(Constant::declare("").is_err());
    }

    #[test]
    fn reassignment_keeps_name() {
        let c = Constant::new("depth", "4").unwrap();
        c.set_literal("8");
        assert_eq!(c.name(), "depth");
        assert_eq!(c.resolve(&[]).unwrap(), "8");

        c.set(ConstValue::profiled(|p| p.len().to_string()));
        assert!(c.is_profiled());
        assert_eq!(c.resolve(&[cycles(1), cycles(2)]).unwrap(), "2");
    }

    #[test]
    fn declared_constant_is_unbound() {
        let c = Constant::declare("latency").unwrap();
        assert!(!c.is_bound());
        assert!(matches!(c.value(), Err(DagError::UnboundValue { .. })));
        assert!(matches!(
            c.resolve(&[cycles(3)]),
            Err(DagError::UnboundValue { .. })
        ));

        c.set_literal("3");
        assert!(c.is_bound());
        assert_eq!(c.resolve(&[]).unwrap(), "3");
    }

    #[test]
    fn profiled_with_no_records_is_unbound_every_time() {
        let c = Constant::new(
            "max_cycles",
            ConstValue::profiled(|p| p.iter().map(|r| r.cycles).max().unwrap_or(0).to_string()),
        )
        .unwrap();

        let first = c.resolve(&[]);
        let second = c.resolve(&[]);
        assert!(matches!(first, Err(DagError::UnboundValue { .. })));
        assert_eq!(first, second);
    }

    #[test]
    fn profiled_resolution_is_pure() {
        let c = Constant::new(
            "max_cycles",
            ConstValue::profiled(|p| p.iter().map(|r| r.cycles).max().unwrap_or(0).to_string()),
        )
        .unwrap();
        let records = [cycles(10), cycles(42), cycles(7)];

        assert_eq!(c.resolve(&records).unwrap(), "42");
        assert_eq!(c.resolve(&records).unwrap(), "42");
        assert_eq!(records[1].cycles, 42);
        assert!(c.is_profiled());
    }
}
