//! The `Val` record every demo operates on.

use std::fmt;

/// Immutable pair of integers. Fields are set at construction and never
/// change; equality and printing are by field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Val {
    v1: i32,
    v2: i32,
}

impl Val {
    pub fn new(v1: i32, v2: i32) -> Self {
        Val { v1, v2 }
    }

    pub fn v1(&self) -> i32 {
        self.v1
    }

    pub fn v2(&self) -> i32 {
        self.v2
    }
}

impl fmt::Display for Val {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Val{{v1={}, v2={}}}", self.v1, self.v2)
    }
}

/// Renders a slice of displayable items as `[a, b, c]`, matching the list
/// form the demos print.
pub fn display_list<T: fmt::Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let v = Val::new(1, 2);
        assert_eq!(v.v1(), 1);
        assert_eq!(v.v2(), 2);
    }

    #[test]
    fn test_display_form() {
        assert_eq!(Val::new(1, 2).to_string(), "Val{v1=1, v2=2}");
        assert_eq!(Val::new(-3, 0).to_string(), "Val{v1=-3, v2=0}");
    }

    #[test]
    fn test_equality_by_field_value() {
        assert_eq!(Val::new(2, 1), Val::new(2, 1));
        assert_ne!(Val::new(2, 1), Val::new(1, 2));
    }

    #[test]
    fn test_display_list() {
        let vals = [Val::new(1, 1), Val::new(1, 2)];
        assert_eq!(display_list(&vals), "[Val{v1=1, v2=1}, Val{v1=1, v2=2}]");
        assert_eq!(display_list::<i32>(&[]), "[]");
    }
}
