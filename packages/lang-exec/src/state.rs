use indexmap::IndexMap;

use assistant_lang::Value;

/// The variable environment shared by every evaluation in one script run.
///
/// Keys are normalized names (no `$`, no braces). Insertion order is kept so
/// dumps of the environment are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: IndexMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Bind `name`, overwriting any previous binding in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn as_map(&self) -> &IndexMap<String, Value> {
        &self.vars
    }
}

impl From<IndexMap<String, Value>> for Environment {
    fn from(vars: IndexMap<String, Value>) -> Self {
        Self { vars }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let mut env = Environment::new();
        env.set("name", "Alice");
        assert_eq!(env.get("name"), Some(&Value::text("Alice")));
        assert!(env.contains("name"));
        assert!(!env.contains("other"));
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut env: Environment = [("a", "1"), ("b", "2")].into_iter().collect();
        env.set("a", true);
        let names: Vec<&str> = env.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(env.get("a"), Some(&Value::Bool(true)));
    }
}
