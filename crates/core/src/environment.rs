use crate::{error::CoreError, event_kind::EventKind};

/// Workflow run context, passed to the step through environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub event_name: String,
    pub event_action: String,
    pub ref_type: String,
    pub git_ref: String,
    pub actor: String,
    pub repository_owner: String,
}

impl Environment {
    pub const EVENT_NAME: &'static str = "GITHUB_EVENT_NAME";
    pub const EVENT_ACTION: &'static str = "EVENT_ACTION";
    pub const REF_TYPE: &'static str = "REF_TYPE";
    pub const REF: &'static str = "REF";
    pub const ACTOR: &'static str = "ACTOR";
    pub const REPOSITORY_OWNER: &'static str = "GITHUB_REPOSITORY_OWNER";

    /// Load from the process environment.
    ///
    /// # Errors
    /// Returns error if any of the variables is not set.
    pub fn load() -> Result<Self, CoreError> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Load using `lookup` to resolve each variable name.
    ///
    /// # Errors
    /// Returns error naming the first variable `lookup` cannot resolve.
    pub fn load_with<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| lookup(name).ok_or(CoreError::MissingEnv(name));
        Ok(Self {
            event_name: require(Self::EVENT_NAME)?,
            event_action: require(Self::EVENT_ACTION)?,
            ref_type: require(Self::REF_TYPE)?,
            git_ref: require(Self::REF)?,
            actor: require(Self::ACTOR)?,
            repository_owner: require(Self::REPOSITORY_OWNER)?,
        })
    }

    pub fn event(&self) -> EventKind {
        EventKind::from(self.event_name.as_str())
    }

    /// Aligned `NAME : 'value'` lines for the debug group.
    pub fn debug_lines(&self) -> Vec<String> {
        [
            (Self::EVENT_NAME, &self.event_name),
            (Self::EVENT_ACTION, &self.event_action),
            (Self::REF_TYPE, &self.ref_type),
            (Self::REF, &self.git_ref),
            (Self::ACTOR, &self.actor),
            (Self::REPOSITORY_OWNER, &self.repository_owner),
        ]
        .iter()
        .map(|(name, value)| format!("{name:<23} : '{value}'"))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("GITHUB_EVENT_NAME", "create"),
            ("EVENT_ACTION", ""),
            ("REF_TYPE", "tag"),
            ("REF", "v1.2023.4"),
            ("ACTOR", "arnaudroques"),
            ("GITHUB_REPOSITORY_OWNER", "plantuml"),
        ])
    }

    #[test]
    fn test_load_with_all_variables() {
        let vars = full_env();
        let env = Environment::load_with(|name| vars.get(name).map(|v| v.to_string())).unwrap();
        assert_eq!(env.event_name, "create");
        assert_eq!(env.event_action, "");
        assert_eq!(env.ref_type, "tag");
        assert_eq!(env.git_ref, "v1.2023.4");
        assert_eq!(env.actor, "arnaudroques");
        assert_eq!(env.repository_owner, "plantuml");
        assert_eq!(env.event(), EventKind::Create);
    }

    #[test]
    fn test_load_with_missing_variable() {
        let mut vars = full_env();
        vars.remove("ACTOR");
        let err = Environment::load_with(|name| vars.get(name).map(|v| v.to_string())).unwrap_err();
        assert_eq!(err, CoreError::MissingEnv("ACTOR"));
    }

    #[test]
    fn test_load_with_nothing_set_reports_first_variable() {
        let err = Environment::load_with(|_| None).unwrap_err();
        assert_eq!(err, CoreError::MissingEnv("GITHUB_EVENT_NAME"));
    }

    #[test]
    fn test_debug_lines() {
        let vars = full_env();
        let env = Environment::load_with(|name| vars.get(name).map(|v| v.to_string())).unwrap();
        let lines = env.debug_lines();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "GITHUB_EVENT_NAME       : 'create'");
        assert_eq!(lines[3], "REF                     : 'v1.2023.4'");
        assert_eq!(lines[5], "GITHUB_REPOSITORY_OWNER : 'plantuml'");
    }
}
