use std::fmt;

use serde::{Deserialize, Serialize};

/// Speaker of a turn. Well-known roles get their own variant; any other name
/// is carried verbatim so histories from other chat formats still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    User,
    Assistant,
    System,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
            Role::Other(name) => name,
        }
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        match name.as_str() {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            "system" => Role::System,
            _ => Role::Other(name),
        }
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Role::from(name.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message of a conversation owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Render as `**role**: content`, the line format used in history blocks.
    pub fn render(&self) -> String {
        format!("**{}**: {}", self.role, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        let role = Role::Assistant;
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"assistant\"");

        let decoded: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, Role::Assistant);
    }

    #[test]
    fn test_role_display_matches_serde_name() {
        for role in [
            Role::User,
            Role::Assistant,
            Role::System,
            Role::Other("tool".to_string()),
        ] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role));
        }
    }

    #[test]
    fn test_turn_factory_methods() {
        assert_eq!(ConversationTurn::user("hi").role, Role::User);
        assert_eq!(ConversationTurn::assistant("hi").role, Role::Assistant);
        assert_eq!(ConversationTurn::system("hi").role, Role::System);
    }

    #[test]
    fn test_render() {
        let turn = ConversationTurn::user("what about item 3?");
        assert_eq!(turn.render(), "**user**: what about item 3?");
    }

    #[test]
    fn test_turn_deserialize_history_entry() {
        let json = r#"[{"role":"user","content":"a"},{"role":"assistant","content":"b"}]"#;
        let turns: Vec<ConversationTurn> = serde_json::from_str(json).unwrap();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[1], ConversationTurn::assistant("b"));
    }

    #[test]
    fn test_unknown_role_kept_verbatim() {
        let json = r#"[{"role":"developer","content":"be terse"},{"role":"user","content":"and item 2?"}]"#;
        let turns: Vec<ConversationTurn> = serde_json::from_str(json).unwrap();

        assert_eq!(turns[0].role, Role::Other("developer".to_string()));
        assert_eq!(turns[0].render(), "**developer**: be terse");
        assert_eq!(turns[1].role, Role::User);
        assert_eq!(
            serde_json::to_string(&turns[0].role).unwrap(),
            "\"developer\""
        );
    }

    #[test]
    fn test_role_names_are_case_sensitive() {
        assert_eq!(Role::from("User"), Role::Other("User".to_string()));
        assert_eq!(ConversationTurn::new("User".into(), "x").render(), "**User**: x");
    }
}
