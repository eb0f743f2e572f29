use std::fmt;

/// The actions worth recording into a user's activity log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    SignUp,
    LoginSucceeded,
    LoginFailed,
    Logout,
    ProfileUpdated,
    /// A filtered listing view; carries the summary of the applied criteria
    Filter(String),
}

impl fmt::Display for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignUp => write!(f, "Sign up"),
            Self::LoginSucceeded => write!(f, "Successfully login"),
            Self::LoginFailed => write!(f, "Failed to login"),
            Self::Logout => write!(f, "Logout"),
            Self::ProfileUpdated => write!(f, "Updated Profile"),
            Self::Filter(summary) => write!(f, "Filter: {}", summary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_action_carries_its_summary() {
        let action = UserAction::Filter("5 Years Of Exp".to_string());
        assert_eq!(action.to_string(), "Filter: 5 Years Of Exp");
    }
}
