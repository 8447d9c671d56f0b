//! Team directory for ttt.
//!
//! The roster is fixed and compiled into the binary: members are never
//! created or removed at runtime, and nothing here touches storage.

use serde::Serialize;

/// A member of the team, assignable to tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub id: &'static str,
    pub name: &'static str,
}

const TEAM_MEMBERS: &[TeamMember] = &[
    TeamMember {
        id: "1",
        name: "Alice Johnson",
    },
    TeamMember {
        id: "2",
        name: "Bob Smith",
    },
    TeamMember {
        id: "3",
        name: "Carol Williams",
    },
    TeamMember {
        id: "4",
        name: "David Brown",
    },
];

/// The fixed roster, same order every call.
pub fn list() -> &'static [TeamMember] {
    TEAM_MEMBERS
}

/// Look up a member by id.
pub fn get_by_id(id: &str) -> Option<&'static TeamMember> {
    TEAM_MEMBERS.iter().find(|member| member.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_is_stable() {
        let first = list();
        let second = list();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
        assert_eq!(first[0].name, "Alice Johnson");
    }

    #[test]
    fn get_by_id_finds_members() {
        assert_eq!(get_by_id("2").map(|m| m.name), Some("Bob Smith"));
        assert!(get_by_id("99").is_none());
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = list().iter().map(|m| m.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), list().len());
    }
}
