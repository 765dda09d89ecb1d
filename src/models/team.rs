//! Draft teams: two dense sequences of up to three brawlers each.

use serde::{Deserialize, Serialize};

/// Maximum number of brawlers on one team.
pub const TEAM_SIZE: usize = 3;

/// Which side of the draft a team is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    A,
    B,
}

impl std::fmt::Display for TeamSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamSide::A => write!(f, "A"),
            TeamSide::B => write!(f, "B"),
        }
    }
}

/// Result of an add attempt. Only `Added` changes the team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    Added,
    TeamFull,
    AlreadyPicked,
}

/// One team's picks. Slots are dense: removing a brawler shifts the
/// later ones left, so occupied slots are always `0..len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Team {
    picks: Vec<String>,
}

impl TryFrom<Vec<String>> for Team {
    type Error = String;

    fn try_from(picks: Vec<String>) -> Result<Self, Self::Error> {
        let mut team = Team::new();
        for pick in picks {
            match team.add(&pick) {
                AddOutcome::Added => {}
                AddOutcome::TeamFull => {
                    return Err(format!("a team holds at most {} brawlers", TEAM_SIZE))
                }
                AddOutcome::AlreadyPicked => {
                    return Err(format!("{} appears twice in one team", pick))
                }
            }
        }
        Ok(team)
    }
}

impl From<Team> for Vec<String> {
    fn from(team: Team) -> Self {
        team.picks
    }
}

impl Team {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.picks.len() >= TEAM_SIZE
    }

    pub fn contains(&self, brawler: &str) -> bool {
        self.picks.iter().any(|p| p == brawler)
    }

    pub fn picks(&self) -> &[String] {
        &self.picks
    }

    /// Fixed three-slot view: `Some(name)` for occupied slots, `None` for empty.
    pub fn slots(&self) -> [Option<&str>; TEAM_SIZE] {
        let mut slots = [None; TEAM_SIZE];
        for (slot, pick) in slots.iter_mut().zip(&self.picks) {
            *slot = Some(pick.as_str());
        }
        slots
    }

    /// Append a brawler to the end of the team.
    pub fn add(&mut self, brawler: &str) -> AddOutcome {
        if self.is_full() {
            return AddOutcome::TeamFull;
        }
        if self.contains(brawler) {
            return AddOutcome::AlreadyPicked;
        }
        self.picks.push(brawler.to_string());
        AddOutcome::Added
    }

    /// Remove the first occurrence of `brawler`. Returns whether anything was removed.
    pub fn remove(&mut self, brawler: &str) -> bool {
        match self.picks.iter().position(|p| p == brawler) {
            Some(idx) => {
                self.picks.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove whatever occupies `slot`, returning it.
    pub fn remove_slot(&mut self, slot: usize) -> Option<String> {
        if slot < self.picks.len() {
            Some(self.picks.remove(slot))
        } else {
            None
        }
    }

    /// Remove the brawler if picked, otherwise try to add it.
    pub fn toggle(&mut self, brawler: &str) -> bool {
        if self.remove(brawler) {
            true
        } else {
            self.add(brawler) == AddOutcome::Added
        }
    }
}

/// Both teams of a draft.
///
/// Nothing stops the same brawler from appearing on both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftTeams {
    pub a: Team,
    pub b: Team,
}

impl DraftTeams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::A => &self.a,
            TeamSide::B => &self.b,
        }
    }

    pub fn team_mut(&mut self, side: TeamSide) -> &mut Team {
        match side {
            TeamSide::A => &mut self.a,
            TeamSide::B => &mut self.b,
        }
    }

    /// Side a clicked card goes to: A until it is full, then B.
    pub fn auto_side(&self) -> TeamSide {
        if self.a.is_full() {
            TeamSide::B
        } else {
            TeamSide::A
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_until_full() {
        let mut team = Team::new();
        assert_eq!(team.add("X"), AddOutcome::Added);
        assert_eq!(team.add("Y"), AddOutcome::Added);
        assert_eq!(team.add("Z"), AddOutcome::Added);
        assert_eq!(team.add("W"), AddOutcome::TeamFull);

        assert_eq!(team.picks(), &["X", "Y", "Z"]);
    }

    #[test]
    fn test_add_duplicate_is_noop() {
        let mut team = Team::new();
        team.add("X");
        assert_eq!(team.add("X"), AddOutcome::AlreadyPicked);
        assert_eq!(team.len(), 1);
    }

    #[test]
    fn test_full_wins_over_duplicate() {
        let mut team = Team::new();
        team.add("X");
        team.add("Y");
        team.add("Z");
        assert_eq!(team.add("X"), AddOutcome::TeamFull);
    }

    #[test]
    fn test_remove_compacts() {
        let mut team = Team::new();
        team.add("X");
        team.add("Y");
        team.add("Z");

        assert!(team.remove("X"));
        assert_eq!(team.slots(), [Some("Y"), Some("Z"), None]);
        assert!(!team.remove("X"));
    }

    #[test]
    fn test_remove_slot() {
        let mut team = Team::new();
        team.add("X");
        team.add("Y");

        assert_eq!(team.remove_slot(0), Some("X".to_string()));
        assert_eq!(team.slots(), [Some("Y"), None, None]);
        assert_eq!(team.remove_slot(2), None);
    }

    #[test]
    fn test_toggle() {
        let mut team = Team::new();
        assert!(team.toggle("X"));
        assert!(team.contains("X"));
        assert!(team.toggle("X"));
        assert!(team.is_empty());
    }

    #[test]
    fn test_toggle_on_full_team() {
        let mut team = Team::new();
        team.add("X");
        team.add("Y");
        team.add("Z");
        assert!(!team.toggle("W"));
        assert!(team.toggle("Y"));
        assert_eq!(team.picks(), &["X", "Z"]);
    }

    #[test]
    fn test_auto_side_and_mirror_picks() {
        let mut teams = DraftTeams::new();
        assert_eq!(teams.auto_side(), TeamSide::A);

        for name in ["X", "Y", "Z"] {
            let side = teams.auto_side();
            teams.team_mut(side).add(name);
        }
        assert_eq!(teams.auto_side(), TeamSide::B);

        // Cross-team duplicates are allowed
        assert_eq!(teams.team_mut(TeamSide::B).add("X"), AddOutcome::Added);
        assert!(teams.team(TeamSide::A).contains("X"));
        assert!(teams.team(TeamSide::B).contains("X"));
    }

    #[test]
    fn test_team_serializes_as_list() {
        let mut teams = DraftTeams::new();
        teams.a.add("Shelly");
        let json = serde_json::to_value(&teams).unwrap();
        assert_eq!(json["a"], serde_json::json!(["Shelly"]));
        assert_eq!(json["b"], serde_json::json!([]));
    }

    #[test]
    fn test_team_deserialize_enforces_invariants() {
        let ok: Team = serde_json::from_str(r#"["X","Y"]"#).unwrap();
        assert_eq!(ok.picks(), &["X", "Y"]);

        assert!(serde_json::from_str::<Team>(r#"["X","Y","Z","W"]"#).is_err());
        assert!(serde_json::from_str::<Team>(r#"["X","X"]"#).is_err());
    }
}
