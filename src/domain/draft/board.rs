//! Draft board - the registry of teams and the set of teams ready to draft

use serde::Serialize;

use crate::domain::error::DomainError;
use crate::domain::team::{Team, TeamName};

/// Number of ready teams that starts a draft
pub const DRAFT_TEAM_COUNT: usize = 3;

/// Teams taking part in a started draft, in the order they entered draft mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DraftOrder(Vec<TeamName>);

impl DraftOrder {
    pub fn teams(&self) -> &[TeamName] {
        &self.0
    }
}

/// Outcome of a team entering draft mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEntry {
    /// The team is waiting for more teams to become ready
    Waiting(Team),
    /// The team's entry completed the field and the draft started
    Started(DraftOrder),
}

/// In-memory draft state: registered teams plus the draft-ready set.
///
/// Every name in the ready set is also registered. The board itself has no
/// synchronization; callers share it behind a single lock.
#[derive(Debug, Default)]
pub struct DraftBoard {
    teams: Vec<Team>,
    ready: Vec<TeamName>,
}

impl DraftBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new team with the initial waiting status
    pub fn register(&mut self, name: TeamName) -> Result<&Team, DomainError> {
        if self.is_registered(&name) {
            return Err(DomainError::duplicate_team(name.as_str()));
        }

        let index = self.teams.len();
        self.teams.push(Team::new(name));
        Ok(&self.teams[index])
    }

    /// Put a registered team into draft mode without evaluating auto-start
    pub fn enter_draft(&mut self, name: &TeamName) -> Result<&Team, DomainError> {
        let Some(team) = self.teams.iter_mut().find(|team| team.name() == name) else {
            return Err(DomainError::unregistered_team(name.as_str()));
        };

        team.enter_draft_mode();

        if !self.ready.contains(name) {
            self.ready.push(name.clone());
        }

        Ok(&*team)
    }

    /// Whether the ready set has just reached the draft size
    pub fn should_auto_start(&self) -> bool {
        self.ready.len() == DRAFT_TEAM_COUNT
    }

    /// Enter draft mode, then start the draft if that completed the field
    pub fn enter_draft_mode(&mut self, name: &TeamName) -> Result<DraftEntry, DomainError> {
        let team = self.enter_draft(name)?.clone();

        if self.should_auto_start() {
            return self.start_draft().map(DraftEntry::Started);
        }

        Ok(DraftEntry::Waiting(team))
    }

    /// Start a draft with every ready team and clear the ready set.
    ///
    /// Team statuses are left untouched.
    pub fn start_draft(&mut self) -> Result<DraftOrder, DomainError> {
        if self.ready.len() < DRAFT_TEAM_COUNT {
            return Err(DomainError::insufficient_players(
                self.ready.len(),
                DRAFT_TEAM_COUNT,
            ));
        }

        Ok(DraftOrder(std::mem::take(&mut self.ready)))
    }

    /// Drop every team and every pending readiness signal
    pub fn reset(&mut self) -> usize {
        let cleared = self.teams.len();
        self.teams.clear();
        self.ready.clear();
        cleared
    }

    pub fn is_registered(&self, name: &TeamName) -> bool {
        self.teams.iter().any(|team| team.name() == name)
    }

    /// Registered teams in registration order
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Ready teams in the order they entered draft mode
    pub fn ready_teams(&self) -> &[TeamName] {
        &self.ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::TeamStatus;

    fn name(value: &str) -> TeamName {
        TeamName::new(value)
    }

    fn board_with(teams: &[&str]) -> DraftBoard {
        let mut board = DraftBoard::new();
        for team in teams {
            board.register(name(team)).unwrap();
        }
        board
    }

    #[test]
    fn test_register_new_team() {
        let mut board = DraftBoard::new();

        let team = board.register(name("A")).unwrap();
        assert_eq!(team.name().as_str(), "A");
        assert_eq!(team.status(), TeamStatus::WaitingToEnterDraft);
        assert_eq!(board.teams().len(), 1);
    }

    #[test]
    fn test_register_duplicate_team() {
        let mut board = board_with(&["A"]);
        board.enter_draft(&name("A")).unwrap();

        let result = board.register(name("A"));
        assert_eq!(result.unwrap_err(), DomainError::duplicate_team("A"));

        assert_eq!(board.teams().len(), 1);
        assert_eq!(board.teams()[0].status(), TeamStatus::WaitingForDraft);
    }

    #[test]
    fn test_teams_keep_registration_order() {
        let board = board_with(&["Charlie", "Alpha", "Bravo"]);

        let names: Vec<&str> = board.teams().iter().map(|t| t.name().as_str()).collect();
        assert_eq!(names, vec!["Charlie", "Alpha", "Bravo"]);
    }

    #[test]
    fn test_register_blank_names() {
        let mut board = DraftBoard::new();

        assert!(board.register(name("")).is_ok());
        assert!(board.register(name("   ")).is_ok());
        assert_eq!(
            board.register(name("")).unwrap_err(),
            DomainError::duplicate_team("")
        );
        assert_eq!(board.teams().len(), 2);
    }

    #[test]
    fn test_enter_draft_unregistered() {
        let mut board = board_with(&["A", "B"]);
        board.enter_draft_mode(&name("A")).unwrap();

        let result = board.enter_draft_mode(&name("Z"));
        assert_eq!(result.unwrap_err(), DomainError::unregistered_team("Z"));
        assert_eq!(board.ready_teams(), &[name("A")]);
        assert_eq!(board.teams()[1].status(), TeamStatus::WaitingToEnterDraft);
    }

    #[test]
    fn test_enter_draft_sets_status() {
        let mut board = board_with(&["A", "B", "C"]);

        let entry = board.enter_draft_mode(&name("A")).unwrap();
        match entry {
            DraftEntry::Waiting(team) => {
                assert_eq!(team.name().as_str(), "A");
                assert_eq!(team.status(), TeamStatus::WaitingForDraft);
            }
            DraftEntry::Started(_) => panic!("draft should not start with one team"),
        }
        assert_eq!(board.ready_teams(), &[name("A")]);
    }

    #[test]
    fn test_enter_draft_is_idempotent() {
        let mut board = board_with(&["A", "B", "C"]);

        board.enter_draft_mode(&name("A")).unwrap();
        board.enter_draft_mode(&name("A")).unwrap();
        board.enter_draft_mode(&name("A")).unwrap();

        assert_eq!(board.ready_teams().len(), 1);
        assert!(!board.should_auto_start());
    }

    #[test]
    fn test_should_auto_start_at_draft_size() {
        let mut board = board_with(&["A", "B", "C"]);

        board.enter_draft(&name("A")).unwrap();
        board.enter_draft(&name("B")).unwrap();
        assert!(!board.should_auto_start());

        board.enter_draft(&name("C")).unwrap();
        assert!(board.should_auto_start());
    }

    #[test]
    fn test_start_draft_insufficient_players() {
        let mut board = board_with(&["A", "B", "C"]);

        for ready in 0..DRAFT_TEAM_COUNT {
            let result = board.start_draft();
            assert_eq!(
                result.unwrap_err(),
                DomainError::insufficient_players(ready, DRAFT_TEAM_COUNT)
            );
            assert_eq!(board.ready_teams().len(), ready);

            let team = ["A", "B", "C"][ready];
            board.enter_draft(&name(team)).unwrap();
        }
    }

    #[test]
    fn test_third_entry_starts_draft() {
        let mut board = board_with(&["A", "B", "C"]);

        assert!(matches!(
            board.enter_draft_mode(&name("A")).unwrap(),
            DraftEntry::Waiting(_)
        ));
        assert!(matches!(
            board.enter_draft_mode(&name("B")).unwrap(),
            DraftEntry::Waiting(_)
        ));

        let entry = board.enter_draft_mode(&name("C")).unwrap();
        let DraftEntry::Started(order) = entry else {
            panic!("third ready team should start the draft");
        };

        assert_eq!(order.teams(), &[name("A"), name("B"), name("C")]);
        assert!(board.ready_teams().is_empty());
        assert_eq!(
            board.start_draft().unwrap_err(),
            DomainError::insufficient_players(0, DRAFT_TEAM_COUNT)
        );
    }

    #[test]
    fn test_draft_order_follows_readiness_not_registration() {
        let mut board = board_with(&["A", "B", "C"]);

        board.enter_draft_mode(&name("C")).unwrap();
        board.enter_draft_mode(&name("A")).unwrap();
        let DraftEntry::Started(order) = board.enter_draft_mode(&name("B")).unwrap() else {
            panic!("draft should start");
        };

        assert_eq!(order.teams(), &[name("C"), name("A"), name("B")]);
    }

    #[test]
    fn test_statuses_survive_draft_start() {
        let mut board = board_with(&["A", "B", "C"]);

        for team in ["A", "B", "C"] {
            board.enter_draft_mode(&name(team)).unwrap();
        }

        assert_eq!(board.teams().len(), 3);
        assert!(board.teams().iter().all(|t| t.status() == TeamStatus::WaitingForDraft));
    }

    #[test]
    fn test_team_can_rejoin_after_draft() {
        let mut board = board_with(&["A", "B", "C"]);
        for team in ["A", "B", "C"] {
            board.enter_draft_mode(&name(team)).unwrap();
        }

        board.enter_draft_mode(&name("B")).unwrap();
        assert_eq!(board.ready_teams(), &[name("B")]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = board_with(&["A", "B"]);
        board.enter_draft(&name("A")).unwrap();

        assert_eq!(board.reset(), 2);
        assert!(board.teams().is_empty());
        assert!(board.ready_teams().is_empty());

        assert!(board.register(name("A")).is_ok());
    }
}
