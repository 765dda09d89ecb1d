//! Draft session state.
//!
//! The user's selections (map, teams, list filter, sort) live in one
//! immutable `DraftState`. Every interaction is a `DraftEvent`, and
//! `reduce` maps `(state, event)` to the next state. Nothing is persisted:
//! dropping the state is the same as reloading the page.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculate::{MapCatalog, RankedView, RankingQuery, SortMode, TypeFilter};
use crate::loader::BrawlerTables;
use crate::models::{AddOutcome, DraftTeams, TeamSide};

/// Everything the user has selected in one draft session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftState {
    pub selected_map: Option<String>,

    #[serde(default)]
    pub teams: DraftTeams,

    #[serde(default)]
    pub filter: TypeFilter,

    #[serde(default)]
    pub sort: SortMode,
}

/// One user interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DraftEvent {
    SelectMap { map: String },
    /// Append to a team; ignored when the team is full or already has the brawler
    Add { brawler: String, team: TeamSide },
    /// Remove the first occurrence from a team
    Remove { brawler: String, team: TeamSide },
    RemoveSlot { team: TeamSide, slot: usize },
    Toggle { brawler: String, team: TeamSide },
    /// Toggle on team A until it is full, then on team B
    Pick { brawler: String },
    SetFilter { filter: TypeFilter },
    SetSort { sort: SortMode },
    /// Clear both teams and the list controls, keeping the selected map
    Reset,
}

impl DraftState {
    /// Fresh session with the catalog's default map selected.
    pub fn initial(catalog: &MapCatalog) -> Self {
        Self {
            selected_map: catalog.default_map().map(str::to_string),
            ..Self::default()
        }
    }

    /// Ranking for the selected map, if one is selected.
    pub fn view(&self, tables: &BrawlerTables, top_size: usize) -> Option<RankedView> {
        let map = self.selected_map.as_ref()?;
        let query = RankingQuery::new(map.clone())
            .with_filter(self.filter.clone())
            .with_sort(self.sort)
            .with_top_size(top_size);
        Some(tables.rank(&query))
    }
}

/// Apply one event to a state.
pub fn reduce(mut state: DraftState, event: DraftEvent) -> DraftState {
    match event {
        DraftEvent::SelectMap { map } => {
            state.selected_map = Some(map);
        }
        DraftEvent::Add { brawler, team } => {
            let outcome = state.teams.team_mut(team).add(&brawler);
            if outcome != AddOutcome::Added {
                debug!("Add of {} to team {} ignored: {:?}", brawler, team, outcome);
            }
        }
        DraftEvent::Remove { brawler, team } => {
            state.teams.team_mut(team).remove(&brawler);
        }
        DraftEvent::RemoveSlot { team, slot } => {
            state.teams.team_mut(team).remove_slot(slot);
        }
        DraftEvent::Toggle { brawler, team } => {
            state.teams.team_mut(team).toggle(&brawler);
        }
        DraftEvent::Pick { brawler } => {
            let side = state.teams.auto_side();
            state.teams.team_mut(side).toggle(&brawler);
        }
        DraftEvent::SetFilter { filter } => {
            state.filter = filter;
        }
        DraftEvent::SetSort { sort } => {
            state.sort = sort;
        }
        DraftEvent::Reset => {
            state = DraftState {
                selected_map: state.selected_map,
                ..DraftState::default()
            };
        }
    }
    state
}
