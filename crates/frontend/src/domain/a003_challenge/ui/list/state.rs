use contracts::domain::a003_challenge::{ChallengeId, ChallengeRow, NewChallenge};
use contracts::domain::a007_wellness_category::WellnessCategory;
use contracts::domain::common::next_record_id;
use contracts::enums::{ChallengeStatus, SortDirection};
use contracts::shared::list_view::ListView;
use contracts::shared::validation::FormError;
use chrono::{DateTime, Utc};
use leptos::prelude::*;

pub const SEARCH_FIELDS: [&str; 3] = ["title", "description", "category"];
pub const FILTER_CATEGORY: &str = "category";
pub const FILTER_STATUS: &str = "status";

pub const SORT_PRESETS: [(&str, &str); 5] = [
    ("startDate-desc", "Newest First"),
    ("startDate-asc", "Oldest First"),
    ("participants-desc", "Most Participants"),
    ("completionRate-desc", "Highest Completion"),
    ("points-desc", "Highest Points"),
];

#[derive(Clone, Copy)]
pub struct ChallengeListState {
    pub list: RwSignal<ListView<ChallengeRow>>,
    pub categories: StoredValue<Vec<WellnessCategory>>,
    pub form: RwSignal<NewChallenge>,
    pub show_create: RwSignal<bool>,
    pub show_success: RwSignal<bool>,
    pub pending_delete: RwSignal<Option<ChallengeRow>>,
}

pub fn new_list_view() -> ListView<ChallengeRow> {
    ListView::new(
        &SEARCH_FIELDS,
        &[FILTER_CATEGORY, FILTER_STATUS],
        "startDate",
        SortDirection::Desc,
    )
}

pub fn create_state() -> ChallengeListState {
    ChallengeListState {
        list: RwSignal::new(new_list_view()),
        categories: StoredValue::new(Vec::new()),
        form: RwSignal::new(NewChallenge::default()),
        show_create: RwSignal::new(false),
        show_success: RwSignal::new(false),
        pending_delete: RwSignal::new(None),
    }
}

/// Number of challenges per effective status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub active: usize,
    pub completed: usize,
    pub upcoming: usize,
    pub paused: usize,
}

pub fn status_counts(rows: &[ChallengeRow]) -> StatusCounts {
    rows.iter().fold(StatusCounts::default(), |mut counts, row| {
        match row.status() {
            ChallengeStatus::Active => counts.active += 1,
            ChallengeStatus::Completed => counts.completed += 1,
            ChallengeStatus::Upcoming => counts.upcoming += 1,
            ChallengeStatus::Paused => counts.paused += 1,
        }
        counts
    })
}

/// Re-derives every timeline at `now`, then appends the new challenge
pub fn add_challenge(
    list: &mut ListView<ChallengeRow>,
    form: NewChallenge,
    categories: &[WellnessCategory],
    now: DateTime<Utc>,
) -> Result<ChallengeRow, FormError> {
    let id: ChallengeId = next_record_id(list.items().len());
    let challenge = form.into_challenge(id, categories, now)?;
    let row = ChallengeRow::new(challenge, now);
    list.update_all(|existing| existing.refresh(now));
    list.push(row.clone());
    Ok(row)
}

pub fn delete_challenge(list: &mut ListView<ChallengeRow>, id: ChallengeId) -> bool {
    list.remove_where(|row| row.id() == id) > 0
}

/// Pauses an active challenge or resumes a paused one.
/// Returns the new status, `None` when nothing changed.
pub fn toggle_pause(list: &mut ListView<ChallengeRow>, id: ChallengeId) -> Option<ChallengeStatus> {
    let mut changed_to = None;
    list.update_where(
        |row| row.id() == id,
        |row| {
            if row.toggle_pause() {
                changed_to = Some(row.status());
            }
        },
    );
    changed_to
}

pub fn count_caption(list: &ListView<ChallengeRow>) -> String {
    format!(
        "{} total challenges • {} shown",
        list.items().len(),
        list.visible().len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::indexed;
    use contracts::seed;
    use contracts::shared::timeline::parse_date;
    use std::collections::HashSet;

    fn now() -> DateTime<Utc> {
        parse_date("2024-08-20").unwrap()
    }

    fn loaded() -> (ListView<ChallengeRow>, Vec<WellnessCategory>) {
        let data = seed::load().unwrap();
        let rows = data
            .challenges
            .iter()
            .cloned()
            .map(|c| ChallengeRow::new(c, now()))
            .collect();
        let mut list = new_list_view();
        list.finish_loading(rows);
        (list, data.wellness_categories)
    }

    fn titles(list: &ListView<ChallengeRow>) -> Vec<String> {
        list.visible().iter().map(|r| r.challenge.title.clone()).collect()
    }

    fn form() -> NewChallenge {
        NewChallenge {
            title: "Stretch Break".into(),
            description: "Five minutes of stretching every hour".into(),
            category: "Fitness".into(),
            start_date: "2024-08-18".into(),
            end_date: "2024-08-25".into(),
            ..NewChallenge::default()
        }
    }

    #[test]
    fn test_statuses_follow_dates() {
        let (list, _) = loaded();
        assert_eq!(
            status_counts(list.items()),
            StatusCounts {
                active: 4,
                completed: 1,
                upcoming: 1,
                paused: 0,
            }
        );
    }

    #[test]
    fn test_default_sort_newest_first() {
        let (list, _) = loaded();
        assert_eq!(titles(&list)[0], "Step It Up Challenge");
        assert_eq!(titles(&list)[5], "Sleep Quality Challenge");
    }

    #[test]
    fn test_status_filter_uses_effective_status() {
        let (mut list, _) = loaded();
        let id = list
            .items()
            .iter()
            .find(|r| r.challenge.title == "Mindfulness Week")
            .map(|r| r.id())
            .unwrap();

        assert_eq!(toggle_pause(&mut list, id), Some(ChallengeStatus::Paused));
        list.set_filter(FILTER_STATUS, "paused");
        assert_eq!(titles(&list), vec!["Mindfulness Week"]);

        assert_eq!(toggle_pause(&mut list, id), Some(ChallengeStatus::Active));
        assert!(list.visible().is_empty());
    }

    #[test]
    fn test_pause_ignores_finished_challenges() {
        let (mut list, _) = loaded();
        let completed = list
            .items()
            .iter()
            .find(|r| r.status() == ChallengeStatus::Completed)
            .map(|r| r.id())
            .unwrap();
        assert_eq!(toggle_pause(&mut list, completed), None);
        assert_eq!(toggle_pause(&mut list, ChallengeId(99)), None);
    }

    #[test]
    fn test_create_picks_category_color() {
        let (mut list, categories) = loaded();
        let row = add_challenge(&mut list, form(), &categories, now()).unwrap();
        assert_eq!(row.id(), ChallengeId(7));
        assert_eq!(row.status(), ChallengeStatus::Active);
        assert_eq!(row.challenge.points, 100);
        assert_eq!(row.challenge.color, "#EF4444");
        assert_eq!(count_caption(&list), "7 total challenges • 7 shown");
    }

    #[test]
    fn test_delete_then_add_keeps_render_keys_unique() {
        let (mut list, categories) = loaded();
        assert!(delete_challenge(&mut list, ChallengeId(2)));
        let row = add_challenge(&mut list, form(), &categories, now()).unwrap();
        assert_eq!(row.id(), ChallengeId(6));

        let keys: HashSet<(usize, ChallengeId)> = indexed(list.visible())
            .iter()
            .map(|(i, r)| (*i, r.id()))
            .collect();
        assert_eq!(keys.len(), list.visible().len());
        assert_eq!(list.visible().len(), 6);
    }

    #[test]
    fn test_create_rejects_missing_dates() {
        let (mut list, categories) = loaded();
        let mut incomplete = form();
        incomplete.end_date.clear();
        assert!(add_challenge(&mut list, incomplete, &categories, now()).is_err());
        assert_eq!(list.items().len(), 6);
    }

    #[test]
    fn test_category_filter_and_delete() {
        let (mut list, _) = loaded();
        list.set_filter(FILTER_CATEGORY, "Fitness");
        assert_eq!(list.visible().len(), 2);

        let id = list.visible()[0].id();
        assert!(delete_challenge(&mut list, id));
        assert_eq!(list.visible().len(), 1);
    }
}
