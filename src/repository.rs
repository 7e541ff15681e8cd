use crate::models::Activity;

/// In-memory store of [`Activity`] records.
///
/// Insertion order is display order. Ids come from a counter that only ever
/// moves forward, so an id freed by [`delete`](Self::delete) is never handed
/// out again. Lives for one application session; nothing is persisted.
#[derive(Debug, Default)]
pub struct Repository {
    activities: Vec<Activity>,
    next_id: u64,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, oldest first. No side effects, cannot fail.
    pub fn list(&self) -> &[Activity] {
        &self.activities
    }

    /// Append a new record built from already-validated field values and
    /// return it, id included.
    ///
    /// No validation happens here; that is the form bridge's job (see
    /// [`crate::form::submit`]). Always succeeds.
    pub fn create(&mut self, title: String, description: String, image_url: String) -> Activity {
        let id = self.next_id;
        self.next_id += 1;

        let activity = Activity::new(id, title, description, image_url);
        self.activities.push(activity.clone());
        tracing::debug!(id, "activity created");
        activity
    }

    /// Remove the record with the given id, keeping everything else in order.
    ///
    /// Returns whether a record was removed. An absent id is a no-op, not an
    /// error.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.activities.len();
        self.activities.retain(|activity| activity.id != id);

        let removed = self.activities.len() != before;
        tracing::debug!(id, removed, "activity delete");
        removed
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_assigns_ids_starting_at_zero() {
        let mut repository = Repository::new();

        let activity = repository.create(
            "Hike".to_string(),
            "Morning trail".to_string(),
            "a.png".to_string(),
        );

        assert_eq!(activity.id, 0);
        assert_eq!(activity.title, "Hike");
        assert_eq!(activity.description, "Morning trail");
        assert_eq!(activity.image_url, "a.png");
        assert_eq!(repository.list(), &[activity]);
    }

    #[test]
    fn ids_are_strictly_increasing_and_unique() {
        let mut repository = Repository::new();

        let ids: Vec<u64> = (0..5)
            .map(|n| {
                repository
                    .create(format!("t{n}"), format!("d{n}"), format!("u{n}"))
                    .id
            })
            .collect();

        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn list_returns_records_in_creation_order() {
        let mut repository = Repository::new();
        repository.create("first".into(), "d".into(), "u".into());
        repository.create("second".into(), "d".into(), "u".into());
        repository.create("third".into(), "d".into(), "u".into());

        let titles: Vec<&str> = repository
            .list()
            .iter()
            .map(|activity| activity.title.as_str())
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn delete_removes_only_the_matching_record() {
        let mut repository = Repository::new();
        repository.create("a".into(), "d".into(), "u".into());
        repository.create("b".into(), "d".into(), "u".into());

        assert!(repository.delete(0));

        let remaining = repository.list();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 1);
        assert_eq!(remaining[0].title, "b");
    }

    #[test]
    fn delete_of_absent_id_is_a_no_op() {
        let mut repository = Repository::new();
        repository.create("a".into(), "d".into(), "u".into());
        repository.create("b".into(), "d".into(), "u".into());

        assert!(!repository.delete(999));

        let ids: Vec<u64> = repository.list().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn deleted_ids_are_never_reused() {
        let mut repository = Repository::new();
        repository.create("a".into(), "d".into(), "u".into());
        repository.create("b".into(), "d".into(), "u".into());
        repository.delete(1);

        let next = repository.create("c".into(), "d".into(), "u".into());
        assert_eq!(next.id, 2);

        repository.delete(0);
        repository.delete(2);
        let after_emptying = repository.create("d".into(), "d".into(), "u".into());
        assert_eq!(after_emptying.id, 3);
    }

    #[test]
    fn len_and_is_empty_track_the_stored_records() {
        let mut repository = Repository::new();
        assert!(repository.is_empty());

        repository.create("a".into(), "d".into(), "u".into());
        assert_eq!(repository.len(), 1);
        assert!(!repository.is_empty());

        repository.delete(0);
        assert!(repository.is_empty());
    }

    #[test]
    fn delete_keeps_surrounding_records_in_order() {
        let mut repository = Repository::new();
        for n in 0..4 {
            repository.create(format!("t{n}"), "d".into(), "u".into());
        }

        repository.delete(1);
        repository.delete(2);

        let ids: Vec<u64> = repository.list().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![0, 3]);
    }
}
