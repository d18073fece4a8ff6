use tracing::{debug, trace};

use super::error::{TabError, TabResult};
use super::types::{Direction, Tab, TabId, TabKind, Transition};

/// Kinds of the tabs a fresh session starts with
pub const DEFAULT_SEED: [TabKind; 2] = [TabKind::Google, TabKind::Chat];

/// Ordered tabs plus the active tab id
///
/// Insertion order is display order, and also decides which tab becomes
/// active when the active one is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStore {
    tabs: Vec<Tab>,
    active: TabId,
}

impl Default for TabStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl TabStore {
    /// Store with the default `google`, `chat` seed; the first tab is active
    pub fn seeded() -> Self {
        Self::with_tabs(&DEFAULT_SEED)
    }

    /// Store seeded with the given kinds, ids assigned from 0
    ///
    /// An empty seed falls back to the default one.
    pub fn with_tabs(kinds: &[TabKind]) -> Self {
        let kinds = if kinds.is_empty() { &DEFAULT_SEED[..] } else { kinds };
        let tabs: Vec<Tab> = kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| Tab::new(TabId(i as u64), *kind))
            .collect();
        let active = tabs[0].id;
        Self { tabs, active }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always false for a live store; present for API completeness
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_id(&self) -> TabId {
        self.active
    }

    pub fn active_tab(&self) -> &Tab {
        // active always refers to a present tab
        &self.tabs[self.active_index()]
    }

    pub fn active_index(&self) -> usize {
        self.index_of(self.active).unwrap_or(0)
    }

    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Make `id` the active tab
    ///
    /// Slides left when moving to a tab further right in the strip, right
    /// otherwise (including re-selecting the active tab).
    pub fn select(&mut self, id: TabId) -> TabResult<Transition> {
        let new_index = self.index_of(id).ok_or(TabError::NotFound(id))?;
        let direction = if new_index > self.active_index() {
            Direction::Left
        } else {
            Direction::Right
        };
        self.active = id;
        trace!("TABS: selected {} at index {} ({:?})", id, new_index, direction);
        Ok(Transition { active: id, direction })
    }

    /// Append a new tab of `kind` and make it active
    pub fn add(&mut self, kind: TabKind) -> Transition {
        let id = self.next_id();
        self.tabs.push(Tab::new(id, kind));
        self.active = id;
        debug!("TABS: added {} tab {}", kind, id);
        Transition {
            active: id,
            direction: Direction::Right,
        }
    }

    /// Remove the tab with `id`
    ///
    /// Closing the active tab activates the last remaining tab, not the
    /// neighbour of the closed one.
    pub fn close(&mut self, id: TabId) -> TabResult<Transition> {
        if self.tabs.len() <= 1 {
            return Err(TabError::LastTab);
        }
        let index = self.index_of(id).ok_or(TabError::NotFound(id))?;
        self.tabs.remove(index);

        if self.active == id {
            if let Some(last) = self.tabs.last() {
                self.active = last.id;
            }
        }
        debug!("TABS: closed tab {}, active is now {}", id, self.active);
        Ok(Transition {
            active: self.active,
            direction: Direction::Left,
        })
    }

    /// Activate the tab after the active one, wrapping around
    pub fn cycle_next(&mut self) -> Transition {
        let len = self.tabs.len();
        let index = (self.active_index() + 1) % len;
        self.active = self.tabs[index].id;
        Transition {
            active: self.active,
            direction: Direction::Left,
        }
    }

    /// Activate the tab before the active one, wrapping around
    pub fn cycle_previous(&mut self) -> Transition {
        let len = self.tabs.len();
        let index = (self.active_index() + len - 1) % len;
        self.active = self.tabs[index].id;
        Transition {
            active: self.active,
            direction: Direction::Right,
        }
    }

    /// One more than the largest id in use, or 0 for an empty store
    fn next_id(&self) -> TabId {
        self.tabs
            .iter()
            .map(|t| t.id.0)
            .max()
            .map_or(TabId(0), |max| TabId(max + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &TabStore) -> Vec<u64> {
        store.tabs().iter().map(|t| t.id.0).collect()
    }

    fn assert_valid(store: &TabStore) {
        assert!(!store.is_empty(), "store must never be empty");
        assert!(
            store.get(store.active_id()).is_some(),
            "active id {} not present in {:?}",
            store.active_id(),
            ids(store)
        );
        let mut sorted = ids(store);
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), store.len(), "ids must be unique");
    }

    /// Small deterministic generator so the invariant checks are reproducible
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self) -> u64 {
            self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            self.0 >> 33
        }
    }

    #[test]
    fn test_seeded_store() {
        let store = TabStore::seeded();
        assert_eq!(ids(&store), vec![0, 1]);
        assert_eq!(store.tabs()[0].kind, TabKind::Google);
        assert_eq!(store.tabs()[0].title, "Google");
        assert_eq!(store.tabs()[1].kind, TabKind::Chat);
        assert_eq!(store.tabs()[1].title, "New Chat");
        assert_eq!(store.active_id(), TabId(0));
    }

    #[test]
    fn test_with_tabs_empty_falls_back_to_default_seed() {
        assert_eq!(TabStore::with_tabs(&[]), TabStore::seeded());
    }

    #[test]
    fn test_with_tabs_custom_seed() {
        let store = TabStore::with_tabs(&[TabKind::Chat, TabKind::Chat, TabKind::Blank]);
        assert_eq!(ids(&store), vec![0, 1, 2]);
        assert_eq!(store.active_tab().kind, TabKind::Chat);
    }

    #[test]
    fn test_select_direction() {
        let mut store = TabStore::with_tabs(&[TabKind::Google, TabKind::Chat, TabKind::Google]);

        let t = store.select(TabId(2)).unwrap();
        assert_eq!(t.active, TabId(2));
        assert_eq!(t.direction, Direction::Left);

        let t = store.select(TabId(1)).unwrap();
        assert_eq!(t.direction, Direction::Right);

        // Re-selecting the active tab is not "greater", so it slides right
        let t = store.select(TabId(1)).unwrap();
        assert_eq!(t.direction, Direction::Right);
    }

    #[test]
    fn test_select_unknown_id_is_rejected() {
        let mut store = TabStore::seeded();
        let before = store.clone();
        assert_eq!(store.select(TabId(42)), Err(TabError::NotFound(TabId(42))));
        assert_eq!(store, before);
    }

    #[test]
    fn test_add_assigns_max_plus_one() {
        let mut store = TabStore::seeded();
        store.close(TabId(0)).unwrap();
        // Only id 1 remains, so the next id is 2, and 0 is never reused
        let t = store.add(TabKind::Google);
        assert_eq!(t.active, TabId(2));
        assert_eq!(t.direction, Direction::Right);
        assert_eq!(ids(&store), vec![1, 2]);
    }

    #[test]
    fn test_add_reuses_freed_id_above_new_max() {
        let mut store = TabStore::seeded();
        store.add(TabKind::Chat);
        store.close(TabId(2)).unwrap();
        let t = store.add(TabKind::Google);
        assert_eq!(t.active, TabId(2));
    }

    #[test]
    fn test_close_last_tab_is_rejected() {
        let mut store = TabStore::with_tabs(&[TabKind::Google]);
        let before = store.clone();
        assert_eq!(store.close(TabId(0)), Err(TabError::LastTab));
        // Even an unknown id is reported as the last-tab rejection
        assert_eq!(store.close(TabId(9)), Err(TabError::LastTab));
        assert_eq!(store, before);
    }

    #[test]
    fn test_close_unknown_id_is_rejected() {
        let mut store = TabStore::seeded();
        let before = store.clone();
        assert_eq!(store.close(TabId(5)), Err(TabError::NotFound(TabId(5))));
        assert_eq!(store, before);
    }

    #[test]
    fn test_close_active_selects_last_not_neighbour() {
        // Documented policy: the last tab wins, even when a closer neighbour exists
        let mut store = TabStore::with_tabs(&[
            TabKind::Google,
            TabKind::Chat,
            TabKind::Google,
            TabKind::Chat,
        ]);
        store.select(TabId(1)).unwrap();
        let t = store.close(TabId(1)).unwrap();
        assert_eq!(t.active, TabId(3));
        assert_eq!(t.direction, Direction::Left);
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let mut store = TabStore::with_tabs(&[TabKind::Google, TabKind::Chat, TabKind::Google]);
        store.select(TabId(1)).unwrap();
        let t = store.close(TabId(2)).unwrap();
        assert_eq!(t.active, TabId(1));
        assert_eq!(store.active_id(), TabId(1));
    }

    #[test]
    fn test_cycle_wraps_around() {
        let mut store = TabStore::with_tabs(&[TabKind::Google, TabKind::Chat, TabKind::Blank]);

        assert_eq!(store.cycle_next().active, TabId(1));
        assert_eq!(store.cycle_next().active, TabId(2));
        let t = store.cycle_next();
        assert_eq!(t.active, TabId(0));
        assert_eq!(t.direction, Direction::Left);

        let t = store.cycle_previous();
        assert_eq!(t.active, TabId(2));
        assert_eq!(t.direction, Direction::Right);
    }

    #[test]
    fn test_cycle_single_tab_stays_put() {
        let mut store = TabStore::with_tabs(&[TabKind::Chat]);
        assert_eq!(store.cycle_next().active, TabId(0));
        assert_eq!(store.cycle_previous().active, TabId(0));
    }

    #[test]
    fn test_cycle_next_then_previous_returns_to_start() {
        let mut store = TabStore::with_tabs(&[TabKind::Google; 5]);
        store.select(TabId(3)).unwrap();
        for steps in 0..12 {
            for _ in 0..steps {
                store.cycle_next();
            }
            for _ in 0..steps {
                store.cycle_previous();
            }
            assert_eq!(store.active_id(), TabId(3), "after {} steps", steps);
        }
    }

    #[test]
    fn test_scenario_add_and_close() {
        let mut store = TabStore::seeded();

        store.add(TabKind::Chat);
        assert_eq!(ids(&store), vec![0, 1, 2]);
        assert_eq!(store.tabs()[2].title, "New Chat");
        assert_eq!(store.active_id(), TabId(2));

        store.close(TabId(1)).unwrap();
        assert_eq!(ids(&store), vec![0, 2]);
        assert_eq!(store.active_id(), TabId(2));

        store.close(TabId(2)).unwrap();
        assert_eq!(ids(&store), vec![0]);
        assert_eq!(store.active_id(), TabId(0));
    }

    #[test]
    fn test_invariants_hold_over_random_operations() {
        for seed in 0..50 {
            let mut rng = Lcg(seed);
            let mut store = TabStore::seeded();

            for _ in 0..200 {
                let before_active = store.active_id();
                let before_max = ids(&store).into_iter().max().unwrap();

                match rng.next() % 5 {
                    0 => {
                        let t = store.add(if rng.next() % 2 == 0 { TabKind::Google } else { TabKind::Chat });
                        assert!(t.active.0 > before_max);
                    }
                    1 => {
                        let target = store.tabs()[(rng.next() as usize) % store.len()].id;
                        let len = store.len();
                        let result = store.close(target);
                        if len <= 1 {
                            assert_eq!(result, Err(TabError::LastTab));
                        } else if target == before_active {
                            assert_eq!(store.active_id(), store.tabs().last().unwrap().id);
                        } else {
                            assert_eq!(store.active_id(), before_active);
                        }
                    }
                    2 => {
                        let target = TabId(rng.next() % (before_max + 3));
                        let _ = store.select(target);
                    }
                    3 => {
                        store.cycle_next();
                    }
                    _ => {
                        store.cycle_previous();
                    }
                }

                assert_valid(&store);
            }
        }
    }
}
