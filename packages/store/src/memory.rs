use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::persistence::{Persistence, StorageError};

/// In-memory Persistence for testing and ephemeral sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Persistence for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.slots.lock().unwrap().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::book::RecipeBook;
    use crate::config::BookConfig;
    use crate::models::Recipe;

    fn empty_book() -> RecipeBook<MemoryStore> {
        RecipeBook::open(MemoryStore::new())
    }

    #[test]
    fn ids_are_unique_and_increasing_from_one() {
        let mut book = empty_book();
        book.add_recipe("a", "first").unwrap();
        book.add_recipe("b", "second").unwrap();
        book.add_recipe("c", "third").unwrap();

        let ids: Vec<u32> = book.recipes().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn delete_then_add_never_reuses_an_id() {
        let mut book = empty_book();
        book.add_recipe("a", "one").unwrap();
        book.add_recipe("b", "two").unwrap();
        book.delete_recipe(2).unwrap();
        book.add_recipe("c", "three").unwrap();

        let ids: Vec<u32> = book.recipes().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn comma_segments_become_ingredients_verbatim() {
        let mut book = empty_book();
        book.add_recipe("a,b,c", "do it").unwrap();

        let recipe = &book.recipes()[0];
        assert_eq!(recipe.ingredients, vec!["a", "b", "c"]);
        assert_eq!(recipe.method, "do it");
    }

    #[test]
    fn empty_segments_and_whitespace_are_preserved() {
        let mut book = empty_book();
        book.add_recipe("a,,c", "m").unwrap();
        book.add_recipe(" a , b", "m").unwrap();

        assert_eq!(book.recipes()[0].ingredients, vec!["a", "", "c"]);
        assert_eq!(book.recipes()[1].ingredients, vec![" a ", " b"]);
    }

    #[test]
    fn an_empty_ingredients_string_is_one_empty_entry() {
        let mut book = empty_book();
        book.add_recipe("", "just do it").unwrap();

        assert_eq!(book.recipes()[0].ingredients, vec![""]);
    }

    #[test]
    fn delete_removes_exactly_the_matching_record() {
        let mut book = empty_book();
        book.add_recipe("a", "one").unwrap();
        book.add_recipe("b", "two").unwrap();
        book.add_recipe("c", "three").unwrap();
        book.delete_recipe(2).unwrap();

        let recipes = book.recipes();
        assert_eq!(recipes.len(), 2);
        assert_eq!(
            recipes[0],
            Recipe {
                id: 1,
                ingredients: vec!["a".to_string()],
                method: "one".to_string(),
            }
        );
        assert_eq!(recipes[1].id, 3);
        assert_eq!(recipes[1].method, "three");
    }

    #[test]
    fn deleting_an_unknown_id_is_a_silent_no_op() {
        let mut book = empty_book();
        book.add_recipe("a", "one").unwrap();
        book.delete_recipe(42).unwrap();

        assert_eq!(book.recipes().len(), 1);
    }

    #[test]
    fn empty_slot_opens_as_an_empty_book() {
        let book = empty_book();
        assert!(book.is_empty());
        assert!(book.recipes().is_empty());
    }

    #[test]
    fn corrupt_slot_opens_as_an_empty_book() {
        let storage = MemoryStore::new();
        storage.save("recipes", "definitely not json").unwrap();

        let book = RecipeBook::open(storage);
        assert!(book.is_empty());
    }

    #[test]
    fn reopening_reproduces_the_list() {
        let storage = MemoryStore::new();
        let mut book = RecipeBook::open(storage.clone());
        book.add_recipe("a,b", "one").unwrap();
        book.add_recipe("c", "two").unwrap();
        book.delete_recipe(1).unwrap();

        let reopened = RecipeBook::open(storage);
        assert_eq!(reopened.recipes(), book.recipes());
    }

    #[test]
    fn reopening_preserves_the_id_counter() {
        let storage = MemoryStore::new();
        let mut book = RecipeBook::open(storage.clone());
        book.add_recipe("a", "one").unwrap();
        book.add_recipe("b", "two").unwrap();
        book.delete_recipe(2).unwrap();

        let mut reopened = RecipeBook::open(storage);
        reopened.add_recipe("c", "three").unwrap();

        let ids: Vec<u32> = reopened.recipes().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn legacy_bare_array_slots_are_adopted() {
        let storage = MemoryStore::new();
        storage
            .save(
                "recipes",
                r#"[{"id":1,"ingredients":["chilli","garlic","rice"],"method":"fry"},
                    {"id":4,"ingredients":["banana"],"method":"slice"}]"#,
            )
            .unwrap();

        let mut book = RecipeBook::open(storage);
        assert_eq!(book.recipes().len(), 2);

        book.add_recipe("x", "new").unwrap();
        assert_eq!(book.recipes()[2].id, 5);
    }

    #[test]
    fn edit_ingredients_keeps_the_method() {
        let mut book = empty_book();
        book.add_recipe("a,b", "keep me").unwrap();
        book.edit_ingredients(1, vec!["x".to_string(), "y".to_string()])
            .unwrap();

        let recipe = &book.recipes()[0];
        assert_eq!(recipe.ingredients, vec!["x", "y"]);
        assert_eq!(recipe.method, "keep me");
    }

    #[test]
    fn edit_method_keeps_the_ingredients() {
        let mut book = empty_book();
        book.add_recipe("a,b", "old").unwrap();
        book.edit_method(1, "new").unwrap();

        let recipe = &book.recipes()[0];
        assert_eq!(recipe.ingredients, vec!["a", "b"]);
        assert_eq!(recipe.method, "new");
    }

    #[test]
    fn edits_with_unknown_ids_leave_records_unchanged() {
        let mut book = empty_book();
        book.add_recipe("a", "one").unwrap();
        book.edit_ingredients(9, vec!["x".to_string()]).unwrap();
        book.edit_method(9, "changed").unwrap();

        assert_eq!(book.recipes()[0].ingredients, vec!["a"]);
        assert_eq!(book.recipes()[0].method, "one");
    }

    #[test]
    fn every_mutation_notifies_with_the_new_list() {
        let seen: Rc<RefCell<Vec<Vec<Recipe>>>> = Rc::new(RefCell::new(Vec::new()));
        let mut book = empty_book();
        let sink = Rc::clone(&seen);
        book.set_observer(move |recipes| sink.borrow_mut().push(recipes.to_vec()));

        book.add_recipe("a", "one").unwrap();
        book.edit_ingredients(1, vec!["b".to_string()]).unwrap();
        book.edit_method(1, "two").unwrap();
        book.delete_recipe(1).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0][0].ingredients, vec!["a"]);
        assert_eq!(seen[1][0].ingredients, vec!["b"]);
        assert_eq!(seen[2][0].method, "two");
        assert!(seen[3].is_empty());
    }

    #[test]
    fn rebinding_replaces_the_previous_observer() {
        let first = Rc::new(RefCell::new(0));
        let second = Rc::new(RefCell::new(0));
        let mut book = empty_book();

        let calls = Rc::clone(&first);
        book.set_observer(move |_| *calls.borrow_mut() += 1);
        let calls = Rc::clone(&second);
        book.set_observer(move |_| *calls.borrow_mut() += 1);

        book.add_recipe("a", "m").unwrap();
        assert_eq!(*first.borrow(), 0);
        assert_eq!(*second.borrow(), 1);
    }

    /// Persistence wrapper that records every saved value, in order.
    #[derive(Clone, Default)]
    struct CountingStore {
        inner: MemoryStore,
        writes: Rc<RefCell<Vec<String>>>,
    }

    impl Persistence for CountingStore {
        fn load(&self, key: &str) -> Option<String> {
            self.inner.load(key)
        }

        fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.writes.borrow_mut().push(value.to_string());
            self.inner.save(key, value)
        }
    }

    #[test]
    fn each_mutation_writes_the_full_post_mutation_state_once() {
        let storage = CountingStore::default();
        let writes = Rc::clone(&storage.writes);
        let inner = storage.inner.clone();
        let notified = Rc::new(RefCell::new(0));

        let mut book = RecipeBook::open(storage);
        let calls = Rc::clone(&notified);
        book.set_observer(move |_| *calls.borrow_mut() += 1);

        book.add_recipe("a", "one").unwrap();
        assert_eq!(writes.borrow().len(), 1);
        assert_eq!(*notified.borrow(), 1);

        book.delete_recipe(1).unwrap();
        assert_eq!(writes.borrow().len(), 2);
        assert_eq!(*notified.borrow(), 2);

        // The last write is the state the observer saw.
        let reopened = RecipeBook::open(inner);
        assert_eq!(reopened.recipes(), book.recipes());
    }

    /// Persistence whose writes always fail.
    #[derive(Clone, Default)]
    struct FailingStore;

    impl Persistence for FailingStore {
        fn load(&self, _key: &str) -> Option<String> {
            None
        }

        fn save(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed {
                key: key.to_string(),
            })
        }
    }

    #[test]
    fn failed_saves_keep_the_mutation_and_still_notify() {
        let notified = Rc::new(RefCell::new(0));
        let mut book = RecipeBook::open(FailingStore);
        let calls = Rc::clone(&notified);
        book.set_observer(move |_| *calls.borrow_mut() += 1);

        let result = book.add_recipe("a", "one");
        assert!(matches!(result, Err(StorageError::WriteFailed { .. })));
        assert_eq!(book.recipes().len(), 1);
        assert_eq!(*notified.borrow(), 1);
    }

    #[test]
    fn books_at_different_keys_do_not_collide() {
        let storage = MemoryStore::new();
        let mut breakfast = RecipeBook::open_at(storage.clone(), "breakfast");
        let mut dinner = RecipeBook::open_at(storage.clone(), "dinner");
        breakfast.add_recipe("eggs", "scramble").unwrap();
        dinner.add_recipe("steak", "grill").unwrap();

        let reopened = RecipeBook::open_at(storage, "breakfast");
        assert_eq!(reopened.recipes().len(), 1);
        assert_eq!(reopened.recipes()[0].ingredients, vec!["eggs"]);
    }

    #[test]
    fn config_roundtrips_through_storage() {
        let storage = MemoryStore::new();

        // Default config when nothing is stored.
        assert_eq!(BookConfig::load(&storage), BookConfig::default());
        assert_eq!(BookConfig::default().storage.key, "recipes");

        let mut config = BookConfig::default();
        config.storage.key = "pantry".to_string();
        config.seed.sample_recipes = true;
        config.save(&storage).unwrap();

        let loaded = BookConfig::load(&storage);
        assert_eq!(loaded.storage.key, "pantry");
        assert!(loaded.seed.sample_recipes);
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let storage = MemoryStore::new();
        storage.save(BookConfig::filename(), "not [ valid toml").unwrap();

        assert_eq!(BookConfig::load(&storage), BookConfig::default());
    }

    #[test]
    fn configured_key_selects_the_record_slot() {
        let storage = MemoryStore::new();
        let mut config = BookConfig::default();
        config.storage.key = "pantry".to_string();
        config.save(&storage).unwrap();

        let mut book = RecipeBook::open_configured(storage.clone());
        book.add_recipe("a", "m").unwrap();

        assert!(storage.load("pantry").is_some());
        assert!(storage.load("recipes").is_none());
    }

    #[test]
    fn seeding_fills_an_empty_book_once() {
        let storage = MemoryStore::new();
        let mut config = BookConfig::default();
        config.seed.sample_recipes = true;
        config.save(&storage).unwrap();

        let book = RecipeBook::open_configured(storage.clone());
        assert_eq!(book.recipes().len(), 2);
        assert_eq!(book.recipes()[0].ingredients, vec!["chilli", "garlic", "rice"]);

        // A reopened, already-populated book is not reseeded.
        let reopened = RecipeBook::open_configured(storage);
        assert_eq!(reopened.recipes().len(), 2);
    }

    #[test]
    fn seeding_is_off_by_default() {
        let book = RecipeBook::open_configured(MemoryStore::new());
        assert!(book.is_empty());
    }
}
