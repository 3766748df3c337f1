//! Grocery checklist state: the to-buy / have-in-hand partition.

use crate::recipe::Ingredient;

/// Two-way split of a recipe's deduplicated ingredients into "still to buy"
/// and "already in hand", toggled by name.
///
/// Membership is by name: toggling a name moves every entry that shares it,
/// so the two sides always reconstruct the seeded set exactly. Re-created
/// from scratch whenever a new recipe arrives.
#[derive(Debug, Clone)]
pub struct GroceryPartition {
    /// The seeded ingredient set. Amounts and units are recovered from here
    /// when an item is marked needed again, not reconstructed.
    all: Vec<Ingredient>,
    to_buy: Vec<Ingredient>,
    have_in_hand: Vec<String>,
}

impl GroceryPartition {
    /// Seed the partition: every ingredient starts out to-buy.
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        Self {
            to_buy: ingredients.clone(),
            all: ingredients,
            have_in_hand: Vec::new(),
        }
    }

    /// Mark `name` as already in hand, moving every matching entry out of
    /// the to-buy list. Silent no-op when the name is not currently to-buy.
    pub fn mark_have(&mut self, name: &str) {
        if !self.to_buy.iter().any(|i| i.name == name) {
            return;
        }
        self.to_buy.retain(|i| i.name != name);
        self.have_in_hand.push(name.to_string());
    }

    /// Mark `name` as needed again, restoring every original entry with its
    /// amount and unit from the seeded set. Silent no-op when the name is
    /// not currently in hand.
    pub fn mark_need(&mut self, name: &str) {
        let Some(pos) = self.have_in_hand.iter().position(|n| n == name) else {
            return;
        };
        self.have_in_hand.remove(pos);
        self.to_buy
            .extend(self.all.iter().filter(|i| i.name == name).cloned());
    }

    /// Ingredients still to buy.
    pub fn to_buy(&self) -> &[Ingredient] {
        &self.to_buy
    }

    /// Names already in hand.
    pub fn have_in_hand(&self) -> &[String] {
        &self.have_in_hand
    }

    /// Whether `name` is currently marked as in hand.
    pub fn is_in_hand(&self, name: &str) -> bool {
        self.have_in_hand.iter().any(|n| n == name)
    }

    /// The full seeded ingredient set, for rendering the checklist.
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str, amount: f64, unit: &str) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            amount,
            unit: unit.to_string(),
        }
    }

    fn seeded() -> GroceryPartition {
        GroceryPartition::new(vec![
            ingredient("flour", 2.0, "cups"),
            ingredient("butter", 8.0, "oz"),
            ingredient("salt", 1.0, "tsp"),
        ])
    }

    /// Sorted multiset of names across both sides of the partition.
    fn name_multiset(partition: &GroceryPartition) -> Vec<String> {
        let mut names: Vec<String> = partition
            .to_buy()
            .iter()
            .map(|i| i.name.clone())
            .chain(partition.have_in_hand().iter().flat_map(|name| {
                partition
                    .ingredients()
                    .iter()
                    .filter(move |i| &i.name == name)
                    .map(|i| i.name.clone())
            }))
            .collect();
        names.sort();
        names
    }

    fn seeded_names(partition: &GroceryPartition) -> Vec<String> {
        let mut names: Vec<String> = partition
            .ingredients()
            .iter()
            .map(|i| i.name.clone())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn everything_starts_to_buy() {
        let partition = seeded();
        assert_eq!(partition.to_buy().len(), 3);
        assert!(partition.have_in_hand().is_empty());
    }

    #[test]
    fn mark_have_moves_the_middle_ingredient() {
        let mut partition = seeded();
        partition.mark_have("butter");
        assert_eq!(partition.have_in_hand(), ["butter"]);
        let to_buy: Vec<&str> = partition.to_buy().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(to_buy, ["flour", "salt"]);
    }

    #[test]
    fn mark_need_restores_the_original_amount_and_unit() {
        let mut partition = seeded();
        partition.mark_have("butter");
        partition.mark_need("butter");

        let butter = partition
            .to_buy()
            .iter()
            .find(|i| i.name == "butter")
            .expect("butter back in the to-buy list");
        assert_eq!(butter.amount, 8.0);
        assert_eq!(butter.unit, "oz");
        assert_eq!(partition.to_buy().len(), 3);
        assert!(partition.have_in_hand().is_empty());
    }

    #[test]
    fn unknown_names_are_no_ops() {
        let mut partition = seeded();
        partition.mark_have("saffron");
        partition.mark_need("saffron");
        assert_eq!(partition.to_buy().len(), 3);
        assert!(partition.have_in_hand().is_empty());
    }

    #[test]
    fn repeated_marks_do_not_duplicate() {
        let mut partition = seeded();
        partition.mark_have("flour");
        partition.mark_have("flour");
        assert_eq!(partition.have_in_hand(), ["flour"]);
        partition.mark_need("flour");
        partition.mark_need("flour");
        assert_eq!(partition.to_buy().len(), 3);
    }

    #[test]
    fn partition_invariant_holds_under_arbitrary_toggles() {
        let mut partition = seeded();
        let expected = seeded_names(&partition);

        for name in ["butter", "flour", "butter", "nonsense", "salt", "flour"] {
            partition.mark_have(name);
            assert_eq!(name_multiset(&partition), expected);
        }
        for name in ["flour", "salt", "flour", "butter", "nonsense"] {
            partition.mark_need(name);
            assert_eq!(name_multiset(&partition), expected);
        }
    }

    #[test]
    fn name_sharing_entries_move_together() {
        let mut partition = GroceryPartition::new(vec![
            ingredient("sugar", 1.0, "cup"),
            ingredient("sugar", 2.0, "tbsp"),
            ingredient("egg", 2.0, ""),
        ]);

        partition.mark_have("sugar");
        assert_eq!(partition.to_buy().len(), 1);
        assert_eq!(partition.have_in_hand(), ["sugar"]);

        partition.mark_need("sugar");
        assert_eq!(partition.to_buy().len(), 3);
        let amounts: Vec<f64> = partition
            .to_buy()
            .iter()
            .filter(|i| i.name == "sugar")
            .map(|i| i.amount)
            .collect();
        assert_eq!(amounts, [1.0, 2.0]);
    }

    #[test]
    fn round_trip_is_idempotent_on_membership() {
        let mut partition = seeded();
        partition.mark_have("salt");
        partition.mark_need("salt");
        partition.mark_have("salt");

        assert_eq!(partition.have_in_hand(), ["salt"]);
        assert!(partition.to_buy().iter().all(|i| i.name != "salt"));
        assert_eq!(partition.to_buy().len(), 2);
    }
}
