//! Post-generation operations on a [`PackingList`].
//!
//! Every mutation returns a new list and leaves the receiver untouched.
//! `updated_at` is refreshed by every call, including calls that match no item.

use crate::{
    EntityIdType, ItemError, PackingCategory, PackingItem, PackingItemId, PackingList,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Shallow partial update for a single item. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub category: Option<PackingCategory>,
    pub checked: Option<bool>,
    pub essential: Option<bool>,
    pub quantity: Option<u32>,
    pub weight: Option<Option<u32>>,
}

impl ItemPatch {
    pub fn checked(checked: bool) -> Self {
        Self {
            checked: Some(checked),
            ..Self::default()
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_category(mut self, category: PackingCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_weight(mut self, grams: Option<u32>) -> Self {
        self.weight = Some(grams);
        self
    }

    fn validate(&self) -> Result<(), ItemError> {
        if self.quantity == Some(0) {
            return Err(ItemError::ZeroQuantity);
        }
        if matches!(&self.name, Some(name) if name.trim().is_empty()) {
            return Err(ItemError::EmptyName);
        }
        Ok(())
    }

    fn apply_to(&self, item: &mut PackingItem) {
        if let Some(name) = &self.name {
            item.name = name.trim().to_string();
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(checked) = self.checked {
            item.checked = checked;
        }
        if let Some(essential) = self.essential {
            item.essential = essential;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(weight) = self.weight {
            item.weight = weight;
        }
    }
}

/// Checked-off progress over the whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingProgress {
    pub total: usize,
    pub checked: usize,
    /// Rounded to the nearest whole percent; 0 for an empty list.
    pub percent: u8,
}

impl PackingList {
    pub fn item(&self, item_id: PackingItemId) -> Option<&PackingItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// First item with exactly this name.
    pub fn find_by_name(&self, name: &str) -> Option<&PackingItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Merge `patch` into the item with `item_id`. Unknown ids leave the items unchanged.
    pub fn update_item(&self, item_id: PackingItemId, patch: &ItemPatch) -> Result<Self, ItemError> {
        patch.validate()?;
        let mut next = self.touched();
        if let Some(item) = next.items.iter_mut().find(|item| item.id == item_id) {
            patch.apply_to(item);
        } else {
            tracing::debug!(list_id = %self.id, item_id = %item_id, "Update for unknown packing item");
        }
        Ok(next)
    }

    /// Flip the checked state of one item.
    pub fn toggle_item(&self, item_id: PackingItemId) -> Self {
        let mut next = self.touched();
        if let Some(item) = next.items.iter_mut().find(|item| item.id == item_id) {
            item.checked = !item.checked;
        }
        next
    }

    /// Append a traveler-defined item.
    ///
    /// Names are trimmed but not checked against existing items, so a custom
    /// item may share its name with a generated one.
    pub fn add_custom_item(&self, name: &str, category: PackingCategory) -> Result<Self, ItemError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ItemError::EmptyName);
        }
        let mut next = self.touched();
        next.items.push(PackingItem {
            id: PackingItemId::now_v7(),
            name: name.to_string(),
            category,
            checked: false,
            essential: false,
            quantity: 1,
            weight: None,
        });
        Ok(next)
    }

    pub fn remove_item(&self, item_id: PackingItemId) -> Self {
        let mut next = self.touched();
        next.items.retain(|item| item.id != item_id);
        next
    }

    pub fn progress(&self) -> PackingProgress {
        let total = self.items.len();
        let checked = self.items.iter().filter(|item| item.checked).count();
        let percent = if total == 0 {
            0
        } else {
            ((checked as f64 / total as f64) * 100.0).round() as u8
        };
        PackingProgress {
            total,
            checked,
            percent,
        }
    }

    /// Items grouped by category in display order. Empty groups are omitted.
    pub fn items_by_category(&self) -> Vec<(PackingCategory, Vec<&PackingItem>)> {
        PackingCategory::DISPLAY_ORDER
            .iter()
            .filter_map(|category| {
                let items: Vec<&PackingItem> = self
                    .items
                    .iter()
                    .filter(|item| item.category == *category)
                    .collect();
                (!items.is_empty()).then_some((*category, items))
            })
            .collect()
    }

    fn touched(&self) -> Self {
        let mut next = self.clone();
        next.updated_at = Utc::now().max(self.updated_at);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PackingListId, TripId};

    fn sample_item(name: &str, category: PackingCategory, checked: bool) -> PackingItem {
        PackingItem {
            id: PackingItemId::now_v7(),
            name: name.to_string(),
            category,
            checked,
            essential: true,
            quantity: 1,
            weight: None,
        }
    }

    fn sample_list() -> PackingList {
        let created = Utc::now() - chrono::Duration::minutes(5);
        PackingList {
            id: PackingListId::now_v7(),
            name: "Lisbon Trip".to_string(),
            trip_id: TripId::now_v7(),
            items: vec![
                sample_item("Passport", PackingCategory::Documents, false),
                sample_item("Socks", PackingCategory::Clothing, true),
                sample_item("Phone", PackingCategory::Electronics, false),
            ],
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let list = sample_list();
        let id = list.items[0].id;
        let once = list.toggle_item(id);
        assert!(once.item(id).unwrap().checked);
        let twice = once.toggle_item(id);
        assert!(!twice.item(id).unwrap().checked);
        assert_eq!(twice.items, list.items);
    }

    #[test]
    fn test_mutations_leave_original_untouched() {
        let list = sample_list();
        let snapshot = list.clone();
        let _ = list.toggle_item(list.items[0].id);
        let _ = list.remove_item(list.items[1].id);
        let _ = list.add_custom_item("Snorkel", PackingCategory::Activity).unwrap();
        assert_eq!(list, snapshot);
    }

    #[test]
    fn test_update_item_merges_only_given_fields() {
        let list = sample_list();
        let id = list.items[2].id;
        let patch = ItemPatch::checked(true).with_quantity(2);
        let next = list.update_item(id, &patch).unwrap();
        let item = next.item(id).unwrap();
        assert!(item.checked);
        assert_eq!(item.quantity, 2);
        assert_eq!(item.name, "Phone");
        assert!(item.essential);
        assert!(next.updated_at > list.updated_at);
    }

    #[test]
    fn test_update_item_sets_and_clears_weight() {
        let list = sample_list();
        let id = list.items[2].id;

        let weighed = list
            .update_item(id, &ItemPatch::default().with_weight(Some(350)))
            .unwrap();
        assert_eq!(weighed.item(id).unwrap().weight, Some(350));

        let untouched = weighed
            .update_item(id, &ItemPatch::checked(true))
            .unwrap();
        assert_eq!(untouched.item(id).unwrap().weight, Some(350));

        let cleared = untouched
            .update_item(id, &ItemPatch::default().with_weight(None))
            .unwrap();
        assert_eq!(cleared.item(id).unwrap().weight, None);
    }

    #[test]
    fn test_update_item_rejects_invalid_patch() {
        let list = sample_list();
        let id = list.items[0].id;
        assert_eq!(
            list.update_item(id, &ItemPatch::default().with_quantity(0)),
            Err(ItemError::ZeroQuantity)
        );
        assert_eq!(
            list.update_item(id, &ItemPatch::default().with_name("  ")),
            Err(ItemError::EmptyName)
        );
    }

    #[test]
    fn test_unknown_id_is_noop_but_bumps_updated_at() {
        let list = sample_list();
        let stranger = PackingItemId::now_v7();

        let removed = list.remove_item(stranger);
        assert_eq!(removed.items, list.items);
        assert!(removed.updated_at > list.updated_at);

        let updated = list.update_item(stranger, &ItemPatch::checked(true)).unwrap();
        assert_eq!(updated.items, list.items);
        assert!(updated.updated_at > list.updated_at);

        let toggled = list.toggle_item(stranger);
        assert_eq!(toggled.items, list.items);
    }

    #[test]
    fn test_add_custom_item_defaults_and_allows_duplicates() {
        let list = sample_list();
        let next = list
            .add_custom_item("  Passport ", PackingCategory::Documents)
            .unwrap();
        assert_eq!(next.items.len(), 4);
        let added = next.items.last().unwrap();
        assert_eq!(added.name, "Passport");
        assert!(!added.checked);
        assert!(!added.essential);
        assert_eq!(added.quantity, 1);
        assert_ne!(added.id, list.items[0].id);
        assert_eq!(
            next.items.iter().filter(|item| item.name == "Passport").count(),
            2
        );
    }

    #[test]
    fn test_add_custom_item_rejects_blank_name() {
        let list = sample_list();
        assert_eq!(
            list.add_custom_item("   ", PackingCategory::Clothing),
            Err(ItemError::EmptyName)
        );
    }

    #[test]
    fn test_remove_item() {
        let list = sample_list();
        let id = list.items[1].id;
        let next = list.remove_item(id);
        assert_eq!(next.items.len(), 2);
        assert!(next.item(id).is_none());
    }

    #[test]
    fn test_progress() {
        let list = sample_list();
        let progress = list.progress();
        assert_eq!(progress.total, 3);
        assert_eq!(progress.checked, 1);
        assert_eq!(progress.percent, 33);

        let mut empty = list.clone();
        empty.items.clear();
        assert_eq!(empty.progress().percent, 0);
    }

    #[test]
    fn test_items_by_category_uses_display_order() {
        let list = sample_list();
        let groups = list.items_by_category();
        let order: Vec<PackingCategory> = groups.iter().map(|(category, _)| *category).collect();
        assert_eq!(
            order,
            vec![
                PackingCategory::Clothing,
                PackingCategory::Electronics,
                PackingCategory::Documents,
            ]
        );
        assert!(groups.iter().all(|(_, items)| !items.is_empty()));
    }
}
