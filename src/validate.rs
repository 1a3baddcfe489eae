//! Boundary validation for inventory snapshots.
//!
//! The menu pipeline assumes well-formed input; callers feeding data from
//! storage or a request body gate it through these checks first.

use crate::error::InventoryError;
use crate::types::InventoryItem;

/// Validate a single inventory item.
pub fn validate_item(item: &InventoryItem) -> Result<(), InventoryError> {
    if item.name.trim().is_empty() {
        return Err(InventoryError::EmptyName { id: item.id });
    }
    if !item.qty.is_finite() {
        return Err(InventoryError::NonFiniteQty {
            name: item.name.clone(),
        });
    }
    if item.qty < 0.0 {
        return Err(InventoryError::NegativeQty {
            name: item.name.clone(),
            qty: item.qty,
        });
    }
    Ok(())
}

/// Validate every item in a snapshot, failing on the first bad entry.
pub fn validate_snapshot(inventory: &[InventoryItem]) -> Result<(), InventoryError> {
    for item in inventory {
        validate_item(item)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::types::Category;

    fn item(name: &str, qty: f64) -> InventoryItem {
        InventoryItem {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: Category::Other,
            qty,
            unit: "个".to_string(),
            expires_at: None,
            note: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_well_formed_item_passes() {
        assert!(validate_item(&item("鸡蛋", 2.0)).is_ok());
        assert!(validate_item(&item("牛奶", 0.0)).is_ok());
    }

    #[test]
    fn test_rejects_blank_name() {
        let err = validate_item(&item("   ", 1.0)).unwrap_err();
        assert!(matches!(err, InventoryError::EmptyName { .. }));
    }

    #[test]
    fn test_rejects_negative_qty() {
        let err = validate_item(&item("鸡蛋", -1.0)).unwrap_err();
        assert!(matches!(err, InventoryError::NegativeQty { qty, .. } if qty == -1.0));
    }

    #[test]
    fn test_rejects_non_finite_qty() {
        assert!(matches!(
            validate_item(&item("鸡蛋", f64::NAN)).unwrap_err(),
            InventoryError::NonFiniteQty { .. }
        ));
        assert!(matches!(
            validate_item(&item("鸡蛋", f64::INFINITY)).unwrap_err(),
            InventoryError::NonFiniteQty { .. }
        ));
    }

    #[test]
    fn test_snapshot_fails_on_first_bad_entry() {
        let snapshot = vec![item("鸡蛋", 2.0), item("", 1.0), item("牛奶", -3.0)];
        let err = validate_snapshot(&snapshot).unwrap_err();
        assert!(matches!(err, InventoryError::EmptyName { .. }));
    }

    #[test]
    fn test_empty_snapshot_is_valid() {
        assert!(validate_snapshot(&[]).is_ok());
    }
}
