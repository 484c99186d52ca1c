use contracts::domain::common::AggregateRoot;

use crate::shared::error::AppError;

pub fn insert<A: AggregateRoot>(items: &mut Vec<A>, item: A) -> A::Id {
    let id = item.id();
    items.push(item);
    id
}

/// Replace the stored item with the same id; `false` when absent
pub fn replace<A: AggregateRoot>(items: &mut [A], item: A) -> bool {
    match items.iter_mut().find(|x| x.id() == item.id()) {
        Some(slot) => {
            *slot = item;
            true
        }
        None => false,
    }
}

pub fn find<A: AggregateRoot + Clone>(items: &[A], id: A::Id) -> Option<A> {
    items.iter().find(|x| x.id() == id).cloned()
}

pub fn contains<A: AggregateRoot>(items: &[A], id: A::Id) -> bool {
    items.iter().any(|x| x.id() == id)
}

/// Copy of the registry ordered by code
pub fn sorted_by_code<A: AggregateRoot + Clone>(items: &[A]) -> Vec<A> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| a.code().cmp(b.code()));
    sorted
}

pub fn not_found<A: AggregateRoot>(id: &str) -> AppError {
    AppError::NotFound(format!("{} {} not found", A::element_name(), id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_vendor::aggregate::{Vendor, VendorDto};

    fn vendor(name: &str, seq: usize) -> Vendor {
        Vendor::new_for_insert(
            &VendorDto {
                name: name.into(),
                ..Default::default()
            },
            seq,
        )
    }

    #[test]
    fn sorted_by_code_orders_by_generated_code() {
        let items = vec![vendor("Gamma", 3), vendor("Alpha", 1), vendor("Beta", 2)];
        let names: Vec<_> = sorted_by_code(&items).into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn replace_only_touches_matching_id() {
        let mut items = vec![vendor("Alpha", 1)];
        let mut changed = items[0].clone();
        changed.name = "Alpha IP".into();
        assert!(replace(&mut items, changed));
        assert_eq!(items[0].name, "Alpha IP");

        assert!(!replace(&mut items, vendor("Other", 2)));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn find_and_contains_use_the_record_id() {
        let mut items = Vec::new();
        let id = insert(&mut items, vendor("Alpha", 1));
        assert!(contains(&items, id));
        assert_eq!(find(&items, id).map(|v| v.name), Some("Alpha".to_string()));
        assert!(!contains(&items, vendor("Beta", 2).id));
    }

    #[test]
    fn not_found_names_the_record_kind() {
        match not_found::<Vendor>("42") {
            AppError::NotFound(message) => assert_eq!(message, "Vendor 42 not found"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
