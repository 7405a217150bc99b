use crate::cell::Cell;
use crate::record::Record;

/// Finds the record whose identifier column ([`Record::ID_KEY`]) loosely equals `id`.
///
/// This is a plain linear scan. Identifiers are unique per sheet, so the first
/// match is the only one. `None` is not an error; callers pick their own
/// fallback.
pub fn find_by_id<'a, R: Record>(records: &'a [R], id: &Cell) -> Option<&'a R> {
    records.iter().find(|record| record.id().loosely_eq(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Case;

    fn case(id: Cell, name: &str) -> Case {
        Case {
            id,
            name: Some(name.into()),
            brand: None,
            color: None,
            notes: None,
        }
    }

    #[test]
    fn finds_across_string_and_number_ids() {
        let cases = vec![case(Cell::from(1u64), "Tofu60"), case(Cell::from("2"), "Bakeneko")];

        let found = find_by_id(&cases, &Cell::from("1")).unwrap();
        assert_eq!(found.name, Some("Tofu60".into()));

        let found = find_by_id(&cases, &Cell::from(2u64)).unwrap();
        assert_eq!(found.name, Some("Bakeneko".into()));
    }

    #[test]
    fn absent_when_nothing_matches() {
        let cases = vec![case(Cell::from(1u64), "Tofu60")];
        assert!(find_by_id(&cases, &Cell::from(9u64)).is_none());
        assert!(find_by_id(&cases, &Cell::from("")).is_none());
        assert!(find_by_id::<Case>(&[], &Cell::from(1u64)).is_none());
    }
}
